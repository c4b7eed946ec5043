// Name conversion utilities for codegen.

/// Convert an UPPER_SNAKE native name to camelCase, preserving any leading
/// underscores (e.g., "_GET_LABEL_TEXT" -> "_getLabelText").
pub fn to_camel_case(name: &str) -> String {
    let underscores = name.len() - name.trim_start_matches('_').len();
    let trimmed = &name[underscores..];

    let mut result = String::with_capacity(name.len());
    result.push_str(&name[..underscores]);

    for (i, segment) in trimmed.split('_').filter(|s| !s.is_empty()).enumerate() {
        if i == 0 {
            result.push_str(&segment.to_ascii_lowercase());
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                result.push(first.to_ascii_uppercase());
                result.push_str(&chars.as_str().to_ascii_lowercase());
            }
        }
    }

    result
}

/// Uppercase the first character (method names: "getPlayerPed" -> "GetPlayerPed").
pub fn first_char_to_upper(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

const RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char",
    "checked", "class", "const", "continue", "decimal", "default", "delegate",
    "do", "double", "else", "enum", "event", "explicit", "extern", "false",
    "finally", "fixed", "float", "for", "foreach", "goto", "if", "implicit",
    "in", "int", "interface", "internal", "is", "lock", "long", "namespace",
    "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte",
    "sealed", "short", "sizeof", "stackalloc", "static", "string", "struct",
    "switch", "this", "throw", "true", "try", "typeof", "uint", "ulong",
    "unchecked", "unsafe", "ushort", "using", "virtual", "void", "volatile",
    "while",
];

/// Check if a name is a reserved C# keyword (case-insensitive, matching the
/// keyword list used by declaration sites).
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.iter().any(|k| name.eq_ignore_ascii_case(k))
}

/// Escape reserved C# keywords with the verbatim-identifier prefix.
/// Used at declaration sites (interface and overload signatures).
pub fn escape_reserved(name: &str) -> String {
    if is_reserved(name) {
        format!("@{name}")
    } else {
        name.to_string()
    }
}

/// Local argument name inside a concrete method body. The `_` prefix keeps
/// the name out of keyword territory and free for `ptr`/`ref` derivatives.
pub fn arg_name(name: &str) -> String {
    format!("_{name}")
}

/// Field name for a function's cached native pointer
/// (e.g., "getPlayerPed" -> "fn__getPlayerPed").
pub fn fn_field_name(name: &str) -> String {
    if name.starts_with('_') {
        format!("fn_{name}")
    } else {
        format!("fn__{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("GET_PLAYER_PED"), "getPlayerPed");
        assert_eq!(to_camel_case("SET_ENTITY_COORDS"), "setEntityCoords");
        assert_eq!(to_camel_case("_GET_LABEL_TEXT"), "_getLabelText");
        assert_eq!(to_camel_case("__SOME_NATIVE"), "__someNative");
        assert_eq!(to_camel_case("WAIT"), "wait");
    }

    #[test]
    fn test_first_char_to_upper() {
        assert_eq!(first_char_to_upper("getPlayerPed"), "GetPlayerPed");
        assert_eq!(first_char_to_upper("_getLabelText"), "_getLabelText");
        assert_eq!(first_char_to_upper(""), "");
    }

    #[test]
    fn test_escape_reserved() {
        assert_eq!(escape_reserved("object"), "@object");
        assert_eq!(escape_reserved("Event"), "@Event"); // case-insensitive match
        assert_eq!(escape_reserved("entity"), "entity");
    }

    #[test]
    fn test_fn_field_name() {
        assert_eq!(fn_field_name("getPlayerPed"), "fn__getPlayerPed");
        assert_eq!(fn_field_name("_getLabelText"), "fn__getLabelText");
    }
}
