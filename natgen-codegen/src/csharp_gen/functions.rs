// Per-function emission: declarations, overloads, and the concrete body.
//
// Body shape is fixed: lazy pointer bind, pre-call marshaling in declared
// order, the call (success slot first), post-call marshaling in declared
// order, success check, return conversion.

use crate::marshal::{plan_param, plan_return};
use crate::naming::{arg_name, escape_reserved, first_char_to_upper, fn_field_name};
use crate::overloads;
use crate::type_map::{map_type, Boundary};
use crate::typedef::TypeDefFunction;

use super::docs::emit_docs;

/// The unmanaged function pointer type for a native. The leading `bool*`
/// is the success flag slot every native receives first.
pub fn unmanaged_delegate_type(func: &TypeDefFunction) -> String {
    let mut params = String::new();
    for param in &func.params {
        params.push_str(&map_type(param.native_type, param.is_ref, Boundary::Native));
        params.push_str(", ");
    }
    let ret = map_type(func.return_type.primary(), false, Boundary::Native);
    format!("delegate* unmanaged[Cdecl]<bool*, {params}{ret}>")
}

/// Canonical managed signature. Interface declarations escape reserved
/// parameter names; the concrete implementation renames every parameter
/// with a `_` prefix so derived locals cannot collide.
fn canonical_signature(func: &TypeDefFunction, escaped: bool) -> String {
    let method_name = first_char_to_upper(&func.name);
    let return_type = map_type(func.return_type.primary(), false, Boundary::Managed);
    let mut sig = format!("{return_type} {method_name}(");
    for (i, param) in func.params.iter().enumerate() {
        let pname = if escaped {
            arg_name(&param.name)
        } else {
            escape_reserved(&param.name)
        };
        sig.push_str(&format!(
            "{} {pname}",
            map_type(param.native_type, param.is_ref, Boundary::Managed)
        ));
        if i + 1 < func.params.len() {
            sig.push_str(", ");
        }
    }
    sig.push(')');
    sig
}

/// Emit the interface declarations for a function: every overload, then the
/// canonical signature, each preceded by its documentation block.
pub fn emit_declarations(func: &TypeDefFunction, documentation: bool) -> String {
    let mut out = String::new();
    let docs = if documentation { emit_docs(func) } else { String::new() };

    for overload in overloads::expand(func) {
        out.push_str(&docs);
        out.push_str(&format!("\t\t{};\n", overload.declaration));
    }

    out.push_str(&docs);
    out.push_str(&format!("\t\t{};\n", canonical_signature(func, false)));
    out
}

/// Emit the concrete implementation: overload forwarders plus the canonical
/// body performing the native call.
pub fn emit_definition(func: &TypeDefFunction) -> String {
    let mut out = String::new();

    for overload in overloads::expand(func) {
        out.push_str(&format!(
            "\t\tpublic {} => {}\n",
            overload.declaration, overload.forwarding
        ));
    }

    let field = fn_field_name(&func.name);
    let delegate_type = unmanaged_delegate_type(func);
    let hash = func.hash;

    out.push_str(&format!("\t\tpublic {}\n", canonical_signature(func, true)));
    out.push_str("\t\t{\n");
    out.push_str("\t\t\tunsafe {\n");
    out.push_str(&format!(
        "\t\t\t\tif ({field} == null) {field} = ({delegate_type}) funcTable[{hash}UL];\n"
    ));
    out.push_str("\t\t\t\tvar success = false;\n");

    let plans: Vec<_> = func.params.iter().map(plan_param).collect();
    for plan in &plans {
        for line in &plan.pre_call {
            out.push_str(&format!("\t\t\t\t{line}\n"));
        }
    }

    let return_plan = plan_return(func.return_type.primary());
    let mut call = String::from("\t\t\t\t");
    if return_plan.bind_result {
        call.push_str("var result = ");
    }
    call.push_str(&format!("{field}(&success"));
    for plan in &plans {
        call.push_str(", ");
        call.push_str(&plan.call_arg);
    }
    call.push_str(");\n");
    out.push_str(&call);

    for plan in &plans {
        for line in &plan.post_call {
            out.push_str(&format!("\t\t\t\t{line}\n"));
        }
    }

    out.push_str("\t\t\t\tif (!success) throw new Exception(\"Native execution failed\");\n");

    for line in &return_plan.post_call {
        out.push_str(&format!("\t\t\t\t{line}\n"));
    }

    out.push_str("\t\t\t}\n");
    out.push_str("\t\t}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::NativeType;
    use crate::typedef::{ReturnType, TypeDefParam};

    fn func(
        name: &str,
        hash: u64,
        params: Vec<(&str, NativeType, bool)>,
        ret: NativeType,
    ) -> TypeDefFunction {
        TypeDefFunction {
            name: name.to_string(),
            hash,
            params: params
                .into_iter()
                .map(|(n, t, r)| TypeDefParam {
                    name: n.to_string(),
                    native_type: t,
                    is_ref: r,
                    description: None,
                })
                .collect(),
            return_type: ReturnType {
                native_types: vec![ret],
                description: None,
            },
            description: None,
        }
    }

    #[test]
    fn test_delegate_type_success_slot_first() {
        let f = func(
            "setX",
            0x1,
            vec![
                ("entity", NativeType::Entity, false),
                ("value", NativeType::Float, false),
            ],
            NativeType::Void,
        );
        assert_eq!(
            unmanaged_delegate_type(&f),
            "delegate* unmanaged[Cdecl]<bool*, uint, float, void>"
        );
    }

    #[test]
    fn test_delegate_type_native_representations() {
        let f = func(
            "check",
            0x2,
            vec![
                ("label", NativeType::String, true),
                ("flag", NativeType::Boolean, false),
            ],
            NativeType::Boolean,
        );
        assert_eq!(
            unmanaged_delegate_type(&f),
            "delegate* unmanaged[Cdecl]<bool*, nint*, byte, byte>"
        );
    }

    // Scenario: one eligible handle parameter yields one wrapped-handle
    // overload plus the canonical declaration.
    #[test]
    fn test_set_x_declarations() {
        let f = func(
            "setX",
            0x1,
            vec![
                ("entity", NativeType::Entity, false),
                ("value", NativeType::Float, false),
            ],
            NativeType::Void,
        );
        let decls = emit_declarations(&f, true);
        assert_eq!(
            decls,
            "\t\tvoid SetX(IEntity entity, float value);\n\
             \t\tvoid SetX(uint entity, float value);\n"
        );

        let def = emit_definition(&f);
        assert!(def.contains("\t\tpublic void SetX(IEntity entity, float value) => SetX(entity.ScriptId, value);\n"));
        assert!(def.contains("\t\tpublic void SetX(uint _entity, float _value)\n"));
        assert!(def.contains("if (fn__setX == null) fn__setX = (delegate* unmanaged[Cdecl]<bool*, uint, float, void>) funcTable[1UL];"));
        assert!(def.contains("fn__setX(&success, _entity, _value);"));
    }

    // Scenario: string return is read back and freed exactly once, with the
    // success check before the conversion; no buffer is allocated pre-call.
    #[test]
    fn test_get_label_string_return() {
        let f = func(
            "getLabel",
            0x2,
            vec![("entity", NativeType::Entity, false)],
            NativeType::String,
        );
        let def = emit_definition(&f);
        assert!(def.contains("var result = fn__getLabel(&success, _entity);"));
        assert!(!def.contains("StringToHGlobalUtf8"));

        let success_check = def
            .find("if (!success) throw new Exception(\"Native execution failed\");")
            .unwrap();
        let conversion = def.find("var strResult = Marshal.PtrToStringUTF8(result);").unwrap();
        assert!(success_check < conversion);

        let frees = def.matches("freeString(result);").count();
        assert_eq!(frees, 1);
        assert!(def.contains("return strResult;"));
    }

    // Scenario: by-reference boolean out-param with void return — byte shim
    // both ways, no return handling.
    #[test]
    fn test_ref_bool_void_return() {
        let f = func(
            "getStatus",
            0x3,
            vec![("enabled", NativeType::Boolean, true)],
            NativeType::Void,
        );
        let def = emit_definition(&f);
        assert!(def.contains("var ref_enabled = (byte) (_enabled ? 1 : 0);"));
        assert!(def.contains("fn__getStatus(&success, &ref_enabled);"));
        assert!(def.contains("_enabled = ref_enabled == 0 ? false : true;"));
        assert!(!def.contains("var result"));
        assert!(!def.contains("return"));
    }

    #[test]
    fn test_marshaling_order_matches_declaration_order() {
        let f = func(
            "describe",
            0x4,
            vec![
                ("name", NativeType::String, true),
                ("count", NativeType::Int, true),
            ],
            NativeType::Void,
        );
        let def = emit_definition(&f);
        // Pre-call: string setup before the int slot copy.
        assert!(def.find("var ptr_name").unwrap() < def.find("var ref_count").unwrap());
        // Post-call: string read-back before the int copy-back.
        assert!(
            def.find("_name = Marshal.PtrToStringUTF8").unwrap()
                < def.find("_count = ref_count;").unwrap()
        );
        // Success check follows all parameter post-call statements.
        assert!(
            def.find("_count = ref_count;").unwrap()
                < def.find("if (!success) throw").unwrap()
        );
    }
}
