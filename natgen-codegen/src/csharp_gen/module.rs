// Module emission: the interface surface and the concrete binding class.

use crate::config::CodegenConfig;
use crate::naming::fn_field_name;
use crate::typedef::TypeDefModule;

use super::functions::{emit_declarations, emit_definition, unmanaged_delegate_type};

/// Emit one module: the capability interface (every declaration in schema
/// order) and the binding class (one cached-pointer field per function,
/// constructor wiring, every body in schema order).
///
/// The pointer fields are bound lazily on first call with no locking;
/// concurrent first-use from multiple threads is a known limitation of the
/// emitted code.
pub fn emit_module(module: &TypeDefModule, config: &CodegenConfig) -> String {
    let mut out = String::with_capacity(module.functions.len() * 1024);
    let namespace = &config.namespace;
    let interface_name = &config.interface_name;
    let class_name = &config.class_name;

    out.push_str("// THIS IS AN AUTOGENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY.\n\n");
    out.push_str("using System.Numerics;\n");
    out.push_str("using System.Reflection;\n");
    out.push_str("using AltV.Net.Shared.Utils;\n");
    out.push_str("using AltV.Net.Client.Elements.Interfaces;\n");
    out.push_str("using System.Runtime.InteropServices;\n\n");
    out.push_str(&format!("namespace {namespace}\n{{\n"));

    // Capability surface.
    out.push_str(&format!("\tpublic unsafe interface {interface_name}\n\t{{\n"));
    for function in &module.functions {
        out.push_str(&emit_declarations(function, config.documentation));
    }
    out.push_str("\t}\n\n");

    // Concrete binding class.
    out.push_str(&format!(
        "\tpublic unsafe class {class_name} : {interface_name}\n\t{{\n"
    ));
    out.push_str("\t\tprivate Dictionary<ulong, IntPtr> funcTable;\n");
    out.push_str("\t\tprivate delegate* unmanaged[Cdecl]<nint, void> freeString;\n");
    for function in &module.functions {
        out.push_str(&format!(
            "\t\tprivate {} {};\n",
            unmanaged_delegate_type(function),
            fn_field_name(&function.name)
        ));
    }
    out.push('\n');
    out.push_str(&format!("\t\tpublic {class_name}(ILibrary library)\n\t\t{{\n"));
    out.push_str("\t\t\tfreeString = library.Shared.FreeString;\n");
    out.push_str("\t\t\tfuncTable = Marshal.PtrToStructure<FunctionTable>(library.Client.GetNativeFuncTable()).GetTable();\n");
    out.push_str("\t\t}\n\n");

    for function in &module.functions {
        out.push_str(&emit_definition(function));
        out.push('\n');
    }

    out.push_str("\t}\n");
    out.push_str("}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use crate::schema::NativeType;
    use crate::typedef::{ReturnType, TypeDefFunction, TypeDefParam};

    fn module() -> TypeDefModule {
        TypeDefModule {
            name: "PLAYER".to_string(),
            functions: vec![
                TypeDefFunction {
                    name: "getPlayerPed".to_string(),
                    hash: 0x43A66C31C68491C0,
                    params: vec![TypeDefParam {
                        name: "player".to_string(),
                        native_type: NativeType::Player,
                        is_ref: false,
                        description: None,
                    }],
                    return_type: ReturnType {
                        native_types: vec![NativeType::Ped],
                        description: None,
                    },
                    description: None,
                },
                TypeDefFunction {
                    name: "wait".to_string(),
                    hash: 0x2,
                    params: vec![],
                    return_type: ReturnType {
                        native_types: vec![NativeType::Void],
                        description: None,
                    },
                    description: None,
                },
            ],
        }
    }

    #[test]
    fn test_module_structure() {
        let text = emit_module(&module(), &test_config());
        assert!(text.starts_with("// THIS IS AN AUTOGENERATED FILE."));
        assert!(text.contains("namespace AltV.Net.Client\n{\n"));
        assert!(text.contains("\tpublic unsafe interface INatives\n\t{\n"));
        assert!(text.contains("\tpublic unsafe class Natives : INatives\n\t{\n"));
        assert!(text.contains("\t\tprivate Dictionary<ulong, IntPtr> funcTable;\n"));
        assert!(text.contains("\t\tprivate delegate* unmanaged[Cdecl]<nint, void> freeString;\n"));
        assert!(text.contains("\t\tpublic Natives(ILibrary library)\n"));
        assert!(text.contains("freeString = library.Shared.FreeString;"));
    }

    #[test]
    fn test_one_pointer_field_per_function() {
        let text = emit_module(&module(), &test_config());
        assert!(text.contains(
            "\t\tprivate delegate* unmanaged[Cdecl]<bool*, uint, uint> fn__getPlayerPed;\n"
        ));
        assert!(text.contains("\t\tprivate delegate* unmanaged[Cdecl]<bool*, void> fn__wait;\n"));
    }

    #[test]
    fn test_functions_keep_schema_order() {
        let text = emit_module(&module(), &test_config());
        assert!(text.find("GetPlayerPed").unwrap() < text.find("Wait").unwrap());
    }

    #[test]
    fn test_emission_is_idempotent() {
        let m = module();
        let cfg = test_config();
        assert_eq!(emit_module(&m, &cfg), emit_module(&m, &cfg));
    }
}
