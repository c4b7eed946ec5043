// C# code generation orchestrator.

pub mod docs;
pub mod functions;
pub mod module;

use crate::config::CodegenConfig;
use crate::typedef::TypeDef;

/// Generate the full output text: optional comment header, then every
/// module in schema order separated by one blank line. Pure text-in,
/// text-out; writing is the caller's concern.
pub fn generate(typedef: &TypeDef, config: &CodegenConfig) -> String {
    let mut out = String::new();

    if !config.header.is_empty() {
        for line in &config.header {
            out.push_str(&format!("//{line}\n"));
        }
        out.push('\n');
    }

    for m in &typedef.modules {
        out.push_str(&module::emit_module(m, config));
        out.push('\n');
    }

    out
}
