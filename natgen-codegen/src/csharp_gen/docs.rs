// XML documentation block emission.

use crate::naming::escape_reserved;
use crate::typedef::TypeDefFunction;

/// Emit the `///` documentation block for a function, or an empty string
/// when there is nothing to document (no descriptions anywhere and at most
/// one return-type variant).
pub fn emit_docs(func: &TypeDefFunction) -> String {
    let no_docs = func.return_type.native_types.len() <= 1
        && func.description.is_none()
        && func.return_type.description.is_none()
        && func.params.iter().all(|p| p.description.is_none());
    if no_docs {
        return String::new();
    }

    let mut out = String::from("\t\t/// <summary>\n");
    if let Some(description) = &func.description {
        for line in description.split('\n') {
            let sanitized = line.replace("/*", "").replace("*/", "");
            out.push_str(&format!("\t\t/// {}\n", sanitized.trim()));
        }
    }
    out.push_str("\t\t/// </summary>\n");

    for param in &func.params {
        if let Some(description) = &param.description {
            out.push_str(&format!(
                "\t\t/// <param name=\"{}\">{}</param>\n",
                escape_reserved(&param.name),
                description
            ));
        }
    }

    if let Some(description) = &func.return_type.description {
        out.push_str(&format!("\t\t/// <returns>{description}</returns>\n"));
    }

    out
}
