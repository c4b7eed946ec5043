// Overload expansion: wrapped-handle signatures for caller ergonomics.
//
// Parameters whose type has a wrapper interface (and that are not by
// reference) can accept the wrapper in place of the raw handle. Every
// non-canonical combination over those parameters becomes one overload
// that forwards to the canonical method via the wrapper's `.ScriptId`.

use crate::naming::{escape_reserved, first_char_to_upper};
use crate::type_map::{map_type, overload_interface, Boundary};
use crate::typedef::TypeDefFunction;

/// One derived overload: a declaration (no trailing `;`) and the forwarding
/// call it compiles down to (with trailing `;`).
#[derive(Debug, PartialEq, Eq)]
pub struct Overload {
    pub declaration: String,
    pub forwarding: String,
}

/// Enumerate all overloads for a function, in ascending bitmask order.
/// Bit i of the mask selects the wrapper type for the i-th eligible
/// parameter (in schema order). Mask 0 is the canonical signature and is
/// excluded; with k eligible parameters this yields 2^k - 1 overloads.
pub fn expand(func: &TypeDefFunction) -> Vec<Overload> {
    let eligible_count = func
        .params
        .iter()
        .filter(|p| overload_interface(p.native_type).is_some() && !p.is_ref)
        .count();
    if eligible_count == 0 {
        return Vec::new();
    }

    let method_name = first_char_to_upper(&func.name);
    let return_type = map_type(func.return_type.primary(), false, Boundary::Managed);

    let mut overloads = Vec::new();
    for mask in 1..=combination_count(eligible_count) {
        let mut decl = format!("{return_type} {method_name}(");
        let mut fwd = format!("{method_name}(");
        let mut bit = 0;

        for (i, param) in func.params.iter().enumerate() {
            let pname = escape_reserved(&param.name);
            let wrapper = overload_interface(param.native_type).filter(|_| !param.is_ref);

            match wrapper {
                Some(interface) => {
                    let wrapped = mask & (1u64 << bit) != 0;
                    bit += 1;
                    if wrapped {
                        decl.push_str(&format!("{interface} {pname}"));
                        fwd.push_str(&format!("{pname}.ScriptId"));
                    } else {
                        decl.push_str(&format!(
                            "{} {pname}",
                            map_type(param.native_type, false, Boundary::Managed)
                        ));
                        fwd.push_str(&pname);
                    }
                }
                None => {
                    decl.push_str(&format!(
                        "{} {pname}",
                        map_type(param.native_type, param.is_ref, Boundary::Managed)
                    ));
                    if param.is_ref {
                        fwd.push_str("ref ");
                    }
                    fwd.push_str(&pname);
                }
            }

            if i + 1 < func.params.len() {
                decl.push_str(", ");
                fwd.push_str(", ");
            }
        }

        decl.push(')');
        fwd.push_str(");");
        overloads.push(Overload {
            declaration: decl,
            forwarding: fwd,
        });
    }

    overloads
}

/// Number of non-canonical combinations for k eligible parameters
/// (2^k - 1), saturating instead of overflowing for absurdly wide
/// signatures.
fn combination_count(eligible: usize) -> u64 {
    if eligible >= u64::BITS as usize {
        return u64::MAX;
    }
    (1u64 << eligible) - 1
}
