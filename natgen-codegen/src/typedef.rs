// Processed typedef model: the emitter-facing view of the natives DB.

use crate::naming::to_camel_case;
use crate::schema::{NativeDb, NativeType, parse_hash};
use crate::CodegenError;

/// Everything the emitters consume: modules in schema order.
#[derive(Debug)]
pub struct TypeDef {
    pub modules: Vec<TypeDefModule>,
}

/// One module: a named, ordered collection of functions.
#[derive(Debug)]
pub struct TypeDefModule {
    pub name: String,
    pub functions: Vec<TypeDefFunction>,
}

#[derive(Debug)]
pub struct TypeDefFunction {
    /// camelCase name ("getPlayerPed"); leading underscores preserved.
    pub name: String,
    /// Stable native id used as the lookup key. Never recomputed.
    pub hash: u64,
    pub params: Vec<TypeDefParam>,
    pub return_type: ReturnType,
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct TypeDefParam {
    pub name: String,
    pub native_type: NativeType,
    pub is_ref: bool,
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct ReturnType {
    /// First entry is authoritative; extras are documentation-only legacy
    /// variants.
    pub native_types: Vec<NativeType>,
    pub description: Option<String>,
}

impl ReturnType {
    pub fn primary(&self) -> NativeType {
        self.native_types.first().copied().unwrap_or(NativeType::Void)
    }
}

/// Build the typedef from the raw DB, preserving module and function order.
pub fn build_typedef(db: &NativeDb) -> Result<TypeDef, CodegenError> {
    let mut modules = Vec::with_capacity(db.modules.len());

    for (module_name, natives) in &db.modules {
        let mut functions = Vec::with_capacity(natives.len());
        for (hash_key, native) in natives {
            let hash = parse_hash(hash_key).ok_or_else(|| CodegenError::BadHash {
                module: module_name.clone(),
                key: hash_key.clone(),
            })?;
            functions.push(TypeDefFunction {
                name: to_camel_case(&native.name),
                hash,
                params: native
                    .params
                    .iter()
                    .map(|p| TypeDefParam {
                        name: p.name.clone(),
                        native_type: p.native_type,
                        is_ref: p.is_ref,
                        description: p.description.clone().filter(|d| !d.is_empty()),
                    })
                    .collect(),
                return_type: ReturnType {
                    native_types: native.results.clone(),
                    description: native.results_description.clone().filter(|d| !d.is_empty()),
                },
                description: if native.comment.is_empty() {
                    None
                } else {
                    Some(native.comment.clone())
                },
            });
        }
        modules.push(TypeDefModule {
            name: module_name.clone(),
            functions,
        });
    }

    Ok(TypeDef { modules })
}
