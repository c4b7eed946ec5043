// natgen-codegen: reads a natives DB JSON, generates typed C# bindings
// with marshaling glue for the native call boundary.

pub mod schema;
pub mod typedef;
pub mod naming;
pub mod config;
pub mod type_map;
pub mod overloads;
pub mod marshal;
pub mod csharp_gen;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::NatgenConfig;
use crate::schema::NativeDb;

/// Generation-time errors. All are unrecoverable for the current run; no
/// partial output is written.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Covers unknown native type names too: the DB deserializer rejects
    /// any type string outside the closed `NativeType` enum.
    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid native hash key `{key}` in module {module}")]
    BadHash { module: String, key: String },
    #[error("output verification failed: {0}")]
    Verify(String),
}

/// Run the generate command. Main entry point for codegen.
pub fn run_generate(config_path: &Path) -> Result<(), CodegenError> {
    let config_str = std::fs::read_to_string(config_path).map_err(|e| CodegenError::Io {
        path: config_path.to_path_buf(),
        source: e,
    })?;
    let natgen_config: NatgenConfig =
        toml::from_str(&config_str).map_err(|e| CodegenError::Config {
            path: config_path.to_path_buf(),
            source: e,
        })?;
    let codegen = &natgen_config.codegen;

    // Resolve paths relative to the config file directory.
    let config_dir = config_path.parent().unwrap_or(Path::new("."));
    let natives_path = config_dir.join(&codegen.paths.natives_input);
    let out_path = config_dir.join(&codegen.paths.csharp_out);

    eprintln!("natgen: loading natives DB...");
    let db: NativeDb = {
        let data = std::fs::read_to_string(&natives_path).map_err(|e| CodegenError::Io {
            path: natives_path.clone(),
            source: e,
        })?;
        serde_json::from_str(&data).map_err(|e| CodegenError::Json {
            path: natives_path.clone(),
            source: e,
        })?
    };

    let typedef = typedef::build_typedef(&db)?;
    let function_count: usize = typedef.modules.iter().map(|m| m.functions.len()).sum();
    eprintln!(
        "  Loaded {} modules, {} natives",
        typedef.modules.len(),
        function_count
    );

    eprintln!("natgen: generating C# bindings...");
    let text = csharp_gen::generate(&typedef, codegen);

    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CodegenError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(&out_path, &text).map_err(|e| CodegenError::Io {
        path: out_path.clone(),
        source: e,
    })?;

    eprintln!("natgen: verifying output...");
    verify_output(&text, codegen, &out_path)?;

    eprintln!("natgen: done!");
    Ok(())
}

/// Verify codegen output integrity.
fn verify_output(
    text: &str,
    config: &config::CodegenConfig,
    out_path: &Path,
) -> Result<(), CodegenError> {
    let mut errors: Vec<String> = Vec::new();

    if text.is_empty() {
        errors.push("generated output is empty".to_string());
    }
    if !text.contains(&format!("interface {}", config.interface_name)) {
        errors.push(format!(
            "interface {} missing from output",
            config.interface_name
        ));
    }
    if !text.contains(&format!("class {}", config.class_name)) {
        errors.push(format!("class {} missing from output", config.class_name));
    }
    match std::fs::metadata(out_path) {
        Ok(m) if m.len() == 0 => errors.push(format!("output empty: {}", out_path.display())),
        Err(_) => errors.push(format!("output missing: {}", out_path.display())),
        _ => {}
    }

    if errors.is_empty() {
        eprintln!("  OK: {}", out_path.display());
        Ok(())
    } else {
        Err(CodegenError::Verify(errors.join("; ")))
    }
}
