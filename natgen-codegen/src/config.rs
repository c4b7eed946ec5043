// Configuration types for natgen, deserialized from natgen.config.toml.

use serde::Deserialize;

/// Top-level config file.
#[derive(Deserialize)]
pub struct NatgenConfig {
    pub codegen: CodegenConfig,
}

#[derive(Deserialize)]
pub struct CodegenConfig {
    pub paths: CodegenPaths,
    /// Emit XML documentation blocks for documented functions.
    #[serde(default = "default_true")]
    pub documentation: bool,
    /// Custom header lines, each emitted as a `//` comment before any module.
    #[serde(default)]
    pub header: Vec<String>,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_interface_name")]
    pub interface_name: String,
    #[serde(default = "default_class_name")]
    pub class_name: String,
}

#[derive(Deserialize)]
pub struct CodegenPaths {
    /// Natives DB JSON, relative to the config file directory.
    pub natives_input: String,
    /// Generated C# file path, relative to the config file directory.
    pub csharp_out: String,
}

fn default_true() -> bool {
    true
}

fn default_namespace() -> String {
    "AltV.Net.Client".to_string()
}

fn default_interface_name() -> String {
    "INatives".to_string()
}

fn default_class_name() -> String {
    "Natives".to_string()
}

/// Config with defaults for emitter tests.
#[cfg(test)]
pub fn test_config() -> CodegenConfig {
    CodegenConfig {
        paths: CodegenPaths {
            natives_input: "natives.json".to_string(),
            csharp_out: "Natives.cs".to_string(),
        },
        documentation: true,
        header: Vec::new(),
        namespace: default_namespace(),
        interface_name: default_interface_name(),
        class_name: default_class_name(),
    }
}
