//! Configuration system
//!
//! Configuration files are optional. Every field falls back to the values the
//! scaffold has always used, so an empty file and no file behave the same.

use std::path::{Path, PathBuf};

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// How the final pass/fail verdict of a run is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessPolicy {
    /// A run passes unless something escapes to the top level.
    /// Individual step failures are reported but tolerated.
    #[default]
    BestEffort,

    /// A run passes only if every recorded step succeeded.
    Strict,
}

/// Identifier and version literally substituted into the source templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Namespace wrapping the generated component
    pub namespace: String,

    /// Component base name; files are named `<name>Component.{h,cpp}`
    pub component_name: String,

    /// Type UUID of the component, braces included
    pub type_uuid: String,

    /// Serialization version written into the reflection code
    pub version: u32,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            namespace: "VehicleCombat".to_string(),
            component_name: "VehicleCombatCamera".to_string(),
            type_uuid: "{12345678-1234-1234-1234-123456789012}".to_string(),
            version: 1,
        }
    }
}

impl TemplateSettings {
    /// Full class name of the generated component
    pub fn class_name(&self) -> String {
        format!("{}Component", self.component_name)
    }
}

/// Top-level configuration for a scaffold run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Overrides the project root reported by the host
    pub project_root: Option<PathBuf>,

    /// Verdict policy used by [`crate::RunReport::passed`]
    pub success_policy: SuccessPolicy,

    /// Source template substitutions
    pub templates: TemplateSettings,

    /// Format version tag of the input binding document
    pub bindings_version: u32,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            project_root: None,
            success_policy: SuccessPolicy::default(),
            templates: TemplateSettings::default(),
            bindings_version: 1,
        }
    }
}

impl Config for ScaffoldConfig {}

impl ScaffoldConfig {
    /// Set the project root override
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    /// Set the verdict policy
    pub fn with_success_policy(mut self, policy: SuccessPolicy) -> Self {
        self.success_policy = policy;
        self
    }
}
