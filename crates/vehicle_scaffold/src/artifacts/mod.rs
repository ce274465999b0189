//! On-disk artifacts
//!
//! Three independent producers: the input binding document, the component
//! source template pair, and the setup guide. Each one catches its own write
//! failure, logs the cause, and reports a boolean. A failure never undoes an
//! artifact written before it.

pub mod input_bindings;
pub mod setup_guide;
pub mod source_templates;

pub use input_bindings::{InputBinding, InputBindingDocument, InputDevice};

use crate::config::{ScaffoldConfig, TemplateSettings};
use crate::error::ScaffoldError;
use crate::report::RunContext;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A named file to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Label used in logs and errors
    pub label: &'static str,
    /// Absolute target path
    pub path: PathBuf,
    /// Full file contents
    pub contents: String,
}

impl Artifact {
    /// Write this artifact, see [`write_atomic`]
    pub fn write(&self) -> Result<(), ScaffoldError> {
        write_atomic(&self.path, &self.contents).map_err(|source| ScaffoldError::ArtifactWriteFailed {
            artifact: self.label.to_string(),
            path: self.path.clone(),
            source,
        })
    }
}

/// Write a file so readers see either the old or the new contents.
///
/// Missing parent directories are created. The contents go to a sibling
/// temporary file that is then renamed over the target, and removed again if
/// either the write or the rename fails.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut tmp_name = path.file_name().map(OsString::from).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    let written = fs::write(&tmp, contents).and_then(|()| fs::rename(&tmp, path));
    if written.is_err() {
        // A partial temporary file is never left next to the target
        let _ = fs::remove_file(&tmp);
    }
    written
}

/// Produces the scaffold's on-disk artifacts under a project root
pub struct ArtifactGenerator {
    root: PathBuf,
    templates: TemplateSettings,
    bindings_version: u32,
    bindings: Vec<InputBinding>,
}

impl ArtifactGenerator {
    /// Generator for a project root using the configured template settings
    pub fn new(root: impl Into<PathBuf>, config: &ScaffoldConfig) -> Self {
        Self {
            root: root.into(),
            templates: config.templates.clone(),
            bindings_version: config.bindings_version,
            bindings: input_bindings::vehicle_camera_bindings(),
        }
    }

    /// Replace the binding catalogue
    pub fn with_bindings(mut self, bindings: Vec<InputBinding>) -> Self {
        self.bindings = bindings;
        self
    }

    /// Path of the binding document
    pub fn bindings_path(&self) -> PathBuf {
        self.root.join(input_bindings::BINDINGS_PATH)
    }

    /// Paths of the header and implementation templates
    pub fn source_paths(&self) -> (PathBuf, PathBuf) {
        let class = self.templates.class_name();
        let dir = self.root.join(source_templates::COMPONENT_DIR);
        (dir.join(format!("{class}.h")), dir.join(format!("{class}.cpp")))
    }

    /// Path of the setup guide
    pub fn guide_path(&self) -> PathBuf {
        self.root.join(setup_guide::GUIDE_PATH)
    }

    /// Run all three producers in order
    pub fn generate_all(&self, context: &mut RunContext) {
        self.write_input_bindings(context);
        self.write_source_templates(context);
        self.write_setup_guide(context);
    }

    /// Write the input binding document
    pub fn write_input_bindings(&self, context: &mut RunContext) -> bool {
        log::info!("=== Creating Input Bindings ===");
        let path = self.bindings_path();
        context.artifacts.push(path.clone());

        let outcome = InputBindingDocument::new(self.bindings_version, self.bindings.clone())
            .and_then(|document| {
                let contents = document.to_json().map_err(|source| ScaffoldError::ArtifactWriteFailed {
                    artifact: "input bindings".to_string(),
                    path: path.clone(),
                    source,
                })?;
                Artifact {
                    label: "input bindings",
                    path: path.clone(),
                    contents,
                }
                .write()
            });

        Self::finish(context, "artifact:input_bindings", &[path], outcome)
    }

    /// Write the component header and implementation templates
    pub fn write_source_templates(&self, context: &mut RunContext) -> bool {
        log::info!("=== Creating Component Source Files ===");
        let pair = source_templates::render(&self.templates);
        let (header_path, source_path) = self.source_paths();
        context.artifacts.push(header_path.clone());
        context.artifacts.push(source_path.clone());

        let header = Artifact {
            label: "component header",
            path: header_path.clone(),
            contents: pair.header,
        };
        let source = Artifact {
            label: "component source",
            path: source_path.clone(),
            contents: pair.source,
        };
        let outcome = header.write().and_then(|()| source.write());

        Self::finish(context, "artifact:source_templates", &[header_path, source_path], outcome)
    }

    /// Write the setup guide
    pub fn write_setup_guide(&self, context: &mut RunContext) -> bool {
        log::info!("=== Creating README ===");
        let path = self.guide_path();
        context.artifacts.push(path.clone());

        let outcome = Artifact {
            label: "setup guide",
            path: path.clone(),
            contents: setup_guide::render(&self.templates),
        }
        .write();

        Self::finish(context, "artifact:setup_guide", &[path], outcome)
    }

    fn finish(
        context: &mut RunContext,
        step: &str,
        paths: &[PathBuf],
        outcome: Result<(), ScaffoldError>,
    ) -> bool {
        match &outcome {
            Ok(()) => {
                for path in paths {
                    log::info!("✓ Created: {}", path.display());
                }
            }
            Err(error) => log::warn!("✗ {error}"),
        }
        context.record(step, outcome.as_ref().map(|_| ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    #[test]
    fn test_write_atomic_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/file.txt");

        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!dir.path().join("a/b/file.txt.tmp").exists());
    }

    #[test]
    fn test_failed_write_leaves_no_temporary_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory at the target makes the final rename fail
        let path = dir.path().join("guide.md");
        fs::create_dir_all(path.join("occupied")).unwrap();

        assert!(write_atomic(&path, "contents").is_err());
        assert!(!dir.path().join("guide.md.tmp").exists());
        assert!(path.is_dir());
    }

    #[test]
    fn test_source_paths_use_component_class_name() {
        let generator = ArtifactGenerator::new("/project", &ScaffoldConfig::default());
        let (header, source) = generator.source_paths();

        let dir = Path::new("/project/Gem/Code/Source/Components");
        assert_eq!(header, dir.join("VehicleCombatCameraComponent.h"));
        assert_eq!(source, dir.join("VehicleCombatCameraComponent.cpp"));
    }

    #[test]
    fn test_all_artifacts_written() {
        let dir = tempfile::tempdir().unwrap();
        let generator = ArtifactGenerator::new(dir.path(), &ScaffoldConfig::default());
        let mut context = RunContext::new();

        generator.generate_all(&mut context);

        assert_eq!(context.artifacts.len(), 4);
        assert!(context.steps.iter().all(|s| s.success));
        for path in &context.artifacts {
            assert!(path.is_file(), "{} missing", path.display());
        }
        assert!(dir
            .path()
            .join("Gem/Code/Source/Components/VehicleCombatCameraComponent.h")
            .is_file());
    }

    #[test]
    fn test_blocked_directory_fails_only_that_artifact() {
        let dir = tempfile::tempdir().unwrap();
        // A plain file where the Config directory should be
        fs::write(dir.path().join("Config"), "not a directory").unwrap();
        let generator = ArtifactGenerator::new(dir.path(), &ScaffoldConfig::default());
        let mut context = RunContext::new();

        generator.generate_all(&mut context);

        let outcomes: Vec<_> = context.steps.iter().map(|s| (s.step.as_str(), s.success)).collect();
        assert_eq!(
            outcomes,
            vec![
                ("artifact:input_bindings", false),
                ("artifact:source_templates", true),
                ("artifact:setup_guide", true),
            ]
        );
        assert_eq!(context.steps[0].kind, Some(FailureKind::ArtifactWriteFailed));
        assert_eq!(context.artifacts.len(), 4);
    }

    #[test]
    fn test_duplicate_bindings_are_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut bindings = input_bindings::vehicle_camera_bindings();
        bindings.push(bindings[0].clone());
        let generator = ArtifactGenerator::new(dir.path(), &ScaffoldConfig::default()).with_bindings(bindings);
        let mut context = RunContext::new();

        assert!(!generator.write_input_bindings(&mut context));
        assert_eq!(context.steps[0].kind, Some(FailureKind::DuplicateBinding));
        assert!(!generator.bindings_path().exists());
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let generator = ArtifactGenerator::new(dir.path(), &ScaffoldConfig::default());

        generator.write_input_bindings(&mut RunContext::new());
        let first = fs::read(generator.bindings_path()).unwrap();
        generator.write_input_bindings(&mut RunContext::new());
        let second = fs::read(generator.bindings_path()).unwrap();

        assert_eq!(first, second);
    }
}
