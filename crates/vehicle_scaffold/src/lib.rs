//! # Vehicle Scaffold
//!
//! One-shot scaffolding of a vehicle combat camera scene inside a host 3D
//! editor, plus the supporting files a developer needs to finish it.
//!
//! ## Features
//!
//! - **Scene Scaffold**: Five named entities with their components, properties
//!   and initial transforms, built from declarative data
//! - **Artifacts**: Input binding document, component source templates and a
//!   setup guide written under the project root
//! - **Best-Effort Runs**: Every step is independent; failures are reported,
//!   never fatal, and nothing is rolled back
//! - **Host Agnostic**: The editor is reached through the [`host::HostSceneApi`]
//!   trait; an in-memory host is included
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vehicle_scaffold::prelude::*;
//!
//! fn main() {
//!     logging::init();
//!
//!     let mut host = InMemoryHost::new("/path/to/project");
//!     let report = SetupOrchestrator::new(ScaffoldConfig::default()).run(&mut host);
//!
//!     assert!(report.passed(SuccessPolicy::BestEffort));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod host;
pub mod scene;
pub mod artifacts;

mod error;
mod orchestrator;
mod report;

pub use error::{FailureKind, ScaffoldError, ScaffoldResult, TransformSpace};
pub use orchestrator::{run, SetupOrchestrator};
pub use report::{EntityRegistry, RunContext, RunReport, StepResult};

/// Common imports for scaffold users
pub mod prelude {
    pub use crate::{
        run, EntityRegistry, FailureKind, RunContext, RunReport, ScaffoldError, SetupOrchestrator,
        StepResult,
        artifacts::ArtifactGenerator,
        config::{Config, ScaffoldConfig, SuccessPolicy, TemplateSettings},
        foundation::{
            logging,
            math::{Transform, Vec3},
        },
        host::{EntityId, HostSceneApi, InMemoryHost, PropertyValue},
        scene::SceneScaffoldBuilder,
    };
}
