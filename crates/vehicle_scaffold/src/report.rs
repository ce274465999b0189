//! Run-scoped state and the final run report

use crate::config::SuccessPolicy;
use crate::error::{FailureKind, ScaffoldError};
use crate::host::EntityId;
use std::path::PathBuf;

/// Role → entity handle pairs in creation order
///
/// Lives for exactly one run. Handles are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityRegistry {
    entries: Vec<(String, EntityId)>,
}

impl EntityRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handle under a role, replacing any earlier handle for it
    pub fn insert(&mut self, role: impl Into<String>, entity: EntityId) {
        let role = role.into();
        match self.entries.iter_mut().find(|(r, _)| *r == role) {
            Some((_, existing)) => *existing = entity,
            None => self.entries.push((role, entity)),
        }
    }

    /// Handle registered under a role
    pub fn get(&self, role: &str) -> Option<EntityId> {
        self.entries.iter().find(|(r, _)| r == role).map(|(_, id)| *id)
    }

    /// Iterate over role/handle pairs in creation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, EntityId)> {
        self.entries.iter().map(|(role, id)| (role.as_str(), *id))
    }

    /// Number of registered roles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Take the pairs out of the registry
    pub fn into_entries(self) -> Vec<(String, EntityId)> {
        self.entries
    }
}

/// Outcome of one discrete construction or generation action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Step name, e.g. `property:vehicle/PhysX Rigid Body/Mass`
    pub step: String,
    /// Whether the step succeeded
    pub success: bool,
    /// Failure classification, `None` on success
    pub kind: Option<FailureKind>,
    /// Diagnostic message
    pub message: Option<String>,
}

impl StepResult {
    /// Successful step
    pub fn ok(step: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            success: true,
            kind: None,
            message: None,
        }
    }

    /// Failed step carrying the error's kind and message
    pub fn failed(step: impl Into<String>, error: &ScaffoldError) -> Self {
        Self {
            step: step.into(),
            success: false,
            kind: Some(error.kind()),
            message: Some(error.to_string()),
        }
    }
}

/// Mutable state threaded through one run
#[derive(Debug, Default)]
pub struct RunContext {
    /// Entities created so far
    pub registry: EntityRegistry,
    /// Step outcomes in execution order
    pub steps: Vec<StepResult>,
    /// Artifact paths generated or attempted, in order
    pub artifacts: Vec<PathBuf>,
}

impl RunContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a step and hand the success flag back
    pub fn record(&mut self, step: impl Into<String>, outcome: Result<(), &ScaffoldError>) -> bool {
        let result = match outcome {
            Ok(()) => StepResult::ok(step),
            Err(error) => StepResult::failed(step, error),
        };
        let success = result.success;
        self.steps.push(result);
        success
    }

    /// Steps recorded under names starting with `prefix`
    pub fn steps_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a StepResult> {
        self.steps.iter().filter(move |s| s.step.starts_with(prefix))
    }
}

/// Final report of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Created role/handle pairs in creation order
    pub entities: Vec<(String, EntityId)>,
    /// Artifact paths generated or attempted, in order
    pub artifacts: Vec<PathBuf>,
    /// Every recorded step outcome
    pub steps: Vec<StepResult>,
    /// Best-effort verdict: false only when the run itself failed
    pub success: bool,
}

impl RunReport {
    /// Assemble a report from a finished context
    pub fn from_context(context: RunContext, success: bool) -> Self {
        Self {
            entities: context.registry.into_entries(),
            artifacts: context.artifacts,
            steps: context.steps,
            success,
        }
    }

    /// Strict verdict: the run did not fail and neither did any step
    pub fn all_steps_succeeded(&self) -> bool {
        self.success && self.steps.iter().all(|s| s.success)
    }

    /// Verdict under the given policy
    pub fn passed(&self, policy: SuccessPolicy) -> bool {
        match policy {
            SuccessPolicy::BestEffort => self.success,
            SuccessPolicy::Strict => self.all_steps_succeeded(),
        }
    }

    /// Failed steps in execution order
    pub fn failures(&self) -> impl Iterator<Item = &StepResult> {
        self.steps.iter().filter(|s| !s.success)
    }

    /// Failed steps of one kind
    pub fn failures_of(&self, kind: FailureKind) -> impl Iterator<Item = &StepResult> {
        self.failures().filter(move |s| s.kind == Some(kind))
    }

    /// Handle created for a role
    pub fn entity(&self, role: &str) -> Option<EntityId> {
        self.entities.iter().find(|(r, _)| r == role).map(|(_, id)| *id)
    }

    /// Log the closing summary: verdict, what was created, what to do next
    pub fn log_summary(&self) {
        let rule = "=".repeat(60);
        log::info!("{rule}");
        if self.success {
            log::info!("✓ SETUP COMPLETE!");
        } else {
            log::error!("✗ SETUP FAILED");
        }
        log::info!("{rule}");

        log::info!("What was created:");
        for (role, id) in &self.entities {
            log::info!("  • {role}: Entity ID {id}");
        }

        log::info!("Files created:");
        for path in &self.artifacts {
            log::info!("  • {}", path.display());
        }

        let failed: Vec<_> = self.failures().collect();
        if failed.is_empty() {
            log::info!("All {} steps succeeded", self.steps.len());
        } else {
            log::warn!("{} of {} steps failed and need manual attention:", failed.len(), self.steps.len());
            for step in failed {
                log::warn!("  ✗ {}: {}", step.step, step.message.as_deref().unwrap_or("no details"));
            }
        }

        if self.success {
            log::info!("Next Steps:");
            for (i, step) in NEXT_STEPS.iter().enumerate() {
                log::info!("  {}. {step}", i + 1);
            }
        }
    }
}

const NEXT_STEPS: [&str; 5] = [
    "Check the Entity Outliner - you'll see all entities",
    "Read CAMERA_SETUP_README.md in your project folder",
    "Add a mesh to the PlayerVehicle entity",
    "Set up basic vehicle movement with Script Canvas",
    "Make VehicleCamera the active camera",
];
