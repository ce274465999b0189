//! Setup orchestration
//!
//! Runs the scene build and then the artifact producers, in that order,
//! against a single run context. Step failures are recorded and the run moves
//! on. Only an error or panic escaping a whole stage fails the run, and even
//! that is caught here and turned into a report.

use crate::artifacts::ArtifactGenerator;
use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::host::HostSceneApi;
use crate::report::{RunContext, RunReport, StepResult};
use crate::scene::SceneScaffoldBuilder;
use std::any::Any;
use std::error::Error as _;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

/// Drives one complete scaffold run
pub struct SetupOrchestrator {
    config: ScaffoldConfig,
    builder: SceneScaffoldBuilder,
}

impl SetupOrchestrator {
    /// Orchestrator for the vehicle scaffold
    pub fn new(config: ScaffoldConfig) -> Self {
        Self {
            config,
            builder: SceneScaffoldBuilder::new(),
        }
    }

    /// Replace the scene builder
    pub fn with_builder(mut self, builder: SceneScaffoldBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Run the full setup. Never panics and never returns an error; the
    /// report carries the outcome.
    pub fn run<H: HostSceneApi + ?Sized>(&self, host: &mut H) -> RunReport {
        let rule = "=".repeat(60);
        log::info!("{rule}");
        log::info!("Vehicle Combat Camera System - Automated Setup");
        log::info!("{rule}");

        let mut context = RunContext::new();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.run_stages(host, &mut context)));

        let fatal = match outcome {
            Ok(Ok(())) => None,
            Ok(Err(error)) => Some(error),
            Err(payload) => Some(ScaffoldError::FatalRunError(format!(
                "panic during setup: {}",
                panic_message(payload.as_ref())
            ))),
        };

        let success = match fatal {
            None => true,
            Some(error) => {
                log::error!("✗ Setup failed with error: {error}");
                let mut source = error.source();
                while let Some(cause) = source {
                    log::error!("  caused by: {cause}");
                    source = cause.source();
                }
                log::error!("Completed steps before the failure: {}", context.steps.len());
                context.steps.push(StepResult::failed("run", &error));
                false
            }
        };

        let report = RunReport::from_context(context, success);
        report.log_summary();
        report
    }

    fn run_stages<H: HostSceneApi + ?Sized>(
        &self,
        host: &mut H,
        context: &mut RunContext,
    ) -> Result<(), ScaffoldError> {
        let root = self.project_root(host)?;
        log::info!("Project path: {}", root.display());

        self.builder.build_into(host, context);
        ArtifactGenerator::new(root, &self.config).generate_all(context);
        Ok(())
    }

    fn project_root<H: HostSceneApi + ?Sized>(&self, host: &H) -> Result<PathBuf, ScaffoldError> {
        match &self.config.project_root {
            Some(root) => Ok(root.clone()),
            None => host
                .project_root()
                .map_err(|e| ScaffoldError::FatalRunError(e.to_string())),
        }
    }
}

/// Run the vehicle scaffold against a host with the given configuration
pub fn run<H: HostSceneApi + ?Sized>(host: &mut H, config: ScaffoldConfig) -> RunReport {
    SetupOrchestrator::new(config).run(host)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
