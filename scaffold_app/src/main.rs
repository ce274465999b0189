//! Vehicle combat camera setup
//!
//! Scaffolds the vehicle camera scene into the in-memory host and writes the
//! supporting files into the project directory. Takes no arguments.
//!
//! Configuration is read from the file named by `SCAFFOLD_CONFIG`, else from
//! `scaffold.toml` in the working directory, else defaults are used.

use std::path::PathBuf;
use std::process::ExitCode;

use vehicle_scaffold::prelude::*;

const CONFIG_ENV: &str = "SCAFFOLD_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "scaffold.toml";

fn load_config() -> ScaffoldConfig {
    let path = match std::env::var_os(CONFIG_ENV) {
        Some(path) => PathBuf::from(path),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !path.is_file() {
                log::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                return ScaffoldConfig::default();
            }
            path
        }
    };

    match ScaffoldConfig::load_from_file(&path) {
        Ok(config) => {
            log::info!("Loaded configuration from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("Ignoring configuration {}: {e}", path.display());
            ScaffoldConfig::default()
        }
    }
}

fn main() -> ExitCode {
    // Route panics through the logger so they land next to the step output
    std::panic::set_hook(Box::new(|panic_info| {
        match panic_info.location() {
            Some(location) => log::error!(
                "PANIC at {}:{}:{}: {panic_info}",
                location.file(),
                location.line(),
                location.column()
            ),
            None => log::error!("PANIC: {panic_info}"),
        }
    }));

    logging::init();

    log::info!("{}", "=".repeat(60));
    log::info!("Starting Vehicle Combat Camera Setup...");
    log::info!("{}", "=".repeat(60));

    let config = load_config();
    let project_root = match &config.project_root {
        Some(root) => root.clone(),
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                log::error!("Cannot determine the project directory: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let mut host = InMemoryHost::new(project_root);
    let orchestrator = SetupOrchestrator::new(config);
    let report = orchestrator.run(&mut host);

    match ron::ser::to_string_pretty(&host.snapshot(), ron::ser::PrettyConfig::default()) {
        Ok(scene) => log::debug!("Scene snapshot:\n{scene}"),
        Err(e) => log::debug!("Scene snapshot unavailable: {e}"),
    }

    if report.passed(orchestrator.config().success_policy) {
        log::info!("🎉 All done! Check the Entity Outliner to see your new entities.");
        log::info!("📖 Read CAMERA_SETUP_README.md for next steps.");
        ExitCode::SUCCESS
    } else {
        log::error!("❌ Setup encountered errors. Check the output above.");
        ExitCode::FAILURE
    }
}
