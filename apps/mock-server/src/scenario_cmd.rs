use anyhow::{Result, bail};
use clap::Subcommand;
use mock_scenarios::{Scenario, ScenarioManager};

use crate::config::AppConfig;

/// Operations on the persisted scenario slot shared with a running server.
#[derive(Debug, Clone, Subcommand)]
pub enum ScenarioCommand {
    /// Print the active scenario
    Get,
    /// Make <NAME> the active scenario
    Set {
        /// One of the names printed by `scenario list`
        name: String,
    },
    /// Go back to `success` and clear the persisted value
    Reset,
    /// Print every scenario name
    List,
}

/// # Errors
/// Fails for an unknown scenario name, or when persistence is disabled and
/// the command would have no effect on a running server.
pub fn run(command: &ScenarioCommand, config: &AppConfig) -> Result<()> {
    let home_dir = &config.server.home_dir;
    let manager = config.scenarios.build_manager(home_dir);

    match command {
        ScenarioCommand::Get => println!("{}", manager.current()),
        ScenarioCommand::List => {
            for scenario in manager.list() {
                println!("{scenario}");
            }
        }
        ScenarioCommand::Set { name } => {
            require_slot(config)?;
            let Some(change) = manager.set_named(name) else {
                bail!(
                    "unknown scenario '{name}', expected one of: {}",
                    names(&manager)
                );
            };
            println!("{} -> {}", change.previous, change.scenario);
        }
        ScenarioCommand::Reset => {
            require_slot(config)?;
            let change = manager.reset();
            println!("{} -> {}", change.previous, change.scenario);
        }
    }
    Ok(())
}

fn require_slot(config: &AppConfig) -> Result<()> {
    if config.scenarios.slot_path(&config.server.home_dir).is_none() {
        bail!("scenario persistence is disabled (scenarios.persist = false)");
    }
    Ok(())
}

fn names(manager: &ScenarioManager) -> String {
    manager
        .list()
        .iter()
        .map(|s: &Scenario| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
