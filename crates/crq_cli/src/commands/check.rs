//! Check command implementation
//!
//! Parses and validates a scenario without running it.

use tracing::info;

use crate::config::{build_config, CliOverrides, EnvOverrides, ScenarioFile};
use crate::output;
use crate::Result;

/// Run the check command
pub fn run(scenario: &ScenarioFile, env: &EnvOverrides) -> Result<()> {
    let config = build_config(Some(scenario), env, &CliOverrides::default())?;
    info!(iterations = config.iterations(), "Scenario is valid");
    output::print_config(&config);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use crq_core::ConfigError;

    #[test]
    fn test_valid_scenario() {
        let scenario = ScenarioFile::default_scenario();
        assert!(run(&scenario, &EnvOverrides::default()).is_ok());
    }

    #[test]
    fn test_out_of_range_vulnerability() {
        let scenario: ScenarioFile = r#"
[tef]
kind = "point_estimate"
value = 12

[vulnerability]
kind = "range_triangular"
min = 0.2
likely = 0.5
max = 1.4

[primary_loss]
kind = "mean_std_dev"
mean = 50000
std = 20000
"#
        .parse()
        .unwrap();

        let err = run(&scenario, &EnvOverrides::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::OutOfBounds { field: "max", .. })
        ));
    }
}
