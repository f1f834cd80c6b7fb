pub mod rules;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use rules::LotteryRules;
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEMO_MODE: &str = "test";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "powerball-pool"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Collect Powerball picks from a group and draw the pool's winning number")
)]
pub struct CliConfig {
    /// Pass `test` to run the built-in five-participant demo instead of prompting
    #[cfg_attr(feature = "cli", arg(value_name = "MODE"))]
    pub mode: Option<String>,

    /// Seed for the tie-break and main-number draw
    #[cfg_attr(feature = "cli", arg(long))]
    pub seed: Option<u64>,

    /// TOML file overriding the default number ranges
    #[cfg_attr(feature = "cli", arg(long))]
    pub rules: Option<String>,

    /// Print the final report as JSON
    #[cfg_attr(feature = "cli", arg(long))]
    pub json: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl CliConfig {
    pub fn is_demo(&self) -> bool {
        self.mode.as_deref() == Some(DEMO_MODE)
    }

    /// Rules from `--rules` when given, otherwise the defaults.
    pub fn load_rules(&self) -> Result<LotteryRules> {
        let rules = match &self.rules {
            Some(path) => {
                tracing::debug!("Loading rules from: {}", path);
                LotteryRules::from_file(path)?
            }
            None => LotteryRules::default(),
        };
        rules.validate()?;
        Ok(rules)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.rules {
            validate_path("rules", path)?;
        }
        Ok(())
    }
}
