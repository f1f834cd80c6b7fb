use crate::utils::error::{LotteryError, Result};
use crate::utils::validation::{validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Limits for one pool. The defaults are the standard Powerball layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LotteryRules {
    /// How many main numbers each participant picks.
    pub pick_count: u32,
    /// Highest main number a participant may pick.
    pub number_max: u32,
    /// Highest Powerball a participant may pick.
    pub powerball_max: u32,
    /// Upper bound of the range the winning main numbers are drawn from.
    pub draw_max: u32,
}

impl Default for LotteryRules {
    fn default() -> Self {
        Self {
            pick_count: 5,
            number_max: 69,
            powerball_max: 26,
            draw_max: 59,
        }
    }
}

impl LotteryRules {
    /// Loads rules from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LotteryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses rules from TOML text; fields left out keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let rules: LotteryRules = toml::from_str(content)?;
        Ok(rules)
    }

    pub fn validate_rules(&self) -> Result<()> {
        validate_positive_number("pick_count", self.pick_count, 1)?;
        validate_positive_number("number_max", self.number_max, self.pick_count)?;
        validate_positive_number("draw_max", self.draw_max, self.pick_count)?;
        validate_positive_number("powerball_max", self.powerball_max, 1)?;
        Ok(())
    }
}

impl Validate for LotteryRules {
    fn validate(&self) -> Result<()> {
        self.validate_rules()
    }
}
