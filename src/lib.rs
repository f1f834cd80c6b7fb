pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{rules::LotteryRules, CliConfig};
pub use crate::core::session::{OutputFormat, PoolSession};
pub use crate::domain::model::{DrawReport, FrequencyTally, Participant};
pub use crate::domain::ports::{RandomSource, RngSource};
pub use crate::utils::error::{LotteryError, Result, SelectionError};
