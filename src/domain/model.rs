use crate::config::rules::LotteryRules;
use crate::utils::error::SelectionError;
use crate::utils::validation::{validate_range, validate_unique};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One participant's pick: five main numbers in the order they were chosen
/// plus a Powerball. Checked against the rules on construction and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    first_name: String,
    last_name: String,
    numbers: Vec<u32>,
    powerball: u32,
}

impl Participant {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        numbers: Vec<u32>,
        powerball: u32,
        rules: &LotteryRules,
    ) -> Result<Self, SelectionError> {
        if numbers.len() != rules.pick_count as usize {
            return Err(SelectionError::WrongCount {
                expected: rules.pick_count,
                got: numbers.len(),
            });
        }

        let mut accepted: Vec<u32> = Vec::with_capacity(numbers.len());
        for &n in &numbers {
            validate_unique(i64::from(n), &accepted)?;
            validate_range(i64::from(n), 1, rules.number_max)?;
            accepted.push(n);
        }
        validate_range(i64::from(powerball), 1, rules.powerball_max)?;

        Ok(Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            numbers: accepted,
            powerball,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    pub fn powerball(&self) -> u32 {
        self.powerball
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} Powerball: {}",
            self.first_name,
            self.last_name,
            join_numbers(&self.numbers),
            self.powerball
        )
    }
}

/// How many participants picked each Powerball value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTally {
    counts: BTreeMap<u32, usize>,
}

impl FrequencyTally {
    pub fn from_participants(participants: &[Participant]) -> Self {
        let mut counts = BTreeMap::new();
        for participant in participants {
            *counts.entry(participant.powerball()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, powerball: u32) -> usize {
        self.counts.get(&powerball).copied().unwrap_or(0)
    }

    pub fn max_count(&self) -> Option<usize> {
        self.counts.values().copied().max()
    }

    /// Powerball values tied at the highest count, ascending.
    pub fn contenders(&self) -> Vec<u32> {
        match self.max_count() {
            Some(max) => self
                .counts
                .iter()
                .filter(|&(_, &count)| count == max)
                .map(|(&value, _)| value)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Everything one resolution produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawReport {
    pub participants: Vec<Participant>,
    pub tally: FrequencyTally,
    pub main_numbers: Vec<u32>,
    pub powerball: u32,
}

pub fn join_numbers(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
