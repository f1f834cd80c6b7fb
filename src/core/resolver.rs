use crate::config::rules::LotteryRules;
use crate::domain::model::{FrequencyTally, Participant};
use crate::domain::ports::RandomSource;
use crate::utils::error::{LotteryError, Result};

pub fn tally(participants: &[Participant]) -> FrequencyTally {
    let tally = FrequencyTally::from_participants(participants);
    tracing::debug!(
        "Tallied {} powerballs into {} distinct values",
        tally.total(),
        tally.len()
    );
    tally
}

/// Picks the winning Powerball among the values tied for the highest count.
///
/// The contender set is always drawn from, even when it holds a single
/// value. Every contender is equally likely regardless of its count.
pub fn resolve_winner(tally: &FrequencyTally, rng: &mut dyn RandomSource) -> Result<u32> {
    let contenders = tally.contenders();
    if contenders.is_empty() {
        return Err(LotteryError::EmptyTally);
    }

    let winner = contenders[rng.pick_index(contenders.len())];
    tracing::info!(
        "Powerball {} drawn from contenders {:?} (count {})",
        winner,
        contenders,
        tally.count(winner)
    );
    Ok(winner)
}

/// Main numbers for the result line. Drawn fresh from `1..=draw_max` and
/// unrelated to what participants picked.
pub fn generate_main_numbers(rules: &LotteryRules, rng: &mut dyn RandomSource) -> Vec<u32> {
    let numbers = rng.sample_distinct(1, rules.draw_max, rules.pick_count as usize);
    tracing::debug!("Main numbers drawn: {:?}", numbers);
    numbers
}
