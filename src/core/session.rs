use crate::config::rules::LotteryRules;
use crate::core::collector::Collector;
use crate::core::{report, resolver};
use crate::domain::model::{DrawReport, Participant};
use crate::domain::ports::RandomSource;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One pool run: collect (or take the demo fixture), resolve, display.
pub struct PoolSession<S: RandomSource> {
    rules: LotteryRules,
    rng: S,
    format: OutputFormat,
}

impl<S: RandomSource> PoolSession<S> {
    /// Rejects rules that could never be satisfied, before any prompt or draw.
    pub fn new(rules: LotteryRules, rng: S) -> Result<Self> {
        rules.validate()?;
        Ok(Self {
            rules,
            rng,
            format: OutputFormat::Text,
        })
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Prompts for participants on `input`, then resolves and displays.
    pub fn run_interactive<R: BufRead>(&mut self, input: R, out: &mut dyn Write) -> Result<DrawReport> {
        tracing::info!("Starting interactive collection");

        let mut collector = Collector::new(input, &mut *out, self.rules)?;
        let participants = collector.collect_all()?;
        drop(collector);

        tracing::info!("Collected {} participants", participants.len());
        let draw = self.resolve(participants)?;
        self.display(&draw, out)?;
        Ok(draw)
    }

    /// Resolves the built-in five-participant fixture without prompting.
    /// The fixture is fixed, so it always runs under the standard rules.
    pub fn run_demo(&mut self, out: &mut dyn Write) -> Result<DrawReport> {
        tracing::info!("Running demo over the built-in participants");
        let participants = demo_participants()?;
        let draw = self.resolve_under(&LotteryRules::default(), participants)?;
        self.display(&draw, out)?;
        Ok(draw)
    }

    pub fn resolve(&mut self, participants: Vec<Participant>) -> Result<DrawReport> {
        let rules = self.rules;
        self.resolve_under(&rules, participants)
    }

    fn resolve_under(
        &mut self,
        rules: &LotteryRules,
        participants: Vec<Participant>,
    ) -> Result<DrawReport> {
        let tally = resolver::tally(&participants);
        let powerball = resolver::resolve_winner(&tally, &mut self.rng)?;
        let main_numbers = resolver::generate_main_numbers(rules, &mut self.rng);

        Ok(DrawReport {
            participants,
            tally,
            main_numbers,
            powerball,
        })
    }

    fn display(&self, draw: &DrawReport, out: &mut dyn Write) -> Result<()> {
        match self.format {
            OutputFormat::Text => report::display_result(draw, out)?,
            OutputFormat::Json => report::display_result_json(draw, out)?,
        }
        out.flush()?;
        Ok(())
    }
}

/// Fixture for the `test` mode: two ties at the top (16 and 7) and a single 9.
pub fn demo_participants() -> Result<Vec<Participant>> {
    let rules = LotteryRules::default();
    let picks: [(&str, &str, [u32; 5], u32); 5] = [
        ("Wade", "Wilson", [15, 26, 33, 60, 34], 16),
        ("Frank", "Castle", [15, 26, 34, 56, 51], 16),
        ("Joe", "Dow", [19, 26, 33, 56, 11], 7),
        ("Jim", "Frizzer", [12, 36, 10, 59, 61], 7),
        ("Igor", "Dean", [12, 3, 4, 45, 46], 9),
    ];

    let mut participants = Vec::with_capacity(picks.len());
    for (first, last, numbers, powerball) in picks {
        participants.push(Participant::new(first, last, numbers.to_vec(), powerball, &rules)?);
    }
    Ok(participants)
}
