use crate::config::rules::LotteryRules;
use crate::domain::model::Participant;
use crate::utils::error::{LotteryError, Result, SelectionError};
use crate::utils::validation::{parse_number, validate_range, validate_unique, Validate};
use std::io::{BufRead, Write};

/// Interactive capture of participants over any line reader / writer pair.
///
/// Invalid entries are reported and asked for again with no retry limit.
/// Only end of input can stop a capture midway.
pub struct Collector<R: BufRead, W: Write> {
    input: R,
    out: W,
    rules: LotteryRules,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    /// Fails on rules no participant could satisfy, such as fewer
    /// numbers in range than picks.
    pub fn new(input: R, out: W, rules: LotteryRules) -> Result<Self> {
        rules.validate()?;
        Ok(Self { input, out, rules })
    }

    /// Captures participants until the operator answers anything not
    /// starting with `y`. Always captures at least one.
    pub fn collect_all(&mut self) -> Result<Vec<Participant>> {
        let mut participants = Vec::new();
        loop {
            let participant = self.capture_participant()?;
            tracing::info!(
                "Participant #{} recorded: {} {}",
                participants.len() + 1,
                participant.first_name(),
                participant.last_name()
            );
            participants.push(participant);

            if !self.wants_another()? {
                break;
            }
        }
        Ok(participants)
    }

    pub fn capture_participant(&mut self) -> Result<Participant> {
        let first_name = self.require("Enter your first name: ", "reading a first name")?;
        let last_name = self.require("Enter your second name: ", "reading a second name")?;
        let numbers = self.capture_numbers(self.rules.number_max)?;
        let powerball = self.capture_powerball(self.rules.powerball_max)?;

        Ok(Participant::new(
            first_name,
            last_name,
            numbers,
            powerball,
            &self.rules,
        )?)
    }

    /// Asks for `pick_count` distinct numbers in `1..=max_limit`, in order.
    pub fn capture_numbers(&mut self, max_limit: u32) -> Result<Vec<u32>> {
        let wanted = self.rules.pick_count as usize;
        let mut numbers: Vec<u32> = Vec::with_capacity(wanted);

        while numbers.len() < wanted {
            let position = numbers.len() + 1;
            let prompt = format!(
                "select {}{} # (1 thru {}{}): ",
                position,
                ordinal_suffix(position),
                max_limit,
                excluding_clause(&numbers)
            );
            let entry = self.require(&prompt, "selecting numbers")?;

            match check_number(&entry, &numbers, max_limit) {
                Ok(value) => numbers.push(value),
                Err(e) => self.reject(&e)?,
            }
        }

        tracing::debug!("Numbers accepted: {:?}", numbers);
        Ok(numbers)
    }

    /// Asks for one number in `1..=max_limit`; no uniqueness constraint.
    pub fn capture_powerball(&mut self, max_limit: u32) -> Result<u32> {
        let prompt = format!("select Power Ball # (1 thru {}): ", max_limit);
        loop {
            let entry = self.require(&prompt, "selecting the Power Ball")?;

            match parse_number(&entry).and_then(|value| validate_range(value, 1, max_limit)) {
                Ok(value) => {
                    tracing::debug!("Powerball accepted: {}", value);
                    return Ok(value);
                }
                Err(e) => self.reject(&e)?,
            }
        }
    }

    /// End of input counts as "no".
    pub fn wants_another(&mut self) -> Result<bool> {
        let answer = self.prompt("\nInput next participant? [yes/no] : ")?;
        Ok(answer.is_some_and(|a| a.starts_with('y')))
    }

    #[cfg(test)]
    fn into_inner(self) -> (R, W) {
        (self.input, self.out)
    }

    fn reject(&mut self, err: &SelectionError) -> Result<()> {
        tracing::debug!("Entry rejected: {:?}", err);
        writeln!(self.out, "Error: {}", err)?;
        Ok(())
    }

    fn require(&mut self, text: &str, context: &str) -> Result<String> {
        self.prompt(text)?.ok_or_else(|| LotteryError::InputClosed {
            context: context.to_string(),
        })
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        // raw bytes, so invalid UTF-8 is rejected by the parser instead of
        // failing the read
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }
}

/// Validates one entry against the numbers already accepted for the same
/// participant: duplicate check first, then range.
pub fn check_number(
    entry: &str,
    accepted: &[u32],
    max_limit: u32,
) -> std::result::Result<u32, SelectionError> {
    let value = parse_number(entry)?;
    validate_unique(value, accepted)?;
    validate_range(value, 1, max_limit)
}

pub fn ordinal_suffix(n: usize) -> &'static str {
    match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// " excluding 5", " excluding 5 and 7", " excluding 5, 7, and 9".
pub fn excluding_clause(numbers: &[u32]) -> String {
    match numbers {
        [] => String::new(),
        [only] => format!(" excluding {}", only),
        [first, second] => format!(" excluding {} and {}", first, second),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!(" excluding {}, and {}", head, last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collector(input: &str) -> Collector<Cursor<Vec<u8>>, Vec<u8>> {
        Collector::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            LotteryRules::default(),
        )
        .unwrap()
    }

    fn output(c: Collector<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, out) = c.into_inner();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_ordinal_suffix() {
        let suffixes: Vec<_> = (1..=6).map(ordinal_suffix).collect();
        assert_eq!(suffixes, vec!["st", "nd", "rd", "th", "th", "th"]);
    }

    #[test]
    fn test_excluding_clause() {
        assert_eq!(excluding_clause(&[]), "");
        assert_eq!(excluding_clause(&[5]), " excluding 5");
        assert_eq!(excluding_clause(&[5, 12]), " excluding 5 and 12");
        assert_eq!(excluding_clause(&[5, 12, 40]), " excluding 5, 12, and 40");
        assert_eq!(excluding_clause(&[5, 12, 40, 7]), " excluding 5, 12, 40, and 7");
    }

    #[test]
    fn test_check_number_order() {
        // a duplicate that is also in range reports the duplicate
        assert_eq!(
            check_number("3", &[3], 69),
            Err(SelectionError::DuplicateSelection { value: 3 })
        );
        assert!(matches!(
            check_number("70", &[3], 69),
            Err(SelectionError::OutOfRange { value: 70, .. })
        ));
        assert_eq!(check_number(" 69 ", &[3], 69), Ok(69));
    }

    #[test]
    fn test_capture_numbers_rejects_out_of_range() {
        let mut c = collector("70\n1\n2\n3\n4\n5\n");
        let numbers = c.capture_numbers(69).unwrap();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert!(!numbers.contains(&70));

        let out = output(c);
        assert!(out.contains("Error: You entered illegal number: 70. Please try again."));
        assert_eq!(out.matches("select 1st # (1 thru 69): ").count(), 2);
    }

    #[test]
    fn test_capture_numbers_rejects_duplicate() {
        let mut c = collector("8\n8\n9\n10\n11\n12\n");
        let numbers = c.capture_numbers(69).unwrap();
        assert_eq!(numbers, vec![8, 9, 10, 11, 12]);

        let out = output(c);
        assert!(out.contains("Error: You entered duplicate number: 8. Please try again."));
        assert!(out.contains("select 2nd # (1 thru 69 excluding 8): "));
        assert!(out.contains("select 5th # (1 thru 69 excluding 8, 9, 10, and 11): "));
    }

    #[test]
    fn test_capture_numbers_retries_without_limit() {
        let mut input = String::new();
        for _ in 0..50 {
            input.push_str("0\nabc\n100\n");
        }
        input.push_str("1\n2\n3\n4\n5\n");
        let mut c = collector(&input);
        assert_eq!(c.capture_numbers(69).unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_capture_powerball() {
        let mut c = collector("27\n-1\nx\n26\n");
        assert_eq!(c.capture_powerball(26).unwrap(), 26);

        let out = output(c);
        assert_eq!(out.matches("Error: ").count(), 3);
        assert!(out.contains("select Power Ball # (1 thru 26): "));
    }

    #[test]
    fn test_powerball_may_repeat_a_main_number() {
        let mut c = collector("Ann\nLee\n1\n2\n3\n4\n5\n5\n");
        let participant = c.capture_participant().unwrap();
        assert_eq!(participant.numbers(), &[1, 2, 3, 4, 5]);
        assert_eq!(participant.powerball(), 5);
    }

    #[test]
    fn test_capture_participant_keeps_names_verbatim() {
        let mut c = collector("  Mary Ann \r\nO'Neil\n10\n20\n30\n40\n50\n7\n");
        let participant = c.capture_participant().unwrap();
        assert_eq!(participant.first_name(), "  Mary Ann ");
        assert_eq!(participant.last_name(), "O'Neil");
    }

    #[test]
    fn test_wants_another() {
        assert!(collector("y\n").wants_another().unwrap());
        assert!(collector("yes\n").wants_another().unwrap());
        assert!(!collector("Y\n").wants_another().unwrap());
        assert!(!collector(" y\n").wants_another().unwrap());
        assert!(!collector("no\n").wants_another().unwrap());
        assert!(!collector("\n").wants_another().unwrap());
        assert!(!collector("").wants_another().unwrap());
    }

    #[test]
    fn test_collect_all_runs_until_not_yes() {
        let input = "A\nB\n1\n2\n3\n4\n5\n9\nyes\nC\nD\n6\n7\n8\n9\n10\n9\nnope\n";
        let mut c = collector(input);
        let participants = c.collect_all().unwrap();
        assert_eq!(participants.len(), 2);
        assert_eq!(participants[1].first_name(), "C");
        assert_eq!(participants[1].numbers(), &[6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_input_closed_mid_participant() {
        let mut c = collector("A\nB\n1\n2\n");
        let err = c.collect_all().unwrap_err();
        assert!(matches!(err, LotteryError::InputClosed { .. }));
    }

    #[test]
    fn test_custom_pick_count() {
        let rules = LotteryRules {
            pick_count: 3,
            ..LotteryRules::default()
        };
        let mut c = Collector::new(Cursor::new(b"4\n5\n6\n".to_vec()), Vec::new(), rules).unwrap();
        assert_eq!(c.capture_numbers(10).unwrap(), vec![4, 5, 6]);
    }

    #[test]
    fn test_invalid_utf8_entry_is_rejected() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"1\n2\n3\n4\n5\n");
        let mut c = Collector::new(Cursor::new(input), Vec::new(), LotteryRules::default()).unwrap();
        assert_eq!(c.capture_numbers(69).unwrap(), vec![1, 2, 3, 4, 5]);

        let out = output(c);
        assert_eq!(out.matches("Error: You entered illegal number: ").count(), 1);
        assert_eq!(out.matches("select 1st # (1 thru 69): ").count(), 2);
    }

    #[test]
    fn test_unsatisfiable_rules_rejected() {
        let rules = LotteryRules {
            number_max: 3,
            ..LotteryRules::default()
        };
        let result = Collector::new(Cursor::new(Vec::new()), Vec::new(), rules);
        assert!(matches!(
            result,
            Err(LotteryError::InvalidConfigValueError { ref field, .. }) if field == "number_max"
        ));
    }
}
