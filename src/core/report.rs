use crate::domain::model::{join_numbers, DrawReport};
use crate::utils::error::Result;
use std::io::Write;

pub fn display_result(report: &DrawReport, out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    for participant in &report.participants {
        writeln!(out, "{}", participant)?;
    }
    writeln!(out, "\nPowerball winning number:")?;
    writeln!(
        out,
        "\n{} Powerball: {}\n",
        join_numbers(&report.main_numbers),
        report.powerball
    )?;
    Ok(())
}

pub fn display_result_json(report: &DrawReport, out: &mut dyn Write) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
