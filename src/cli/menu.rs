use crate::models::Statistic;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Show(Statistic),
    AdjustFilters,
    LoadData,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInputError {
    NotANumber,
    UnknownOption,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Result<Self, MenuInputError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix(['+', '-'])
            .unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MenuInputError::NotANumber);
        }

        // Numbers too large for i64 are still numbers, just not menu options.
        match trimmed.parse::<i64>().unwrap_or(i64::MAX) {
            1 => Ok(MenuChoice::Show(Statistic::Average)),
            2 => Ok(MenuChoice::Show(Statistic::Min)),
            3 => Ok(MenuChoice::Show(Statistic::Max)),
            4 => Ok(MenuChoice::AdjustFilters),
            5 => Ok(MenuChoice::LoadData),
            9 => Ok(MenuChoice::Quit),
            _ => Err(MenuInputError::UnknownOption),
        }
    }
}

pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Main Menu")?;
    for (number, statistic) in [
        (1, Statistic::Average),
        (2, Statistic::Min),
        (3, Statistic::Max),
    ] {
        writeln!(
            out,
            "{} - Print {} Particulate Concentration by Zip Code and Time",
            number,
            statistic.label()
        )?;
    }
    writeln!(out, "4 - Adjust Zip Code Filters")?;
    writeln!(out, "5 - Load Data")?;
    writeln!(out, "9 - Quit")?;
    Ok(())
}
