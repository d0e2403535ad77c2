use crate::cli::menu::{print_menu, MenuChoice, MenuInputError};
use crate::error::{AirQualityError, Result};
use crate::models::Statistic;
use crate::processors::Dataset;
use crate::utils::constants::MAX_HEADER_LEN;
use crate::utils::ProgressReporter;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// Line-oriented menu over a [`Dataset`].
///
/// Generic over its input and output so sessions can be scripted in tests.
/// End of input at any prompt ends the session.
pub struct Shell<R, W> {
    input: R,
    output: W,
    dataset: Dataset,
    data_file: PathBuf,
    show_progress: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, data_file: impl Into<PathBuf>) -> Self {
        Self {
            input,
            output,
            dataset: Dataset::new(),
            data_file: data_file.into(),
            show_progress: false,
        }
    }

    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = dataset;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn into_parts(self) -> (Dataset, W) {
        (self.dataset, self.output)
    }

    /// Greet the user, ask for a header, then run the main menu until quit.
    pub fn run(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Please enter your name: ")? else {
            return Ok(());
        };
        writeln!(
            self.output,
            "Hello {}, welcome to the Air Quality Database.",
            name
        )?;

        loop {
            let Some(header) = self.prompt("Enter a header for the menu: ")? else {
                return Ok(());
            };
            match self.dataset.set_header(&header) {
                Ok(()) => break,
                Err(AirQualityError::Validation(_)) => writeln!(
                    self.output,
                    "The header is too long; it has to be {} characters or less.",
                    MAX_HEADER_LEN
                )?,
                Err(e) => return Err(e),
            }
        }

        self.main_menu()
    }

    fn main_menu(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", self.dataset.header())?;
            print_menu(&mut self.output)?;

            let Some(input) = self.prompt("What is your choice? ")? else {
                break;
            };

            match MenuChoice::parse(&input) {
                Ok(MenuChoice::Show(statistic)) => self.show_cross_table(statistic)?,
                Ok(MenuChoice::AdjustFilters) => self.manage_filters()?,
                Ok(MenuChoice::LoadData) => self.load_data()?,
                Ok(MenuChoice::Quit) => break,
                Err(MenuInputError::NotANumber) => {
                    writeln!(self.output, "Please enter a number.")?
                }
                Err(MenuInputError::UnknownOption) => {
                    writeln!(self.output, "Please enter a valid number.")?
                }
            }
        }

        writeln!(self.output, "Thank you for using the database! Goodbye.")?;
        Ok(())
    }

    fn show_cross_table(&mut self, statistic: Statistic) -> Result<()> {
        if !self.dataset.has_data() {
            writeln!(self.output, "Please load some data.")?;
            return Ok(());
        }
        self.dataset.render_cross_table(statistic, &mut self.output)
    }

    fn manage_filters(&mut self) -> Result<()> {
        if !self.dataset.has_data() {
            writeln!(self.output, "Please enter some data.")?;
            return Ok(());
        }

        loop {
            let filters = self.dataset.list_filters();

            writeln!(self.output)?;
            writeln!(self.output, "The following labels are in the dataset:")?;
            for (index, (zip_code, state)) in filters.iter().enumerate() {
                writeln!(self.output, "{}: {}      {}", index + 1, zip_code, state)?;
            }

            let Some(input) = self.prompt(
                "Please select an item to toggle or press enter/return when you are finished. ",
            )?
            else {
                return Ok(());
            };
            if input.is_empty() {
                return Ok(());
            }

            let selected = input
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|index| index.checked_sub(1))
                .and_then(|index| filters.get_index(index));

            match selected {
                Some((zip_code, _)) => {
                    self.dataset.toggle(zip_code)?;
                }
                None => writeln!(
                    self.output,
                    "Please enter a valid number between 1 and {}.",
                    filters.len()
                )?,
            }
        }
    }

    fn load_data(&mut self) -> Result<()> {
        let progress = ProgressReporter::new_spinner(
            &format!("Loading {}...", self.data_file.display()),
            !self.show_progress,
        );
        let result = self.dataset.load_file(&self.data_file);
        progress.finish_and_clear();

        match result {
            Ok(summary) => {
                info!(path = %self.data_file.display(), "loaded data file");
                writeln!(
                    self.output,
                    "{} lines of data were downloaded",
                    summary.unique_records
                )?;
            }
            Err(e) => {
                warn!(path = %self.data_file.display(), error = %e, "failed to load data file");
                writeln!(self.output, "Unable to load data: {}", e)?;
            }
        }
        Ok(())
    }

    /// Print a prompt and read one line without its line ending.
    /// Returns `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
