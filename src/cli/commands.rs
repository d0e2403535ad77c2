use crate::cli::args::Cli;
use crate::cli::shell::Shell;
use crate::error::Result;
use crate::processors::Dataset;
use std::io;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    debug!(data_file = %cli.data_file.display(), sample = cli.sample, "starting session");

    let mut dataset = Dataset::new();
    if cli.sample {
        let summary = dataset.load_default_data();
        debug!(records = summary.unique_records, "sample readings loaded");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), cli.data_file)
        .with_dataset(dataset)
        .with_progress(true);

    shell.run()
}
