use air_quality_db::cli::{run, Cli};
use air_quality_db::utils::setup_logging;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;
    run(cli)?;
    Ok(())
}
