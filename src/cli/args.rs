use crate::utils::constants::DEFAULT_DATA_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "air-quality-db")]
#[command(about = "Interactive air quality database for particulate sensor readings")]
#[command(version)]
pub struct Cli {
    #[arg(
        short = 'f',
        long,
        default_value = DEFAULT_DATA_FILE,
        help = "CSV file loaded by the 'Load Data' menu option"
    )]
    pub data_file: PathBuf,

    #[arg(long, help = "Start with the built-in sample readings loaded")]
    pub sample: bool,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}
