pub mod args;
pub mod commands;
pub mod menu;
pub mod shell;

pub use args::Cli;
pub use commands::run;
pub use menu::{MenuChoice, MenuInputError};
pub use shell::Shell;
