use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process;

use pyazo::{Config, RunOptions, SystemRunner, error::CONFIG_EXIT_CODE, notification};

#[derive(Parser, Debug)]
#[command(name = "pyazo")]
#[command(version, about = "Capture a screenshot and upload it to a pyazo server")]
struct Cli {
    /// Make the image private
    #[arg(long, short = 'p', action = ArgAction::SetTrue)]
    private: bool,

    /// Path to an existing image to upload instead of capturing
    #[arg(long, short = 'i', value_name = "PATH")]
    image: Option<PathBuf>,

    /// Clear image metadata
    #[arg(long, short = 'c', action = ArgAction::SetTrue)]
    clear_metadata: bool,

    /// Delete the last uploaded image
    #[arg(long, short = 'd', action = ArgAction::SetTrue)]
    delete: bool,

    /// Don't copy the url to the clipboard after upload
    #[arg(long, action = ArgAction::SetTrue)]
    no_copy: bool,

    /// Don't print the url to stdout after upload
    #[arg(long, action = ArgAction::SetTrue)]
    no_output: bool,

    /// Don't save the file locally after upload
    #[arg(long, action = ArgAction::SetTrue)]
    no_save: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(CONFIG_EXIT_CODE);
        }
    };

    let options = RunOptions {
        private: cli.private,
        image: cli.image,
        clear_metadata: cli.clear_metadata,
        delete: cli.delete,
        no_copy: cli.no_copy,
        no_output: cli.no_output,
        no_save: cli.no_save,
    };

    if let Err(err) = pyazo::run(&config, &options, &SystemRunner) {
        eprintln!("{}", err);
        notification::notify(&err.to_string(), 4000);
        process::exit(err.exit_code());
    }
}
