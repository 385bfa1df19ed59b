use clap::Parser;
use gbalatro_fonttool::{load_sheet, write_asset, ConvertConfig};
use std::{path::PathBuf, process};

/// Converts the gbalatro font sheet into a libtonc font table.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the source font sheet image
    #[arg(short, long)]
    input: PathBuf,
    /// Path to the generated assembly source file
    #[arg(short, long)]
    output: PathBuf,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = ConvertConfig::new(cli.input, cli.output);

    let table = match load_sheet(&config) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error encountered: {:?}", e);
            process::exit(1);
        }
    };
    if let Err(e) = write_asset(&config, &table) {
        eprintln!("Error encountered: {:?}", e);
        process::exit(2);
    }
}
