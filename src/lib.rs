//! Converts the gbalatro font sheet bitmap into a libtonc font table in GNU
//! assembler source form, for inclusion in the game's build.

use anyhow::{Context, Result};
use derive_setters::Setters;
use log::info;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

pub mod emit;
pub mod layout;
pub mod pack;

use layout::FontLayout;
use pack::FontTable;

/// Base name of the symbols declared in the emitted asset.
pub const DEFAULT_SYMBOL: &str = "gbalatro_sys8";

#[derive(Setters)]
pub struct ConvertConfig {
    #[setters(skip)]
    input: PathBuf,
    #[setters(skip)]
    output: PathBuf,
    #[setters(into)]
    symbol: String,
    layout: FontLayout,
}
impl ConvertConfig {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        ConvertConfig { input, output, symbol: DEFAULT_SYMBOL.into(), layout: layout::SYS8 }
    }
}

/// Decodes and packs the configured font sheet.
pub fn load_sheet(config: &ConvertConfig) -> Result<FontTable> {
    FontTable::from_image_file(&config.input, &config.layout)
}

/// Writes a packed font table to the configured output asset, overwriting it
/// if it exists.
pub fn write_asset(config: &ConvertConfig, table: &FontTable) -> Result<()> {
    info!("Writing font table to '{}'...", config.output.display());
    let file = File::create(&config.output)
        .with_context(|| format!("could not create output file '{}'", config.output.display()))?;
    let mut out = BufWriter::new(file);
    emit::write_font(&mut out, table, &config.symbol)
        .with_context(|| format!("could not write output file '{}'", config.output.display()))?;
    out.flush()
        .with_context(|| format!("could not write output file '{}'", config.output.display()))?;
    Ok(())
}

/// Runs the whole conversion: font sheet image in, assembly asset out.
pub fn convert(config: &ConvertConfig) -> Result<()> {
    let table = load_sheet(config)?;
    write_asset(config, &table)?;
    Ok(())
}
