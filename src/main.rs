use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueHint};
use log::info;

use mosaic::config::default_output;
use mosaic::palette::{self, PALETTES};
use mosaic::{process_file, Config, FilterKind};

#[derive(Parser, Debug)]
#[command(name = "mosaic", version, about = "Turns images into palette mosaics")]
struct Cli {
    /// Filter applied to every image
    #[arg(short, long, value_enum, default_value_t = FilterKind::Distribution)]
    filter: FilterKind,

    /// Built-in palette, by name or number
    #[arg(short, long, default_value = "navy")]
    palette: String,

    /// Tile edge in pixels
    #[arg(short, long, default_value_t = 1)]
    tile: u32,

    /// Outline width kept by the square filter
    #[arg(long, default_value_t = 1)]
    border: u32,

    /// Wave period of the line filter
    #[arg(long, default_value_t = 16)]
    wave_width: u32,

    /// Band height of the line filter
    #[arg(long, default_value_t = 16)]
    wave_height: u32,

    /// Pen size of the line filter
    #[arg(long, default_value_t = 4)]
    stroke: u32,

    /// Output path; defaults to <input>.mosaic.png
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Print the built-in palettes and exit
    #[arg(long)]
    list_palettes: bool,

    /// Input images
    #[arg(value_hint = ValueHint::FilePath, required_unless_present = "list_palettes")]
    files: Vec<PathBuf>,
}

fn build_config(cli: &Cli) -> Result<Config> {
    let cfg = Config {
        filter: cli.filter,
        palette: palette::by_name(&cli.palette)?,
        tile: cli.tile,
        border: cli.border,
        wave_width: cli.wave_width,
        wave_height: cli.wave_height,
        stroke: cli.stroke,
    };
    cfg.validate()?;
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list_palettes {
        for (idx, (name, colors)) in PALETTES.iter().enumerate() {
            println!("{}\t{:<8}{}", idx, name, palette::swatch(colors));
        }
        return Ok(());
    }

    if cli.output.is_some() && cli.files.len() > 1 {
        bail!("--output can only be used with a single input file");
    }
    let cfg = build_config(&cli)?;
    info!("filter: {:?}, tile: {}", cfg.filter, cfg.tile);

    for input in cli.files.iter() {
        let output = cli.output.clone().unwrap_or_else(|| default_output(input));
        process_file(input, &output, &cfg)
            .with_context(|| format!("failed to process file '{}'", input.display()))?;
    }
    Ok(())
}
