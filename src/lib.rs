use std::path::Path;

use image::RgbaImage;
use log::info;

pub mod config;
pub mod error;
pub mod filter;
pub mod histogram;
pub mod palette;
pub mod partition;
pub mod tile;

pub use config::{Config, FilterKind};
pub use error::{Error, Result};
pub use partition::{partition, PartitionIndex};

/// Decodes `input`, runs the configured filter and returns the mosaic.
pub fn render(input: &Path, config: &Config) -> Result<RgbaImage> {
    let mut filter = config.build_filter()?;
    let img = image::open(input)?.to_rgba16();
    info!("{}: {}x{}", input.display(), img.width(), img.height());
    filter::process(&img, filter.as_mut(), config.tile)
}

/// Renders `input` and writes the result as PNG to `output`.
pub fn process_file(input: &Path, output: &Path, config: &Config) -> Result<()> {
    let mosaic = render(input, config)?;
    mosaic.save_with_format(output, image::ImageFormat::Png)?;
    info!("wrote {}", output.display());
    Ok(())
}
