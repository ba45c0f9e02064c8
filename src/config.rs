use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::{Error, Result};
use crate::filter::{Average, Filter, Line, PaletteFilter, PaletteMode, Square};
use crate::palette::{self, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterKind {
    /// Nearest palette color per tile
    Closest,
    /// Palette slot chosen by the color distribution of the image
    Distribution,
    /// Mean color per tile
    Average,
    /// Tile outlines over a black fill
    Square,
    /// Sine waves following the image darkness
    Line,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub filter: FilterKind,
    pub palette: &'static [Color],
    pub tile: u32,
    pub border: u32,
    pub wave_width: u32,
    pub wave_height: u32,
    pub stroke: u32,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            filter: FilterKind::Distribution,
            palette: palette::NAVY,
            tile: 1,
            border: 1,
            wave_width: 16,
            wave_height: 16,
            stroke: 4,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.tile == 0 {
            return Err(Error::InvalidTileSize);
        }
        if self.wave_width < 2 {
            return Err(Error::InvalidConfig(format!(
                "wave width must be at least 2, got {}", self.wave_width)));
        }
        if self.wave_height == 0 || self.stroke == 0 {
            return Err(Error::InvalidConfig(
                "wave height and stroke must be positive".to_string()));
        }
        Ok(())
    }

    pub fn build_filter(&self) -> Result<Box<dyn Filter>> {
        self.validate()?;
        Ok(match self.filter {
            FilterKind::Closest =>
                Box::new(PaletteFilter::new(self.palette, PaletteMode::Closest)?),
            FilterKind::Distribution =>
                Box::new(PaletteFilter::new(self.palette, PaletteMode::Distribution)?),
            FilterKind::Average => Box::new(Average),
            FilterKind::Square => Box::new(Square { border: self.border }),
            FilterKind::Line => Box::new(Line {
                width: self.wave_width,
                height: self.wave_height,
                stroke: self.stroke,
            }),
        })
    }
}

/// `photo.jpg` becomes `photo.jpg.mosaic.png`.
pub fn default_output(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".mosaic.png");
    PathBuf::from(name)
}
