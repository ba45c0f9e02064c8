use image::RgbaImage;
use log::info;

use crate::error::{Error, Result};
use crate::histogram::{bucket_of, Histogram};
use crate::palette::Color;
use crate::partition::{partition, PartitionIndex};
use crate::tile::Region;

use super::{average_color, fill, Filter, SourceImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteMode {
    /// Nearest palette color to the region average
    Closest,
    /// Palette slot owning the region average's histogram bucket
    Distribution,
}

pub struct PaletteFilter {
    palette: Vec<Color>,
    mode: PaletteMode,
    index: Option<PartitionIndex>,
}

fn diff(a: u8, b: u8) -> u32 {
    (a as i32 - b as i32).unsigned_abs()
}

impl PaletteFilter {
    pub fn new(palette: &[Color], mode: PaletteMode) -> Result<PaletteFilter> {
        if palette.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(PaletteFilter {
            palette: palette.to_vec(),
            mode: mode,
            index: None,
        })
    }

    pub fn index(&self) -> Option<&PartitionIndex> {
        self.index.as_ref()
    }

    pub fn closest(&self, c: Color) -> Color {
        let mut best = self.palette[0];
        let mut best_delta = u32::MAX;
        for &p in self.palette.iter() {
            let d = (diff(p[0], c[0]) + diff(p[1], c[1]) + diff(p[2], c[2])) / 3;
            if d < best_delta {
                best_delta = d;
                best = p;
            }
        }
        best
    }

    pub fn distribution(&self, c: Color) -> Color {
        match self.index {
            Some(ref index) => self.palette[index.slot_for(bucket_of(c))],
            None => self.closest(c),
        }
    }
}

impl Filter for PaletteFilter {
    fn init(&mut self, histogram: &Histogram) -> Result<()> {
        if self.mode == PaletteMode::Distribution {
            let index = partition(histogram, self.palette.len())?;
            info!("palette partitioned, badness {}", index.badness());
            self.index = Some(index);
        }
        Ok(())
    }

    fn tiled(&self) -> bool {
        true
    }

    fn transform(&self, input: &SourceImage, region: Region, output: &mut RgbaImage) {
        let avg = average_color(input, region);
        let color = match self.mode {
            PaletteMode::Closest => self.closest(avg),
            PaletteMode::Distribution => self.distribution(avg),
        };
        fill(output, region, color);
    }
}
