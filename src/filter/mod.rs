// Filters turning source regions into mosaic output

use image::{ImageBuffer, Rgba, RgbaImage};
use log::info;

use crate::error::{Error, Result};
use crate::histogram::{generate_histogram, Histogram};
use crate::palette::Color;
use crate::tile::{regions, Region};

mod average;
mod line;
mod palette;
mod square;

pub use self::average::Average;
pub use self::line::Line;
pub use self::palette::{PaletteFilter, PaletteMode};
pub use self::square::Square;

/// Decoded source image, 16 bits per channel.
pub type SourceImage = ImageBuffer<Rgba<u16>, Vec<u16>>;

pub trait Filter {
    /// Called once with the source histogram before any transform.
    fn init(&mut self, _histogram: &Histogram) -> Result<()> {
        Ok(())
    }

    /// Whether `transform` runs per tile or once over the whole image.
    fn tiled(&self) -> bool;

    fn transform(&self, input: &SourceImage, region: Region, output: &mut RgbaImage);
}

/// Mean color of a region, channels scaled down to 8 bits.
pub fn average_color(input: &SourceImage, region: Region) -> Color {
    let mut sums = [0u64; 4];
    for (x, y) in region.coords() {
        let px = input.get_pixel(x, y);
        for i in 0..4 {
            sums[i] += (px[i] >> 8) as u64;
        }
    }
    let count = region.area().max(1) as u64;
    Rgba([
        (sums[0] / count) as u8,
        (sums[1] / count) as u8,
        (sums[2] / count) as u8,
        (sums[3] / count) as u8,
    ])
}

pub fn fill(output: &mut RgbaImage, region: Region, color: Color) {
    for (x, y) in region.coords() {
        output.put_pixel(x, y, color);
    }
}

/// Runs `filter` over `input`, walking a grid of `tile` sized regions when
/// the filter is tiled.
pub fn process<F>(input: &SourceImage, filter: &mut F, tile: u32) -> Result<RgbaImage>
        where F: Filter + ?Sized {
    if tile == 0 {
        return Err(Error::InvalidTileSize);
    }
    let (width, height) = input.dimensions();
    let histogram = generate_histogram(input);
    filter.init(&histogram)?;

    let mut output = RgbaImage::new(width, height);
    if filter.tiled() {
        info!("transforming {}x{} in {}px tiles", width, height, tile);
        for region in regions(width, height, tile) {
            filter.transform(input, region, &mut output);
        }
    } else {
        info!("transforming {}x{} in one pass", width, height);
        filter.transform(input, Region::new(0, 0, width, height), &mut output);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting {
        tiled: bool,
        seen: std::cell::Cell<u32>,
    }

    impl Filter for Counting {
        fn tiled(&self) -> bool {
            self.tiled
        }

        fn transform(&self, _: &SourceImage, region: Region, output: &mut RgbaImage) {
            self.seen.set(self.seen.get() + 1);
            fill(output, region, Rgba([1, 2, 3, 4]));
        }
    }

    #[test]
    fn tiled_filters_see_every_tile() {
        let input = SourceImage::new(5, 4);
        let mut f = Counting { tiled: true, seen: Default::default() };
        let out = process(&input, &mut f, 2).unwrap();
        assert_eq!(f.seen.get(), 6);
        assert!(out.pixels().all(|px| px.0 == [1, 2, 3, 4]));
    }

    #[test]
    fn untiled_filters_run_once() {
        let input = SourceImage::new(5, 4);
        let mut f = Counting { tiled: false, seen: Default::default() };
        process(&input, &mut f, 1).unwrap();
        assert_eq!(f.seen.get(), 1);
    }

    #[test]
    fn zero_tile_is_rejected() {
        let input = SourceImage::new(1, 1);
        let mut f = Counting { tiled: true, seen: Default::default() };
        assert!(matches!(process(&input, &mut f, 0), Err(Error::InvalidTileSize)));
    }

    #[test]
    fn average_scales_to_eight_bits() {
        let input = SourceImage::from_fn(2, 1, |x, _| {
            if x == 0 { Rgba([0xFFFF, 0, 0x1000, 0xFFFF]) }
            else { Rgba([0x0000, 0, 0x3000, 0xFFFF]) }
        });
        let c = average_color(&input, Region::new(0, 0, 2, 1));
        assert_eq!(c, Rgba([127, 0, 0x20, 255]));
    }
}
