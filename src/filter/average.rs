use image::RgbaImage;

use crate::tile::Region;

use super::{average_color, fill, Filter, SourceImage};

/// Replaces every tile with its mean color.
pub struct Average;

impl Filter for Average {
    fn tiled(&self) -> bool {
        true
    }

    fn transform(&self, input: &SourceImage, region: Region, output: &mut RgbaImage) {
        fill(output, region, average_color(input, region));
    }
}
