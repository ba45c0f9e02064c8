use image::{Rgba, RgbaImage};

use crate::tile::Region;

use super::{Filter, SourceImage};

/// Keeps a `border` wide outline of every tile and blacks out the inside.
pub struct Square {
    pub border: u32,
}

impl Square {
    fn on_border(&self, region: Region, x: u32, y: u32) -> bool {
        let w = self.border;
        y - region.y <= w || region.y + region.height - y <= w
            || x - region.x <= w || region.x + region.width - x <= w
    }
}

impl Filter for Square {
    fn tiled(&self) -> bool {
        true
    }

    fn transform(&self, input: &SourceImage, region: Region, output: &mut RgbaImage) {
        for (x, y) in region.coords() {
            let c = if self.on_border(region, x, y) {
                let px = input.get_pixel(x, y);
                Rgba([(px[0] >> 8) as u8, (px[1] >> 8) as u8,
                      (px[2] >> 8) as u8, (px[3] >> 8) as u8])
            } else {
                Rgba([0, 0, 0, 0xFF])
            };
            output.put_pixel(x, y, c);
        }
    }
}
