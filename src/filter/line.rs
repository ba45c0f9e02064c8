use std::f64::consts::PI;

use image::{Rgba, RgbaImage};

use crate::tile::Region;

use super::{fill, Filter, SourceImage};

const PAPER: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
const INK: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xFF]);

/// Draws one sine wave per band of `height` rows whose amplitude follows
/// the darkness of the image underneath. A full period spans `width` pixels.
pub struct Line {
    pub width: u32,
    pub height: u32,
    pub stroke: u32,
}

fn gray_level(input: &SourceImage, region: Region) -> f64 {
    let mut sum = 0.0;
    for (x, y) in region.coords() {
        let px = input.get_pixel(x, y);
        sum += (px[0] >> 8) as f64 + (px[1] >> 8) as f64 + (px[2] >> 8) as f64;
    }
    sum / (region.area().max(1) * 3) as f64
}

impl Line {
    fn cell(&self) -> u32 {
        (self.width / 2).max(1)
    }

    // One cell worth of wave, fading from the level of the previous cell
    fn wave(&self, from: f64, to: f64, x: u32, y: u32, points: &mut Vec<(i64, i64)>) {
        let steps = self.cell();
        let period = self.width.max(1);
        let amplitude = (self.height / 2) as f64;
        for i in 0..steps {
            let deg = ((x + i) % period) as f64 / period as f64 * PI * 2.0;
            let val = (steps - i) as f64 / steps as f64 * from
                + i as f64 / steps as f64 * to;
            let val = 255.0 - val;
            let d = (deg.sin() * val / 255.0 * amplitude) as i64;
            points.push(((x + i) as i64, (y + self.height / 2) as i64 + d));
        }
    }

    fn stamp(&self, output: &mut RgbaImage, region: Region, cx: i64, cy: i64) {
        let size = self.stroke.max(1) as i64;
        let left = cx - size / 2;
        let top = cy - size / 2;
        for y in top.max(region.y as i64)..(top + size).min((region.y + region.height) as i64) {
            for x in left.max(region.x as i64)..(left + size).min((region.x + region.width) as i64) {
                output.put_pixel(x as u32, y as u32, INK);
            }
        }
    }

    fn stroke(&self, output: &mut RgbaImage, region: Region, points: &[(i64, i64)]) {
        for seg in points.windows(2) {
            let (x0, y0) = seg[0];
            let (x1, y1) = seg[1];
            let n = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
            for k in 0..=n {
                self.stamp(output, region, x0 + (x1 - x0) * k / n, y0 + (y1 - y0) * k / n);
            }
        }
        if let [(x, y)] = points {
            self.stamp(output, region, *x, *y);
        }
    }
}

impl Filter for Line {
    fn tiled(&self) -> bool {
        false
    }

    fn transform(&self, input: &SourceImage, region: Region, output: &mut RgbaImage) {
        fill(output, region, PAPER);

        let w = self.cell();
        let h = self.height.max(1);
        let right = region.x + region.width;
        let bottom = region.y + region.height;

        // values[0] stays at zero and seeds the first cell of every band
        let mut values = vec![0.0; (region.width / w + 2) as usize];
        let mut points = Vec::new();

        let mut y = region.y;
        while y + h <= bottom {
            let mut i = 1;
            let mut x = region.x;
            while x + w < right {
                values[i] = gray_level(input, Region::new(x, y, w, h));
                i += 1;
                x += w;
            }

            points.clear();
            let mut i = 1;
            let mut x = region.x;
            while x + w < right {
                self.wave(values[i - 1], values[i], x, y, &mut points);
                i += 1;
                x += w;
            }
            self.stroke(output, region, &points);
            y += h;
        }
    }
}
