// Color histogram over 4-bit-per-channel RGBA keys

use image::{GenericImageView, Rgba};

pub const HISTOGRAM_SIZE: usize = 1 << 16;

pub type Histogram = [u64; HISTOGRAM_SIZE];

/// Packs the top four bits of each 16-bit channel into a bucket key,
/// red in the most significant nibble and alpha in the least.
pub fn index16(r: u16, g: u16, b: u16, a: u16) -> u16 {
    (r >> 12) << 12 | (g >> 12) << 8 | (b >> 12) << 4 | a >> 12
}

/// Bucket key of an 8-bit color.
pub fn bucket_of(color: Rgba<u8>) -> u16 {
    let widen = |c: u8| c as u16 * 257;
    index16(widen(color[0]), widen(color[1]), widen(color[2]), widen(color[3]))
}

pub fn generate_histogram<I>(image: &I) -> Box<Histogram>
        where I: GenericImageView<Pixel = Rgba<u16>> {
    let mut histo = Box::new([0; HISTOGRAM_SIZE]);
    for (_, _, px) in image.pixels() {
        histo[index16(px[0], px[1], px[2], px[3]) as usize] += 1;
    }
    histo
}

pub fn total(histogram: &Histogram) -> u64 {
    histogram.iter().sum()
}
