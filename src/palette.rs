// Built-in palettes

use image::Rgba;

use crate::error::{Error, Result};

pub type Color = Rgba<u8>;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Rgba([r, g, b, 0xFF])
}

pub const EARTH: &[Color] = &[
    rgb(0xCB, 0x99, 0x7E),
    rgb(0xDD, 0xBE, 0xA9),
    rgb(0xFF, 0xE8, 0xD6),
    rgb(0xB7, 0xB7, 0xA4),
    rgb(0xA5, 0xA5, 0x8D),
    rgb(0x6B, 0x70, 0x5C),
];

pub const BLUSH: &[Color] = &[
    rgb(255, 205, 178),
    rgb(255, 180, 162),
    rgb(229, 152, 155),
    rgb(181, 131, 141),
    rgb(109, 104, 117),
];

pub const VIVID: &[Color] = &[
    rgb(239, 71, 111),
    rgb(255, 209, 102),
    rgb(6, 214, 160),
    rgb(17, 138, 178),
    rgb(7, 59, 76),
];

pub const PASTEL: &[Color] = &[
    rgb(254, 197, 187),
    rgb(252, 213, 206),
    rgb(250, 225, 221),
    rgb(248, 237, 235),
    rgb(232, 232, 228),
    rgb(216, 226, 220),
    rgb(236, 228, 219),
    rgb(255, 229, 217),
    rgb(255, 215, 186),
    rgb(254, 200, 154),
];

pub const NAVY: &[Color] = &[
    rgb(0x00, 0x30, 0x50),
    rgb(0x70, 0x96, 0xA0),
    rgb(0xB0, 0xB7, 0xA7),
    rgb(0xFA, 0xE3, 0xAD),
    rgb(0xDA, 0x14, 0x15),
];

pub const PALETTES: &[(&str, &[Color])] = &[
    ("earth", EARTH),
    ("blush", BLUSH),
    ("vivid", VIVID),
    ("pastel", PASTEL),
    ("navy", NAVY),
];

/// Looks a palette up by name or by its position in `PALETTES`.
pub fn by_name(name: &str) -> Result<&'static [Color]> {
    let name = name.trim().to_ascii_lowercase();
    if let Ok(n) = name.parse::<usize>() {
        return PALETTES.get(n)
            .map(|p| p.1)
            .ok_or_else(|| Error::UnknownPalette(name.clone()));
    }
    PALETTES.iter()
        .find(|p| p.0 == name)
        .map(|p| p.1)
        .ok_or_else(|| Error::UnknownPalette(name.clone()))
}

/// Renders the palette as a row of ANSI true-color cells.
pub fn swatch(palette: &[Color]) -> String {
    let mut out = String::new();
    for c in palette {
        out.push_str(&format!("\x1b[48;2;{};{};{}m  \x1b[m", c[0], c[1], c[2]));
    }
    out
}
