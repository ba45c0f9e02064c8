// Tile grid walked by tiled filters

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Region {
        Region {
            x: x,
            y: y,
            width: width,
            height: height,
        }
    }

    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Absolute coordinates of every pixel, row by row.
    pub fn coords(self) -> impl Iterator<Item = (u32, u32)> {
        (self.y..self.y + self.height)
            .flat_map(move |y| (self.x..self.x + self.width).map(move |x| (x, y)))
    }
}

/// Splits a `width` x `height` image into `tile` sized squares; tiles on the
/// right and bottom edges are clipped to the image.
pub fn regions(width: u32, height: u32, tile: u32)
        -> impl Iterator<Item = Region> {
    let step = tile.max(1) as usize;
    (0..height).step_by(step).flat_map(move |y| {
        (0..width).step_by(step).map(move |x| {
            Region::new(x, y, (width - x).min(step as u32),
                        (height - y).min(step as u32))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_tiles_cover_every_pixel() {
        let tiles: Vec<_> = regions(3, 2, 1).collect();
        assert_eq!(tiles.len(), 6);
        assert!(tiles.iter().all(|r| r.area() == 1));
        assert_eq!(tiles[4], Region::new(1, 1, 1, 1));
    }

    #[test]
    fn edge_tiles_are_clipped() {
        let tiles: Vec<_> = regions(10, 7, 4).collect();
        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles[2], Region::new(8, 0, 2, 4));
        assert_eq!(tiles[5], Region::new(8, 4, 2, 3));
        assert_eq!(tiles.iter().map(|r| r.area()).sum::<u32>(), 70);
    }

    #[test]
    fn empty_image_has_no_tiles() {
        assert_eq!(regions(0, 5, 2).count(), 0);
    }

    #[test]
    fn coords_walk_rows() {
        let coords: Vec<_> = Region::new(2, 3, 2, 2).coords().collect();
        assert_eq!(coords, vec![(2, 3), (3, 3), (2, 4), (3, 4)]);
    }
}
