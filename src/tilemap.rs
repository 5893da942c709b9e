/// A point on the tile grid, 0-indexed from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A fixed-size 2D tile grid stored row-major.
///
/// Unlike a world map this grid never wraps: a tile map has hard edges and
/// the outermost ring of cells is its border.
#[derive(Clone, Debug, PartialEq)]
pub struct Tilemap<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Tilemap<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T: Clone> Tilemap<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Index into the data array. Panics on out-of-range coordinates.
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "tile ({}, {}) out of bounds for {}x{} map",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    pub fn get_at(&self, p: Point) -> &T {
        self.get(p.x, p.y)
    }

    pub fn set_at(&mut self, p: Point, value: T) {
        self.set(p.x, p.y, value);
    }

    /// Get a tile by signed coordinates, `None` when outside the map.
    pub fn get_signed(&self, x: isize, y: isize) -> Option<&T> {
        if self.contains(x, y) {
            Some(self.get(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Whether signed coordinates fall inside the map.
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// True for cells on the outermost ring.
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    /// True for in-bounds cells that are not on the border.
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && !self.is_border(x, y)
    }

    /// Largest interior x coordinate (`width - 2`).
    pub fn interior_max_x(&self) -> usize {
        self.width.saturating_sub(2)
    }

    /// Largest interior y coordinate (`height - 2`).
    pub fn interior_max_y(&self) -> usize {
        self.height.saturating_sub(2)
    }

    /// Get neighbors (4-connectivity, no wrapping).
    /// Returns up to 4 neighbors (left, right, up, down).
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut result = Vec::with_capacity(4);

        if x > 0 {
            result.push((x - 1, y));
        }
        if x + 1 < self.width {
            result.push((x + 1, y));
        }
        if y > 0 {
            result.push((x, y - 1));
        }
        if y + 1 < self.height {
            result.push((x, y + 1));
        }

        result
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % self.width;
            let y = idx / self.width;
            (x, y, val)
        })
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.width.max(1))
    }
}
