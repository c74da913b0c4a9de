//! World module - the block grid
//!
//! The world is a fixed `X × Y × Z` grid where each cell is empty or holds a
//! block kind. Cells live in one flat vector, layer-major (`[z][y][x]`).
//! Coordinates: x spans columns, y spans rows, z spans depth (up is +z).
//! Extents are fixed when the world is created.

use crate::types::{BlockKind, Cell, Vec3, X_BLOCKS, Y_BLOCKS, Z_BLOCKS};

/// Grid dimensions in blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Extent {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    pub fn volume(&self) -> usize {
        self.x * self.y * self.z
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::new(X_BLOCKS, Y_BLOCKS, Z_BLOCKS)
    }
}

/// The block grid.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    extent: Extent,
    /// Flat array of cells, layer-major order ((z * Y + y) * X + x)
    cells: Vec<Cell>,
}

impl World {
    /// Create an empty world with the default 20x20x10 extent
    pub fn new() -> Self {
        Self::with_extent(Extent::default())
    }

    /// Create an empty world of the given size
    pub fn with_extent(extent: Extent) -> Self {
        Self {
            extent,
            cells: vec![None; extent.volume()],
        }
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        if x >= self.extent.x || y >= self.extent.y || z >= self.extent.z {
            return None;
        }
        Some((z * self.extent.y + y) * self.extent.x + x)
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Cell at depth `z`, row `y`, column `x`.
    ///
    /// # Panics
    ///
    /// Indices must lie inside the extent. Callers check [`World::is_outside`]
    /// first; reaching the panic is a bug in the caller.
    #[inline(always)]
    pub fn cell_at(&self, z: usize, y: usize, x: usize) -> Cell {
        match self.index(x, y, z) {
            Some(idx) => self.cells[idx],
            None => panic!(
                "cell ({x}, {y}, {z}) outside world extent {:?}",
                self.extent
            ),
        }
    }

    /// True iff any coordinate lies outside `[0, extent)` on its axis.
    ///
    /// NaN coordinates count as outside.
    #[inline(always)]
    pub fn is_outside(&self, pos: Vec3) -> bool {
        let inside = |v: f64, len: usize| v >= 0.0 && v < len as f64;
        !(inside(pos.x, self.extent.x) && inside(pos.y, self.extent.y) && inside(pos.z, self.extent.z))
    }

    /// Cell containing a world-space point, or `None` outside the grid.
    pub fn cell_at_point(&self, pos: Vec3) -> Option<Cell> {
        if self.is_outside(pos) {
            return None;
        }
        Some(self.cell_at(pos.z as usize, pos.y as usize, pos.x as usize))
    }

    /// Get cell at (x, y, z)
    /// Returns None if out of bounds
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<Cell> {
        self.index(x, y, z).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y, z)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, z: usize, cell: Cell) -> bool {
        match self.index(x, y, z) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: usize, y: usize, z: usize) -> bool {
        matches!(self.get(x, y, z), Some(Some(_)))
    }

    /// Fill the inclusive box `min..=max`, clipped to the extent.
    ///
    /// Returns the number of cells written.
    pub fn fill(&mut self, min: (usize, usize, usize), max: (usize, usize, usize), cell: Cell) -> usize {
        let hi_x = max.0.min(self.extent.x.saturating_sub(1));
        let hi_y = max.1.min(self.extent.y.saturating_sub(1));
        let hi_z = max.2.min(self.extent.z.saturating_sub(1));

        let mut written = 0;
        for z in min.2..=hi_z {
            for y in min.1..=hi_y {
                for x in min.0..=hi_x {
                    if self.set(x, y, z, cell) {
                        written += 1;
                    }
                }
            }
        }
        written
    }

    /// Number of cells holding the given kind.
    pub fn count_kind(&self, kind: BlockKind) -> usize {
        self.cells.iter().filter(|c| **c == Some(kind)).count()
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire world
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
