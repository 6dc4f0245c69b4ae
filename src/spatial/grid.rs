//! Dense generic 2D grid with bounds-checked access
//!
//! Positions are `[x, y]` world coordinates. Reads outside the grid return
//! `None` and writes outside the grid are silently ignored, so neighbour
//! arithmetic never needs pre-clamping. Dimensions are fixed at creation.

use ndarray::{Array2, ArrayView1};

/// World coordinates as `[x, y]`
///
/// `x` grows rightward, `y` grows downward. Negative values are
/// representable and simply fall outside every grid.
pub type Position = [i32; 2];

/// Dense row-major 2D container, generic over the cell type
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    cells: Array2<T>,
}

impl<T> Grid<T> {
    /// Create a `width` x `height` grid with every cell set to `value`
    pub fn repeat(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            cells: Array2::from_elem((height, width), value),
        }
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    // Array2 is indexed (row, col); positions are [x, y]
    fn index(&self, pos: Position) -> Option<(usize, usize)> {
        let [x, y] = pos;
        if x < 0 || y < 0 {
            return None;
        }
        let (col, row) = (x as usize, y as usize);
        (col < self.width() && row < self.height()).then_some((row, col))
    }

    /// Read the cell at `pos`, `None` when out of bounds
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.index(pos).and_then(|index| self.cells.get(index))
    }

    /// Mutable access to the cell at `pos`, `None` when out of bounds
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.index(pos).and_then(|index| self.cells.get_mut(index))
    }

    /// Overwrite the cell at `pos`; writes outside the grid are ignored
    pub fn set(&mut self, pos: Position, value: T) {
        if let Some(cell) = self.get_mut(pos) {
            *cell = value;
        }
    }

    /// Shape-preserving element-wise transformation
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.map(f),
        }
    }

    /// Shape-preserving transformation with the `[x, y]` position of each cell
    pub fn indexed_map<U>(&self, mut f: impl FnMut(Position, &T) -> U) -> Grid<U> {
        Grid {
            cells: Array2::from_shape_fn((self.height(), self.width()), |(row, col)| {
                f([col as i32, row as i32], &self.cells[(row, col)])
            }),
        }
    }

    /// Row-major fold over every cell
    pub fn fold<A>(&self, init: A, f: impl FnMut(A, &T) -> A) -> A {
        self.cells.iter().fold(init, f)
    }

    /// Row-major iteration with the `[x, y]` position of each cell
    pub fn indexed_cells(&self) -> impl Iterator<Item = (Position, &T)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ([col as i32, row as i32], cell))
    }

    /// Ordered rows, top to bottom (presentation use)
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, T>> {
        self.cells.outer_iter()
    }
}
