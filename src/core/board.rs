//! Board module - manages the game grid
//!
//! The grid is an N×N square where each cell holds a tile value; 0 means
//! empty. Uses a flat Vec in row-major order. Coordinates are (row, col)
//! with (0, 0) at the top-left.

use crate::types::Pos;

/// The game grid - N×N tile values using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Create a new empty grid. Callers validate `size >= 2` upstream.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get tile value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[self.index(row, col)]
    }

    /// Set tile value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = 0;
        }
    }

    /// Collect the positions of all empty cells
    pub fn empty_cells(&self) -> Vec<Pos> {
        let mut empty = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.get(row, col) == 0 {
                    empty.push((row, col));
                }
            }
        }
        empty
    }

    /// Largest tile value on the grid (0 when empty)
    pub fn max_value(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Whether any move can still change the grid.
    ///
    /// True if any cell is empty, or any cell equals its right or lower
    /// neighbor. Checking those two directions is sufficient: equality is
    /// symmetric, so every mergeable pair is seen from one of its ends.
    pub fn has_moves(&self) -> bool {
        for row in 0..self.size {
            for col in 0..self.size {
                let value = self.get(row, col);
                if value == 0 {
                    return true;
                }
                if col + 1 < self.size && self.get(row, col + 1) == value {
                    return true;
                }
                if row + 1 < self.size && self.get(row + 1, col) == value {
                    return true;
                }
            }
        }
        false
    }

    /// Copy the grid out as rows (read-only snapshot for callers)
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.size)
            .map(|row| {
                let start = row * self.size;
                self.cells[start..start + self.size].to_vec()
            })
            .collect()
    }

    /// Build a grid from rows. Rows must form a square.
    pub fn from_rows(rows: &[Vec<u32>]) -> Self {
        let size = rows.len();
        assert!(rows.iter().all(|row| row.len() == size));

        let mut grid = Grid::new(size);
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                grid.set(row, col, value);
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(grid.get(row, col), 0);
            }
        }
        assert_eq!(grid.empty_cells().len(), 16);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(4);
        grid.set(1, 2, 8);
        assert_eq!(grid.get(1, 2), 8);
        assert_eq!(grid.get(2, 1), 0);

        grid.set(1, 2, 0);
        assert_eq!(grid.get(1, 2), 0);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new(3);
        grid.set(0, 0, 2);
        grid.set(2, 2, 4);
        grid.clear();
        assert_eq!(grid.empty_cells().len(), 9);
    }

    #[test]
    fn test_empty_cells_row_major_order() {
        let mut grid = Grid::new(2);
        grid.set(0, 0, 2);
        assert_eq!(grid.empty_cells(), vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_max_value() {
        let mut grid = Grid::new(4);
        assert_eq!(grid.max_value(), 0);
        grid.set(0, 0, 2);
        grid.set(3, 3, 1024);
        assert_eq!(grid.max_value(), 1024);
    }

    #[test]
    fn test_has_moves_empty_cell() {
        let mut grid = Grid::from_rows(&[vec![2, 4], vec![8, 0]]);
        assert!(grid.has_moves());
        grid.set(1, 1, 16);
        assert!(!grid.has_moves());
    }

    #[test]
    fn test_has_moves_horizontal_pair() {
        let grid = Grid::from_rows(&[vec![2, 2], vec![4, 8]]);
        assert!(grid.has_moves());
    }

    #[test]
    fn test_has_moves_vertical_pair() {
        let grid = Grid::from_rows(&[vec![2, 4], vec![2, 8]]);
        assert!(grid.has_moves());
    }

    #[test]
    fn test_has_moves_full_alternating() {
        // No empty cells, no equal neighbors in any direction.
        let grid = Grid::from_rows(&[
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
        ]);
        assert!(!grid.has_moves());
    }

    #[test]
    fn test_rows_roundtrip() {
        let rows = vec![vec![2, 0, 4], vec![0, 8, 0], vec![16, 0, 2]];
        let grid = Grid::from_rows(&rows);
        assert_eq!(grid.to_rows(), rows);
    }
}
