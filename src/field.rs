//! Dense output containers.
//!
//! Storage is flat and column-major (`index = x * height + y`), so each column
//! is one contiguous slice of length `height`.

use serde::Serialize;

/// Rank-2 field: `width` columns of `height` samples.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Grid {
    /// Fills every cell from `cell(x, y)`, column by column.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut cell: impl FnMut(usize, usize) -> f64,
    ) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                data.push(cell(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[x * self.height + y])
    }

    /// All samples of column `x`.
    ///
    /// # Panics
    ///
    /// Panics when `x >= width`.
    pub fn column(&self, x: usize) -> &[f64] {
        let start = x * self.height;
        &self.data[start..start + self.height]
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        // chunks_exact panics on a zero height
        (0..self.width).map(move |x| self.column(x))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Smallest and largest finite samples, or `None` if there are none.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        min_max(&self.data)
    }
}

/// Rank-3 field indexed `(x, y, z)`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Volume {
    width: usize,
    height: usize,
    depth: usize,
    data: Vec<f64>,
}

impl Volume {
    pub fn from_fn(
        width: usize,
        height: usize,
        depth: usize,
        mut cell: impl FnMut(usize, usize, usize) -> f64,
    ) -> Self {
        let mut data = Vec::with_capacity(width * height * depth);
        for x in 0..width {
            for y in 0..height {
                for z in 0..depth {
                    data.push(cell(x, y, z));
                }
            }
        }
        Self {
            width,
            height,
            depth,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<f64> {
        if x >= self.width || y >= self.height || z >= self.depth {
            return None;
        }
        Some(self.data[(x * self.height + y) * self.depth + z])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn min_max(&self) -> Option<(f64, f64)> {
        min_max(&self.data)
    }
}

fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    data.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_column_major() {
        let grid = Grid::from_fn(3, 2, |x, y| (x * 10 + y) as f64);
        assert_eq!(grid.as_slice(), &[0.0, 1.0, 10.0, 11.0, 20.0, 21.0]);
        assert_eq!(grid.column(1), &[10.0, 11.0]);
        assert_eq!(grid.get(2, 1), Some(21.0));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn columns_match_width_and_height() {
        let grid = Grid::from_fn(4, 7, |_, _| 0.0);
        assert_eq!(grid.columns().len(), 4);
        assert!(grid.columns().all(|column| column.len() == 7));
    }

    #[test]
    fn volume_indexes_depth_fastest() {
        let volume = Volume::from_fn(2, 3, 4, |x, y, z| (x * 100 + y * 10 + z) as f64);
        assert_eq!(volume.as_slice().len(), 24);
        assert_eq!(volume.as_slice()[1], 1.0);
        assert_eq!(volume.get(1, 2, 3), Some(123.0));
        assert_eq!(volume.get(1, 3, 0), None);
    }

    #[test]
    fn min_max_skips_non_finite() {
        let grid = Grid::from_fn(1, 4, |_, y| [0.5, f64::NAN, -0.25, f64::INFINITY][y]);
        assert_eq!(grid.min_max(), Some((-0.25, 0.5)));
        let empty = Grid::from_fn(0, 0, |_, _| 0.0);
        assert_eq!(empty.min_max(), None);
    }
}
