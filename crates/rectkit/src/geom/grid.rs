//! Dense binary/float raster, row-major, used as input to contour extraction.

use std::fmt;

/// A flattened-length mismatch with the declared `(height, width)` shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterError {
    pub expected: usize,
    pub got: usize,
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "raster shape mismatch: expected {} cells, got {}",
            self.expected, self.got
        )
    }
}

impl std::error::Error for RasterError {}

/// A dense `height x width` raster, stored row-major.
///
/// A cell is "set" when its value is nonzero; `get_contours` only cares
/// about that boolean, but the backing store keeps `f64` so a `Grid` can
/// also carry arbitrary sampled data for the `Display` pretty-printer.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    data: Vec<f64>,
    height: usize,
    width: usize,
}

impl Grid {
    pub fn zeros(height: usize, width: usize) -> Self {
        Grid {
            data: vec![0.0; height * width],
            height,
            width,
        }
    }

    /// Builds a grid from row-major data, checking the flattened length
    /// against the declared shape. This is the system boundary where a
    /// malformed raster is rejected; every other raster operation assumes
    /// a valid `Grid` and cannot fail.
    pub fn from_row_major(height: usize, width: usize, data: Vec<f64>) -> Result<Self, RasterError> {
        let expected = height * width;
        if data.len() != expected {
            return Err(RasterError {
                expected,
                got: data.len(),
            });
        }
        Ok(Grid { data, height, width })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.width + col]
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.get(row, col) != 0.0
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.width..(row + 1) * self.width]
    }

    /// Returns the transpose, swapping rows and columns.
    ///
    /// Contour extraction does *not* use this to derive vertical runs from
    /// the horizontal scan: a transpose is a reflection, and reusing the
    /// horizontal "interior on the left" rule on transposed data would flip
    /// the orientation convention for every vertical edge. Kept as a general
    /// raster utility.
    pub fn transpose(&self) -> Grid {
        let mut out = Grid::zeros(self.width, self.height);
        for r in 0..self.height {
            for c in 0..self.width {
                out.data[c * self.height + r] = self.get(r, c);
            }
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.height {
            for (c, v) in self.row(r).iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>6.3}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_length() {
        let err = Grid::from_row_major(2, 3, vec![0.0; 5]).unwrap_err();
        assert_eq!(err, RasterError { expected: 6, got: 5 });
    }

    #[test]
    fn transpose_swaps_axes() {
        let g = Grid::from_row_major(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let t = g.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.get(0, 0), 1.0);
        assert_eq!(t.get(1, 0), 2.0);
        assert_eq!(t.get(0, 1), 4.0);
        assert_eq!(t.get(2, 1), 6.0);
    }

    #[test]
    fn display_prints_aligned_rows() {
        let g = Grid::from_row_major(1, 2, vec![1.0, 0.0]).unwrap();
        let s = format!("{}", g);
        assert!(s.contains("1.000"));
        assert!(s.contains("0.000"));
    }
}
