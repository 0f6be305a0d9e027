use rand::prelude::*;
use serde::{Serialize, Deserialize};

/// Dense row-major weight matrix. Row `r` holds the incoming weights of node `r`
/// in the layer above; column `c` indexes the parent node in the layer below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Wraps nested rows. `cols` is taken from the first row; use
    /// `is_rectangular` to detect ragged input.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data,
        }
    }

    /// Uniform samples in `[-range, range)` drawn from a caller-owned rng, so
    /// several matrices can share one seeded stream.
    pub fn random_with<R: Rng>(rows: usize, cols: usize, range: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 * range - range;
            }
        }
        res
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True when every row has exactly `cols` entries.
    pub fn is_rectangular(&self) -> bool {
        self.data.len() == self.rows && self.data.iter().all(|row| row.len() == self.cols)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl From<Vec<Vec<f64>>> for Matrix {
    fn from(data: Vec<Vec<f64>>) -> Self {
        Matrix::from_data(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_data_takes_shape_from_rows() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(m.shape(), (2, 3));
        assert!(m.is_rectangular());
        assert_eq!(m.data[1], vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn ragged_rows_are_detected() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(!m.is_rectangular());
    }

    #[test]
    fn empty_matrix_has_zero_shape() {
        let m = Matrix::from_data(vec![]);
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_rectangular());
    }

    #[test]
    fn seeded_random_is_reproducible_and_bounded() {
        let a = Matrix::random_with(3, 4, 0.5, &mut StdRng::seed_from_u64(7));
        let b = Matrix::random_with(3, 4, 0.5, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.data.iter().flatten().all(|w| (-0.5..0.5).contains(w)));
    }
}
