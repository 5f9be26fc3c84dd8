//! Shear sort for rectangular matrices
//!
//! Alternates row and column passes until the matrix is in snake
//! (boustrophedon) order: even-index rows read left to right, odd-index rows
//! right to left. [`Matrix::sort`] runs on the calling thread;
//! [`Matrix::sort_parallel`] spreads each row and column pass over scoped
//! workers and produces the same matrix.

use crate::error::{Error, Result};
use crate::search::parallel::ParallelConfig;
use crate::search::parallel::scoped::run_scoped;

/// A non-empty rectangular matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: Vec<Vec<T>>,
    cols: usize,
}

impl<T: Ord + Clone> Matrix<T> {
    /// Validate that `rows` is non-empty and rectangular.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(Error::invalid_matrix("Matrix cannot be empty")),
        };

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(Error::invalid_matrix(format!(
                "Matrix must be rectangular: row {} has {} columns, expected {}",
                i,
                row.len(),
                cols
            )));
        }

        Ok(Self { rows, cols })
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    /// Number of row/column iterations: `ceil(log2(rows)) + 1`, or 1 for a single row.
    pub fn iterations(&self) -> usize {
        let rows = self.num_rows();
        if rows > 1 {
            (usize::BITS - (rows - 1).leading_zeros()) as usize + 1
        } else {
            1
        }
    }

    pub fn sort_row(&mut self, row: usize, ascending: bool) {
        sort_line(&mut self.rows[row], ascending);
    }

    pub fn sort_column(&mut self, col: usize, ascending: bool) {
        let mut column = self.column(col);
        sort_line(&mut column, ascending);
        self.set_column(col, column);
    }

    fn column(&self, col: usize) -> Vec<T> {
        self.rows.iter().map(|row| row[col].clone()).collect()
    }

    fn set_column(&mut self, col: usize, column: Vec<T>) {
        for (row, value) in self.rows.iter_mut().zip(column) {
            row[col] = value;
        }
    }

    /// Even-index rows ascending, odd-index rows descending.
    pub fn sort_rows_phase(&mut self) {
        for row in 0..self.num_rows() {
            self.sort_row(row, row % 2 == 0);
        }
    }

    pub fn sort_columns_phase(&mut self) {
        for col in 0..self.cols {
            self.sort_column(col, true);
        }
    }

    /// Run every iteration of row and column passes.
    pub fn sort(&mut self) {
        for _ in 0..self.iterations() {
            self.sort_rows_phase();
            self.sort_columns_phase();
        }
    }

    /// Elements in snake order; ascending once the matrix is sorted.
    pub fn snake_order(&self) -> Vec<T> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                let mut row = row.clone();
                if i % 2 == 1 {
                    row.reverse();
                }
                row
            })
            .collect()
    }
}

impl<T: Ord + Clone + Send> Matrix<T> {
    /// Same passes as [`Matrix::sort`], with each pass split over workers.
    ///
    /// Rows (then columns) are divided into contiguous blocks, one block per
    /// worker. If a worker fails the matrix is left as a partially sorted
    /// permutation of its elements.
    pub fn sort_parallel(&mut self, config: &ParallelConfig) -> Result<()> {
        for _ in 0..self.iterations() {
            self.sort_rows_parallel(config)?;
            self.sort_columns_parallel(config)?;
        }
        Ok(())
    }

    fn sort_rows_parallel(&mut self, config: &ParallelConfig) -> Result<()> {
        let rows_per_worker = self.num_rows().div_ceil(config.pool_size(self.num_rows()));

        run_scoped(
            "shear-rows",
            config.stack_size,
            self.rows.chunks_mut(rows_per_worker),
            |block_id, block| {
                for (offset, row) in block.iter_mut().enumerate() {
                    let index = block_id * rows_per_worker + offset;
                    sort_line(row, index % 2 == 0);
                }
            },
        )?;
        Ok(())
    }

    fn sort_columns_parallel(&mut self, config: &ParallelConfig) -> Result<()> {
        let mut columns: Vec<Vec<T>> = (0..self.cols).map(|col| self.column(col)).collect();
        let cols_per_worker = self.cols.div_ceil(config.pool_size(self.cols));

        run_scoped(
            "shear-cols",
            config.stack_size,
            columns.chunks_mut(cols_per_worker),
            |_, block| block.iter_mut().for_each(|column| column.sort()),
        )?;

        for (col, column) in columns.into_iter().enumerate() {
            self.set_column(col, column);
        }
        Ok(())
    }
}

fn sort_line<T: Ord>(line: &mut [T], ascending: bool) {
    if ascending {
        line.sort();
    } else {
        line.sort_by(|a, b| b.cmp(a));
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            let line: Vec<String> = row.iter().map(|v| format!("{:4}", v)).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Shear sort `matrix` and return the sorted rows.
pub fn shearsort<T: Ord + Clone>(matrix: Vec<Vec<T>>) -> Result<Vec<Vec<T>>> {
    let mut matrix = Matrix::new(matrix)?;
    matrix.sort();
    Ok(matrix.into_rows())
}

/// Shear sort `matrix` with `worker_count` workers per pass.
pub fn shearsort_parallel<T: Ord + Clone + Send>(
    matrix: Vec<Vec<T>>,
    worker_count: usize,
) -> Result<Vec<Vec<T>>> {
    let mut matrix = Matrix::new(matrix)?;
    matrix.sort_parallel(&ParallelConfig::default().with_workers(worker_count))?;
    Ok(matrix.into_rows())
}
