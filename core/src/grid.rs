use crate::GridError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Fixed-size rectangular grid addressed by `(x, y)`, i.e. `(column, row)`.
///
/// Cells are stored row-major. The shape never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "GridFields<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<Vec<T>>,
}

/// Serialized form of [`Grid`], checked by `TryFrom` before use.
#[derive(Deserialize)]
struct GridFields<T> {
    width: usize,
    height: usize,
    cells: Vec<Vec<T>>,
}

impl<T> TryFrom<GridFields<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(fields: GridFields<T>) -> Result<Self, Self::Error> {
        let mut grid = Grid::from_rows(fields.cells)?;
        if grid.height == 0 {
            // No rows to infer a width from.
            grid.width = fields.width;
        }
        if grid.shape() != (fields.width, fields.height) {
            return Err(GridError::ShapeMismatch {
                width: fields.width,
                height: fields.height,
                actual_width: grid.width,
                actual_height: grid.height,
            });
        }
        Ok(grid)
    }
}

impl<T> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![vec![fill; width]; height];
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a grid by calling `f(x, y)` for every cell.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let cells = (0..height)
            .map(|y| (0..width).map(|x| f(x, y)).collect())
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a grid from rows of equal length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::RaggedRow {
                row,
                len: cells.len(),
                expected: width,
            });
        }
        Ok(Self {
            width,
            height: rows.len(),
            cells: rows,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn encloses(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn check(&self, x: usize, y: usize) -> Result<(), GridError> {
        if self.encloses(x, y) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<&T, GridError> {
        self.check(x, y)?;
        Ok(&self.cells[y][x])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut T, GridError> {
        self.check(x, y)?;
        Ok(&mut self.cells[y][x])
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), GridError> {
        *self.get_mut(x, y)? = value;
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Occurrences of each distinct value, ordered by value.
    pub fn value_counts(&self) -> BTreeMap<T, usize>
    where
        T: Ord + Clone,
    {
        let mut counts = BTreeMap::new();
        for value in self.cells.iter().flatten() {
            *counts.entry(value.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Positions of each distinct value, ordered by value.
    ///
    /// Within a value, positions run column by column, top to bottom.
    pub fn element_positions(&self) -> BTreeMap<T, Vec<(usize, usize)>>
    where
        T: Ord + Clone,
    {
        let mut positions: BTreeMap<T, Vec<(usize, usize)>> = BTreeMap::new();
        for x in 0..self.width {
            for y in 0..self.height {
                positions
                    .entry(self.cells[y][x].clone())
                    .or_default()
                    .push((x, y));
            }
        }
        positions
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.cells[y][x]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        &mut self.cells[y][x]
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
