use crate::{Direction, Grid, GridError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Result of [`Navigator::look`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sight<'a, T> {
    /// Zero-step look: the value under the cursor.
    Here(&'a T),
    /// Values starting one step away from the cursor, nearest first.
    Ahead(Vec<&'a T>),
}

impl<'a, T> Sight<'a, T> {
    pub fn here(&self) -> Option<&'a T> {
        match self {
            Sight::Here(value) => Some(*value),
            Sight::Ahead(_) => None,
        }
    }

    /// The line of values ahead; empty for a zero-step look.
    pub fn ahead(&self) -> &[&'a T] {
        match self {
            Sight::Here(_) => &[],
            Sight::Ahead(values) => values,
        }
    }

    /// Owned copy of every value seen.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        match self {
            Sight::Here(value) => vec![(*value).clone()],
            Sight::Ahead(values) => values.iter().map(|v| (*v).clone()).collect(),
        }
    }
}

/// A cursor (position and heading) moving over a [`Grid`].
///
/// The navigator holds its grid by value, so `clone` forks both the cursor
/// and the cells into an independent snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "NavigatorFields<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Navigator<T> {
    grid: Grid<T>,
    x: usize,
    y: usize,
    heading: Direction,
}

/// Serialized form of [`Navigator`]; the cursor is checked against the grid.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct NavigatorFields<T> {
    grid: Grid<T>,
    x: usize,
    y: usize,
    heading: Direction,
}

impl<T> TryFrom<NavigatorFields<T>> for Navigator<T> {
    type Error = GridError;

    fn try_from(fields: NavigatorFields<T>) -> Result<Self, Self::Error> {
        Navigator::with_cursor(fields.grid, (fields.x, fields.y), fields.heading)
    }
}

impl<T> Navigator<T> {
    /// Cursor at `(0, 0)` heading north. Fails for an empty grid.
    pub fn new(grid: Grid<T>) -> Result<Self, GridError> {
        Self::with_cursor(grid, (0, 0), Direction::N)
    }

    pub fn with_cursor(
        grid: Grid<T>,
        (x, y): (usize, usize),
        heading: Direction,
    ) -> Result<Self, GridError> {
        grid.get(x, y)?;
        Ok(Self {
            grid,
            x,
            y,
            heading,
        })
    }

    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid<T> {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Move the cursor to `(x, y)`. On error the cursor stays put.
    pub fn set_position(&mut self, (x, y): (usize, usize)) -> Result<(), GridError> {
        self.grid.get(x, y)?;
        self.x = x;
        self.y = y;
        Ok(())
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn set_heading(&mut self, heading: Direction) {
        self.heading = heading;
    }

    /// Value under the cursor.
    pub fn here(&self) -> &T {
        &self.grid[(self.x, self.y)]
    }

    pub fn at_edge(&self) -> bool {
        let (width, height) = self.grid.shape();
        self.x == 0 || self.x == width - 1 || self.y == 0 || self.y == height - 1
    }

    /// Steps available from the cursor before leaving the grid.
    ///
    /// Diagonals are limited by whichever axis runs out first.
    pub fn room(&self, direction: Direction) -> usize {
        let (dx, dy) = direction.delta();
        let along_x = axis_room(dx, self.x, self.grid.width());
        let along_y = axis_room(dy, self.y, self.grid.height());
        along_x.min(along_y)
    }

    /// Read the cells along `direction` (default: heading).
    ///
    /// `steps` of `None` scans to the edge, `Some(0)` returns the current
    /// cell and a negative count scans the reversed direction. The result
    /// is clipped to the grid, so this never fails.
    pub fn look(&self, steps: Option<i64>, direction: Option<Direction>) -> Sight<'_, T> {
        let (direction, limit) = match steps {
            Some(0) => return Sight::Here(self.here()),
            Some(steps) => self.resolve(steps, direction),
            None => (direction.unwrap_or(self.heading), usize::MAX),
        };
        let reach = limit.min(self.room(direction));
        Sight::Ahead(
            (1..=reach)
                .map(|i| &self.grid[self.offset(direction, i)])
                .collect(),
        )
    }

    /// Write `values` along `direction` (default: heading), the first one
    /// `offset` steps from the cursor. An offset of zero overwrites the
    /// current cell; a negative offset writes the reversed direction.
    ///
    /// Values that would land outside the grid are dropped. Returns the
    /// number of cells written.
    pub fn update<I>(&mut self, values: I, offset: i64, direction: Option<Direction>) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let (direction, offset) = self.resolve(offset, direction);
        let available = (self.room(direction) + 1).saturating_sub(offset);
        let mut written = 0;
        for (i, value) in values.into_iter().take(available).enumerate() {
            let at = self.offset(direction, offset + i);
            self.grid[at] = value;
            written += 1;
        }
        written
    }

    /// Move up to `steps` cells along `direction` (default: heading),
    /// stopping at the edge. Negative steps walk backwards. The heading is
    /// left unchanged. Returns the distance moved.
    pub fn walk(&mut self, steps: i64, direction: Option<Direction>) -> usize {
        let (direction, steps) = self.resolve(steps, direction);
        let distance = steps.min(self.room(direction));
        (self.x, self.y) = self.offset(direction, distance);
        distance
    }

    /// Turn the heading by `degrees`, clockwise when positive.
    pub fn rotate(&mut self, degrees: f64) {
        self.heading = self.heading.rotate(degrees);
    }

    pub fn value_counts(&self) -> BTreeMap<T, usize>
    where
        T: Ord + Clone,
    {
        self.grid.value_counts()
    }

    pub fn element_positions(&self) -> BTreeMap<T, Vec<(usize, usize)>>
    where
        T: Ord + Clone,
    {
        self.grid.element_positions()
    }

    /// Apply the default heading and fold a negative count into the
    /// reversed direction.
    fn resolve(&self, steps: i64, direction: Option<Direction>) -> (Direction, usize) {
        let direction = direction.unwrap_or(self.heading);
        let distance = steps.unsigned_abs() as usize;
        if steps < 0 {
            (direction.reverse(), distance)
        } else {
            (direction, distance)
        }
    }

    /// Cell `distance` steps from the cursor. Callers keep `distance`
    /// within `room(direction)`.
    fn offset(&self, direction: Direction, distance: usize) -> (usize, usize) {
        let (dx, dy) = direction.delta();
        (shift(self.x, dx, distance), shift(self.y, dy, distance))
    }
}

fn axis_room(delta: isize, at: usize, len: usize) -> usize {
    match delta.signum() {
        1 => len - 1 - at,
        -1 => at,
        _ => usize::MAX,
    }
}

fn shift(at: usize, delta: isize, distance: usize) -> usize {
    match delta.signum() {
        1 => at + distance,
        -1 => at - distance,
        _ => at,
    }
}

impl<T: fmt::Display> fmt::Display for Navigator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
