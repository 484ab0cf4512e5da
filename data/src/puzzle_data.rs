use crate::error::DataError;
use aockit_core::Grid;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a line (or the whole text) is split into fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Separator {
    /// Every character is its own field.
    Chars,
    /// Runs of whitespace separate fields.
    Whitespace,
    /// A literal delimiter such as `","` or `"\n\n"`.
    Literal(String),
}

impl Separator {
    pub fn literal(delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            Separator::Chars
        } else {
            Separator::Literal(delimiter)
        }
    }

    /// Blocks separated by an empty line.
    pub fn blank_line() -> Self {
        Separator::Literal("\n\n".to_string())
    }

    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            Separator::Chars => text
                .char_indices()
                .map(|(i, c)| &text[i..i + c.len_utf8()])
                .collect(),
            Separator::Whitespace => text.split_whitespace().collect(),
            Separator::Literal(delimiter) if delimiter.is_empty() => Separator::Chars.split(text),
            Separator::Literal(delimiter) => text.split(delimiter.as_str()).collect(),
        }
    }
}

/// Raw puzzle text, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleData {
    raw: String,
}

impl PuzzleData {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            raw: raw.as_ref().trim().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Non-empty lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.raw.lines().filter(|line| !line.is_empty())
    }

    /// The text's digits read as one number, ignoring everything else.
    pub fn as_int(&self) -> Result<i64, DataError> {
        let first = self
            .raw
            .find(|c: char| c.is_ascii_digit())
            .ok_or(DataError::NoDigits)?;
        let digits: String = self.raw.chars().filter(char::is_ascii_digit).collect();
        digits.parse().map_err(|e: std::num::ParseIntError| DataError::Parse {
            line: self.line_at(first),
            value: digits.clone(),
            reason: e.to_string(),
        })
    }

    /// The whole text split by `separator`, each field parsed as `T`.
    pub fn items<T>(&self, separator: &Separator) -> Result<Vec<T>, DataError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        separator
            .split(&self.raw)
            .into_iter()
            .map(|item| parse_field(item, self.line_of(item)))
            .collect()
    }

    /// Each non-empty line split by `separator` and parsed. Rows may differ
    /// in length.
    pub fn rows<T>(&self, separator: &Separator) -> Result<Vec<Vec<T>>, DataError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.raw
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(i, line)| {
                separator
                    .split(line)
                    .into_iter()
                    .map(|field| parse_field(field, i + 1))
                    .collect::<Result<Vec<T>, DataError>>()
            })
            .collect()
    }

    /// [`rows`](Self::rows) transposed. A row that is too short simply
    /// contributes nothing to the columns it lacks.
    pub fn columns<T>(&self, separator: &Separator) -> Result<Vec<Vec<T>>, DataError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let mut columns: Vec<Vec<T>> = Vec::new();
        for row in self.rows(separator)? {
            for (j, value) in row.into_iter().enumerate() {
                if j == columns.len() {
                    columns.push(Vec::new());
                }
                columns[j].push(value);
            }
        }
        Ok(columns)
    }

    /// [`rows`](Self::rows) as a grid, short rows padded with `pad`.
    pub fn grid<T>(&self, separator: &Separator, pad: T) -> Result<Grid<T>, DataError>
    where
        T: FromStr + Clone,
        T::Err: fmt::Display,
    {
        let mut rows = self.rows(separator)?;
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, pad.clone());
        }
        let grid = Grid::from_rows(rows)?;
        log::debug!("Parsed {}x{} grid", grid.width(), grid.height());
        Ok(grid)
    }

    /// One character per cell, short lines padded with spaces.
    pub fn char_grid(&self) -> Grid<char> {
        let rows: Vec<Vec<char>> = self.lines().map(|line| line.chars().collect()).collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Grid::from_fn(width, rows.len(), |x, y| {
            rows[y].get(x).copied().unwrap_or(' ')
        })
    }

    fn line_at(&self, offset: usize) -> usize {
        self.raw[..offset].matches('\n').count() + 1
    }

    /// Line of a field sliced out of `raw`.
    fn line_of(&self, item: &str) -> usize {
        let offset = item.as_ptr() as usize - self.raw.as_ptr() as usize;
        self.line_at(offset)
    }
}

fn parse_field<T>(field: &str, line: usize) -> Result<T, DataError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    field.parse().map_err(|e: T::Err| DataError::Parse {
        line,
        value: field.to_string(),
        reason: e.to_string(),
    })
}

impl fmt::Display for PuzzleData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<String> for PuzzleData {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for PuzzleData {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1 2 3\n7 8\n9\n\n4 10\n5 11\n6 12 13\n";

    #[test]
    fn test_trims_surrounding_whitespace() {
        let data = PuzzleData::new("\n  abc\ndef \n\n");
        assert_eq!(data.as_str(), "abc\ndef");
        assert_eq!(data.to_string(), "abc\ndef");
    }

    #[test]
    fn test_as_int_ignores_non_digits() {
        assert_eq!(PuzzleData::new("a total of <em>11</em>!").as_int(), Ok(11));
        assert_eq!(PuzzleData::new("1 2 3").as_int(), Ok(123));
        assert_eq!(PuzzleData::new("none").as_int(), Err(DataError::NoDigits));
        assert!(matches!(
            PuzzleData::new("x\n99999999999999999999").as_int(),
            Err(DataError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_items_split_by_blank_line() {
        let data = PuzzleData::new(SAMPLE);
        let blocks: Vec<String> = data.items(&Separator::blank_line()).unwrap();
        assert_eq!(blocks, vec!["1 2 3\n7 8\n9", "4 10\n5 11\n6 12 13"]);
    }

    #[test]
    fn test_items_whitespace_numbers() {
        let data = PuzzleData::new(SAMPLE);
        let numbers: Vec<u32> = data.items(&Separator::Whitespace).unwrap();
        assert_eq!(numbers, vec![1, 2, 3, 7, 8, 9, 4, 10, 5, 11, 6, 12, 13]);
    }

    #[test]
    fn test_items_chars() {
        let data = PuzzleData::new("(()");
        let chars: Vec<char> = data.items(&Separator::Chars).unwrap();
        assert_eq!(chars, vec!['(', '(', ')']);
        assert_eq!(Separator::literal(""), Separator::Chars);
    }

    #[test]
    fn test_items_parse_error_reports_line() {
        let data = PuzzleData::new("1\n2\nx\n4");
        let err = data.items::<u32>(&Separator::Whitespace).unwrap_err();
        assert_eq!(
            err,
            DataError::Parse {
                line: 3,
                value: "x".to_string(),
                reason: "invalid digit found in string".to_string(),
            }
        );
    }

    #[test]
    fn test_rows_skip_empty_lines() {
        let data = PuzzleData::new(SAMPLE);
        let rows: Vec<Vec<u32>> = data.rows(&Separator::Whitespace).unwrap();
        assert_eq!(
            rows,
            vec![
                vec![1, 2, 3],
                vec![7, 8],
                vec![9],
                vec![4, 10],
                vec![5, 11],
                vec![6, 12, 13]
            ]
        );
    }

    #[test]
    fn test_rows_literal_separator() {
        let data = PuzzleData::new("a,b\nc,d,e");
        let rows: Vec<Vec<String>> = data.rows(&Separator::literal(",")).unwrap();
        assert_eq!(rows[1], vec!["c", "d", "e"]);
    }

    #[test]
    fn test_rows_error_line_counts_blank_lines() {
        let data = PuzzleData::new("1 2\n\n3 z");
        let err = data.rows::<i32>(&Separator::Whitespace).unwrap_err();
        assert!(matches!(err, DataError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_columns() {
        let data = PuzzleData::new("3   4\n4   3\n2   5\n1   3\n3   9\n3   3");
        let columns: Vec<Vec<i64>> = data.columns(&Separator::Whitespace).unwrap();
        assert_eq!(columns, vec![vec![3, 4, 2, 1, 3, 3], vec![4, 3, 5, 3, 9, 3]]);
    }

    #[test]
    fn test_grid_pads_ragged_rows() {
        let data = PuzzleData::new(SAMPLE);
        let grid = data.grid(&Separator::Whitespace, 0u32).unwrap();
        assert_eq!(grid.shape(), (3, 6));
        assert_eq!(grid.get(2, 0), Ok(&3));
        assert_eq!(grid.get(2, 1), Ok(&0));
        assert_eq!(grid.get(2, 5), Ok(&13));
    }

    #[test]
    fn test_char_grid() {
        let data = PuzzleData::new("#..\n.#\n..#");
        let grid = data.char_grid();
        assert_eq!(grid.shape(), (3, 3));
        assert_eq!(grid.get(1, 1), Ok(&'#'));
        assert_eq!(grid.get(2, 1), Ok(&' '));
        assert_eq!(grid.value_counts()[&'#'], 3);
    }

    #[test]
    fn test_empty_input() {
        let data = PuzzleData::new("   \n");
        assert!(data.char_grid().is_empty());
        assert!(data.rows::<u8>(&Separator::Whitespace).unwrap().is_empty());
    }
}
