use crate::error::Error;

/// Glyph used to pad short rows. It has no effect when executed.
pub const FILLER: char = ' ';

/// A cell coordinate. Also the key of every conveyor bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An immutable rectangular program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Cells in row-major order, `rows * cols` long.
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from program text, one row per line.
    ///
    /// Rows shorter than the longest line are padded with [`FILLER`].
    pub fn parse(source: &str) -> Result<Self, Error> {
        let lines: Vec<Vec<char>> = source.lines().map(|l| l.chars().collect()).collect();
        let rows = lines.len();
        let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for line in &lines {
            cells.extend_from_slice(line);
            cells.extend(std::iter::repeat_n(FILLER, cols - line.len()));
        }
        Ok(Self { cells, rows, cols })
    }

    /// Build a grid directly from row-major cells.
    pub fn from_cells(cells: Vec<char>, rows: usize, cols: usize) -> Result<Self, Error> {
        if rows == 0 || cols == 0 || cells.len() != rows * cols {
            return Err(Error::EmptyGrid);
        }
        Ok(Self { cells, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The glyph at `pos`. Positions are always produced by toroidal
    /// stepping, so they are in bounds.
    pub fn get(&self, pos: Position) -> char {
        self.cells[pos.row * self.cols + pos.col]
    }

    /// Render the grid back to text, one line per row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.cells.chunks(self.cols) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}
