use crate::grid::Position;

/// Direction of instruction pointer travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Left,
    Down,
    Right,
}

/// Movement tables for glyphs `a`, `b`, `c` and `d`, indexed by layer.
///
/// Each table is the previous one rotated by a quarter turn, so at any layer
/// the four movement glyphs point in four different directions.
pub const MOVEMENT: [[Heading; 4]; 4] = [
    [Heading::Left, Heading::Down, Heading::Right, Heading::Up],
    [Heading::Down, Heading::Right, Heading::Up, Heading::Left],
    [Heading::Right, Heading::Up, Heading::Left, Heading::Down],
    [Heading::Up, Heading::Left, Heading::Down, Heading::Right],
];

impl Heading {
    pub fn clockwise(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    pub fn counterclockwise(self) -> Self {
        match self {
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Down => Heading::Right,
            Heading::Right => Heading::Up,
        }
    }

    /// Row and column deltas for one step in this direction.
    fn delta(self) -> (isize, isize) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Left => (0, -1),
            Heading::Down => (1, 0),
            Heading::Right => (0, 1),
        }
    }

    /// Move `pos` one cell on a `rows` x `cols` torus.
    ///
    /// Both dimensions must be non-zero.
    pub fn step(self, pos: Position, rows: usize, cols: usize) -> Position {
        let (dr, dc) = self.delta();
        Position {
            row: wrap(pos.row, dr, rows),
            col: wrap(pos.col, dc, cols),
        }
    }
}

/// Sign-aware modulo: `(value + delta) mod len`, always in `0..len`.
fn wrap(value: usize, delta: isize, len: usize) -> usize {
    (value as isize + delta).rem_euclid(len as isize) as usize
}
