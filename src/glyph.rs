use crate::operator::{
    ARITHMETIC, BITWISE, BOOLEAN, CONCATENATION, EQUALITY, ESTIMATION, Operator, TRIGONOMETRIC,
};
use crate::layer::{BOOLEANS, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE, WHITESPACE};

/// Where a literal glyph takes its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    Fixed(&'static [&'static str]),
    /// The literal-input table built from invocation arguments.
    Input,
}

/// A decoded grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Push a literal chosen by layer.
    Push(Literal),
    /// Stage an operator chosen by layer.
    Stage(&'static [Operator]),
    /// Set the heading from movement table `0..4`, chosen by layer.
    Move(usize),
    TurnClockwise,
    TurnCounterclockwise,
    /// Turn only if the accumulator is true.
    GatedClockwise,
    GatedCounterclockwise,
    AdvanceLayer,
    /// Step once along the heading, skipping the next cell.
    Jump,
    /// Conveyor store/retrieve on bin `0..10`.
    Drop(usize),
    Clear,
    /// Emit the accumulator, then clear it.
    Print,
    /// Emit the accumulator and keep it.
    Peek,
    Halt,
    Nop,
}

impl Glyph {
    pub fn decode(c: char) -> Self {
        match c {
            'A' => Glyph::Push(Literal::Fixed(BOOLEANS)),
            'D' => Glyph::Push(Literal::Fixed(DIGITS)),
            'I' => Glyph::Push(Literal::Input),
            'L' => Glyph::Push(Literal::Fixed(LOWERCASE)),
            'S' => Glyph::Push(Literal::Fixed(SYMBOLS)),
            'U' => Glyph::Push(Literal::Fixed(UPPERCASE)),
            'W' => Glyph::Push(Literal::Fixed(WHITESPACE)),
            'B' => Glyph::Stage(BOOLEAN),
            'C' => Glyph::Stage(CONCATENATION),
            'E' => Glyph::Stage(EQUALITY),
            'M' => Glyph::Stage(ARITHMETIC),
            'N' => Glyph::Stage(BITWISE),
            'R' => Glyph::Stage(ESTIMATION),
            'T' => Glyph::Stage(TRIGONOMETRIC),
            'a' => Glyph::Move(0),
            'b' => Glyph::Move(1),
            'c' => Glyph::Move(2),
            'd' => Glyph::Move(3),
            '>' => Glyph::TurnClockwise,
            '<' => Glyph::TurnCounterclockwise,
            ')' => Glyph::GatedClockwise,
            '(' => Glyph::GatedCounterclockwise,
            '@' => Glyph::AdvanceLayer,
            '#' => Glyph::Jump,
            '0'..='9' => Glyph::Drop(c as usize - '0' as usize),
            '?' => Glyph::Clear,
            '.' => Glyph::Print,
            ',' => Glyph::Peek,
            'X' => Glyph::Halt,
            _ => Glyph::Nop,
        }
    }
}

/// Every character with a meaning, plus the filler.
pub const ALPHABET: &[char] = &[
    'A', 'D', 'I', 'L', 'S', 'U', 'W', 'B', 'C', 'E', 'M', 'N', 'R', 'T', 'a', 'b', 'c', 'd', '>',
    '<', ')', '(', '@', '#', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '?', '.', ',', 'X',
    ' ',
];
