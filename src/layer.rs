//! Layer-indexed table selection.
//!
//! Every literal and operator glyph reads from a fixed table, choosing the
//! entry at `layer % table.len()`. The layer only moves when the program
//! executes `@`, so the same glyph can mean different things over time.

use crate::heading::MOVEMENT;
use crate::operator::CATEGORIES;

pub const LOWERCASE: &[&str] = &[
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z",
];

pub const UPPERCASE: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

pub const DIGITS: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

pub const SYMBOLS: &[&str] = &[
    "`", "~", "!", "@", "#", "$", "%", "^", "&", "*", "(", ")", "-", "_", "=", "+", "[", "{", "]",
    "}", "\\", "|", ";", ":", "'", "\"", ",", "<", ".", ">", "/", "?",
];

pub const BOOLEANS: &[&str] = &["TRUE", "FALSE"];

pub const WHITESPACE: &[&str] = &[" ", "\n", "\t"];

/// Every literal table that does not depend on program input.
const FIXED_LITERALS: [&[&str]; 6] = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS, BOOLEANS, WHITESPACE];

/// Appended to the literal-input table so it is never empty and a program
/// can tell where the input ends.
pub const INPUT_SENTINEL: char = '\0';

/// Pick the entry of `table` active at `layer`.
///
/// # Panics
///
/// Panics if `table` is empty. Every built-in table is non-empty and
/// [`InputTable`] always carries its sentinel.
pub fn select<T: Copy>(table: &[T], layer: usize) -> T {
    table[layer % table.len()]
}

/// The literal-input table read by `I`, built from invocation arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTable {
    entries: Vec<String>,
}

impl InputTable {
    /// Join `args` with single spaces, split into characters, then append
    /// the sentinel.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let joined = args.iter().map(|a| a.as_ref()).collect::<Vec<_>>().join(" ");
        Self::from_text(&joined)
    }

    pub fn from_text(text: &str) -> Self {
        let mut entries: Vec<String> = text.chars().map(String::from).collect();
        entries.push(INPUT_SENTINEL.to_string());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, layer: usize) -> &str {
        &self.entries[layer % self.entries.len()]
    }
}

impl Default for InputTable {
    fn default() -> Self {
        Self::from_text("")
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn lcm(a: usize, b: usize) -> usize {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Length of every table a glyph can select from, including `input`.
pub fn table_lengths(input: &InputTable) -> Vec<usize> {
    let operators = CATEGORIES.iter().map(|t| t.len());
    let literals = FIXED_LITERALS.iter().map(|t| t.len());
    let movement = MOVEMENT.iter().map(|t| t.len());
    operators
        .chain(literals)
        .chain(movement)
        .chain(std::iter::once(input.len()))
        .collect()
}

/// Number of layer advances after which every table, including `input`,
/// is back at index 0.
pub fn reset_period(input: &InputTable) -> usize {
    table_lengths(input).into_iter().fold(1, lcm)
}
