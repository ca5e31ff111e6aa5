/// Every operation the accumulator knows how to evaluate.
///
/// Operators are never constructed directly by the interpreter; a glyph picks
/// one out of its category table with [`crate::layer::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mult,
    Div,
    Pow,
    Mod,
    Neg,
    Round,
    Ceil,
    Floor,
    Trunc,
    Sin,
    Cos,
    Tan,
    Csc,
    Sec,
    Cot,
    BitNot,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
    ShiftRightUnsigned,
    Not,
    And,
    Or,
    Concat,
    Repeat,
    Equals,
    NotEquals,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
}

impl Operator {
    /// Returns true if the operator consumes only the left operand.
    ///
    /// Unary operators are applied as soon as a left operand is present;
    /// binary operators wait for the right operand.
    pub fn is_unary(self) -> bool {
        matches!(
            self,
            Operator::Neg
                | Operator::Round
                | Operator::Ceil
                | Operator::Floor
                | Operator::Trunc
                | Operator::Sin
                | Operator::Cos
                | Operator::Tan
                | Operator::Csc
                | Operator::Sec
                | Operator::Cot
                | Operator::BitNot
                | Operator::Not
        )
    }
}

/// `M`: arithmetic.
pub const ARITHMETIC: &[Operator] = &[
    Operator::Add,
    Operator::Sub,
    Operator::Mult,
    Operator::Div,
    Operator::Pow,
    Operator::Mod,
    Operator::Neg,
];

/// `R`: rounding and estimation.
pub const ESTIMATION: &[Operator] = &[
    Operator::Round,
    Operator::Ceil,
    Operator::Floor,
    Operator::Trunc,
];

/// `T`: trigonometry, in radians.
pub const TRIGONOMETRIC: &[Operator] = &[
    Operator::Sin,
    Operator::Cos,
    Operator::Tan,
    Operator::Csc,
    Operator::Sec,
    Operator::Cot,
];

/// `N`: bitwise.
pub const BITWISE: &[Operator] = &[
    Operator::BitNot,
    Operator::BitAnd,
    Operator::BitOr,
    Operator::BitXor,
    Operator::ShiftLeft,
    Operator::ShiftRight,
    Operator::ShiftRightUnsigned,
];

/// `B`: boolean.
pub const BOOLEAN: &[Operator] = &[Operator::Not, Operator::And, Operator::Or];

/// `C`: string concatenation.
pub const CONCATENATION: &[Operator] = &[Operator::Concat, Operator::Repeat];

/// `E`: equality and ordering.
pub const EQUALITY: &[Operator] = &[
    Operator::Equals,
    Operator::NotEquals,
    Operator::Less,
    Operator::LessEquals,
    Operator::Greater,
    Operator::GreaterEquals,
];

/// All seven category tables, in glyph order `M R T N B C E`.
pub const CATEGORIES: [&[Operator]; 7] = [
    ARITHMETIC,
    ESTIMATION,
    TRIGONOMETRIC,
    BITWISE,
    BOOLEAN,
    CONCATENATION,
    EQUALITY,
];
