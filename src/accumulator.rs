use std::fmt;

use crate::operator::Operator;
use crate::value::{
    FALSE, floor_mod, format_bool, format_decimal, int_pow, is_decimal, is_integer,
    parse_decimal, parse_integer, round_half_up, to_integer,
};

/// Text emitted while the accumulator is amorphous.
pub const AMORPHOUS_MARKER: &str = "AMORPHOUS";
/// Text emitted while an operator is still waiting for its operand.
pub const UNEVALUATED_MARKER: &str = "UNEVALUATED";

/// Longest string `repeat` may produce, in bytes.
const MAX_REPEAT_LEN: usize = 1 << 20;

/// How the integer path of `add`, `sub`, `mult` and `pow` combines operands.
///
/// The reference interpreter combines the left operand with itself on that
/// path (`2 + 5` gives `4`). `Literal` reproduces this; `Corrected` uses the
/// right operand like every other operator does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArithmeticMode {
    #[default]
    Corrected,
    Literal,
}

/// What an output glyph prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Amorphous,
    Unevaluated,
    Value(String),
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayState::Amorphous => f.write_str(AMORPHOUS_MARKER),
            DisplayState::Unevaluated => f.write_str(UNEVALUATED_MARKER),
            DisplayState::Value(v) => f.write_str(v),
        }
    }
}

/// Both operand slots are already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccumulatorFull;

impl fmt::Display for AccumulatorFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "accumulator already holds two operands")
    }
}

impl std::error::Error for AccumulatorFull {}

/// The interpreter's only working register.
///
/// Holds up to two operands and one operator. Evaluation happens eagerly
/// after every glyph, so in practice `right` is only non-empty between a
/// push and the evaluation that follows it.
///
/// Invariants:
/// - `right` is non-empty only if `left` is non-empty.
/// - once `amorphous` is set it stays set until [`Accumulator::clear`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Accumulator {
    left: String,
    right: String,
    operator: Option<Operator>,
    amorphous: bool,
    mode: ArithmeticMode,
}

impl Accumulator {
    pub fn new(mode: ArithmeticMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn is_amorphous(&self) -> bool {
        self.amorphous
    }

    pub fn mode(&self) -> ArithmeticMode {
        self.mode
    }

    /// Stage an operand in the first free slot.
    pub fn push_value(&mut self, value: impl Into<String>) -> Result<(), AccumulatorFull> {
        if self.left.is_empty() {
            self.left = value.into();
        } else if self.right.is_empty() {
            self.right = value.into();
        } else {
            return Err(AccumulatorFull);
        }
        Ok(())
    }

    /// Stage an operator. A second operator while one is pending makes the
    /// accumulator amorphous.
    pub fn push_operator(&mut self, op: Operator) {
        if self.operator.is_none() {
            self.operator = Some(op);
        } else {
            self.amorphous = true;
        }
    }

    /// Apply the staged operator to the staged operands.
    ///
    /// Returns false if the operands do not suit the operator, in which case
    /// the accumulator is left amorphous and empty. A binary operator staged
    /// against a single operand stays pending and counts as success.
    pub fn evaluate(&mut self) -> bool {
        let ok = if !self.right.is_empty() {
            let result = self
                .operator
                .take()
                .and_then(|op| binary(op, &self.left, &self.right, self.mode));
            self.right.clear();
            match result {
                Some(v) => {
                    self.left = v;
                    true
                }
                None => false,
            }
        } else if !self.left.is_empty() {
            match self.operator {
                None => true,
                Some(op) if !op.is_unary() => true,
                Some(op) => {
                    self.operator = None;
                    match unary(op, &self.left) {
                        Some(v) => {
                            self.left = v;
                            true
                        }
                        None => false,
                    }
                }
            }
        } else {
            self.operator.take().is_none()
        };

        if !ok {
            self.amorphous_clear();
        }
        ok
    }

    /// Truthiness used by the conditional turn glyphs.
    pub fn is_true(&self) -> bool {
        !self.amorphous && self.operator.is_none() && !self.left.is_empty() && self.left != FALSE
    }

    pub fn render(&self) -> DisplayState {
        if self.amorphous {
            DisplayState::Amorphous
        } else if self.operator.is_some() {
            DisplayState::Unevaluated
        } else {
            DisplayState::Value(self.left.clone())
        }
    }

    pub fn clear(&mut self) {
        self.wipe();
        self.amorphous = false;
    }

    /// Drop all data but keep (or enter) the amorphous state.
    pub fn amorphous_clear(&mut self) {
        self.wipe();
        self.amorphous = true;
    }

    fn wipe(&mut self) {
        self.left.clear();
        self.right.clear();
        self.operator = None;
    }
}

fn binary(op: Operator, l: &str, r: &str, mode: ArithmeticMode) -> Option<String> {
    use Operator::*;
    match op {
        Add | Sub | Mult | Pow => arithmetic(op, l, r, mode),
        Div => divide(l, r),
        Mod => floor_mod(parse_integer(l)?, parse_integer(r)?).map(|v| v.to_string()),
        BitAnd | BitOr | BitXor | ShiftLeft | ShiftRight | ShiftRightUnsigned => {
            bitwise(op, l, r)
        }
        And => Some(format_bool(l != FALSE && r != FALSE)),
        Or => Some(format_bool(l != FALSE || r != FALSE)),
        Concat => Some(format!("{l}{r}")),
        Repeat => repeat(l, r),
        Equals => Some(format_bool(l == r)),
        NotEquals => Some(format_bool(l != r)),
        Less => Some(format_bool(l < r)),
        LessEquals => Some(format_bool(l <= r)),
        Greater => Some(format_bool(l > r)),
        GreaterEquals => Some(format_bool(l >= r)),
        // Unary operators have no meaning with two operands.
        _ => None,
    }
}

fn arithmetic(op: Operator, l: &str, r: &str, mode: ArithmeticMode) -> Option<String> {
    if is_integer(l) && is_integer(r) {
        let a = parse_integer(l)?;
        let b = match mode {
            ArithmeticMode::Corrected => parse_integer(r)?,
            ArithmeticMode::Literal => a,
        };
        let v = match op {
            Operator::Add => a.checked_add(b),
            Operator::Sub => a.checked_sub(b),
            Operator::Mult => a.checked_mul(b),
            Operator::Pow => int_pow(a, b),
            _ => None,
        }?;
        return Some(v.to_string());
    }

    let (a, b) = (parse_decimal(l)?, parse_decimal(r)?);
    let v = match op {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mult => a * b,
        Operator::Pow => a.powf(b),
        _ => return None,
    };
    format_decimal(v)
}

/// Integer division is chosen by the left operand alone; a fractional
/// divisor on that path is a failure rather than a fallback.
fn divide(l: &str, r: &str) -> Option<String> {
    if is_integer(l) && is_decimal(r) {
        let (a, b) = (parse_integer(l)?, parse_integer(r)?);
        return a.checked_div(b).map(|v| v.to_string());
    }
    let (a, b) = (parse_decimal(l)?, parse_decimal(r)?);
    format_decimal(a / b)
}

fn bitwise(op: Operator, l: &str, r: &str) -> Option<String> {
    let (a, b) = (parse_integer(l)?, parse_integer(r)?);
    let shift = (b & 63) as u32;
    let v = match op {
        Operator::BitAnd => a & b,
        Operator::BitOr => a | b,
        Operator::BitXor => a ^ b,
        Operator::ShiftLeft => a << shift,
        Operator::ShiftRight => a >> shift,
        Operator::ShiftRightUnsigned => ((a as u64) >> shift) as i64,
        _ => return None,
    };
    Some(v.to_string())
}

fn repeat(l: &str, r: &str) -> Option<String> {
    let count = usize::try_from(parse_integer(r)?).ok()?;
    if l.len().checked_mul(count)? > MAX_REPEAT_LEN {
        return None;
    }
    Some(l.repeat(count))
}

fn unary(op: Operator, l: &str) -> Option<String> {
    use Operator::*;
    match op {
        Neg => {
            if is_integer(l) {
                parse_integer(l)?.checked_neg().map(|v| v.to_string())
            } else {
                format_decimal(-parse_decimal(l)?)
            }
        }
        Round | Ceil | Floor | Trunc => {
            let x = parse_decimal(l)?;
            let y = match op {
                Round => round_half_up(x),
                Ceil => x.ceil(),
                Floor => x.floor(),
                _ => x.trunc(),
            };
            to_integer(y).map(|v| v.to_string())
        }
        Sin | Cos | Tan | Csc | Sec | Cot => {
            let x = parse_decimal(l)?;
            let y = match op {
                Sin => x.sin(),
                Cos => x.cos(),
                Tan => x.tan(),
                Csc => 1.0 / x.sin(),
                Sec => 1.0 / x.cos(),
                _ => 1.0 / x.tan(),
            };
            format_decimal(y)
        }
        BitNot => Some((!parse_integer(l)?).to_string()),
        Not => Some(format_bool(l == FALSE)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stage `l op r` and evaluate, returning the display state.
    fn eval_binary(l: &str, op: Operator, r: &str) -> DisplayState {
        eval_binary_in(ArithmeticMode::Corrected, l, op, r)
    }

    fn eval_binary_in(mode: ArithmeticMode, l: &str, op: Operator, r: &str) -> DisplayState {
        let mut acc = Accumulator::new(mode);
        acc.push_value(l).unwrap();
        acc.push_operator(op);
        assert!(acc.evaluate(), "pending binary operator must not fail");
        acc.push_value(r).unwrap();
        acc.evaluate();
        acc.render()
    }

    fn eval_unary(l: &str, op: Operator) -> DisplayState {
        let mut acc = Accumulator::default();
        acc.push_value(l).unwrap();
        acc.push_operator(op);
        acc.evaluate();
        acc.render()
    }

    fn value(s: &str) -> DisplayState {
        DisplayState::Value(s.to_string())
    }

    #[test]
    fn test_push_fills_left_then_right() {
        let mut acc = Accumulator::default();
        acc.push_value("a").unwrap();
        acc.push_value("b").unwrap();
        assert_eq!(acc.left(), "a");
        assert_eq!(acc.right(), "b");
        assert_eq!(acc.push_value("c"), Err(AccumulatorFull));
        assert_eq!(acc.left(), "a");
        assert_eq!(acc.right(), "b");
    }

    #[test]
    fn test_second_operator_is_contradiction() {
        let mut acc = Accumulator::default();
        acc.push_value("1").unwrap();
        acc.push_operator(Operator::Add);
        assert!(!acc.is_amorphous());
        acc.push_operator(Operator::Sub);
        assert!(acc.is_amorphous());
        assert_eq!(acc.operator(), Some(Operator::Add));
    }

    #[test]
    fn test_evaluate_without_operator_is_noop() {
        let mut acc = Accumulator::default();
        acc.push_value("hello").unwrap();
        let before = acc.clone();
        assert!(acc.evaluate());
        assert_eq!(acc, before);
    }

    #[test]
    fn test_evaluate_empty() {
        let mut acc = Accumulator::default();
        assert!(acc.evaluate());
        assert_eq!(acc.render(), value(""));

        acc.push_operator(Operator::Add);
        assert!(!acc.evaluate());
        assert_eq!(acc.render(), DisplayState::Amorphous);
        assert_eq!(acc.operator(), None);
    }

    #[test]
    fn test_binary_operator_waits_for_right() {
        let mut acc = Accumulator::default();
        acc.push_value("3").unwrap();
        acc.push_operator(Operator::Mult);
        assert!(acc.evaluate());
        assert_eq!(acc.render(), DisplayState::Unevaluated);
        assert!(!acc.is_true());
    }

    #[test]
    fn test_two_operands_without_operator_fail() {
        let mut acc = Accumulator::default();
        acc.push_value("1").unwrap();
        acc.push_value("2").unwrap();
        assert!(!acc.evaluate());
        assert!(acc.is_amorphous());
        assert_eq!(acc.left(), "");
        assert_eq!(acc.right(), "");
    }

    #[test]
    fn test_unary_operator_with_two_operands_fails() {
        let mut acc = Accumulator::default();
        acc.push_value("1").unwrap();
        acc.push_value("2").unwrap();
        acc.push_operator(Operator::Neg);
        assert!(!acc.evaluate());
        assert_eq!(acc.render(), DisplayState::Amorphous);
    }

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(eval_binary("2", Operator::Add, "5"), value("7"));
        assert_eq!(eval_binary("2", Operator::Sub, "5"), value("-3"));
        assert_eq!(eval_binary("-4", Operator::Mult, "5"), value("-20"));
        assert_eq!(eval_binary("2", Operator::Pow, "10"), value("1024"));
        assert_eq!(eval_binary("2", Operator::Pow, "0"), value("1"));
    }

    #[test]
    fn test_decimal_arithmetic() {
        assert_eq!(eval_binary("1.5", Operator::Add, "2"), value("3.5"));
        assert_eq!(eval_binary("1", Operator::Sub, "0.25"), value("0.75"));
        assert_eq!(eval_binary("1.5", Operator::Mult, "2"), value("3.0"));
        assert_eq!(eval_binary("2.0", Operator::Pow, "3"), value("8.0"));
    }

    #[test]
    fn test_arithmetic_type_mismatch() {
        assert_eq!(eval_binary("a", Operator::Add, "1"), DisplayState::Amorphous);
        assert_eq!(eval_binary("1", Operator::Sub, "?"), DisplayState::Amorphous);
        assert_eq!(eval_binary("TRUE", Operator::Mult, "2"), DisplayState::Amorphous);
    }

    #[test]
    fn test_integer_overflow_fails() {
        assert_eq!(
            eval_binary("9223372036854775807", Operator::Add, "1"),
            DisplayState::Amorphous
        );
        assert_eq!(eval_binary("2", Operator::Pow, "64"), DisplayState::Amorphous);
        assert_eq!(eval_binary("2", Operator::Pow, "-1"), DisplayState::Amorphous);
        assert_eq!(eval_binary("2", Operator::Pow, "5000000000"), DisplayState::Amorphous);
    }

    #[test]
    fn test_pow_with_huge_exponent_on_fixed_points() {
        assert_eq!(eval_binary("1", Operator::Pow, "5000000000"), value("1"));
        assert_eq!(eval_binary("0", Operator::Pow, "5000000000"), value("0"));
        assert_eq!(eval_binary("-1", Operator::Pow, "5000000001"), value("-1"));
    }

    #[test]
    fn test_literal_mode_combines_left_with_itself() {
        let lit = ArithmeticMode::Literal;
        assert_eq!(eval_binary_in(lit, "2", Operator::Add, "5"), value("4"));
        assert_eq!(eval_binary_in(lit, "2", Operator::Sub, "5"), value("0"));
        assert_eq!(eval_binary_in(lit, "3", Operator::Mult, "5"), value("9"));
        assert_eq!(eval_binary_in(lit, "3", Operator::Pow, "5"), value("27"));
        // Only the integer path of those four operators is affected.
        assert_eq!(eval_binary_in(lit, "2.0", Operator::Add, "5"), value("7.0"));
        assert_eq!(eval_binary_in(lit, "7", Operator::Mod, "5"), value("2"));
        assert_eq!(eval_binary_in(lit, "7", Operator::Div, "2"), value("3"));
        // The right operand must still be an integer to take the integer path.
        assert_eq!(eval_binary_in(lit, "2", Operator::Add, "x"), DisplayState::Amorphous);
    }

    #[test]
    fn test_division() {
        assert_eq!(eval_binary("7", Operator::Div, "2"), value("3"));
        assert_eq!(eval_binary("-7", Operator::Div, "2"), value("-3"));
        assert_eq!(eval_binary("7.0", Operator::Div, "2"), value("3.5"));
        assert_eq!(eval_binary("7.5", Operator::Div, "2.5"), value("3.0"));
        // Integer left with a fractional divisor takes the integer path and fails.
        assert_eq!(eval_binary("7", Operator::Div, "2.5"), DisplayState::Amorphous);
        assert_eq!(eval_binary("7", Operator::Div, "0"), DisplayState::Amorphous);
        assert_eq!(eval_binary("7.0", Operator::Div, "0"), DisplayState::Amorphous);
        assert_eq!(eval_binary("x", Operator::Div, "1"), DisplayState::Amorphous);
    }

    #[test]
    fn test_modulo() {
        assert_eq!(eval_binary("7", Operator::Mod, "3"), value("1"));
        assert_eq!(eval_binary("-7", Operator::Mod, "3"), value("2"));
        assert_eq!(eval_binary("7", Operator::Mod, "-3"), value("-2"));
        assert_eq!(eval_binary("0", Operator::Mod, "4"), value("0"));
        assert_eq!(eval_binary("7", Operator::Mod, "0"), DisplayState::Amorphous);
        assert_eq!(eval_binary("7.5", Operator::Mod, "2"), DisplayState::Amorphous);
    }

    #[test]
    fn test_bitwise() {
        assert_eq!(eval_binary("12", Operator::BitAnd, "10"), value("8"));
        assert_eq!(eval_binary("12", Operator::BitOr, "10"), value("14"));
        assert_eq!(eval_binary("12", Operator::BitXor, "10"), value("6"));
        assert_eq!(eval_binary("1", Operator::ShiftLeft, "4"), value("16"));
        assert_eq!(eval_binary("-16", Operator::ShiftRight, "2"), value("-4"));
        assert_eq!(
            eval_binary("-1", Operator::ShiftRightUnsigned, "60"),
            value("15")
        );
        assert_eq!(eval_binary("1", Operator::ShiftLeft, "64"), value("1"));
        assert_eq!(eval_binary("1.0", Operator::BitAnd, "1"), DisplayState::Amorphous);
        assert_eq!(eval_unary("5", Operator::BitNot), value("-6"));
    }

    #[test]
    fn test_boolean() {
        assert_eq!(eval_binary("TRUE", Operator::And, "TRUE"), value("TRUE"));
        assert_eq!(eval_binary("TRUE", Operator::And, "FALSE"), value("FALSE"));
        assert_eq!(eval_binary("x", Operator::And, "7"), value("TRUE"));
        assert_eq!(eval_binary("FALSE", Operator::Or, "FALSE"), value("FALSE"));
        assert_eq!(eval_binary("FALSE", Operator::Or, "a"), value("TRUE"));
        assert_eq!(eval_unary("FALSE", Operator::Not), value("TRUE"));
        assert_eq!(eval_unary("TRUE", Operator::Not), value("FALSE"));
        assert_eq!(eval_unary("q", Operator::Not), value("FALSE"));
    }

    #[test]
    fn test_concat_and_repeat() {
        assert_eq!(eval_binary("ab", Operator::Concat, "cd"), value("abcd"));
        assert_eq!(eval_binary("ab", Operator::Repeat, "3"), value("ababab"));
        assert_eq!(eval_binary("ab", Operator::Repeat, "0"), value(""));
        assert_eq!(eval_binary("ab", Operator::Repeat, "-1"), DisplayState::Amorphous);
        assert_eq!(eval_binary("ab", Operator::Repeat, "x"), DisplayState::Amorphous);
        assert_eq!(
            eval_binary("ab", Operator::Repeat, "9999999999"),
            DisplayState::Amorphous
        );
    }

    #[test]
    fn test_relational_is_lexicographic() {
        assert_eq!(eval_binary("a", Operator::Equals, "a"), value("TRUE"));
        assert_eq!(eval_binary("a", Operator::NotEquals, "a"), value("FALSE"));
        assert_eq!(eval_binary("10", Operator::Less, "9"), value("TRUE"));
        assert_eq!(eval_binary("b", Operator::LessEquals, "a"), value("FALSE"));
        assert_eq!(eval_binary("b", Operator::Greater, "a"), value("TRUE"));
        assert_eq!(eval_binary("a", Operator::GreaterEquals, "a"), value("TRUE"));
    }

    #[test]
    fn test_negation() {
        assert_eq!(eval_unary("5", Operator::Neg), value("-5"));
        assert_eq!(eval_unary("-5", Operator::Neg), value("5"));
        assert_eq!(eval_unary("2.5", Operator::Neg), value("-2.5"));
        assert_eq!(eval_unary("z", Operator::Neg), DisplayState::Amorphous);
    }

    #[test]
    fn test_estimation() {
        assert_eq!(eval_unary("2.5", Operator::Round), value("3"));
        assert_eq!(eval_unary("-2.5", Operator::Round), value("-2"));
        assert_eq!(eval_unary("0.49999999999999994", Operator::Round), value("0"));
        assert_eq!(
            eval_unary("4503599627370497.0", Operator::Round),
            value("4503599627370497")
        );
        assert_eq!(eval_unary("2.1", Operator::Ceil), value("3"));
        assert_eq!(eval_unary("-2.1", Operator::Floor), value("-3"));
        assert_eq!(eval_unary("-2.9", Operator::Trunc), value("-2"));
        assert_eq!(eval_unary("7", Operator::Trunc), value("7"));
        assert_eq!(eval_unary("x", Operator::Round), DisplayState::Amorphous);
    }

    #[test]
    fn test_trigonometry() {
        assert_eq!(eval_unary("0", Operator::Sin), value("0.0"));
        assert_eq!(eval_unary("0", Operator::Cos), value("1.0"));
        assert_eq!(eval_unary("0", Operator::Sec), value("1.0"));
        assert_eq!(eval_unary("0", Operator::Csc), DisplayState::Amorphous);
        assert_eq!(eval_unary("0", Operator::Cot), DisplayState::Amorphous);
        assert_eq!(eval_unary("a", Operator::Tan), DisplayState::Amorphous);
    }

    #[test]
    fn test_is_true() {
        let mut acc = Accumulator::default();
        assert!(!acc.is_true());
        acc.push_value("FALSE").unwrap();
        assert!(!acc.is_true());
        acc.clear();
        acc.push_value("0").unwrap();
        assert!(acc.is_true());
        acc.push_operator(Operator::Add);
        assert!(!acc.is_true());
        acc.amorphous_clear();
        assert!(!acc.is_true());
    }

    #[test]
    fn test_clear_and_amorphous_clear() {
        let mut acc = Accumulator::default();
        acc.push_value("x").unwrap();
        acc.amorphous_clear();
        assert_eq!(acc.render(), DisplayState::Amorphous);
        acc.push_value("y").unwrap();
        assert_eq!(acc.render(), DisplayState::Amorphous);
        acc.clear();
        assert_eq!(acc.render(), value(""));
        assert!(!acc.is_amorphous());
    }

    #[test]
    fn test_clear_keeps_mode() {
        let mut acc = Accumulator::new(ArithmeticMode::Literal);
        acc.push_value("1").unwrap();
        acc.clear();
        assert_eq!(acc.mode(), ArithmeticMode::Literal);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(DisplayState::Amorphous.to_string(), "AMORPHOUS");
        assert_eq!(DisplayState::Unevaluated.to_string(), "UNEVALUATED");
        assert_eq!(value("hi").to_string(), "hi");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::operator::CATEGORIES;
    use proptest::prelude::*;

    fn any_operator() -> impl Strategy<Value = Operator> {
        let all: Vec<Operator> = CATEGORIES.iter().flat_map(|t| t.iter().copied()).collect();
        prop::sample::select(all)
    }

    proptest! {
        #[test]
        fn clear_always_renders_empty(l in ".{0,8}", op in any_operator()) {
            let mut acc = Accumulator::default();
            let _ = acc.push_value(l);
            acc.push_operator(op);
            acc.evaluate();
            acc.clear();
            prop_assert_eq!(acc.render(), DisplayState::Value(String::new()));
        }

        #[test]
        fn amorphous_clear_always_renders_amorphous(l in ".{0,8}", op in any_operator()) {
            let mut acc = Accumulator::default();
            let _ = acc.push_value(l);
            acc.push_operator(op);
            acc.amorphous_clear();
            prop_assert_eq!(acc.render(), DisplayState::Amorphous);
        }

        #[test]
        fn evaluation_never_panics_and_stays_consistent(
            l in "-?[0-9]{1,20}(\\.[0-9]{1,4})?|[A-Za-z]{1,4}",
            r in "-?[0-9]{1,20}(\\.[0-9]{1,4})?|[A-Za-z]{1,4}",
            op in any_operator(),
        ) {
            let mut acc = Accumulator::default();
            acc.push_value(l).unwrap();
            acc.push_operator(op);
            let first = acc.evaluate();
            if first && !acc.left().is_empty() {
                let _ = acc.push_value(r);
                acc.evaluate();
            }
            prop_assert!(acc.right().is_empty());
            if acc.is_amorphous() {
                prop_assert!(acc.left().is_empty());
                prop_assert_eq!(acc.operator(), None);
            }
        }
    }
}
