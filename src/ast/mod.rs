mod parser;

pub use parser::FormulaParser as Parser;

/// A node of the evaluation tree built from a parsed formula. The tree is
/// constructed once at compile time and never mutated afterwards; byte
/// offsets into the source are captured on the nodes that can fail at
/// evaluation time so errors can point back at the formula text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric literal. Integer and decimal literals both end up here.
    Number(f64),
    /// A variable or constant reference, resolved against the variable
    /// environment on every evaluation.
    Variable { name: String, pos: usize },
    /// A binary operation. The left operand is always evaluated before
    /// the right one.
    Binary {
        op: BinaryOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    /// A function call. Arguments keep their source order; `pos` is the
    /// offset of the function name.
    Call {
        name: String,
        pos: usize,
        args: Vec<Node>,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    /// Applies the operator with plain IEEE-754 double arithmetic.
    /// Division by zero yields an infinity or NaN rather than an error,
    /// and `%` follows `fmod` semantics: the result takes the sign of the
    /// dividend.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Rem => lhs % rhs,
        }
    }
}

impl TryFrom<&str> for BinaryOp {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "+" => Ok(BinaryOp::Add),
            "-" => Ok(BinaryOp::Sub),
            "*" => Ok(BinaryOp::Mul),
            "/" => Ok(BinaryOp::Div),
            "%" => Ok(BinaryOp::Rem),
            _ => Err(format!("Unknown operator: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_basic_arithmetic() {
        assert_eq!(BinaryOp::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(BinaryOp::Sub.apply(2.0, 3.0), -1.0);
        assert_eq!(BinaryOp::Mul.apply(2.0, 3.0), 6.0);
        assert_eq!(BinaryOp::Div.apply(3.0, 2.0), 1.5);
    }

    #[test]
    fn test_division_by_zero_is_ieee() {
        assert_eq!(BinaryOp::Div.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(BinaryOp::Div.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(BinaryOp::Div.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_remainder_sign_follows_dividend() {
        assert_eq!(BinaryOp::Rem.apply(5.5, 2.0), 1.5);
        assert_eq!(BinaryOp::Rem.apply(-5.5, 2.0), -1.5);
        assert_eq!(BinaryOp::Rem.apply(5.5, -2.0), 1.5);
        assert!(BinaryOp::Rem.apply(1.0, 0.0).is_nan());
    }

    #[test]
    fn test_operator_from_str() {
        assert_eq!(BinaryOp::try_from("%"), Ok(BinaryOp::Rem));
        assert!(BinaryOp::try_from("^").is_err());
    }
}
