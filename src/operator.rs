//! The closed set of logical connectives.
//!
//! Every operator has a textual tag, used both when building formulas by tag
//! and when printing them:
//!
//! | Operator | Tag   |
//! |----------|-------|
//! | NOT      | `~`   |
//! | AND      | `&`   |
//! | OR       | `\|`  |
//! | IMPLIES  | `->`  |
//! | XOR      | `+`   |
//! | IFF      | `<->` |
//! | NAND     | `-&`  |
//! | NOR      | `-\|` |

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

/// Binary connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Implies,
    Xor,
    Iff,
    Nand,
    Nor,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 7] = [
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Implies,
        BinaryOp::Xor,
        BinaryOp::Iff,
        BinaryOp::Nand,
        BinaryOp::Nor,
    ];

    pub const fn token(self) -> &'static str {
        match self {
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Implies => "->",
            BinaryOp::Xor => "+",
            BinaryOp::Iff => "<->",
            BinaryOp::Nand => "-&",
            BinaryOp::Nor => "-|",
        }
    }

    /// Conventional truth table of the connective.
    pub const fn apply(self, a: bool, b: bool) -> bool {
        match self {
            BinaryOp::And => a && b,
            BinaryOp::Or => a || b,
            BinaryOp::Implies => !a || b,
            BinaryOp::Xor => a != b,
            BinaryOp::Iff => a == b,
            BinaryOp::Nand => !(a && b),
            BinaryOp::Nor => !(a || b),
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for BinaryOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BinaryOp::ALL
            .into_iter()
            .find(|op| op.token() == s)
            .ok_or_else(|| Error::UnknownOperator(s.to_string()))
    }
}

/// Any connective, unary or binary.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Operator {
    Not,
    Binary(BinaryOp),
}

impl Operator {
    pub const NOT_TOKEN: &'static str = "~";

    pub const fn token(self) -> &'static str {
        match self {
            Operator::Not => Self::NOT_TOKEN,
            Operator::Binary(op) => op.token(),
        }
    }
}

impl From<BinaryOp> for Operator {
    fn from(op: BinaryOp) -> Self {
        Operator::Binary(op)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::NOT_TOKEN {
            Ok(Operator::Not)
        } else {
            s.parse::<BinaryOp>().map(Operator::Binary)
        }
    }
}
