use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use crate::formula::Formula;
use crate::operator::{BinaryOp, Operator};
use crate::reduce::Reducer;

/// Target operator set of a reduction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Basis {
    /// `{~, &, |}`
    NotAndOr,
    /// `{~, &}`
    NotAnd,
    /// `{-&}`
    Nand,
    /// `{->, ~}`
    ImpliesNot,
    /// `{->}` and the constant `F`
    ImpliesFalse,
}

impl Basis {
    pub const ALL: [Basis; 5] = [
        Basis::NotAndOr,
        Basis::NotAnd,
        Basis::Nand,
        Basis::ImpliesNot,
        Basis::ImpliesFalse,
    ];

    pub fn operators(self) -> BTreeSet<Operator> {
        let ops: &[Operator] = match self {
            Basis::NotAndOr => &[
                Operator::Not,
                Operator::Binary(BinaryOp::And),
                Operator::Binary(BinaryOp::Or),
            ],
            Basis::NotAnd => &[Operator::Not, Operator::Binary(BinaryOp::And)],
            Basis::Nand => &[Operator::Binary(BinaryOp::Nand)],
            Basis::ImpliesNot => &[Operator::Binary(BinaryOp::Implies), Operator::Not],
            Basis::ImpliesFalse => &[Operator::Binary(BinaryOp::Implies)],
        };
        ops.iter().copied().collect()
    }

    /// Whether the constant `F` may appear. `T` never may.
    pub const fn allows_false(self) -> bool {
        matches!(self, Basis::ImpliesFalse)
    }

    /// Whether `formula` is expressed in this basis.
    pub fn admits(self, formula: &Formula) -> bool {
        formula.operators().is_subset(&self.operators())
            && formula.constants().into_iter().all(|c| !c && self.allows_false())
    }

    pub fn reduce(self, reducer: &Reducer, formula: &Formula) -> Formula {
        match self {
            Basis::NotAndOr => reducer.to_not_and_or(formula),
            Basis::NotAnd => reducer.to_not_and(formula),
            Basis::Nand => reducer.to_nand(formula),
            Basis::ImpliesNot => reducer.to_implies_not(formula),
            Basis::ImpliesFalse => reducer.to_implies_false(formula),
        }
    }
}

impl Display for Basis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Basis::NotAndOr => "{~,&,|}",
            Basis::NotAnd => "{~,&}",
            Basis::Nand => "{-&}",
            Basis::ImpliesNot => "{->,~}",
            Basis::ImpliesFalse => "{->,F}",
        };
        f.pad(s)
    }
}
