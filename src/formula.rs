//! Propositional formulas as immutable trees.
//!
//! A [`Formula`] is built once and never mutated: every transformation in this
//! crate produces a brand-new tree. Traversals go through [`Formula::fold`],
//! which collapses the tree bottom-up one [`Layer`] at a time.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use crate::error::Error;
use crate::operator::{BinaryOp, Operator};

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Formula {
    Var(String),
    Const(bool),
    Not(Box<Formula>),
    Binary(BinaryOp, Box<Formula>, Box<Formula>),
}

// Constructors
impl Formula {
    pub fn var(name: impl Into<String>) -> Self {
        Formula::Var(name.into())
    }

    pub fn truth() -> Self {
        Formula::Const(true)
    }

    pub fn falsity() -> Self {
        Formula::Const(false)
    }

    pub fn not(value: Self) -> Self {
        Formula::Not(Box::new(value))
    }

    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Formula::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::And, lhs, rhs)
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Or, lhs, rhs)
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Implies, lhs, rhs)
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Xor, lhs, rhs)
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Iff, lhs, rhs)
    }

    pub fn nand(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Nand, lhs, rhs)
    }

    pub fn nor(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Nor, lhs, rhs)
    }

    /// Builds a unary application from its operator tag.
    ///
    /// Only `~` is unary; any other tag is an [`Error::UnknownOperator`].
    pub fn from_unary_token(token: &str, operand: Self) -> Result<Self, Error> {
        match token.parse::<Operator>()? {
            Operator::Not => Ok(Self::not(operand)),
            Operator::Binary(_) => Err(Error::UnknownOperator(token.to_string())),
        }
    }

    /// Builds a binary application from its operator tag.
    pub fn from_binary_token(token: &str, lhs: Self, rhs: Self) -> Result<Self, Error> {
        let op = token.parse::<BinaryOp>()?;
        Ok(Self::binary(op, lhs, rhs))
    }
}

/// A single node of a formula, with its children replaced by `A`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Layer<'a, A> {
    Var(&'a str),
    Const(bool),
    Not(A),
    Binary(BinaryOp, A, A),
}

impl<'a, A> Layer<'a, A> {
    #[inline(always)]
    pub fn fmap<B, F>(self, mut f: F) -> Layer<'a, B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Layer::Var(name) => Layer::Var(name),
            Layer::Const(value) => Layer::Const(value),
            Layer::Not(a) => Layer::Not(f(a)),
            Layer::Binary(op, a, b) => {
                let a = f(a);
                let b = f(b);
                Layer::Binary(op, a, b)
            }
        }
    }
}

// See: https://recursion.wtf/posts/rust_schemes/
impl Formula {
    /// The top node of this formula, with references to its children.
    pub fn layer(&self) -> Layer<'_, &Formula> {
        match self {
            Formula::Var(name) => Layer::Var(name.as_str()),
            Formula::Const(value) => Layer::Const(*value),
            Formula::Not(a) => Layer::Not(&**a),
            Formula::Binary(op, a, b) => Layer::Binary(*op, &**a, &**b),
        }
    }

    /// Collapses the formula bottom-up: `collapse` sees each node once, after
    /// all of its children (left before right) have been collapsed.
    pub fn fold<'s, A, F>(&'s self, mut collapse: F) -> A
    where
        F: FnMut(Layer<'s, A>) -> A,
    {
        self.fold_with(&mut collapse)
    }

    fn fold_with<'s, A, F>(&'s self, collapse: &mut F) -> A
    where
        F: FnMut(Layer<'s, A>) -> A,
    {
        let layer = self.layer().fmap(|child| child.fold_with(collapse));
        collapse(layer)
    }
}

// Queries
impl Formula {
    /// Names of all variables occurring in the formula.
    pub fn variables(&self) -> BTreeSet<&str> {
        self.fold(|layer| match layer {
            Layer::Var(name) => BTreeSet::from([name]),
            Layer::Const(_) => BTreeSet::new(),
            Layer::Not(a) => a,
            Layer::Binary(_, mut a, mut b) => {
                a.append(&mut b);
                a
            }
        })
    }

    /// All operators occurring in the formula.
    pub fn operators(&self) -> BTreeSet<Operator> {
        self.fold(|layer: Layer<BTreeSet<Operator>>| match layer {
            Layer::Var(_) | Layer::Const(_) => BTreeSet::new(),
            Layer::Not(mut a) => {
                a.insert(Operator::Not);
                a
            }
            Layer::Binary(op, mut a, mut b) => {
                a.append(&mut b);
                a.insert(op.into());
                a
            }
        })
    }

    /// Values of all constants occurring in the formula.
    pub fn constants(&self) -> BTreeSet<bool> {
        self.fold(|layer| match layer {
            Layer::Const(value) => BTreeSet::from([value]),
            Layer::Var(_) => BTreeSet::new(),
            Layer::Not(a) => a,
            Layer::Binary(_, mut a, mut b) => {
                a.append(&mut b);
                a
            }
        })
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.fold(|layer| match layer {
            Layer::Var(_) | Layer::Const(_) => 1,
            Layer::Not(a) => 1 + a,
            Layer::Binary(_, a, b) => 1 + a + b,
        })
    }

    /// Length of the longest root-to-leaf path, counted in edges.
    pub fn depth(&self) -> usize {
        self.fold(|layer: Layer<usize>| match layer {
            Layer::Var(_) | Layer::Const(_) => 0,
            Layer::Not(a) => 1 + a,
            Layer::Binary(_, a, b) => 1 + a.max(b),
        })
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Var(name) => write!(f, "{}", name),
            Formula::Const(true) => write!(f, "T"),
            Formula::Const(false) => write!(f, "F"),
            Formula::Not(a) => write!(f, "{}{}", Operator::Not, a),
            Formula::Binary(op, a, b) => write!(f, "({}{}{})", a, op, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn p() -> Formula {
        Formula::var("p")
    }

    fn q() -> Formula {
        Formula::var("q")
    }

    #[test]
    fn test_display() {
        let f = Formula::and(Formula::implies(p(), q()), Formula::not(Formula::var("r")));
        assert_eq!(f.to_string(), "((p->q)&~r)");

        let g = Formula::nor(Formula::truth(), Formula::iff(Formula::falsity(), Formula::not(Formula::not(p()))));
        assert_eq!(g.to_string(), "(T-|(F<->~~p))");
    }

    #[test]
    fn test_from_tokens() {
        let f = Formula::from_binary_token("<->", p(), q()).unwrap();
        assert_eq!(f, Formula::iff(p(), q()));

        let g = Formula::from_unary_token("~", p()).unwrap();
        assert_eq!(g, Formula::not(p()));
    }

    #[test]
    fn test_from_unknown_tokens() {
        assert_eq!(
            Formula::from_binary_token("=>", p(), q()),
            Err(Error::UnknownOperator("=>".into()))
        );
        assert_eq!(
            Formula::from_binary_token("~", p(), q()),
            Err(Error::UnknownOperator("~".into()))
        );
        assert_eq!(
            Formula::from_unary_token("&", p()),
            Err(Error::UnknownOperator("&".into()))
        );
        assert_eq!(
            Formula::from_unary_token("!", p()),
            Err(Error::UnknownOperator("!".into()))
        );
    }

    #[test]
    fn test_variables() {
        let f = Formula::or(Formula::and(q(), Formula::truth()), Formula::xor(p(), q()));
        assert_eq!(f.variables(), BTreeSet::from(["p", "q"]));
        assert!(Formula::falsity().variables().is_empty());
    }

    #[test]
    fn test_operators() {
        let f = Formula::or(Formula::not(q()), Formula::nand(p(), Formula::not(q())));
        assert_eq!(
            f.operators(),
            BTreeSet::from([Operator::Not, Operator::Binary(BinaryOp::Or), Operator::Binary(BinaryOp::Nand)])
        );
        assert!(p().operators().is_empty());
    }

    #[test]
    fn test_constants() {
        let f = Formula::implies(Formula::falsity(), Formula::and(p(), Formula::falsity()));
        assert_eq!(f.constants(), BTreeSet::from([false]));
        assert!(p().constants().is_empty());
    }

    #[test]
    fn test_size_and_depth() {
        let f = Formula::and(Formula::not(Formula::not(p())), q());
        assert_eq!(f.size(), 5);
        assert_eq!(f.depth(), 3);
        assert_eq!(p().size(), 1);
        assert_eq!(p().depth(), 0);
    }

    #[test]
    fn test_fold_order() {
        let f = Formula::iff(p(), Formula::nor(q(), Formula::var("r")));
        let mut visited = Vec::new();
        f.fold(|layer| {
            if let Layer::Var(name) = layer {
                visited.push(name);
            }
        });
        assert_eq!(visited, vec!["p", "q", "r"]);
    }
}
