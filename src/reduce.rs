//! Rewriting formulas into restricted operator bases.
//!
//! All reductions go through [`Reducer::to_not_and_or`] first, which removes
//! every operator except NOT, AND and OR, and every constant. The other four
//! reductions then rewrite the normalised tree node by node:
//!
//! ```text
//! to_not_and_or ─┬─ to_not_and ─── to_nand
//!                ├─ to_implies_not
//!                └─ to_implies_false
//! ```
//!
//! Constants are eliminated by padding: `T` becomes the tautology `(p|~p)` and
//! `F` the contradiction `~(p|~p)`, where `p` is the reducer's *padding
//! variable*. The value of `p` never matters, so any name works, including one
//! that already occurs in the formula.
//!
//! Each reduction is also usable on its own: the non-leaf passes handle
//! constants and stray operators by re-normalising them through the layer
//! below, so they are total over every formula, not just over chained outputs.

use log::debug;

use crate::basis::Basis;
use crate::formula::{Formula, Layer};
use crate::operator::BinaryOp;

/// Padding variable used by [`Reducer::default`].
pub const DEFAULT_PADDING: &str = "p";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Reducer {
    padding: String,
}

impl Reducer {
    pub fn new(padding: impl Into<String>) -> Self {
        Self {
            padding: padding.into(),
        }
    }

    /// Reducer whose padding variable does not occur in `formula`:
    /// the first unused name among `p`, `p1`, `p2`, ...
    pub fn fresh_for(formula: &Formula) -> Self {
        let used = formula.variables();
        let mut padding = DEFAULT_PADDING.to_string();
        let mut i = 0;
        while used.contains(padding.as_str()) {
            i += 1;
            padding = format!("{}{}", DEFAULT_PADDING, i);
        }
        Self::new(padding)
    }

    pub fn padding(&self) -> &str {
        &self.padding
    }

    fn padding_var(&self) -> Formula {
        Formula::var(self.padding.as_str())
    }
}

impl Default for Reducer {
    fn default() -> Self {
        Reducer::new(DEFAULT_PADDING)
    }
}

// Leaf layer: {~, &, |}
impl Reducer {
    /// Equivalent formula over `{~, &, |}` without constants.
    pub fn to_not_and_or(&self, formula: &Formula) -> Formula {
        debug!("to_not_and_or(f = {})", formula);
        let result = formula.fold(|layer| match layer {
            Layer::Var(name) => Formula::var(name),
            Layer::Const(value) => self.padded_constant(value),
            Layer::Not(a) => Formula::not(a),
            Layer::Binary(op, a, b) => not_and_or_binary(op, a, b),
        });
        debug_assert!(Basis::NotAndOr.admits(&result), "not in {}: {}", Basis::NotAndOr, result);
        result
    }

    /// `T` as `(p|~p)`, `F` as `~(p|~p)`.
    fn padded_constant(&self, value: bool) -> Formula {
        debug!("padding constant {} with variable {}", value, self.padding);
        let p = self.padding_var();
        let taut = Formula::or(p.clone(), Formula::not(p));
        if value {
            taut
        } else {
            Formula::not(taut)
        }
    }
}

/// Rewrites `a op b` over `{~, &, |}`, given both operands already are.
fn not_and_or_binary(op: BinaryOp, a: Formula, b: Formula) -> Formula {
    match op {
        BinaryOp::And => Formula::and(a, b),
        BinaryOp::Or => Formula::or(a, b),
        // a -> b  ==  ~a | b
        BinaryOp::Implies => Formula::or(Formula::not(a), b),
        // a + b  ==  (a & ~b) | (~a & b)
        BinaryOp::Xor => Formula::or(
            Formula::and(a.clone(), Formula::not(b.clone())),
            Formula::and(Formula::not(a), b),
        ),
        // a <-> b  ==  (a & b) | (~a & ~b)
        BinaryOp::Iff => Formula::or(
            Formula::and(a.clone(), b.clone()),
            Formula::and(Formula::not(a), Formula::not(b)),
        ),
        BinaryOp::Nand => Formula::not(Formula::and(a, b)),
        BinaryOp::Nor => Formula::not(Formula::or(a, b)),
    }
}

// {~, &}
impl Reducer {
    /// Equivalent formula over `{~, &}` without constants.
    pub fn to_not_and(&self, formula: &Formula) -> Formula {
        debug!("to_not_and(f = {})", formula);
        let result = self.not_and(&self.to_not_and_or(formula));
        debug_assert!(Basis::NotAnd.admits(&result), "not in {}: {}", Basis::NotAnd, result);
        result
    }

    fn not_and(&self, g: &Formula) -> Formula {
        match g {
            Formula::Var(_) => g.clone(),
            Formula::Const(value) => self.not_and(&self.padded_constant(*value)),
            Formula::Not(a) => Formula::not(self.not_and(a)),
            Formula::Binary(BinaryOp::And, a, b) => Formula::and(self.not_and(a), self.not_and(b)),
            // De Morgan: a | b  ==  ~(~a & ~b)
            Formula::Binary(BinaryOp::Or, a, b) => Formula::not(Formula::and(
                Formula::not(self.not_and(a)),
                Formula::not(self.not_and(b)),
            )),
            Formula::Binary(..) => self.not_and(&self.to_not_and_or(g)),
        }
    }
}

// {-&}
impl Reducer {
    /// Equivalent formula using NAND only.
    pub fn to_nand(&self, formula: &Formula) -> Formula {
        debug!("to_nand(f = {})", formula);
        let result = self.nand(&self.to_not_and(formula));
        debug_assert!(Basis::Nand.admits(&result), "not in {}: {}", Basis::Nand, result);
        result
    }

    fn nand(&self, g: &Formula) -> Formula {
        match g {
            Formula::Var(_) => g.clone(),
            Formula::Const(value) => {
                // p -& (p -& p)  ==  p -& ~p  ==  T
                let p = self.padding_var();
                let taut = Formula::nand(p.clone(), Formula::nand(p.clone(), p));
                if *value {
                    taut
                } else {
                    Formula::nand(taut.clone(), taut)
                }
            }
            // a -& a  ==  ~a
            Formula::Not(a) => {
                let a = self.nand(a);
                Formula::nand(a.clone(), a)
            }
            // (a -& b) -& (a -& b)  ==  a & b
            Formula::Binary(BinaryOp::And, a, b) => {
                let t = Formula::nand(self.nand(a), self.nand(b));
                Formula::nand(t.clone(), t)
            }
            Formula::Binary(..) => self.nand(&self.to_not_and(g)),
        }
    }
}

// {->, ~}
impl Reducer {
    /// Equivalent formula over `{->, ~}` without constants.
    pub fn to_implies_not(&self, formula: &Formula) -> Formula {
        debug!("to_implies_not(f = {})", formula);
        let result = self.implies_not(&self.to_not_and_or(formula));
        debug_assert!(Basis::ImpliesNot.admits(&result), "not in {}: {}", Basis::ImpliesNot, result);
        result
    }

    fn implies_not(&self, g: &Formula) -> Formula {
        match g {
            Formula::Var(_) => g.clone(),
            Formula::Const(value) => {
                let p = self.padding_var();
                let taut = Formula::implies(p.clone(), p);
                if *value {
                    taut
                } else {
                    Formula::not(taut)
                }
            }
            Formula::Not(a) => Formula::not(self.implies_not(a)),
            // a | b  ==  ~a -> b
            Formula::Binary(BinaryOp::Or, a, b) => {
                Formula::implies(Formula::not(self.implies_not(a)), self.implies_not(b))
            }
            // a & b  ==  ~(a -> ~b)
            Formula::Binary(BinaryOp::And, a, b) => Formula::not(Formula::implies(
                self.implies_not(a),
                Formula::not(self.implies_not(b)),
            )),
            Formula::Binary(..) => self.implies_not(&self.to_not_and_or(g)),
        }
    }
}

// {->, F}
impl Reducer {
    /// Equivalent formula over `{->}` whose only constant is `F`.
    pub fn to_implies_false(&self, formula: &Formula) -> Formula {
        debug!("to_implies_false(f = {})", formula);
        let result = self.implies_false(&self.to_not_and_or(formula));
        debug_assert!(
            Basis::ImpliesFalse.admits(&result),
            "not in {}: {}",
            Basis::ImpliesFalse,
            result
        );
        result
    }

    fn implies_false(&self, g: &Formula) -> Formula {
        let f = Formula::falsity;
        match g {
            Formula::Var(_) => g.clone(),
            Formula::Const(false) => f(),
            Formula::Const(true) => Formula::implies(f(), f()),
            // ~a  ==  a -> F
            Formula::Not(a) => Formula::implies(self.implies_false(a), f()),
            // a | b  ==  (a -> F) -> b
            Formula::Binary(BinaryOp::Or, a, b) => {
                Formula::implies(Formula::implies(self.implies_false(a), f()), self.implies_false(b))
            }
            // a & b  ==  (a -> (b -> F)) -> F
            Formula::Binary(BinaryOp::And, a, b) => Formula::implies(
                Formula::implies(
                    self.implies_false(a),
                    Formula::implies(self.implies_false(b), f()),
                ),
                f(),
            ),
            Formula::Binary(..) => self.implies_false(&self.to_not_and_or(g)),
        }
    }
}

/// [`Reducer::to_not_and_or`] with the default padding variable.
pub fn to_not_and_or(formula: &Formula) -> Formula {
    Reducer::default().to_not_and_or(formula)
}

/// [`Reducer::to_not_and`] with the default padding variable.
pub fn to_not_and(formula: &Formula) -> Formula {
    Reducer::default().to_not_and(formula)
}

/// [`Reducer::to_nand`] with the default padding variable.
pub fn to_nand(formula: &Formula) -> Formula {
    Reducer::default().to_nand(formula)
}

/// [`Reducer::to_implies_not`] with the default padding variable.
pub fn to_implies_not(formula: &Formula) -> Formula {
    Reducer::default().to_implies_not(formula)
}

/// [`Reducer::to_implies_false`] with the default padding variable.
pub fn to_implies_false(formula: &Formula) -> Formula {
    Reducer::default().to_implies_false(formula)
}
