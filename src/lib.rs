//! # prop-reduce: operator-basis reductions for propositional logic
//!
//! **`prop-reduce`** rewrites a propositional [`Formula`][crate::formula::Formula]
//! built from any of the connectives NOT, AND, OR, IMPLIES, XOR, IFF, NAND and NOR
//! (and the constants `T` and `F`) into an *equivalent* formula over a smaller
//! set of operators:
//!
//! | Reduction                                              | Target basis       |
//! |--------------------------------------------------------|--------------------|
//! | [`to_not_and_or`][crate::reduce::to_not_and_or]       | `{~, &, \|}`       |
//! | [`to_not_and`][crate::reduce::to_not_and]             | `{~, &}`           |
//! | [`to_nand`][crate::reduce::to_nand]                   | `{-&}`             |
//! | [`to_implies_not`][crate::reduce::to_implies_not]     | `{->, ~}`          |
//! | [`to_implies_false`][crate::reduce::to_implies_false] | `{->}` and `F`     |
//!
//! Equivalent means: for every assignment of truth values to the variables of
//! the input (extended arbitrarily to the padding variable the reduction may
//! introduce), both formulas evaluate to the same value. The outputs are
//! correct, not minimal.
//!
//! ## Basic Usage
//!
//! ```rust
//! use prop_reduce::basis::Basis;
//! use prop_reduce::formula::Formula;
//! use prop_reduce::reduce::to_nand;
//! use prop_reduce::semantics::is_equivalent;
//!
//! let p = Formula::var("p");
//! let q = Formula::var("q");
//!
//! // f = p & q
//! let f = Formula::and(p, q);
//! let g = to_nand(&f);
//!
//! assert_eq!(g.to_string(), "((p-&q)-&(p-&q))");
//! assert!(Basis::Nand.admits(&g));
//! assert!(is_equivalent(&f, &g));
//! ```
//!
//! ## Core Components
//!
//! - **[`formula`]**: The immutable [`Formula`][crate::formula::Formula] tree and its bottom-up fold.
//! - **[`reduce`]**: The [`Reducer`][crate::reduce::Reducer] and the five reductions.
//! - **[`basis`]**: Target operator sets, for checking and dispatching reductions.
//! - **[`semantics`]**: Evaluation in a model and equivalence checking.

pub mod basis;
pub mod error;
pub mod formula;
pub mod operator;
pub mod reduce;
pub mod semantics;
