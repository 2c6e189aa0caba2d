//! Two-valued semantics of propositional formulas.
//!
//! Two formulas are *equivalent* when they take the same truth value in every
//! model over the union of their variables. This is the relation every
//! reduction in [`crate::reduce`] preserves.

use std::collections::BTreeMap;

use crate::error::Error;
use crate::formula::{Formula, Layer};

/// Assignment of truth values to variable names.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Model {
    values: BTreeMap<String, bool>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.values.insert(name.into(), value);
    }

    /// Returns a copy of this model with one more (or one overridden) variable.
    pub fn with(&self, name: impl Into<String>, value: bool) -> Self {
        let mut model = self.clone();
        model.set(name, value);
        model
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(name, &value)| (name.as_str(), value))
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Model {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}

/// Truth value of `formula` in `model`.
///
/// Fails with [`Error::UnassignedVariable`] if the formula mentions a variable
/// the model does not assign.
pub fn evaluate(formula: &Formula, model: &Model) -> Result<bool, Error> {
    formula.fold(|layer: Layer<Result<bool, Error>>| match layer {
        Layer::Var(name) => model.get(name).ok_or_else(|| Error::UnassignedVariable(name.to_string())),
        Layer::Const(value) => Ok(value),
        Layer::Not(a) => Ok(!a?),
        Layer::Binary(op, a, b) => Ok(op.apply(a?, b?)),
    })
}

/// All `2^n` models over the given variables.
///
/// Models are produced in lexicographic order of their values, the first
/// variable varying slowest: all-false first, all-true last.
pub fn all_models<S: AsRef<str>>(variables: &[S]) -> impl Iterator<Item = Model> + '_ {
    let n = variables.len();
    assert!(n < 64, "Too many variables to enumerate: {}", n);
    (0..1u64 << n).map(move |bits| {
        variables
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_ref(), bits >> (n - 1 - i) & 1 == 1))
            .collect()
    })
}

/// Truth values of `formula` in each of the given models, in order.
pub fn truth_values(formula: &Formula, models: impl IntoIterator<Item = Model>) -> Result<Vec<bool>, Error> {
    models.into_iter().map(|model| evaluate(formula, &model)).collect()
}

/// Whether `formula` is true in every model over its variables.
#[allow(clippy::let_and_return)]
pub fn is_tautology(formula: &Formula) -> bool {
    let variables: Vec<&str> = formula.variables().into_iter().collect();
    // The model iterator borrows `variables`, so it must be dropped first.
    let result = all_models(&variables).all(|model| evaluate(formula, &model) == Ok(true));
    result
}

/// Whether `f` and `g` agree in every model over the union of their variables.
#[allow(clippy::let_and_return)]
pub fn is_equivalent(f: &Formula, g: &Formula) -> bool {
    let mut variables = f.variables();
    variables.extend(g.variables());
    let variables: Vec<&str> = variables.into_iter().collect();
    let result = all_models(&variables).all(|model| match (evaluate(f, &model), evaluate(g, &model)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    });
    result
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
    fn test_evaluate() {
        let f = Formula::implies(p(), q());
        let model: Model = [("p", true), ("q", false)].into_iter().collect();
        assert_eq!(evaluate(&f, &model), Ok(false));
        assert_eq!(evaluate(&f, &model.with("q", true)), Ok(true));
    }

    #[test]
    fn test_evaluate_constants() {
        let model = Model::new();
        assert_eq!(evaluate(&Formula::truth(), &model), Ok(true));
        assert_eq!(evaluate(&Formula::falsity(), &model), Ok(false));
        assert_eq!(evaluate(&Formula::not(Formula::falsity()), &model), Ok(true));
    }

    #[test]
    fn test_evaluate_unassigned() {
        let f = Formula::and(p(), q());
        let model: Model = [("p", true)].into_iter().collect();
        assert_eq!(evaluate(&f, &model), Err(Error::UnassignedVariable("q".into())));
    }

    #[test]
    fn test_all_models() {
        let models: Vec<Model> = all_models(&["p", "q"]).collect();
        assert_eq!(models.len(), 4);
        let rows: Vec<(bool, bool)> = models
            .iter()
            .map(|m| (m.get("p").unwrap(), m.get("q").unwrap()))
            .collect();
        assert_eq!(rows, vec![(false, false), (false, true), (true, false), (true, true)]);
    }

    #[test]
    fn test_all_models_empty() {
        let models: Vec<Model> = all_models::<&str>(&[]).collect();
        assert_eq!(models, vec![Model::new()]);
    }

    #[test]
    fn test_truth_values() {
        let f = Formula::xor(p(), q());
        let values = truth_values(&f, all_models(&["p", "q"]));
        assert_eq!(values, Ok(vec![false, true, true, false]));
    }

    #[test]
    fn test_is_tautology() {
        assert!(is_tautology(&Formula::or(p(), Formula::not(p()))));
        assert!(is_tautology(&Formula::truth()));
        assert!(!is_tautology(&Formula::implies(p(), q())));
    }

    #[test]
    fn test_is_equivalent() {
        let f = Formula::implies(p(), q());
        let g = Formula::or(Formula::not(p()), q());
        assert!(is_equivalent(&f, &g));
        assert!(!is_equivalent(&f, &Formula::implies(q(), p())));
    }

    #[test]
    fn test_is_equivalent_with_padding() {
        // A tautology over `r` is equivalent to `T`, whatever `r` is.
        let r = Formula::var("r");
        let taut = Formula::or(r.clone(), Formula::not(r));
        assert!(is_equivalent(&Formula::truth(), &taut));
        assert!(!is_equivalent(&Formula::falsity(), &taut));
    }
}
