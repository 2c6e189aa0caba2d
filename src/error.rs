/// Errors raised while constructing or evaluating formulas.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// Operator tag outside the closed operator set (or of the wrong arity).
    UnknownOperator(String),
    /// Variable has no value in the model it is evaluated in.
    UnassignedVariable(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownOperator(op) => write!(f, "Unknown operator: {}", op),
            Error::UnassignedVariable(name) => write!(f, "Unassigned variable: {}", name),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Error::UnknownOperator("=>".into()).to_string(), "Unknown operator: =>");
        assert_eq!(Error::UnassignedVariable("q".into()).to_string(), "Unassigned variable: q");
    }
}
