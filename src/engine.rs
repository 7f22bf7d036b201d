//! Compute backend selector.
//!
//! This crate ships exactly one compute backend: a pure-Rust scalar
//! evaluator. `EngineSelector` exists so callers can name a backend
//! explicitly without the crate silently ignoring an unrecognized one.

use std::fmt;
use std::str::FromStr;

use crate::error::TesseroidError;

/// Which compute backend to dispatch through. Both variants currently
/// resolve to the same scalar evaluator; the distinction is preserved so
/// an `engine` name is never silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineSelector {
    #[default]
    Default,
    Scalar,
}

impl fmt::Display for EngineSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineSelector::Default => f.write_str("default"),
            EngineSelector::Scalar => f.write_str("scalar"),
        }
    }
}

impl FromStr for EngineSelector {
    type Err = TesseroidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(EngineSelector::Default),
            "scalar" => Ok(EngineSelector::Scalar),
            other => Err(TesseroidError::UnknownEngine(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_engine_parses() {
        assert_eq!("default".parse::<EngineSelector>().unwrap(), EngineSelector::Default);
    }

    #[test]
    fn unknown_engine_name_errors() {
        let err = "gpu".parse::<EngineSelector>();
        assert!(matches!(err, Err(TesseroidError::UnknownEngine(_))));
    }

    #[test]
    fn default_trait_matches_named_default() {
        assert_eq!(EngineSelector::default(), EngineSelector::Default);
    }
}
