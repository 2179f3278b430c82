//! Root-finding method selection.

use std::fmt;
use std::str::FromStr;

use crate::types::SolverError;

/// The closed set of bracketing methods a [`RootFinder`](super::RootFinder)
/// can use.
///
/// The two methods are alternatives: a root finder never falls back from one
/// to the other.
///
/// # Examples
///
/// ```
/// use impvol_core::math::solvers::RootFindMethod;
///
/// let method: RootFindMethod = "dekkers".parse().unwrap();
/// assert_eq!(method, RootFindMethod::Dekker);
/// assert_eq!(method.name(), "dekker");
///
/// assert!("newton".parse::<RootFindMethod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RootFindMethod {
    /// Interval halving.
    Bisection,
    /// Secant steps guarded by bisection.
    #[default]
    Dekker,
}

impl RootFindMethod {
    /// All supported methods.
    pub const ALL: [RootFindMethod; 2] = [RootFindMethod::Bisection, RootFindMethod::Dekker];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            RootFindMethod::Bisection => "bisection",
            RootFindMethod::Dekker => "dekker",
        }
    }
}

impl FromStr for RootFindMethod {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bisection" => Ok(RootFindMethod::Bisection),
            "dekker" | "dekkers" => Ok(RootFindMethod::Dekker),
            _ => Err(SolverError::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for RootFindMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
