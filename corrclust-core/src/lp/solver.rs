//! Solver seam for the LP relaxation.
//!
//! The crate ships no numeric solver. [`LpSolver`] is the capability an
//! external simplex or interior-point backend implements; the only bundled
//! implementation is [`PlaceholderSolver`], whose output is flagged as
//! non-authoritative.

use std::collections::HashMap;

use tracing::warn;

use crate::{error::LpSolveError, graph::Vertex};

use super::formulation::LpFormulation;

/// Value the placeholder solver assigns to every variable.
pub const PLACEHOLDER_VALUE: f64 = 0.5;

/// Variable values keyed by `z_<u>_<v>` name.
///
/// # Examples
/// ```
/// use corrclust_core::LpSolution;
///
/// let solution: LpSolution = [("z_1_2".to_owned(), 0.0)].into_iter().collect();
/// assert_eq!(solution.get("z_1_2"), Some(0.0));
/// assert!(solution.is_authoritative());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LpSolution {
    values: HashMap<String, f64>,
    authoritative: bool,
}

impl LpSolution {
    /// Wraps values produced by a real solver.
    #[must_use]
    pub fn from_values(values: HashMap<String, f64>) -> Self {
        Self {
            values,
            authoritative: true,
        }
    }

    /// Wraps illustrative values that must not drive decisions.
    #[must_use]
    pub fn placeholder(values: HashMap<String, f64>) -> Self {
        Self {
            values,
            authoritative: false,
        }
    }

    /// Returns the value of the named variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Whether the values came from a real solver.
    #[must_use]
    pub fn is_authoritative(&self) -> bool {
        self.authoritative
    }

    /// Number of valued variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no variable is valued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(name, &value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, f64)> for LpSolution {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}

/// Numeric backend able to solve an [`LpFormulation`].
///
/// # Examples
/// ```
/// use corrclust_core::{LpFormulation, LpSolution, LpSolveError, LpSolver, Vertex};
///
/// /// Declares every pair "same cluster".
/// struct AllTogether;
///
/// impl<V: Vertex> LpSolver<V> for AllTogether {
///     fn name(&self) -> &str { "all-together" }
///     fn solve(&self, formulation: &LpFormulation<V>) -> Result<LpSolution, LpSolveError> {
///         Ok(formulation.variable_names().iter().map(|name| (name.clone(), 0.0)).collect())
///     }
/// }
/// ```
pub trait LpSolver<V: Vertex> {
    /// Returns a human-readable solver name.
    fn name(&self) -> &str;

    /// Solves `formulation`, returning one value per variable name.
    ///
    /// # Errors
    /// Returns [`LpSolveError`] when the backend cannot produce a solution.
    fn solve(&self, formulation: &LpFormulation<V>) -> Result<LpSolution, LpSolveError>;
}

/// Stand-in solver that assigns [`PLACEHOLDER_VALUE`] to every variable.
///
/// Each call emits a warning and returns a solution whose
/// [`LpSolution::is_authoritative`] is `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceholderSolver;

impl<V: Vertex> LpSolver<V> for PlaceholderSolver {
    fn name(&self) -> &str {
        "placeholder"
    }

    fn solve(&self, formulation: &LpFormulation<V>) -> Result<LpSolution, LpSolveError> {
        warn!(
            variables = formulation.variable_count(),
            "placeholder LP solver in use; values are illustrative, not authoritative"
        );
        Ok(LpSolution::placeholder(
            formulation
                .variable_names()
                .iter()
                .map(|name| (name.clone(), PLACEHOLDER_VALUE))
                .collect(),
        ))
    }
}
