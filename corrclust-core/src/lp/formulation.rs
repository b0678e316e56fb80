//! LP artefact handed to an external solver.

use std::{collections::HashMap, fmt};

use crate::{
    error::LpError,
    graph::{EdgeKey, Sign, Vertex},
};

use super::{
    canonical::{CanonicalLp, ObjectiveSense},
    solver::LpSolution,
};

/// Inequality or equality type of one constraint row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintType {
    /// `row · x <= rhs`
    LessEqual,
    /// `row · x >= rhs`
    GreaterEqual,
    /// `row · x == rhs`
    Equal,
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "=",
        })
    }
}

/// Closed interval a variable must stay within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableBounds {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl VariableBounds {
    /// The `[0, 1]` interval used for every relaxed edge variable.
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };
}

/// Returns the solver-facing name `z_<u>_<v>` of the pair variable.
///
/// # Examples
/// ```
/// use corrclust_core::variable_name;
///
/// assert_eq!(variable_name(3, 7), "z_3_7");
/// ```
#[must_use]
pub fn variable_name<V: Vertex>(u: V, v: V) -> String {
    format!("z_{u}_{v}")
}

/// LP relaxation of correlation clustering over one signed graph.
///
/// Minimise `Σ_{E+} z − Σ_{E−} z` (plus the constant
/// [`Self::objective_offset`]) subject to the triangle rows and
/// `0 <= z <= 1`. A value near `0` means "same cluster".
#[derive(Debug, Clone)]
pub struct LpFormulation<V> {
    edges: Vec<(EdgeKey<V>, Sign)>,
    index: HashMap<EdgeKey<V>, usize>,
    variable_names: Vec<String>,
    objective: Vec<f64>,
    constraints: Vec<Vec<f64>>,
    rhs: Vec<f64>,
    constraint_types: Vec<ConstraintType>,
    bounds: Vec<VariableBounds>,
    objective_offset: f64,
}

impl<V: Vertex> LpFormulation<V> {
    pub(super) fn with_variables(edges: Vec<(EdgeKey<V>, Sign)>) -> Self {
        let mut index = HashMap::with_capacity(edges.len());
        let mut variable_names = Vec::with_capacity(edges.len());
        let mut objective = Vec::with_capacity(edges.len());
        let mut negatives = 0_u32;
        for (slot, &(key, sign)) in edges.iter().enumerate() {
            index.entry(key).or_insert(slot);
            variable_names.push(variable_name(key.left(), key.right()));
            objective.push(f64::from(sign.weight()));
            if sign == Sign::Negative {
                negatives = negatives.saturating_add(1);
            }
        }
        Self {
            bounds: vec![VariableBounds::UNIT; edges.len()],
            edges,
            index,
            variable_names,
            objective,
            constraints: Vec::new(),
            rhs: Vec::new(),
            constraint_types: Vec::new(),
            objective_offset: f64::from(negatives),
        }
    }

    /// Index of the variable for the pair, in either orientation.
    #[must_use]
    pub fn variable_index(&self, u: V, v: V) -> Option<usize> {
        self.index.get(&EdgeKey::new(u, v)).copied()
    }

    pub(super) fn push_triangle(&mut self, ij: usize, ik: usize, jk: usize) {
        let width = self.objective.len();
        for (plus, minus_a, minus_b) in [(ij, ik, jk), (ik, ij, jk), (jk, ij, ik)] {
            let mut row = vec![0.0; width];
            for (slot, value) in [(plus, 1.0), (minus_a, -1.0), (minus_b, -1.0)] {
                if let Some(cell) = row.get_mut(slot) {
                    *cell = value;
                }
            }
            self.constraints.push(row);
            self.rhs.push(0.0);
            self.constraint_types.push(ConstraintType::LessEqual);
        }
    }

    /// Number of decision variables.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.objective.len()
    }

    /// Edge and sign behind each variable, in variable order.
    #[must_use]
    pub fn edges(&self) -> &[(EdgeKey<V>, Sign)] {
        &self.edges
    }

    /// Variable names in variable order.
    #[must_use]
    pub fn variable_names(&self) -> &[String] {
        &self.variable_names
    }

    /// Objective coefficients: `+1` per positive edge, `-1` per negative.
    #[must_use]
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    /// Constant `|E−|` that turns the objective into a disagreement count.
    #[must_use]
    pub fn objective_offset(&self) -> f64 {
        self.objective_offset
    }

    /// Dense constraint rows.
    #[must_use]
    pub fn constraints(&self) -> &[Vec<f64>] {
        &self.constraints
    }

    /// Right-hand sides, one per row.
    #[must_use]
    pub fn rhs(&self) -> &[f64] {
        &self.rhs
    }

    /// Constraint types, one per row.
    #[must_use]
    pub fn constraint_types(&self) -> &[ConstraintType] {
        &self.constraint_types
    }

    /// Per-variable bounds.
    #[must_use]
    pub fn bounds(&self) -> &[VariableBounds] {
        &self.bounds
    }

    /// Evaluates the objective, offset included, at `solution`.
    ///
    /// Returns `None` when the solution lacks any variable.
    #[must_use]
    pub fn objective_value(&self, solution: &LpSolution) -> Option<f64> {
        self.variable_names
            .iter()
            .zip(&self.objective)
            .try_fold(self.objective_offset, |total, (name, coefficient)| {
                solution.get(name).map(|value| total + coefficient * value)
            })
    }

    /// Converts the formulation to canonical (maximise, `<=`) form.
    ///
    /// # Errors
    /// Propagates the shape checks of [`CanonicalLp::from_parts`]; a
    /// formulation built by [`super::LpFormulator`] always passes them.
    pub fn to_canonical(&self) -> Result<CanonicalLp, LpError> {
        CanonicalLp::from_parts(
            &self.objective,
            &self.constraints,
            &self.rhs,
            ObjectiveSense::Minimize,
            &self.constraint_types,
            &vec![false; self.objective.len()],
        )
    }
}
