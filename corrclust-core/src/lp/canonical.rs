//! Conversion of a linear program to canonical form.
//!
//! Canonical form here means: maximise, every row `<=`, every variable
//! non-negative. Unrestricted variables are split as `x = x' - x''`, which
//! inserts a negated copy of the column directly after the original.

use crate::error::LpError;

use super::formulation::ConstraintType;

/// Optimisation direction of an objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveSense {
    /// Minimise the objective.
    Minimize,
    /// Maximise the objective.
    Maximize,
}

/// A maximisation LP with `<=` rows only.
///
/// # Examples
/// ```
/// use corrclust_core::{CanonicalLp, ConstraintType, ObjectiveSense};
///
/// // min x - y  s.t.  x + y >= 1,  y unrestricted
/// let canonical = CanonicalLp::from_parts(
///     &[1.0, -1.0],
///     &[vec![1.0, 1.0]],
///     &[1.0],
///     ObjectiveSense::Minimize,
///     &[ConstraintType::GreaterEqual],
///     &[false, true],
/// )?;
/// assert_eq!(canonical.objective(), [-1.0, 1.0, -1.0]);
/// assert_eq!(canonical.constraints(), [vec![-1.0, -1.0, 1.0]]);
/// assert_eq!(canonical.rhs(), [-1.0]);
/// # Ok::<(), corrclust_core::LpError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalLp {
    objective: Vec<f64>,
    constraints: Vec<Vec<f64>>,
    rhs: Vec<f64>,
}

impl CanonicalLp {
    /// Converts an arbitrary LP to canonical form.
    ///
    /// `unrestricted` flags, per original variable, whether it may go
    /// negative.
    ///
    /// # Errors
    /// Returns [`LpError::RowCountMismatch`] when `constraints`, `rhs` and
    /// `types` differ in length, and [`LpError::ColumnCountMismatch`] when a
    /// row or the `unrestricted` mask does not match `objective`.
    pub fn from_parts(
        objective: &[f64],
        constraints: &[Vec<f64>],
        rhs: &[f64],
        sense: ObjectiveSense,
        types: &[ConstraintType],
        unrestricted: &[bool],
    ) -> Result<Self, LpError> {
        if constraints.len() != rhs.len() || constraints.len() != types.len() {
            return Err(LpError::RowCountMismatch {
                rows: constraints.len(),
                rhs: rhs.len(),
                types: types.len(),
            });
        }
        check_width(objective.len(), unrestricted.len(), "unrestricted mask")?;

        let oriented: Vec<f64> = match sense {
            ObjectiveSense::Minimize => objective.iter().map(|c| -c).collect(),
            ObjectiveSense::Maximize => objective.to_vec(),
        };
        let mut canonical = Self {
            objective: split_unrestricted(&oriented, unrestricted),
            constraints: Vec::with_capacity(constraints.len()),
            rhs: Vec::with_capacity(rhs.len()),
        };

        for ((row, &bound), &kind) in constraints.iter().zip(rhs).zip(types) {
            check_width(objective.len(), row.len(), "constraint row")?;
            let split = split_unrestricted(row, unrestricted);
            match kind {
                ConstraintType::LessEqual => canonical.push(split, bound),
                ConstraintType::GreaterEqual => canonical.push(negate(&split), -bound),
                ConstraintType::Equal => {
                    let flipped = negate(&split);
                    canonical.push(split, bound);
                    canonical.push(flipped, -bound);
                }
            }
        }
        Ok(canonical)
    }

    fn push(&mut self, row: Vec<f64>, bound: f64) {
        self.constraints.push(row);
        self.rhs.push(bound);
    }

    /// Objective coefficients to maximise.
    #[must_use]
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    /// `<=` constraint rows.
    #[must_use]
    pub fn constraints(&self) -> &[Vec<f64>] {
        &self.constraints
    }

    /// Right-hand sides, one per row.
    #[must_use]
    pub fn rhs(&self) -> &[f64] {
        &self.rhs
    }
}

const fn check_width(expected: usize, got: usize, context: &'static str) -> Result<(), LpError> {
    if expected == got {
        Ok(())
    } else {
        Err(LpError::ColumnCountMismatch {
            expected,
            got,
            context,
        })
    }
}

fn negate(coefficients: &[f64]) -> Vec<f64> {
    coefficients.iter().map(|c| -c).collect()
}

fn split_unrestricted(coefficients: &[f64], unrestricted: &[bool]) -> Vec<f64> {
    let mut out = Vec::with_capacity(coefficients.len() + unrestricted.len());
    for (&coefficient, &free) in coefficients.iter().zip(unrestricted) {
        out.push(coefficient);
        if free {
            out.push(-coefficient);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::error::LpErrorCode;

    #[test]
    fn equality_becomes_opposing_pair() {
        let canonical = CanonicalLp::from_parts(
            &[2.0, 3.0],
            &[vec![1.0, -1.0], vec![4.0, 0.0]],
            &[5.0, 6.0],
            ObjectiveSense::Maximize,
            &[ConstraintType::Equal, ConstraintType::LessEqual],
            &[false, false],
        )
        .expect("shapes agree");
        assert_eq!(canonical.objective(), [2.0, 3.0]);
        assert_eq!(
            canonical.constraints(),
            [vec![1.0, -1.0], vec![-1.0, 1.0], vec![4.0, 0.0]]
        );
        assert_eq!(canonical.rhs(), [5.0, -5.0, 6.0]);
    }

    #[test]
    fn splits_every_unrestricted_column_in_place() {
        let canonical = CanonicalLp::from_parts(
            &[1.0, 2.0, 3.0],
            &[vec![1.0, 2.0, 3.0]],
            &[0.0],
            ObjectiveSense::Maximize,
            &[ConstraintType::LessEqual],
            &[true, false, true],
        )
        .expect("shapes agree");
        assert_eq!(canonical.objective(), [1.0, -1.0, 2.0, 3.0, -3.0]);
        assert_eq!(canonical.constraints(), [vec![1.0, -1.0, 2.0, 3.0, -3.0]]);
    }

    #[rstest]
    #[case(&[vec![1.0]], &[1.0, 2.0], &[ConstraintType::LessEqual], &[false])]
    #[case(&[vec![1.0]], &[1.0], &[], &[false])]
    fn rejects_row_count_mismatch(
        #[case] rows: &[Vec<f64>],
        #[case] rhs: &[f64],
        #[case] types: &[ConstraintType],
        #[case] mask: &[bool],
    ) {
        let err = CanonicalLp::from_parts(&[1.0], rows, rhs, ObjectiveSense::Minimize, types, mask)
            .expect_err("row counts disagree");
        assert_eq!(err.code(), LpErrorCode::RowCountMismatch);
    }

    #[rstest]
    #[case(&[vec![1.0, 2.0]], &[false], "constraint row")]
    #[case(&[vec![1.0]], &[false, true], "unrestricted mask")]
    fn rejects_column_count_mismatch(
        #[case] rows: &[Vec<f64>],
        #[case] mask: &[bool],
        #[case] expected_context: &str,
    ) {
        let err = CanonicalLp::from_parts(
            &[1.0],
            rows,
            &[0.0],
            ObjectiveSense::Minimize,
            &[ConstraintType::LessEqual],
            mask,
        )
        .expect_err("column counts disagree");
        assert!(matches!(
            err,
            LpError::ColumnCountMismatch { context, .. } if context == expected_context
        ));
    }
}
