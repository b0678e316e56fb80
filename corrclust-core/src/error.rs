//! Error types for the corrclust core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced while constructing a [`crate::ClusteringEngine`] or
/// [`crate::LpFormulator`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CorrelationError {
    /// A vertex pair appeared in both the positive and negative edge lists
    /// while [`crate::DualSignPolicy::Reject`] was in force.
    #[error("edge ({left}, {right}) is declared both positive and negative")]
    DualSignedEdge {
        /// Rendered smaller endpoint of the offending pair.
        left: Arc<str>,
        /// Rendered larger endpoint of the offending pair.
        right: Arc<str>,
    },
    /// The greedy pass budget must allow at least one pass.
    #[error("max_passes must be at least 1 (got {got})")]
    InvalidMaxPasses {
        /// The invalid budget supplied by the caller.
        got: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`CorrelationError`] variants.
    enum CorrelationErrorCode for CorrelationError {
        /// A vertex pair carried both signs.
        DualSignedEdge => DualSignedEdge { .. } => "CORRELATION_DUAL_SIGNED_EDGE",
        /// The greedy pass budget was zero.
        InvalidMaxPasses => InvalidMaxPasses { .. } => "CORRELATION_INVALID_MAX_PASSES",
    }
}

/// Failure reported by an [`crate::LpSolver`] implementation.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LpSolveError {
    /// No assignment satisfies the constraints.
    #[error("the linear program is infeasible")]
    Infeasible,
    /// The objective can decrease without bound.
    #[error("the linear program is unbounded")]
    Unbounded,
    /// The solver gave up before converging.
    #[error("solver stopped after {iterations} iterations without converging")]
    IterationLimit {
        /// Iterations performed before giving up.
        iterations: usize,
    },
    /// Backend-specific failure.
    #[error("solver backend failed: {message}")]
    Backend {
        /// Description supplied by the backend.
        message: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`LpSolveError`] variants.
    enum LpSolveErrorCode for LpSolveError {
        /// No assignment satisfies the constraints.
        Infeasible => Infeasible => "LP_SOLVE_INFEASIBLE",
        /// The objective can decrease without bound.
        Unbounded => Unbounded => "LP_SOLVE_UNBOUNDED",
        /// The solver gave up before converging.
        IterationLimit => IterationLimit { .. } => "LP_SOLVE_ITERATION_LIMIT",
        /// Backend-specific failure.
        Backend => Backend { .. } => "LP_SOLVE_BACKEND",
    }
}

/// Error produced by the LP formulation and solving path.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LpError {
    /// The configured [`crate::LpSolver`] failed.
    #[error("solver `{solver}` failed: {error}")]
    Solver {
        /// Name reported by the solver.
        solver: Arc<str>,
        #[source]
        /// Underlying solver error.
        error: LpSolveError,
    },
    /// Constraint rows, right-hand sides and constraint types disagree in
    /// length.
    #[error("{rows} constraint rows but {rhs} right-hand sides and {types} constraint types")]
    RowCountMismatch {
        /// Number of constraint rows.
        rows: usize,
        /// Number of right-hand side values.
        rhs: usize,
        /// Number of constraint types.
        types: usize,
    },
    /// A row or the unrestricted-variable mask does not match the number of
    /// objective coefficients.
    #[error("expected {expected} coefficients but {context} has {got}")]
    ColumnCountMismatch {
        /// Number of objective coefficients.
        expected: usize,
        /// Length of the offending vector.
        got: usize,
        /// Which vector disagreed.
        context: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`LpError`] variants.
    enum LpErrorCode for LpError {
        /// The configured solver failed.
        SolverFailure => Solver { .. } => "LP_SOLVER_FAILURE",
        /// Row-wise vectors disagree in length.
        RowCountMismatch => RowCountMismatch { .. } => "LP_ROW_COUNT_MISMATCH",
        /// Column-wise vectors disagree in length.
        ColumnCountMismatch => ColumnCountMismatch { .. } => "LP_COLUMN_COUNT_MISMATCH",
    }
}

impl LpError {
    /// Retrieve the inner [`LpSolveErrorCode`] when the error originated in
    /// an [`crate::LpSolver`].
    #[must_use]
    pub const fn solver_code(&self) -> Option<LpSolveErrorCode> {
        match self {
            Self::Solver { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the construction API.
pub type Result<T> = core::result::Result<T, CorrelationError>;
