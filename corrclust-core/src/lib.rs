//! Correlation clustering over signed graphs.
//!
//! [`ClusteringEngine`] runs two greedy local searches that merge clusters
//! while the number of violated edges strictly drops. [`LpFormulator`] emits
//! the LP relaxation of the same problem, hands it to an [`LpSolver`] and
//! rounds the answer back into a clustering.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod clustering;
mod engine;
mod error;
mod graph;
mod lp;
mod result;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{EngineBuilder, LabelScan},
    clustering::Clustering,
    engine::ClusteringEngine,
    error::{
        CorrelationError, CorrelationErrorCode, LpError, LpErrorCode, LpSolveError,
        LpSolveErrorCode, Result,
    },
    graph::{DualSignPolicy, EdgeKey, GraphStats, Sign, SignedEdgeSet, SignedGraph, Vertex},
    lp::{
        CanonicalLp, ConstraintType, LpClustering, LpFormulation, LpFormulator, LpSolution,
        LpSolver, ObjectiveSense, PLACEHOLDER_VALUE, PlaceholderSolver, ROUNDING_THRESHOLD,
        VariableBounds, variable_name,
    },
    result::{ClusterId, ClusteringResult},
};
