//! Property-based tests for the greedy clustering searches.
//!
//! Random signed graphs come from [`graph_fixture_strategy`]; every property
//! must hold for both searches and both label-scan modes.

use proptest::prelude::*;
use tracing::Level;

use corrclust_test_support::tracing::with_recording;

use crate::{
    Clustering, ClusteringEngine, ClusteringResult, EngineBuilder, LabelScan,
    test_utils::{GraphFixture, graph_fixture_strategy, suite_proptest_config},
};

fn build(fixture: &GraphFixture, scan: LabelScan) -> ClusteringEngine<u32> {
    EngineBuilder::new(fixture.vertices.clone())
        .with_positive_edges(fixture.positive.iter().copied())
        .with_negative_edges(fixture.negative.iter().copied())
        .with_label_scan(scan)
        .build()
        .expect("generated graphs never carry dual signs")
}

fn check_result_bounds(
    engine: &ClusteringEngine<u32>,
    result: &ClusteringResult<u32>,
) -> Result<(), TestCaseError> {
    let vertices = engine.graph().vertices();
    let singletons = engine.calculate_mistakes(&Clustering::singletons(vertices));
    prop_assert!(result.mistakes() <= singletons);
    prop_assert_eq!(result.mistakes(), engine.calculate_mistakes(result.clustering()));
    prop_assert!(result.cluster_count() >= 1);
    prop_assert!(result.cluster_count() <= vertices.len());
    prop_assert!(engine.validate_clustering(result.clustering()));
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(96))]

    #[test]
    fn greedy_never_worse_than_singletons(
        fixture in graph_fixture_strategy(),
        refresh in any::<bool>(),
    ) {
        let scan = if refresh { LabelScan::Refresh } else { LabelScan::Snapshot };
        let engine = build(&fixture, scan);
        check_result_bounds(&engine, &engine.greedy_correlation_clustering())?;
    }

    #[test]
    fn simple_greedy_never_worse_than_singletons(fixture in graph_fixture_strategy()) {
        let engine = build(&fixture, LabelScan::Snapshot);
        check_result_bounds(&engine, &engine.simple_greedy_clustering())?;
    }

    #[test]
    fn mistake_count_is_deterministic(fixture in graph_fixture_strategy()) {
        let engine = build(&fixture, LabelScan::Snapshot);
        let result = engine.simple_greedy_clustering();
        let first = engine.calculate_mistakes(result.clustering());
        let second = engine.calculate_mistakes(result.clustering());
        prop_assert_eq!(first, second);
        prop_assert_eq!(engine.simple_greedy_clustering(), result);
    }

    #[test]
    fn committed_merges_shrink_clusters_and_mistakes(
        fixture in graph_fixture_strategy(),
        refresh in any::<bool>(),
    ) {
        let scan = if refresh { LabelScan::Refresh } else { LabelScan::Snapshot };
        let engine = build(&fixture, scan);
        let (result, layer) = with_recording(|| engine.greedy_correlation_clustering());
        let commits = layer.events_with_message(Level::DEBUG, "committed cluster merge");

        let mut clusters = u64::try_from(fixture.vertices.len()).unwrap_or(u64::MAX);
        let mut mistakes = u64::MAX;
        for event in &commits {
            let now_clusters = event.field_u64("clusters").expect("clusters field");
            let now_mistakes = event.field_u64("mistakes").expect("mistakes field");
            prop_assert!(now_clusters <= clusters);
            prop_assert!(now_mistakes < mistakes);
            clusters = now_clusters;
            mistakes = now_mistakes;
        }
        if let Some(last) = commits.last() {
            prop_assert_eq!(
                last.field_u64("mistakes"),
                u64::try_from(result.mistakes()).ok()
            );
        }
    }
}
