//! Greedy local searches over cluster merges.

use tracing::{debug, info, instrument};

use crate::{
    builder::LabelScan,
    clustering::Clustering,
    graph::Vertex,
    result::ClusteringResult,
};

use super::{ClusteringEngine, mistakes::count_mistakes_after_merge};

impl<V: Vertex> ClusteringEngine<V> {
    /// Merges whole clusters pairwise until no merge lowers the mistake
    /// count or the pass budget ([`Self::max_passes`]) runs out.
    ///
    /// Each pass snapshots the distinct labels in order of first appearance
    /// and tries, for every pair `i < j`, relabelling label `i` to label `j`.
    /// A merge is committed iff it strictly lowers the best mistake count seen
    /// so far. Under [`LabelScan::Snapshot`] the pass keeps scanning the
    /// stale snapshot after a commit; pairs naming a merged-away label then
    /// leave the mistake count unchanged and are never committed. Under
    /// [`LabelScan::Refresh`] the first commit ends the pass.
    ///
    /// The mistake count never rises above that of the singleton clustering
    /// and the cluster count never rises across commits.
    #[instrument(
        name = "engine.greedy",
        skip(self),
        fields(
            vertices = self.graph.vertices().len(),
            edges = self.graph.stats().total_edge_count,
            max_passes = self.max_passes(),
            scan = ?self.label_scan,
        ),
    )]
    pub fn greedy_correlation_clustering(&self) -> ClusteringResult<V> {
        let mut working = Clustering::singletons(self.graph.vertices());
        let mut best = self.calculate_mistakes(&working);
        let budget = self.max_passes();
        let mut passes = 0_usize;
        let mut improved = true;

        while improved && passes < budget {
            improved = false;
            passes += 1;
            let labels = working.distinct_labels();

            'scan: for (index, &from) in labels.iter().enumerate() {
                for &to in labels.iter().skip(index + 1) {
                    let mistakes = self.mistakes_after_merge(&working, from, to);
                    if mistakes >= best {
                        continue;
                    }
                    working.relabel(&from, &to);
                    best = mistakes;
                    improved = true;
                    debug!(
                        pass = passes,
                        from = %from,
                        to = %to,
                        mistakes,
                        clusters = working.cluster_count(),
                        "committed cluster merge"
                    );
                    if self.label_scan == LabelScan::Refresh {
                        break 'scan;
                    }
                }
            }
        }

        let result = ClusteringResult::new(working, best);
        info!(
            passes,
            mistakes = result.mistakes(),
            clusters = result.cluster_count(),
            "greedy clustering completed"
        );
        result
    }

    /// Merges the cluster of `u` into the cluster of `v` for ordered vertex
    /// pairs, repeating full passes until one commits nothing.
    ///
    /// Pairs already sharing a cluster are skipped. Every commit strictly
    /// lowers the mistake count and removes one label, so at most `|V| - 1`
    /// merges are committed before the search settles.
    #[instrument(
        name = "engine.simple_greedy",
        skip(self),
        fields(
            vertices = self.graph.vertices().len(),
            edges = self.graph.stats().total_edge_count,
        ),
    )]
    pub fn simple_greedy_clustering(&self) -> ClusteringResult<V> {
        let vertices = self.graph.vertices();
        let mut working = Clustering::singletons(vertices);
        let mut best = self.calculate_mistakes(&working);
        let mut passes = 0_usize;
        let mut changed = true;

        while changed {
            changed = false;
            passes += 1;
            for &u in vertices {
                for &v in vertices {
                    if u == v {
                        continue;
                    }
                    let (Some(&from), Some(&to)) = (working.label(u), working.label(v)) else {
                        continue;
                    };
                    if from == to {
                        continue;
                    }
                    let mistakes = self.mistakes_after_merge(&working, from, to);
                    if mistakes >= best {
                        continue;
                    }
                    working.relabel(&from, &to);
                    best = mistakes;
                    changed = true;
                    debug!(
                        pass = passes,
                        from = %from,
                        to = %to,
                        mistakes,
                        clusters = working.cluster_count(),
                        "committed vertex merge"
                    );
                }
            }
        }

        let result = ClusteringResult::new(working, best);
        info!(
            passes,
            mistakes = result.mistakes(),
            clusters = result.cluster_count(),
            "simple greedy clustering completed"
        );
        result
    }

    fn mistakes_after_merge(&self, working: &Clustering<V, V>, from: V, to: V) -> usize {
        count_mistakes_after_merge(
            &self.graph,
            |vertex| working.label(vertex).copied(),
            from,
            to,
        )
    }
}
