use crate::error::{Result, RouteError};
use crate::graph::GraphProvider;
use crate::node::Node;

/// Sum of edge weights along `path`.
///
/// Fails with `DisconnectedPath` on the first consecutive pair that has no
/// edge between them. Empty and single-village paths cost nothing.
pub fn path_cost(path: &[Node], graph: &dyn GraphProvider) -> Result<f64> {
    path.windows(2).try_fold(0.0, |total, pair| {
        let (from, to) = (&pair[0], &pair[1]);
        graph
            .weight(from, to)
            .map(|w| total + w)
            .ok_or_else(|| RouteError::DisconnectedPath {
                from: from.to_string(),
                to: to.to_string(),
            })
    })
}
