use log::warn;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Walks the predecessor map backward from `target` and returns the path
/// from `source` to `target`, both inclusive.
///
/// Returns `None` when the walk reaches a vertex without a predecessor
/// before reaching `source`, i.e. when `target` is unreachable. A path is
/// never returned partially. `target == source` always yields `[source]`.
pub fn reconstruct_path<V>(
    predecessors: &HashMap<V, Option<V>>,
    source: &V,
    target: &V,
) -> Option<Vec<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    let mut path = vec![target.clone()];
    let mut current = target;

    // A valid chain visits each key at most once, plus a source that may be missing from the map
    let max_len = predecessors.len() + 1;

    while current != source {
        match predecessors.get(current) {
            Some(Some(pred)) => {
                path.push(pred.clone());
                current = pred;
            }
            _ => return None,
        }

        if path.len() > max_len {
            warn!(
                "Predecessor chain from {:?} does not reach {:?}; cycle detected",
                target, source
            );
            return None;
        }
    }

    path.reverse();
    Some(path)
}
