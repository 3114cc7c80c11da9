//! Weakness queries over defending type combinations

use crate::types::Type;

/// Get every attacking type that is super effective against any of the
/// defender's types.
///
/// The result is an insertion-order set: types appear in the order they are
/// first discovered (input order, then chart-row order), with no duplicates.
pub fn weaknesses(defender_types: &[Type]) -> Vec<Type> {
    let mut weak = Vec::new();
    for t in defender_types {
        for w in t.weak_to() {
            if !weak.contains(w) {
                weak.push(*w);
            }
        }
    }
    weak
}

/// Build advisory text for countering a defender with the given types.
///
/// Pure string composition over [`weaknesses`]; identical input always
/// produces identical output.
pub fn counter_tips(defender_types: &[Type]) -> String {
    let weak = weaknesses(defender_types);
    let counters = join_names(&weak);
    let avoid = join_names(defender_types);
    format!(
        "Best counters: {}. Use fast, powerful super effective attacks and avoid relying on {} moves.",
        counters, avoid
    )
}

fn join_names(types: &[Type]) -> String {
    types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
