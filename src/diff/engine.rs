//! The diff walk.

use super::Difference;
use crate::value::{Map, Shape, Value};

/// Compares `want` against `have`, returning every place where `have` fails
/// to provide what `want` declares.
///
/// Traversal is driven by the shape of `want` alone:
///
/// - maps: each declared key must be present in `have` and is compared
///   recursively under `<path>.<key>`. Keys only `have` carries are ignored.
/// - lists: a length mismatch is reported, then the common prefix is compared
///   element by element under `<path>[<i>]`.
/// - scalars: compared by value.
///
/// Map keys are visited in sorted order, so the result is deterministic.
pub fn diff(path: &str, want: &Value, have: &Value) -> Vec<Difference> {
    let mut differences = Vec::new();
    diff_into(path, want, have, &mut differences);
    differences
}

fn diff_into(path: &str, want: &Value, have: &Value, out: &mut Vec<Difference>) {
    match want {
        Value::Map(want) => diff_maps(path, want, have, out),
        Value::List(want) => diff_lists(path, want, have, out),
        _ => {
            if want != have {
                out.push(Difference::not_equal(path, want, have));
            }
        }
    }
}

fn diff_maps(path: &str, want: &Map, have: &Value, out: &mut Vec<Difference>) {
    // A non-map `have` has none of the declared keys.
    let have = have.as_map();
    for (key, want_v) in want.iter() {
        match have.and_then(|m| m.get(key)) {
            Some(have_v) => diff_into(&format!("{}.{}", path, key), want_v, have_v, out),
            None => out.push(Difference::missing_item(path, key.as_str())),
        }
    }
}

fn diff_lists(path: &str, want: &[Value], have: &Value, out: &mut Vec<Difference>) {
    let Some(have) = have.as_list() else {
        out.push(Difference::type_mismatch(path, Shape::List, have.shape()));
        return;
    };

    if want.len() != have.len() {
        out.push(Difference::unequal_lengths(path, want.len(), have.len()));
    }

    for (i, (want_v, have_v)) in want.iter().zip(have.iter()).enumerate() {
        diff_into(&format!("{}[{}]", path, i), want_v, have_v, out);
    }
}
