//! Dotted-path lookup into JSON documents
//!
//! `"a.b.0.c"` descends into object key `a`, then `b`, then array index `0`,
//! then key `c`. Any step that cannot be taken yields `None`.

use serde_json::Value;

/// Resolve a dotted path against a document
pub fn lookup<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let (head, rest) = match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    };
    if head.is_empty() {
        return None;
    }

    let child = step(document, head)?;
    match rest {
        Some(rest) => lookup(child, rest),
        None => Some(child),
    }
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Read a value as a ranking integer.
///
/// Integers are taken as-is, unsigned values past `i64::MAX` saturate and
/// floats are truncated toward zero. Anything else is `None`.
pub fn as_rank_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    }
}
