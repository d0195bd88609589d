use std::cmp::Ordering;

use super::numeric;
use crate::error::CompareError;
use crate::registry::Registry;
use crate::value::Value;

/// Same-kind fast path: compares two built-ins of the same kind (numeric
/// pairs count as same-kind even across int/float) by that kind's natural
/// total order, with no registry lookup.
///
/// Returns `None` when the operands are not a same-kind built-in pair and
/// must go through the registry instead. Container kinds recurse through
/// the full dispatcher, so element pairs may themselves hit the registry
/// and fail.
pub(super) fn builtin_cmp(
    registry: &Registry,
    a: &Value,
    b: &Value,
) -> Option<Result<Ordering, CompareError>> {
    let ordering = match (a, b) {
        (Value::Int(x), Value::Int(y)) => Ok(x.cmp(y)),
        (Value::Float(x), Value::Float(y)) => Ok(x.total_cmp(y)),
        (&Value::Int(x), &Value::Float(y)) => Ok(numeric::int_float_cmp(x, y)),
        (&Value::Float(x), &Value::Int(y)) => Ok(numeric::int_float_cmp(y, x).reverse()),
        (Value::Atom(x), Value::Atom(y)) => Ok(x.cmp(y)),
        (Value::Bytes(x), Value::Bytes(y)) => Ok(x.cmp(y)),
        (Value::Func(x), Value::Func(y)) => Ok(x.cmp(y)),
        (Value::Process(x), Value::Process(y)) => Ok(x.cmp(y)),
        (Value::Handle(x), Value::Handle(y)) => Ok(x.cmp(y)),
        (Value::List(x), Value::List(y)) => lexicographic_cmp(registry, x, y),
        (Value::Tuple(x), Value::Tuple(y)) => sized_cmp(registry, x, y),
        (Value::Map(x), Value::Map(y)) => map_cmp(registry, x, y),
        _ => return None,
    };
    Some(ordering)
}

/// Lists: elementwise, then shorter-first.
fn lexicographic_cmp(
    registry: &Registry,
    xs: &[Value],
    ys: &[Value],
) -> Result<Ordering, CompareError> {
    for (x, y) in xs.iter().zip(ys) {
        match registry.compare(x, y)? {
            Ordering::Equal => {}
            decided => return Ok(decided),
        }
    }
    Ok(xs.len().cmp(&ys.len()))
}

/// Tuples: length first, then elementwise.
fn sized_cmp(registry: &Registry, xs: &[Value], ys: &[Value]) -> Result<Ordering, CompareError> {
    match xs.len().cmp(&ys.len()) {
        Ordering::Equal => {}
        decided => return Ok(decided),
    }
    for (x, y) in xs.iter().zip(ys) {
        match registry.compare(x, y)? {
            Ordering::Equal => {}
            decided => return Ok(decided),
        }
    }
    Ok(Ordering::Equal)
}

/// Maps: entry count first, then entrywise in stored order, key before
/// value. Entry order is part of a map value's identity.
fn map_cmp(
    registry: &Registry,
    xs: &[(Value, Value)],
    ys: &[(Value, Value)],
) -> Result<Ordering, CompareError> {
    match xs.len().cmp(&ys.len()) {
        Ordering::Equal => {}
        decided => return Ok(decided),
    }
    for ((kx, vx), (ky, vy)) in xs.iter().zip(ys) {
        match registry.compare(kx, ky)? {
            Ordering::Equal => {}
            decided => return Ok(decided),
        }
        match registry.compare(vx, vy)? {
            Ordering::Equal => {}
            decided => return Ok(decided),
        }
    }
    Ok(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn cmp(a: &Value, b: &Value) -> Ordering {
        builtin_cmp(&Registry::new(), a, b).unwrap().unwrap()
    }

    #[test]
    fn lists_are_lexicographic_then_by_length() {
        let short = Value::list([Value::int(1), Value::int(9)]);
        let long = Value::list([Value::int(1), Value::int(2), Value::int(3)]);
        assert_eq!(cmp(&short, &long), Ordering::Greater);

        let prefix = Value::list([Value::int(1), Value::int(2)]);
        assert_eq!(cmp(&prefix, &long), Ordering::Less);
    }

    #[test]
    fn tuples_order_by_length_first() {
        let pair = Value::tuple([Value::int(9), Value::int(9)]);
        let triple = Value::tuple([Value::int(1), Value::int(1), Value::int(1)]);
        assert_eq!(cmp(&pair, &triple), Ordering::Less);
    }

    #[test]
    fn maps_order_by_size_then_entries() {
        let small = Value::map([(Value::atom("b"), Value::int(9))]);
        let large = Value::map([
            (Value::atom("a"), Value::int(1)),
            (Value::atom("b"), Value::int(2)),
        ]);
        assert_eq!(cmp(&small, &large), Ordering::Less);

        let other = Value::map([(Value::atom("b"), Value::int(10))]);
        assert_eq!(cmp(&small, &other), Ordering::Less);
    }

    #[test]
    fn mixed_kinds_fall_through() {
        let registry = Registry::new();
        assert!(builtin_cmp(&registry, &Value::int(1), &Value::atom("one")).is_none());
        assert!(builtin_cmp(
            &registry,
            &Value::record("money", vec![Value::int(1)]),
            &Value::record("money", vec![Value::int(2)])
        )
        .is_none());
    }

    #[test]
    fn nested_unregistered_elements_propagate() {
        let xs = Value::list([Value::int(1), Value::atom("one")]);
        let ys = Value::list([Value::int(1), Value::int(2)]);
        let err = builtin_cmp(&Registry::new(), &xs, &ys).unwrap().unwrap_err();
        assert!(matches!(err, CompareError::NoImplementation { .. }));
    }
}
