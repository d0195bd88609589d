use std::cmp::Ordering;

// 2^63, exactly representable; the first float past `i64::MAX`.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;

/// Exact order between an integer and a float.
///
/// The integer is never cast to `f64` (lossy past 2^53); the float is
/// classified and truncated instead, so e.g. `2^53 + 1` and `2^53 as f64`
/// compare correctly. NaN sorts above every number, consistent with the
/// `f64::total_cmp` order used for float/float pairs.
pub(crate) fn int_float_cmp(a: i64, b: f64) -> Ordering {
    if b.is_nan() || b == f64::INFINITY {
        return Ordering::Less;
    }
    if b == f64::NEG_INFINITY {
        return Ordering::Greater;
    }

    let trunc = b.trunc();
    if trunc >= I64_UPPER {
        return Ordering::Less;
    }
    if trunc < I64_LOWER {
        return Ordering::Greater;
    }

    // |trunc| <= 2^63, so the cast is exact.
    let whole = trunc as i64;
    match a.cmp(&whole) {
        Ordering::Equal => {
            // Equal whole parts: the fractional remainder decides.
            let frac = b - trunc;
            if frac > 0.0 {
                Ordering::Less
            } else if frac < 0.0 {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
        unequal => unequal,
    }
}
