use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::error::{CompareError, RegisterError};
use crate::value::{Tag, Value};

/// An unordered pair of tags stored canonically: `left <= right` under the
/// fixed tag order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair {
    left: Tag,
    right: Tag,
}

impl Pair {
    /// Builds a pair from tags that must already be in canonical order.
    pub fn new(left: impl Into<Tag>, right: impl Into<Tag>) -> Result<Self, RegisterError> {
        let (left, right) = (left.into(), right.into());
        if left > right {
            return Err(RegisterError::OutOfOrder {
                first: left,
                second: right,
            });
        }
        Ok(Self { left, right })
    }

    /// Orders two call-site tags, reporting whether they were swapped to
    /// reach canonical order.
    pub fn canonicalize(a: Tag, b: Tag) -> (Self, bool) {
        if a <= b {
            (Self { left: a, right: b }, false)
        } else {
            (Self { left: b, right: a }, true)
        }
    }

    pub fn left(&self) -> &Tag {
        &self.left
    }

    pub fn right(&self) -> &Tag {
        &self.right
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}

/// A pairwise comparison function.
///
/// Arguments always arrive in the canonical order of the pair the function
/// was registered under; the dispatcher swaps and re-inverts on behalf of
/// callers who pass them the other way around. Implementations must be pure.
pub type CompareFn = Box<dyn Fn(&Value, &Value) -> Ordering + Send + Sync>;

/// A comparison implementation together with the pair it claims to be
/// built for.
pub struct Comparison {
    pair: Pair,
    func: CompareFn,
}

impl Comparison {
    /// Wraps `func` as the implementation for the pair `(a, b)`.
    ///
    /// Fails if `(a, b)` is not in canonical order.
    pub fn new(
        a: impl Into<Tag>,
        b: impl Into<Tag>,
        func: impl Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
    ) -> Result<Self, RegisterError> {
        Ok(Self {
            pair: Pair::new(a, b)?,
            func: Box::new(func),
        })
    }

    /// The pair this implementation reports being built for.
    pub fn pair(&self) -> &Pair {
        &self.pair
    }

    pub(crate) fn invoke(&self, x: &Value, y: &Value) -> Ordering {
        (self.func)(x, y)
    }
}

impl Debug for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Comparison").field("pair", &self.pair).finish_non_exhaustive()
    }
}

/// Builds a [`Comparison`] from two tag expressions and a comparison body.
///
/// ```
/// use tricmp::{comparison, Registry, Value};
///
/// let registry = Registry::new();
/// registry
///     .register(comparison!("money", "money", |a, b| {
///         let (x, y) = (a.as_record().unwrap(), b.as_record().unwrap());
///         x.field(0).unwrap().as_int().cmp(&y.field(0).unwrap().as_int())
///     }))
///     .unwrap();
/// # Ok::<(), tricmp::RegisterError>(())
/// ```
#[macro_export]
macro_rules! comparison {
    ($a:expr, $b:expr, |$x:ident, $y:ident| $body:expr) => {
        $crate::Comparison::new($a, $b, move |$x: &$crate::Value, $y: &$crate::Value| $body)
            .expect("comparison! tags must be in canonical order")
    };
}

/// The registry of pairwise comparison implementations, keyed by canonical
/// [`Pair`].
///
/// Registration is serialized behind the write lock; lookups share the read
/// lock, so a populated registry serves any number of concurrent comparers.
/// The intended lifecycle is populate-once at startup, read-only after.
pub struct Registry {
    entries: RwLock<FxHashMap<Pair, Arc<Comparison>>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `comparison` under its self-reported pair.
    ///
    /// At most one implementation may exist per pair: a second registration
    /// for the same pair is rejected with [`RegisterError::Duplicate`],
    /// never silently overwritten.
    pub fn register(&self, comparison: Comparison) -> Result<(), RegisterError> {
        let mut entries = self.entries.write().unwrap();
        if entries.contains_key(comparison.pair()) {
            return Err(RegisterError::Duplicate {
                pair: comparison.pair().clone(),
            });
        }
        trace!(pair = %comparison.pair(), "registering comparison implementation");
        entries.insert(comparison.pair().clone(), Arc::new(comparison));
        Ok(())
    }

    /// Convenience over [`register`](Registry::register): wraps `func` for
    /// the pair `(a, b)`, which must be in canonical order.
    pub fn register_fn(
        &self,
        a: impl Into<Tag>,
        b: impl Into<Tag>,
        func: impl Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
    ) -> Result<(), RegisterError> {
        self.register(Comparison::new(a, b, func)?)
    }

    /// Finds the implementation for `pair`, distinguishing a missing entry
    /// from one that self-reports the wrong pair.
    pub(crate) fn lookup(&self, pair: &Pair) -> Result<Arc<Comparison>, CompareError> {
        let entries = self.entries.read().unwrap();
        let found = entries
            .get(pair)
            .cloned()
            .ok_or_else(|| CompareError::NoImplementation {
                left: pair.left().clone(),
                right: pair.right().clone(),
            })?;
        drop(entries);
        if found.pair() != pair {
            return Err(CompareError::MalformedImplementation {
                expected: pair.clone(),
                found: found.pair().clone(),
            });
        }
        Ok(found)
    }

    #[cfg(test)]
    pub(crate) fn insert_at(&self, pair: Pair, comparison: Comparison) {
        self.entries.write().unwrap().insert(pair, Arc::new(comparison));
    }
}

impl Debug for Registry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries.read().unwrap();
        f.debug_set().entries(entries.keys()).finish()
    }
}

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::default);

/// The process-wide registry backing the crate-level free functions.
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Registers `comparison` in the [`global`] registry.
pub fn register(comparison: Comparison) -> Result<(), RegisterError> {
    global().register(comparison)
}

/// Registers `func` for the canonical pair `(a, b)` in the [`global`]
/// registry. Must be called before any `compare` involving that pair.
pub fn register_implementation(
    a: impl Into<Tag>,
    b: impl Into<Tag>,
    func: impl Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
) -> Result<(), RegisterError> {
    global().register_fn(a, b, func)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Kind;

    fn zero(_: &Value, _: &Value) -> Ordering {
        Ordering::Equal
    }

    #[test]
    fn out_of_order_registration_is_rejected() {
        let registry = Registry::new();
        let err = registry.register_fn("wallet", "money", zero).unwrap_err();
        assert_eq!(
            err,
            RegisterError::OutOfOrder {
                first: Tag::from("wallet"),
                second: Tag::from("money"),
            }
        );
        assert!(err.to_string().contains("register (money, wallet) instead"));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let registry = Registry::new();
        registry.register_fn("money", "money", zero).unwrap();
        let err = registry.register_fn("money", "money", zero).unwrap_err();
        let pair = Pair::new("money", "money").unwrap();
        assert_eq!(err, RegisterError::Duplicate { pair });
    }

    #[test]
    fn builtin_before_custom_is_canonical() {
        let registry = Registry::new();
        registry
            .register_fn(Kind::Int, "money", zero)
            .unwrap();
        let err = registry.register_fn("money", Kind::Int, zero).unwrap_err();
        assert!(matches!(err, RegisterError::OutOfOrder { .. }));
    }

    #[test]
    fn lookup_distinguishes_missing_from_malformed() {
        let registry = Registry::new();
        let missing = Pair::new("money", "wallet").unwrap();
        assert!(matches!(
            registry.lookup(&missing).unwrap_err(),
            CompareError::NoImplementation { .. }
        ));

        let other = Comparison::new("apple", "apple", zero).unwrap();
        registry.insert_at(missing.clone(), other);
        assert_eq!(
            registry.lookup(&missing).unwrap_err(),
            CompareError::MalformedImplementation {
                expected: missing,
                found: Pair::new("apple", "apple").unwrap(),
            }
        );
    }

    #[test]
    fn canonicalize_reports_swaps() {
        let money = Tag::from("money");
        let wallet = Tag::from("wallet");
        let (pair, swapped) = Pair::canonicalize(wallet.clone(), money.clone());
        assert!(swapped);
        assert_eq!((pair.left(), pair.right()), (&money, &wallet));

        let (_, swapped) = Pair::canonicalize(money.clone(), money);
        assert!(!swapped);
    }
}
