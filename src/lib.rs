#![warn(clippy::semicolon_if_nothing_returned, clippy::uninlined_format_args)]

//! Extensible three-way comparison over dynamic [`Value`]s.
//!
//! Built-ins of the same kind compare by their natural order; everything
//! else dispatches through a [`Registry`] of pairwise implementations keyed
//! by canonically-ordered tag pairs. Registering one direction of a pair is
//! enough: the dispatcher swaps arguments and reverses results for callers
//! who compare the other way around.
//!
//! The free functions ([`compare()`], the predicates, [`sort()`],
//! [`register_implementation`]) operate on a process-wide [`global`]
//! registry; embedders wanting isolation hold their own [`Registry`].

pub use compare::{
    compare, equal, greater_or_equal, greater_than, less_or_equal, less_than, sort,
};
pub use error::{CompareError, RegisterError};
pub use registry::{
    global, register, register_implementation, CompareFn, Comparison, Pair, Registry,
};
pub use value::{Kind, Record, Tag, TypeTag, Value};

mod compare;
mod error;
mod registry;
mod value;
