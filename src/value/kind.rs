use std::fmt::{Display, Formatter};

/// The closed set of built-in value shapes.
///
/// The derived `Ord` is the fixed total order used to canonicalize registry
/// keys. It carries no domain meaning; it only decides which side of an
/// unordered pair gets registered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Int,
    Float,
    Atom,
    List,
    Map,
    Bytes,
    Tuple,
    Func,
    Process,
    Handle,
}

impl Kind {
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Atom => "atom",
            Kind::List => "list",
            Kind::Map => "map",
            Kind::Bytes => "bytes",
            Kind::Tuple => "tuple",
            Kind::Func => "func",
            Kind::Process => "process",
            Kind::Handle => "handle",
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(self, Kind::Int | Kind::Float)
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Name of a user-defined record type.
///
/// Tags order lexicographically among themselves; like the `Kind` order,
/// this exists purely to pick a canonical registration key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeTag(String);

impl TypeTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeTag {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeTag {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registry key component: either a built-in [`Kind`] or the [`TypeTag`]
/// of a user-defined record type.
///
/// The derived `Ord` (builtins before customs, inner orders within each arm)
/// is the canonical order over the whole tag space.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Builtin(Kind),
    Custom(TypeTag),
}

impl From<Kind> for Tag {
    fn from(kind: Kind) -> Self {
        Tag::Builtin(kind)
    }
}

impl From<TypeTag> for Tag {
    fn from(tag: TypeTag) -> Self {
        Tag::Custom(tag)
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Tag::Custom(TypeTag::new(name))
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Builtin(kind) => Display::fmt(kind, f),
            Tag::Custom(tag) => Display::fmt(tag, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_sort_before_customs() {
        assert!(Tag::Builtin(Kind::Handle) < Tag::Custom(TypeTag::new("aardvark")));
    }

    #[test]
    fn custom_tags_sort_lexicographically() {
        assert!(Tag::from("money") < Tag::from("wallet"));
        assert!(Tag::from("Money") < Tag::from("money"));
    }
}
