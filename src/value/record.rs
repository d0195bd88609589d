use super::kind::TypeTag;
use super::Value;

/// A user-defined record: a type tag plus its field values.
///
/// Records have no natural order. Two records (or a record and anything
/// else) only compare through an implementation registered for their tag
/// pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    tag: TypeTag,
    fields: Vec<Value>,
}

impl Record {
    pub fn new(tag: impl Into<TypeTag>, fields: Vec<Value>) -> Self {
        Self {
            tag: tag.into(),
            fields,
        }
    }

    pub fn tag(&self) -> &TypeTag {
        &self.tag
    }

    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&Value> {
        self.fields.get(index)
    }
}
