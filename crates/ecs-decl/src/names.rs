//! Identifier allocation for generated component and tag types.
//!
//! Names are derived solely from a prefix and a loop index, so two runs with
//! the same counts always produce the same sequence and the component and tag
//! namespaces never intersect.

use serde::Serialize;
use std::fmt;

/// Which namespace a generated type belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NameKind {
    Component,
    Tag,
}

impl NameKind {
    pub fn prefix(self) -> &'static str {
        match self {
            NameKind::Component => "C",
            NameKind::Tag => "T",
        }
    }
}

/// A generated type identifier such as `C7` or `T13`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(kind: NameKind, index: usize) -> Self {
        Self(format!("{}{}", kind.prefix(), index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Allocate `count` names of the given kind, in index order.
pub fn allocate(kind: NameKind, count: usize) -> Vec<TypeName> {
    (0..count).map(|index| TypeName::new(kind, index)).collect()
}
