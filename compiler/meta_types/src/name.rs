//! Fully qualified declaration names.

use std::fmt;

/// A declaration name qualified by its owning module.
///
/// Module names may themselves contain dots (`UIKit.UIResponder`), so the
/// textual form splits on the last dot.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FqName {
    pub module: String,
    pub name: String,
}

impl FqName {
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }

    /// Parse `Module.Sub.Name` into module `Module.Sub` and name `Name`.
    ///
    /// Returns `None` when there is no module part or either side is empty.
    pub fn parse(text: &str) -> Option<Self> {
        let (module, name) = text.rsplit_once('.')?;
        if module.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self::new(module, name))
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.name)
    }
}
