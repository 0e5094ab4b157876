//! Filter and finalization errors.

use meta_decl::DeclKey;

/// A problem with one declaration.
///
/// Attached to the module and reported downstream; never stops other
/// declarations from being processed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeclError {
    #[error("{decl}: reference to `{target}` cannot be resolved")]
    UnresolvedReference { decl: DeclKey, target: DeclKey },

    #[error("{decl}: member `{member}` is inconsistent: {reason}")]
    InconsistentMember {
        decl: DeclKey,
        member: String,
        reason: String,
    },
}

impl DeclError {
    /// The declaration the error is attached to.
    pub fn decl(&self) -> &DeclKey {
        match self {
            Self::UnresolvedReference { decl, .. } | Self::InconsistentMember { decl, .. } => decl,
        }
    }
}

/// A structural problem that fails a whole module.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModuleError {
    #[error("module `{module}` declares {key} more than once")]
    DuplicateDeclaration { module: String, key: DeclKey },
}
