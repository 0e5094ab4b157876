//! Removal of declarations and members with no runtime representation.

use meta_decl::{DeclIndex, Declaration, Members, SupportAnalyzer};

use crate::{Filter, FilterContext, ModuleDeclarations};

/// Drops unsupported declarations, and unsupported members of the
/// declarations that stay.
///
/// One [`SupportAnalyzer`] is used for the whole module, so shared
/// sub-graphs are analysed once per stage.
#[derive(Copy, Clone, Debug, Default)]
pub struct RemoveUnsupportedFilter;

enum Verdict {
    Keep,
    Drop,
    /// Keep with the supported subset of its members.
    Trim(Members),
}

impl Filter for RemoveUnsupportedFilter {
    fn name(&self) -> &'static str {
        "remove-unsupported"
    }

    fn apply(&self, module: ModuleDeclarations, cx: &FilterContext<'_>) -> ModuleDeclarations {
        let (name, decls, errors) = module.into_parts();

        let verdicts: Vec<Verdict> = {
            let index = DeclIndex::new(&decls);
            let lookup = cx.layered(&index);
            let mut analyzer = SupportAnalyzer::new(cx.pool, &lookup);
            decls.iter().map(|decl| judge(&mut analyzer, decl)).collect()
        };

        let decls = decls
            .into_iter()
            .zip(verdicts)
            .filter_map(|(mut decl, verdict)| match verdict {
                Verdict::Keep => Some(decl),
                Verdict::Drop => {
                    tracing::debug!(decl = %decl.key(), "unsupported declaration removed");
                    None
                }
                Verdict::Trim(members) => {
                    if let Some(slot) = decl.members_mut() {
                        *slot = members;
                    }
                    Some(decl)
                }
            })
            .collect();
        ModuleDeclarations::from_parts(name, decls, errors)
    }
}

fn judge(analyzer: &mut SupportAnalyzer<'_>, decl: &Declaration) -> Verdict {
    if !analyzer.is_decl_supported(decl) {
        return Verdict::Drop;
    }
    let Some(members) = decl.members() else {
        return Verdict::Keep;
    };

    let trimmed = Members {
        instance_methods: members
            .instance_methods
            .iter()
            .filter(|method| analyzer.is_method_supported(method))
            .cloned()
            .collect(),
        static_methods: members
            .static_methods
            .iter()
            .filter(|method| analyzer.is_method_supported(method))
            .cloned()
            .collect(),
        properties: members
            .properties
            .iter()
            .filter(|property| analyzer.is_property_supported(property))
            .cloned()
            .collect(),
    };
    if trimmed.len() == members.len() {
        return Verdict::Keep;
    }
    tracing::debug!(
        decl = %decl.key(),
        removed = members.len() - trimmed.len(),
        "unsupported members removed"
    );
    Verdict::Trim(trimmed)
}
