//! Hand-written text corrections applied to specific input files.
//!
//! Patches run in memory on the file text before parsing. Input files on
//! disk are never modified.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourcePatch {
    /// File path relative to the input root.
    pub path: PathBuf,
    pub find: String,
    pub replace: String,
}

impl SourcePatch {
    pub fn new(
        path: impl Into<PathBuf>,
        find: impl Into<String>,
        replace: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            find: find.into(),
            replace: replace.into(),
        }
    }
}

/// Corrections for the CustomNPC API sources.
///
/// `IRole` refers to the NPC through an interface that has no scripting
/// surface, and the entity hierarchy returns its generic parameter from
/// `getMCEntity`, which cannot survive generic-argument stripping.
pub fn default_patches() -> Vec<SourcePatch> {
    const MC_ENTITY: (&str, &str) = ("T getMCEntity()", "Entity getMCEntity()");

    vec![
        SourcePatch::new("noppes/npcs/api/roles/IRole.java", "INpc", "ICustomNpc"),
        SourcePatch::new("noppes/npcs/api/entity/IEntity.java", MC_ENTITY.0, MC_ENTITY.1),
        SourcePatch::new(
            "noppes/npcs/api/entity/IEntityLiving.java",
            MC_ENTITY.0,
            MC_ENTITY.1,
        ),
        SourcePatch::new(
            "noppes/npcs/api/entity/IEntityLivingBase.java",
            MC_ENTITY.0,
            MC_ENTITY.1,
        ),
    ]
}

/// Apply every patch registered for `path` to `text`, in table order.
pub fn apply(patches: &[SourcePatch], path: &Path, text: String) -> String {
    patches
        .iter()
        .filter(|p| p.path == path)
        .fold(text, |text, patch| {
            if !text.contains(&patch.find) {
                warn!(
                    "patch `{}` did not match {}",
                    patch.find,
                    path.display()
                );
                return text;
            }
            debug!(
                "patched {}: `{}` -> `{}`",
                path.display(),
                patch.find,
                patch.replace
            );
            text.replace(&patch.find, &patch.replace)
        })
}
