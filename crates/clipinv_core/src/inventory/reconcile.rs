//! Unused file reconciliation.
//!
//! A file may only be deleted when no referenced clip points at it, even
//! if the clip that "owns" it is unused.

use std::collections::BTreeSet;

use crate::models::{Clip, ClipId, ClipType};

/// Files and clips that no timeline placement uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnusedFiles {
    /// Files safe to delete from disk.
    pub deletable: BTreeSet<String>,
    /// Clips with zero references, removable from the project.
    pub reclaimable: BTreeSet<ClipId>,
}

/// What the delete-unused action should do.
///
/// Removing project records and deleting files are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnusedAction {
    /// No unused clips.
    Nothing,
    /// Unused clips exist but none has a deletable file (e.g. color clips):
    /// only remove the records from the project.
    Cleanup { clips: Vec<ClipId> },
    /// Delete these files from disk together with their clips.
    DeleteFiles {
        paths: Vec<String>,
        clips: Vec<ClipId>,
    },
}

/// Compute the files and clips no timeline placement uses.
///
/// Candidates are the paths of unreferenced, non-slideshow clips; any path
/// also used by a referenced clip is removed from the candidates.
pub fn compute_unused_files(clips: &[Clip]) -> UnusedFiles {
    let mut deletable: BTreeSet<String> = clips
        .iter()
        .filter(|c| !c.is_used() && c.clip_type != ClipType::Slideshow && c.has_file())
        .map(|c| c.path.clone())
        .collect();

    for clip in clips.iter().filter(|c| c.is_used()) {
        deletable.remove(&clip.path);
    }

    let reclaimable = clips
        .iter()
        .filter(|c| !c.is_used())
        .map(|c| c.id.clone())
        .collect();

    UnusedFiles {
        deletable,
        reclaimable,
    }
}

impl UnusedFiles {
    /// Decide between cleanup and deletion.
    pub fn plan(&self) -> UnusedAction {
        let clips: Vec<ClipId> = self.reclaimable.iter().cloned().collect();
        if clips.is_empty() {
            UnusedAction::Nothing
        } else if self.deletable.is_empty() {
            UnusedAction::Cleanup { clips }
        } else {
            UnusedAction::DeleteFiles {
                paths: self.deletable.iter().cloned().collect(),
                clips,
            }
        }
    }
}
