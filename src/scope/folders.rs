//! Folder ancestry walking.
//!
//! Folders reference their parent by id within a flat per-workspace list, so
//! deriving a request's folder chain means walking back-references up to the
//! collection root. The chain is returned root-first so that deeper folders
//! override shallower ones when the assembler merges their variables.

use crate::models::workspace::Folder;
use std::collections::HashSet;

/// Walks from `folder_id` up to the collection root and returns the chain in
/// root-first, leaf-last order.
///
/// `None` yields an empty chain. A dangling id, whether the starting one or a
/// broken parent reference partway up, ends the walk with whatever was
/// accumulated rather than failing. A corrupted cyclic parent graph is
/// truncated at the first repeated id so the walk always terminates.
pub fn folder_chain<'a>(folder_id: Option<&str>, folders: &'a [Folder]) -> Vec<&'a Folder> {
    let mut chain = Vec::new();
    let mut visited = HashSet::new();
    let mut current = folder_id;

    while let Some(id) = current {
        if !visited.insert(id.to_string()) {
            break;
        }
        let Some(folder) = folders.iter().find(|f| f.id == id) else {
            break;
        };
        chain.push(folder);
        current = folder.parent_folder_id.as_deref();
    }

    // Walked leaf to root; the merge wants root first.
    chain.reverse();
    chain
}
