use std::collections::VecDeque;

use tracing::{debug, info};

use crate::consts::{APP_TITLE, HISTORY_CAPACITY};
use crate::ops::Operation;
use crate::raster::Raster;

/// An editing session over a single raster.
///
/// Holds the working raster, the raster as first loaded, and bounded
/// undo/redo history. Every snapshot is an owned deep copy, so no two
/// slots ever share pixels.
///
/// Calls must be serialized; a caller offloading [`Document::apply`] to a
/// worker must not run any other method until it returns.
#[derive(Clone, Debug)]
pub struct Document {
    current: Option<Raster>,
    original: Option<Raster>,
    /// Most recent snapshot at the back.
    undo: VecDeque<Raster>,
    redo: Vec<Raster>,
    source_label: Option<String>,
    capacity: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::with_history_capacity(HISTORY_CAPACITY)
    }

    /// Empty document keeping at most `capacity` undo snapshots (at least 1).
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            current: None,
            original: None,
            undo: VecDeque::new(),
            redo: Vec::new(),
            source_label: None,
            capacity: capacity.max(1),
        }
    }

    /// Replace the working and original rasters and drop all history.
    pub fn load(&mut self, raster: &Raster, label: Option<String>) {
        info!(
            width = raster.width(),
            height = raster.height(),
            label = label.as_deref().unwrap_or("-"),
            "Loaded raster"
        );
        self.current = Some(raster.clone());
        self.original = Some(raster.clone());
        self.source_label = label;
        self.undo.clear();
        self.redo.clear();
    }

    /// Run `op` on the working raster and make the result current.
    ///
    /// Returns `None` without touching history when nothing is loaded.
    pub fn apply(&mut self, op: &Operation) -> Option<&Raster> {
        let current = self.current.as_ref()?;
        debug!(op = %op, "Applying operation");
        let result = op.apply(current);
        if let Some(previous) = self.current.replace(result) {
            self.push_undo(previous);
        }
        self.redo.clear();
        self.current.as_ref()
    }

    /// Step back one edit. No-op when there is nothing to undo.
    pub fn undo(&mut self) {
        let Some(previous) = self.undo.pop_back() else {
            return;
        };
        if let Some(current) = self.current.replace(previous) {
            self.redo.push(current);
        }
        debug!(undo = self.undo.len(), redo = self.redo.len(), "Undo");
    }

    /// Re-apply the most recently undone edit. No-op when there is none.
    pub fn redo(&mut self) {
        let Some(next) = self.redo.pop() else {
            return;
        };
        if let Some(current) = self.current.replace(next) {
            self.push_undo(current);
        }
        debug!(undo = self.undo.len(), redo = self.redo.len(), "Redo");
    }

    /// Restore the raster as first loaded, recording the revert as an edit.
    pub fn revert(&mut self) {
        let Some(original) = self.original.as_ref() else {
            return;
        };
        let restored = original.clone();
        if let Some(current) = self.current.replace(restored) {
            self.push_undo(current);
        }
        self.redo.clear();
        debug!(undo = self.undo.len(), "Reverted to original");
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub fn history_capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Raster> {
        self.current.as_ref()
    }

    pub fn original(&self) -> Option<&Raster> {
        self.original.as_ref()
    }

    pub fn source_label(&self) -> Option<&str> {
        self.source_label.as_deref()
    }

    /// The source label, or `fallback` when none was recorded.
    pub fn display_name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.source_label().unwrap_or(fallback)
    }

    pub fn window_title(&self) -> String {
        format!("{APP_TITLE} \u{2014} {}", self.display_name_or("Untitled"))
    }

    /// Snapshots are moved in; the caller hands over a raster nothing else owns.
    fn push_undo(&mut self, snapshot: Raster) {
        self.undo.push_back(snapshot);
        while self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
    }
}
