//! Stroke recorder and undo/redo stacks.

use log::debug;

use crate::voxel::store::VoxelStore;
use super::delta::{Stroke, StrokeKind};
use crate::voxel::color::Color;
use crate::voxel::grid::GridCoord;

/// Undo/redo availability, as reported to observers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryState {
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Records strokes and replays them backwards (undo) or forwards (redo).
///
/// The recorder is `Idle` when no stroke is open and `Recording` between
/// [`begin_stroke`](Self::begin_stroke) and [`end_stroke`](Self::end_stroke).
/// Every operation is a silent no-op when its precondition does not hold.
#[derive(Debug, Default)]
pub struct EditHistory {
    /// Applied strokes, most recent last
    undo_stack: Vec<Stroke>,
    /// Reverted strokes, most recent last
    redo_stack: Vec<Stroke>,
    /// Stroke being recorded, if any
    current: Option<Stroke>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a stroke. An already open stroke is discarded.
    pub fn begin_stroke(&mut self, kind: StrokeKind) {
        if let Some(dropped) = self.current.replace(Stroke::new(kind)) {
            debug!("Discarding open {:?} stroke with {} changes", dropped.kind, dropped.len());
        }
    }

    pub fn is_recording(&self) -> bool {
        self.current.is_some()
    }

    /// Append a transition to the open stroke.
    /// Returns false if nothing was recorded (idle, or old == new).
    pub fn record_change(&mut self, coord: GridCoord, old_color: Color, new_color: Color) -> bool {
        match self.current.as_mut() {
            Some(stroke) => stroke.push(coord, old_color, new_color),
            None => false,
        }
    }

    /// Close the open stroke. Non-empty strokes go on the undo stack and
    /// invalidate redo; empty ones are dropped. Returns true if pushed.
    pub fn end_stroke(&mut self) -> bool {
        let Some(stroke) = self.current.take() else {
            return false;
        };
        if stroke.is_empty() {
            return false;
        }
        debug!("Committed {:?} stroke ({} changes)", stroke.kind, stroke.len());
        self.undo_stack.push(stroke);
        self.redo_stack.clear();
        true
    }

    /// Revert the most recent stroke, restoring each old color.
    /// Changes are replayed newest first so repeated cells end at their
    /// original color.
    pub fn undo(&mut self, store: &mut VoxelStore) -> Option<&Stroke> {
        let stroke = self.undo_stack.pop()?;
        for change in stroke.changes().iter().rev() {
            store.set(change.coord, change.old_color);
        }
        debug!("Undo {:?} stroke ({} changes)", stroke.kind, stroke.len());
        self.redo_stack.push(stroke);
        self.redo_stack.last()
    }

    /// Re-apply the most recently undone stroke in recorded order.
    pub fn redo(&mut self, store: &mut VoxelStore) -> Option<&Stroke> {
        let stroke = self.redo_stack.pop()?;
        for change in stroke.changes() {
            store.set(change.coord, change.new_color);
        }
        debug!("Redo {:?} stroke ({} changes)", stroke.kind, stroke.len());
        self.undo_stack.push(stroke);
        self.undo_stack.last()
    }

    /// Drop both stacks and any open stroke
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current = None;
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn state(&self) -> HistoryState {
        HistoryState {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn green() -> Color {
        Color::ACTIVE
    }

    fn paint(history: &mut EditHistory, store: &mut VoxelStore, coord: GridCoord, color: Color) {
        let old = store.color_at(coord);
        store.set(coord, color);
        history.record_change(coord, old, color);
    }

    #[test]
    fn test_new_history_empty() {
        let history = EditHistory::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(!history.is_recording());
    }

    #[test]
    fn test_erase_stroke_undo_restores_voxel() {
        let mut store = VoxelStore::default();
        let mut history = EditHistory::new();
        let c: GridCoord = "2,2,2".parse().unwrap();

        history.begin_stroke(StrokeKind::Erase);
        history.record_change(c, Color::from_hex("#6ABE30").unwrap(), Color::from_hex("#505050").unwrap());
        assert!(history.end_stroke());
        assert_eq!(history.undo_count(), 1);

        history.undo(&mut store);
        assert!(store.has(c));
        assert_eq!(store.get(c), Some(green()));
    }

    #[test]
    fn test_record_without_stroke_is_ignored() {
        let mut history = EditHistory::new();
        assert!(!history.record_change(GridCoord::new(0, 0, 0), Color::BASE, green()));
        assert!(!history.end_stroke());
        assert!(!history.can_undo());
    }

    #[test]
    fn test_empty_stroke_discarded() {
        let mut history = EditHistory::new();
        history.begin_stroke(StrokeKind::Paint);
        history.record_change(GridCoord::new(0, 0, 0), green(), green());
        assert!(!history.end_stroke());
        assert!(!history.can_undo());
    }

    #[test]
    fn test_begin_overwrites_open_stroke() {
        let mut history = EditHistory::new();
        history.begin_stroke(StrokeKind::Paint);
        history.record_change(GridCoord::new(0, 0, 0), Color::BASE, green());
        history.begin_stroke(StrokeKind::Erase);
        assert!(!history.end_stroke());
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut store = VoxelStore::default();
        let mut history = EditHistory::new();

        history.begin_stroke(StrokeKind::Paint);
        paint(&mut history, &mut store, GridCoord::new(0, 0, 0), green());
        paint(&mut history, &mut store, GridCoord::new(1, 0, 0), green());
        history.end_stroke();

        assert!(history.undo(&mut store).is_some());
        assert!(store.is_empty());
        assert!(history.can_redo());

        assert!(history.redo(&mut store).is_some());
        assert_eq!(store.len(), 2);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_repeated_cell_undo_restores_original() {
        let mut store = VoxelStore::default();
        let mut history = EditHistory::new();
        let c = GridCoord::new(3, 0, 3);

        history.begin_stroke(StrokeKind::Paint);
        paint(&mut history, &mut store, c, green());
        paint(&mut history, &mut store, c, Color::HOVER);
        history.end_stroke();

        history.undo(&mut store);
        assert!(!store.has(c));
        history.redo(&mut store);
        assert_eq!(store.get(c), Some(Color::HOVER));
    }

    #[test]
    fn test_new_stroke_clears_redo() {
        let mut store = VoxelStore::default();
        let mut history = EditHistory::new();

        history.begin_stroke(StrokeKind::Paint);
        paint(&mut history, &mut store, GridCoord::new(0, 0, 0), green());
        history.end_stroke();
        history.undo(&mut store);

        history.begin_stroke(StrokeKind::Paint);
        paint(&mut history, &mut store, GridCoord::new(1, 1, 1), green());
        history.end_stroke();

        assert!(!history.can_redo());
        assert!(history.redo(&mut store).is_none());
        assert!(!store.has(GridCoord::new(0, 0, 0)));
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let mut store = VoxelStore::default();
        let mut history = EditHistory::new();
        assert!(history.undo(&mut store).is_none());
        assert!(history.redo(&mut store).is_none());
        assert_eq!(history.state(), HistoryState::default());
    }

    #[test]
    fn test_clear() {
        let mut store = VoxelStore::default();
        let mut history = EditHistory::new();

        history.begin_stroke(StrokeKind::Paint);
        paint(&mut history, &mut store, GridCoord::new(0, 0, 0), green());
        history.end_stroke();
        history.begin_stroke(StrokeKind::Fill);

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.is_recording());
    }
}
