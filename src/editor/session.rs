//! Editing session: owns the voxel store, history, tool and view state,
//! and turns user gestures into recorded strokes.

use std::path::Path;

use log::{debug, info};

use crate::core::types::{Result, Vec3};
use crate::math::view::default_camera_forward;
use crate::voxel::appearance::{CellAppearance, cell_appearance};
use crate::voxel::color::{Color, Palette};
use crate::voxel::edit::{EditHistory, StrokeKind};
use crate::voxel::fill::{FillRequest, plan_flood_fill};
use crate::voxel::grid::{Grid, GridCoord};
use crate::voxel::layers::LayerCutoff;
use crate::voxel::model;
use crate::voxel::store::VoxelStore;
use crate::voxel::visibility::{ViewParams, VisibilityMask, compute_visibility};
use super::config::EditorConfig;
use super::events::{EditorEvent, EventBus, ModeKind};
use super::tools::{ToolMode, ToolModeController};

/// Modifier keys, sampled when a gesture starts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl/Cmd: erase instead of paint
    pub erase: bool,
    /// Shift: fill through every visible layer
    pub span_layers: bool,
}

/// A paint or erase drag in progress
#[derive(Clone, Copy, Debug)]
struct Gesture {
    erase: bool,
    last_cell: Option<GridCoord>,
}

/// One independent editing session
#[derive(Debug)]
pub struct EditorSession {
    grid: Grid,
    palette: Palette,
    voxel_size: f32,
    store: VoxelStore,
    history: EditHistory,
    tools: ToolModeController,
    layers: LayerCutoff,
    xray: bool,
    show_empty: bool,
    /// Grid-local camera forward direction
    camera_forward: Vec3,
    visibility: VisibilityMask,
    hovered: Option<GridCoord>,
    selected_color: Color,
    gesture: Option<Gesture>,
    events: EventBus,
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Result<Self> {
        let grid = config.grid()?;
        let mut session = Self {
            grid,
            palette: config.palette(),
            voxel_size: config.voxel_size(),
            store: VoxelStore::new(config.base_color),
            history: EditHistory::new(),
            tools: ToolModeController::new(),
            layers: LayerCutoff::new(config.initial_layers, grid.size()),
            xray: false,
            show_empty: config.show_empty,
            camera_forward: default_camera_forward(),
            visibility: VisibilityMask::hidden(grid),
            hovered: None,
            selected_color: config.active_color,
            gesture: None,
            events: EventBus::new(),
        };
        session.visibility = compute_visibility(&session.grid, &session.store, &session.view_params());
        info!("Editor session ready: {}^3 grid, {} layer(s) visible", grid.size(), session.layers.visible());
        Ok(session)
    }

    /// Register an observer. Events are delivered before the triggering call returns.
    pub fn subscribe(&mut self, callback: impl FnMut(&EditorEvent) + 'static) {
        self.events.subscribe(callback);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn store(&self) -> &VoxelStore {
        &self.store
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn tools(&self) -> &ToolModeController {
        &self.tools
    }

    pub fn layers(&self) -> &LayerCutoff {
        &self.layers
    }

    pub fn visibility(&self) -> &VisibilityMask {
        &self.visibility
    }

    pub fn is_xray(&self) -> bool {
        self.xray
    }

    pub fn is_showing_empty(&self) -> bool {
        self.show_empty
    }

    pub fn selected_color(&self) -> Color {
        self.selected_color
    }

    pub fn set_selected_color(&mut self, color: Color) {
        self.selected_color = color;
    }

    pub fn view_params(&self) -> ViewParams {
        ViewParams {
            layers: self.layers.visible(),
            xray: self.xray,
            show_empty: self.show_empty,
            camera_forward: self.camera_forward,
        }
    }

    // --- Render state ---

    /// Update the grid-local camera direction and re-cull
    pub fn set_camera_forward(&mut self, forward: Vec3) {
        self.camera_forward = forward;
        self.refresh_visibility();
    }

    pub fn set_hover(&mut self, cell: Option<GridCoord>) {
        self.hovered = cell.filter(|c| self.grid.contains(*c));
    }

    pub fn hovered(&self) -> Option<GridCoord> {
        self.hovered
    }

    pub fn appearance(&self, coord: GridCoord) -> CellAppearance {
        cell_appearance(&self.store, &self.visibility, &self.palette, self.voxel_size, self.hovered, coord)
    }

    /// Appearance of every cell in dense grid order
    pub fn appearances(&self) -> impl Iterator<Item = (GridCoord, CellAppearance)> + '_ {
        self.grid.cells().map(|c| (c, self.appearance(c)))
    }

    // --- Gestures ---

    /// Pointer pressed over `target` (if the picker hit a cell).
    ///
    /// In fill mode this runs a flood fill and finishes immediately, unless
    /// the erase modifier is held, which always starts an erase drag.
    pub fn pointer_down(&mut self, target: Option<GridCoord>, modifiers: Modifiers) {
        self.finish_gesture();
        if self.tools.is_fill() && !modifiers.erase {
            if let Some(start) = target {
                self.fill_at(start, self.selected_color, modifiers.span_layers);
            }
            return;
        }

        let kind = if modifiers.erase { StrokeKind::Erase } else { StrokeKind::Paint };
        self.history.begin_stroke(kind);
        self.gesture = Some(Gesture {
            erase: modifiers.erase,
            last_cell: None,
        });
        if let Some(cell) = target {
            self.brush(cell);
        }
    }

    /// Pointer moved; paints `target` if it differs from the last cell
    pub fn pointer_move(&mut self, target: Option<GridCoord>) {
        self.set_hover(target);
        if let Some(cell) = target {
            self.brush(cell);
        }
    }

    /// Pointer released; closes the open stroke
    pub fn pointer_up(&mut self) {
        self.finish_gesture();
    }

    /// Pointer left the canvas; the drag ends the same way as a release
    pub fn pointer_leave(&mut self) {
        self.hovered = None;
        self.pointer_up();
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    fn brush(&mut self, cell: GridCoord) {
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        if gesture.last_cell == Some(cell) {
            return;
        }
        gesture.last_cell = Some(cell);
        let erase = gesture.erase;

        if self.paint_cell(cell, erase) {
            self.refresh_visibility();
        }
    }

    /// Apply one brush touch inside the open stroke. Returns true if the cell changed.
    fn paint_cell(&mut self, cell: GridCoord, erase: bool) -> bool {
        if !self.grid.contains(cell) {
            return false;
        }
        let base = self.store.base_color();
        let new_color = if erase { base } else { self.selected_color };
        if !self.tools.allows_paint(self.store.get(cell), new_color, erase) {
            debug!("Paint at {} rejected: cell is painted and overpaint is off", cell);
            return false;
        }

        let old_color = self.store.color_at(cell);
        if old_color == new_color {
            return false;
        }
        self.store.set(cell, new_color);
        self.history.record_change(cell, old_color, new_color);
        true
    }

    /// Commit the open drag, if any, so the next history operation starts idle
    fn finish_gesture(&mut self) {
        if self.gesture.take().is_some() {
            self.end_stroke();
        }
    }

    fn end_stroke(&mut self) {
        self.history.end_stroke();
        self.emit_history();
    }

    // --- Flood fill ---

    /// Recolor the connected region around `start` as one undoable stroke.
    /// Returns the number of recolored cells.
    pub fn fill_at(&mut self, start: GridCoord, color: Color, span_layers: bool) -> usize {
        self.finish_gesture();
        let request = FillRequest {
            start,
            color,
            span_layers,
            layers: self.layers.visible(),
        };
        let Some(plan) = plan_flood_fill(&self.grid, &self.store, &request) else {
            return 0;
        };

        self.history.begin_stroke(StrokeKind::Fill);
        for &cell in &plan.cells {
            self.store.set(cell, plan.target);
            self.history.record_change(cell, plan.current, plan.target);
        }
        self.end_stroke();
        self.refresh_visibility();
        plan.cells.len()
    }

    // --- Undo / redo ---

    pub fn undo(&mut self) -> bool {
        self.finish_gesture();
        if self.history.undo(&mut self.store).is_none() {
            return false;
        }
        self.refresh_visibility();
        self.emit_history();
        true
    }

    pub fn redo(&mut self) -> bool {
        self.finish_gesture();
        if self.history.redo(&mut self.store).is_none() {
            return false;
        }
        self.refresh_visibility();
        self.emit_history();
        true
    }

    // --- Tool modes ---

    pub fn set_tool_mode(&mut self, mode: ToolMode) {
        let changes = self.tools.set_mode(mode);
        self.emit_modes(changes);
    }

    pub fn toggle_overpaint_mode(&mut self) {
        let changes = self.tools.toggle_overpaint();
        self.emit_modes(changes);
    }

    pub fn toggle_fill_mode(&mut self) {
        let changes = self.tools.toggle_fill();
        self.emit_modes(changes);
    }

    fn emit_modes(&mut self, changes: Vec<(ModeKind, bool)>) {
        for (mode, value) in changes {
            self.events.emit(EditorEvent::ModeChanged { mode, value });
        }
    }

    // --- View modes ---

    pub fn toggle_xray_mode(&mut self) {
        self.xray = !self.xray;
        self.refresh_visibility();
        self.events.emit(EditorEvent::ModeChanged { mode: ModeKind::Xray, value: self.xray });
    }

    /// Toggle placeholders for empty cells
    pub fn toggle_grid_visibility(&mut self) {
        self.show_empty = !self.show_empty;
        self.refresh_visibility();
        self.events.emit(EditorEvent::ModeChanged { mode: ModeKind::Grid, value: self.show_empty });
    }

    // --- Layers ---

    pub fn increase_visible_layers(&mut self) {
        let changed = self.layers.increase();
        self.after_layer_change(changed);
    }

    pub fn decrease_visible_layers(&mut self) {
        let changed = self.layers.decrease();
        self.after_layer_change(changed);
    }

    pub fn jump_to_bottom_layer(&mut self) {
        let changed = self.layers.jump_to_bottom();
        self.after_layer_change(changed);
    }

    pub fn jump_to_top_layer(&mut self) {
        let changed = self.layers.jump_to_top();
        self.after_layer_change(changed);
    }

    fn after_layer_change(&mut self, changed: bool) {
        if !changed {
            return;
        }
        debug!("Layer cutoff now {}", self.layers.visible());
        self.refresh_visibility();
        self.events.emit(EditorEvent::LayersChanged {
            can_go_up: self.layers.can_go_up(),
            can_go_down: self.layers.can_go_down(),
        });
    }

    // --- Model lifecycle ---

    /// Wipe the model and its history
    pub fn new_model(&mut self) {
        self.abort_gesture();
        self.store.clear();
        self.history.clear();
        info!("New model");
        self.emit_history();
        self.refresh_visibility();
    }

    /// Replace the model with `json`. Not undoable; clears history.
    /// On error nothing changes.
    pub fn import_json(&mut self, json: &str) -> Result<usize> {
        let entries = model::parse_model(json, &self.grid, self.store.base_color())?;
        Ok(self.load_entries(entries))
    }

    pub fn import_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let entries = model::read_model_file(path.as_ref(), &self.grid, self.store.base_color())?;
        info!("Importing {}", path.as_ref().display());
        Ok(self.load_entries(entries))
    }

    pub fn export_json(&self) -> Result<String> {
        model::model_to_json(&self.store)
    }

    pub fn export_file(&self, path: impl AsRef<Path>) -> Result<()> {
        model::write_model_file(path.as_ref(), &self.store)?;
        info!("Exported {} voxels to {}", self.store.len(), path.as_ref().display());
        Ok(())
    }

    fn load_entries(&mut self, entries: Vec<(GridCoord, Color)>) -> usize {
        self.abort_gesture();
        self.store.replace_all(entries);
        self.history.clear();
        info!("Loaded model with {} voxels", self.store.len());
        self.emit_history();
        self.refresh_visibility();
        self.store.len()
    }

    /// Drop any drag in progress without committing it
    fn abort_gesture(&mut self) {
        self.gesture = None;
    }

    // --- Notifications ---

    fn refresh_visibility(&mut self) {
        self.visibility = compute_visibility(&self.grid, &self.store, &self.view_params());
        self.events.emit(EditorEvent::VisibilityChanged);
    }

    fn emit_history(&mut self) {
        let state = self.history.state();
        self.events.emit(EditorEvent::UndoRedoChanged {
            can_undo: state.can_undo,
            can_redo: state.can_redo,
        });
    }
}
