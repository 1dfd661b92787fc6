//! Mutually exclusive paint / overpaint / fill tool state

use super::events::ModeKind;
use crate::voxel::color::Color;

/// Active tool
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolMode {
    #[default]
    Paint,
    Overpaint,
    Fill,
}

/// Tool flags. `Paint` is never stored: it is active when neither
/// overpaint nor fill is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToolModeController {
    overpaint: bool,
    fill: bool,
}

impl ToolModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ToolMode {
        if self.fill {
            ToolMode::Fill
        } else if self.overpaint {
            ToolMode::Overpaint
        } else {
            ToolMode::Paint
        }
    }

    pub fn is_overpaint(&self) -> bool {
        self.overpaint
    }

    pub fn is_fill(&self) -> bool {
        self.fill
    }

    pub fn is_paint(&self) -> bool {
        !self.overpaint && !self.fill
    }

    /// Switch to `mode`. Returns the flags to announce: each one that
    /// changed, then `Paint`. Empty when `mode` is already active.
    pub fn set_mode(&mut self, mode: ToolMode) -> Vec<(ModeKind, bool)> {
        if self.mode() == mode {
            return Vec::new();
        }
        let before = *self;
        self.overpaint = mode == ToolMode::Overpaint;
        self.fill = mode == ToolMode::Fill;
        self.changes_since(before)
    }

    /// Flip overpaint, forcing fill off when overpaint turns on
    pub fn toggle_overpaint(&mut self) -> Vec<(ModeKind, bool)> {
        let before = *self;
        self.overpaint = !self.overpaint;
        if self.overpaint {
            self.fill = false;
        }
        self.changes_since(before)
    }

    /// Flip fill, forcing overpaint off when fill turns on
    pub fn toggle_fill(&mut self) -> Vec<(ModeKind, bool)> {
        let before = *self;
        self.fill = !self.fill;
        if self.fill {
            self.overpaint = false;
        }
        self.changes_since(before)
    }

    /// Whether a brush may put `new` on a cell currently holding `existing`.
    ///
    /// Without overpaint a painted cell must be erased before it can take a
    /// different color. Erasing is never restricted.
    pub fn allows_paint(&self, existing: Option<Color>, new: Color, erase: bool) -> bool {
        match existing {
            _ if erase => true,
            None => true,
            Some(color) => color == new || self.overpaint,
        }
    }

    fn changes_since(&self, before: Self) -> Vec<(ModeKind, bool)> {
        let mut changes = Vec::with_capacity(3);
        if before.overpaint != self.overpaint {
            changes.push((ModeKind::Overpaint, self.overpaint));
        }
        if before.fill != self.fill {
            changes.push((ModeKind::Fill, self.fill));
        }
        changes.push((ModeKind::Paint, self.is_paint()));
        changes
    }
}
