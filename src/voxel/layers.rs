//! Layer cutoff: how many y-layers are shown from the bottom.

/// Number of visible y-layers, always within `1..=max`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerCutoff {
    visible: u32,
    max: u32,
}

impl LayerCutoff {
    pub fn new(visible: u32, max: u32) -> Self {
        let max = max.max(1);
        Self {
            visible: visible.clamp(1, max),
            max,
        }
    }

    /// Current cutoff (L)
    pub fn visible(&self) -> u32 {
        self.visible
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn can_go_up(&self) -> bool {
        self.visible < self.max
    }

    pub fn can_go_down(&self) -> bool {
        self.visible > 1
    }

    /// Show one more layer. Returns true if the cutoff changed.
    pub fn increase(&mut self) -> bool {
        self.set(self.visible + 1)
    }

    /// Hide the top layer. Returns true if the cutoff changed.
    pub fn decrease(&mut self) -> bool {
        self.set(self.visible.saturating_sub(1))
    }

    pub fn jump_to_bottom(&mut self) -> bool {
        self.set(1)
    }

    pub fn jump_to_top(&mut self) -> bool {
        self.set(self.max)
    }

    /// Set the cutoff, clamped to range. Returns true if it changed.
    pub fn set(&mut self, visible: u32) -> bool {
        let visible = visible.clamp(1, self.max);
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}
