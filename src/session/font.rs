/// Base size in rem; 100 %.
pub const INITIAL_FONT_SIZE: f32 = 1.125;
pub const MIN_FONT_SIZE: f32 = 0.875;
pub const MAX_FONT_SIZE: f32 = 2.25;
const FONT_SIZE_STEP: f32 = 0.125;

/// Stepped reading size clamped to `[MIN_FONT_SIZE, MAX_FONT_SIZE]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    size: f32,
}

impl Default for FontScale {
    fn default() -> Self {
        Self {
            size: INITIAL_FONT_SIZE,
        }
    }
}

impl FontScale {
    pub fn increase(&mut self) {
        self.size = (self.size + FONT_SIZE_STEP).min(MAX_FONT_SIZE);
    }

    pub fn decrease(&mut self) {
        self.size = (self.size - FONT_SIZE_STEP).max(MIN_FONT_SIZE);
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Size relative to the initial one, rounded to a whole percent.
    pub fn percentage(&self) -> u32 {
        (self.size / INITIAL_FONT_SIZE * 100.0).round() as u32
    }
}
