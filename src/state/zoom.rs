// Lightbox zoom/pan state
pub const MIN_SCALE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            scale: MIN_SCALE,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }
}

impl ZoomState {
    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_SCALE
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Multiply the scale by `factor`, clamped to `[MIN_SCALE, max]`.
    pub fn scale_by(&mut self, factor: f64, max: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.scale = (self.scale * factor).clamp(MIN_SCALE, max);
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        if self.is_zoomed() {
            self.translate_x += dx;
            self.translate_y += dy;
        }
    }

    /// Double-tap: identity <-> `zoom`, pan offset dropped either way.
    pub fn toggle(&mut self, zoom: f64, max: f64) {
        if self.is_zoomed() {
            self.reset();
        } else {
            self.scale = zoom.clamp(MIN_SCALE, max);
            self.translate_x = 0.0;
            self.translate_y = 0.0;
        }
    }

    /// End of a pinch: anything at or below 1x snaps back to identity.
    pub fn settle(&mut self) {
        if !self.is_zoomed() {
            self.reset();
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.3})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}
