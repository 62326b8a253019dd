use crate::config::CarouselConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideRole {
    Active,
    Prev,
    Next,
    Hidden,
}

impl SlideRole {
    pub fn class(self) -> Option<&'static str> {
        match self {
            SlideRole::Active => Some("active"),
            SlideRole::Prev => Some("prev"),
            SlideRole::Next => Some("next"),
            SlideRole::Hidden => None,
        }
    }
}

// Checked in order, so with two slides the single neighbour is `Prev`.
pub fn role_of(index: usize, current: usize, total: usize) -> SlideRole {
    if total == 0 {
        return SlideRole::Hidden;
    }
    if index == current {
        SlideRole::Active
    } else if index == (current + total - 1) % total {
        SlideRole::Prev
    } else if index == (current + 1) % total {
        SlideRole::Next
    } else {
        SlideRole::Hidden
    }
}

/// Measured sizes driving the narrow-viewport side transforms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub viewport_width: f64,
    pub container_width: f64,
    pub card_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideTransform {
    pub translate_x: f64,
    pub rotate_deg: f64,
    pub scale: f64,
}

impl SideTransform {
    pub fn css(&self) -> String {
        format!(
            "transform: translateX({:.2}px) translateZ(-100px) rotateY({}deg) scale({}); opacity: 1; z-index: 1;",
            self.translate_x, self.rotate_deg, self.scale
        )
    }
}

/// Side cards on narrow screens are pushed out until their outer edge meets
/// the container edge.
pub fn side_transform(
    role: SlideRole,
    viewport: &Viewport,
    config: &CarouselConfig,
) -> Option<SideTransform> {
    if viewport.viewport_width >= config.narrow_breakpoint_px {
        return None;
    }
    let scale = config.side_scale;
    let shift = (viewport.container_width / 2.0 - viewport.card_width * scale / 2.0).max(0.0);
    match role {
        SlideRole::Prev => Some(SideTransform {
            translate_x: -shift,
            rotate_deg: 15.0,
            scale,
        }),
        SlideRole::Next => Some(SideTransform {
            translate_x: shift,
            rotate_deg: -15.0,
            scale,
        }),
        _ => None,
    }
}

pub fn dot_flags(total: usize, current: usize) -> Vec<bool> {
    (0..total).map(|i| i == current).collect()
}
