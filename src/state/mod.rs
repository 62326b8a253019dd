pub mod film_roll;
pub mod layout;
pub mod timeline;
pub mod touch;
pub mod zoom;

pub use film_roll::{FilmRoll, RollPhase};
pub use layout::{SlideRole, Viewport, dot_flags, role_of, side_transform};
pub use timeline::{Deferred, Scheduled, Timeline};
pub use touch::{Release, TouchIntent, TouchPoint, TouchState};
pub use zoom::ZoomState;
