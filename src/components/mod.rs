pub mod app;
pub mod carousel;
pub mod modal;
pub mod nav_controls;
pub mod pagination;
