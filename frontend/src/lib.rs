//! Eat n Split frontend library: theme, widgets, screens, app root.

pub mod app;
pub mod screens;
pub mod theme;
pub mod widgets;
