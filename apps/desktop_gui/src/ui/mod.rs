//! UI layer for the dashboard: app shell, notification presenter, theme, and view model.

pub mod app;
pub mod notification;
pub mod theme;
pub mod view_model;

pub use app::DashboardApp;
