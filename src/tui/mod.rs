//! Terminal front ends. Both drive the same [`app::AppState`].

pub mod app;
pub mod controller;
pub mod plain;
mod ui;
