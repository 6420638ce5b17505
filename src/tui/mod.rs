//! Terminal UI (Elm architecture): event loop, views, theme.

pub mod app;
pub mod events;
pub mod theme;
pub mod views;
pub mod widgets;

pub use app::App;
pub use events::AppEvent;
