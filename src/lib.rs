/// DesignGenie - AI-Powered Design Generation Studio (TUI Edition)
///
/// Core library providing the generation gateway, design session
/// orchestration, and preview composition for AI-assisted graphic design.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
