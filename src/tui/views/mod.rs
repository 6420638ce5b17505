pub mod input_panel;
pub mod preview;
