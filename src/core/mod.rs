pub mod design;
pub mod gateway;
pub mod logging;
pub mod preview;
