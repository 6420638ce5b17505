//! Test suite organization.
//!
//! - `common`: shared fixtures (scripted fake gateway, sample artifacts)
//! - `unit`: session orchestration and gateway HTTP behavior
//! - `property`: proptest invariants for config merging and preview layers

mod common;
mod property;
