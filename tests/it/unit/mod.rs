//! Unit tests for skyselect.

mod frame_tests;
mod snapshot_tests;
mod state_tests;
