//! Integration tests for skyselect.
//!
//! These drive `RectSelect` end to end through a recording host and check
//! what the host, the callback and the listeners observe.

mod selection_workflow_tests;
