//! Unit tests for the panel module.

mod tracker_tests;
