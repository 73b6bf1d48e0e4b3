//! Stand-in adapters that live inside the fixture crate.
//!
//! Nothing here talks to a real database; these exist so the fixtures can be
//! exercised by tests and by the demo runner.

pub mod recording_db;
