//! CLI commands for routefinder

pub mod dispatch;
pub mod distances;
pub mod format;
pub mod search;
pub mod villages;
