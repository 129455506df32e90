pub mod config;
pub mod distances;
pub mod errors;
pub mod logging;
pub mod search;
pub mod support;
pub mod villages;
