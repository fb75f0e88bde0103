//! Flat-file persistence: the result store and the activity log.

pub mod log;
pub mod results;

pub use results::ResultStore;
