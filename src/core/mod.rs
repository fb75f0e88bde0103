pub mod backup;
pub mod bank;
pub mod config;
pub mod eligibility;
pub mod evaluator;
pub mod log;
pub mod quiz;
pub mod scoring;
pub mod session;
