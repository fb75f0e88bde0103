pub mod backup;
pub mod bank;
pub mod config;
pub mod history;
pub mod init;
pub mod log;
pub mod play;
pub mod report;
