pub mod add;
pub mod backup;
pub mod config;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod message;
pub mod reset;
pub mod stats;
