pub mod add;
pub mod backup;
pub mod edit;
pub mod log;
pub mod reset;
pub mod stats;
