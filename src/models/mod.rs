pub mod measurement;
pub mod organization;
pub mod record;
pub mod status;

pub use measurement::Measurement;
pub use organization::{Department, WorkUnit};
pub use record::{HealthRecord, Identity};
