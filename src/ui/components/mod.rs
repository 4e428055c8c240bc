pub mod gauge;

pub use gauge::{caution_gauge, cloud_gauge, urgency_gauge};
