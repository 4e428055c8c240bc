pub mod advisor;
pub mod caution;
pub mod compliance;
pub mod fuzzy;

pub use advisor::{StrategyAdvisor, StrategyCalibration, Thresholds};
pub use caution::CautionRiskTable;
pub use compliance::validate_compliance;
pub use fuzzy::estimate_urgency;
