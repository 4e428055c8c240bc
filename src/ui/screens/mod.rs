pub mod circuits;
pub mod dashboard;
pub mod log;

pub use circuits::CircuitsScreen;
pub use dashboard::DashboardScreen;
pub use log::LogScreen;
