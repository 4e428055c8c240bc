pub mod circuit;
pub mod compound;
pub mod decision;
pub mod telemetry;
pub mod weather;

pub use circuit::*;
pub use compound::*;
pub use decision::*;
pub use telemetry::*;
pub use weather::*;
