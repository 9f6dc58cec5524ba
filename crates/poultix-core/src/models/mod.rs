//! Domain models for the Poultix diagnostics engine.

mod disease;
mod feedback;
mod reading;

pub use disease::*;
pub use feedback::*;
pub use reading::*;
