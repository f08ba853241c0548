// Storage models
pub mod vitals;

pub use vitals::VitalsRecord;
