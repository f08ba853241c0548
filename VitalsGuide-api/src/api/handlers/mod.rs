pub mod alerts;
pub mod health;
pub mod vitals;
pub mod wellness;

// Re-export handlers for easier imports
pub use alerts::send_alert;
pub use health::health_check;
pub use vitals::{analyze_health, get_vitals, save_vitals, vitals_trend};
pub use wellness::mental_wellness;
