// Public entities for the VitalsGuide API
// This module contains data structures that are shared across the application boundary

// Vitals readings, trends, risk reports, alerts and wellness tips
pub mod vitals;

// Common entities for error handling
pub mod common;
