// VitalsGuide Data
// This crate handles storage of vitals readings

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
