//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;
use async_trait::async_trait;
use vitals_guide_data::repository::VitalsRepositoryTrait;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced performance
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Occupancy of the vitals store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub patients: usize,
    pub readings: usize,
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check that the vitals store is usable
    /// Returns an error if the store cannot be read
    async fn check_store_status(&self) -> Result<StoreStats, String>;
}

/// Read the store's occupancy, failing if the store lock is unusable
pub async fn check_store_status<R: VitalsRepositoryTrait + Sync>(repository: &R) -> Result<StoreStats, String> {
    let patients = repository
        .patient_count()
        .await
        .map_err(|e| format!("Vitals store unavailable: {}", e))?;
    let readings = repository
        .reading_count()
        .await
        .map_err(|e| format!("Vitals store unavailable: {}", e))?;

    Ok(StoreStats { patients, readings })
}

/// Build a store component entry from a status check
pub fn store_component(status: &Result<StoreStats, String>) -> HealthComponent {
    match status {
        Ok(stats) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: Some(format!("{} patients, {} readings", stats.patients, stats.readings)),
        },
        Err(e) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(e.clone()),
        },
    }
}

/// Overall status is the worst status of any component
pub fn overall_status(components: &HashMap<String, HealthComponent>) -> SystemStatus {
    if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
        SystemStatus::Unhealthy
    } else if components.values().any(|c| c.status == ComponentStatus::Degraded) {
        SystemStatus::Degraded
    } else {
        SystemStatus::Healthy
    }
}
