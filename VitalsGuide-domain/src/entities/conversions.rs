use crate::entities::vitals::VitalsReading;
use vitals_guide_data::models::vitals::VitalsRecord;

/// Conversion functions between domain entities and data models
/// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert from data model to domain entity for a vitals reading
pub fn convert_to_domain_reading(record: VitalsRecord) -> VitalsReading {
    VitalsReading {
        patient_id: record.patient_id,
        heart_rate: record.heart_rate,
        systolic_bp: record.systolic_bp,
        diastolic_bp: record.diastolic_bp,
        blood_oxygen_pct: record.blood_oxygen_pct,
        steps: record.steps,
        sleep_hours: record.sleep_hours,
        blood_sugar: record.blood_sugar,
    }
}

/// Convert from domain entity to data model for storage
pub fn convert_to_data_record(reading: &VitalsReading) -> VitalsRecord {
    VitalsRecord {
        patient_id: reading.patient_id.clone(),
        heart_rate: reading.heart_rate,
        systolic_bp: reading.systolic_bp,
        diastolic_bp: reading.diastolic_bp,
        blood_oxygen_pct: reading.blood_oxygen_pct,
        steps: reading.steps,
        sleep_hours: reading.sleep_hours,
        blood_sugar: reading.blood_sugar,
    }
}
