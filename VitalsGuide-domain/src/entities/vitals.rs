use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// Domain model for one vitals observation of one patient
///
/// No field is range-checked: any integer or float is stored as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsReading {
    /// Patient the reading belongs to
    pub patient_id: String,

    /// Heart rate in beats per minute
    #[serde(alias = "hr")]
    pub heart_rate: i64,

    /// Systolic blood pressure (the higher number)
    #[serde(alias = "bp_sys")]
    pub systolic_bp: i64,

    /// Diastolic blood pressure (the lower number)
    #[serde(alias = "bp_dia")]
    pub diastolic_bp: i64,

    /// Blood oxygen saturation percentage
    #[serde(alias = "spo2")]
    pub blood_oxygen_pct: i64,

    /// Step count
    pub steps: i64,

    /// Hours slept; `None` means not measured
    #[serde(default)]
    pub sleep_hours: Option<f64>,

    /// Blood sugar; `None` means not measured
    #[serde(default, alias = "sugar")]
    pub blood_sugar: Option<f64>,
}

impl VitalsReading {
    /// Value of a single numeric field, if present on this reading
    pub fn measurement(&self, field: VitalField) -> Option<Measurement> {
        match field {
            VitalField::HeartRate => Some(Measurement::Int(self.heart_rate)),
            VitalField::SystolicBp => Some(Measurement::Int(self.systolic_bp)),
            VitalField::DiastolicBp => Some(Measurement::Int(self.diastolic_bp)),
            VitalField::BloodOxygenPct => Some(Measurement::Int(self.blood_oxygen_pct)),
            VitalField::Steps => Some(Measurement::Int(self.steps)),
            VitalField::SleepHours => self.sleep_hours.map(Measurement::Float),
            VitalField::BloodSugar => self.blood_sugar.map(Measurement::Float),
        }
    }
}

/// The numeric fields of a reading, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalField {
    HeartRate,
    SystolicBp,
    DiastolicBp,
    BloodOxygenPct,
    Steps,
    SleepHours,
    BloodSugar,
}

impl VitalField {
    /// Every field, in the order trends are reported
    pub const ALL: [VitalField; 7] = [
        VitalField::HeartRate,
        VitalField::SystolicBp,
        VitalField::DiastolicBp,
        VitalField::BloodOxygenPct,
        VitalField::Steps,
        VitalField::SleepHours,
        VitalField::BloodSugar,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            VitalField::HeartRate => "heart_rate",
            VitalField::SystolicBp => "systolic_bp",
            VitalField::DiastolicBp => "diastolic_bp",
            VitalField::BloodOxygenPct => "blood_oxygen_pct",
            VitalField::Steps => "steps",
            VitalField::SleepHours => "sleep_hours",
            VitalField::BloodSugar => "blood_sugar",
        }
    }
}

impl fmt::Display for VitalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field value in its native numeric type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measurement {
    Int(i64),
    Float(f64),
}

impl Measurement {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Measurement::Int(v) => v as f64,
            Measurement::Float(v) => v,
        }
    }
}

/// Summary statistics for one field over a patient's record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldTrend {
    /// Mean of present values, rounded half-to-even to 2 decimals
    pub average: f64,
    pub min: Measurement,
    pub max: Measurement,
    /// Last present value in append order
    pub last: Measurement,
}

/// Trend statistics for every field that had at least one present value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    /// Per-field statistics, in `VitalField::ALL` order
    pub trends: IndexMap<VitalField, FieldTrend>,

    /// Number of readings in the record, including those missing optional fields
    pub records: usize,
}

/// Outcome of a threshold rule applied to the latest reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskFlag {
    Hypertension,
    Hypoxia,
    Tachycardia,
    SleepDeprivation,
    HighBloodSugar,
    /// Reported alone when no rule matched
    NoCriticalRisks,
}

impl RiskFlag {
    /// Human-readable label reported to clients
    pub fn message(&self) -> &'static str {
        match self {
            RiskFlag::Hypertension => "Hypertension detected",
            RiskFlag::Hypoxia => "Possible Hypoxia (low oxygen)",
            RiskFlag::Tachycardia => "Tachycardia (high heart rate)",
            RiskFlag::SleepDeprivation => "Sleep deprivation risk",
            RiskFlag::HighBloodSugar => "High blood sugar risk",
            RiskFlag::NoCriticalRisks => "No critical risks detected",
        }
    }
}

impl fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for RiskFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Latest reading together with the risk flags it triggered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub latest: VitalsReading,
    /// Never empty
    pub risks: Vec<RiskFlag>,
}

/// An SOS alert raised for a patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub patient_id: String,
    pub message: String,
}

/// Acknowledgement returned once an alert has been handed off
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertReceipt {
    pub alert_id: uuid::Uuid,
    pub patient_id: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_accepts_legacy_field_names() {
        let json = r#"{
            "patient_id": "p1",
            "hr": 72,
            "bp_sys": 120,
            "bp_dia": 80,
            "spo2": 98,
            "steps": 1000,
            "sugar": 95.5
        }"#;

        let reading: VitalsReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.heart_rate, 72);
        assert_eq!(reading.systolic_bp, 120);
        assert_eq!(reading.diastolic_bp, 80);
        assert_eq!(reading.blood_oxygen_pct, 98);
        assert_eq!(reading.sleep_hours, None);
        assert_eq!(reading.blood_sugar, Some(95.5));
    }

    #[test]
    fn test_measurement_skips_absent_optional_fields() {
        let reading = VitalsReading {
            patient_id: "p1".to_string(),
            heart_rate: 70,
            systolic_bp: 120,
            diastolic_bp: 80,
            blood_oxygen_pct: 98,
            steps: 0,
            sleep_hours: None,
            blood_sugar: Some(0.0),
        };

        assert_eq!(reading.measurement(VitalField::Steps), Some(Measurement::Int(0)));
        assert_eq!(reading.measurement(VitalField::SleepHours), None);
        assert_eq!(reading.measurement(VitalField::BloodSugar), Some(Measurement::Float(0.0)));
    }

    #[test]
    fn test_risk_flag_serializes_as_message() {
        let json = serde_json::to_string(&vec![RiskFlag::Hypertension, RiskFlag::NoCriticalRisks]).unwrap();
        assert_eq!(json, r#"["Hypertension detected","No critical risks detected"]"#);
    }

    #[test]
    fn test_trend_keys_use_field_names() {
        let mut trends = IndexMap::new();
        trends.insert(
            VitalField::BloodOxygenPct,
            FieldTrend {
                average: 97.5,
                min: Measurement::Int(97),
                max: Measurement::Int(98),
                last: Measurement::Int(98),
            },
        );
        let summary = TrendSummary { trends, records: 2 };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["records"], 2);
        assert_eq!(value["trends"]["blood_oxygen_pct"]["min"], 97);
        assert_eq!(value["trends"]["blood_oxygen_pct"]["average"], 97.5);
    }

    #[test]
    fn test_whole_average_serializes_as_float() {
        let trend = FieldTrend {
            average: 70.0,
            min: Measurement::Int(70),
            max: Measurement::Int(70),
            last: Measurement::Int(70),
        };

        let json = serde_json::to_string(&trend).unwrap();
        assert_eq!(json, r#"{"average":70.0,"min":70,"max":70,"last":70}"#);
    }
}
