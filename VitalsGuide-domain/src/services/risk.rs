use crate::entities::vitals::{RiskFlag, VitalsReading};

pub const SYSTOLIC_LIMIT: i64 = 140;
pub const DIASTOLIC_LIMIT: i64 = 90;
pub const MIN_BLOOD_OXYGEN_PCT: i64 = 94;
pub const MAX_HEART_RATE: i64 = 100;
pub const MIN_SLEEP_HOURS: f64 = 6.0;
pub const MAX_BLOOD_SUGAR: f64 = 140.0;

/// Apply the fixed threshold rules to a reading
///
/// Every matching rule contributes a flag, in rule order. When nothing
/// matches the result is the single `NoCriticalRisks` entry, never an
/// empty list. Unmeasured optional fields never trigger a rule; a measured
/// zero is evaluated like any other value.
pub fn evaluate(latest: &VitalsReading) -> Vec<RiskFlag> {
    let mut risks = Vec::new();

    if latest.systolic_bp > SYSTOLIC_LIMIT || latest.diastolic_bp > DIASTOLIC_LIMIT {
        risks.push(RiskFlag::Hypertension);
    }
    if latest.blood_oxygen_pct < MIN_BLOOD_OXYGEN_PCT {
        risks.push(RiskFlag::Hypoxia);
    }
    if latest.heart_rate > MAX_HEART_RATE {
        risks.push(RiskFlag::Tachycardia);
    }
    if latest.sleep_hours.is_some_and(|hours| hours < MIN_SLEEP_HOURS) {
        risks.push(RiskFlag::SleepDeprivation);
    }
    if latest.blood_sugar.is_some_and(|sugar| sugar > MAX_BLOOD_SUGAR) {
        risks.push(RiskFlag::HighBloodSugar);
    }

    if risks.is_empty() {
        risks.push(RiskFlag::NoCriticalRisks);
    }
    risks
}
