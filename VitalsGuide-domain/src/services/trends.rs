use std::cmp::Ordering;

use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::entities::vitals::{FieldTrend, Measurement, TrendSummary, VitalField, VitalsReading};

/// Summarize every numeric field across a patient's readings
///
/// Absent optional values are skipped rather than counted as zero, and a
/// field with no present value is left out of the result entirely. Callers
/// resolve the empty-record case (NotFound) before getting here.
pub fn summarize(readings: &[VitalsReading]) -> TrendSummary {
    let trends = VitalField::ALL
        .iter()
        .filter_map(|&field| {
            let values: Vec<Measurement> = readings
                .iter()
                .filter_map(|reading| reading.measurement(field))
                .collect();
            summarize_field(&values).map(|trend| (field, trend))
        })
        .collect::<IndexMap<_, _>>();

    TrendSummary {
        trends,
        records: readings.len(),
    }
}

/// Statistics over the present values of one field, `None` if there are none
pub fn summarize_field(values: &[Measurement]) -> Option<FieldTrend> {
    let last = *values.last()?;
    let min = *values.iter().min_by(|a, b| compare(a, b))?;
    let max = *values.iter().max_by(|a, b| compare(a, b))?;

    Some(FieldTrend {
        average: round_half_even(mean(values), 2),
        min,
        max,
        last,
    })
}

/// Mean of the values, summed in decimal so long records do not accumulate float error
fn mean(values: &[Measurement]) -> f64 {
    let exact: Option<f64> = values
        .iter()
        .try_fold(Decimal::ZERO, |sum, value| {
            let value = match *value {
                Measurement::Int(i) => Decimal::from(i),
                Measurement::Float(f) => Decimal::from_f64_retain(f)?,
            };
            sum.checked_add(value)
        })
        .and_then(|sum| sum.checked_div(Decimal::from(values.len())))
        .and_then(|mean| mean.to_string().parse().ok());

    exact.unwrap_or_else(|| values.iter().map(Measurement::as_f64).sum::<f64>() / values.len() as f64)
}

/// Round to `decimals` places, ties going to the even neighbour
///
/// Works on the exact binary value of the double: 0.025 is stored slightly
/// above the tie and so rounds up to 0.03. Values outside the decimal range
/// are returned unchanged.
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven))
        // parsing the decimal text gives the nearest double to the rounded value
        .and_then(|d| d.to_string().parse().ok())
        .unwrap_or(value)
}

fn compare(a: &Measurement, b: &Measurement) -> Ordering {
    match (a, b) {
        (Measurement::Int(x), Measurement::Int(y)) => x.cmp(y),
        _ => a.as_f64().partial_cmp(&b.as_f64()).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(heart_rate: i64, sleep_hours: Option<f64>, blood_sugar: Option<f64>) -> VitalsReading {
        VitalsReading {
            patient_id: "p1".to_string(),
            heart_rate,
            systolic_bp: 120,
            diastolic_bp: 80,
            blood_oxygen_pct: 98,
            steps: 5000,
            sleep_hours,
            blood_sugar,
        }
    }

    #[test]
    fn test_summary_counts_every_reading() {
        let readings = vec![reading(60, None, None), reading(80, None, None)];
        let summary = summarize(&readings);

        assert_eq!(summary.records, 2);
        let hr = &summary.trends[&VitalField::HeartRate];
        assert_eq!(hr.average, 70.0);
        assert_eq!(hr.min, Measurement::Int(60));
        assert_eq!(hr.max, Measurement::Int(80));
        assert_eq!(hr.last, Measurement::Int(80));
    }

    #[test]
    fn test_absent_values_are_skipped_and_last_is_last_present() {
        let readings = vec![
            reading(70, Some(6.0), None),
            reading(72, None, None),
            reading(74, Some(8.0), None),
            reading(76, None, None),
        ];
        let summary = summarize(&readings);

        let sleep = &summary.trends[&VitalField::SleepHours];
        assert_eq!(sleep.average, 7.0);
        assert_eq!(sleep.min, Measurement::Float(6.0));
        assert_eq!(sleep.max, Measurement::Float(8.0));
        assert_eq!(sleep.last, Measurement::Float(8.0));
        assert_eq!(summary.records, 4);
    }

    #[test]
    fn test_field_present_in_first_and_third_of_three() {
        let readings = vec![
            reading(70, None, Some(100.0)),
            reading(72, None, None),
            reading(74, None, Some(130.0)),
        ];
        let summary = summarize(&readings);

        let sugar = &summary.trends[&VitalField::BloodSugar];
        assert_eq!(sugar.last, Measurement::Float(130.0));
        assert_eq!(sugar.average, 115.0);
        assert_eq!(sugar.min, Measurement::Float(100.0));
        assert_eq!(sugar.max, Measurement::Float(130.0));
    }

    #[test]
    fn test_field_with_no_values_is_omitted() {
        let readings = vec![reading(70, None, None), reading(75, None, None)];
        let summary = summarize(&readings);

        assert!(!summary.trends.contains_key(&VitalField::SleepHours));
        assert!(!summary.trends.contains_key(&VitalField::BloodSugar));
        assert_eq!(summary.trends.len(), 5);
    }

    #[test]
    fn test_trends_follow_field_order() {
        let readings = vec![reading(70, Some(7.0), Some(90.0))];
        let summary = summarize(&readings);

        let keys: Vec<VitalField> = summary.trends.keys().copied().collect();
        assert_eq!(keys, VitalField::ALL.to_vec());
    }

    #[test]
    fn test_zero_is_a_present_value() {
        let readings = vec![reading(70, Some(0.0), None), reading(70, Some(4.0), None)];
        let summary = summarize(&readings);

        let sleep = &summary.trends[&VitalField::SleepHours];
        assert_eq!(sleep.min, Measurement::Float(0.0));
        assert_eq!(sleep.average, 2.0);
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        let readings = vec![reading(70, None, None), reading(71, None, None), reading(71, None, None)];
        let summary = summarize(&readings);

        assert_eq!(summary.trends[&VitalField::HeartRate].average, 70.67);
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(0.125, 2), 0.12);
        assert_eq!(round_half_even(0.375, 2), 0.38);
        assert_eq!(round_half_even(2.5, 0), 2.0);
        assert_eq!(round_half_even(3.5, 0), 4.0);
        assert_eq!(round_half_even(-0.125, 2), -0.12);
    }

    #[test]
    fn test_round_uses_exact_binary_value() {
        // 0.025 is stored just above its tie, 0.015 and 2.675 just below theirs
        assert_eq!(round_half_even(0.025, 2), 0.03);
        assert_eq!(round_half_even(0.015, 2), 0.01);
        assert_eq!(round_half_even(2.675, 2), 2.67);
    }

    #[test]
    fn test_average_of_mostly_zero_sleep_rounds_up() {
        let mut readings: Vec<VitalsReading> = (0..39).map(|_| reading(70, Some(0.0), None)).collect();
        readings.push(reading(70, Some(1.0), None));

        let summary = summarize(&readings);
        let sleep = &summary.trends[&VitalField::SleepHours];
        assert_eq!(sleep.average, 0.03);
        assert_eq!(sleep.last, Measurement::Float(1.0));
    }

    #[test]
    fn test_summarize_field_empty() {
        assert!(summarize_field(&[]).is_none());
    }
}
