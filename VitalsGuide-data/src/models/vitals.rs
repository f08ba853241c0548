/// Storage model for a single vitals reading
///
/// Records carry no timestamp; their position in a patient's sequence is
/// the only ordering the store knows about.
#[derive(Debug, Clone, PartialEq)]
pub struct VitalsRecord {
    /// Patient the reading belongs to
    pub patient_id: String,

    /// Heart rate in beats per minute
    pub heart_rate: i64,

    /// Systolic blood pressure
    pub systolic_bp: i64,

    /// Diastolic blood pressure
    pub diastolic_bp: i64,

    /// Blood oxygen saturation percentage
    pub blood_oxygen_pct: i64,

    /// Step count
    pub steps: i64,

    /// Hours slept, if measured
    pub sleep_hours: Option<f64>,

    /// Blood sugar, if measured
    pub blood_sugar: Option<f64>,
}
