use serde::Serialize;

/// Averages over the report window. Fields without data are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ReportAverages {
    pub weight_lbs: f64,
    pub calories: f64,
    pub activity: f64,
    pub map: f64,
    pub heart_rate: f64,
    pub sleep_hours: f64,
}

#[derive(Debug, Serialize)]
pub struct ReportDashboard {
    pub window_days: i64,
    pub hm_dates: Vec<String>,
    pub hm_weight_lbs: Vec<Option<f64>>,
    pub hm_calories: Vec<Option<f64>>,
    pub hm_activity: Vec<Option<f64>>,
    pub hm_map: Vec<Option<f64>>,
    pub hm_hr: Vec<Option<f64>>,
    pub sl_dates: Vec<String>,
    pub sl_duration: Vec<Option<f64>>,
    pub averages: ReportAverages,
    pub analysis: String,
}
