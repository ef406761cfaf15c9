/// Derived summary metrics, recomputed on every read and never persisted.
/// Pure function of (entries, base overtime correction, reference month);
/// see `core::summary::compute_summary`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SummaryMetrics {
    pub total_overtime: f64,
    pub current_month_overtime: f64,
    pub total_work_hours: f64,
    pub vacation_days: usize,
    pub sick_days: usize,
    pub on_call_days: usize,
}
