//! Summary figures for the monitoring dashboard placeholder.
//!
//! The dashboard visualization is not wired to live data; these values are
//! fixed so the page has realistic content around the chat widget.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardSummary {
    pub today_cases: u32,
    pub critical_cases: u32,
    pub antibiotic_usage: String,
}

impl Default for DashboardSummary {
    fn default() -> Self {
        Self { today_cases: 120, critical_cases: 15, antibiotic_usage: "세프트리악손 (75%)".to_owned() }
    }
}

impl DashboardSummary {
    /// Label/value pairs in display order.
    pub fn cards(&self) -> Vec<(&'static str, String)> {
        vec![
            ("오늘 발생 건수", self.today_cases.to_string()),
            ("중증 환자 수", self.critical_cases.to_string()),
            ("주요 항생제 사용", self.antibiotic_usage.clone()),
        ]
    }
}
