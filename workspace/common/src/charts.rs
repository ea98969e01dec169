//! Series behind the four dashboard charts.
//!
//! Only the churn distribution and the "Medium" bar of the monthly charge
//! chart come from the live prediction. The tenure trend, the "Low"/"High"
//! reference bars and the contract breakdown are fixed reference figures and
//! are marked as such so the UI can label them.

use crate::prediction::PredictionResult;

/// Churn rate (%) per tenure bucket, reference figures.
pub const TENURE_BUCKETS: [&str; 5] = ["0-12", "12-24", "24-48", "48-60", "60+"];
pub const TENURE_CHURN_RATES: [f64; 5] = [20.0, 35.0, 50.0, 45.0, 30.0];

/// Reference churn probabilities for low and high monthly charges.
pub const LOW_CHARGE_PROBABILITY: f64 = 25.0;
pub const HIGH_CHARGE_PROBABILITY: f64 = 75.0;

/// Churn rate (%) per contract type, reference figures.
pub const CONTRACT_TYPES: [&str; 3] = ["Month-to-Month", "One Year", "Two Year"];
pub const CONTRACT_CHURN_RATES: [f64; 3] = [60.0, 30.0, 10.0];

/// Identifies a dashboard chart panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    ChurnDistribution,
    TenureTrend,
    MonthlyCharge,
    ContractType,
}

impl ChartId {
    pub const ALL: [ChartId; 4] = [
        ChartId::ChurnDistribution,
        ChartId::TenureTrend,
        ChartId::MonthlyCharge,
        ChartId::ContractType,
    ];

    /// Id of the element Plotly draws into.
    pub fn dom_id(&self) -> &'static str {
        match self {
            ChartId::ChurnDistribution => "chart-churn-distribution",
            ChartId::TenureTrend => "chart-tenure-trend",
            ChartId::MonthlyCharge => "chart-monthly-charge",
            ChartId::ContractType => "chart-contract-type",
        }
    }

    /// Next enlarged panel after `clicked` is clicked. Clicking the enlarged
    /// panel collapses it; any other click moves the enlargement.
    pub fn toggle(current: Option<ChartId>, clicked: ChartId) -> Option<ChartId> {
        if current == Some(clicked) { None } else { Some(clicked) }
    }

    /// Series drawn in this panel for the given prediction.
    pub fn series(&self, result: &PredictionResult) -> ChartSeries {
        match self {
            ChartId::ChurnDistribution => churn_distribution(result),
            ChartId::TenureTrend => tenure_trend(),
            ChartId::MonthlyCharge => monthly_charge_comparison(result),
            ChartId::ContractType => contract_churn_rates(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Line,
    Bar,
}

/// Where a chart's numbers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Derived entirely from the live prediction
    Live,
    /// Live value placed among reference points
    Mixed,
    /// Fixed reference figures
    Illustrative,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub id: ChartId,
    pub title: &'static str,
    pub kind: ChartKind,
    pub source: DataSource,
    /// Legend name of the data set, if the chart shows one
    pub series_label: Option<&'static str>,
    pub labels: Vec<&'static str>,
    pub values: Vec<f64>,
    /// One color per label; line charts carry a single stroke color
    pub colors: Vec<&'static str>,
}

/// Probability to chart: a missing value counts as 0 and the result is kept
/// inside 0..=100.
pub fn chart_probability(result: &PredictionResult) -> f64 {
    result
        .churn_probability
        .filter(|p| p.is_finite())
        .unwrap_or(0.0)
        .clamp(0.0, 100.0)
}

pub fn churn_distribution(result: &PredictionResult) -> ChartSeries {
    let probability = chart_probability(result);
    ChartSeries {
        id: ChartId::ChurnDistribution,
        title: "Churn vs. No Churn Distribution",
        kind: ChartKind::Pie,
        source: DataSource::Live,
        series_label: None,
        labels: vec!["No Churn", "Churn"],
        values: vec![100.0 - probability, probability],
        colors: vec!["#4caf50", "#f44336"],
    }
}

pub fn tenure_trend() -> ChartSeries {
    ChartSeries {
        id: ChartId::TenureTrend,
        title: "Churn Over Tenure",
        kind: ChartKind::Line,
        source: DataSource::Illustrative,
        series_label: Some("Churn Rate (%)"),
        labels: TENURE_BUCKETS.to_vec(),
        values: TENURE_CHURN_RATES.to_vec(),
        colors: vec!["rgba(255, 99, 132, 1)"],
    }
}

pub fn monthly_charge_comparison(result: &PredictionResult) -> ChartSeries {
    ChartSeries {
        id: ChartId::MonthlyCharge,
        title: "Monthly Charge vs. Churn Probability",
        kind: ChartKind::Bar,
        source: DataSource::Mixed,
        series_label: Some("Churn Probability (%)"),
        labels: vec!["Low", "Medium", "High"],
        values: vec![
            LOW_CHARGE_PROBABILITY,
            chart_probability(result),
            HIGH_CHARGE_PROBABILITY,
        ],
        colors: vec!["#ffeb3b", "#ff9800", "#f44336"],
    }
}

pub fn contract_churn_rates() -> ChartSeries {
    ChartSeries {
        id: ChartId::ContractType,
        title: "Contract Type vs. Churn Rate",
        kind: ChartKind::Bar,
        source: DataSource::Illustrative,
        series_label: Some("Churn Rate (%)"),
        labels: CONTRACT_TYPES.to_vec(),
        values: CONTRACT_CHURN_RATES.to_vec(),
        colors: vec!["#f44336", "#ff9800", "#4caf50"],
    }
}

/// All four dashboard charts, in display order.
pub fn dashboard_charts(result: &PredictionResult) -> Vec<ChartSeries> {
    ChartId::ALL.iter().map(|id| id.series(result)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(probability: Option<f64>) -> PredictionResult {
        PredictionResult { churn_prediction: 1, churn_probability: probability }
    }

    #[test]
    fn test_distribution_and_comparison_follow_probability() {
        let live = result(Some(73.0));

        let pie = churn_distribution(&live);
        assert_eq!(pie.labels, vec!["No Churn", "Churn"]);
        assert_eq!(pie.values, vec![27.0, 73.0]);

        let bars = monthly_charge_comparison(&live);
        assert_eq!(bars.labels, vec!["Low", "Medium", "High"]);
        assert_eq!(bars.values, vec![25.0, 73.0, 75.0]);
    }

    #[test]
    fn test_static_charts_ignore_the_result() {
        let a = dashboard_charts(&result(Some(10.0)));
        let b = dashboard_charts(&result(Some(90.0)));

        assert_eq!(a[1], b[1]);
        assert_eq!(a[3], b[3]);
        assert_eq!(a[1].values, vec![20.0, 35.0, 50.0, 45.0, 30.0]);
        assert_eq!(a[3].values, vec![60.0, 30.0, 10.0]);
        assert_eq!(a[1].source, DataSource::Illustrative);
        assert_eq!(a[3].source, DataSource::Illustrative);
    }

    #[test]
    fn test_dashboard_order() {
        let ids: Vec<ChartId> = dashboard_charts(&result(Some(50.0)))
            .iter()
            .map(|series| series.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                ChartId::ChurnDistribution,
                ChartId::TenureTrend,
                ChartId::MonthlyCharge,
                ChartId::ContractType,
            ]
        );
    }

    #[test]
    fn test_each_label_has_a_value() {
        for series in dashboard_charts(&result(Some(42.5))) {
            assert_eq!(series.labels.len(), series.values.len(), "{}", series.title);
        }
    }

    #[test]
    fn test_missing_or_out_of_range_probability() {
        assert_eq!(churn_distribution(&result(None)).values, vec![100.0, 0.0]);
        assert_eq!(chart_probability(&result(Some(140.0))), 100.0);
        assert_eq!(chart_probability(&result(Some(-3.0))), 0.0);
        assert_eq!(chart_probability(&result(Some(f64::NAN))), 0.0);
    }

    #[test]
    fn test_toggle_same_panel_collapses() {
        let enlarged = ChartId::toggle(None, ChartId::TenureTrend);
        assert_eq!(enlarged, Some(ChartId::TenureTrend));
        assert_eq!(ChartId::toggle(enlarged, ChartId::TenureTrend), None);
    }

    #[test]
    fn test_toggle_other_panel_moves_enlargement() {
        let enlarged = ChartId::toggle(None, ChartId::ChurnDistribution);
        let moved = ChartId::toggle(enlarged, ChartId::ContractType);
        assert_eq!(moved, Some(ChartId::ContractType));
    }

    #[test]
    fn test_dom_ids_are_unique() {
        let mut ids: Vec<&str> = ChartId::ALL.iter().map(ChartId::dom_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}
