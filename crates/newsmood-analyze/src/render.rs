use newsmood_model::SentimentReport;

pub const CHART_TITLE: &str = "Sentiment Distribution in Articles";

/// Character cells in a full (100%) bar.
const BAR_WIDTH: usize = 40;

/// Render the label distribution as a horizontal bar chart, one row per
/// label present, in report order.
///
/// ```text
/// Sentiment Distribution in Articles
/// Positive  ████████████████████████░░░░░░░░░░░░░░░░  60.0% (3)
/// Neutral   ████████████████░░░░░░░░░░░░░░░░░░░░░░░░  40.0% (2)
/// ```
pub fn render_distribution(report: &SentimentReport) -> String {
    let mut lines = vec![CHART_TITLE.to_string()];
    for share in &report.shares {
        let filled = ((share.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        lines.push(format!(
            "{:<9} {}{} {:>5.1}% ({})",
            share.label.as_str(),
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            share.percentage,
            share.count,
        ));
    }
    lines.join("\n")
}

/// The one-line verdict printed after the chart.
pub fn overall_line(report: &SentimentReport) -> String {
    format!("The overall sentiment is {}.", report.overall)
}
