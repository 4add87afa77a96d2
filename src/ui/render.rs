// src/ui/render.rs
//
// Result rendering: verdict triple, score bar and per-method rows

use crate::detection::{DetectionResult, MethodDetails};

use super::dom::View;

/// One label/value row of the details panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl DetailRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Everything shown in the details container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultDetails {
    /// Detection score, two decimals, with `%`
    pub score_text: String,
    /// Score bar fill width, with `%`
    pub bar_width: String,
    /// Label inside the score bar, one decimal, with `%`
    pub bar_label: String,
    /// Confidence, per-method rows, then the method row
    pub rows: Vec<DetailRow>,
}

impl ResultDetails {
    pub fn from_result(result: &DetectionResult) -> Self {
        let score = percent(result.score);
        let mut rows = vec![DetailRow::new("Confidence:", format_percent(result.confidence))];

        match &result.details {
            MethodDetails::Hybrid(scores) => {
                rows.push(DetailRow::new("Rule-Based Score:", optional_percent(scores.rule_score)));
                rows.push(DetailRow::new("ML-Based Score:", optional_percent(scores.ml_score)));
            }
            MethodDetails::Ml(scores) => {
                rows.push(DetailRow::new("Logistic Regression:", optional_percent(scores.lr_score)));
                rows.push(DetailRow::new("SVM Score:", optional_percent(scores.svm_score)));
            }
            MethodDetails::Rule(_) | MethodDetails::Unlisted => {}
        }

        rows.push(DetailRow::new("Method Used:", result.method_tag.to_uppercase()));

        Self {
            score_text: format!("{}%", to_fixed(score, 2)),
            bar_width: format!("{}%", plain_number(score)),
            bar_label: format!("{}%", to_fixed(score, 1)),
            rows,
        }
    }

    /// Row by label, without the trailing colon
    pub fn row(&self, label: &str) -> Option<&DetailRow> {
        self.rows
            .iter()
            .find(|row| row.label.trim_end_matches(':') == label)
    }

    /// Markup for the details container
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str(&detail_item_html("Detection Score:", &self.score_text));
        html.push_str(&format!(
            "<div class=\"score-bar\">\n    <div class=\"score-fill\" style=\"width: {}\">{}</div>\n</div>\n",
            self.bar_width, self.bar_label
        ));
        for row in &self.rows {
            html.push_str(&detail_item_html(row.label, &row.value));
        }
        html
    }
}

fn detail_item_html(label: &str, value: &str) -> String {
    format!(
        "<div class=\"detail-item\">\n    <span class=\"detail-label\">{}</span>\n    <span class=\"detail-value\">{}</span>\n</div>\n",
        escape_html(label),
        escape_html(value)
    )
}

/// Render a result into the view and bring it on screen
pub fn render_result<V: View + ?Sized>(view: &mut V, result: &DetectionResult) {
    view.set_result_visible(true);

    let verdict = result.verdict;
    view.set_result_icon(verdict.icon());
    view.set_result_text(verdict.label(), verdict.css_class());

    view.set_result_details(&ResultDetails::from_result(result));
    view.scroll_result_into_view();
}

/// Fraction in [0,1] as a percentage, with float noise from the
/// multiplication removed (0.8765 -> 87.65 rather than 87.64999999999999)
pub fn percent(fraction: f64) -> f64 {
    let pct = fraction * 100.0;
    if !pct.is_finite() {
        return pct;
    }
    (pct * 1e9).round() / 1e9
}

/// Fixed-point text with half-away-from-zero rounding
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", decimals, rounded)
}

/// Fraction shown as a two-decimal percentage (`0.6` -> `60.00%`)
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", to_fixed(percent(fraction), 2))
}

fn optional_percent(fraction: Option<f64>) -> String {
    match fraction {
        Some(value) => format_percent(value),
        None => "N/A".to_string(),
    }
}

fn plain_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{}", value)
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
