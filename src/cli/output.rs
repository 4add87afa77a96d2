//! Output formatting for CLI results

use std::path::Path;
use std::time::Duration;

use colorful::Colorful;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::DetectionMethod;
use crate::detection::{DetectionResult, MethodDetails};
use crate::export::ExportSummary;
use crate::ui::{PageState, ResultDetails, View};

const BAR_WIDTH: usize = 30;

/// Terminal rendition of the page: spinner as loader, stderr for alerts
pub struct TerminalView {
    spinner: Option<ProgressBar>,
    icon: String,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            spinner: None,
            icon: String::new(),
        }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for TerminalView {
    fn set_file_label(&mut self, text: &str) {
        println!("Selected: {}", text.cyan());
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        log::trace!("submit enabled: {}", enabled);
    }

    fn set_loader_visible(&mut self, visible: bool) {
        if visible {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message("Analyzing...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            self.spinner = Some(spinner);
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn set_button_text_visible(&mut self, _visible: bool) {}

    fn set_result_visible(&mut self, visible: bool) {
        if visible {
            println!();
        }
    }

    fn set_result_icon(&mut self, icon: &str) {
        self.icon = icon.to_string();
    }

    fn set_result_text(&mut self, text: &str, class: &str) {
        let label = if class.contains("result-fake") {
            text.red().bold()
        } else if class.contains("result-real") {
            text.green().bold()
        } else {
            text.yellow().bold()
        };
        println!("  {} {}", self.icon, label);
    }

    fn set_result_details(&mut self, details: &ResultDetails) {
        println!("  Detection Score: {}", details.score_text);
        println!("  {}", score_bar(details));
        for row in &details.rows {
            println!("  {} {}", row.label, row.value);
        }
    }

    fn scroll_result_into_view(&mut self) {}

    fn alert(&mut self, message: &str) {
        if let Some(spinner) = &self.spinner {
            spinner.suspend(|| eprintln!("{}", message.red()));
        } else {
            eprintln!("{}", message.red());
        }
    }
}

fn score_bar(details: &ResultDetails) -> String {
    let pct = details
        .bar_width
        .trim_end_matches('%')
        .parse::<f64>()
        .unwrap_or(0.0)
        .clamp(0.0, 100.0);
    let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        details.bar_label
    )
}

/// Extra lines for verbose output: hybrid weights, rule feature analysis
pub fn format_method_details(result: &DetectionResult) -> String {
    let mut output = String::new();

    match &result.details {
        MethodDetails::Hybrid(scores) => {
            if let Some(weights) = &scores.weights {
                output.push_str(&format!(
                    "  Weights: rule {} / ml {}\n",
                    weights.rule.map(|w| format!("{:.2}", w)).unwrap_or_else(|| "-".to_string()),
                    weights.ml.map(|w| format!("{:.2}", w)).unwrap_or_else(|| "-".to_string()),
                ));
            }
        }
        MethodDetails::Rule(features) if !features.is_empty() => {
            output.push_str("  Feature analysis:\n");
            for (name, value) in features {
                output.push_str(&format!("    {}: {}\n", name, value));
            }
        }
        _ => {}
    }

    output
}

/// Format a result as JSON
pub fn format_json(file_name: &str, result: &DetectionResult) -> String {
    let value = serde_json::json!({
        "file": file_name,
        "verdict": result.verdict,
        "label": result.verdict.label(),
        "score": result.score,
        "confidence": result.confidence,
        "method": result.method_tag,
        "details": result.details,
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

/// Print available methods
pub fn print_methods() {
    println!("Available detection methods:\n");
    for method in DetectionMethod::all() {
        println!("  {} - {}", method.form_value(), method.description());
    }
}

/// Print the outcome of a batch export
/// Alerts raised on the page, one per line
pub fn format_alerts(page: &PageState) -> String {
    page.alerts.join("\n")
}

pub fn print_export_summary(summary: &ExportSummary, output: &Path) {
    println!("\nSummary:");
    println!(
        "  {} files processed in {:.1}s",
        summary.records.len(),
        summary.elapsed_secs()
    );
    if let Some(average) = summary.average_confidence() {
        println!("  Average confidence: {:.4}", average);
    }
    if summary.fake_count() > 0 {
        println!("  {}", format!("✗ {} fake", summary.fake_count()).red());
    }
    if summary.real_count() > 0 {
        println!("  {}", format!("✓ {} real", summary.real_count()).green());
    }
    if !summary.failures.is_empty() {
        println!("  {}", format!("⚠ {} failed", summary.failures.len()).yellow());
        for (file, message) in &summary.failures {
            println!("    • {}: {}", file, message);
        }
    }
    println!(
        "  Predictions written to {} ({})",
        output.display(),
        summary.finished_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
}
