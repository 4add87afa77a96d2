// src/ui/dom.rs
//
// The page contract: elements the controller drives and a state mirror of them

use super::render::ResultDetails;

/// Element identifiers the page template must provide
pub mod ids {
    pub const FORM: &str = "uploadForm";
    pub const FILE_INPUT: &str = "audioFile";
    pub const FILE_LABEL: &str = "fileLabel";
    pub const SUBMIT: &str = "detectBtn";
    /// Class of the text span inside the submit button
    pub const SUBMIT_TEXT_CLASS: &str = "btn-text";
    pub const LOADER: &str = "loader";
    pub const RESULT_SECTION: &str = "resultSection";
    pub const RESULT_CARD: &str = "resultCard";
    pub const RESULT_ICON: &str = "resultIcon";
    pub const RESULT_TEXT: &str = "resultText";
    pub const RESULT_DETAILS: &str = "resultDetails";
}

/// Mutations the controller performs on the page.
///
/// Each method maps onto one element of [`ids`].
pub trait View {
    fn set_file_label(&mut self, text: &str);
    fn set_submit_enabled(&mut self, enabled: bool);
    fn set_loader_visible(&mut self, visible: bool);
    fn set_button_text_visible(&mut self, visible: bool);
    fn set_result_visible(&mut self, visible: bool);
    fn set_result_icon(&mut self, icon: &str);
    fn set_result_text(&mut self, text: &str, class: &str);
    fn set_result_details(&mut self, details: &ResultDetails);
    /// Smooth scroll, nearest edge; no-op when already on screen
    fn scroll_result_into_view(&mut self);
    /// Blocking notification
    fn alert(&mut self, message: &str);
}

/// In-memory mirror of the page elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub file_label: String,
    pub submit_disabled: bool,
    pub loader_visible: bool,
    pub button_text_visible: bool,
    pub result_visible: bool,
    pub result_icon: String,
    pub result_text: String,
    pub result_text_class: String,
    pub result_details: Option<ResultDetails>,
    pub alerts: Vec<String>,
    pub scroll_requests: usize,
}

impl PageState {
    pub fn new(placeholder: &str) -> Self {
        Self {
            file_label: placeholder.to_string(),
            submit_disabled: false,
            loader_visible: false,
            button_text_visible: true,
            result_visible: false,
            result_icon: String::new(),
            result_text: String::new(),
            result_text_class: "result-text".to_string(),
            result_details: None,
            alerts: Vec::new(),
            scroll_requests: 0,
        }
    }

    /// True when no request is in flight
    pub fn is_idle(&self) -> bool {
        !self.submit_disabled && !self.loader_visible && self.button_text_visible
    }

    /// Markup of the result section as it currently stands
    pub fn result_section_html(&self) -> String {
        let display = if self.result_visible { "block" } else { "none" };
        let details = self
            .result_details
            .as_ref()
            .map(|d| d.to_html())
            .unwrap_or_default();
        format!(
            "<section id=\"{}\" style=\"display: {}\">\n<div id=\"{}\" class=\"result-card\">\n<div id=\"{}\" class=\"result-icon\">{}</div>\n<div id=\"{}\" class=\"{}\">{}</div>\n<div id=\"{}\" class=\"result-details\">\n{}</div>\n</div>\n</section>\n",
            ids::RESULT_SECTION,
            display,
            ids::RESULT_CARD,
            ids::RESULT_ICON,
            self.result_icon,
            ids::RESULT_TEXT,
            self.result_text_class,
            self.result_text,
            ids::RESULT_DETAILS,
            details
        )
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PLACEHOLDER)
    }
}

impl View for PageState {
    fn set_file_label(&mut self, text: &str) {
        self.file_label = text.to_string();
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_disabled = !enabled;
    }

    fn set_loader_visible(&mut self, visible: bool) {
        self.loader_visible = visible;
    }

    fn set_button_text_visible(&mut self, visible: bool) {
        self.button_text_visible = visible;
    }

    fn set_result_visible(&mut self, visible: bool) {
        self.result_visible = visible;
    }

    fn set_result_icon(&mut self, icon: &str) {
        self.result_icon = icon.to_string();
    }

    fn set_result_text(&mut self, text: &str, class: &str) {
        self.result_text = text.to_string();
        self.result_text_class = class.to_string();
    }

    fn set_result_details(&mut self, details: &ResultDetails) {
        self.result_details = Some(details.clone());
    }

    fn scroll_result_into_view(&mut self) {
        self.scroll_requests += 1;
    }

    fn alert(&mut self, message: &str) {
        log::debug!("alert: {}", message);
        self.alerts.push(message.to_string());
    }
}
