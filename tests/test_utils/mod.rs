// tests/test_utils/mod.rs
//
// Shared fakes: scripted transport, counting view, scratch directories

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::path::PathBuf;

use uuid::Uuid;
use voicecheckr::ui::{PageState, ResultDetails, View};
use voicecheckr::{HttpReply, Transport, TransportError, UploadForm};

/// Transport answering from a closure and counting requests
pub struct ScriptedTransport<F> {
    respond: F,
    pub calls: Cell<usize>,
    pub last_method: RefCell<Option<String>>,
    pub last_file: RefCell<Option<String>>,
}

impl<F> ScriptedTransport<F>
where
    F: Fn(&UploadForm) -> Result<HttpReply, TransportError>,
{
    pub fn new(respond: F) -> Self {
        Self {
            respond,
            calls: Cell::new(0),
            last_method: RefCell::new(None),
            last_file: RefCell::new(None),
        }
    }
}

impl<F> Transport for ScriptedTransport<F>
where
    F: Fn(&UploadForm) -> Result<HttpReply, TransportError>,
{
    fn post_form(&self, form: &UploadForm) -> Result<HttpReply, TransportError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_method.borrow_mut() = Some(form.method.form_value().to_string());
        *self.last_file.borrow_mut() = form.file.as_ref().map(|f| f.file_name.clone());
        (self.respond)(form)
    }
}

/// Always answers with the given status and body
pub fn replying(
    status: u16,
    body: &'static str,
) -> ScriptedTransport<impl Fn(&UploadForm) -> Result<HttpReply, TransportError>> {
    ScriptedTransport::new(move |_: &UploadForm| Ok(HttpReply::new(status, body)))
}

/// Page mirror that also counts busy/idle transitions
#[derive(Default)]
pub struct CountingView {
    pub page: PageState,
    pub disables: usize,
    pub enables: usize,
    pub loader_hides: usize,
    pub alerts_while_busy: usize,
}

impl View for CountingView {
    fn set_file_label(&mut self, text: &str) {
        self.page.set_file_label(text);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        if enabled {
            self.enables += 1;
        } else {
            self.disables += 1;
        }
        self.page.set_submit_enabled(enabled);
    }

    fn set_loader_visible(&mut self, visible: bool) {
        if !visible {
            self.loader_hides += 1;
        }
        self.page.set_loader_visible(visible);
    }

    fn set_button_text_visible(&mut self, visible: bool) {
        self.page.set_button_text_visible(visible);
    }

    fn set_result_visible(&mut self, visible: bool) {
        self.page.set_result_visible(visible);
    }

    fn set_result_icon(&mut self, icon: &str) {
        self.page.set_result_icon(icon);
    }

    fn set_result_text(&mut self, text: &str, class: &str) {
        self.page.set_result_text(text, class);
    }

    fn set_result_details(&mut self, details: &ResultDetails) {
        self.page.set_result_details(details);
    }

    fn scroll_result_into_view(&mut self) {
        self.page.scroll_result_into_view();
    }

    fn alert(&mut self, message: &str) {
        if self.page.submit_disabled {
            self.alerts_while_busy += 1;
        }
        self.page.alert(message);
    }
}

/// Fresh directory under the system temp dir
pub fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("voicecheckr-test-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}
