// src/ui/controller.rs
//
// Upload-and-render controller: one request/response cycle per submission

use std::ops::{Deref, DerefMut};

use crate::client::{interpret_reply, validate_upload, SelectedFile, Transport, UploadForm};
use crate::config::{ClientConfig, DetectionMethod};
use crate::detection::DetectionResult;
use crate::error::SubmitError;

use super::dom::View;
use super::render::render_result;

/// Busy state of the page.
///
/// Entering disables the submit control, shows the loader and hides the
/// previous result; dropping restores the idle controls. Every exit path of
/// a submission, unwinding included, restores exactly once.
pub struct BusyGuard<'a, V: View + ?Sized> {
    view: &'a mut V,
}

impl<'a, V: View + ?Sized> BusyGuard<'a, V> {
    pub fn enter(view: &'a mut V) -> Self {
        view.set_submit_enabled(false);
        view.set_loader_visible(true);
        view.set_button_text_visible(false);
        view.set_result_visible(false);
        Self { view }
    }
}

impl<V: View + ?Sized> Deref for BusyGuard<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.view
    }
}

impl<V: View + ?Sized> DerefMut for BusyGuard<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.view
    }
}

impl<V: View + ?Sized> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit_enabled(true);
        self.view.set_loader_visible(false);
        self.view.set_button_text_visible(true);
    }
}

/// Binds the upload form to the detection endpoint and the result panel
pub struct UploadController<V: View, T: Transport> {
    view: V,
    transport: T,
    config: ClientConfig,
    form: UploadForm,
}

impl<V: View, T: Transport> UploadController<V, T> {
    pub fn new(view: V, transport: T, config: ClientConfig) -> Self {
        Self {
            view,
            transport,
            config,
            form: UploadForm::default(),
        }
    }

    /// File input changed: show the file name, or the placeholder when cleared
    pub fn on_file_selected(&mut self, file: Option<SelectedFile>) {
        match &file {
            Some(f) => self.view.set_file_label(&f.file_name),
            None => self.view.set_file_label(&self.config.placeholder_label),
        }
        self.form.file = file;
    }

    /// Radio group changed
    pub fn select_method(&mut self, method: DetectionMethod) {
        self.form.method = method;
    }

    pub fn form(&self) -> &UploadForm {
        &self.form
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Form submitted.
    ///
    /// Local validation failures alert and return without touching the
    /// network. Otherwise the page goes busy for the duration of one request
    /// and the outcome is rendered or alerted before the page returns to idle.
    pub fn submit(&mut self) -> Result<DetectionResult, SubmitError> {
        if let Err(e) = validate_upload(&self.config, self.form.file.as_ref()) {
            log::warn!("Upload rejected locally: {}", e);
            self.view.alert(&e.to_string());
            return Err(e);
        }

        let mut busy = BusyGuard::enter(&mut self.view);

        let outcome = self
            .transport
            .post_form(&self.form)
            .map_err(SubmitError::from)
            .and_then(|reply| interpret_reply(&reply));

        match &outcome {
            Ok(result) => {
                log::info!(
                    "{}: {} (score {:.4}, confidence {:.4}, method {})",
                    self.form.file.as_ref().map(|f| f.file_name.as_str()).unwrap_or_default(),
                    result.verdict.label(),
                    result.score,
                    result.confidence,
                    result.method_tag
                );
                render_result(&mut *busy, result);
            }
            Err(e) => {
                log::warn!("Detection failed: {}", e);
                busy.alert(&e.to_string());
            }
        }

        outcome
    }
}
