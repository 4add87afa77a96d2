// src/client/transport.rs
//
// Seam between the upload logic and the network

use super::form::UploadForm;
use crate::error::TransportError;

/// Status and raw body of a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends an upload form to the detection endpoint.
///
/// Implementations issue exactly one request per call and never retry.
pub trait Transport {
    fn post_form(&self, form: &UploadForm) -> Result<HttpReply, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_form(&self, form: &UploadForm) -> Result<HttpReply, TransportError> {
        (**self).post_form(form)
    }
}
