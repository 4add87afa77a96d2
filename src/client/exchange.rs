// src/client/exchange.rs
//
// One request/response exchange without any UI attached

use super::form::{SelectedFile, UploadForm};
use super::transport::{HttpReply, Transport};
use crate::config::ClientConfig;
use crate::detection::{DetectionResult, ErrorBody};
use crate::error::SubmitError;

/// Local gate run before anything touches the network
pub fn validate_upload<'a>(
    config: &ClientConfig,
    file: Option<&'a SelectedFile>,
) -> Result<&'a SelectedFile, SubmitError> {
    let file = file.ok_or(SubmitError::NoFile)?;

    if !config.allowed_extensions.is_empty() && !config.is_extension_allowed(&file.file_name) {
        return Err(SubmitError::UnsupportedType {
            file_name: file.file_name.clone(),
            allowed: config.allowed_extensions.join(", "),
        });
    }

    if let Some(limit) = config.max_upload_bytes {
        if file.size() > limit {
            return Err(SubmitError::TooLarge {
                size: file.size(),
                limit,
            });
        }
    }

    Ok(file)
}

/// Turn a reply into a result or a server failure.
///
/// The body must be JSON on both paths; anything else is a decode failure.
pub fn interpret_reply(reply: &HttpReply) -> Result<DetectionResult, SubmitError> {
    let value: serde_json::Value = serde_json::from_str(&reply.body)?;

    if reply.is_success() {
        Ok(DetectionResult::from_value(value)?)
    } else {
        let body = ErrorBody::from_value(value);
        Err(SubmitError::Server {
            status: reply.status,
            message: body.message().to_string(),
        })
    }
}

/// Validate, send and interpret one upload
pub fn detect<T: Transport>(
    transport: &T,
    config: &ClientConfig,
    form: &UploadForm,
) -> Result<DetectionResult, SubmitError> {
    validate_upload(config, form.file.as_ref())?;
    let reply = transport.post_form(form)?;
    interpret_reply(&reply)
}
