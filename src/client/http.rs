// src/client/http.rs
//
// Blocking reqwest transport: multipart POST to the detection endpoint

use std::time::Duration;

use reqwest::blocking::{multipart, Client};
use serde::Deserialize;
use uuid::Uuid;

use super::form::{UploadForm, FILE_FIELD, METHOD_FIELD};
use super::transport::{HttpReply, Transport};
use crate::config::ClientConfig;
use crate::error::TransportError;

#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
}

/// Transport backed by a reqwest blocking client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    detect_url: String,
    health_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder().timeout(config.timeout_secs.map(Duration::from_secs));
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            detect_url: config.detect_url(),
            health_url: config.health_url(),
        })
    }

    pub fn detect_url(&self) -> &str {
        &self.detect_url
    }

    /// Probe the service; true when it answers `{"status": "ok"}`
    pub fn health(&self) -> Result<bool, TransportError> {
        let response = self.client.get(&self.health_url).send()?;
        if !response.status().is_success() {
            log::warn!("Health probe returned HTTP {}", response.status().as_u16());
            return Ok(false);
        }
        let body: HealthBody = response.json()?;
        Ok(body.status == "ok")
    }
}

impl Transport for HttpTransport {
    fn post_form(&self, form: &UploadForm) -> Result<HttpReply, TransportError> {
        let request_id = Uuid::new_v4();
        let mut payload = multipart::Form::new().text(METHOD_FIELD, form.method.form_value());
        if let Some(file) = &form.file {
            log::debug!(
                "[{}] POST {} file={} ({} bytes) method={}",
                request_id,
                self.detect_url,
                file.file_name,
                file.size(),
                form.method
            );
            let part = multipart::Part::bytes(file.content.clone()).file_name(file.file_name.clone());
            payload = payload.part(FILE_FIELD, part);
        }

        let response = self
            .client
            .post(&self.detect_url)
            .header("X-Request-Id", request_id.to_string())
            .multipart(payload)
            .send()
            .map_err(|e| {
                log::warn!("[{}] request failed: {}", request_id, e);
                e
            })?;

        let status = response.status().as_u16();
        let body = response.text()?;
        log::debug!("[{}] HTTP {} ({} bytes)", request_id, status, body.len());
        Ok(HttpReply::new(status, body))
    }
}
