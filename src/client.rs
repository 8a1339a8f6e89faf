//! Thin blocking wrapper around the workflow upload endpoint.
//!
//! The server parses the uploaded export itself and responds with the
//! assembled model as JSON; this client only moves bytes and decodes the
//! response. Transport problems surface as [`FetchError`], never as a parse
//! error; when the fetch fails, parsing simply never happened.

use std::path::Path;

use reqwest::blocking::{Client, multipart};
use serde::Deserialize;

use crate::error::FetchError;
use crate::model::WorkflowModel;

#[derive(Deserialize)]
struct DetailsResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    model: WorkflowModel,
}

/// A client for a server exposing the workflow parse API.
pub struct WorkflowClient {
    http: Client,
    base_url: String,
}

impl WorkflowClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Uploads an export file and returns the server-assembled model.
    pub fn upload(&self, path: impl AsRef<Path>) -> Result<WorkflowModel, FetchError> {
        let form = multipart::Form::new().file("file", path)?;
        let response = self
            .http
            .post(format!("{}/api/workflow/details", self.base_url))
            .multipart(form)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            });
        }

        let body: DetailsResponse = response.json()?;
        if !body.success {
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: body.error.unwrap_or_default(),
            });
        }
        Ok(body.model)
    }
}
