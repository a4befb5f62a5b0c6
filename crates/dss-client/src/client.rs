//! HTTP client for the submission backend.
//!
//! [`HttpBackend`] is the production implementation of both collaborator
//! seams of `dss-submit`: it fetches the lookup lists and delivers uploads.

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::USER_AGENT;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use dss_model::{Author, Keyword, License, NewAuthor, Variable};
use dss_submit::{
    Attachment, LookupError, LookupProvider, SubmissionPayload, Transport, TransportError,
    TransportReply,
};

use crate::config::BackendConfig;
use crate::error::{ClientError, Result};
use crate::preview::DataPreview;

/// Client for the backend REST API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    /// Create a client for the given backend.
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Ask the backend which columns an attached file contains.
    pub fn preview(&self, attachment: &Attachment) -> Result<DataPreview> {
        let form = Form::new().part("file", file_part(attachment)?);
        let request = self
            .client
            .post(self.config.endpoint("data/preview"))
            .multipart(form);
        let preview: DataPreview = self.send_json(request)?;
        debug!(
            file = %attachment.file_name,
            rows = preview.num_rows,
            columns = preview.columns.len(),
            "preview received"
        );
        Ok(preview)
    }

    /// Submit the metadata and optional file as one multipart upload.
    pub fn upload(&self, payload: &SubmissionPayload) -> Result<TransportReply> {
        let metadata_json = payload
            .metadata_json()
            .map_err(|err| ClientError::Request(err.to_string()))?;
        let metadata = Part::text(metadata_json).mime_str("application/json")?;
        let mut form = Form::new().part("metadata", metadata);
        if let Some(file) = &payload.file {
            form = form.part("file", file_part(file)?);
        }

        let request = self
            .client
            .post(self.config.endpoint("upload"))
            .multipart(form);
        self.send_json(request)
    }

    fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        self.send_json(self.client.get(self.config.endpoint(path)))
    }

    fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .header(
                USER_AGENT,
                format!("dataset-submission-studio/{}", env!("CARGO_PKG_VERSION")),
            )
            .send()?;
        let response = check_status(response)?;
        Ok(response.json()?)
    }
}

fn file_part(attachment: &Attachment) -> Result<Part> {
    Ok(Part::bytes(attachment.bytes.clone())
        .file_name(attachment.file_name.clone())
        .mime_str(&attachment.media_type)?)
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .unwrap_or_else(|_| "Unknown error".to_string());
    warn!(status = status.as_u16(), %message, "backend request failed");
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

impl LookupProvider for HttpBackend {
    fn authors(&self) -> std::result::Result<Vec<Author>, LookupError> {
        self.get_list("authors").map_err(|e| e.into_lookup("authors"))
    }

    fn licenses(&self) -> std::result::Result<Vec<License>, LookupError> {
        self.get_list("licenses").map_err(|e| e.into_lookup("licenses"))
    }

    fn variables(&self) -> std::result::Result<Vec<Variable>, LookupError> {
        self.get_list("variables").map_err(|e| e.into_lookup("variables"))
    }

    fn keywords(&self) -> std::result::Result<Vec<Keyword>, LookupError> {
        self.get_list("keywords").map_err(|e| e.into_lookup("keywords"))
    }

    fn create_author(&self, author: &NewAuthor) -> std::result::Result<Author, LookupError> {
        let request = self
            .client
            .put(self.config.endpoint("author"))
            .json(author);
        self.send_json(request)
            .map_err(|e| LookupError::Create(e.to_string()))
    }
}

impl Transport for HttpBackend {
    fn send(&self, payload: &SubmissionPayload) -> std::result::Result<TransportReply, TransportError> {
        self.upload(payload).map_err(TransportError::from)
    }
}
