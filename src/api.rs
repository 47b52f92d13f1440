//! Blocking HTTP client for the pyazo server API.

use reqwest::blocking::{Client, multipart};
use serde::Deserialize;
use std::path::Path;

use crate::config::Config;
use crate::error::PyazoError;

/// Response body of `POST /images`.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    id: String,
}

/// Client holding the base URL and bearer token for one run.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Upload an image file and return its public URL.
    ///
    /// The file is sent as a multipart form (`upload_file` part) to
    /// `<base_url>/images` with `private` and `clear_metadata` query
    /// parameters. Any status >= 400 is an upload failure carrying the
    /// status code.
    pub fn upload(
        &self,
        file: &Path,
        private: bool,
        clear_metadata: bool,
    ) -> Result<String, PyazoError> {
        let request_url = format!("{}/images", self.base_url);
        let form = multipart::Form::new().file("upload_file", file)?;

        log::debug!("Uploading {} to {}", file.display(), request_url);

        let response = self
            .client
            .post(&request_url)
            .bearer_auth(&self.token)
            .query(&[("private", private), ("clear_metadata", clear_metadata)])
            .multipart(form)
            .send()
            .map_err(|source| PyazoError::Http {
                url: request_url.clone(),
                source,
            })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(PyazoError::UploadFailed(status.as_u16()));
        }

        let body: UploadResponse = response
            .json()
            .map_err(|err| PyazoError::InvalidResponse(err.to_string()))?;

        Ok(image_url(&self.base_url, &body.id))
    }

    /// Delete the most recently uploaded image.
    pub fn delete_last_image(&self) -> Result<(), PyazoError> {
        let id = self.latest_image_id()?;
        log::debug!("Deleting image {}", id);
        self.delete_image(&id)
    }

    fn latest_image_id(&self) -> Result<String, PyazoError> {
        let request_url = format!("{}/images", self.base_url);

        let response = self
            .client
            .get(&request_url)
            .bearer_auth(&self.token)
            .query(&[("per_page", 1)])
            .send()
            .map_err(|source| PyazoError::Http {
                url: request_url.clone(),
                source,
            })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(PyazoError::DeleteFailed(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .map_err(|err| PyazoError::InvalidResponse(err.to_string()))?;

        body.get("results")
            .and_then(|v| v.as_array())
            .and_then(|results| results.first())
            .and_then(|image| image.get("id"))
            .and_then(|id| id.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                PyazoError::InvalidResponse("missing 'results[0].id' in image list".to_string())
            })
    }

    fn delete_image(&self, id: &str) -> Result<(), PyazoError> {
        let request_url = format!("{}/images/{}", self.base_url, id);

        let response = self
            .client
            .delete(&request_url)
            .bearer_auth(&self.token)
            .send()
            .map_err(|source| PyazoError::Http {
                url: request_url.clone(),
                source,
            })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(PyazoError::DeleteFailed(status.as_u16()));
        }

        Ok(())
    }
}

/// Public URL of an uploaded image: `<base_url>/<id>`.
fn image_url(base_url: &str, id: &str) -> String {
    format!("{}/{}", base_url, id)
}
