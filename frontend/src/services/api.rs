use anyhow::{anyhow, Result};
use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder, Response};
use gloo::storage::{LocalStorage, Storage};
use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use super::config::{AppConfig, DEFAULT_API_URL};
use domain::{CreateBillInput, FormPart, MultipartForm, Store, UpdateBillInput};
use shared::{BillRecord, UploadResult};

const JWT_KEY: &str = "jwt";

/// REST client for the bills collection of the backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    pub fn bills_url(&self) -> String {
        format!("{}/bills", self.base_url)
    }

    pub fn bill_url(&self, selector: &str) -> String {
        format!("{}/bills/{}", self.base_url, selector)
    }

    /// Attach the session token left by the login page, if any
    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match LocalStorage::raw().get_item(JWT_KEY) {
            Ok(Some(jwt)) if !jwt.is_empty() => builder.header("Authorization", &format!("Bearer {}", jwt)),
            _ => builder,
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Store for ApiClient {
    async fn list(&self) -> Result<Vec<BillRecord>> {
        let response = Self::authorize(Request::get(&self.bills_url()))
            .send()
            .await
            .map_err(|e| anyhow!("Failed to fetch bills: {}", e))?;

        let response = check_status(response).await?;
        let values = response
            .json::<Vec<serde_json::Value>>()
            .await
            .map_err(|e| anyhow!("Failed to parse bills: {}", e))?;
        Ok(records_from_values(values))
    }

    async fn create(&self, input: CreateBillInput) -> Result<UploadResult> {
        let mut builder = Self::authorize(Request::post(&self.bills_url()));
        if !input.headers.no_content_type {
            builder = builder.header("Content-Type", "application/json");
        }

        let body = to_form_data(&input.data).map_err(js_error)?;
        let request = builder
            .body(body)
            .map_err(|e| anyhow!("Failed to build upload request: {}", e))?;
        let response = request
            .send()
            .await
            .map_err(|e| anyhow!("Failed to upload receipt: {}", e))?;

        let response = check_status(response).await?;
        response
            .json::<UploadResult>()
            .await
            .map_err(|e| anyhow!("Failed to parse upload response: {}", e))
    }

    async fn update(&self, input: UpdateBillInput) -> Result<BillRecord> {
        let request = Self::authorize(Request::patch(&self.bill_url(&input.selector)))
            .header("Content-Type", "application/json")
            .body(input.data)
            .map_err(|e| anyhow!("Failed to build update request: {}", e))?;
        let response = request
            .send()
            .await
            .map_err(|e| anyhow!("Failed to update bill {}: {}", input.selector, e))?;

        let response = check_status(response).await?;
        response
            .json::<BillRecord>()
            .await
            .map_err(|e| anyhow!("Failed to parse updated bill: {}", e))
    }
}

/// Decode each listed bill on its own; entries that are not bills are skipped
fn records_from_values(values: Vec<serde_json::Value>) -> Vec<BillRecord> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<BillRecord>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping bill at position {}: {}", index, e);
                None
            }
        })
        .collect()
}

/// Turn non-2xx responses into errors whose message starts with "Erreur <status>"
async fn check_status(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Err(anyhow!(status_message(status, &text)))
}

fn status_message(status: u16, text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        format!("Erreur {}", status)
    } else {
        format!("Erreur {}: {}", status, text)
    }
}

fn to_form_data(form: &MultipartForm) -> Result<FormData, JsValue> {
    let data = FormData::new()?;
    for part in form.parts() {
        match part {
            FormPart::Text { name, value } => data.append_with_str(name, value)?,
            FormPart::File { name, file } => {
                let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
                let options = BlobPropertyBag::new();
                options.set_type(&file.mime_type);
                let blob = Blob::new_with_u8_array_sequence_and_options(&js_sys::Array::of1(&bytes), &options)?;
                data.append_with_blob_and_filename(name, &blob, &file.name)?;
            }
        }
    }
    Ok(data)
}

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = ApiClient::with_base_url("http://localhost:5678/");
        assert_eq!(client.bills_url(), "http://localhost:5678/bills");
        assert_eq!(client.bill_url("47qAXb6fIm2zOKkLzMro"), "http://localhost:5678/bills/47qAXb6fIm2zOKkLzMro");
        assert_eq!(ApiClient::default(), ApiClient::new());
    }

    #[test]
    fn test_records_decoded_one_by_one() {
        let values = vec![
            serde_json::json!({ "id": "a", "date": "2004-04-04", "vat": 80 }),
            serde_json::Value::Null,
            serde_json::json!("not a bill"),
            serde_json::json!({ "id": "b", "date": null }),
        ];

        let records = records_from_values(values);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].vat, "80");
        assert_eq!(records[1].id.as_deref(), Some("b"));
        assert_eq!(records[1].date, "");
    }

    #[test]
    fn test_status_message() {
        assert_eq!(status_message(404, ""), "Erreur 404");
        assert_eq!(status_message(500, " boom \n"), "Erreur 500: boom");
    }
}
