//! HTTP service for uploading documents to the conversion backend.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::{AbortSignal, File, FormData};

use crate::types::{AppError, AppResult, ConvertedFile};

/// Response envelope from `POST /api/convert`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub data: ConvertedFile,
}

/// Upload one document for conversion.
///
/// Posts the file as a multipart form under the `document` field. The
/// optional abort signal ties the request to the calling component's
/// lifetime.
pub async fn convert_document(
    file: File,
    backend_url: &str,
    abort: Option<&AbortSignal>,
) -> AppResult<ConvertedFile> {
    let form_data =
        FormData::new().map_err(|e| AppError::Upload(format!("failed to create form data: {:?}", e)))?;
    form_data
        .append_with_blob("document", &file)
        .map_err(|e| AppError::Upload(format!("failed to append file: {:?}", e)))?;

    let url = format!("{}/api/convert", backend_url);
    let response = Request::post(&url)
        .abort_signal(abort)
        .body(form_data)
        .map_err(|e| AppError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Upload(extract_error_message(
            response.status(),
            &body,
        )));
    }

    let parsed: ConvertResponse = response
        .json()
        .await
        .map_err(|e| AppError::Upload(format!("failed to parse response: {}", e)))?;
    Ok(parsed.data)
}

/// Pull a human-readable message out of a failure body.
///
/// The backend reports failures as `{"message": "..."}`; anything else
/// falls back to a generic message carrying the HTTP status.
pub fn extract_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| format!("Conversion failed (HTTP {})", status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_response_deserialization() {
        let json = r#"{
            "data": {
                "originalName": "contract.docx",
                "name": "f_9182"
            }
        }"#;

        let response: ConvertResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.original_name, "contract.docx");
        assert_eq!(response.data.name, "f_9182");
    }

    #[test]
    fn error_message_from_json_body() {
        let body = r#"{"message":"unsupported document"}"#;
        assert_eq!(extract_error_message(422, body), "unsupported document");
    }

    #[test]
    fn error_message_falls_back_on_garbage_body() {
        assert_eq!(
            extract_error_message(500, "<html>Internal Server Error</html>"),
            "Conversion failed (HTTP 500)"
        );
    }

    #[test]
    fn error_message_falls_back_when_message_field_missing() {
        assert_eq!(
            extract_error_message(400, r#"{"error":"nope"}"#),
            "Conversion failed (HTTP 400)"
        );
    }
}
