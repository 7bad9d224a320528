//! Binary download of converted artifacts and the browser save flow.

use gloo_net::http::Request;
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{AbortSignal, Blob, HtmlAnchorElement, Url};

use crate::types::{AppError, AppResult};

/// Download endpoint URL for a stored identifier.
pub fn download_url(backend_url: &str, stored_name: &str) -> String {
    format!("{}/api/download?filename={}", backend_url, stored_name)
}

/// Name for the saved file: the original upload name plus `.pdf`.
pub fn pdf_filename(original_name: &str) -> String {
    format!("{}.pdf", original_name)
}

/// Fetch the converted artifact as raw bytes.
pub async fn fetch_converted(
    backend_url: &str,
    stored_name: &str,
    abort: Option<&AbortSignal>,
) -> AppResult<Vec<u8>> {
    let response = Request::get(&download_url(backend_url, stored_name))
        .abort_signal(abort)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(AppError::Download(format!(
            "server error ({})",
            response.status()
        )));
    }

    response
        .binary()
        .await
        .map_err(|e| AppError::Download(e.to_string()))
}

/// Hand bytes to the browser's save flow.
///
/// Builds a temporary object URL over the bytes, clicks a synthetic anchor
/// carrying the `download` attribute, then revokes the URL.
pub fn save_as(bytes: &[u8], filename: &str) -> AppResult<()> {
    let js_err = |e| AppError::Download(format!("{:?}", e));

    let parts = Array::of1(&Uint8Array::from(bytes));
    let blob = Blob::new_with_u8_array_sequence(&parts).map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Download("no document available".to_string()))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| AppError::Download("failed to create anchor".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    // The anchor must be in the DOM for the click to trigger a save.
    let body = document
        .body()
        .ok_or_else(|| AppError::Download("no document body".to_string()))?;
    body.append_child(&anchor).map_err(js_err)?;
    anchor.click();
    let _ = body.remove_child(&anchor);

    Url::revoke_object_url(&url).map_err(js_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_url_carries_stored_name() {
        assert_eq!(
            download_url("http://localhost:5000", "abc123"),
            "http://localhost:5000/api/download?filename=abc123"
        );
    }

    #[test]
    fn saved_filename_appends_pdf_extension() {
        assert_eq!(pdf_filename("report"), "report.pdf");
        // The original name keeps its own extension, matching the backend.
        assert_eq!(pdf_filename("contract.docx"), "contract.docx.pdf");
    }
}
