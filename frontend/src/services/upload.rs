//! HTTP upload of the extraction form through `FormData`.

use extraction_client::{ExtractionApi, FormPart, RawReply, TransportError, UploadForm};
use gloo_net::http::Request;
use web_sys::{File, FormData};

/// Posts the multipart form with the browser's `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpExtractionApi;

impl HttpExtractionApi {
    fn build_form_data(form: UploadForm<File>) -> Result<FormData, TransportError> {
        let form_data = FormData::new()
            .map_err(|e| TransportError::Request(format!("Failed to create FormData: {:?}", e)))?;

        for part in form.parts {
            match part {
                FormPart::File { field, file } => form_data
                    .append_with_blob_and_filename(field, &file, &file.name())
                    .map_err(|e| TransportError::Request(format!("Failed to append file: {:?}", e)))?,
                FormPart::Text { field, value } => form_data
                    .append_with_str(field, value)
                    .map_err(|e| TransportError::Request(format!("Failed to append field: {:?}", e)))?,
            }
        }
        Ok(form_data)
    }
}

impl ExtractionApi for HttpExtractionApi {
    type File = File;

    async fn upload(&self, url: &str, form: UploadForm<File>) -> Result<RawReply, TransportError> {
        let form_data = Self::build_form_data(form)?;

        let request = Request::post(url)
            .body(form_data)
            .map_err(|e| TransportError::Request(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(format!("Failed to read response: {}", e)))?;

        log::debug!("Upload answered {} ({} bytes)", status, body.len());
        Ok(RawReply { status, body })
    }
}
