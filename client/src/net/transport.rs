//! `Transport` implementation over the browser fetch API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`; multipart bodies
//! are assembled as `FormData` with `Blob` file parts.
//! Server-side (SSR): every send fails, since the console only issues API
//! calls after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Fetch and body-read failures map to `ApiError::Transport`; a `FormData`
//! that cannot be built maps to `ApiError::Encode`. Status codes are left
//! to `AdminApi`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use campus_api::{AdminApi, ApiError, ApiRequest, ApiResponse, Transport};

/// Same-origin base path the host forwards to the back end.
pub const API_BASE: &str = "/api";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserTransport;

/// The console's API client.
pub fn console_api() -> AdminApi<BrowserTransport> {
    AdminApi::new(BrowserTransport)
}

#[cfg(any(test, feature = "hydrate"))]
fn request_url(path: &str) -> String {
    campus_api::transport::join_url(API_BASE, path)
}

#[cfg(any(test, not(feature = "hydrate")))]
fn server_side_message(request: &ApiRequest) -> String {
    format!("{} {} is not available during server rendering", request.method, request.path)
}

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            fetch(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Transport(server_side_message(&request)))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn fetch(request: ApiRequest) -> Result<ApiResponse, ApiError> {
    use campus_api::{Method, RequestBody};
    use gloo_net::http::Request;

    let url = request_url(&request.path);
    let builder = match request.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    let prepared = match request.body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(body) => builder.json(&body),
        RequestBody::Multipart(parts) => builder.body(form_data(parts)?),
    }
    .map_err(|e| ApiError::Encode(e.to_string()))?;

    let response = prepared.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status();
    let body = response.binary().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok(ApiResponse { status, body })
}

#[cfg(feature = "hydrate")]
fn form_data(parts: Vec<campus_api::FormPart>) -> Result<web_sys::FormData, ApiError> {
    use campus_api::PartValue;

    let encode = |e: wasm_bindgen::JsValue| ApiError::Encode(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(encode)?;
    for part in parts {
        match part.value {
            PartValue::Text(text) => form.append_with_str(&part.name, &text).map_err(encode)?,
            PartValue::File(upload) => {
                let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
                let options = web_sys::BlobPropertyBag::new();
                options.set_type(&upload.content_type);
                let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&js_sys::Array::of1(&bytes), &options)
                    .map_err(encode)?;
                form.append_with_blob_and_filename(&part.name, &blob, &upload.file_name).map_err(encode)?;
            }
        }
    }
    Ok(form)
}
