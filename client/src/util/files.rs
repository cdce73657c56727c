//! File input reading and binary downloads.
//!
//! Client-side (hydrate): reads the chosen `File` into memory and saves
//! bytes through a temporary object URL.
//! Server-side (SSR): no-ops.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use campus_api::Upload;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Content type for a downloaded file, from its extension.
pub fn download_mime(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".xlsx") {
        XLSX_MIME
    } else if lower.ends_with(".xls") {
        "application/vnd.ms-excel"
    } else {
        "application/octet-stream"
    }
}

/// Read the first file of an `<input type="file">` change event, then call
/// `apply` with it. `apply` receives `None` when the selection was cleared
/// or the file could not be read.
pub fn read_file_input<F>(ev: &leptos::ev::Event, apply: F)
where
    F: FnOnce(Option<Upload>) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            apply(None);
            return;
        };
        leptos::task::spawn_local(async move {
            apply(read_upload(file).await);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        apply(None);
    }
}

#[cfg(feature = "hydrate")]
async fn read_upload(file: web_sys::File) -> Option<Upload> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await;
    match buffer {
        Ok(buffer) => {
            let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
            Some(Upload::new(file.name(), &file.type_(), bytes))
        }
        Err(e) => {
            log::debug!("reading {} failed: {e:?}", file.name());
            None
        }
    }
}

/// Offer `bytes` to the user as a download named `file_name`.
///
/// # Errors
///
/// Returns a message when the blob or anchor cannot be created.
pub fn save_download(file_name: &str, bytes: &[u8]) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let js_err = |e: wasm_bindgen::JsValue| format!("{e:?}");
        let array = js_sys::Uint8Array::from(bytes);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(download_mime(file_name));
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&js_sys::Array::of1(&array), &options)
            .map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let document = web_sys::window().and_then(|w| w.document()).ok_or("no document")?;
        let anchor = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor element unavailable".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file_name, bytes);
        Ok(())
    }
}
