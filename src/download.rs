use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{window, Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Hands `contents` to the browser as a file download.
pub fn download_file(file_name: &str, mime_type: &str, contents: &str) -> Result<(), JsValue> {
    let parts = Array::new();
    parts.push(&JsValue::from_str(contents));

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url)
}
