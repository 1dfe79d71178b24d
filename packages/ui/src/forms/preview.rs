//! Local image previews through blob URLs.

/// Object URL for `bytes`, valid until [`revoke`]d. `None` outside the browser.
#[cfg(target_arch = "wasm32")]
pub(crate) fn object_url(bytes: &[u8], content_type: &str) -> Option<String> {
    use web_sys::{Blob, BlobPropertyBag, Url};

    let data = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&data);
    let options = BlobPropertyBag::new();
    options.set_type(content_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
    Url::create_object_url_with_blob(&blob).ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn object_url(_bytes: &[u8], _content_type: &str) -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn revoke(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        tracing::debug!("could not revoke preview url: {e:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn revoke(_url: &str) {}
