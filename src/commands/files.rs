//! Picked Files
//!
//! Bridges `<input type="file">` selections to the upload flows and manages
//! object URLs used for local previews.

use async_trait::async_trait;
use wasm_bindgen_futures::JsFuture;
use zuzzbee_core::upload::ImageFile;

/// A file from a file input
#[derive(Debug, Clone)]
pub struct PickedFile(pub web_sys::File);

#[async_trait(?Send)]
impl ImageFile for PickedFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, String> {
        let buffer = JsFuture::from(self.0.array_buffer())
            .await
            .map_err(|e| e.as_string().unwrap_or_else(|| format!("{:?}", e)))?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

/// Files currently selected in `input`, in order
pub fn picked_files(input: &web_sys::HtmlInputElement) -> Vec<PickedFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(PickedFile)
        .collect()
}

/// Object URL for previewing `file`, None if the browser refuses
pub fn create_preview_url(file: &PickedFile) -> Option<String> {
    match web_sys::Url::create_object_url_with_blob(&file.0) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("preview url for {} failed: {:?}", file.0.name(), e);
            None
        }
    }
}

pub fn revoke_preview_urls(urls: &[String]) {
    for url in urls {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}
