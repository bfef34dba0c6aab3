//! Upload Flows
//!
//! Story creation from several images and single-photo posting. Both turn
//! picked files into data URIs before anything reaches a repository.

mod data_uri;
mod story;
mod photo;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::DomainError;
use crate::notice::Notice;

pub use data_uri::{parse_data_uri, resolve_mime, to_data_uri};
pub use photo::PhotoDraft;
pub use story::{create_story, StorySelection, StoryUpload};

/// A user-picked file whose bytes can be read asynchronously
#[async_trait(?Send)]
pub trait ImageFile {
    fn name(&self) -> String;

    /// Declared MIME type, may be empty
    fn mime_type(&self) -> String;

    async fn read_bytes(&self) -> Result<Vec<u8>, String>;

    /// Read the whole file into a `data:` URI
    async fn read_data_uri(&self) -> Result<String, FileFailure> {
        let name = self.name();
        let bytes = self.read_bytes().await.map_err(|reason| FileFailure {
            name: name.clone(),
            reason,
        })?;
        let mime = resolve_mime(&self.mime_type(), &name);
        Ok(to_data_uri(&mime, &bytes))
    }
}

/// One file that could not be converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub name: String,
    pub reason: String,
}

impl FileFailure {
    pub fn notice(&self) -> Notice {
        Notice::destructive("Processing Error")
            .with_description(format!("Could not process {}.", self.name))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    #[error("missing information: {0}")]
    MissingInformation(String),
    #[error("no images could be processed ({} failed)", .failures.len())]
    NoImagesProcessed { failures: Vec<FileFailure> },
    #[error(transparent)]
    Repository(#[from] DomainError),
}

impl UploadError {
    /// Everything the user should be told, in display order
    pub fn notices(&self) -> Vec<Notice> {
        match self {
            UploadError::MissingInformation(description) => {
                vec![Notice::destructive("Missing Information").with_description(description.clone())]
            }
            UploadError::NoImagesProcessed { failures } => {
                let mut notices: Vec<Notice> = failures.iter().map(FileFailure::notice).collect();
                notices.push(
                    Notice::destructive("No Images Processed").with_description(
                        "Could not create story as no images were successfully processed.",
                    ),
                );
                notices
            }
            UploadError::Repository(err) => {
                vec![Notice::destructive("Upload Failed").with_description(err.to_string())]
            }
        }
    }
}
