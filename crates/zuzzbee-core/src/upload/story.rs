//! Story Upload
//!
//! Picks up to `MAX_IMAGES_PER_STORY` images, converts them one after the
//! other, and prepends the resulting story. A failed file is skipped and
//! reported; the story is only refused when nothing converted.

use log::{info, warn};

use super::{FileFailure, ImageFile, UploadError};
use crate::config::MAX_IMAGES_PER_STORY;
use crate::domain::{Story, StoryItem, User};
use crate::notice::Notice;
use crate::repository::Repository;

/// Files chosen for the next story, in pick order
#[derive(Debug, Clone, PartialEq)]
pub struct StorySelection<F> {
    files: Vec<F>,
}

impl<F> Default for StorySelection<F> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<F> StorySelection<F> {
    /// Keep at most `MAX_IMAGES_PER_STORY` files. The notice is returned when
    /// some were dropped.
    pub fn select(files: Vec<F>) -> (Self, Option<Notice>) {
        let mut files = files;
        let notice = if files.len() > MAX_IMAGES_PER_STORY {
            files.truncate(MAX_IMAGES_PER_STORY);
            Some(Notice::info("Upload Limit Reached").with_description(format!(
                "You can add a maximum of {max} images to a story. Only the first {max} images have been selected.",
                max = MAX_IMAGES_PER_STORY
            )))
        } else {
            None
        };
        (Self { files }, notice)
    }

    pub fn remove(&mut self, index: usize) -> Option<F> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}

/// Successful story creation
#[derive(Debug, Clone, PartialEq)]
pub struct StoryUpload {
    pub story: Story,
    /// Files skipped because they could not be read
    pub failures: Vec<FileFailure>,
}

impl StoryUpload {
    pub fn notices(&self) -> Vec<Notice> {
        let mut notices: Vec<Notice> = self.failures.iter().map(FileFailure::notice).collect();
        notices.push(Notice::success("Story Created!").with_description(format!(
            "Your story with {} image(s) has been added.",
            self.story.items.len()
        )));
        notices
    }
}

/// Convert `files` in order and prepend a story made of the ones that worked.
///
/// The repository is untouched unless at least one file converted.
pub async fn create_story<F: ImageFile>(
    repo: &dyn Repository<Story>,
    user: Option<&User>,
    files: &[F],
    caption: &str,
) -> Result<StoryUpload, UploadError> {
    let user = match user {
        Some(user) if !files.is_empty() => user,
        _ => {
            return Err(UploadError::MissingInformation(
                "Please select at least one image for your story and ensure you are logged in."
                    .to_string(),
            ))
        }
    };

    let mut items = Vec::with_capacity(files.len());
    let mut failures = Vec::new();
    for file in files {
        match file.read_data_uri().await {
            Ok(uri) => items.push(StoryItem::image(uri)),
            Err(failure) => {
                warn!("story upload: skipping {}: {}", failure.name, failure.reason);
                failures.push(failure);
            }
        }
    }

    if items.is_empty() {
        return Err(UploadError::NoImagesProcessed { failures });
    }

    let caption = caption.trim();
    let content = if caption.is_empty() { None } else { Some(caption.to_string()) };
    let story = repo.prepend(Story::new(user.clone(), items, content)).await?;
    info!(
        "story upload: created {} with {} item(s), {} failed",
        story.id,
        story.items.len(),
        failures.len()
    );
    Ok(StoryUpload { story, failures })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryRepository;
    use async_trait::async_trait;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeFile {
        name: String,
        bytes: Option<Vec<u8>>,
    }

    impl FakeFile {
        fn ok(name: &str, bytes: &[u8]) -> Self {
            Self { name: name.to_string(), bytes: Some(bytes.to_vec()) }
        }

        fn broken(name: &str) -> Self {
            Self { name: name.to_string(), bytes: None }
        }
    }

    #[async_trait(?Send)]
    impl ImageFile for FakeFile {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn mime_type(&self) -> String {
            String::new()
        }

        async fn read_bytes(&self) -> Result<Vec<u8>, String> {
            self.bytes.clone().ok_or_else(|| "read error".to_string())
        }
    }

    fn alice() -> User {
        User::new("u1", "alice")
    }

    #[test]
    fn test_selection_caps_at_max() {
        let files: Vec<u32> = (0..12).collect();
        let (selection, notice) = StorySelection::select(files);
        assert_eq!(selection.len(), MAX_IMAGES_PER_STORY);
        assert_eq!(selection.files()[9], 9);
        assert_eq!(notice.map(|n| n.title), Some("Upload Limit Reached".to_string()));
    }

    #[test]
    fn test_selection_under_cap_has_no_notice() {
        let (selection, notice) = StorySelection::select(vec![1, 2, 3]);
        assert_eq!(selection.len(), 3);
        assert!(notice.is_none());
    }

    #[test]
    fn test_selection_remove() {
        let (mut selection, _) = StorySelection::select(vec!["a", "b", "c"]);
        assert_eq!(selection.remove(1), Some("b"));
        assert_eq!(selection.files(), &["a", "c"]);
        assert_eq!(selection.remove(5), None);
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_order() {
        let repo = MemoryRepository::<Story>::new();
        let files = vec![
            FakeFile::ok("one.png", b"1"),
            FakeFile::broken("two.png"),
            FakeFile::ok("three.jpg", b"3"),
        ];

        let upload = create_story(&repo, Some(&alice()), &files, "  trip  ")
            .await
            .expect("story should be created");

        let urls: Vec<&str> = upload.story.items.iter().map(|i| i.image_url.as_str()).collect();
        assert_eq!(urls, vec!["data:image/png;base64,MQ==", "data:image/jpeg;base64,Mw=="]);
        assert_eq!(upload.failures.len(), 1);
        assert_eq!(upload.failures[0].name, "two.png");
        assert_eq!(upload.story.content.as_deref(), Some("trip"));
        assert!(!upload.story.is_seen);

        let notices = upload.notices();
        assert_eq!(notices[0].title, "Processing Error");
        assert_eq!(notices[1].title, "Story Created!");

        let stored = repo.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].items.len(), 2);
    }

    #[tokio::test]
    async fn test_all_failures_leave_repository_untouched() {
        let existing = Story::new(alice(), vec![StoryItem::image("x.png")], None);
        let repo = MemoryRepository::with_items(vec![existing]);
        let files = vec![FakeFile::broken("a.png"), FakeFile::broken("b.png")];

        let err = create_story(&repo, Some(&alice()), &files, "")
            .await
            .expect_err("nothing converted");

        assert!(matches!(err, UploadError::NoImagesProcessed { ref failures } if failures.len() == 2));
        let notices = err.notices();
        assert!(notices.last().map(|n| n.is_failure()).unwrap_or(false));
        assert_eq!(notices.last().map(|n| n.title.as_str()), Some("No Images Processed"));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_requires_user_and_files() {
        let repo = MemoryRepository::<Story>::new();
        let files = vec![FakeFile::ok("a.png", b"a")];

        let no_user = create_story(&repo, None, &files, "").await;
        assert!(matches!(no_user, Err(UploadError::MissingInformation(_))));

        let no_files = create_story::<FakeFile>(&repo, Some(&alice()), &[], "").await;
        assert!(matches!(no_files, Err(UploadError::MissingInformation(_))));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_blank_caption_is_none() {
        let repo = MemoryRepository::<Story>::new();
        let upload = create_story(&repo, Some(&alice()), &[FakeFile::ok("a.gif", b"g")], "   ")
            .await
            .unwrap();
        assert_eq!(upload.story.content, None);
        assert_eq!(upload.story.user_id, "u1");
    }
}
