//! Caption Service
//!
//! Browser-side caption suggestions: the offline mock behind a short delay so
//! the loading state is visible.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use zuzzbee_core::caption::{
    CaptionError, CaptionRequest, CaptionService, CaptionSuggestion, MockCaptionService,
};

const SUGGESTION_DELAY_MS: u32 = 800;

#[derive(Debug, Clone, Default)]
pub struct DelayedCaptionService {
    inner: MockCaptionService,
}

#[async_trait(?Send)]
impl CaptionService for DelayedCaptionService {
    async fn generate(&self, request: CaptionRequest) -> Result<CaptionSuggestion, CaptionError> {
        TimeoutFuture::new(SUGGESTION_DELAY_MS).await;
        self.inner.generate(request).await
    }
}
