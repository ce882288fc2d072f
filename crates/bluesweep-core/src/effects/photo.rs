//! Camera capture effects

use async_trait::async_trait;

use crate::errors::Result;

/// Photo capture
#[async_trait]
pub trait PhotoEffects: Send + Sync {
    /// Capture a photo and return a URI for it.
    async fn capture(&self) -> Result<String>;
}
