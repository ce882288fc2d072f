//! Sample photo provider
//!
//! There is no camera; every capture yields a content URI for the bundled
//! plastic-pollution sample, named after the capture time.

use async_trait::async_trait;
use bluesweep_core::{BundledImage, PhotoEffects, Result, TimeEffects};
use chrono::{DateTime, Utc};
use std::sync::Arc;

const AUTHORITY: &str = "com.bluesweep.fileprovider";
const PICTURES_FOLDER: &str = "Pictures/BlueSweep";

/// Name prefix for a temporary camera capture file, e.g.
/// `JPEG_20250301_081500_`.
pub fn capture_file_name(at: DateTime<Utc>) -> String {
    format!("JPEG_{}_", at.format("%Y%m%d_%H%M%S"))
}

/// Photo provider returning URIs for the bundled sample image.
pub struct SamplePhotoProvider {
    clock: Arc<dyn TimeEffects>,
}

impl SamplePhotoProvider {
    /// Provider naming captures after `clock`.
    pub fn new(clock: Arc<dyn TimeEffects>) -> Self {
        Self { clock }
    }

    /// The image every capture stands for.
    pub fn sample_image(&self) -> BundledImage {
        BundledImage::PlasticPollution
    }
}

#[async_trait]
impl PhotoEffects for SamplePhotoProvider {
    async fn capture(&self) -> Result<String> {
        let millis = self.clock.now().timestamp_millis();
        let uri = format!("content://{AUTHORITY}/{PICTURES_FOLDER}/waste_report_{millis}.jpg");
        tracing::debug!(%uri, source = self.sample_image().resource_name(), "Captured sample photo");
        Ok(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use chrono::TimeZone;

    #[tokio::test]
    async fn capture_uri_uses_clock() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 8, 15, 0).unwrap();
        let provider = SamplePhotoProvider::new(Arc::new(FixedClock::new(at)));
        let uri = provider.capture().await.unwrap();
        assert_eq!(
            uri,
            format!(
                "content://com.bluesweep.fileprovider/Pictures/BlueSweep/waste_report_{}.jpg",
                at.timestamp_millis()
            )
        );
    }

    #[test]
    fn capture_file_name_format() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 8, 15, 0).unwrap();
        assert_eq!(capture_file_name(at), "JPEG_20250301_081500_");
    }
}
