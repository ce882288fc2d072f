//! Wall clock effects

use chrono::{DateTime, Utc};

/// Wall clock. Synchronous so pure screen logic can be handed a timestamp.
pub trait TimeEffects: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}
