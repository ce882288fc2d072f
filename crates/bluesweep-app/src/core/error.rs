use thiserror::Error;

use crate::navigation::Screen;

/// Why an intent was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentError {
    /// The addressed screen needs a signed-in user
    #[error("sign in required to use the {screen} screen")]
    Unauthenticated {
        /// Screen the intent addressed
        screen: Screen,
    },
}
