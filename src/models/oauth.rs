use serde::Deserialize;

/// Query parameters for the authorization redirect. `state` is opaque to
/// the broker and round-tripped verbatim; callers own any anti-forgery
/// binding they want.
#[derive(Debug, Deserialize)]
pub struct LoginParams {
    pub state: Option<String>,
}

/// Query parameters GitHub appends when redirecting back to the callback.
/// Both are optional so the handler can reject a missing `code` with its
/// own 400 instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}
