use serde::Deserialize;

/// Body Amazon returns alongside any non-200 status, including the
/// non-standard 497 for a user/receipt mismatch.
///
/// Both fields are optional on the wire; a missing or null message is
/// surfaced as an empty one.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponseModel {
    pub(crate) message: Option<String>,
    #[allow(dead_code)]
    pub(crate) status: Option<bool>,
}
