use serde::Serialize;

use crate::domain::types::RichTextHtml;

/// Response of the content sanitize endpoint.
#[derive(Debug, Serialize)]
pub struct SanitizedContent {
    pub html: RichTextHtml,
}
