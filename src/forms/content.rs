//! Form posted by the CMS page editor.

use serde::Deserialize;
use validator::Validate;

use crate::domain::types::RichTextHtml;
use crate::forms::FormError;

/// Largest editor payload accepted, in characters. Mirrors the form validator.
pub const MAX_CONTENT_LENGTH: usize = 524_288;

/// Body limit for the urlencoded editor form.
///
/// A four-byte UTF-8 character percent-encodes to twelve bytes, so a payload
/// at the character limit must still reach the validator.
pub const MAX_FORM_BODY_BYTES: usize = 12 * MAX_CONTENT_LENGTH + 1024;

/// Serialized editor output submitted for cleaning.
#[derive(Debug, Deserialize, Validate)]
pub struct SanitizeContentForm {
    #[serde(default)]
    #[validate(length(max = 524288))]
    pub content: String,
}

impl TryFrom<SanitizeContentForm> for RichTextHtml {
    type Error = FormError;

    fn try_from(form: SanitizeContentForm) -> Result<Self, Self::Error> {
        form.validate()?;
        RichTextHtml::new(form.content).map_err(|_| FormError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_is_cleaned_into_rich_text() {
        let form = SanitizeContentForm {
            content: "<p>Hi<script>x</script></p>".to_string(),
        };

        let html = RichTextHtml::try_from(form).unwrap();

        assert_eq!(html.as_str(), "<p>Hi</p>");
    }

    #[test]
    fn blank_content_is_rejected() {
        let form = SanitizeContentForm {
            content: "<p><br></p>".to_string(),
        };

        assert!(matches!(
            RichTextHtml::try_from(form),
            Err(FormError::EmptyContent)
        ));
    }

    #[test]
    fn oversized_content_fails_validation() {
        let form = SanitizeContentForm {
            content: "a".repeat(MAX_CONTENT_LENGTH + 1),
        };

        assert!(matches!(
            RichTextHtml::try_from(form),
            Err(FormError::Validation(_))
        ));
    }
}
