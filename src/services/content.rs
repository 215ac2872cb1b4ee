use crate::domain::types::RichTextHtml;
use crate::dto::content::SanitizedContent;
use crate::forms::FormError;
use crate::forms::content::SanitizeContentForm;
use crate::services::{ServiceError, ServiceResult};

/// Cleans editor output posted through [`SanitizeContentForm`].
pub fn sanitize_content(form: SanitizeContentForm) -> ServiceResult<SanitizedContent> {
    let submitted = form.content.len();

    let html = RichTextHtml::try_from(form).map_err(|err| {
        match &err {
            FormError::EmptyContent => log::debug!("Rejected {submitted} bytes of blank content"),
            FormError::Validation(errors) => log::error!("Failed to validate form: {errors}"),
        }
        ServiceError::from(err)
    })?;

    if html.len() < submitted {
        log::debug!(
            "Sanitized editor content from {submitted} to {} bytes",
            html.len()
        );
    }

    Ok(SanitizedContent { html })
}
