//! Turns an [`EventDraft`] into the multipart update the backend expects.
//!
//! The backend only reads files from form posts, so the update travels as a
//! POST carrying `_method=PUT`. Tiers are addressed by position, tags and
//! deleted media ids are repeated array fields, and new files share the
//! `new_media[]` name.

use std::path::PathBuf;

use reqwest::multipart::{Form, Part};
use thiserror::Error;

use crate::draft::{EventDraft, PendingUpload};
use crate::utils::is_blank;

pub const METHOD_OVERRIDE_FIELD: &str = "_method";
pub const METHOD_OVERRIDE_VALUE: &str = "PUT";
pub const NEW_MEDIA_FIELD: &str = "new_media[]";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("title is required")]
    MissingTitle,
    #[error("category is required")]
    MissingCategory,
    #[error("description is required")]
    MissingDescription,
    #[error("start date is required")]
    MissingStartDate,
    #[error("start time is required")]
    MissingStartTime,
    #[error("location is required")]
    MissingLocation,
    #[error("at least one ticket tier is required")]
    NoTiers,
    #[error("ticket {0} needs a name")]
    TierMissingName(usize),
    #[error("ticket {0} needs a quantity")]
    TierMissingQuantity(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    File {
        path: PathBuf,
        file_name: String,
        content_type: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub value: FieldValue,
}

impl FormField {
    fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Text(value.into()),
        }
    }

    fn file(upload: &PendingUpload) -> Self {
        Self {
            name: NEW_MEDIA_FIELD.to_string(),
            value: FieldValue::File {
                path: upload.path.clone(),
                file_name: upload.file_name.clone(),
                content_type: upload.content_type.clone(),
            },
        }
    }

    pub fn text_value(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Text(text) => Some(text),
            FieldValue::File { .. } => None,
        }
    }

    /// One line per field for dry runs.
    pub fn describe(&self) -> String {
        match &self.value {
            FieldValue::Text(text) => format!("{} = {}", self.name, text),
            FieldValue::File {
                path, content_type, ..
            } => format!("{} = @{} ({})", self.name, path.display(), content_type),
        }
    }
}

pub fn validate(draft: &EventDraft) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();
    let required = [
        (&draft.title, ValidationIssue::MissingTitle),
        (&draft.category, ValidationIssue::MissingCategory),
        (&draft.description, ValidationIssue::MissingDescription),
        (&draft.start_date, ValidationIssue::MissingStartDate),
        (&draft.start_time, ValidationIssue::MissingStartTime),
        (&draft.location, ValidationIssue::MissingLocation),
    ];
    for (value, issue) in required {
        if is_blank(value) {
            issues.push(issue);
        }
    }

    if draft.tiers.is_empty() {
        issues.push(ValidationIssue::NoTiers);
    }
    for (index, tier) in draft.tiers.iter().enumerate() {
        if is_blank(&tier.name) {
            issues.push(ValidationIssue::TierMissingName(index));
        }
        if is_blank(&tier.quantity) {
            issues.push(ValidationIssue::TierMissingQuantity(index));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

pub fn is_submittable(draft: &EventDraft) -> bool {
    validate(draft).is_ok()
}

pub fn combined_start(draft: &EventDraft) -> String {
    format!("{} {}", draft.start_date, draft.start_time)
}

/// `None` unless both end date and end time are filled in.
pub fn combined_end(draft: &EventDraft) -> Option<String> {
    if is_blank(&draft.end_date) || is_blank(&draft.end_time) {
        None
    } else {
        Some(format!("{} {}", draft.end_date, draft.end_time))
    }
}

/// Encodes the draft, its deletion ledger and its pending uploads in wire order.
pub fn encode(draft: &EventDraft) -> Vec<FormField> {
    let mut fields = vec![
        FormField::text(METHOD_OVERRIDE_FIELD, METHOD_OVERRIDE_VALUE),
        FormField::text("title", draft.title.as_str()),
        FormField::text("category", draft.category.as_str()),
        FormField::text("description", draft.description.as_str()),
        FormField::text("start_date", combined_start(draft)),
    ];
    if let Some(end) = combined_end(draft) {
        fields.push(FormField::text("end_date", end));
    }
    fields.push(FormField::text("location", draft.location.as_str()));
    if let Some(lat) = draft.lat {
        fields.push(FormField::text("lat", lat.to_string()));
    }
    if let Some(lng) = draft.lng {
        fields.push(FormField::text("lng", lng.to_string()));
    }

    fields.extend(draft.tags.iter().map(|tag| FormField::text("tags[]", tag.as_str())));
    fields.extend(
        draft
            .media
            .ledger()
            .ids()
            .iter()
            .map(|id| FormField::text("deleted_media_ids[]", id.as_str())),
    );

    for (index, tier) in draft.tiers.iter().enumerate() {
        if let Some(id) = &tier.id {
            fields.push(FormField::text(format!("tickets[{index}][id]"), id.as_str()));
        }
        fields.push(FormField::text(format!("tickets[{index}][type]"), tier.name.as_str()));
        fields.push(FormField::text(format!("tickets[{index}][price]"), tier.price.as_str()));
        fields.push(FormField::text(
            format!("tickets[{index}][quantity]"),
            tier.quantity.as_str(),
        ));
        fields.push(FormField::text(
            format!("tickets[{index}][description]"),
            tier.description.as_str(),
        ));
    }

    fields.extend(draft.media.pending().iter().map(FormField::file));
    fields
}

/// Reads pending files from disk and assembles the outgoing form.
pub async fn into_multipart(fields: Vec<FormField>) -> std::io::Result<Form> {
    let mut form = Form::new();
    for field in fields {
        form = match field.value {
            FieldValue::Text(text) => form.text(field.name, text),
            FieldValue::File {
                path,
                file_name,
                content_type,
            } => {
                let bytes = tokio::fs::read(&path).await?;
                let part = Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&content_type)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;
                form.part(field.name, part)
            }
        };
    }
    Ok(form)
}
