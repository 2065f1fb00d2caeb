// SPDX-License-Identifier: MPL-2.0
//! User-entered form data and its validation.
//!
//! Validation runs before any remote call. A failed field is reported as
//! [`Field`] so the view can show a localized message for it.

use super::identity::age_bounds;

/// Form fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Title,
    Description,
    Comment,
}

impl Field {
    /// Returns the i18n key describing what is wrong with the field.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Field::Name => "validation-name",
            Field::Age => "validation-age",
            Field::Title => "validation-title",
            Field::Description => "validation-description",
            Field::Comment => "validation-comment",
        }
    }
}

/// Raw onboarding input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingForm {
    pub name: String,
    pub age: String,
}

/// Onboarding input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub age: u8,
}

impl OnboardingForm {
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
        }
    }

    /// Trims the name and parses the age into the accepted range.
    pub fn validate(&self) -> Result<Profile, Field> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Field::Name);
        }
        let age: u8 = self.age.trim().parse().map_err(|_| Field::Age)?;
        if !(age_bounds::MIN..=age_bounds::MAX).contains(&age) {
            return Err(Field::Age);
        }
        Ok(Profile {
            name: name.to_string(),
            age,
        })
    }
}

/// Title and description of a new post (recipe or activity).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Both fields are required. Values are sent as typed, not trimmed.
    pub fn validate(&self) -> Result<(), Field> {
        if self.title.trim().is_empty() {
            return Err(Field::Title);
        }
        if self.description.trim().is_empty() {
            return Err(Field::Description);
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }
}

/// Content of a new comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub content: String,
}

impl CommentDraft {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn validate(&self) -> Result<(), Field> {
        if self.content.trim().is_empty() {
            Err(Field::Comment)
        } else {
            Ok(())
        }
    }
}
