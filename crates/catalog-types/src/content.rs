//! # Content Record
//!
//! This module defines the catalog's content record and its patch form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog content record.
///
/// Records are immutable-after-construction values: every mutation path
/// produces a fresh record via [`Content::apply`] rather than editing in
/// place. The `id` is assigned once at creation and never reassigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Unique identifier, stable for the record's lifetime
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Display subtitle
    pub subtitle: String,
    /// Free-text description
    pub description: String,
    /// URL of the cover image
    pub image_url: String,
    /// Non-negative duration; the unit is caller convention
    pub duration: u32,
    /// Start of the scheduling window, if set
    pub start_time: Option<DateTime<Utc>>,
    /// End of the scheduling window, if set
    pub end_time: Option<DateTime<Utc>>,
    /// Ordered genre names; genre edits keep this free of
    /// case-insensitive duplicates
    pub genre_list: Vec<String>,
}

impl Content {
    /// Construct a new record from a patch, filling absent fields with
    /// their defaults.
    pub fn from_patch(id: Uuid, patch: ContentPatch) -> Self {
        Self {
            id,
            title: patch.title.unwrap_or_default(),
            subtitle: patch.subtitle.unwrap_or_default(),
            description: patch.description.unwrap_or_default(),
            image_url: patch.image_url.unwrap_or_default(),
            duration: patch.duration.unwrap_or_default(),
            start_time: patch.start_time,
            end_time: patch.end_time,
            genre_list: patch.genre_list.unwrap_or_default(),
        }
    }

    /// Produce the record that results from applying `patch`: fields
    /// present in the patch replace the current value, absent fields are
    /// left unchanged. The id is never touched.
    pub fn apply(&self, patch: ContentPatch) -> Self {
        Self {
            id: self.id,
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            subtitle: patch.subtitle.unwrap_or_else(|| self.subtitle.clone()),
            description: patch
                .description
                .unwrap_or_else(|| self.description.clone()),
            image_url: patch.image_url.unwrap_or_else(|| self.image_url.clone()),
            duration: patch.duration.unwrap_or(self.duration),
            start_time: patch.start_time.or(self.start_time),
            end_time: patch.end_time.or(self.end_time),
            genre_list: patch.genre_list.unwrap_or_else(|| self.genre_list.clone()),
        }
    }
}

/// Partial representation of a [`Content`] record.
///
/// Every field is optional: on create, `None` means "use the default";
/// on update, `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub duration: Option<u32>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub genre_list: Option<Vec<String>>,
}

impl ContentPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image URL
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the scheduling window
    pub fn with_window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Set the genre list
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genre_list = Some(genres.into_iter().map(Into::into).collect());
        self
    }
}
