use derive_more::Display;
use serde::Serialize;

use super::BlogId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
#[display("Blog {{ id: {}, name: {}, slug: {} }}", id, name, slug)]
pub struct Blog {
    pub id: BlogId,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Blog {
    pub fn new(id: BlogId, name: String, slug: String, description: String) -> Self {
        Self {
            id,
            name,
            slug,
            description,
            logo_url: None,
            category: None,
            theme: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn with_logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }

    /// Overwrites every field but `id` with `changes`.
    pub fn apply(&mut self, changes: BlogChanges) {
        self.name = changes.name;
        self.slug = changes.slug;
        self.description = changes.description;
        self.logo_url = changes.logo_url;
        self.category = changes.category;
        self.theme = changes.theme;
    }
}

/// The writable fields of a [`Blog`].
///
/// An update always replaces all of them: `None` clears an optional field,
/// it never means "keep the previous value".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlogChanges {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub logo_url: Option<String>,
    pub category: Option<String>,
    pub theme: Option<String>,
}

impl BlogChanges {
    pub fn into_blog(self, id: BlogId) -> Blog {
        Blog {
            id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            logo_url: self.logo_url,
            category: self.category,
            theme: self.theme,
        }
    }
}
