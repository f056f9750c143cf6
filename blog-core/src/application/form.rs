use crate::domain::blog::BlogChanges;
use crate::domain::error::DomainError;

/// Blog fields as typed into the create/edit screen.
#[derive(Debug, Clone, Default)]
pub struct BlogForm {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub logo_url: String,
    pub category: String,
    pub theme: String,
}

impl BlogForm {
    /// Checks the required fields and turns blank optional fields into `None`.
    ///
    /// Values are kept exactly as typed, surrounding whitespace included.
    pub fn validate(self) -> Result<BlogChanges, DomainError> {
        require("name", &self.name)?;
        require("slug", &self.slug)?;
        require("description", &self.description)?;

        Ok(BlogChanges {
            name: self.name,
            slug: self.slug,
            description: self.description,
            logo_url: non_blank(self.logo_url),
            category: non_blank(self.category),
            theme: non_blank(self.theme),
        })
    }
}

/// Post fields as typed into the edit screen.
#[derive(Debug, Clone, Default)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPost {
    pub title: String,
    pub content: String,
}

impl PostForm {
    pub fn validate(self) -> Result<ValidPost, DomainError> {
        require("title", &self.title)?;
        require("content", &self.content)?;

        Ok(ValidPost {
            title: self.title,
            content: self.content,
        })
    }
}

fn require(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(())
}

/// `None` for empty or whitespace-only input.
pub fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
