use chrono::Local;
use derive_more::Display;
use serde::Serialize;

use super::{BlogId, PostId};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
#[display("Post {{ id: {}, title: {}, blog_id: {} }}", id, title, blog_id)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub blog_id: BlogId,
    /// Free-form publication date, displayed as is.
    pub date: String,
    pub content: String,
}

impl Post {
    pub fn new(id: PostId, blog_id: BlogId, title: String, date: String, content: String) -> Self {
        Self {
            id,
            title,
            blog_id,
            date,
            content,
        }
    }

    /// A post dated today on the local clock.
    pub fn dated_today(id: PostId, blog_id: BlogId, title: String, content: String) -> Self {
        let date = Local::now().format(DATE_FORMAT).to_string();
        Self::new(id, blog_id, title, date, content)
    }
}
