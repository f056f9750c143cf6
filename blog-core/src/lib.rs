//! In-memory state for a blog dashboard: blog and post collections, the
//! services the screens call, and the login gate in front of them.

pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;

pub use application::app::{BlogApp, BlogPosts};
pub use application::form::{BlogForm, PostForm};
pub use application::session::{Credentials, Session};
pub use data::blog_repository::{BlogRepository, BlogStore};
pub use data::observers::StoreEvent;
pub use data::post_repository::{PostRepository, PostStore};
pub use domain::blog::{Blog, BlogChanges};
pub use domain::error::DomainError;
pub use domain::post::Post;
pub use domain::{BlogId, PostId};
