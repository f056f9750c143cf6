use thiserror::Error;

use super::{BlogId, PostId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("blog not found: {0}")]
    BlogNotFound(BlogId),
    #[error("post not found: {0}")]
    PostNotFound(PostId),
    #[error("{0} must not be blank")]
    MissingField(&'static str),
    #[error("sign in to continue to your blogs")]
    Unauthorized,
}
