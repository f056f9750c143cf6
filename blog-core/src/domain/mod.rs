pub mod blog;
pub mod error;
pub mod post;

pub type BlogId = u64;
pub type PostId = u64;
