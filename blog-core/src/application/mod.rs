pub mod app;
pub mod blog_service;
pub mod form;
pub mod post_service;
pub mod session;
