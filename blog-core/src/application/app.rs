//! Everything the screens call, behind the login gate.

use crate::application::blog_service::BlogService;
use crate::application::form::{BlogForm, PostForm};
use crate::application::post_service::PostService;
use crate::application::session::{Credentials, Session};
use crate::data::blog_repository::{BlogRepository, BlogStore};
use crate::data::post_repository::{PostRepository, PostStore};
use crate::domain::blog::Blog;
use crate::domain::error::DomainError;
use crate::domain::post::Post;
use crate::domain::{BlogId, PostId};

/// A blog together with the posts listed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPosts {
    pub blog: Blog,
    pub posts: Vec<Post>,
}

pub struct BlogApp<B: BlogRepository = BlogStore, P: PostRepository = PostStore> {
    session: Session,
    blogs: BlogService<B>,
    posts: PostService<P>,
}

impl BlogApp {
    /// A signed-out session over the seed dataset.
    pub fn seeded() -> Self {
        Self::new(BlogStore::seeded(), PostStore::seeded())
    }

    pub fn empty() -> Self {
        Self::new(BlogStore::new(), PostStore::new())
    }
}

impl<B, P> BlogApp<B, P>
where
    B: BlogRepository,
    P: PostRepository,
{
    pub fn new(blogs: B, posts: P) -> Self {
        Self {
            session: Session::default(),
            blogs: BlogService::new(blogs),
            posts: PostService::new(posts),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn blog_service(&self) -> &BlogService<B> {
        &self.blogs
    }

    pub fn post_service(&self) -> &PostService<P> {
        &self.posts
    }

    pub fn sign_in(&mut self, credentials: Credentials) {
        self.session.sign_in(credentials);
    }

    pub fn sign_out(&mut self) {
        self.session.sign_out();
    }

    fn ensure_signed_in(&self) -> Result<(), DomainError> {
        if self.session.is_signed_in() {
            Ok(())
        } else {
            Err(DomainError::Unauthorized)
        }
    }

    pub fn dashboard(&self) -> Result<&[Blog], DomainError> {
        self.ensure_signed_in()?;
        Ok(self.blogs.list_blogs())
    }

    pub fn blog(&self, id: BlogId) -> Result<Blog, DomainError> {
        self.ensure_signed_in()?;
        self.blogs.get_blog(id)
    }

    pub fn create_blog(&mut self, form: BlogForm) -> Result<Blog, DomainError> {
        self.ensure_signed_in()?;
        self.blogs.create_blog(form)
    }

    pub fn new_blog_draft(&mut self) -> Result<Blog, DomainError> {
        self.ensure_signed_in()?;
        Ok(self.blogs.create_blog_draft())
    }

    pub fn edit_blog(&mut self, id: BlogId, form: BlogForm) -> Result<Blog, DomainError> {
        self.ensure_signed_in()?;
        self.blogs.update_blog(id, form)
    }

    /// Posts of the deleted blog stay in the post collection.
    pub fn delete_blog(&mut self, id: BlogId) -> Result<bool, DomainError> {
        self.ensure_signed_in()?;
        Ok(self.blogs.delete_blog(id))
    }

    pub fn blog_posts(&self, blog_id: BlogId) -> Result<BlogPosts, DomainError> {
        self.ensure_signed_in()?;
        let blog = self.blogs.get_blog(blog_id)?;
        let posts = self.posts.posts_for_blog(blog_id);
        Ok(BlogPosts { blog, posts })
    }

    pub fn new_draft(&mut self, blog_id: BlogId) -> Result<Post, DomainError> {
        self.ensure_signed_in()?;
        self.blogs.get_blog(blog_id)?;
        Ok(self.posts.create_draft(blog_id))
    }

    pub fn create_post(&mut self, blog_id: BlogId, form: PostForm) -> Result<Post, DomainError> {
        self.ensure_signed_in()?;
        self.blogs.get_blog(blog_id)?;
        self.posts.create_post(blog_id, form)
    }

    pub fn post(&self, blog_id: BlogId, post_id: PostId) -> Result<Post, DomainError> {
        self.ensure_signed_in()?;
        self.blogs.get_blog(blog_id)?;
        self.posts.get_post(post_id)
    }

    pub fn edit_post(
        &mut self,
        blog_id: BlogId,
        post_id: PostId,
        form: PostForm,
    ) -> Result<Post, DomainError> {
        self.post(blog_id, post_id)?;
        self.posts.update_post(post_id, form)
    }

    pub fn delete_post(&mut self, post_id: PostId) -> Result<bool, DomainError> {
        self.ensure_signed_in()?;
        Ok(self.posts.delete_post(post_id))
    }
}
