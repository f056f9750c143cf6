use tracing::{info, instrument};

use crate::application::form::BlogForm;
use crate::data::blog_repository::BlogRepository;
use crate::domain::BlogId;
use crate::domain::blog::Blog;
use crate::domain::error::DomainError;

pub struct BlogService<R: BlogRepository> {
    repo: R,
}

impl<R> BlogService<R>
where
    R: BlogRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn list_blogs(&self) -> &[Blog] {
        self.repo.list()
    }

    pub fn get_blog(&self, id: BlogId) -> Result<Blog, DomainError> {
        self.repo
            .find(id)
            .cloned()
            .ok_or(DomainError::BlogNotFound(id))
    }

    /// Adds a placeholder blog named after its id, for filling in later.
    #[instrument(skip(self))]
    pub fn create_blog_draft(&mut self) -> Blog {
        let id = self.repo.next_id();
        let blog = Blog::new(
            id,
            format!("New Blog {id}"),
            format!("new-blog-{id}"),
            "Description of new blog".into(),
        )
        .with_category("Uncategorized")
        .with_theme("Default");
        self.repo.add(blog.clone());
        blog
    }

    #[instrument(skip(self))]
    pub fn create_blog(&mut self, form: BlogForm) -> Result<Blog, DomainError> {
        let blog = form.validate()?.into_blog(self.repo.next_id());
        self.repo.add(blog.clone());
        Ok(blog)
    }

    #[instrument(skip(self))]
    pub fn update_blog(&mut self, id: BlogId, form: BlogForm) -> Result<Blog, DomainError> {
        let changes = form.validate()?;
        if self.repo.find(id).is_none() {
            return Err(DomainError::BlogNotFound(id));
        }

        self.repo.update(id, changes);
        self.get_blog(id)
    }

    /// Deletes the blog and reports whether anything was removed.
    ///
    /// Posts of the blog are left where they are.
    #[instrument(skip(self))]
    pub fn delete_blog(&mut self, id: BlogId) -> bool {
        let existed = self.repo.find(id).is_some();
        self.repo.delete(id);
        if existed {
            info!(blog_id = id, "Blog deleted successfully");
        }
        existed
    }
}
