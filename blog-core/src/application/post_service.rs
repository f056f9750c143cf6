use tracing::{info, instrument};

use crate::application::form::PostForm;
use crate::data::post_repository::PostRepository;
use crate::domain::error::DomainError;
use crate::domain::post::Post;
use crate::domain::{BlogId, PostId};

pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R> PostService<R>
where
    R: PostRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn list_posts(&self) -> &[Post] {
        self.repo.list()
    }

    pub fn posts_for_blog(&self, blog_id: BlogId) -> Vec<Post> {
        self.repo.list_by_blog(blog_id)
    }

    pub fn get_post(&self, id: PostId) -> Result<Post, DomainError> {
        self.repo
            .find(id)
            .cloned()
            .ok_or(DomainError::PostNotFound(id))
    }

    /// Adds a placeholder post titled after its id, with no content.
    #[instrument(skip(self))]
    pub fn create_draft(&mut self, blog_id: BlogId) -> Post {
        let id = self.repo.next_id();
        let post = Post::dated_today(id, blog_id, format!("New Post {id}"), String::new());
        self.repo.add(post.clone());
        post
    }

    #[instrument(skip(self))]
    pub fn create_post(&mut self, blog_id: BlogId, form: PostForm) -> Result<Post, DomainError> {
        let valid = form.validate()?;
        let post = Post::dated_today(self.repo.next_id(), blog_id, valid.title, valid.content);
        self.repo.add(post.clone());
        Ok(post)
    }

    #[instrument(skip(self))]
    pub fn update_post(&mut self, id: PostId, form: PostForm) -> Result<Post, DomainError> {
        let valid = form.validate()?;
        if self.repo.find(id).is_none() {
            return Err(DomainError::PostNotFound(id));
        }

        self.repo.update(id, valid.title, valid.content);
        self.get_post(id)
    }

    #[instrument(skip(self))]
    pub fn delete_post(&mut self, id: PostId) -> bool {
        let existed = self.repo.find(id).is_some();
        self.repo.delete(id);
        if existed {
            info!(post_id = id, "Post deleted successfully");
        }
        existed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::post_repository::PostStore;
    use crate::domain::post::DATE_FORMAT;
    use chrono::NaiveDate;
    use claims::{assert_err, assert_ok};

    fn form(title: &str, content: &str) -> PostForm {
        PostForm {
            title: title.into(),
            content: content.into(),
        }
    }

    #[test]
    fn draft_is_titled_after_its_id_and_dated_today() {
        let mut service = PostService::new(PostStore::seeded());

        let draft = service.create_draft(2);

        assert_eq!(draft.id, 4);
        assert_eq!(draft.title, "New Post 4");
        assert_eq!(draft.blog_id, 2);
        assert!(draft.content.is_empty());
        assert_ok!(NaiveDate::parse_from_str(&draft.date, DATE_FORMAT));
    }

    #[test]
    fn create_post_uses_the_next_id() {
        let mut service = PostService::new(PostStore::new());

        let first = assert_ok!(service.create_post(1, form("One", "1")));
        let second = assert_ok!(service.create_post(1, form("Two", "2")));

        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(service.posts_for_blog(1), vec![first, second]);
    }

    #[test]
    fn create_post_rejects_blank_title() {
        let mut service = PostService::new(PostStore::new());
        let err = assert_err!(service.create_post(1, form(" ", "body")));
        assert_eq!(err, DomainError::MissingField("title"));
        assert!(service.list_posts().is_empty());
        assert_eq!(service.repo().revision(), 0);
    }

    #[test]
    fn update_post_keeps_date_and_blog() {
        let mut service = PostService::new(PostStore::seeded());

        let updated = assert_ok!(service.update_post(3, form("Paris again", "Still lovely.")));

        assert_eq!(updated.title, "Paris again");
        assert_eq!(updated.content, "Still lovely.");
        assert_eq!(updated.blog_id, 2);
        assert_eq!(updated.date, "2023-05-10");
    }

    #[test]
    fn update_of_unknown_post_is_not_found() {
        let mut service = PostService::new(PostStore::seeded());
        let err = assert_err!(service.update_post(10, form("t", "c")));
        assert_eq!(err, DomainError::PostNotFound(10));
    }

    #[test]
    fn delete_reports_whether_a_post_was_removed() {
        let mut service = PostService::new(PostStore::seeded());
        assert!(service.delete_post(1));
        assert!(!service.delete_post(1));
        assert_eq!(service.list_posts().len(), 2);
    }
}
