use tracing::{debug, info};

use crate::data;
use crate::data::observers::{Observers, StoreEvent};
use crate::domain::post::Post;
use crate::domain::{BlogId, PostId};

pub type PostEvent = StoreEvent<PostId>;

/// Ordered post collection. `blog_id` is a plain value here, never checked
/// against any blog collection.
pub trait PostRepository {
    /// Posts in insertion order.
    fn list(&self) -> &[Post];
    fn find(&self, id: PostId) -> Option<&Post>;
    fn list_by_blog(&self, blog_id: BlogId) -> Vec<Post> {
        self.list()
            .iter()
            .filter(|post| post.blog_id == blog_id)
            .cloned()
            .collect()
    }
    /// Appends `post` as is. Ids are not checked for uniqueness.
    fn add(&mut self, post: Post);
    /// Replaces title and content of the post with `id`. No-op if absent.
    fn update(&mut self, id: PostId, title: String, content: String);
    /// Removes the first post with `id`. No-op if absent.
    fn delete(&mut self, id: PostId);
    /// One past the highest id currently stored, or `1` when empty.
    ///
    /// Ids freed by deleting the newest post can be handed out again, ids
    /// still stored never are.
    fn next_id(&self) -> PostId {
        data::next_id(self.list().iter().map(|post| post.id))
    }
    fn revision(&self) -> u64;
    fn subscribe(&mut self, callback: Box<dyn FnMut(&PostEvent)>);
}

#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    observers: Observers<PostEvent>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            observers: Observers::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl PostRepository for PostStore {
    fn list(&self) -> &[Post] {
        &self.posts
    }

    fn find(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    fn add(&mut self, post: Post) {
        let (id, blog_id) = (post.id, post.blog_id);
        self.posts.push(post);
        info!(post_id = id, blog_id, "post added");
        self.observers.notify(StoreEvent::Added(id));
    }

    fn update(&mut self, id: PostId, title: String, content: String) {
        let Some(index) = self.posts.iter().position(|post| post.id == id) else {
            debug!(post_id = id, "update skipped, no such post");
            return;
        };

        self.posts[index] = Post {
            title,
            content,
            ..self.posts[index].clone()
        };

        info!(post_id = id, "post updated");
        self.observers.notify(StoreEvent::Updated(id));
    }

    fn delete(&mut self, id: PostId) {
        let Some(index) = self.posts.iter().position(|post| post.id == id) else {
            debug!(post_id = id, "delete skipped, no such post");
            return;
        };

        self.posts.remove(index);
        info!(post_id = id, "post deleted");
        self.observers.notify(StoreEvent::Deleted(id));
    }

    fn revision(&self) -> u64 {
        self.observers.revision()
    }

    fn subscribe(&mut self, callback: Box<dyn FnMut(&PostEvent)>) {
        self.observers.subscribe(callback);
    }
}
