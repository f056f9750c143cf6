use tracing::{debug, info};

use crate::data;
use crate::data::observers::{Observers, StoreEvent};
use crate::domain::BlogId;
use crate::domain::blog::{Blog, BlogChanges};

pub type BlogEvent = StoreEvent<BlogId>;

/// Ordered blog collection. Lookups are by id; a missing id is never an error.
pub trait BlogRepository {
    /// Blogs in insertion order.
    fn list(&self) -> &[Blog];
    fn find(&self, id: BlogId) -> Option<&Blog>;
    /// Appends `blog` as is. Ids are not checked for uniqueness.
    fn add(&mut self, blog: Blog);
    /// Replaces every writable field of the blog with `id`. No-op if absent.
    fn update(&mut self, id: BlogId, changes: BlogChanges);
    /// Removes the first blog with `id`. No-op if absent.
    fn delete(&mut self, id: BlogId);
    /// One past the highest id currently stored, or `1` when empty.
    fn next_id(&self) -> BlogId {
        data::next_id(self.list().iter().map(|blog| blog.id))
    }
    fn revision(&self) -> u64;
    fn subscribe(&mut self, callback: Box<dyn FnMut(&BlogEvent)>);
}

#[derive(Debug, Default)]
pub struct BlogStore {
    blogs: Vec<Blog>,
    observers: Observers<BlogEvent>,
}

impl BlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blogs(blogs: Vec<Blog>) -> Self {
        Self {
            blogs,
            observers: Observers::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.blogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty()
    }
}

impl BlogRepository for BlogStore {
    fn list(&self) -> &[Blog] {
        &self.blogs
    }

    fn find(&self, id: BlogId) -> Option<&Blog> {
        self.blogs.iter().find(|blog| blog.id == id)
    }

    fn add(&mut self, blog: Blog) {
        let id = blog.id;
        self.blogs.push(blog);
        info!(blog_id = id, "blog added");
        self.observers.notify(StoreEvent::Added(id));
    }

    fn update(&mut self, id: BlogId, changes: BlogChanges) {
        let Some(index) = self.blogs.iter().position(|blog| blog.id == id) else {
            debug!(blog_id = id, "update skipped, no such blog");
            return;
        };

        let mut blog = self.blogs[index].clone();
        blog.apply(changes);
        self.blogs[index] = blog;

        info!(blog_id = id, "blog updated");
        self.observers.notify(StoreEvent::Updated(id));
    }

    fn delete(&mut self, id: BlogId) {
        let Some(index) = self.blogs.iter().position(|blog| blog.id == id) else {
            debug!(blog_id = id, "delete skipped, no such blog");
            return;
        };

        self.blogs.remove(index);
        info!(blog_id = id, "blog deleted");
        self.observers.notify(StoreEvent::Deleted(id));
    }

    fn revision(&self) -> u64 {
        self.observers.revision()
    }

    fn subscribe(&mut self, callback: Box<dyn FnMut(&BlogEvent)>) {
        self.observers.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some};

    fn blog(id: BlogId, name: &str) -> Blog {
        Blog::new(id, name.into(), name.to_lowercase(), format!("{name} description"))
    }

    fn ids(store: &BlogStore) -> Vec<BlogId> {
        store.list().iter().map(|blog| blog.id).collect()
    }

    #[test]
    fn list_keeps_insertion_order() {
        let mut store = BlogStore::new();
        store.add(blog(3, "C"));
        store.add(blog(1, "A"));
        store.add(blog(2, "B"));

        assert_eq!(ids(&store), vec![3, 1, 2]);
    }

    #[test]
    fn duplicate_ids_are_both_kept() {
        let mut store = BlogStore::new();
        store.add(blog(1, "First"));
        store.add(blog(1, "Second"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].name, "First");
        assert_eq!(store.list()[1].name, "Second");
    }

    #[test]
    fn update_overwrites_every_writable_field() {
        let mut store = BlogStore::with_blogs(vec![
            Blog::new(1, "A".into(), "a".into(), "d".into())
                .with_logo_url("https://example.com/logo.png")
                .with_category("Tech"),
        ]);

        store.update(
            1,
            BlogChanges {
                name: "B".into(),
                slug: "a".into(),
                description: "d".into(),
                ..Default::default()
            },
        );

        let updated = assert_some!(store.find(1));
        assert_eq!(updated.name, "B");
        assert_none!(updated.logo_url.as_ref());
        assert_none!(updated.category.as_ref());
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn update_keeps_position_in_list() {
        let mut store = BlogStore::with_blogs(vec![blog(1, "A"), blog(2, "B"), blog(3, "C")]);

        store.update(
            2,
            BlogChanges {
                name: "Renamed".into(),
                slug: "renamed".into(),
                description: "x".into(),
                ..Default::default()
            },
        );

        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.list()[1].name, "Renamed");
    }

    #[test]
    fn update_on_missing_id_is_a_no_op() {
        let mut store = BlogStore::with_blogs(vec![blog(1, "A"), blog(2, "B")]);
        let before = store.list().to_vec();

        store.update(
            999,
            BlogChanges {
                name: "Z".into(),
                ..Default::default()
            },
        );

        assert_eq!(store.list(), before.as_slice());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn next_id_follows_the_highest_id() {
        let mut store = BlogStore::new();
        assert_eq!(store.next_id(), 1);

        store.add(blog(5, "E"));
        store.add(blog(2, "B"));
        assert_eq!(store.next_id(), 6);
    }

    #[test]
    fn next_id_skips_ids_in_use_once_the_maximum_is_taken() {
        let store = BlogStore::with_blogs(vec![blog(u64::MAX, "Max"), blog(1, "A")]);
        assert_eq!(store.next_id(), 2);
    }

    #[test]
    fn delete_removes_only_the_first_match() {
        let mut store = BlogStore::with_blogs(vec![blog(1, "A"), blog(2, "B"), blog(1, "Dup")]);

        store.delete(1);

        assert_eq!(ids(&store), vec![2, 1]);
        assert_eq!(store.list()[1].name, "Dup");
    }

    #[test]
    fn delete_on_missing_id_is_a_no_op() {
        let mut store = BlogStore::with_blogs(vec![blog(1, "A")]);
        store.delete(42);

        assert_eq!(ids(&store), vec![1]);
        assert_eq!(store.revision(), 0);
    }
}
