//! Observable contract of the blog and post collections.

use blog_core::{
    Blog, BlogChanges, BlogRepository, BlogStore, Post, PostRepository, PostStore, StoreEvent,
};
use claims::assert_some;
use std::cell::RefCell;
use std::rc::Rc;

fn blog(id: u64, name: &str) -> Blog {
    Blog::new(id, name.into(), name.to_lowercase(), "d".into())
}

fn post(id: u64, blog_id: u64) -> Post {
    Post::new(id, blog_id, format!("Post {id}"), "someday".into(), String::new())
}

fn blog_ids(store: &BlogStore) -> Vec<u64> {
    store.list().iter().map(|blog| blog.id).collect()
}

fn post_ids(posts: &[Post]) -> Vec<u64> {
    posts.iter().map(|post| post.id).collect()
}

#[test]
fn seed_dataset_has_two_blogs_and_three_posts() {
    let blogs = BlogStore::seeded();
    let posts = PostStore::seeded();

    assert_eq!(blog_ids(&blogs), vec![1, 2]);
    assert_eq!(blogs.list()[0].name, "Tech Blog");
    assert_eq!(blogs.list()[1].theme.as_deref(), Some("Explorer"));
    assert_eq!(post_ids(posts.list()), vec![1, 2, 3]);
    assert_eq!(post_ids(&posts.list_by_blog(1)), vec![1, 2]);
    assert_eq!(posts.list()[2].date, "2023-05-10");
}

#[test]
fn adding_a_duplicate_id_keeps_both_rows() {
    let mut store = BlogStore::new();
    store.add(blog(1, "A"));
    store.add(blog(1, "B"));

    assert_eq!(blog_ids(&store), vec![1, 1]);
}

#[test]
fn list_order_is_call_order() {
    let mut blogs = BlogStore::new();
    let mut posts = PostStore::new();
    for id in [3, 1, 2] {
        blogs.add(blog(id, "x"));
        posts.add(post(id, 1));
    }

    assert_eq!(blog_ids(&blogs), vec![3, 1, 2]);
    assert_eq!(post_ids(posts.list()), vec![3, 1, 2]);
}

#[test]
fn update_is_a_full_overwrite() {
    let mut store = BlogStore::with_blogs(vec![
        Blog::new(1, "A".into(), "a".into(), "d".into()).with_logo_url("logo.png"),
    ]);

    store.update(
        1,
        BlogChanges {
            name: "B".into(),
            slug: "a".into(),
            description: "d".into(),
            logo_url: None,
            category: None,
            theme: None,
        },
    );

    let updated = assert_some!(store.find(1));
    assert_eq!(updated.name, "B");
    assert_eq!(updated.logo_url, None);
}

#[test]
fn update_of_missing_id_changes_nothing() {
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
}

#[test]
fn delete_removes_exactly_one_post() {
    let mut store = PostStore::with_posts(vec![post(1, 7), post(2, 7)]);
    store.delete(1);
    assert_eq!(post_ids(&store.list_by_blog(7)), vec![2]);
}

#[test]
fn next_id_is_a_high_water_mark() {
    let mut store = PostStore::seeded();
    assert_eq!(store.next_id(), 4);

    store.delete(3);
    assert_eq!(store.next_id(), 3);
}

#[test]
fn deleting_a_blog_orphans_its_posts() {
    let mut blogs = BlogStore::seeded();
    let posts = PostStore::seeded();

    blogs.delete(1);

    assert!(blogs.find(1).is_none());
    assert_eq!(post_ids(&posts.list_by_blog(1)), vec![1, 2]);
}

#[test]
fn revision_tracks_applied_mutations() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut store = BlogStore::seeded();
    let sink = Rc::clone(&events);
    store.subscribe(Box::new(move |event: &StoreEvent<u64>| sink.borrow_mut().push(*event)));

    store.delete(5);
    store.add(blog(3, "C"));
    store.delete(1);

    assert_eq!(store.revision(), 2);
    assert_eq!(
        *events.borrow(),
        vec![StoreEvent::Added(3), StoreEvent::Deleted(1)]
    );
}
