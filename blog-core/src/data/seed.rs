//! The dataset every session starts with.

use crate::data::blog_repository::BlogStore;
use crate::data::post_repository::PostStore;
use crate::domain::blog::Blog;
use crate::domain::post::Post;

pub fn seed_blogs() -> Vec<Blog> {
    vec![
        Blog::new(
            1,
            "Tech Blog".into(),
            "tech-blog".into(),
            "A blog about technology and programming.".into(),
        )
        .with_category("Technology")
        .with_theme("Modern"),
        Blog::new(
            2,
            "Travel Adventures".into(),
            "travel-adventures".into(),
            "Documenting my travels around the world.".into(),
        )
        .with_category("Travel")
        .with_theme("Explorer"),
    ]
}

pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new(
            1,
            1,
            "Getting Started with Kotlin".into(),
            "2023-06-15".into(),
            "Kotlin is a modern programming language that makes developers happier. \
             It's concise, safe, interoperable with Java, and offers many great features."
                .into(),
        ),
        Post::new(
            2,
            1,
            "Jetpack Compose Basics".into(),
            "2023-07-22".into(),
            "Jetpack Compose is Android's modern toolkit for building native UI. \
             It simplifies and accelerates UI development on Android with less code and powerful tools."
                .into(),
        ),
        Post::new(
            3,
            2,
            "My Trip to Paris".into(),
            "2023-05-10".into(),
            "Paris, the City of Light, offered amazing cuisine, beautiful architecture, \
             and unforgettable experiences. The Eiffel Tower was breathtaking!"
                .into(),
        ),
    ]
}

impl BlogStore {
    pub fn seeded() -> Self {
        Self::with_blogs(seed_blogs())
    }
}

impl PostStore {
    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }
}
