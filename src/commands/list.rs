//! List published posts from the content source

use anyhow::Result;

use crate::content::Post;
use crate::Quill;

/// Fetch and print all published posts
pub async fn run(quill: &Quill) -> Result<()> {
    let pages = quill.notion.query_posts().await?;
    let posts: Vec<Post> = pages.iter().filter_map(Post::from_value).collect();

    println!("{} - Posts ({}):", quill.config.title, posts.len());
    for post in &posts {
        println!(
            "  {} - {} [{}]",
            post.date.format("%Y-%m-%d"),
            post.title,
            post.slug
        );
    }

    Ok(())
}
