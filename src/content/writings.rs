//! Writing/blog post data.
//!
//! To add a post: drop a markdown file under `data/writing/` and add an
//! entry to [`ALL`] with its metadata and an `include_str!` of the body.

#[derive(Debug, Clone, Copy)]
pub struct WritingPost {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub body: &'static str,
}

pub const ALL: &[WritingPost] = &[
    WritingPost {
        id: "boring-queues",
        title: "In Praise of Boring Queues",
        date: "2025-03-11",
        description: "Why your message broker is probably fine",
        tags: &["kafka", "reliability", "opinion"],
        body: include_str!("../../data/writing/boring-queues.md"),
    },
    WritingPost {
        id: "deploy-time",
        title: "Forty Minutes to Six",
        date: "2024-09-02",
        description: "Anatomy of a deploy pipeline rebuild",
        tags: &["ci", "caching", "case-study"],
        body: include_str!("../../data/writing/deploy-time.md"),
    },
];
