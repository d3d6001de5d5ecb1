//! Blog / writing posts.

use serde::Serialize;

/// A writing post as the terminal sees it: display fields only.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Post {
    pub title: &'static str,
    pub slug: &'static str,
    pub tags: &'static [&'static str],
    /// `false` entries exist in the table but never reach terminal output.
    pub public: bool,
}

/// All posts, newest-style ordering as published on the site.
pub static POSTS: &[Post] = &[
    Post {
        title: "React Performance Optimization: Beyond the Basics",
        slug: "react-performance-optimization",
        tags: &["React", "Performance", "JavaScript", "Frontend"],
        public: true,
    },
    Post {
        title: "From Fear to Flow: My Rock Climbing Journey",
        slug: "climbing-fear-to-flow",
        tags: &["Personal", "Rock Climbing", "Growth", "Mindset", "Flow State"],
        public: true,
    },
    Post {
        title: "Daily Reflection: Progress and Setbacks",
        slug: "daily-reflection-march-15",
        tags: &["Daily Life", "Reflection", "Gratitude", "Personal Growth"],
        public: true,
    },
    Post {
        title: "Building Scalable APIs with Node.js and TypeScript",
        slug: "building-scalable-apis",
        tags: &["Node.js", "TypeScript", "API", "Backend", "Architecture"],
        public: true,
    },
    Post {
        title: "The Future of Web Development (Medium)",
        slug: "future-web-development-medium",
        tags: &["Web Development", "Future", "Technology", "Trends"],
        public: true,
    },
    Post {
        title: "Dealing with Imposter Syndrome",
        slug: "imposter-syndrome-private",
        tags: &["Mental Health", "Career", "Self-Doubt", "Growth"],
        public: false,
    },
];
