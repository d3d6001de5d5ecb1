//! Builds the fixed portfolio site filesystem.
//!
//! Directory listings and the hand-written files are literal; the `.json`
//! files under `/collections` and `/goals` are generated by serializing the
//! content tables, so the file view and the listing commands can never
//! drift apart.

use folio_content::{ContentLibrary, Priority};
use folio_types::error::Result;
use folio_vfs::SiteFs;
use serde::Serialize;
use serde_json::json;

/// Gold coins granted before any goal was completed.
const STARTING_BONUS: u32 = 2;

/// Build the site filesystem from the content tables.
pub fn site_fs(content: &ContentLibrary) -> Result<SiteFs> {
    let mut fs = SiteFs::new();

    fs.add_dir(
        "/",
        &[
            "projects/",
            "blog/",
            "adventures/",
            "goals/",
            "collections/",
            "contact.txt",
            "README.md",
        ],
    );
    fs.add_dir(
        "/projects",
        &[
            "portfolio.rs",
            "saas-app/",
            "api-gateway/",
            "mobile-app/",
            "contributions/",
        ],
    );
    fs.add_dir("/blog", &["technical/", "personal/", "tutorials/", "archived/"]);
    fs.add_dir(
        "/adventures",
        &["climbing/", "kayaking/", "hiking/", "photos/"],
    );
    fs.add_dir(
        "/goals",
        &[
            "completed.json",
            "in-progress.json",
            "future.json",
            "coins.json",
        ],
    );
    fs.add_dir("/collections", &["anime.json", "books.json", "music.json"]);

    fs.add_file("/README.md", readme_lines());
    fs.add_file("/contact.txt", contact_lines());
    fs.add_file("/projects/portfolio.rs", portfolio_lines());

    fs.add_file("/collections/anime.json", json_lines(&content.anime)?);
    fs.add_file("/collections/books.json", json_lines(&content.books)?);
    fs.add_file("/collections/music.json", json_lines(&content.albums)?);

    let completed = content.completed_goals();
    let earned = content.gold_earned();
    fs.add_file(
        "/goals/completed.json",
        json_lines(&json!({
            "completed_goals": completed,
            "total_gold": earned + STARTING_BONUS,
        }))?,
    );

    let in_progress: Vec<_> = content
        .pending_goals()
        .into_iter()
        .filter(|g| g.priority == Priority::High)
        .collect();
    fs.add_file("/goals/in-progress.json", json_lines(&in_progress)?);

    let future: Vec<_> = content
        .pending_goals()
        .into_iter()
        .filter(|g| g.priority == Priority::Medium)
        .collect();
    fs.add_file("/goals/future.json", json_lines(&future)?);

    fs.add_file(
        "/goals/coins.json",
        json_lines(&json!({
            "starting_bonus": STARTING_BONUS,
            "earned": earned,
            "balance": earned + STARTING_BONUS,
        }))?,
    );

    Ok(fs)
}

/// Pretty-print a value as JSON and split it into file lines.
fn json_lines<T: Serialize>(value: &T) -> Result<Vec<String>> {
    Ok(serde_json::to_string_pretty(value)?
        .lines()
        .map(str::to_string)
        .collect())
}

fn readme_lines() -> Vec<String> {
    [
        "# Portfolio Terminal",
        "",
        "Welcome to my interactive portfolio terminal!",
        "",
        "This is a unique way to explore my work, interests, and projects.",
        "Built with Rust and lots of coffee.",
        "",
        "## Features",
        "- Interactive command-line interface",
        "- Real portfolio data integration",
        "- Multiple themes and customization",
        "- Search functionality",
        "- Fun easter eggs",
        "",
        "## Get Started",
        "Type 'help' to see all available commands",
    ]
    .map(String::from)
    .to_vec()
}

fn contact_lines() -> Vec<String> {
    [
        "Email: hello@example.com",
        "GitHub: github.com/yourusername",
        "LinkedIn: linkedin.com/in/yourusername",
        "Twitter: @yourusername",
        "",
        "Location: Colorado, USA",
        "Timezone: Mountain Time (MT)",
        "",
        "Preferred contact: email or LinkedIn",
        "Response time: usually within 24 hours",
    ]
    .map(String::from)
    .to_vec()
}

fn portfolio_lines() -> Vec<String> {
    [
        "//! The interactive portfolio terminal.",
        "",
        "use folio_session::TerminalSession;",
        "",
        "/// An interactive terminal-based portfolio:",
        "/// - 25+ commands with tab-completion",
        "/// - simulated filesystem navigation",
        "/// - live theme switching",
        "/// - portfolio data integration",
        "fn main() {",
        "    let mut session = TerminalSession::new().expect(\"boot\");",
        "    session.activate();",
        "}",
    ]
    .map(String::from)
    .to_vec()
}
