//! Portfolio content commands: projects, blog, goals, adventures, the
//! collections, contact/social, skills, and search.
//!
//! These read the `folio-content` tables and format display text. None of
//! them mutate anything.

use folio_content::{ReadStatus, WatchStatus};
use folio_types::error::Result;

use crate::interpreter::{Command, CommandOutput, Environment};

/// Register content listing commands.
pub fn register_content_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(ProjectsCmd));
    reg.register(Box::new(BlogCmd));
    reg.register(Box::new(GoalsCmd));
    reg.register(Box::new(AdventuresCmd));
    reg.register(Box::new(AnimeCmd));
    reg.register(Box::new(BooksCmd));
    reg.register(Box::new(MusicCmd));
    reg.register(Box::new(ContactCmd));
    reg.register(Box::new(SocialCmd));
    reg.register(Box::new(SkillsCmd));
    reg.register(Box::new(SearchCmd));
    reg.register(Box::new(StatsCmd));
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "Show my projects and work"
    }
    fn usage(&self) -> &str {
        "projects"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Lines(
            [
                "MY PROJECTS & WORK",
                "",
                "Professional:",
                "  • SaaS Application - full-stack web platform",
                "  • API Gateway - microservices architecture",
                "  • Mobile App - cross-platform client",
                "  • Data Pipeline - ETL processing",
                "",
                "Open Source:",
                "  • Component library contributions",
                "  • Utility crates and packages",
                "  • Documentation improvements",
                "",
                "Personal:",
                "  • This interactive portfolio terminal",
                "  • Adventure tracking app",
                "  • Chess analysis tool",
                "",
                "Try 'cd projects' then 'ls' for the file view.",
            ]
            .map(String::from)
            .to_vec(),
        ))
    }
}

// ---------------------------------------------------------------------------
// blog
// ---------------------------------------------------------------------------

struct BlogCmd;
impl Command for BlogCmd {
    fn name(&self) -> &str {
        "blog"
    }
    fn description(&self) -> &str {
        "List recent blog posts"
    }
    fn usage(&self) -> &str {
        "blog"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let posts = env.content.public_posts();
        let mut lines = vec!["RECENT BLOG POSTS".to_string(), String::new()];
        lines.extend(posts.iter().take(5).map(|p| format!("  • {}", p.title)));
        lines.push(String::new());
        lines.push(format!("Total posts: {}", posts.len()));
        lines.push("Visit the writing page for full articles!".to_string());
        Ok(CommandOutput::Lines(lines))
    }
}

// ---------------------------------------------------------------------------
// goals
// ---------------------------------------------------------------------------

struct GoalsCmd;
impl Command for GoalsCmd {
    fn name(&self) -> &str {
        "goals"
    }
    fn description(&self) -> &str {
        "Show life goals and achievements"
    }
    fn usage(&self) -> &str {
        "goals"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let completed = env.content.completed_goals();
        let pending = env.content.pending_goals();
        let mut lines = vec![
            "LIFE GOALS & ACHIEVEMENTS".to_string(),
            String::new(),
            "Completed:".to_string(),
        ];
        lines.extend(
            completed
                .iter()
                .map(|g| format!("  • {} ({} gold coins)", g.title, g.coin_reward)),
        );
        lines.push(String::new());
        lines.push("In Progress:".to_string());
        lines.extend(pending.iter().take(3).map(|g| format!("  • {}", g.title)));
        lines.push(String::new());
        lines.push(format!(
            "Total progress: {}/{} goals completed",
            completed.len(),
            env.content.goals.len()
        ));
        lines.push(format!("Gold coins earned: {}", env.content.gold_earned()));
        Ok(CommandOutput::Lines(lines))
    }
}

// ---------------------------------------------------------------------------
// adventures
// ---------------------------------------------------------------------------

struct AdventuresCmd;
impl Command for AdventuresCmd {
    fn name(&self) -> &str {
        "adventures"
    }
    fn description(&self) -> &str {
        "Display outdoor adventures"
    }
    fn usage(&self) -> &str {
        "adventures"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut lines = vec!["RECENT ADVENTURES".to_string(), String::new()];
        lines.extend(
            env.content
                .adventures
                .iter()
                .take(5)
                .map(|a| format!("  • {} ({})", a.title, a.date)),
        );
        lines.push(String::new());
        lines.push(format!(
            "Total adventures logged: {}",
            env.content.adventures.len()
        ));
        Ok(CommandOutput::Lines(lines))
    }
}

// ---------------------------------------------------------------------------
// anime
// ---------------------------------------------------------------------------

struct AnimeCmd;
impl Command for AnimeCmd {
    fn name(&self) -> &str {
        "anime"
    }
    fn description(&self) -> &str {
        "Show anime watchlist"
    }
    fn usage(&self) -> &str {
        "anime"
    }
    fn category(&self) -> &str {
        "collections"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let anime = env.content.anime;
        let watching: Vec<_> = anime
            .iter()
            .filter(|a| a.status == WatchStatus::Watching)
            .collect();
        let completed = anime
            .iter()
            .filter(|a| a.status == WatchStatus::Completed)
            .count();

        let mut lines = vec![
            "ANIME COLLECTION".to_string(),
            String::new(),
            "Currently Watching:".to_string(),
        ];
        lines.extend(watching.iter().map(|a| {
            format!("  • {} ({}/{})", a.title, a.watched_episodes, a.episodes)
        }));
        lines.push(String::new());
        lines.push("Favorites:".to_string());
        lines.extend(anime.iter().filter(|a| a.favorite).take(3).map(|a| {
            format!("  • {} ({}/5)", a.title, a.rating.unwrap_or(0))
        }));
        lines.push(String::new());
        lines.push(format!(
            "Total: {} | Completed: {completed} | Watching: {}",
            anime.len(),
            watching.len()
        ));
        Ok(CommandOutput::Lines(lines))
    }
}

// ---------------------------------------------------------------------------
// books
// ---------------------------------------------------------------------------

struct BooksCmd;
impl Command for BooksCmd {
    fn name(&self) -> &str {
        "books"
    }
    fn description(&self) -> &str {
        "Display book collection"
    }
    fn usage(&self) -> &str {
        "books"
    }
    fn category(&self) -> &str {
        "collections"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let books = env.content.books;
        let reading: Vec<_> = books
            .iter()
            .filter(|b| b.status == ReadStatus::Reading)
            .collect();
        let completed = books
            .iter()
            .filter(|b| b.status == ReadStatus::Completed)
            .count();

        let mut lines = vec![
            "BOOK COLLECTION".to_string(),
            String::new(),
            "Currently Reading:".to_string(),
        ];
        lines.extend(
            reading
                .iter()
                .map(|b| format!("  • {} by {}", b.title, b.author)),
        );
        lines.push(String::new());
        lines.push("Favorites:".to_string());
        lines.extend(books.iter().filter(|b| b.favorite).map(|b| {
            format!("  • {} by {} ({}/5)", b.title, b.author, b.rating.unwrap_or(0))
        }));
        lines.push(String::new());
        lines.push(format!(
            "Total: {} | Completed: {completed} | Reading: {}",
            books.len(),
            reading.len()
        ));
        Ok(CommandOutput::Lines(lines))
    }
}

// ---------------------------------------------------------------------------
// music
// ---------------------------------------------------------------------------

struct MusicCmd;
impl Command for MusicCmd {
    fn name(&self) -> &str {
        "music"
    }
    fn description(&self) -> &str {
        "Show music collection"
    }
    fn usage(&self) -> &str {
        "music"
    }
    fn category(&self) -> &str {
        "collections"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let albums = env.content.albums;
        let mut lines = vec![
            "MUSIC COLLECTION".to_string(),
            String::new(),
            "Favorite Albums:".to_string(),
        ];
        lines.extend(albums.iter().filter(|m| m.favorite).map(|m| {
            format!("  • {} by {} ({})", m.title, m.artist, m.release_year)
        }));
        lines.push(String::new());
        lines.push(format!("Total albums: {}", albums.len()));
        lines.push("Genres: Electronic, Rock, Jazz, Classical, Indie".to_string());
        Ok(CommandOutput::Lines(lines))
    }
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Get contact information"
    }
    fn usage(&self) -> &str {
        "contact"
    }
    fn category(&self) -> &str {
        "social"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Lines(
            [
                "GET IN TOUCH",
                "",
                "Email: hello@example.com",
                "GitHub: github.com/yourusername",
                "LinkedIn: linkedin.com/in/yourusername",
                "Twitter: @yourusername",
                "",
                "Location: Colorado, USA",
                "Timezone: Mountain Time (MT)",
                "",
                "I love connecting with fellow developers,",
                "outdoor enthusiasts, and curious minds!",
            ]
            .map(String::from)
            .to_vec(),
        ))
    }
}

// ---------------------------------------------------------------------------
// social
// ---------------------------------------------------------------------------

struct SocialCmd;
impl Command for SocialCmd {
    fn name(&self) -> &str {
        "social"
    }
    fn description(&self) -> &str {
        "Show social media links"
    }
    fn usage(&self) -> &str {
        "social"
    }
    fn category(&self) -> &str {
        "social"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Lines(
            [
                "FIND ME ONLINE",
                "",
                "Professional:",
                "  • GitHub: github.com/yourusername",
                "  • LinkedIn: linkedin.com/in/yourusername",
                "  • Stack Overflow: stackoverflow.com/users/yourid",
                "",
                "Social:",
                "  • Twitter: @yourusername",
                "  • Instagram: @yourusername (adventure photos)",
                "",
                "Gaming:",
                "  • Chess.com: yourusername",
                "  • Steam: yourusername",
                "",
                "Always happy to connect and chat!",
            ]
            .map(String::from)
            .to_vec(),
        ))
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

/// Fixed progress-bar width for skill lines.
const BAR_WIDTH: usize = 12;

fn skill_line(label: &str, filled: usize, level: &str) -> String {
    let filled = filled.min(BAR_WIDTH);
    format!(
        "  • {label:<21} {}{} {level}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}

struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "Display my technical skills"
    }
    fn usage(&self) -> &str {
        "skills"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Lines(vec![
            "TECHNICAL SKILLS".to_string(),
            String::new(),
            "Languages:".to_string(),
            skill_line("JavaScript/TypeScript", 12, "Expert"),
            skill_line("Python", 10, "Advanced"),
            skill_line("Go", 8, "Intermediate"),
            skill_line("Rust", 4, "Learning"),
            String::new(),
            "Frontend:".to_string(),
            skill_line("React/Next.js", 12, "Expert"),
            skill_line("Vue.js", 8, "Intermediate"),
            skill_line("Tailwind CSS", 12, "Expert"),
            String::new(),
            "Backend:".to_string(),
            skill_line("Node.js/Express", 12, "Expert"),
            skill_line("PostgreSQL/MongoDB", 10, "Advanced"),
            skill_line("Docker/Kubernetes", 8, "Intermediate"),
            String::new(),
            "Cloud & DevOps:".to_string(),
            skill_line("AWS/GCP", 8, "Intermediate"),
            skill_line("CI/CD Pipelines", 10, "Advanced"),
            skill_line("Terraform", 8, "Intermediate"),
        ]))
    }
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

struct SearchCmd;
impl Command for SearchCmd {
    fn name(&self) -> &str {
        "search"
    }
    fn description(&self) -> &str {
        "Search across all content"
    }
    fn usage(&self) -> &str {
        "search <term>"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        if args.is_empty() {
            return Ok(CommandOutput::Lines(vec![
                "Usage: search <term>".to_string(),
                "Example: search climbing".to_string(),
            ]));
        }
        let term = args.join(" ").to_lowercase();
        let matches = |fields: &[&str]| fields.iter().any(|f| f.to_lowercase().contains(&term));
        let content = env.content;

        let mut sections: Vec<(&str, Vec<String>)> = Vec::new();

        let posts: Vec<String> = content
            .public_posts()
            .iter()
            .filter(|p| matches(&[p.title]) || p.tags.iter().any(|t| matches(&[t])))
            .map(|p| p.title.to_string())
            .collect();
        sections.push(("Blog Posts", posts));

        let goals: Vec<String> = content
            .goals
            .iter()
            .filter(|g| matches(&[g.title]) || g.tags.iter().any(|t| matches(&[t])))
            .map(|g| g.title.to_string())
            .collect();
        sections.push(("Goals", goals));

        let adventures: Vec<String> = content
            .adventures
            .iter()
            .filter(|a| matches(&[a.title, a.activity]))
            .map(|a| a.title.to_string())
            .collect();
        sections.push(("Adventures", adventures));

        let anime: Vec<String> = content
            .anime
            .iter()
            .filter(|a| matches(&[a.title]))
            .map(|a| a.title.to_string())
            .collect();
        sections.push(("Anime", anime));

        let books: Vec<String> = content
            .books
            .iter()
            .filter(|b| matches(&[b.title, b.author]))
            .map(|b| b.title.to_string())
            .collect();
        sections.push(("Books", books));

        let albums: Vec<String> = content
            .albums
            .iter()
            .filter(|m| matches(&[m.title, m.artist]))
            .map(|m| m.title.to_string())
            .collect();
        sections.push(("Music", albums));

        let mut lines = vec!["SEARCH RESULTS".to_string(), String::new()];
        let mut any = false;
        for (header, titles) in sections {
            if titles.is_empty() {
                continue;
            }
            any = true;
            lines.push(format!("{header}:"));
            lines.extend(titles.iter().map(|t| format!("  • {t}")));
            lines.push(String::new());
        }
        if !any {
            lines.push(format!("No results found for \"{}\"", args.join(" ")));
            lines.push("Try: react, climbing, anime, chess".to_string());
        }
        Ok(CommandOutput::Lines(lines))
    }
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

/// Placeholder: execution is intercepted by the registry, which knows its
/// own size. Registered so `stats` appears in listings and completion.
struct StatsCmd;
impl Command for StatsCmd {
    fn name(&self) -> &str {
        "stats"
    }
    fn description(&self) -> &str {
        "Show portfolio statistics"
    }
    fn usage(&self) -> &str {
        "stats"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(
            "Type 'stats' at the prompt for portfolio statistics.".to_string(),
        ))
    }
}
