//! Identity and utility commands: whoami, tour, date, uptime, theme.

use folio_types::error::{FolioError, Result};

use crate::clock::Clock;
use crate::interpreter::{Command, CommandOutput, Environment};

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display information about me"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Lines(
            [
                "Hey there! I'm a passionate software engineer.",
                "",
                "Quick Stats:",
                "  • Age: 27",
                "  • Location: Colorado, USA",
                "  • Languages: JavaScript, TypeScript, Python, Go",
                "  • Frameworks: React, Node.js, Next.js",
                "",
                "Interests:",
                "  • Programming & Software Architecture",
                "  • Rock Climbing & Kayaking",
                "  • Chess & Strategy Games",
                "  • Anime & Reading",
                "  • Music Production",
                "",
                "Philosophy:",
                "  \"Code is poetry, and every bug is a learning opportunity\"",
                "",
                "Type 'contact' to get in touch!",
            ]
            .map(String::from)
            .to_vec(),
        ))
    }
}

// ---------------------------------------------------------------------------
// tour
// ---------------------------------------------------------------------------

struct TourCmd;
impl Command for TourCmd {
    fn name(&self) -> &str {
        "tour"
    }
    fn description(&self) -> &str {
        "Take a guided tour of my portfolio"
    }
    fn usage(&self) -> &str {
        "tour"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Lines(
            [
                "WELCOME TO THE PORTFOLIO TOUR!",
                "",
                "Let me show you around my digital space:",
                "",
                "About Me:",
                "  • Software engineer, 27 years old",
                "  • Passionate about clean code and user experience",
                "  • Love outdoor adventures and continuous learning",
                "",
                "What You Can Explore:",
                "  1. Type 'projects' to see my technical work",
                "  2. Type 'blog' to read my articles and thoughts",
                "  3. Type 'adventures' to see my outdoor activities",
                "  4. Type 'goals' to view my life achievements",
                "  5. Type 'anime' / 'books' / 'music' for my collections",
                "",
                "Interactive Features:",
                "  • Try 'search <keyword>' to find anything",
                "  • Use 'theme <name>' to change colors",
                "  • Type 'matrix' for a surprise",
                "",
                "Ready to explore? Pick any command above!",
            ]
            .map(String::from)
            .to_vec(),
        ))
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Show current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn category(&self) -> &str {
        "utility"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        match env.clock {
            Some(clock) => Ok(CommandOutput::Text(clock.now().to_string())),
            None => Ok(CommandOutput::Text(
                "date: no clock service available".to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// uptime
// ---------------------------------------------------------------------------

struct UptimeCmd;
impl Command for UptimeCmd {
    fn name(&self) -> &str {
        "uptime"
    }
    fn description(&self) -> &str {
        "Show session uptime"
    }
    fn usage(&self) -> &str {
        "uptime"
    }
    fn category(&self) -> &str {
        "utility"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(clock) = env.clock else {
            return Ok(CommandOutput::Text(
                "uptime: no clock service available".to_string(),
            ));
        };
        let secs = clock.uptime_secs();
        let days = secs / 86_400;
        let hours = (secs % 86_400) / 3_600;
        let mins = (secs % 3_600) / 60;
        let s = secs % 60;
        if days > 0 {
            Ok(CommandOutput::Text(format!(
                "up {days} day(s), {hours:02}:{mins:02}:{s:02}"
            )))
        } else {
            Ok(CommandOutput::Text(format!("up {hours:02}:{mins:02}:{s:02}")))
        }
    }
}

// ---------------------------------------------------------------------------
// theme
// ---------------------------------------------------------------------------

struct ThemeCmd;
impl Command for ThemeCmd {
    fn name(&self) -> &str {
        "theme"
    }
    fn description(&self) -> &str {
        "Change color theme"
    }
    fn usage(&self) -> &str {
        "theme [name]"
    }
    fn category(&self) -> &str {
        "utility"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let names = folio_theme::theme_names();
        let Some(&name) = args.first() else {
            return Ok(CommandOutput::Text(format!(
                "Available themes: {}",
                names.join(", ")
            )));
        };
        let lower = name.to_ascii_lowercase();
        if !names.contains(&lower.as_str()) {
            return Err(FolioError::Command(format!(
                "theme: {name}: no such theme. Available: {}",
                names.join(", ")
            )));
        }
        Ok(CommandOutput::ThemeSwap { name: lower })
    }
}

/// Register identity and utility commands.
pub fn register_system_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(TourCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(UptimeCmd));
    reg.register(Box::new(ThemeCmd));
}
