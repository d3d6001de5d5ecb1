//! Command trait, registry, and dispatch logic.
//!
//! Input is trimmed and split on whitespace; the first token (lowercased) is
//! the command name, the rest are positional arguments. Every command
//! resolves synchronously to exactly one output value.

use std::collections::HashMap;

use folio_content::ContentLibrary;
use folio_types::error::{FolioError, Result};
use folio_vfs::SiteFs;

use crate::clock::Clock;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// A single line of text.
    Text(String),
    /// An ordered sequence of lines.
    Lines(Vec<String>),
    /// Command produced no visible output.
    None,
    /// Signal to clear the scrollback buffer. Never rendered as a line.
    Clear,
    /// Signal to the session to swap the active theme.
    ThemeSwap {
        /// Built-in theme name to activate.
        name: String,
    },
}

/// Shared environment passed to every command.
///
/// `cwd` is the single piece of mutable session state commands may touch,
/// and only `cd` writes to it. Everything else is a read-only lookup.
pub struct Environment<'a> {
    /// Current working directory (absolute, always a valid directory).
    pub cwd: String,
    /// The fixed site filesystem.
    pub fs: &'a SiteFs,
    /// Read-only content tables (writing, goals, collections, ...).
    pub content: &'a ContentLibrary,
    /// Wall-clock service for `date`/`uptime` queries.
    pub clock: Option<&'a dyn Clock>,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "ls \[path\]").
    fn usage(&self) -> &str;

    /// Command category for grouping in `help` output.
    fn category(&self) -> &str {
        "general"
    }

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Parse and execute a command line.
    ///
    /// Empty input produces `CommandOutput::None` with no side effects.
    /// Unknown command names produce an error value, never a panic.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(CommandOutput::None);
        }

        let mut tokens = trimmed.split_whitespace();
        let name = tokens
            .next()
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let args: Vec<&str> = tokens.collect();
        log::debug!("dispatch: {name} ({} args)", args.len());

        // Intercept commands that need access to the registry itself.
        match name.as_str() {
            "help" => return self.execute_help(&args),
            "stats" => return self.execute_stats(env),
            _ => {},
        }

        match self.commands.get(name.as_str()) {
            Some(cmd) => cmd.execute(&args, env),
            None => Err(FolioError::Command(format!(
                "Command not found: {name}. Type 'help' for available commands."
            ))),
        }
    }

    /// Built-in help with access to the registry.
    fn execute_help(&self, args: &[&str]) -> Result<CommandOutput> {
        if let Some(&name) = args.first() {
            let lower = name.to_ascii_lowercase();
            return match self.commands.get(lower.as_str()) {
                Some(cmd) => Ok(CommandOutput::Lines(vec![
                    format!("{} ({})", cmd.name(), cmd.category()),
                    format!("  {}", cmd.description()),
                    format!("  Usage: {}", cmd.usage()),
                ])),
                None => Err(FolioError::Command(format!(
                    "help: no such command: {name}"
                ))),
            };
        }

        // Group commands by category.
        let mut categories: HashMap<&str, Vec<(&str, &str)>> = HashMap::new();
        for cmd in self.commands.values() {
            categories
                .entry(cmd.category())
                .or_default()
                .push((cmd.name(), cmd.description()));
        }
        let mut cats: Vec<&str> = categories.keys().copied().collect();
        cats.sort_unstable();

        let mut lines = vec![format!("TERMINAL COMMANDS ({}):", self.commands.len())];
        for cat in cats {
            let mut cmds = categories.remove(cat).unwrap_or_default();
            cmds.sort_unstable_by_key(|(name, _)| *name);
            lines.push(String::new());
            lines.push(format!("[{cat}]"));
            for (name, desc) in cmds {
                lines.push(format!("  {name:<12} {desc}"));
            }
        }
        lines.push(String::new());
        lines.push("Tips:".to_string());
        lines.push("  • Up/Down arrows browse command history".to_string());
        lines.push("  • Tab auto-completes commands, directories, and files".to_string());
        lines.push("  • Ctrl+L clears the screen".to_string());
        lines.push("  • Type 'help <command>' for details".to_string());
        Ok(CommandOutput::Lines(lines))
    }

    /// Built-in stats: content counts plus the size of this registry.
    fn execute_stats(&self, env: &Environment<'_>) -> Result<CommandOutput> {
        let content = env.content;
        let completed = content.completed_goals().len();
        Ok(CommandOutput::Lines(vec![
            "PORTFOLIO STATISTICS".to_string(),
            String::new(),
            "Content:".to_string(),
            format!("  • Blog posts: {}", content.public_posts().len()),
            format!("  • Adventures: {}", content.adventures.len()),
            format!(
                "  • Goals completed: {completed}/{}",
                content.goals.len()
            ),
            String::new(),
            "Collections:".to_string(),
            format!("  • Anime: {}", content.anime.len()),
            format!("  • Books: {}", content.books.len()),
            format!("  • Music albums: {}", content.albums.len()),
            String::new(),
            "Achievements:".to_string(),
            format!("  • Gold coins earned: {}", content.gold_earned()),
            format!("  • Terminal commands: {}", self.commands.len()),
        ]))
    }

    /// Return a sorted list of (name, description) pairs.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut cmds: Vec<(&str, &str)> = self
            .commands
            .values()
            .map(|c| (c.name(), c.description()))
            .collect();
        cmds.sort_unstable_by_key(|(name, _)| *name);
        cmds
    }

    /// Return sorted completions for a partial command name.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        let lower = partial.to_ascii_lowercase();
        let mut names: Vec<String> = self
            .commands
            .keys()
            .filter(|name| name.starts_with(&lower))
            .cloned()
            .collect();
        names.sort_unstable();
        names
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_vfs::SiteFs;

    struct EchoCmd;
    impl Command for EchoCmd {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Print arguments"
        }
        fn usage(&self) -> &str {
            "echo [text...]"
        }
        fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::Text(args.join(" ")))
        }
    }

    fn exec(reg: &CommandRegistry, fs: &SiteFs, line: &str) -> Result<CommandOutput> {
        let content = ContentLibrary::builtin();
        let mut env = Environment {
            cwd: "/".to_string(),
            fs,
            content: &content,
            clock: None,
        };
        reg.execute(line, &mut env)
    }

    #[test]
    fn register_and_execute() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        let fs = SiteFs::new();
        match exec(&reg, &fs, "echo hello world").unwrap() {
            CommandOutput::Text(s) => assert_eq!(s, "hello world"),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn command_name_is_case_insensitive_but_args_are_not() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        let fs = SiteFs::new();
        match exec(&reg, &fs, "ECHO Hello World").unwrap() {
            CommandOutput::Text(s) => assert_eq!(s, "Hello World"),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_none() {
        let reg = CommandRegistry::new();
        let fs = SiteFs::new();
        match exec(&reg, &fs, "").unwrap() {
            CommandOutput::None => {},
            other => panic!("expected None, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_only_input_is_none() {
        let reg = CommandRegistry::new();
        let fs = SiteFs::new();
        match exec(&reg, &fs, "   \t  ").unwrap() {
            CommandOutput::None => {},
            other => panic!("expected None, got {other:?}"),
        }
    }

    #[test]
    fn unknown_command_error_names_the_command() {
        let reg = CommandRegistry::new();
        let fs = SiteFs::new();
        let err = exec(&reg, &fs, "frobnicate").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Command not found: frobnicate"));
        assert!(msg.contains("'help'"));
    }

    #[test]
    fn multiple_spaces_between_args() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        let fs = SiteFs::new();
        match exec(&reg, &fs, "echo   hello    world").unwrap() {
            CommandOutput::Text(s) => assert_eq!(s, "hello world"),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn register_replaces_existing_command() {
        struct Desc(&'static str);
        impl Command for Desc {
            fn name(&self) -> &str {
                "test"
            }
            fn description(&self) -> &str {
                self.0
            }
            fn usage(&self) -> &str {
                "test"
            }
            fn execute(&self, _: &[&str], _: &mut Environment<'_>) -> Result<CommandOutput> {
                Ok(CommandOutput::None)
            }
        }
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(Desc("first")));
        reg.register(Box::new(Desc("second")));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.list_commands()[0].1, "second");
    }

    #[test]
    fn list_commands_sorted() {
        struct Named(&'static str);
        impl Command for Named {
            fn name(&self) -> &str {
                self.0
            }
            fn description(&self) -> &str {
                "desc"
            }
            fn usage(&self) -> &str {
                self.0
            }
            fn execute(&self, _: &[&str], _: &mut Environment<'_>) -> Result<CommandOutput> {
                Ok(CommandOutput::None)
            }
        }
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(Named("zebra")));
        reg.register(Box::new(Named("alpha")));
        reg.register(Box::new(Named("middle")));
        let names: Vec<&str> = reg.list_commands().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["alpha", "middle", "zebra"]);
    }

    #[test]
    fn completions_filter_and_sort() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        assert_eq!(reg.completions("ec"), vec!["echo"]);
        assert!(reg.completions("zz").is_empty());
    }

    #[test]
    fn help_is_always_available() {
        let reg = CommandRegistry::new();
        let fs = SiteFs::new();
        match exec(&reg, &fs, "help").unwrap() {
            CommandOutput::Lines(lines) => {
                assert!(lines[0].starts_with("TERMINAL COMMANDS"));
            },
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn stats_reports_content_and_registry_size() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        let fs = SiteFs::new();
        match exec(&reg, &fs, "stats").unwrap() {
            CommandOutput::Lines(lines) => {
                let joined = lines.join("\n");
                assert!(joined.contains("Blog posts: 5"));
                assert!(joined.contains("Goals completed: 2/8"));
                assert!(joined.contains("Terminal commands: 1"));
            },
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn default_creates_empty_registry() {
        assert!(CommandRegistry::default().is_empty());
    }
}
