//! Navigation and core utility commands: ls, cd, pwd, cat, echo, clear.

use folio_types::error::{FolioError, Result};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register all built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(CatCmd));
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(ClearCmd));
    crate::register_content_commands(reg);
    crate::register_system_commands(reg);
    crate::register_fun_commands(reg);
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

/// Placeholder: execution is intercepted by the registry, which has access
/// to the full command table. Registered so `help` shows up in listings and
/// tab-completion like any other command.
struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "List available commands"
    }
    fn usage(&self) -> &str {
        "help [command]"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(
            "Type 'help' at the prompt for the command list.".to_string(),
        ))
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List directory contents"
    }
    fn usage(&self) -> &str {
        "ls [dir]"
    }
    fn category(&self) -> &str {
        "navigation"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let target = match args.first() {
            Some(arg) => folio_vfs::resolve(&env.cwd, arg),
            None => env.cwd.clone(),
        };
        let Some(entries) = env.fs.entries(&target) else {
            let shown = args.first().copied().unwrap_or(target.as_str());
            return Err(FolioError::Vfs(format!(
                "ls: {shown}: No such file or directory"
            )));
        };
        let mut lines = vec![format!("Contents of {target}:"), String::new()];
        lines.extend(entries.iter().map(|e| format!("  {e}")));
        Ok(CommandOutput::Lines(lines))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Change directory"
    }
    fn usage(&self) -> &str {
        "cd [dir]"
    }
    fn category(&self) -> &str {
        "navigation"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let arg = args.first().copied().unwrap_or("");
        let target = folio_vfs::rooted(arg);
        if target == "/" {
            env.cwd = target;
            return Ok(CommandOutput::Text(
                "Changed to home directory (/)".to_string(),
            ));
        }
        if !env.fs.is_dir(&target) {
            return Err(FolioError::Vfs(format!("cd: {arg}: No such directory")));
        }
        env.cwd = target.clone();
        Ok(CommandOutput::Text(format!("Changed to {target}")))
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print working directory"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn category(&self) -> &str {
        "navigation"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(format!("/home/portfolio{}", env.cwd)))
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "Display file contents"
    }
    fn usage(&self) -> &str {
        "cat <file>"
    }
    fn category(&self) -> &str {
        "navigation"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(&file) = args.first() else {
            return Err(FolioError::Command("cat: missing file operand".to_string()));
        };
        let path = folio_vfs::resolve(&env.cwd, file);
        match env.fs.file_lines(&path) {
            Some(lines) => Ok(CommandOutput::Lines(lines.to_vec())),
            None => Err(FolioError::Vfs(format!(
                "cat: {file}: No such file or directory"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print text"
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn category(&self) -> &str {
        "utility"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(args.join(" ")))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear terminal screen"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn category(&self) -> &str {
        "utility"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::ContentLibrary;
    use folio_vfs::SiteFs;

    fn setup() -> (CommandRegistry, SiteFs) {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        let content = ContentLibrary::builtin();
        let fs = crate::site_fs(&content).unwrap();
        (reg, fs)
    }

    fn exec(
        reg: &CommandRegistry,
        fs: &SiteFs,
        cwd: &mut String,
        line: &str,
    ) -> Result<CommandOutput> {
        let content = ContentLibrary::builtin();
        let mut env = Environment {
            cwd: cwd.clone(),
            fs,
            content: &content,
            clock: None,
        };
        let result = reg.execute(line, &mut env);
        *cwd = env.cwd;
        result
    }

    #[test]
    fn ls_root_lists_fixed_entries() {
        let (reg, fs) = setup();
        let mut cwd = "/".to_string();
        match exec(&reg, &fs, &mut cwd, "ls").unwrap() {
            CommandOutput::Lines(lines) => {
                assert_eq!(lines[0], "Contents of /:");
                assert_eq!(lines[1], "");
                assert!(lines.contains(&"  projects/".to_string()));
                assert!(lines.contains(&"  README.md".to_string()));
            },
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn ls_no_arg_equals_ls_cwd() {
        let (reg, fs) = setup();
        for dir in ["/", "/projects", "/blog", "/adventures", "/goals", "/collections"] {
            let mut cwd = dir.to_string();
            let bare = exec(&reg, &fs, &mut cwd, "ls").unwrap();
            let explicit = exec(&reg, &fs, &mut cwd, &format!("ls {dir}")).unwrap();
            assert_eq!(bare, explicit, "mismatch in {dir}");
        }
    }

    #[test]
    fn ls_projects_begins_with_header() {
        let (reg, fs) = setup();
        let mut cwd = "/".to_string();
        exec(&reg, &fs, &mut cwd, "cd projects").unwrap();
        match exec(&reg, &fs, &mut cwd, "ls").unwrap() {
            CommandOutput::Lines(lines) => {
                assert_eq!(lines[0], "Contents of /projects:");
                assert_eq!(
                    &lines[2..],
                    &[
                        "  portfolio.rs",
                        "  saas-app/",
                        "  api-gateway/",
                        "  mobile-app/",
                        "  contributions/",
                    ]
                );
            },
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn ls_unknown_path_names_user_argument() {
        let (reg, fs) = setup();
        let mut cwd = "/".to_string();
        let err = exec(&reg, &fs, &mut cwd, "ls bogus").unwrap_err();
        assert_eq!(format!("{err}"), "ls: bogus: No such file or directory");
    }

    #[test]
    fn cd_into_every_valid_directory() {
        let (reg, fs) = setup();
        for dir in ["projects", "blog", "adventures", "goals", "collections"] {
            let mut cwd = "/".to_string();
            exec(&reg, &fs, &mut cwd, &format!("cd {dir}")).unwrap();
            assert_eq!(cwd, format!("/{dir}"));
            match exec(&reg, &fs, &mut cwd, "pwd").unwrap() {
                CommandOutput::Text(s) => assert_eq!(s, format!("/home/portfolio/{dir}")),
                other => panic!("expected text, got {other:?}"),
            }
        }
    }

    #[test]
    fn cd_invalid_leaves_cwd_unchanged() {
        let (reg, fs) = setup();
        let mut cwd = "/projects".to_string();
        let err = exec(&reg, &fs, &mut cwd, "cd nowhere").unwrap_err();
        assert_eq!(format!("{err}"), "cd: nowhere: No such directory");
        assert_eq!(cwd, "/projects");
    }

    #[test]
    fn cd_aliases_for_home() {
        let (reg, fs) = setup();
        for alias in ["", "~", "/", ".."] {
            let mut cwd = "/goals".to_string();
            let line = format!("cd {alias}");
            match exec(&reg, &fs, &mut cwd, line.trim()).unwrap() {
                CommandOutput::Text(s) => assert_eq!(s, "Changed to home directory (/)"),
                other => panic!("expected text, got {other:?}"),
            }
            assert_eq!(cwd, "/");
        }
    }

    #[test]
    fn cd_does_not_nest_below_top_level() {
        let (reg, fs) = setup();
        let mut cwd = "/".to_string();
        assert!(exec(&reg, &fs, &mut cwd, "cd projects/saas-app").is_err());
        assert_eq!(cwd, "/");
    }

    #[test]
    fn pwd_at_root() {
        let (reg, fs) = setup();
        let mut cwd = "/".to_string();
        match exec(&reg, &fs, &mut cwd, "pwd").unwrap() {
            CommandOutput::Text(s) => assert_eq!(s, "/home/portfolio/"),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn cat_readme_is_literal_and_idempotent() {
        let (reg, fs) = setup();
        let mut cwd = "/".to_string();
        let first = exec(&reg, &fs, &mut cwd, "cat README.md").unwrap();
        let second = exec(&reg, &fs, &mut cwd, "cat README.md").unwrap();
        assert_eq!(first, second);
        match first {
            CommandOutput::Lines(lines) => {
                assert_eq!(lines[0], "# Portfolio Terminal");
                assert_eq!(lines, fs.file_lines("/README.md").unwrap());
            },
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn cat_relative_to_cwd() {
        let (reg, fs) = setup();
        let mut cwd = "/".to_string();
        exec(&reg, &fs, &mut cwd, "cd collections").unwrap();
        match exec(&reg, &fs, &mut cwd, "cat anime.json").unwrap() {
            CommandOutput::Lines(lines) => {
                assert!(lines.iter().any(|l| l.contains("Attack on Titan")));
            },
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn cat_missing_operand() {
        let (reg, fs) = setup();
        let mut cwd = "/".to_string();
        let err = exec(&reg, &fs, &mut cwd, "cat").unwrap_err();
        assert_eq!(format!("{err}"), "cat: missing file operand");
    }

    #[test]
    fn cat_unknown_file_names_user_argument() {
        let (reg, fs) = setup();
        let mut cwd = "/".to_string();
        let err = exec(&reg, &fs, &mut cwd, "cat ghost.txt").unwrap_err();
        assert_eq!(format!("{err}"), "cat: ghost.txt: No such file or directory");
    }

    #[test]
    fn echo_joins_args() {
        let (reg, fs) = setup();
        let mut cwd = "/".to_string();
        match exec(&reg, &fs, &mut cwd, "echo hello world").unwrap() {
            CommandOutput::Text(s) => assert_eq!(s, "hello world"),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn clear_returns_sentinel() {
        let (reg, fs) = setup();
        let mut cwd = "/".to_string();
        assert_eq!(
            exec(&reg, &fs, &mut cwd, "clear").unwrap(),
            CommandOutput::Clear
        );
    }

    #[test]
    fn help_lists_tour() {
        let (reg, fs) = setup();
        let mut cwd = "/".to_string();
        match exec(&reg, &fs, &mut cwd, "help").unwrap() {
            CommandOutput::Lines(lines) => {
                assert!(lines.iter().any(|l| l.contains("tour")));
                assert!(lines.iter().any(|l| l.contains("clear")));
            },
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn every_catalogue_command_resolves() {
        let (reg, fs) = setup();
        let catalogue = [
            "help", "tour", "whoami", "ls", "cd", "pwd", "cat README.md", "echo hi", "clear",
            "projects", "blog", "goals", "adventures", "anime", "books", "music", "stats",
            "search chess", "skills", "contact", "social", "date", "uptime", "theme", "ascii",
            "matrix", "cowsay moo", "fortune",
        ];
        for line in catalogue {
            let mut cwd = "/".to_string();
            let result = exec(&reg, &fs, &mut cwd, line);
            assert!(result.is_ok(), "{line} failed: {result:?}");
        }
    }
}
