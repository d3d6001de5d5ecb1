//! Tab-completion engine.
//!
//! Candidate source depends on what is being completed: a lone word
//! completes against command names, `cd`/`ls` arguments against the
//! top-level directory set, and `cat` arguments against the files of the
//! current directory. Completion is a pure query: it never touches session
//! state.

use folio_vfs::SiteFs;

use crate::interpreter::CommandRegistry;

/// Propose completions for the current input line.
///
/// Returns zero, one, or many candidates; the caller decides how to apply
/// them (auto-fill on exactly one, list on several, nothing otherwise).
pub fn complete(reg: &CommandRegistry, fs: &SiteFs, cwd: &str, input: &str) -> Vec<String> {
    let parts: Vec<&str> = input.trim().split_whitespace().collect();
    let partial = parts.last().copied().unwrap_or("");

    if parts.len() <= 1 {
        return reg.completions(partial);
    }

    match parts[0].to_ascii_lowercase().as_str() {
        "cd" | "ls" => fs
            .dir_names()
            .into_iter()
            .filter(|d| d.starts_with(partial))
            .collect(),
        "cat" => fs
            .files_in(cwd)
            .into_iter()
            .filter(|f| f.starts_with(partial))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register_builtins;
    use folio_content::ContentLibrary;

    fn setup() -> (CommandRegistry, SiteFs) {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        let content = ContentLibrary::builtin();
        let fs = crate::site_fs(&content).unwrap();
        (reg, fs)
    }

    #[test]
    fn single_word_completes_command_names() {
        let (reg, fs) = setup();
        let candidates = complete(&reg, &fs, "/", "wh");
        assert_eq!(candidates, vec!["whoami"]);
    }

    #[test]
    fn ambiguous_prefix_lists_all_matches() {
        let (reg, fs) = setup();
        let candidates = complete(&reg, &fs, "/", "c");
        assert!(candidates.len() > 1);
        assert!(candidates.contains(&"cat".to_string()));
        assert!(candidates.contains(&"cd".to_string()));
        assert!(candidates.contains(&"clear".to_string()));
        // Sorted for a stable listing.
        let mut sorted = candidates.clone();
        sorted.sort_unstable();
        assert_eq!(candidates, sorted);
    }

    #[test]
    fn cd_completes_directories() {
        let (reg, fs) = setup();
        assert_eq!(complete(&reg, &fs, "/", "cd pro"), vec!["projects"]);
        let all = complete(&reg, &fs, "/", "cd x");
        assert!(all.is_empty());
    }

    #[test]
    fn ls_completes_directories() {
        let (reg, fs) = setup();
        let candidates = complete(&reg, &fs, "/", "ls b");
        assert_eq!(candidates, vec!["blog"]);
    }

    #[test]
    fn cat_completes_files_in_cwd() {
        let (reg, fs) = setup();
        assert_eq!(complete(&reg, &fs, "/", "cat RE"), vec!["README.md"]);
        assert_eq!(
            complete(&reg, &fs, "/collections", "cat an"),
            vec!["anime.json"]
        );
        // Files from other directories are not offered.
        assert!(complete(&reg, &fs, "/blog", "cat an").is_empty());
    }

    #[test]
    fn other_commands_have_no_candidates() {
        let (reg, fs) = setup();
        assert!(complete(&reg, &fs, "/", "echo pro").is_empty());
        assert!(complete(&reg, &fs, "/", "whoami x").is_empty());
    }

    #[test]
    fn intercepted_builtins_are_candidates() {
        let (reg, fs) = setup();
        assert!(complete(&reg, &fs, "/", "hel").contains(&"help".to_string()));
        assert!(complete(&reg, &fs, "/", "sta").contains(&"stats".to_string()));
    }

    #[test]
    fn empty_input_offers_every_command() {
        let (reg, fs) = setup();
        let all = complete(&reg, &fs, "/", "");
        assert_eq!(all.len(), reg.len());
    }
}
