//! The terminal session state machine.
//!
//! `Idle -> Booting -> Ready`, with `deactivate` returning to `Idle` from
//! anywhere and discarding every piece of session state. Keystrokes are
//! handled synchronously and fully before the next is accepted; time only
//! moves when the host calls `tick`.

use folio_content::ContentLibrary;
use folio_terminal::{
    complete, register_builtins, site_fs, CommandOutput, CommandRegistry, Environment,
    SystemClock,
};
use folio_theme::{resolve_theme, Theme};
use folio_types::error::Result;
use folio_types::KeyEvent;
use folio_vfs::SiteFs;

use crate::boot::{welcome_banner, BOOT_DONE_MS, BOOT_STEPS};
use crate::line::TerminalLine;
use crate::timer::{TimerEffect, TimerQueue};

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not yet activated; ignoring input.
    Idle,
    /// Boot overlay playing; input not accepted yet.
    Booting,
    /// Accepting input.
    Ready,
}

/// The embedded terminal: interpreter, filesystem, scrollback, history.
pub struct TerminalSession {
    registry: CommandRegistry,
    fs: SiteFs,
    content: ContentLibrary,
    clock: SystemClock,
    theme: Theme,
    phase: Phase,
    cwd: String,
    input: String,
    scrollback: Vec<TerminalLine>,
    history: Vec<String>,
    /// History recall cursor; `None` = not browsing.
    cursor: Option<usize>,
    timers: TimerQueue,
    /// Milliseconds since activation, advanced by `tick`.
    now_ms: u64,
    /// Boot steps revealed so far.
    boot_revealed: usize,
}

impl TerminalSession {
    /// Build a session with the built-in content and the default theme.
    pub fn new() -> Result<Self> {
        Self::with_theme("dark")
    }

    /// Build a session starting on a specific built-in theme.
    pub fn with_theme(theme_name: &str) -> Result<Self> {
        let content = ContentLibrary::builtin();
        let fs = site_fs(&content)?;
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        Ok(Self {
            registry,
            fs,
            content,
            clock: SystemClock::new(),
            theme: resolve_theme(theme_name)?,
            phase: Phase::Idle,
            cwd: "/".to_string(),
            input: String::new(),
            scrollback: Vec::new(),
            history: Vec::new(),
            cursor: None,
            timers: TimerQueue::new(),
            now_ms: 0,
            boot_revealed: 0,
        })
    }

    // -- Lifecycle --

    /// Start the boot sequence. No-op unless the session is idle.
    pub fn activate(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        log::info!("terminal activated");
        self.phase = Phase::Booting;
        self.now_ms = 0;
        for (i, step) in BOOT_STEPS.iter().enumerate() {
            self.timers.schedule(step.delay_ms, TimerEffect::BootStep(i));
        }
        self.timers.schedule(BOOT_DONE_MS, TimerEffect::BootDone);
    }

    /// Advance session time by `delta_ms`, firing any due boot timers.
    pub fn tick(&mut self, delta_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(delta_ms);
        for effect in self.timers.advance(self.now_ms) {
            match effect {
                TimerEffect::BootStep(i) => {
                    self.boot_revealed = self.boot_revealed.max(i + 1);
                },
                TimerEffect::BootDone => {
                    self.phase = Phase::Ready;
                    self.scrollback.extend(welcome_banner());
                },
            }
        }
    }

    /// Tear the session down: discard scrollback, history, input, pending
    /// timers, and return to `Idle`. Nothing persists across deactivation.
    pub fn deactivate(&mut self) {
        log::info!(
            "terminal deactivated ({} pending timers discarded)",
            self.timers.pending()
        );
        self.timers.clear();
        self.scrollback.clear();
        self.history.clear();
        self.input.clear();
        self.cursor = None;
        self.cwd = "/".to_string();
        self.boot_revealed = 0;
        self.now_ms = 0;
        self.phase = Phase::Idle;
    }

    // -- Keyboard dispatch --

    /// Handle one keystroke. Ignored unless the session is `Ready`.
    pub fn key(&mut self, event: KeyEvent) {
        if self.phase != Phase::Ready {
            return;
        }
        match event {
            KeyEvent::Char(c) => self.input.push(c),
            KeyEvent::Backspace => {
                self.input.pop();
            },
            KeyEvent::Enter => self.submit(),
            KeyEvent::Up => self.history_prev(),
            KeyEvent::Down => self.history_next(),
            KeyEvent::Tab => self.tab_complete(),
            KeyEvent::CtrlL => self.scrollback.clear(),
        }
    }

    /// Submit the current input line.
    fn submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        if !line.trim().is_empty() {
            self.history.push(line.clone());
            self.cursor = None;
        }
        self.scrollback.push(TerminalLine::command(format!("$ {line}")));

        let mut env = Environment {
            cwd: self.cwd.clone(),
            fs: &self.fs,
            content: &self.content,
            clock: Some(&self.clock),
        };
        let result = self.registry.execute(&line, &mut env);
        self.cwd = env.cwd;

        match result {
            Ok(output) => self.apply_output(output),
            Err(e) => self.scrollback.push(TerminalLine::error(e.to_string())),
        }
    }

    fn apply_output(&mut self, output: CommandOutput) {
        match output {
            CommandOutput::Text(text) => self.scrollback.push(TerminalLine::output(text)),
            CommandOutput::Lines(lines) => {
                for text in lines {
                    self.scrollback.push(TerminalLine::output(text));
                }
            },
            CommandOutput::None => {},
            CommandOutput::Clear => self.scrollback.clear(),
            CommandOutput::ThemeSwap { name } => match resolve_theme(&name) {
                Ok(theme) => {
                    log::info!("theme swapped to {name}");
                    self.theme = theme;
                    self.scrollback
                        .push(TerminalLine::output(format!("Theme changed to: {name}")));
                },
                Err(e) => self.scrollback.push(TerminalLine::error(e.to_string())),
            },
        }
    }

    // -- History recall --

    fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.cursor {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(idx);
        self.input = self.history[idx].clone();
    }

    fn history_next(&mut self) {
        let Some(i) = self.cursor else {
            return;
        };
        let next = i + 1;
        if next >= self.history.len() {
            self.cursor = None;
            self.input.clear();
        } else {
            self.cursor = Some(next);
            self.input = self.history[next].clone();
        }
    }

    // -- Completion --

    fn tab_complete(&mut self) {
        let candidates = complete(&self.registry, &self.fs, &self.cwd, &self.input);
        match candidates.as_slice() {
            [] => {},
            [only] => {
                let trimmed = self.input.trim();
                let mut parts: Vec<&str> = trimmed.split_whitespace().collect();
                parts.pop();
                let mut rebuilt = parts.join(" ");
                if !rebuilt.is_empty() {
                    rebuilt.push(' ');
                }
                rebuilt.push_str(only);
                rebuilt.push(' ');
                self.input = rebuilt;
            },
            many => {
                self.scrollback
                    .push(TerminalLine::command(format!("$ {}", self.input.trim())));
                self.scrollback
                    .push(TerminalLine::system("Available completions:"));
                for candidate in many {
                    self.scrollback
                        .push(TerminalLine::output(format!("  {candidate}")));
                }
            },
        }
    }

    // -- Accessors --

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The scrollback buffer, oldest line first.
    pub fn lines(&self) -> &[TerminalLine] {
        &self.scrollback
    }

    /// Current input buffer contents.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submitted command history, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Active color theme for the renderer.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Current working directory (absolute).
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Prompt string shown left of the input line.
    pub fn prompt(&self) -> String {
        let dir = if self.cwd == "/" { "~" } else { &self.cwd };
        format!("terminal@portfolio:{dir}$")
    }

    /// Labels of the boot steps revealed so far (for the boot overlay).
    pub fn revealed_boot_steps(&self) -> Vec<&'static str> {
        BOOT_STEPS
            .iter()
            .take(self.boot_revealed)
            .map(|s| s.label)
            .collect()
    }
}
