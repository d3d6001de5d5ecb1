//! Boot sequence data: stepped reveal labels and the welcome banner.

use crate::line::TerminalLine;

/// One step of the boot overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootStep {
    /// Milliseconds after activation at which the step is revealed.
    pub delay_ms: u64,
    pub label: &'static str,
}

/// The fixed boot sequence, revealed one step at a time.
pub const BOOT_STEPS: &[BootStep] = &[
    BootStep {
        delay_ms: 0,
        label: "Initializing developer mode...",
    },
    BootStep {
        delay_ms: 300,
        label: "Loading terminal interface...",
    },
    BootStep {
        delay_ms: 600,
        label: "Configuring command system...",
    },
    BootStep {
        delay_ms: 900,
        label: "Activating theme engine...",
    },
    BootStep {
        delay_ms: 1200,
        label: "Enabling file system...",
    },
    BootStep {
        delay_ms: 1500,
        label: "Developer mode activated!",
    },
];

/// Milliseconds after activation at which boot completes and the terminal
/// becomes ready (last step plus the success hold).
pub const BOOT_DONE_MS: u64 = 2_300;

const BANNER_WIDTH: usize = 62;

/// Scrollback lines emitted on the Booting -> Ready transition.
pub fn welcome_banner() -> Vec<TerminalLine> {
    let bar = "═".repeat(BANNER_WIDTH);
    vec![
        TerminalLine::system(format!("╔{bar}╗")),
        TerminalLine::system(format!("║{:^w$}║", "DEV MODE UNLOCKED", w = BANNER_WIDTH)),
        TerminalLine::system(format!(
            "║{:^w$}║",
            "Welcome to Terminal Portfolio v2.0",
            w = BANNER_WIDTH
        )),
        TerminalLine::system(format!("╚{bar}╝")),
        TerminalLine::output(""),
        TerminalLine::output("System initialized successfully!"),
        TerminalLine::output("Type 'help' to see available commands."),
        TerminalLine::output("Type 'tour' for a guided tour of my portfolio."),
        TerminalLine::output(""),
    ]
}
