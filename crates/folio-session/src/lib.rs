//! folio-session: the interaction layer of the portfolio terminal.
//!
//! Owns the scrollback buffer, command history, keyboard dispatch, and the
//! one-time boot sequence. The host UI feeds `KeyEvent`s in, advances time
//! with `tick`, and draws `render_line` spans out. Nothing here touches a
//! real screen or a real clock callback.

mod boot;
mod line;
mod render;
mod session;
mod timer;

pub use boot::{BootStep, BOOT_DONE_MS, BOOT_STEPS};
pub use line::{LineKind, TerminalLine};
pub use render::{render_line, Span};
pub use session::{Phase, TerminalSession};
