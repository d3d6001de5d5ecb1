//! Line renderer: structural markers -> styled spans.
//!
//! Pure and stateless. The base color comes from the line kind; content
//! rules recolor the structural glyphs the command output embeds (progress
//! bars, box-drawing borders, bullet points). Spans concatenate back to the
//! input text, so whitespace is preserved exactly.

use folio_theme::Theme;
use folio_types::Color;

use crate::line::{LineKind, TerminalLine};

/// A run of text in a single color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub color: Color,
}

impl Span {
    fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

const BOX_CHARS: &[char] = &[
    '╔', '╗', '╚', '╝', '║', '═', '╭', '╮', '╰', '╯', '┌', '┐', '└', '┘', '│', '├', '┤',
];

fn base_color(kind: LineKind, theme: &Theme) -> Color {
    match kind {
        LineKind::Command => theme.accent,
        LineKind::Output => theme.text,
        LineKind::Error => theme.error,
        LineKind::System => theme.system,
    }
}

/// Render one scrollback line as ordered colored spans.
pub fn render_line(line: &TerminalLine, theme: &Theme) -> Vec<Span> {
    let base = base_color(line.kind, theme);
    let text = line.text.as_str();

    if text.is_empty() {
        return vec![Span::new("", base)];
    }

    // Box-drawing borders take the system color for the whole line.
    if text.chars().any(|c| BOX_CHARS.contains(&c)) {
        return vec![Span::new(text, theme.system)];
    }

    // Progress bars: filled run in accent, empty run dimmed.
    if text.contains('█') {
        return render_progress(text, base, theme);
    }

    // Bullet points: the glyph itself in accent.
    if let Some(pos) = text.find('•') {
        let mut spans = Vec::new();
        if pos > 0 {
            spans.push(Span::new(&text[..pos], base));
        }
        spans.push(Span::new("•", theme.accent));
        let rest = &text[pos + '•'.len_utf8()..];
        if !rest.is_empty() {
            spans.push(Span::new(rest, base));
        }
        return spans;
    }

    vec![Span::new(text, base)]
}

fn render_progress(text: &str, base: Color, theme: &Theme) -> Vec<Span> {
    enum State {
        Prefix,
        Fill,
        Empty,
        Rest,
    }

    let mut prefix = String::new();
    let mut fill = String::new();
    let mut empty = String::new();
    let mut rest = String::new();
    let mut state = State::Prefix;

    for ch in text.chars() {
        state = match (state, ch) {
            (State::Prefix, '█') => State::Fill,
            (State::Fill, '█') => State::Fill,
            (State::Fill, '░') | (State::Empty, '░') => State::Empty,
            (State::Fill, _) | (State::Empty, _) => State::Rest,
            (s, _) => s,
        };
        match state {
            State::Prefix => prefix.push(ch),
            State::Fill => fill.push(ch),
            State::Empty => empty.push(ch),
            State::Rest => rest.push(ch),
        }
    }

    let mut spans = Vec::new();
    if !prefix.is_empty() {
        spans.push(Span::new(prefix, base));
    }
    spans.push(Span::new(fill, theme.accent));
    if !empty.is_empty() {
        spans.push(Span::new(empty, theme.dim_text));
    }
    if !rest.is_empty() {
        spans.push(Span::new(rest, base));
    }
    spans
}
