//! Decorative commands: ascii, matrix, cowsay, fortune.

use folio_types::error::Result;

use crate::interpreter::{Command, CommandOutput, Environment};

// ---------------------------------------------------------------------------
// ascii
// ---------------------------------------------------------------------------

/// 5-row block glyphs for the logo letters.
fn block_glyph(ch: char) -> [&'static str; 5] {
    match ch {
        'F' => ["████", "█   ", "███ ", "█   ", "█   "],
        'O' => [" ██ ", "█  █", "█  █", "█  █", " ██ "],
        'L' => ["█   ", "█   ", "█   ", "█   ", "████"],
        'I' => ["███", " █ ", " █ ", " █ ", "███"],
        _ => ["    ", "    ", " ?  ", "    ", "    "],
    }
}

/// Render `text` as 5 rows of block letters.
fn block_rows(text: &str) -> [String; 5] {
    let mut rows: [String; 5] = Default::default();
    for ch in text.chars() {
        let glyph = block_glyph(ch);
        for (i, row) in rows.iter_mut().enumerate() {
            row.push_str(glyph[i]);
            row.push(' ');
        }
    }
    for row in &mut rows {
        row.pop();
    }
    rows
}

struct AsciiCmd;
impl Command for AsciiCmd {
    fn name(&self) -> &str {
        "ascii"
    }
    fn description(&self) -> &str {
        "Show ASCII art"
    }
    fn usage(&self) -> &str {
        "ascii"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let rows = block_rows("FOLIO");
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) + 4;

        let mut lines = Vec::new();
        lines.push(format!("╭{}╮", "─".repeat(width)));
        for row in &rows {
            lines.push(format!("│  {:<w$}  │", row, w = width - 4));
        }
        lines.push(format!("│{}│", " ".repeat(width)));
        lines.push(format!("│{:^w$}│", "Portfolio Terminal v2.0", w = width));
        lines.push(format!("╰{}╯", "─".repeat(width)));
        lines.push(String::new());
        lines.push("Built with Rust and lots of coffee.".to_string());
        Ok(CommandOutput::Lines(lines))
    }
}

// ---------------------------------------------------------------------------
// matrix
// ---------------------------------------------------------------------------

struct MatrixCmd;
impl Command for MatrixCmd {
    fn name(&self) -> &str {
        "matrix"
    }
    fn description(&self) -> &str {
        "Enter the matrix..."
    }
    fn usage(&self) -> &str {
        "matrix"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Lines(
            [
                "Entering the Matrix...",
                "",
                "01001000 01100101 01101100 01101100 01101111",
                "01010111 01101111 01110010 01101100 01100100",
                "",
                "The Matrix has you...",
                "Follow the white rabbit.",
                "",
                "Wake up, Neo... The portfolio has you.",
                "Type 'help' to see how deep the rabbit hole goes.",
            ]
            .map(String::from)
            .to_vec(),
        ))
    }
}

// ---------------------------------------------------------------------------
// cowsay
// ---------------------------------------------------------------------------

struct CowsayCmd;
impl Command for CowsayCmd {
    fn name(&self) -> &str {
        "cowsay"
    }
    fn description(&self) -> &str {
        "Make a cow say something"
    }
    fn usage(&self) -> &str {
        "cowsay [text]"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let message = if args.is_empty() {
            "Welcome to my portfolio!".to_string()
        } else {
            args.join(" ")
        };
        let border = "─".repeat(message.chars().count() + 2);
        Ok(CommandOutput::Lines(vec![
            format!(" ┌{border}┐"),
            format!(" │ {message} │"),
            format!(" └{border}┘"),
            r"        \   ^__^".to_string(),
            r"         \  (oo)\_______".to_string(),
            r"            (__)\       )\/\".to_string(),
            r"                ||----w |".to_string(),
            r"                ||     ||".to_string(),
        ]))
    }
}

// ---------------------------------------------------------------------------
// fortune
// ---------------------------------------------------------------------------

const QUOTES: &[&str] = &[
    "\"Code is poetry written in logic.\" - Anonymous",
    "\"The best error message is the one that never shows up.\" - Thomas Fuchs",
    "\"Simplicity is the ultimate sophistication.\" - Leonardo da Vinci",
    "\"First, solve the problem. Then, write the code.\" - John Johnson",
    "\"The only way to learn a new programming language is by writing programs in it.\" - Dennis Ritchie",
    "\"Adventure awaits outside your comfort zone.\" - Portfolio Wisdom",
    "\"Every climb starts with a single hold.\" - Climbing Philosophy",
    "\"In the river of life, adaptability is your paddle.\" - Kayaking Wisdom",
];

struct FortuneCmd;
impl Command for FortuneCmd {
    fn name(&self) -> &str {
        "fortune"
    }
    fn description(&self) -> &str {
        "Get a random quote"
    }
    fn usage(&self) -> &str {
        "fortune"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as usize;
        let idx = seed % QUOTES.len();
        Ok(CommandOutput::Lines(vec![
            "Fortune Cookie:".to_string(),
            String::new(),
            QUOTES[idx].to_string(),
        ]))
    }
}

/// Register decorative commands.
pub fn register_fun_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(AsciiCmd));
    reg.register(Box::new(MatrixCmd));
    reg.register(Box::new(CowsayCmd));
    reg.register(Box::new(FortuneCmd));
}
