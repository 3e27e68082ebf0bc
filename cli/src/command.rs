//! Stdin commands
//!
//! One command per line. Anything unrecognised shows the help text.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Scroll one screen down (empty line or `j`)
    Down,
    /// Scroll one screen up
    Up,
    /// Replace the search filter; empty clears it
    Search(String),
    Quit,
    Help,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if let Some(filter) = line.strip_prefix('/') {
            return Command::Search(filter.trim().to_string());
        }
        match line {
            "" | "j" => Command::Down,
            "k" => Command::Up,
            "q" | "quit" => Command::Quit,
            _ => Command::Help,
        }
    }
}

pub fn help_text() -> &'static str {
    "Commands:\n  \
     <enter> or j   scroll down\n  \
     k              scroll up\n  \
     /<text>        search memes\n  \
     /              clear search\n  \
     q              quit"
}
