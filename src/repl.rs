// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL (Read-Parse-Print Loop) for es6dot.

use es6dot_syntax::lexer::{KEYWORDS, Lexer, TokenKind};
use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Editor, Helper};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{OutputMode, print_error, run_source};

/// REPL configuration constants
const HISTORY_FILE: &str = ".es6dot_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
    Tokens,
    Json,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let rest = input.trim().strip_prefix('.')?;

        let parts: Vec<&str> = rest.splitn(2, char::is_whitespace).collect();
        let cmd = parts.first()?.to_lowercase();
        let arg = parts.get(1).copied();

        match cmd.as_str() {
            "help" | "h" | "?" => Some((ReplCommand::Help, arg)),
            "exit" | "quit" | "q" => Some((ReplCommand::Exit, arg)),
            "clear" | "cls" => Some((ReplCommand::Clear, arg)),
            "version" | "v" => Some((ReplCommand::Version, arg)),
            "load" | "l" => Some((ReplCommand::Load, arg)),
            "tokens" | "t" => Some((ReplCommand::Tokens, arg)),
            "json" | "j" => Some((ReplCommand::Json, arg)),
            _ => None,
        }
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Load and parse a source file"),
            (".tokens", "Toggle printing tokens instead of the AST"),
            (".json", "Toggle printing the AST as JSON"),
        ]
    }
}

/// Helper struct for rustyline that provides completion, hints, highlighting and validation
struct Es6dotHelper {
    /// Reserved words and REPL commands for completion
    words: Vec<String>,
    lexer: Lexer,
}

impl Es6dotHelper {
    fn new() -> Self {
        let words = KEYWORDS
            .iter()
            .map(|(word, _)| (*word).to_string())
            .chain(
                ReplCommand::all_commands()
                    .iter()
                    .filter_map(|(cmd, _)| cmd.split_whitespace().next())
                    .map(String::from),
            )
            .collect();

        Self {
            words,
            lexer: Lexer::new(),
        }
    }
}

/// Start of the word ending at `pos`.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .rfind(|c: char| !c.is_alphanumeric() && c != '_' && c != '$' && c != '.')
        .map(|i| i + 1)
        .unwrap_or(0)
}

impl Completer for Es6dotHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let word = &line[word_start(line, pos)..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches: Vec<Pair> = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for Es6dotHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let word = &line[word_start(line, pos)..];
        if word.len() < 2 {
            return None;
        }

        self.words
            .iter()
            .find(|w| w.starts_with(word) && w.len() > word.len())
            .map(|w| w[word.len()..].to_string().dimmed().to_string())
    }
}

impl Highlighter for Es6dotHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with('.') {
            return Cow::Owned(line.magenta().to_string());
        }

        // Unlexable input is shown as typed; the parse reports the error.
        let Ok(tokens) = self.lexer.tokenize(line) else {
            return Cow::Borrowed(line);
        };

        let mut result = String::with_capacity(line.len() * 2);
        let mut last = 0;
        for token in &tokens {
            result.push_str(&line[last..token.span.start]);
            result.push_str(&highlight_token(token.kind, &line[token.span.start..token.span.end]));
            last = token.span.end;
        }
        result.push_str(&line[last..]);

        Cow::Owned(result)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

fn highlight_token(kind: TokenKind, text: &str) -> String {
    match kind {
        TokenKind::True | TokenKind::False | TokenKind::Null | TokenKind::This => {
            text.blue().to_string()
        }
        _ if kind.is_keyword() => text.magenta().bold().to_string(),
        TokenKind::Number => text.yellow().to_string(),
        TokenKind::String => text.green().to_string(),
        TokenKind::RegExp => text.red().to_string(),
        TokenKind::LeftParen
        | TokenKind::RightParen
        | TokenKind::LeftBracket
        | TokenKind::RightBracket
        | TokenKind::LeftBrace
        | TokenKind::RightBrace => text.yellow().to_string(),
        _ if kind.is_punctuator() => text.cyan().to_string(),
        _ => text.to_string(),
    }
}

impl Validator for Es6dotHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        let input = ctx.input();

        // Check for balanced brackets/braces/parentheses
        if !is_balanced(input) {
            return Ok(ValidationResult::Incomplete);
        }

        // A trailing operator or opener expects more input
        let trimmed = input.trim();
        if trimmed.ends_with('\\')
            || trimmed.ends_with('+')
            || trimmed.ends_with('=')
            || trimmed.ends_with(',')
            || trimmed.ends_with('{')
            || trimmed.ends_with('(')
        {
            return Ok(ValidationResult::Incomplete);
        }

        Ok(ValidationResult::Valid(None))
    }
}

/// Check if brackets, braces, and parentheses are balanced
fn is_balanced(input: &str) -> bool {
    let mut stack = Vec::new();
    let mut in_string = None;
    let mut escape_next = false;

    for c in input.chars() {
        if escape_next {
            escape_next = false;
            continue;
        }

        if c == '\\' && in_string.is_some() {
            escape_next = true;
            continue;
        }

        match in_string {
            Some(quote) if c == quote => in_string = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => in_string = Some(c),
                '(' => stack.push(')'),
                '[' => stack.push(']'),
                '{' => stack.push('}'),
                ')' | ']' | '}' => {
                    if stack.pop() != Some(c) {
                        return true; // Unbalanced but we should let the parser handle the error
                    }
                }
                _ => {}
            },
        }
    }

    stack.is_empty() && in_string.is_none()
}

impl Helper for Es6dotHelper {}

/// The interactive REPL
pub struct Repl {
    editor: Editor<Es6dotHelper, DefaultHistory>,
    history_path: PathBuf,
    mode: OutputMode,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new(mode: OutputMode) -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(Es6dotHelper::new()));

        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("es6dot")
            .join(HISTORY_FILE);

        if let Err(e) = create_history_dir(&history_path) {
            debug!(path = %history_path.display(), error = %e, "history directory not created");
        }

        if let Err(e) = editor.load_history(&history_path) {
            debug!(path = %history_path.display(), error = %e, "no history loaded");
        }

        Ok(Self {
            editor,
            history_path,
            mode,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> rustyline::Result<()> {
        self.print_banner();

        loop {
            let prompt = format!("{} ", "es6dot>".bright_green().bold());

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();

                    if trimmed.is_empty() {
                        continue;
                    }

                    if let Some((cmd, arg)) = ReplCommand::parse(trimmed) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    self.parse_and_print(trimmed);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".dimmed());
                    break;
                }
                Err(err) => {
                    eprintln!("{}: {:?}", "Error".red().bold(), err);
                    break;
                }
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_path) {
            debug!(path = %self.history_path.display(), error = %e, "history not saved");
        }

        println!();
        Ok(())
    }

    fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!(
            "  {} {} {}",
            "es6dot".bright_cyan().bold(),
            "v".dimmed(),
            version.bright_yellow()
        );
        println!(
            "  {}",
            "Tokenizer and parser for a small ES2015 subset".dimmed()
        );
        println!();
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
        println!();
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => self.print_help(),
            ReplCommand::Exit => return CommandResult::Exit,
            ReplCommand::Clear => print!("\x1B[2J\x1B[H"),
            ReplCommand::Version => {
                println!(
                    "{}: {}",
                    "es6dot".bright_cyan().bold(),
                    env!("CARGO_PKG_VERSION").yellow()
                );
            }
            ReplCommand::Load => match arg {
                Some(path) => self.load_file(path),
                None => eprintln!(
                    "{}: {} {}",
                    "Error".red().bold(),
                    ".load".cyan(),
                    "requires a file path".dimmed()
                ),
            },
            ReplCommand::Tokens => {
                self.mode = toggle(self.mode, OutputMode::Tokens);
                self.print_mode();
            }
            ReplCommand::Json => {
                self.mode = toggle(self.mode, OutputMode::Json);
                self.print_mode();
            }
        }
        CommandResult::Continue
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:16} {}", cmd.cyan(), desc.dimmed());
        }

        println!();
        println!("{}", "Keyboard Shortcuts:".white().bold());
        println!();
        println!(
            "  {:16} {}",
            "Ctrl+C".yellow(),
            "Cancel current input".dimmed()
        );
        println!("  {:16} {}", "Ctrl+D".yellow(), "Exit REPL".dimmed());
        println!("  {:16} {}", "Tab".yellow(), "Autocomplete".dimmed());
        println!("  {:16} {}", "↑/↓".yellow(), "Navigate history".dimmed());
        println!();
    }

    fn print_mode(&self) {
        let name = match self.mode {
            OutputMode::Ast => "ast",
            OutputMode::Json => "json",
            OutputMode::Tokens => "tokens",
        };
        println!("{} {}", "output:".dimmed(), name.cyan());
    }

    fn load_file(&mut self, path: &str) {
        let path = Path::new(path.trim());

        match std::fs::read_to_string(path) {
            Ok(source) => self.parse_and_print(&source),
            Err(e) => print_error(&format!("IOError: Failed to read {}: {}", path.display(), e)),
        }
    }

    fn parse_and_print(&self, input: &str) {
        if let Err(e) = run_source(input, self.mode) {
            print_error(&e.to_string());
        }
    }
}

/// Switch to `target`, or back to the AST view if it is already active.
fn toggle(current: OutputMode, target: OutputMode) -> OutputMode {
    if current == target {
        OutputMode::Ast
    } else {
        target
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}

/// Create the directory that holds the history file.
fn create_history_dir(history_path: &Path) -> std::io::Result<()> {
    match history_path.parent() {
        Some(parent) => std::fs::create_dir_all(parent),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repl_command_parse() {
        assert!(matches!(
            ReplCommand::parse(".help"),
            Some((ReplCommand::Help, None))
        ));
        assert!(matches!(
            ReplCommand::parse(".exit"),
            Some((ReplCommand::Exit, None))
        ));
        assert!(matches!(
            ReplCommand::parse(".load test.js"),
            Some((ReplCommand::Load, Some("test.js")))
        ));
        assert!(matches!(
            ReplCommand::parse(".tokens"),
            Some((ReplCommand::Tokens, None))
        ));
        assert!(ReplCommand::parse("not a command").is_none());
        assert!(ReplCommand::parse(".bogus").is_none());
    }

    #[test]
    fn test_is_balanced() {
        assert!(is_balanced("function f(a) { return a }"));
        assert!(is_balanced("(a)"));
        assert!(!is_balanced("function f(a) {"));
        assert!(!is_balanced("f(a"));
        assert!(is_balanced("'string with (unbalanced'"));
    }

    #[test]
    fn test_create_history_dir() {
        let dir = tempfile::tempdir().unwrap();
        let history = dir.path().join("es6dot").join(HISTORY_FILE);
        assert!(create_history_dir(&history).is_ok());
        assert!(dir.path().join("es6dot").is_dir());

        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        assert!(create_history_dir(&blocker.join("es6dot").join(HISTORY_FILE)).is_err());
    }

    #[test]
    fn test_toggle() {
        assert_eq!(toggle(OutputMode::Ast, OutputMode::Json), OutputMode::Json);
        assert_eq!(toggle(OutputMode::Json, OutputMode::Json), OutputMode::Ast);
        assert_eq!(
            toggle(OutputMode::Json, OutputMode::Tokens),
            OutputMode::Tokens
        );
    }

    #[test]
    fn test_word_start() {
        assert_eq!(word_start("var fun", 7), 4);
        assert_eq!(word_start("ret", 3), 0);
        assert_eq!(word_start("x = .he", 7), 4);
    }

    #[test]
    fn test_highlight_keeps_text() {
        let helper = Es6dotHelper::new();
        let plain = "x = #";
        assert_eq!(helper.highlight(plain, 0), plain);

        let highlighted = helper.highlight("var x = 1", 0);
        assert!(highlighted.contains("var"));
        assert!(highlighted.contains('1'));
    }

    #[test]
    fn test_completion_words_include_keywords_and_commands() {
        let helper = Es6dotHelper::new();
        assert!(helper.words.iter().any(|w| w == "function"));
        assert!(helper.words.iter().any(|w| w == ".load"));
    }
}
