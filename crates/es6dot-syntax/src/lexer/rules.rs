// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The ordered lexical rule table.
//!
//! Rules are tried in table order and the first one that matches at the
//! scan position wins, so ordering doubles as precedence:
//!
//! | Order | Rules | Why it must come here |
//! |-------|-------|-----------------------|
//! | 1 | whitespace | skipped, never emitted |
//! | 2 | reserved words | textually valid identifiers |
//! | 3 | string, number | `.5` must not lex as `.` |
//! | 4 | identifier | |
//! | 5 | regular expression | shadows `/` and `/=` |
//! | 6 | punctuators, longest first | `===` before `==` before `=` |

use regex::Regex;

use super::TokenKind;

/// Reserved words, in table order.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("break", TokenKind::Break),
    ("case", TokenKind::Case),
    ("catch", TokenKind::Catch),
    ("class", TokenKind::Class),
    ("const", TokenKind::Const),
    ("continue", TokenKind::Continue),
    ("debugger", TokenKind::Debugger),
    ("default", TokenKind::Default),
    ("delete", TokenKind::Delete),
    ("do", TokenKind::Do),
    ("else", TokenKind::Else),
    ("export", TokenKind::Export),
    ("extends", TokenKind::Extends),
    ("finally", TokenKind::Finally),
    ("for", TokenKind::For),
    ("function", TokenKind::Function),
    ("if", TokenKind::If),
    ("import", TokenKind::Import),
    ("in", TokenKind::In),
    ("instanceof", TokenKind::Instanceof),
    ("new", TokenKind::New),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("switch", TokenKind::Switch),
    ("this", TokenKind::This),
    ("throw", TokenKind::Throw),
    ("try", TokenKind::Try),
    ("typeof", TokenKind::Typeof),
    ("var", TokenKind::Var),
    ("void", TokenKind::Void),
    ("while", TokenKind::While),
    ("with", TokenKind::With),
    ("yield", TokenKind::Yield),
    ("null", TokenKind::Null),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
];

/// Operators and delimiters, longest first.
pub const PUNCTUATORS: &[(&str, TokenKind)] = &[
    (">>>=", TokenKind::UnsignedRightShiftEqual),
    ("...", TokenKind::Ellipsis),
    ("===", TokenKind::StrictEqual),
    ("!==", TokenKind::StrictNotEqual),
    (">>>", TokenKind::UnsignedRightShift),
    ("<<=", TokenKind::LeftShiftEqual),
    (">>=", TokenKind::RightShiftEqual),
    ("=>", TokenKind::Arrow),
    ("==", TokenKind::EqualEqual),
    ("!=", TokenKind::NotEqual),
    ("<=", TokenKind::LessThanEqual),
    (">=", TokenKind::GreaterThanEqual),
    ("+=", TokenKind::PlusEqual),
    ("-=", TokenKind::MinusEqual),
    ("*=", TokenKind::StarEqual),
    ("/=", TokenKind::SlashEqual),
    ("%=", TokenKind::PercentEqual),
    ("&=", TokenKind::AmpersandEqual),
    ("|=", TokenKind::PipeEqual),
    ("^=", TokenKind::CaretEqual),
    ("++", TokenKind::PlusPlus),
    ("--", TokenKind::MinusMinus),
    ("<<", TokenKind::LeftShift),
    (">>", TokenKind::RightShift),
    ("&&", TokenKind::AmpersandAmpersand),
    ("||", TokenKind::PipePipe),
    ("=", TokenKind::Equal),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("%", TokenKind::Percent),
    ("!", TokenKind::Bang),
    ("&", TokenKind::Ampersand),
    ("|", TokenKind::Pipe),
    ("^", TokenKind::Caret),
    ("<", TokenKind::LessThan),
    (">", TokenKind::GreaterThan),
    ("(", TokenKind::LeftParen),
    (")", TokenKind::RightParen),
    ("[", TokenKind::LeftBracket),
    ("]", TokenKind::RightBracket),
    ("{", TokenKind::LeftBrace),
    ("}", TokenKind::RightBrace),
    (",", TokenKind::Comma),
    (".", TokenKind::Dot),
    (":", TokenKind::Colon),
    (";", TokenKind::Semicolon),
    ("?", TokenKind::Question),
    ("@", TokenKind::At),
    ("`", TokenKind::Backquote),
];

const WHITESPACE_PATTERN: &str = r"\s+";
const STRING_PATTERN: &str = r#""(?:\\.|[^\\"])*"|'(?:\\.|[^\\'])*'"#;
const NUMBER_PATTERN: &str = r"[0-9]*\.[0-9]+|[0-9]+";
const IDENTIFIER_PATTERN: &str = r"[a-zA-Z_$][a-zA-Z0-9_$]*";
const REGEXP_PATTERN: &str = r"/(?:\\.|[^/])*/[gimy]*";

/// What the tokenizer does with a matched rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Consume the text without emitting a token
    Skip,
    /// Emit a token of this kind
    Emit(TokenKind),
}

/// How a rule recognizes its text.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// A reserved word, matched only as a whole word
    Keyword(&'static str),
    /// An exact punctuator
    Literal(&'static str),
    /// A regular expression anchored at the scan position
    Pattern(Regex),
}

impl Matcher {
    fn pattern(source: &str) -> Self {
        let anchored = format!("^(?:{source})");
        Matcher::Pattern(Regex::new(&anchored).expect("built-in token patterns are valid"))
    }

    /// Returns the length in bytes of the match at the start of `input`.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        match self {
            Matcher::Keyword(word) => {
                let rest = input.strip_prefix(word)?;
                match rest.chars().next() {
                    Some(c) if is_identifier_part(c) => None,
                    _ => Some(word.len()),
                }
            }
            Matcher::Literal(text) => input.starts_with(text).then_some(text.len()),
            Matcher::Pattern(regex) => regex.find(input).map(|m| m.end()),
        }
    }
}

fn is_identifier_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// A single lexical rule.
#[derive(Debug, Clone)]
pub struct Rule {
    /// What to do with the matched text
    pub action: Action,
    /// How the text is recognized
    pub matcher: Matcher,
}

/// The full, ordered rule table.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Builds the standard rule table.
    pub fn new() -> Self {
        let mut rules = Vec::with_capacity(KEYWORDS.len() + PUNCTUATORS.len() + 5);

        rules.push(Rule {
            action: Action::Skip,
            matcher: Matcher::pattern(WHITESPACE_PATTERN),
        });

        rules.extend(KEYWORDS.iter().map(|&(word, kind)| Rule {
            action: Action::Emit(kind),
            matcher: Matcher::Keyword(word),
        }));

        for (kind, pattern) in [
            (TokenKind::String, STRING_PATTERN),
            (TokenKind::Number, NUMBER_PATTERN),
            (TokenKind::Identifier, IDENTIFIER_PATTERN),
            (TokenKind::RegExp, REGEXP_PATTERN),
        ] {
            rules.push(Rule {
                action: Action::Emit(kind),
                matcher: Matcher::pattern(pattern),
            });
        }

        rules.extend(PUNCTUATORS.iter().map(|&(text, kind)| Rule {
            action: Action::Emit(kind),
            matcher: Matcher::Literal(text),
        }));

        Self { rules }
    }

    /// Finds the first rule matching at the start of `input`.
    ///
    /// Returns the rule's action and the matched length. Empty matches
    /// are never reported.
    pub fn first_match(&self, input: &str) -> Option<(Action, usize)> {
        self.rules.iter().find_map(|rule| {
            rule.matcher
                .match_len(input)
                .filter(|&len| len > 0)
                .map(|len| (rule.action, len))
        })
    }

    /// Returns the rules in order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(input: &str) -> Option<(Action, usize)> {
        RuleTable::new().first_match(input)
    }

    #[test]
    fn test_keywords_precede_identifier() {
        assert_eq!(first("var x"), Some((Action::Emit(TokenKind::Var), 3)));
        assert_eq!(
            first("variable"),
            Some((Action::Emit(TokenKind::Identifier), 8))
        );
    }

    #[test]
    fn test_keyword_requires_whole_word() {
        assert_eq!(
            first("instanceof"),
            Some((Action::Emit(TokenKind::Instanceof), 10))
        );
        assert_eq!(first("in("), Some((Action::Emit(TokenKind::In), 2)));
        assert_eq!(first("do$"), Some((Action::Emit(TokenKind::Identifier), 3)));
    }

    #[test]
    fn test_longest_punctuator_wins() {
        assert_eq!(
            first("===x"),
            Some((Action::Emit(TokenKind::StrictEqual), 3))
        );
        assert_eq!(first("==x"), Some((Action::Emit(TokenKind::EqualEqual), 2)));
        assert_eq!(first("=x"), Some((Action::Emit(TokenKind::Equal), 1)));
        assert_eq!(
            first(">>>=1"),
            Some((Action::Emit(TokenKind::UnsignedRightShiftEqual), 4))
        );
        assert_eq!(first("=>"), Some((Action::Emit(TokenKind::Arrow), 2)));
    }

    #[test]
    fn test_number_precedes_dot() {
        assert_eq!(first(".5"), Some((Action::Emit(TokenKind::Number), 2)));
        assert_eq!(first("..."), Some((Action::Emit(TokenKind::Ellipsis), 3)));
        assert_eq!(first(".x"), Some((Action::Emit(TokenKind::Dot), 1)));
    }

    #[test]
    fn test_regexp_precedes_slash() {
        assert_eq!(first("/ab/g;"), Some((Action::Emit(TokenKind::RegExp), 5)));
        assert_eq!(first("/ 2"), Some((Action::Emit(TokenKind::Slash), 1)));
        assert_eq!(first("/= 2"), Some((Action::Emit(TokenKind::SlashEqual), 2)));
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(first(" \t\n x"), Some((Action::Skip, 4)));
    }

    #[test]
    fn test_unknown_character_has_no_rule() {
        assert_eq!(first("#"), None);
        assert_eq!(first(""), None);
    }

    #[test]
    fn test_table_order() {
        let table = RuleTable::new();
        let rules = table.rules();
        assert_eq!(rules.len(), 1 + KEYWORDS.len() + 4 + PUNCTUATORS.len());
        assert_eq!(rules[0].action, Action::Skip);
        assert_eq!(rules[1].action, Action::Emit(TokenKind::Break));
        assert_eq!(
            rules[1 + KEYWORDS.len() + 2].action,
            Action::Emit(TokenKind::Identifier)
        );
    }

    #[test]
    fn test_punctuators_sorted_longest_first() {
        let lengths: Vec<usize> = PUNCTUATORS.iter().map(|(text, _)| text.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    }
}
