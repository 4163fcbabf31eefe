//! Tokenizer and answer checking

use serde::{Deserialize, Serialize};

/// What a token of the expected answer is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Word,
    Punctuation,
    Tip,
}

/// Check result for one token of the expected answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCheck {
    pub text: String,
    pub matched: bool,
    pub kind: TokenKind,
}

impl TokenCheck {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Tips and punctuation never take part in the word comparison
    pub fn is_non_word(&self) -> bool {
        self.kind != TokenKind::Word
    }

    /// Punctuation renders flush against the previous token
    pub fn no_space_before(&self) -> bool {
        self.kind == TokenKind::Punctuation
    }
}

/// Overall verdict for one typed answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    Wrong,
    Correct,
    /// Close enough to reveal which words matched
    Similar,
}

/// Result of checking one typed answer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerCheck {
    pub tokens: Vec<TokenCheck>,
    pub verdict: Verdict,
}

impl AnswerCheck {
    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }

    pub fn is_similar(&self) -> bool {
        self.verdict == Verdict::Similar
    }
}

fn is_punctuation(c: char) -> bool {
    matches!(c, ',' | '.' | ';' | '!' | '?' | '-')
}

fn is_tip(token: &str) -> bool {
    token.starts_with('(') && token.ends_with(')')
}

/// Split text into word, punctuation and `(…)` tip tokens
pub fn split_tokens(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            i += 1;
        } else if c == '(' {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }

            // Collect through the matching closing parenthesis
            let mut tip = String::new();
            tip.push(c);
            i += 1;
            while i < chars.len() && chars[i] != ')' {
                tip.push(chars[i]);
                i += 1;
            }
            if i < chars.len() {
                tip.push(chars[i]);
                i += 1;
            }

            tokens.push(tip);
        } else if is_punctuation(c) {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            tokens.push(c.to_string());
            i += 1;
        } else {
            current.push(c);
            i += 1;
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Check the typed input against the expected answer, token by token.
/// Expected tips and punctuation always match; expected words are
/// compared case-insensitively, in order, against the input's word
/// tokens only.
pub fn check_tokens(input: &str, expected: &str) -> Vec<TokenCheck> {
    let input_tokens = split_tokens(input);
    let expected_tokens = split_tokens(expected);

    let input_words: Vec<&String> = input_tokens
        .iter()
        .filter(|t| !t.is_empty() && !t.starts_with(is_punctuation) && !is_tip(t))
        .collect();

    let mut results = Vec::with_capacity(expected_tokens.len());
    let mut input_index = 0;

    for token in expected_tokens {
        let (matched, kind) = if is_tip(&token) {
            (true, TokenKind::Tip)
        } else if token.starts_with(is_punctuation) {
            (true, TokenKind::Punctuation)
        } else {
            let input_word = input_words
                .get(input_index)
                .map(|w| w.as_str())
                .unwrap_or("");
            input_index += 1;

            let matched =
                input_word.trim().to_lowercase() == token.trim().to_lowercase();
            (matched, TokenKind::Word)
        };

        results.push(TokenCheck {
            text: token,
            matched,
            kind,
        });
    }

    results
}

/// Check an answer and decide the verdict that drives the GUI: fully
/// matching answers are correct; single-word answers get no hint; an
/// answer with the first word right, or at least half the words right,
/// is close enough to reveal the per-token results.
pub fn check_answer(input: &str, expected: &str) -> AnswerCheck {
    let tokens = check_tokens(input, expected);

    if tokens.iter().all(|t| t.matched) {
        return AnswerCheck {
            tokens,
            verdict: Verdict::Correct,
        };
    }

    let word_count = tokens.iter().filter(|t| t.is_word()).count();
    if word_count == 1 {
        return AnswerCheck {
            tokens,
            verdict: Verdict::Wrong,
        };
    }

    let matched_words = tokens.iter().filter(|t| t.matched && t.is_word()).count();
    let verdict = if matched_words > 0 || matched_words >= word_count / 2 {
        Verdict::Similar
    } else {
        Verdict::Wrong
    };

    AnswerCheck { tokens, verdict }
}

/// Remove `(…)` groups and tighten the whitespace around them; used to
/// prepare text for the speech engine
pub fn strip_tips(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut result = String::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '(' {
            while i < chars.len() && chars[i] != ')' {
                i += 1;
            }
            if i < chars.len() {
                i += 1;
            }
            if i < chars.len() && chars[i] == ' ' {
                i += 1;
            }
        } else if chars[i] == ' ' && i + 1 < chars.len() && chars[i + 1] == '(' {
            i += 1;
        } else {
            result.push(chars[i]);
            i += 1;
        }
    }

    result.trim().to_string()
}
