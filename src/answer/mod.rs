//! Answer validation
//!
//! Token-level comparison of the typed answer against the expected
//! translation. Parenthesized tips and punctuation are carried through
//! as always-matching tokens so the GUI can render the full expected
//! text while only the words decide the verdict.

pub mod checker;

pub use checker::{
    check_answer, check_tokens, split_tokens, strip_tips, AnswerCheck, TokenCheck, TokenKind,
    Verdict,
};
