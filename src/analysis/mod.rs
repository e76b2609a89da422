//! Text analysis primitives for the classifier.
//!
//! The classifier itself is tokenizer-agnostic: it holds an injected
//! [`Tokenizer`] and treats its output as opaque units of evidence. This
//! module defines the token type, the tokenizer trait, and a few stock
//! implementations so the crate is usable without writing a tokenizer first.

pub mod token;
pub mod tokenizer;

pub use token::{Token, TokenStream};
pub use tokenizer::Tokenizer;
pub use tokenizer::regex::RegexTokenizer;
pub use tokenizer::unicode_word::UnicodeWordTokenizer;
pub use tokenizer::whitespace::WhitespaceTokenizer;
