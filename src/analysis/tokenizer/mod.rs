//! Tokenizer implementations for text analysis.
//!
//! Tokenizers break input text into the tokens the classifier counts.
//! A classifier takes its tokenizer once at construction and reuses it for
//! every subsequent learn/guess/train call, so implementations must be pure
//! functions of their input.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//! - [`regex::RegexTokenizer`] - Custom regex-based tokenization
//!
//! # Examples
//!
//! ```
//! use verdict::analysis::tokenizer::Tokenizer;
//! use verdict::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a classifier holding a tokenizer can
/// be moved between threads.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use verdict::analysis::token::{Token, TokenStream};
/// use verdict::analysis::tokenizer::Tokenizer;
/// use verdict::error::Result;
///
/// struct CustomTokenizer;
///
/// impl Tokenizer for CustomTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "custom"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// Must be deterministic: the same input text always produces the same
    /// token sequence.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod regex;
pub mod unicode_word;
pub mod whitespace;
