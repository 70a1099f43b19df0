//! Error types with rich diagnostics using miette
//!
//! Parse errors carry source spans into the offending path text.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::defaults;

/// Name given to path text in diagnostics
const PATH_SOURCE_NAME: &str = "<path>";

pub(crate) fn path_source(text: &str) -> NamedSource<String> {
    NamedSource::new(PATH_SOURCE_NAME, text.to_string())
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors that occur while parsing path text
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("malformed path: {message}")]
    #[diagnostic(code(plotmark::parse::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("unknown path command: {letter}")]
    #[diagnostic(
        code(plotmark::parse::unknown_command),
        help("supported commands are M m L l H h V v A a Z z")
    )]
    UnknownCommand {
        letter: char,
        #[source_code]
        src: NamedSource<String>,
        #[label("unsupported command")]
        span: SourceSpan,
    },

    #[error("path command {letter} takes {expected} operands, found {found}")]
    #[diagnostic(code(plotmark::parse::arity))]
    Arity {
        letter: char,
        expected: usize,
        found: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("wrong operand count")]
        span: SourceSpan,
    },

    #[error("invalid number: {message}")]
    #[diagnostic(code(plotmark::parse::invalid_number))]
    InvalidNumber {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid number")]
        span: SourceSpan,
    },

    #[error("arc flag must be 0 or 1, found {value}")]
    #[diagnostic(code(plotmark::parse::invalid_flag))]
    InvalidFlag {
        value: f64,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a flag")]
        span: SourceSpan,
    },
}

// ============================================================================
// Catalog Errors
// ============================================================================

/// A symbol name or code that the catalog does not contain
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[error("unknown marker symbol: {ident}")]
#[diagnostic(code(plotmark::symbol::unknown))]
pub struct UnknownSymbolError {
    pub ident: String,
    #[help]
    pub help: Option<String>,
}

impl UnknownSymbolError {
    pub(crate) fn for_name(name: &str) -> Self {
        let help = if name.ends_with("-open") || name.ends_with("-dot") {
            Some("open and dot variants are resolved before symbols reach the catalog".to_string())
        } else {
            crate::symbol::CATALOG
                .iter()
                .find(|d| d.name.eq_ignore_ascii_case(name) || d.name.replace('-', "") == name)
                .map(|d| format!("did you mean `{}`?", d.name))
        };
        Self {
            ident: name.to_string(),
            help,
        }
    }

    pub(crate) fn for_code(code: u32) -> Self {
        let base = code % defaults::OPEN_OFFSET;
        let variant_range = defaults::OPEN_OFFSET..defaults::DOT_OFFSET + defaults::OPEN_OFFSET;
        let help = if variant_range.contains(&code) && (base as usize) < defaults::SYMBOL_COUNT {
            format!(
                "codes {}+ and {}+ are open/dot variants; pass the base code {}",
                defaults::OPEN_OFFSET,
                defaults::DOT_OFFSET,
                base
            )
        } else {
            format!("symbol codes run from 0 to {}", defaults::SYMBOL_COUNT - 1)
        };
        Self {
            ident: code.to_string(),
            help: Some(help),
        }
    }
}

// ============================================================================
// Top-level Error
// ============================================================================

/// Any error produced by the engine
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    UnknownSymbol(#[from] UnknownSymbolError),
}
