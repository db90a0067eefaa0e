//! Miette diagnostic wrapper for amount input errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for an amount that cannot be spelled.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("cannot spell amount: {message}")]
#[diagnostic(code(propis::amount))]
pub struct AmountDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("this amount")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl AmountDiagnostic {
    /// Create a diagnostic that highlights the whole input.
    pub fn new(input: &str, message: &str, help: Option<String>) -> Self {
        let help = help.or_else(|| Some("use digits with an optional decimal part".to_string()));
        AmountDiagnostic {
            src: NamedSource::new("argument", input.to_string()),
            span: (0, input.len()).into(),
            message: message.to_string(),
            help,
        }
    }
}
