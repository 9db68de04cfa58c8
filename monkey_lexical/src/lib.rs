//! This crate implements the lexical analysis phase of the Monkey front end. This phase is
//! responsible for scanning the source code into tokens, one token per request.
//!
//! The entry point is [`lexer::Lexer`], which hands out [`token::Token`]s on demand until it
//! reaches the end of the source file.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod lexer;
pub mod token;
