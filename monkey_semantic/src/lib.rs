//! This crate evaluates the syntax tree produced by `monkey_syntax`.
//!
//! Only integer literals produce values so far; every other construct evaluates to nothing.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod interpreter;
