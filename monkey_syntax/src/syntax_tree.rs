//! Contains all the definition of syntax trees for the Monkey language and their parsing logic.
//!
//! Every node keeps the token that introduced it and renders back to Monkey source through
//! [`Display`](std::fmt::Display), with infix and prefix expressions fully parenthesized.

pub mod expression;
pub mod program;
pub mod statement;
