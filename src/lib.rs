//! Pesh is a lexical front end for the POSIX shell command language.
//!
//! The [`lexer`] converts shell input into tokens: command words, IO numbers, control
//! and redirection operators. Quoting, escaping and expansion syntax is honored so that
//! a later grammar stage may treat each word as a unit.

pub mod dump;
pub mod lexer;
pub mod source;
pub mod term;
#[cfg(test)]
mod tests;
