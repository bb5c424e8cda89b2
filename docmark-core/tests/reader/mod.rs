//! Reader tests
//!
//! XML documentation → model, including positioned failures and the
//! structural equality of unrecognized elements.

mod errors;
mod file;
mod unrecognized;
