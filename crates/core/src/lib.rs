//! Domain rules for the movie records service.
//!
//! Pure logic only: payload validation and the domain error type. Nothing in
//! this crate touches the network or the document store.

pub mod error;
pub mod movie;
