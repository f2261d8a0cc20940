//! Document store layer.
//!
//! [`MovieStore`] is the seam between the HTTP handlers and persistence. It
//! is object safe so the server can hold any backend behind
//! `Arc<dyn MovieStore>`: [`MongoMovieStore`] in production and
//! [`MemoryMovieStore`] in tests and local runs.

pub mod memory_movie_store;
pub mod mongo_movie_store;
pub mod movie_store;

pub use memory_movie_store::MemoryMovieStore;
pub use mongo_movie_store::MongoMovieStore;
pub use movie_store::MovieStore;
