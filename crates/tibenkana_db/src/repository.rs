//! Repository factory abstraction
//!
//! Storage backends are built from a connection-like value `C` so callers
//! never name a concrete backend type.

/// A trait for database repository factories
pub trait RepositoryFactory<R, C> {
    /// Create a new repository instance from `config`.
    fn create_repository(&self, config: C) -> R;
}
