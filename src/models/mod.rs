//! Domain models for the film catalog
//!
//! Entities are plain values owned by their registries. Construction is
//! two-phase: a pure check step over raw slots followed by an infallible
//! build, so a failed constraint is an ordinary result rather than a
//! half-built entity.

pub mod actor;
pub mod director;
pub mod movie;
pub mod person;
pub mod records;
pub mod types;
pub mod validation;
