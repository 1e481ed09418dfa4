//! A Rust library for managing a film catalog with attribute validation,
//! entity associations and local JSON persistence.
//!
//! The entity layer (Person, Actor, Director, Movie) enforces referential
//! integrity eagerly: every reference is checked against the owning
//! registry at assignment time, never lazily. A [`Catalog`] bundles the
//! registries; a [`LocalStore`] snapshots them to a string-keyed JSON
//! store and loads them back in dependency order.

pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod store;

// Re-export the most common types for easier use
// Core types
pub use config::StoreConfig;
pub use error::{FilmbaseError, Result};

// Entities and slots
pub use models::actor::{Actor, ActorSlots, ActorUpdate};
pub use models::director::{Director, DirectorSlots, DirectorUpdate};
pub use models::movie::{Movie, MovieId, MovieSlots, MovieUpdate};
pub use models::person::{Person, PersonId, PersonRef, PersonSubtype};

// Validation
pub use models::types::{Enumeration, MovieCategory};
pub use models::validation::{CheckResult, Violation};

// Registries
pub use registry::{Catalog, Entity, UpdatedProperties};

// Persistence
pub use store::LocalStore;
