//! Registries and the catalog repository
//!
//! Each registry is an in-memory mapping from entity id to entity and is
//! the sole owner of its entities. The `Catalog` bundles the registries
//! and carries every CRUD entry point, so callers own their state
//! explicitly instead of reaching into process-wide globals; tests can
//! construct isolated catalogs per case.

pub mod actor;
pub mod director;
pub mod movie;
pub mod person;

use smallvec::SmallVec;

pub use actor::ActorRegistry;
pub use director::DirectorRegistry;
pub use movie::MovieRegistry;
pub use person::PersonDirectory;

/// Common interface for catalog entities
pub trait Entity: Clone + std::fmt::Debug {
    /// The identifier type of this entity
    type Id: Copy + Ord + std::fmt::Display;

    /// The unique identifier of this entity within its registry
    fn id(&self) -> Self::Id;

    /// Canonical string form of the identifier, used as the storage map
    /// key
    fn key(&self) -> String {
        self.id().to_string()
    }
}

/// Names of the fields changed by an update, in application order.
///
/// An empty list means the update ran without changing anything, which is
/// reported distinctly from a failed update.
pub type UpdatedProperties = SmallVec<[&'static str; 8]>;

/// The application's entity repository: one registry per entity kind plus
/// the shared person identity map
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) people: PersonDirectory,
    pub(crate) actors: ActorRegistry,
    pub(crate) directors: DirectorRegistry,
    pub(crate) movies: MovieRegistry,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared person identity map
    pub fn people(&self) -> &PersonDirectory {
        &self.people
    }

    /// The actor registry
    pub fn actors(&self) -> &ActorRegistry {
        &self.actors
    }

    /// The director registry
    pub fn directors(&self) -> &DirectorRegistry {
        &self.directors
    }

    /// The movie registry
    pub fn movies(&self) -> &MovieRegistry {
        &self.movies
    }
}
