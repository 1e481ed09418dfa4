//! Director role entity
//!
//! A director adds no fields beyond the Person base; the wrapper exists
//! so that directors live in their own identity map.

use crate::models::person::{Person, PersonId};
use crate::models::records::DirectorRecord;
use crate::registry::Entity;

/// A director: a person in the director role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Director {
    person: Person,
}

impl Director {
    /// The underlying person entity
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// The director's identifier
    pub fn person_id(&self) -> PersonId {
        self.person.person_id()
    }

    /// The director's name
    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.person.set_name(name);
    }

    /// Infallible build step of the two-phase constructor
    pub fn from_checked(slots: CheckedDirectorSlots) -> Self {
        Self {
            person: Person::new(slots.person_id, slots.name),
        }
    }

    /// Flatten into the storage record shape
    pub fn to_record(&self) -> DirectorRecord {
        DirectorRecord {
            person_id: self.person_id(),
            name: self.name().to_string(),
        }
    }
}

impl Entity for Director {
    type Id = PersonId;

    fn id(&self) -> PersonId {
        self.person_id()
    }
}

impl std::fmt::Display for Director {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Director{{ persID: {}, name: {} }}",
            self.person_id(),
            self.name()
        )
    }
}

/// Raw creation slots for a director record
#[derive(Debug, Clone, Default)]
pub struct DirectorSlots {
    /// Raw person id value
    pub person_id: Option<String>,
    /// The director's name
    pub name: Option<String>,
}

/// Slots that have passed every director field check
#[derive(Debug, Clone)]
pub struct CheckedDirectorSlots {
    pub(crate) person_id: PersonId,
    pub(crate) name: String,
}

/// Fields of a director update; absent fields stay untouched
#[derive(Debug, Clone)]
pub struct DirectorUpdate {
    /// Raw id of the director record to update
    pub person_id: String,
    /// New name, if supplied
    pub name: Option<String>,
}
