//! Person base entity
//!
//! A person is the shared identity root for the role entities (Actor,
//! Director). Identity (`person_id`) and the name are the only attributes
//! shared by every role, so roles are modeled as wrappers around a Person
//! value rather than as subtypes.

use crate::models::records::PersonRecord;
use crate::models::validation::{check_required_string, parse_positive_int, CheckResult};
use crate::registry::Entity;

/// Identifier of a person record (positive integer)
pub type PersonId = u32;

/// Core person entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    person_id: PersonId,
    name: String,
}

impl Person {
    pub(crate) fn new(person_id: PersonId, name: String) -> Self {
        Self { person_id, name }
    }

    /// The person's identifier
    pub fn person_id(&self) -> PersonId {
        self.person_id
    }

    /// The person's name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Ordered list of the entity kinds that specialize Person, used by
    /// the store to fan person-level load/save out to each concrete
    /// registry.
    pub const SUBTYPES: [PersonSubtype; 2] = [PersonSubtype::Actor, PersonSubtype::Director];

    /// Check an optional person id value. Absent input is no violation;
    /// a value that is not coercible to a positive integer is a range
    /// violation.
    pub fn check_person_id(raw: Option<&str>) -> CheckResult<Option<PersonId>> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(None),
            Some(s) => parse_positive_int(s, "person ID").map(Some),
        }
    }

    /// Check a person name value
    pub fn check_name(raw: Option<&str>) -> CheckResult<String> {
        check_required_string(raw, "name")
    }

    /// Flatten into the storage record shape
    pub fn to_record(&self) -> PersonRecord {
        PersonRecord {
            person_id: self.person_id,
            name: self.name.clone(),
        }
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> PersonId {
        self.person_id
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Person{{ persID: {}, name: {} }}", self.person_id, self.name)
    }
}

/// The entity kinds that specialize Person
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonSubtype {
    /// The actor role registry
    Actor,
    /// The director role registry
    Director,
}

/// A reference to a person, by raw id value or by resolved handle.
///
/// References normalize to an owned id: the registry stays the sole owner
/// of its entities and the reference is only a lookup key, resolved
/// against the person directory at check time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonRef {
    /// Raw id value as captured from a form field
    Raw(String),
    /// Already-parsed id, e.g. taken from an entity handle or a storage
    /// record
    Id(PersonId),
}

impl PersonRef {
    /// Normalize to an id. Empty raw input counts as absent; input that
    /// does not parse as a positive integer is a range violation.
    pub fn id(&self) -> CheckResult<Option<PersonId>> {
        match self {
            Self::Id(id) => Ok(Some(*id)),
            Self::Raw(raw) => Person::check_person_id(Some(raw)),
        }
    }
}

impl From<PersonId> for PersonRef {
    fn from(id: PersonId) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for PersonRef {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for PersonRef {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<&Person> for PersonRef {
    fn from(person: &Person) -> Self {
        Self::Id(person.person_id())
    }
}
