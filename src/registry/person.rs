//! Shared person identity map and person-level checks
//!
//! Every person-derived entity (actor, director) is mirrored in this
//! directory, so id uniqueness holds across all roles and reference
//! checks for directors, cast members, agents and biography subjects all
//! resolve against one map.

use std::collections::BTreeMap;

use crate::models::person::{Person, PersonId};
use crate::models::validation::{CheckResult, Violation};
use crate::registry::Catalog;

/// The shared identity map from person id to person
#[derive(Debug, Clone, Default)]
pub struct PersonDirectory {
    instances: BTreeMap<PersonId, Person>,
}

impl PersonDirectory {
    /// Look up a person by id
    pub fn get(&self, person_id: PersonId) -> Option<&Person> {
        self.instances.get(&person_id)
    }

    /// Whether a person with this id exists
    pub fn contains(&self, person_id: PersonId) -> bool {
        self.instances.contains_key(&person_id)
    }

    /// Number of person records
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Iterate over all persons in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.instances.values()
    }

    pub(crate) fn insert(&mut self, person: Person) {
        self.instances.insert(person.person_id(), person);
    }

    pub(crate) fn remove(&mut self, person_id: PersonId) -> Option<Person> {
        self.instances.remove(&person_id)
    }

    /// Check an id value that is to become the identifier of a new person
    /// record: mandatory, a positive integer, and unique across all
    /// person roles.
    pub fn check_person_id_as_id(&self, raw: Option<&str>) -> CheckResult<PersonId> {
        match Person::check_person_id(raw)? {
            None => Err(Violation::mandatory(
                "A value for the person ID must be provided!",
            )),
            Some(id) if self.contains(id) => Err(Violation::uniqueness(
                "There is already a person record with this person ID!",
            )),
            Some(id) => Ok(id),
        }
    }

    /// Check an id value that is used as a reference to an existing
    /// person. A dangling reference counts as a range error, not a
    /// separate violation kind.
    pub fn check_person_id_as_id_ref(&self, id: Option<PersonId>) -> CheckResult<PersonId> {
        match id {
            None => Err(Violation::mandatory(
                "A value for the person ID must be provided!",
            )),
            Some(0) => Err(Violation::range("The person ID must be a positive integer!")),
            Some(id) if !self.contains(id) => Err(Violation::range(format!(
                "There is no person record with person ID {id}!"
            ))),
            Some(id) => Ok(id),
        }
    }
}

impl Catalog {
    /// Violation blocking the destruction of a person, if any.
    ///
    /// Uniform cascade policy: a destroy never deletes other entities.
    /// Mandatory references (a movie's director, a biography's subject)
    /// block the destroy; optional references are detached by
    /// [`Catalog::detach_person`].
    pub(crate) fn mandatory_refs_violation(&self, person_id: PersonId) -> Option<Violation> {
        let directed = self
            .movies
            .iter()
            .filter(|m| m.director() == person_id)
            .count();
        if directed > 0 {
            return Some(Violation::constraint(format!(
                "Person {person_id} is the director of {directed} movie record(s); \
                 reassign or delete those movies first!"
            )));
        }
        let subject_of = self
            .movies
            .iter()
            .filter(|m| m.about() == Some(person_id))
            .count();
        if subject_of > 0 {
            return Some(Violation::constraint(format!(
                "Person {person_id} is the subject of {subject_of} biography record(s); \
                 delete those movies first!"
            )));
        }
        None
    }

    /// Detach every optional reference to a person: remove the id from
    /// all movie casts and null any agent reference pointing at it.
    pub(crate) fn detach_person(&mut self, person_id: PersonId) {
        for movie in self.movies.values_mut() {
            movie.detach_actor(person_id);
        }
        for actor in self.actors.values_mut() {
            if actor.agent() == Some(person_id) {
                actor.set_agent(None);
            }
        }
    }
}
