//! Actor role entity
//!
//! An actor wraps the Person base and adds an optional agent reference,
//! validated by the same id-reference check as the movie associations.

use crate::models::person::{Person, PersonId, PersonRef};
use crate::models::records::ActorRecord;
use crate::models::validation::CheckResult;
use crate::registry::person::PersonDirectory;
use crate::registry::Entity;

/// An actor: a person with an optional agent reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    person: Person,
    agent: Option<PersonId>,
}

impl Actor {
    /// The underlying person entity
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// The actor's identifier
    pub fn person_id(&self) -> PersonId {
        self.person.person_id()
    }

    /// The actor's name
    pub fn name(&self) -> &str {
        self.person.name()
    }

    /// The actor's agent, as an id reference into the person directory
    pub fn agent(&self) -> Option<PersonId> {
        self.agent
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.person.set_name(name);
    }

    pub(crate) fn set_agent(&mut self, agent: Option<PersonId>) {
        self.agent = agent;
    }

    /// Check an agent reference. Agents are optional, so an absent
    /// reference is no violation; a present one must resolve against the
    /// person directory.
    pub fn check_agent(
        agent: Option<&PersonRef>,
        people: &PersonDirectory,
    ) -> CheckResult<Option<PersonId>> {
        match agent.map(PersonRef::id).transpose()?.flatten() {
            None => Ok(None),
            Some(id) => people.check_person_id_as_id_ref(Some(id)).map(Some),
        }
    }

    /// Infallible build step of the two-phase constructor
    pub fn from_checked(slots: CheckedActorSlots) -> Self {
        Self {
            person: Person::new(slots.person_id, slots.name),
            agent: slots.agent,
        }
    }

    /// Flatten into the storage record shape
    pub fn to_record(&self) -> ActorRecord {
        ActorRecord {
            person_id: self.person_id(),
            name: self.name().to_string(),
            agent: self.agent,
        }
    }
}

impl Entity for Actor {
    type Id = PersonId;

    fn id(&self) -> PersonId {
        self.person_id()
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Actor{{ persID: {}, name: {}, agent: {} }}",
            self.person_id(),
            self.name(),
            self.agent
                .map_or_else(|| "none".to_string(), |id| id.to_string())
        )
    }
}

/// Raw creation slots for an actor record, as captured from a form or a
/// storage record
#[derive(Debug, Clone, Default)]
pub struct ActorSlots {
    /// Raw person id value
    pub person_id: Option<String>,
    /// The actor's name
    pub name: Option<String>,
    /// Optional agent reference
    pub agent: Option<PersonRef>,
}

/// Slots that have passed every actor field check; building from them
/// cannot fail
#[derive(Debug, Clone)]
pub struct CheckedActorSlots {
    pub(crate) person_id: PersonId,
    pub(crate) name: String,
    pub(crate) agent: Option<PersonId>,
}

/// Fields of an actor update; absent fields stay untouched
#[derive(Debug, Clone)]
pub struct ActorUpdate {
    /// Raw id of the actor record to update
    pub person_id: String,
    /// New name, if supplied
    pub name: Option<String>,
    /// New agent reference, if supplied
    pub agent: Option<PersonRef>,
}
