//! Actor registry and actor CRUD entry points

use std::collections::BTreeMap;

use itertools::Itertools;
use log::{info, warn};

use crate::models::actor::{Actor, ActorSlots, ActorUpdate, CheckedActorSlots};
use crate::models::person::{Person, PersonId};
use crate::models::validation::{parse_positive_int, CheckResult, Violation};
use crate::registry::{Catalog, UpdatedProperties};

/// In-memory actor registry, keyed by person id
#[derive(Debug, Clone, Default)]
pub struct ActorRegistry {
    instances: BTreeMap<PersonId, Actor>,
}

impl ActorRegistry {
    /// Look up an actor by id
    pub fn get(&self, person_id: PersonId) -> Option<&Actor> {
        self.instances.get(&person_id)
    }

    /// Whether an actor with this id exists
    pub fn contains(&self, person_id: PersonId) -> bool {
        self.instances.contains_key(&person_id)
    }

    /// Number of actor records
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Iterate over all actors in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.instances.values()
    }

    pub(crate) fn insert(&mut self, actor: Actor) {
        self.instances.insert(actor.person_id(), actor);
    }

    pub(crate) fn remove(&mut self, person_id: PersonId) -> Option<Actor> {
        self.instances.remove(&person_id)
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.instances.values_mut()
    }
}

impl Catalog {
    fn check_actor_slots(&self, slots: &ActorSlots) -> CheckResult<CheckedActorSlots> {
        let person_id = self.people.check_person_id_as_id(slots.person_id.as_deref())?;
        let name = Person::check_name(slots.name.as_deref())?;
        let agent = Actor::check_agent(slots.agent.as_ref(), &self.people)?;
        Ok(CheckedActorSlots {
            person_id,
            name,
            agent,
        })
    }

    /// Create a new actor record. On a failed check nothing is inserted
    /// and the violation is reported to the caller.
    pub fn add_actor(&mut self, slots: ActorSlots) -> CheckResult {
        let checked = self.check_actor_slots(&slots).inspect_err(|violation| {
            warn!("{}: {violation}", violation.kind());
        })?;
        let actor = Actor::from_checked(checked);
        info!("{actor} created!");
        self.people
            .insert(Person::new(actor.person_id(), actor.name().to_string()));
        self.actors.insert(actor);
        Ok(())
    }

    /// Update an existing actor record. Only supplied fields are applied,
    /// all-or-nothing: a failed check leaves the record untouched.
    /// Returns the names of the changed fields.
    pub fn update_actor(&mut self, slots: &ActorUpdate) -> CheckResult<UpdatedProperties> {
        let person_id = parse_positive_int(&slots.person_id, "person ID")?;
        let mut actor = match self.actors.get(person_id) {
            Some(actor) => actor.clone(),
            None => {
                return Err(Violation::range(format!(
                    "There is no actor record with person ID {person_id}!"
                )));
            }
        };
        let mut updated = UpdatedProperties::new();
        if let Some(name) = slots.name.as_deref() {
            if actor.name() != name {
                actor.set_name(Person::check_name(Some(name))?);
                updated.push("name");
            }
        }
        if let Some(agent_ref) = &slots.agent {
            let agent = Actor::check_agent(Some(agent_ref), &self.people)?;
            if actor.agent() != agent {
                actor.set_agent(agent);
                updated.push("agent");
            }
        }
        self.report_update("actor", actor.name(), &updated);
        if updated.contains(&"name") {
            self.people
                .insert(Person::new(person_id, actor.name().to_string()));
        }
        self.actors.insert(actor);
        Ok(updated)
    }

    /// Delete an actor record. Optional references to the actor (movie
    /// casts, agent fields) are detached; a mandatory reference (the
    /// actor directs a movie or is the subject of a biography) blocks
    /// the destroy.
    pub fn destroy_actor(&mut self, person_id: PersonId) -> CheckResult {
        let name = match self.actors.get(person_id) {
            Some(actor) => actor.name().to_string(),
            None => {
                info!("There is no actor record with person ID {person_id}!");
                return Ok(());
            }
        };
        if let Some(violation) = self.mandatory_refs_violation(person_id) {
            warn!("{}: {violation}", violation.kind());
            return Err(violation);
        }
        self.detach_person(person_id);
        self.actors.remove(person_id);
        self.people.remove(person_id);
        info!("Actor {name} deleted.");
        Ok(())
    }

    /// Log the outcome of a successful update
    pub(crate) fn report_update(&self, what: &str, name: &str, updated: &UpdatedProperties) {
        if updated.is_empty() {
            info!("No property value changed for {what} {name}!");
        } else {
            let ending = if updated.len() > 1 { "ies" } else { "y" };
            info!(
                "Propert{ending} {} modified for {what} {name}",
                updated.iter().join(",")
            );
        }
    }
}
