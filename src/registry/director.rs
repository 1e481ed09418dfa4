//! Director registry and director CRUD entry points

use std::collections::BTreeMap;

use log::{info, warn};

use crate::models::director::{CheckedDirectorSlots, Director, DirectorSlots, DirectorUpdate};
use crate::models::person::{Person, PersonId};
use crate::models::validation::{parse_positive_int, CheckResult, Violation};
use crate::registry::{Catalog, UpdatedProperties};

/// In-memory director registry, keyed by person id
#[derive(Debug, Clone, Default)]
pub struct DirectorRegistry {
    instances: BTreeMap<PersonId, Director>,
}

impl DirectorRegistry {
    /// Look up a director by id
    pub fn get(&self, person_id: PersonId) -> Option<&Director> {
        self.instances.get(&person_id)
    }

    /// Whether a director with this id exists
    pub fn contains(&self, person_id: PersonId) -> bool {
        self.instances.contains_key(&person_id)
    }

    /// Number of director records
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Iterate over all directors in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Director> {
        self.instances.values()
    }

    pub(crate) fn insert(&mut self, director: Director) {
        self.instances.insert(director.person_id(), director);
    }

    pub(crate) fn remove(&mut self, person_id: PersonId) -> Option<Director> {
        self.instances.remove(&person_id)
    }
}

impl Catalog {
    fn check_director_slots(&self, slots: &DirectorSlots) -> CheckResult<CheckedDirectorSlots> {
        let person_id = self.people.check_person_id_as_id(slots.person_id.as_deref())?;
        let name = Person::check_name(slots.name.as_deref())?;
        Ok(CheckedDirectorSlots { person_id, name })
    }

    /// Create a new director record. On a failed check nothing is
    /// inserted and the violation is reported to the caller.
    pub fn add_director(&mut self, slots: DirectorSlots) -> CheckResult {
        let checked = self.check_director_slots(&slots).inspect_err(|violation| {
            warn!("{}: {violation}", violation.kind());
        })?;
        let director = Director::from_checked(checked);
        info!("{director} created!");
        self.people
            .insert(Person::new(director.person_id(), director.name().to_string()));
        self.directors.insert(director);
        Ok(())
    }

    /// Update an existing director record. Only supplied fields are
    /// applied, all-or-nothing. Returns the names of the changed fields.
    pub fn update_director(&mut self, slots: &DirectorUpdate) -> CheckResult<UpdatedProperties> {
        let person_id = parse_positive_int(&slots.person_id, "person ID")?;
        let mut director = match self.directors.get(person_id) {
            Some(director) => director.clone(),
            None => {
                return Err(Violation::range(format!(
                    "There is no director record with person ID {person_id}!"
                )));
            }
        };
        let mut updated = UpdatedProperties::new();
        if let Some(name) = slots.name.as_deref() {
            if director.name() != name {
                director.set_name(Person::check_name(Some(name))?);
                updated.push("name");
            }
        }
        self.report_update("director", director.name(), &updated);
        if updated.contains(&"name") {
            self.people
                .insert(Person::new(person_id, director.name().to_string()));
        }
        self.directors.insert(director);
        Ok(updated)
    }

    /// Delete a director record. A movie still referencing the director
    /// blocks the destroy: the caller must reassign or delete those
    /// movies first. Dependent movies are never deleted automatically.
    pub fn destroy_director(&mut self, person_id: PersonId) -> CheckResult {
        let name = match self.directors.get(person_id) {
            Some(director) => director.name().to_string(),
            None => {
                info!("There is no director record with person ID {person_id}!");
                return Ok(());
            }
        };
        if let Some(violation) = self.mandatory_refs_violation(person_id) {
            warn!("{}: {violation}", violation.kind());
            return Err(violation);
        }
        self.detach_person(person_id);
        self.directors.remove(person_id);
        self.people.remove(person_id);
        info!("Director {name} deleted.");
        Ok(())
    }
}
