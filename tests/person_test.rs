//! Tests for the person-derived registries (actors and directors)
//!
//! Covers id uniqueness across roles, agent reference checks, and the
//! all-or-nothing update behavior.

use filmbase::{ActorSlots, ActorUpdate, Catalog, DirectorSlots, DirectorUpdate, PersonRef, Violation};

// Helper function to create a catalog with two directors and two actors
fn seeded_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .add_director(DirectorSlots {
            person_id: Some("1".to_string()),
            name: Some("Ridley Scott".to_string()),
        })
        .expect("Failed to add director 1");
    catalog
        .add_director(DirectorSlots {
            person_id: Some("2".to_string()),
            name: Some("Sofia Coppola".to_string()),
        })
        .expect("Failed to add director 2");
    catalog
        .add_actor(ActorSlots {
            person_id: Some("3".to_string()),
            name: Some("Sigourney Weaver".to_string()),
            agent: None,
        })
        .expect("Failed to add actor 3");
    catalog
        .add_actor(ActorSlots {
            person_id: Some("4".to_string()),
            name: Some("Bill Murray".to_string()),
            agent: Some(PersonRef::Id(3)),
        })
        .expect("Failed to add actor 4");
    catalog
}

#[test]
fn add_inserts_into_both_maps() {
    let catalog = seeded_catalog();
    assert_eq!(catalog.actors().len(), 2, "Two actors expected");
    assert_eq!(catalog.directors().len(), 2, "Two directors expected");
    assert_eq!(
        catalog.people().len(),
        4,
        "Every role entity must be mirrored in the shared person map"
    );
    let actor = catalog.actors().get(4).expect("Actor 4 should exist");
    assert_eq!(actor.name(), "Bill Murray");
    assert_eq!(actor.agent(), Some(3));
}

#[test]
fn duplicate_id_fails_with_uniqueness_violation() {
    let mut catalog = seeded_catalog();
    let result = catalog.add_actor(ActorSlots {
        person_id: Some("3".to_string()),
        name: Some("Somebody Else".to_string()),
        agent: None,
    });
    assert!(matches!(result, Err(Violation::Uniqueness(_))));
    assert_eq!(
        catalog.actors().get(3).expect("Original actor must remain").name(),
        "Sigourney Weaver"
    );

    // ids are unique across roles, so a director cannot reuse an actor id
    let result = catalog.add_director(DirectorSlots {
        person_id: Some("3".to_string()),
        name: Some("Somebody Else".to_string()),
    });
    assert!(matches!(result, Err(Violation::Uniqueness(_))));
    assert!(!catalog.directors().contains(3));
}

#[test]
fn missing_or_malformed_slots_are_rejected() {
    let mut catalog = Catalog::new();
    let result = catalog.add_actor(ActorSlots {
        person_id: None,
        name: Some("No Id".to_string()),
        agent: None,
    });
    assert!(matches!(result, Err(Violation::Mandatory(_))));

    let result = catalog.add_actor(ActorSlots {
        person_id: Some("zero".to_string()),
        name: Some("Bad Id".to_string()),
        agent: None,
    });
    assert!(matches!(result, Err(Violation::Range(_))));

    let result = catalog.add_director(DirectorSlots {
        person_id: Some("9".to_string()),
        name: None,
    });
    assert!(matches!(result, Err(Violation::Mandatory(_))));
    assert!(catalog.people().is_empty(), "Nothing may be inserted on failure");
}

#[test]
fn dangling_agent_reference_is_a_range_violation() {
    let mut catalog = seeded_catalog();
    let result = catalog.add_actor(ActorSlots {
        person_id: Some("5".to_string()),
        name: Some("New Actor".to_string()),
        agent: Some(PersonRef::Id(99)),
    });
    assert!(matches!(result, Err(Violation::Range(_))));
    assert!(!catalog.actors().contains(5));
}

#[test]
fn actor_update_reports_changed_fields() {
    let mut catalog = seeded_catalog();
    let updated = catalog
        .update_actor(&ActorUpdate {
            person_id: "3".to_string(),
            name: Some("S. Weaver".to_string()),
            agent: Some(PersonRef::Id(4)),
        })
        .expect("Update should succeed");
    assert_eq!(updated.as_slice(), ["name", "agent"]);
    let actor = catalog.actors().get(3).expect("Actor 3 should exist");
    assert_eq!(actor.name(), "S. Weaver");
    assert_eq!(actor.agent(), Some(4));
    // the shared person map follows the name change
    assert_eq!(
        catalog.people().get(3).expect("Person 3 should exist").name(),
        "S. Weaver"
    );
}

#[test]
fn actor_update_with_no_effective_change_reports_empty_list() {
    let mut catalog = seeded_catalog();
    let updated = catalog
        .update_actor(&ActorUpdate {
            person_id: "4".to_string(),
            name: Some("Bill Murray".to_string()),
            agent: Some(PersonRef::Id(3)),
        })
        .expect("Update should succeed");
    assert!(updated.is_empty(), "No field changed, so the list must be empty");
}

#[test]
fn actor_update_is_atomic() {
    let mut catalog = seeded_catalog();
    let before = catalog.actors().get(3).expect("Actor 3 should exist").clone();
    // valid name change followed by a dangling agent reference
    let result = catalog.update_actor(&ActorUpdate {
        person_id: "3".to_string(),
        name: Some("Changed".to_string()),
        agent: Some(PersonRef::Id(77)),
    });
    assert!(matches!(result, Err(Violation::Range(_))));
    assert_eq!(
        catalog.actors().get(3).expect("Actor 3 should exist"),
        &before,
        "A failed update must leave the record exactly as before"
    );
}

#[test]
fn director_update_changes_name() {
    let mut catalog = seeded_catalog();
    let updated = catalog
        .update_director(&DirectorUpdate {
            person_id: "1".to_string(),
            name: Some("R. Scott".to_string()),
        })
        .expect("Update should succeed");
    assert_eq!(updated.as_slice(), ["name"]);
    assert_eq!(
        catalog.directors().get(1).expect("Director 1 should exist").name(),
        "R. Scott"
    );
}

#[test]
fn update_of_unknown_record_fails() {
    let mut catalog = seeded_catalog();
    let result = catalog.update_actor(&ActorUpdate {
        person_id: "42".to_string(),
        name: Some("Ghost".to_string()),
        agent: None,
    });
    assert!(matches!(result, Err(Violation::Range(_))));
}

#[test]
fn destroying_an_agent_detaches_the_agent_reference() {
    let mut catalog = seeded_catalog();
    // actor 4 has actor 3 as agent; destroying 3 must null that reference
    catalog.destroy_actor(3).expect("Destroy should succeed");
    assert!(!catalog.actors().contains(3));
    assert!(!catalog.people().contains(3));
    assert_eq!(
        catalog.actors().get(4).expect("Actor 4 should exist").agent(),
        None,
        "Optional references are detached on destroy"
    );
}

#[test]
fn destroying_an_unknown_actor_is_not_an_error() {
    let mut catalog = seeded_catalog();
    catalog
        .destroy_actor(99)
        .expect("Destroying an absent record is reported, not failed");
    assert_eq!(catalog.actors().len(), 2);
}
