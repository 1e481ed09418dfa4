//! Flat storage records with id references
//!
//! The wire shape consumed by the persistence adapter: object references
//! are replaced by id references (`director_id`, `actorIdRefs`) and
//! internal-only state is dropped. Loading converts records back into raw
//! slots and replays the validating constructors, so stored data passes
//! the same checks as form input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::actor::ActorSlots;
use crate::models::director::DirectorSlots;
use crate::models::movie::{MovieId, MovieSlots};
use crate::models::person::{PersonId, PersonRef};

/// Storage record for a person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    /// The person's identifier
    pub person_id: PersonId,
    /// The person's name
    pub name: String,
}

/// Storage record for an actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorRecord {
    /// The actor's identifier
    pub person_id: PersonId,
    /// The actor's name
    pub name: String,
    /// The agent's person id, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<PersonId>,
}

/// Storage record for a director
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorRecord {
    /// The director's identifier
    pub person_id: PersonId,
    /// The director's name
    pub name: String,
}

/// Storage record for a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    /// The movie's identifier
    pub movie_id: MovieId,
    /// The movie's title
    pub title: String,
    /// The movie's release date
    pub release_date: NaiveDate,
    /// Cast as a list of person id references, in ascending id order
    #[serde(default)]
    pub actor_id_refs: Vec<PersonId>,
    /// Director as a person id reference
    #[serde(rename = "director_id")]
    pub director_id: PersonId,
    /// Category as its 1-based enumeration index, if assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<u32>,
    /// Series name (TV series episodes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tv_series_name: Option<String>,
    /// Episode number (TV series episodes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_no: Option<u32>,
    /// Subject person id (biographies only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<PersonId>,
}

impl From<ActorRecord> for ActorSlots {
    fn from(record: ActorRecord) -> Self {
        Self {
            person_id: Some(record.person_id.to_string()),
            name: Some(record.name),
            agent: record.agent.map(PersonRef::Id),
        }
    }
}

impl From<DirectorRecord> for DirectorSlots {
    fn from(record: DirectorRecord) -> Self {
        Self {
            person_id: Some(record.person_id.to_string()),
            name: Some(record.name),
        }
    }
}

impl From<MovieRecord> for MovieSlots {
    fn from(record: MovieRecord) -> Self {
        Self {
            movie_id: Some(record.movie_id.to_string()),
            title: Some(record.title),
            release_date: Some(record.release_date.to_string()),
            actors: record.actor_id_refs.into_iter().map(PersonRef::Id).collect(),
            director: Some(PersonRef::Id(record.director_id)),
            category: record.category.map(|c| c.to_string()),
            tv_series_name: record.tv_series_name,
            episode_no: record.episode_no.map(|n| n.to_string()),
            about: record.about.map(PersonRef::Id),
        }
    }
}
