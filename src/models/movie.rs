//! Movie entity
//!
//! The most constrained entity in the catalog: validated scalar fields, a
//! mandatory director reference, an optional cast of actor references, and
//! a disjoint category segmentation (TV series episode vs biography) with
//! category-conditional fields.
//!
//! All references are stored as ids and resolved against the person
//! directory at check time; the registries remain the sole owners of
//! their entities.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use itertools::Itertools;

use crate::models::person::{PersonId, PersonRef};
use crate::models::records::MovieRecord;
use crate::models::types::{Enumeration, MovieCategory};
use crate::models::validation::{
    check_required_string, parse_positive_int, CheckResult, Violation,
};
use crate::registry::movie::MovieRegistry;
use crate::registry::person::PersonDirectory;
use crate::registry::Entity;

/// Identifier of a movie record (positive integer, immutable after
/// creation)
pub type MovieId = u32;

/// A movie record with its associations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    movie_id: MovieId,
    title: String,
    release_date: NaiveDate,
    director: PersonId,
    actors: BTreeSet<PersonId>,
    category: Option<MovieCategory>,
    tv_series_name: Option<String>,
    episode_no: Option<u32>,
    about: Option<PersonId>,
}

impl Movie {
    /// The movie's identifier
    pub fn movie_id(&self) -> MovieId {
        self.movie_id
    }

    /// The movie's title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The movie's release date
    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    /// The director, as an id reference into the person directory
    pub fn director(&self) -> PersonId {
        self.director
    }

    /// The cast, as id references into the person directory (unique by
    /// id, kept in ascending id order)
    pub fn actors(&self) -> &BTreeSet<PersonId> {
        &self.actors
    }

    /// The category, if one has been assigned
    pub fn category(&self) -> Option<MovieCategory> {
        self.category
    }

    /// The series name (present exactly when the category is
    /// TV-Series-Episode)
    pub fn tv_series_name(&self) -> Option<&str> {
        self.tv_series_name.as_deref()
    }

    /// The episode number (present exactly when the category is
    /// TV-Series-Episode)
    pub fn episode_no(&self) -> Option<u32> {
        self.episode_no
    }

    /// The person the movie is about (present exactly when the category
    /// is Biography)
    pub fn about(&self) -> Option<PersonId> {
        self.about
    }

    // ---------------------------------------------------------------
    // Attribute checks (pure)
    // ---------------------------------------------------------------

    /// Check an optional movie id value
    pub fn check_movie_id(raw: Option<&str>) -> CheckResult<Option<MovieId>> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(None),
            Some(s) => parse_positive_int(s, "movie ID").map(Some),
        }
    }

    /// Check a title value
    pub fn check_title(raw: Option<&str>) -> CheckResult<String> {
        check_required_string(raw, "title")
    }

    /// Check a release date value (ISO calendar date, `YYYY-MM-DD`)
    pub fn check_release_date(raw: Option<&str>) -> CheckResult<NaiveDate> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Err(Violation::mandatory("A release date must be provided!"));
        };
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| Violation::range("The release date must be a valid date!"))
    }

    /// Check a director reference: mandatory, and it must resolve against
    /// the person directory.
    pub fn check_director(
        director: Option<&PersonRef>,
        people: &PersonDirectory,
    ) -> CheckResult<PersonId> {
        match director.map(PersonRef::id).transpose()?.flatten() {
            None => Err(Violation::mandatory("A director must be provided!")),
            Some(id) => people.check_person_id_as_id_ref(Some(id)),
        }
    }

    /// Check an actor reference. Actors are optional, so an absent id is
    /// no violation and callers treat it as a no-op.
    pub fn check_actor(
        actor: &PersonRef,
        people: &PersonDirectory,
    ) -> CheckResult<Option<PersonId>> {
        match actor.id()? {
            None => Ok(None),
            Some(id) => people.check_person_id_as_id_ref(Some(id)).map(Some),
        }
    }

    /// Check a series name against the current category: mandatory for a
    /// TV series episode, forbidden otherwise.
    pub fn check_tv_series_name(
        name: Option<&str>,
        category: Option<MovieCategory>,
    ) -> CheckResult<Option<String>> {
        let name = name.map(str::trim).filter(|s| !s.is_empty());
        match (category, name) {
            (Some(MovieCategory::TvSeriesEpisode), None) => Err(Violation::mandatory(
                "A series name must be provided for a TV series episode!",
            )),
            (Some(MovieCategory::TvSeriesEpisode), Some(n)) => Ok(Some(n.to_string())),
            (_, Some(_)) => Err(Violation::constraint(
                "A series name must not be provided if the movie is not a TV series episode!",
            )),
            (_, None) => Ok(None),
        }
    }

    /// Check an episode number against the current category: mandatory
    /// for a TV series episode, forbidden otherwise.
    pub fn check_episode_no(
        raw: Option<&str>,
        category: Option<MovieCategory>,
    ) -> CheckResult<Option<u32>> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty());
        match (category, raw) {
            (Some(MovieCategory::TvSeriesEpisode), None) => Err(Violation::mandatory(
                "An episode number must be provided for a TV series episode!",
            )),
            (Some(MovieCategory::TvSeriesEpisode), Some(r)) => {
                parse_positive_int(r, "episode number").map(Some)
            }
            (_, Some(_)) => Err(Violation::constraint(
                "An episode number must not be provided if the movie is not a TV series episode!",
            )),
            (_, None) => Ok(None),
        }
    }

    /// Check an 'about' reference against the current category: mandatory
    /// for a biography (and it must resolve against the person
    /// directory), forbidden otherwise.
    pub fn check_about(
        about: Option<&PersonRef>,
        category: Option<MovieCategory>,
        people: &PersonDirectory,
    ) -> CheckResult<Option<PersonId>> {
        let id = about.map(PersonRef::id).transpose()?.flatten();
        match (category, id) {
            (Some(MovieCategory::Biography), None) => Err(Violation::mandatory(
                "A biography movie record must have an 'about' field!",
            )),
            (Some(MovieCategory::Biography), Some(id)) => {
                people.check_person_id_as_id_ref(Some(id)).map(Some)
            }
            (_, Some(_)) => Err(Violation::constraint(
                "An 'about' field value must not be provided if the movie is not a biography!",
            )),
            (_, None) => Ok(None),
        }
    }

    /// Validate raw creation slots in field declaration order: id, title,
    /// release date, actors, director, then the optional category and its
    /// segment fields. Pure: reads the registries, mutates nothing.
    pub fn check_slots(
        slots: &MovieSlots,
        movies: &MovieRegistry,
        people: &PersonDirectory,
    ) -> CheckResult<CheckedMovieSlots> {
        let movie_id = movies.check_movie_id_as_id(slots.movie_id.as_deref())?;
        let title = Self::check_title(slots.title.as_deref())?;
        let release_date = Self::check_release_date(slots.release_date.as_deref())?;
        let mut actors = BTreeSet::new();
        for actor_ref in &slots.actors {
            if let Some(id) = Self::check_actor(actor_ref, people)? {
                actors.insert(id);
            }
        }
        let director = Self::check_director(slots.director.as_ref(), people)?;
        let category = MovieCategory::check(slots.category.as_deref())?;
        let tv_series_name = Self::check_tv_series_name(slots.tv_series_name.as_deref(), category)?;
        let episode_no = Self::check_episode_no(slots.episode_no.as_deref(), category)?;
        let about = Self::check_about(slots.about.as_ref(), category, people)?;
        Ok(CheckedMovieSlots {
            movie_id,
            title,
            release_date,
            director,
            actors,
            category,
            tv_series_name,
            episode_no,
            about,
        })
    }

    /// Infallible build step of the two-phase constructor
    pub fn from_checked(slots: CheckedMovieSlots) -> Self {
        Self {
            movie_id: slots.movie_id,
            title: slots.title,
            release_date: slots.release_date,
            director: slots.director,
            actors: slots.actors,
            category: slots.category,
            tv_series_name: slots.tv_series_name,
            episode_no: slots.episode_no,
            about: slots.about,
        }
    }

    // ---------------------------------------------------------------
    // Validating setters and association mutators
    // ---------------------------------------------------------------

    /// Set the title, aborting on a failed check
    pub fn set_title(&mut self, raw: Option<&str>) -> CheckResult {
        self.title = Self::check_title(raw)?;
        Ok(())
    }

    /// Set the release date, aborting on a failed check
    pub fn set_release_date(&mut self, raw: Option<&str>) -> CheckResult {
        self.release_date = Self::check_release_date(raw)?;
        Ok(())
    }

    /// Set the director reference, aborting on a failed check
    pub fn set_director(
        &mut self,
        director: &PersonRef,
        people: &PersonDirectory,
    ) -> CheckResult {
        self.director = Self::check_director(Some(director), people)?;
        Ok(())
    }

    /// Add an actor reference to the cast. An absent id is a no-op;
    /// a dangling reference aborts the addition.
    pub fn add_actor(&mut self, actor: &PersonRef, people: &PersonDirectory) -> CheckResult {
        if let Some(id) = Self::check_actor(actor, people)? {
            self.actors.insert(id);
        }
        Ok(())
    }

    /// Remove an actor reference from the cast. An absent id is a no-op.
    pub fn remove_actor(&mut self, actor: &PersonRef, people: &PersonDirectory) -> CheckResult {
        if let Some(id) = Self::check_actor(actor, people)? {
            self.actors.remove(&id);
        }
        Ok(())
    }

    /// Replace the whole cast by replaying `add_actor` for each member
    pub fn set_actors<I>(&mut self, actors: I, people: &PersonDirectory) -> CheckResult
    where
        I: IntoIterator<Item = PersonRef>,
    {
        self.actors.clear();
        for actor_ref in actors {
            self.add_actor(&actor_ref, people)?;
        }
        Ok(())
    }

    /// Assign the category. A category can be set at most once: any later
    /// attempt fails with a frozen-value violation.
    pub fn set_category(&mut self, raw: Option<&str>) -> CheckResult {
        if self.category.is_some() {
            return Err(Violation::frozen("The category cannot be changed!"));
        }
        self.category = MovieCategory::check(raw)?;
        Ok(())
    }

    /// Set the series name, checked against the current category
    pub fn set_tv_series_name(&mut self, raw: Option<&str>) -> CheckResult {
        self.tv_series_name = Self::check_tv_series_name(raw, self.category)?;
        Ok(())
    }

    /// Set the episode number, checked against the current category
    pub fn set_episode_no(&mut self, raw: Option<&str>) -> CheckResult {
        self.episode_no = Self::check_episode_no(raw, self.category)?;
        Ok(())
    }

    /// Set the 'about' reference, checked against the current category
    pub fn set_about(&mut self, about: &PersonRef, people: &PersonDirectory) -> CheckResult {
        self.about = Self::check_about(Some(about), self.category, people)?;
        Ok(())
    }

    /// Re-run the segment field checks against the current category, so
    /// that segment-field presence matches the category exactly.
    ///
    /// The per-field setters only see the fields an update supplies; a
    /// category assigned without its mandatory segment fields is caught
    /// here, before the update commits.
    pub fn check_segment_consistency(&self, people: &PersonDirectory) -> CheckResult {
        Self::check_tv_series_name(self.tv_series_name.as_deref(), self.category)?;
        let episode_no = self.episode_no.map(|n| n.to_string());
        Self::check_episode_no(episode_no.as_deref(), self.category)?;
        let about = self.about.map(PersonRef::Id);
        Self::check_about(about.as_ref(), self.category, people)?;
        Ok(())
    }

    /// Remove a person from the cast without a reference check. Used by
    /// the destroy path, where the person is being removed from the
    /// directory in the same operation.
    pub(crate) fn detach_actor(&mut self, person_id: PersonId) {
        self.actors.remove(&person_id);
    }

    /// Flatten into the storage record shape: the director reference
    /// becomes `director_id` and the cast becomes the ordered
    /// `actorIdRefs` list.
    pub fn to_record(&self) -> MovieRecord {
        MovieRecord {
            movie_id: self.movie_id,
            title: self.title.clone(),
            release_date: self.release_date,
            actor_id_refs: self.actors.iter().copied().collect(),
            director_id: self.director,
            category: self.category.map(Enumeration::index),
            tv_series_name: self.tv_series_name.clone(),
            episode_no: self.episode_no,
            about: self.about,
        }
    }
}

impl Entity for Movie {
    type Id = MovieId;

    fn id(&self) -> MovieId {
        self.movie_id
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Movie{{ movie ID: {}, title: {}, release date: {}",
            self.movie_id, self.title, self.release_date
        )?;
        match self.category {
            Some(MovieCategory::TvSeriesEpisode) => write!(
                f,
                ", tv series: {}, episode: {}",
                self.tv_series_name.as_deref().unwrap_or(""),
                self.episode_no.unwrap_or(0)
            )?,
            Some(MovieCategory::Biography) => {
                write!(f, ", biography about: {}", self.about.unwrap_or(0))?;
            }
            None => {}
        }
        write!(
            f,
            ", director: {}, actors: {} }}",
            self.director,
            self.actors.iter().join(",")
        )
    }
}

/// Raw creation slots for a movie record, as captured from a form or a
/// storage record
#[derive(Debug, Clone, Default)]
pub struct MovieSlots {
    /// Raw movie id value
    pub movie_id: Option<String>,
    /// The movie's title
    pub title: Option<String>,
    /// Raw release date value (`YYYY-MM-DD`)
    pub release_date: Option<String>,
    /// Cast references (optional, unique by id)
    pub actors: Vec<PersonRef>,
    /// Director reference (mandatory)
    pub director: Option<PersonRef>,
    /// Raw category index (1-based, optional)
    pub category: Option<String>,
    /// Series name, permitted only for a TV series episode
    pub tv_series_name: Option<String>,
    /// Raw episode number, permitted only for a TV series episode
    pub episode_no: Option<String>,
    /// Subject reference, permitted only for a biography
    pub about: Option<PersonRef>,
}

/// Slots that have passed every movie field check; building from them
/// cannot fail
#[derive(Debug, Clone)]
pub struct CheckedMovieSlots {
    movie_id: MovieId,
    title: String,
    release_date: NaiveDate,
    director: PersonId,
    actors: BTreeSet<PersonId>,
    category: Option<MovieCategory>,
    tv_series_name: Option<String>,
    episode_no: Option<u32>,
    about: Option<PersonId>,
}

/// Fields of a movie update; absent fields stay untouched.
///
/// An explicitly empty `category` value is an attempt to unset the
/// category, which fails with a frozen-value violation once a category
/// has been assigned.
#[derive(Debug, Clone, Default)]
pub struct MovieUpdate {
    /// Raw id of the movie record to update
    pub movie_id: String,
    /// New title, if supplied
    pub title: Option<String>,
    /// New release date, if supplied
    pub release_date: Option<String>,
    /// Cast references to add
    pub actors_to_add: Vec<PersonRef>,
    /// Cast references to remove
    pub actors_to_remove: Vec<PersonRef>,
    /// New director reference, if supplied
    pub director: Option<PersonRef>,
    /// Category to assign; `Some("")` is an explicit unset attempt
    pub category: Option<String>,
    /// New series name, if supplied
    pub tv_series_name: Option<String>,
    /// New episode number, if supplied
    pub episode_no: Option<String>,
    /// New subject reference, if supplied
    pub about: Option<PersonRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::person::Person;

    fn people() -> PersonDirectory {
        let mut people = PersonDirectory::default();
        people.insert(Person::new(1, "Director".to_string()));
        people.insert(Person::new(2, "Actor A".to_string()));
        people.insert(Person::new(3, "Actor B".to_string()));
        people
    }

    fn movie(people: &PersonDirectory) -> Movie {
        let slots = MovieSlots {
            movie_id: Some("1".to_string()),
            title: Some("Test".to_string()),
            release_date: Some("2000-01-01".to_string()),
            director: Some(PersonRef::Id(1)),
            ..MovieSlots::default()
        };
        let checked = Movie::check_slots(&slots, &MovieRegistry::default(), people)
            .expect("Slots should check");
        Movie::from_checked(checked)
    }

    #[test]
    fn set_actors_replaces_the_whole_cast() {
        let people = people();
        let mut movie = movie(&people);
        movie
            .add_actor(&PersonRef::Id(2), &people)
            .expect("Adding actor 2 should succeed");
        movie
            .set_actors(vec![PersonRef::Id(3), PersonRef::Raw("2".to_string())], &people)
            .expect("Replacing the cast should succeed");
        assert_eq!(movie.actors().iter().copied().collect::<Vec<_>>(), [2, 3]);

        // a dangling member aborts the replacement
        let result = movie.set_actors(vec![PersonRef::Id(9)], &people);
        assert!(matches!(result, Err(Violation::Range(_))));
    }

    #[test]
    fn absent_actor_reference_is_a_no_op() {
        let people = people();
        let mut movie = movie(&people);
        movie
            .add_actor(&PersonRef::Raw(String::new()), &people)
            .expect("An absent id is no violation");
        assert!(movie.actors().is_empty());
    }

    #[test]
    fn segment_setters_follow_the_current_category() {
        let people = people();
        let mut movie = movie(&people);
        // no category: every segment field is forbidden
        assert!(matches!(
            movie.set_tv_series_name(Some("Series")),
            Err(Violation::Constraint(_))
        ));
        movie.set_category(Some("1")).expect("First assignment succeeds");
        movie
            .set_tv_series_name(Some("Series"))
            .expect("Series name is mandatory now");
        movie.set_episode_no(Some("4")).expect("Episode number accepted");
        assert!(matches!(
            movie.set_about(&PersonRef::Id(2), &people),
            Err(Violation::Constraint(_))
        ));
        // frozen after first assignment
        assert!(matches!(
            movie.set_category(Some("2")),
            Err(Violation::Frozen(_))
        ));
    }
}
