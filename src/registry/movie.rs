//! Movie registry and movie CRUD entry points

use std::collections::BTreeMap;

use log::{info, warn};

use crate::models::movie::{Movie, MovieId, MovieSlots, MovieUpdate};
use crate::models::types::MovieCategory;
use crate::models::validation::{parse_positive_int, CheckResult, Violation};
use crate::registry::{Catalog, UpdatedProperties};

/// In-memory movie registry, keyed by movie id
#[derive(Debug, Clone, Default)]
pub struct MovieRegistry {
    instances: BTreeMap<MovieId, Movie>,
}

impl MovieRegistry {
    /// Look up a movie by id
    pub fn get(&self, movie_id: MovieId) -> Option<&Movie> {
        self.instances.get(&movie_id)
    }

    /// Whether a movie with this id exists
    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.instances.contains_key(&movie_id)
    }

    /// Number of movie records
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Iterate over all movies in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.instances.values()
    }

    pub(crate) fn insert(&mut self, movie: Movie) {
        self.instances.insert(movie.movie_id(), movie);
    }

    pub(crate) fn remove(&mut self, movie_id: MovieId) -> Option<Movie> {
        self.instances.remove(&movie_id)
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut Movie> {
        self.instances.values_mut()
    }

    /// Check an id value that is to become the identifier of a new movie
    /// record: mandatory, a positive integer, and unique within this
    /// registry.
    pub fn check_movie_id_as_id(&self, raw: Option<&str>) -> CheckResult<MovieId> {
        match Movie::check_movie_id(raw)? {
            None => Err(Violation::mandatory(
                "A value for the movie ID must be provided!",
            )),
            Some(id) if self.contains(id) => Err(Violation::uniqueness(
                "There is already a movie record with this movie ID!",
            )),
            Some(id) => Ok(id),
        }
    }
}

impl Catalog {
    /// Create a new movie record. The checks run in field declaration
    /// order; on the first failed check nothing is inserted and the
    /// violation is reported to the caller.
    pub fn add_movie(&mut self, slots: MovieSlots) -> CheckResult {
        let checked = Movie::check_slots(&slots, &self.movies, &self.people).inspect_err(
            |violation| {
                warn!("{}: {violation}", violation.kind());
            },
        )?;
        let movie = Movie::from_checked(checked);
        info!("{movie} created!");
        self.movies.insert(movie);
        Ok(())
    }

    /// Update an existing movie record. Only supplied fields are applied
    /// through the validating setters, all-or-nothing: the working copy
    /// is committed only when every check passed, so a failure leaves the
    /// registry exactly as before. Returns the names of the changed
    /// fields; an empty list means nothing changed.
    pub fn update_movie(&mut self, slots: &MovieUpdate) -> CheckResult<UpdatedProperties> {
        let movie_id = parse_positive_int(&slots.movie_id, "movie ID")?;
        let mut movie = match self.movies.get(movie_id) {
            Some(movie) => movie.clone(),
            None => {
                return Err(Violation::range(format!(
                    "There is no movie record with movie ID {movie_id}!"
                )));
            }
        };
        let mut updated = UpdatedProperties::new();

        if let Some(title) = slots.title.as_deref() {
            if movie.title() != title {
                movie.set_title(Some(title))?;
                updated.push("title");
            }
        }
        if let Some(raw) = slots.release_date.as_deref() {
            let date = Movie::check_release_date(Some(raw))?;
            if movie.release_date() != date {
                movie.set_release_date(Some(raw))?;
                updated.push("releaseDate");
            }
        }
        if !slots.actors_to_add.is_empty() {
            for actor_ref in &slots.actors_to_add {
                movie.add_actor(actor_ref, &self.people)?;
            }
            updated.push("actors(added)");
        }
        if !slots.actors_to_remove.is_empty() {
            for actor_ref in &slots.actors_to_remove {
                movie.remove_actor(actor_ref, &self.people)?;
            }
            updated.push("actors(removed)");
        }
        if let Some(director_ref) = &slots.director {
            let director = Movie::check_director(Some(director_ref), &self.people)?;
            if movie.director() != director {
                movie.set_director(director_ref, &self.people)?;
                updated.push("director");
            }
        }
        match slots.category.as_deref().map(str::trim) {
            None => {}
            // an explicitly empty value is an attempt to unset
            Some("") => {
                if movie.category().is_some() {
                    return Err(Violation::frozen("The movie category must not be unset!"));
                }
            }
            Some(raw) => {
                let category = MovieCategory::check(Some(raw))?;
                match movie.category() {
                    None => {
                        movie.set_category(Some(raw))?;
                        updated.push("category");
                    }
                    Some(current) if Some(current) != category => {
                        return Err(Violation::frozen(
                            "The movie category must not be changed!",
                        ));
                    }
                    Some(_) => {}
                }
            }
        }
        if let Some(raw) = slots.tv_series_name.as_deref().map(str::trim) {
            if movie.tv_series_name() != Some(raw) {
                movie.set_tv_series_name(Some(raw))?;
                updated.push("tvSeriesName");
            }
        }
        if let Some(raw) = slots.episode_no.as_deref() {
            let episode_no = Movie::check_episode_no(Some(raw), movie.category())?;
            if movie.episode_no() != episode_no {
                movie.set_episode_no(Some(raw))?;
                updated.push("episodeNo");
            }
        }
        if let Some(about_ref) = &slots.about {
            let about = Movie::check_about(Some(about_ref), movie.category(), &self.people)?;
            if movie.about() != about {
                movie.set_about(about_ref, &self.people)?;
                updated.push("about");
            }
        }

        // the per-field branches cannot see a category assigned without
        // its mandatory segment fields; verify the combination
        movie.check_segment_consistency(&self.people)?;

        self.report_update("movie", &movie.movie_id().to_string(), &updated);
        self.movies.insert(movie);
        Ok(updated)
    }

    /// Delete a movie record. An absent id is reported, not an error.
    /// Returns whether a record was removed. No cascade: people
    /// referenced by the movie are left in place.
    pub fn destroy_movie(&mut self, movie_id: MovieId) -> bool {
        match self.movies.remove(movie_id) {
            Some(movie) => {
                info!("{movie} deleted!");
                true
            }
            None => {
                info!("There is no movie with movie ID {movie_id} in the database!");
                false
            }
        }
    }
}
