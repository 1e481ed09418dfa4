use filmbase::{
    ActorSlots, Catalog, DirectorSlots, LocalStore, MovieSlots, MovieUpdate, PersonRef, Result,
};
use log::info;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let root = std::env::args().nth(1).unwrap_or_else(|| "data".to_string());
    let store = LocalStore::open(&root);

    info!("Loading catalog from: {root}");
    let mut catalog = store.retrieve_all()?;

    if catalog.people().is_empty() {
        info!("Empty store, creating test data");
        create_test_data(&mut catalog)?;
    }

    for movie in catalog.movies().iter() {
        info!("{movie}");
    }

    // A sample round trip: update one movie, destroy a throwaway one,
    // save, reload
    catalog.update_movie(&MovieUpdate {
        movie_id: "1".to_string(),
        title: Some("Pulp Fiction".to_string()),
        ..MovieUpdate::default()
    })?;
    catalog.add_movie(MovieSlots {
        movie_id: Some("99".to_string()),
        title: Some("Throwaway".to_string()),
        release_date: Some("2000-01-01".to_string()),
        director: Some(PersonRef::Id(1)),
        ..MovieSlots::default()
    })?;
    catalog.destroy_movie(99);
    store.save_all(&catalog)?;

    let reloaded = store.retrieve_all()?;
    info!(
        "Reloaded {} people, {} actors, {} directors, {} movies",
        reloaded.people().len(),
        reloaded.actors().len(),
        reloaded.directors().len(),
        reloaded.movies().len()
    );
    Ok(())
}

/// Seed the catalog with a small data set covering both movie categories
fn create_test_data(catalog: &mut Catalog) -> Result<()> {
    catalog.add_director(DirectorSlots {
        person_id: Some("1".to_string()),
        name: Some("Quentin Tarantino".to_string()),
    })?;
    catalog.add_director(DirectorSlots {
        person_id: Some("2".to_string()),
        name: Some("George Lucas".to_string()),
    })?;
    catalog.add_director(DirectorSlots {
        person_id: Some("3".to_string()),
        name: Some("Asif Kapadia".to_string()),
    })?;
    catalog.add_actor(ActorSlots {
        person_id: Some("5".to_string()),
        name: Some("Uma Thurman".to_string()),
        agent: None,
    })?;
    catalog.add_actor(ActorSlots {
        person_id: Some("6".to_string()),
        name: Some("John Travolta".to_string()),
        agent: None,
    })?;
    catalog.add_actor(ActorSlots {
        person_id: Some("7".to_string()),
        name: Some("Mark Hamill".to_string()),
        agent: Some(PersonRef::Id(6)),
    })?;

    catalog.add_movie(MovieSlots {
        movie_id: Some("1".to_string()),
        title: Some("Pulp Fiction".to_string()),
        release_date: Some("1994-05-12".to_string()),
        actors: vec![PersonRef::Id(5), PersonRef::Id(6)],
        director: Some(PersonRef::Id(1)),
        ..MovieSlots::default()
    })?;
    catalog.add_movie(MovieSlots {
        movie_id: Some("2".to_string()),
        title: Some("Star Wars".to_string()),
        release_date: Some("1977-05-25".to_string()),
        actors: vec![PersonRef::Id(7)],
        director: Some(PersonRef::Id(2)),
        ..MovieSlots::default()
    })?;
    catalog.add_movie(MovieSlots {
        movie_id: Some("3".to_string()),
        title: Some("George Lucas: A Life".to_string()),
        release_date: Some("2016-11-29".to_string()),
        director: Some(PersonRef::Id(3)),
        category: Some("2".to_string()),
        about: Some(PersonRef::Id(2)),
        ..MovieSlots::default()
    })?;
    catalog.add_movie(MovieSlots {
        movie_id: Some("4".to_string()),
        title: Some("Chapter 1".to_string()),
        release_date: Some("2019-11-12".to_string()),
        actors: vec![PersonRef::Id(7)],
        director: Some(PersonRef::Id(1)),
        category: Some("1".to_string()),
        tv_series_name: Some("The Mandalorian".to_string()),
        episode_no: Some("1".to_string()),
        ..MovieSlots::default()
    })?;
    Ok(())
}
