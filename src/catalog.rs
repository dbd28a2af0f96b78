//! Movie catalog fixtures.
//!
//! The storefront adds movies to a cart by id and name. The catalog holds
//! the movie listings those adds come from, loaded from a YAML fixture file.

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::cart::{Cart, CartItem};

/// Catalog loading and lookup errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading the fixture file.
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Two listings share the same id.
    #[error("Duplicate movie id: {0}")]
    DuplicateMovie(i64),

    /// No listing with the given id.
    #[error("Movie not found: {0}")]
    MovieNotFound(i64),
}

/// One movie listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Listing id.
    pub id: i64,

    /// Display title.
    pub title: String,

    /// Release date, if listed.
    #[serde(default)]
    pub release_date: Option<String>,

    /// Short synopsis, if listed.
    #[serde(default)]
    pub overview: Option<String>,

    /// Poster image path, if listed.
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl From<&Movie> for CartItem {
    fn from(movie: &Movie) -> Self {
        CartItem::with_details(
            movie.title.clone(),
            movie.id,
            movie.poster_path.clone(),
            movie.release_date.clone(),
            movie.overview.clone(),
        )
    }
}

/// On-disk fixture layout: a `movies` list.
#[derive(Debug, Deserialize)]
struct MoviesFixture {
    movies: Vec<Movie>,
}

/// Movie listings indexed by id, in fixture-file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    ids: FxHashMap<i64, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            ids: FxHashMap::default(),
        }
    }

    /// Loads a catalog from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the file cannot be read or parsed, or
    /// if two listings share an id.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Loads a catalog from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the YAML cannot be parsed or if two
    /// listings share an id.
    pub fn from_yaml(contents: &str) -> Result<Self, CatalogError> {
        let fixture: MoviesFixture = serde_norway::from_str(contents)?;
        let mut catalog = Self::new();

        for movie in fixture.movies {
            catalog.insert(movie)?;
        }

        Ok(catalog)
    }

    /// Adds a listing to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateMovie`] if a listing with the same
    /// id is already present.
    pub fn insert(&mut self, movie: Movie) -> Result<(), CatalogError> {
        if self.ids.contains_key(&movie.id) {
            return Err(CatalogError::DuplicateMovie(movie.id));
        }

        self.ids.insert(movie.id, self.movies.len());
        self.movies.push(movie);

        Ok(())
    }

    /// Looks up a listing by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MovieNotFound`] if no listing has the id.
    pub fn movie(&self, id: i64) -> Result<&Movie, CatalogError> {
        self.ids
            .get(&id)
            .and_then(|index| self.movies.get(*index))
            .ok_or(CatalogError::MovieNotFound(id))
    }

    /// Appends the listing with the given id to a cart.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MovieNotFound`] if no listing has the id.
    pub fn add_to_cart(&self, cart: &mut Cart, id: i64) -> Result<(), CatalogError> {
        let movie = self.movie(id)?;

        debug!(id, title = %movie.title, "adding listing to cart");

        cart.add_item(CartItem::from(movie));

        Ok(())
    }

    /// Returns all listings in fixture-file order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Returns the number of listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Returns `true` if the catalog holds no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
