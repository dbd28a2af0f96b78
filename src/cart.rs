//! Cart

use serde::{Deserialize, Serialize};

/// One selected movie in a cart.
///
/// Items are plain values: once constructed they are never mutated, only
/// appended to, removed from, or drained out of a [`Cart`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    name: String,
    id: i64,
    poster_path: Option<String>,
    release_date: Option<String>,
    overview: Option<String>,
}

impl CartItem {
    /// Creates a new item from a display name and movie id.
    ///
    /// No validation is performed: empty names and arbitrary ids (negative
    /// or already present in a cart) are accepted.
    #[must_use]
    pub fn new(name: impl Into<String>, id: i64) -> Self {
        Self {
            name: name.into(),
            id,
            poster_path: None,
            release_date: None,
            overview: None,
        }
    }

    /// Creates a new item carrying the full set of listing details.
    #[must_use]
    pub fn with_details(
        name: impl Into<String>,
        id: i64,
        poster_path: Option<String>,
        release_date: Option<String>,
        overview: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            poster_path,
            release_date,
            overview,
        }
    }

    /// Returns the display name of the item.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the movie id of the item.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the poster path of the item, if known.
    pub fn poster_path(&self) -> Option<&str> {
        self.poster_path.as_deref()
    }

    /// Returns the release date of the item, if known.
    pub fn release_date(&self) -> Option<&str> {
        self.release_date.as_deref()
    }

    /// Returns the overview of the item, if known.
    pub fn overview(&self) -> Option<&str> {
        self.overview.as_deref()
    }
}

/// An ordered collection of selected movies for one user scope.
///
/// Insertion order is meaningful (it reflects selection order) and duplicate
/// items are permitted. Every operation succeeds on any input; the cart
/// itself performs no validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new, empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Constructs a [`CartItem`] from the given name and id and appends it.
    pub fn add(&mut self, name: impl Into<String>, id: i64) {
        self.items.push(CartItem::new(name, id));
    }

    /// Appends a pre-built item to the end of the cart.
    pub fn add_item(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Returns the items currently in the cart, in insertion order.
    ///
    /// The returned slice is a read-only view; the cart can only be changed
    /// through its own methods.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Replaces the entire contents of the cart.
    pub fn set_items(&mut self, items: impl Into<Vec<CartItem>>) {
        self.items = items.into();
    }

    /// Removes every item with the given movie id.
    ///
    /// Returns the number of items removed. Removing an id that is not in
    /// the cart removes nothing and returns `0`.
    pub fn remove(&mut self, id: i64) -> usize {
        let before = self.items.len();

        self.items.retain(|item| item.id() != id);

        before - self.items.len()
    }

    /// Removes all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Removes and returns all items, leaving the cart empty.
    #[must_use]
    pub fn take_items(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }

    /// Iterate over the items in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    /// Returns the number of items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
