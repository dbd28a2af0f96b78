//! Session-scoped cart ownership.
//!
//! The storefront keeps one [`Cart`] per active user session. Rather than
//! relying on an ambient framework scope, the store is an explicit value the
//! caller owns: carts are created lazily on first access and discarded when
//! the caller ends the session.

use jiff::Timestamp;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::cart::Cart;

/// Errors from session store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The given session id has no active session.
    #[error("no active session {0}")]
    UnknownSession(Uuid),
}

/// One active session and its cart.
#[derive(Debug, Clone)]
pub struct Session {
    cart: Cart,
    created_at: Timestamp,
    touched_at: Timestamp,
}

impl Session {
    fn new() -> Self {
        let now = Timestamp::now();

        Self {
            cart: Cart::new(),
            created_at: now,
            touched_at: now,
        }
    }

    /// Returns the session's cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the session's cart was last accessed for writing.
    pub fn touched_at(&self) -> Timestamp {
        self.touched_at
    }
}

/// Owns one [`Cart`] per active session, keyed by session id.
///
/// The store performs no locking of its own: each session is assumed to have
/// a single logical owner, and callers sharing a store across threads are
/// responsible for serializing access to it.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: FxHashMap<Uuid, Session>,
}

impl SessionStore {
    /// Creates a store with no active sessions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: FxHashMap::default(),
        }
    }

    /// Returns the cart for the given session, creating an empty one if the
    /// session is not yet active.
    pub fn cart_mut(&mut self, session: Uuid) -> &mut Cart {
        let entry = self.sessions.entry(session).or_insert_with(|| {
            debug!(%session, "starting session");

            Session::new()
        });

        entry.touched_at = Timestamp::now();

        &mut entry.cart
    }

    /// Returns the cart for the given session, if one is active.
    pub fn cart(&self, session: Uuid) -> Option<&Cart> {
        self.sessions.get(&session).map(Session::cart)
    }

    /// Returns the session record for the given id, if one is active.
    pub fn session(&self, session: Uuid) -> Option<&Session> {
        self.sessions.get(&session)
    }

    /// Ends the given session, discarding its cart.
    ///
    /// Returns the discarded cart so the caller can inspect or drain it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownSession`] if the session is not active.
    pub fn end(&mut self, session: Uuid) -> Result<Cart, SessionError> {
        let ended = self
            .sessions
            .remove(&session)
            .ok_or(SessionError::UnknownSession(session))?;

        info!(%session, items = ended.cart.len(), "ended session");

        Ok(ended.cart)
    }

    /// Iterate over the active sessions.
    pub fn iter(&self) -> impl Iterator<Item = (Uuid, &Session)> {
        self.sessions.iter().map(|(id, session)| (*id, session))
    }

    /// Returns the number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no sessions are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn cart_is_created_lazily_on_first_access() {
        let mut store = SessionStore::new();
        let session = Uuid::now_v7();

        assert!(store.cart(session).is_none());

        let cart = store.cart_mut(session);

        assert!(cart.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn carts_are_isolated_per_session() {
        let mut store = SessionStore::new();
        let session_a = Uuid::now_v7();
        let session_b = Uuid::now_v7();

        store.cart_mut(session_a).add("Alien", 348);
        store.cart_mut(session_b).add("Aliens", 679);
        store.cart_mut(session_a).add("Alien 3", 8077);

        assert_eq!(store.cart(session_a).map(Cart::len), Some(2));
        assert_eq!(store.cart(session_b).map(Cart::len), Some(1));
    }

    #[test]
    fn repeated_access_reuses_the_same_cart() {
        let mut store = SessionStore::new();
        let session = Uuid::now_v7();

        store.cart_mut(session).add("Twice", 2);
        store.cart_mut(session).add("Twice", 2);

        assert_eq!(store.len(), 1);
        assert_eq!(store.cart(session).map(Cart::len), Some(2));
    }

    #[test]
    fn end_returns_the_discarded_cart() -> TestResult {
        let mut store = SessionStore::new();
        let session = Uuid::now_v7();

        store.cart_mut(session).add("Parting Gift", 1);

        let cart = store.end(session)?;

        assert_eq!(cart.len(), 1);
        assert!(store.is_empty());
        assert!(store.cart(session).is_none());

        Ok(())
    }

    #[test]
    fn end_unknown_session_returns_error() {
        let mut store = SessionStore::new();
        let session = Uuid::now_v7();

        let result = store.end(session);

        assert_eq!(
            result,
            Err(SessionError::UnknownSession(session)),
            "expected UnknownSession for a session that was never started"
        );
    }

    #[test]
    fn session_records_creation_and_touch_times() {
        let mut store = SessionStore::new();
        let session = Uuid::now_v7();

        store.cart_mut(session).add("Clockwatcher", 1);

        let record = store.session(session);

        assert!(record.is_some(), "expected an active session record");

        if let Some(record) = record {
            assert!(record.touched_at() >= record.created_at());
            assert_eq!(record.cart().len(), 1);
        }
    }

    #[test]
    fn iter_visits_every_active_session() {
        let mut store = SessionStore::new();

        store.cart_mut(Uuid::now_v7()).add("One", 1);
        store.cart_mut(Uuid::now_v7()).add("Two", 2);

        assert_eq!(store.iter().count(), 2);
    }
}
