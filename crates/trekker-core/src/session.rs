//! The signed-in user, passed explicitly to every screen.
//!
//! A [`Session`] is a cheap, cloneable handle: clones share the same state.
//! Screens read the current user when they act and may [`Session::subscribe`]
//! to learn when the user changes (sign in, sign out, switch account).

use std::sync::Arc;

use tokio::sync::watch;

use crate::{
    error::{Result, TripError},
    models::User,
};

/// Shared authentication state.
#[derive(Debug, Clone)]
pub struct Session {
    user: Arc<watch::Sender<Option<User>>>,
}

impl Session {
    /// Creates a session with nobody signed in.
    pub fn new() -> Self {
        let (user, _) = watch::channel(None);
        Self {
            user: Arc::new(user),
        }
    }

    /// Creates a session with `user` already signed in.
    pub fn signed_in(user: User) -> Self {
        let session = Self::new();
        session.sign_in(user);
        session
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.borrow().is_some()
    }

    /// Signs `user` in, replacing whoever was signed in before.
    ///
    /// Subscribers are only notified when the user actually changes.
    pub fn sign_in(&self, user: User) {
        self.replace(Some(user));
    }

    pub fn sign_out(&self) {
        self.replace(None);
    }

    /// Watches this session for user changes.
    pub fn subscribe(&self) -> SessionWatcher {
        SessionWatcher {
            user: self.user.subscribe(),
        }
    }

    fn replace(&self, next: Option<User>) {
        let changed = self.user.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
        if changed {
            log::debug!("Session user changed");
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Receives user changes from a [`Session`].
#[derive(Debug)]
pub struct SessionWatcher {
    user: watch::Receiver<Option<User>>,
}

impl SessionWatcher {
    /// Waits for the next change and returns the new user.
    ///
    /// Returns `None` once every handle to the session has been dropped.
    pub async fn changed(&mut self) -> Option<Option<User>> {
        self.user.changed().await.ok()?;
        Some(self.user.borrow_and_update().clone())
    }
}

/// Gate for screens that need a signed-in user.
///
/// # Errors
///
/// Returns `TripError::Unauthenticated` when nobody is signed in.
pub fn require_user(session: &Session) -> Result<User> {
    session.current_user().ok_or(TripError::Unauthenticated)
}
