//! Admin sessions. A session is opened around a bearer token on login and
//! dropped on logout, when the backend answers 401, or once it has been idle
//! for longer than the store's time to live. It lives only in memory and the
//! cookie carrying its id expires with the browser session.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::dashboard::Dashboard;
use crate::notice::Notice;

pub const SESSION_COOKIE: &str = "admin_session";

pub type SessionId = String;

/// Idle lifetime of an admin session when none is configured.
pub const DEFAULT_TTL_MINUTES: i64 = 720;

/// Opaque credential presented to the backend's admin endpoints.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

#[derive(Debug)]
pub struct AdminSession {
    pub token: BearerToken,
    pub dashboard: Dashboard,
    flash: Option<Notice>,
    expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn new(token: BearerToken, expires_at: DateTime<Utc>) -> Self {
        Self {
            token,
            dashboard: Dashboard::default(),
            flash: None,
            expires_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Queue a notice for the next render.
    pub fn flash(&mut self, notice: Notice) {
        self.flash = Some(notice);
    }

    pub fn take_flash(&mut self) -> Option<Notice> {
        self.flash.take()
    }
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, AdminSession>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Duration::minutes(DEFAULT_TTL_MINUTES))
    }
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, AdminSession>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Opens a session and drops every session that has expired meanwhile.
    pub fn open(&self, token: BearerToken) -> SessionId {
        let now = Utc::now();
        let id = Uuid::new_v4().to_string();
        let mut sessions = self.lock();

        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        let pruned = before - sessions.len();
        if pruned > 0 {
            debug!(pruned, "expired admin sessions dropped");
        }

        sessions.insert(id.clone(), AdminSession::new(token, now + self.ttl));
        id
    }

    /// Whether `id` names a live session. A live session's lifetime is
    /// extended; an expired one is removed.
    pub fn touch(&self, id: &str) -> bool {
        let now = Utc::now();
        let mut sessions = self.lock();
        let expired = match sessions.get(id) {
            Some(s) => s.is_expired(now),
            None => return false,
        };
        if expired {
            sessions.remove(id);
            debug!("admin session expired");
            return false;
        }
        if let Some(s) = sessions.get_mut(id) {
            s.expires_at = now + self.ttl;
        }
        true
    }

    /// Runs `f` against the session. The lock is held only for the duration
    /// of `f`, so never call it across an await point.
    pub fn with<R>(&self, id: &str, f: impl FnOnce(&mut AdminSession) -> R) -> Option<R> {
        let now = Utc::now();
        self.lock()
            .get_mut(id)
            .filter(|s| !s.is_expired(now))
            .map(f)
    }

    pub fn close(&self, id: &str) -> bool {
        self.lock().remove(id).is_some()
    }
}

/// Session id from the request cookie, if the store still knows it.
pub fn current(req: &HttpRequest, store: &SessionStore) -> Option<SessionId> {
    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|id| store.touch(id))
}

pub fn cookie(id: &str) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, id.to_string())
        .path("/admin")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

pub fn expired_cookie() -> Cookie<'static> {
    let mut cookie = cookie("");
    cookie.make_removal();
    cookie
}
