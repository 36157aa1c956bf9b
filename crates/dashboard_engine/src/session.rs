use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};
use std::time::{Duration, Instant};

use dashboard_core::{update, Config, DashboardView, Msg, ThemeMode, ViewState};
use dashboard_logging::{dash_debug, dash_info, dash_warn};
use thiserror::Error;
use uuid::Uuid;

use crate::{CollectingSink, EffectRunner, Output};

/// Live sessions allowed unless the registry is built with another limit.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Unguessable session handle, so one session cannot address another's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown or expired session {0}")]
    UnknownSession(SessionId),
    #[error("session limit of {0} reached")]
    Capacity(usize),
}

struct Session {
    state: ViewState,
    last_seen: Instant,
}

/// Owns every live session's view state.
///
/// The registry lock only guards the map; each session has its own lock, held for the whole
/// interaction, so a session handles one interaction at a time without waiting on others.
pub struct SessionRegistry {
    config: Arc<Config>,
    runner: EffectRunner,
    max_sessions: usize,
    sessions: Mutex<HashMap<SessionId, Arc<Mutex<Session>>>>,
}

impl SessionRegistry {
    pub fn new(config: Arc<Config>, runner: EffectRunner) -> Self {
        Self {
            config,
            runner,
            max_sessions: DEFAULT_MAX_SESSIONS,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Starts a session with fresh state; its theme follows the configured theme name.
    ///
    /// Refused once `max_sessions` are live; idle ones free their place when pruned.
    pub fn open(&self) -> Result<(SessionId, DashboardView), SessionError> {
        let mut sessions = self.lock_sessions();
        if sessions.len() >= self.max_sessions {
            dash_warn!("Session limit of {} reached", self.max_sessions);
            return Err(SessionError::Capacity(self.max_sessions));
        }
        let state = ViewState::with_theme(ThemeMode::from_theme_name(self.config.theme()));
        let view = state.view();
        let id = SessionId::generate();
        let session = Session {
            state,
            last_seen: Instant::now(),
        };
        sessions.insert(id, Arc::new(Mutex::new(session)));
        dash_info!("Opened session {}", id);
        Ok((id, view))
    }

    /// Applies messages in order to one session and runs their effects before returning.
    pub fn handle(&self, id: SessionId, msgs: Vec<Msg>) -> Result<Vec<Output>, SessionError> {
        let slot = self.slot(id)?;
        let _scope = dashboard_logging::enter_session(id.to_string());
        let mut session = lock(&slot);
        let sink = CollectingSink::new();
        for msg in msgs {
            dash_debug!("Applying {:?}", msg);
            let state = std::mem::take(&mut session.state);
            let (state, effects) = update(state, msg);
            session.state = state;
            self.runner.run(effects, &sink);
        }
        session.last_seen = Instant::now();
        Ok(sink.take())
    }

    pub fn view(&self, id: SessionId) -> Result<DashboardView, SessionError> {
        let slot = self.slot(id)?;
        let session = lock(&slot);
        Ok(session.state.view())
    }

    pub fn close(&self, id: SessionId) -> bool {
        let removed = self.lock_sessions().remove(&id).is_some();
        if removed {
            dash_info!("Closed session {}", id);
        }
        removed
    }

    /// Drops sessions idle for longer than `max_idle`. Sessions mid-interaction are kept.
    pub fn prune_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.lock_sessions();
        let before = sessions.len();
        sessions.retain(|id, slot| {
            let last_seen = match slot.try_lock() {
                Ok(session) => session.last_seen,
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().last_seen,
                Err(TryLockError::WouldBlock) => return true,
            };
            let keep = last_seen.elapsed() <= max_idle;
            if !keep {
                dash_info!("Expired session {}", id);
            }
            keep
        });
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.lock_sessions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, id: SessionId) -> Result<Arc<Mutex<Session>>, SessionError> {
        self.lock_sessions()
            .get(&id)
            .cloned()
            .ok_or(SessionError::UnknownSession(id))
    }

    fn lock_sessions(&self) -> MutexGuard<'_, HashMap<SessionId, Arc<Mutex<Session>>>> {
        lock(&self.sessions)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
