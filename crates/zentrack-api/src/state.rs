use std::collections::HashMap;
use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use tokio::sync::Mutex;
use uuid::Uuid;

use zentrack_core::error::CoreError;
use zentrack_core::models::history::AssessmentRecord;
use zentrack_core::models::trend::TrendSeries;
use zentrack_instruments::engine::{AssessmentEngine, UnsetPolicy};

use crate::config::ApiConfig;

/// One client's assessment run.
#[derive(Debug)]
pub struct Session {
    pub engine: AssessmentEngine,
    pub last_active: Timestamp,
}

impl Session {
    pub fn new(engine: AssessmentEngine, now: Timestamp) -> Self {
        Self {
            engine,
            last_active: now,
        }
    }

    /// Mark the session as used and hand out its engine.
    pub fn touch(&mut self, now: Timestamp) -> &mut AssessmentEngine {
        self.last_active = now;
        &mut self.engine
    }
}

/// Shared application state, injected into all route handlers via Axum state.
///
/// Every session owns its own engine. A session lives until it is deleted
/// or sits idle for longer than `session_idle`; idle sessions are pruned
/// whenever a new one is created. History and the trend series are kept
/// for the life of the process.
///
/// Locks are held only across a single synchronous engine call and are
/// never nested.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub history: Arc<Mutex<Vec<AssessmentRecord>>>,
    pub trend: Arc<Mutex<TrendSeries>>,
    pub unset_policy: UnsetPolicy,
    pub session_idle: SignedDuration,
}

impl AppState {
    pub fn new(config: &ApiConfig) -> Result<Self, CoreError> {
        let idle_secs = i64::try_from(config.session_idle_secs).unwrap_or(i64::MAX);
        Ok(Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            history: Arc::new(Mutex::new(Vec::new())),
            trend: Arc::new(Mutex::new(TrendSeries::new(config.trend_capacity)?)),
            unset_policy: config.unset_policy,
            session_idle: SignedDuration::from_secs(idle_secs),
        })
    }

    /// Drop every session whose last activity is more than `session_idle`
    /// before `now`. Returns how many were removed.
    pub async fn prune_idle_sessions(&self, now: Timestamp) -> usize {
        let Ok(cutoff) = now.checked_sub(self.session_idle) else {
            return 0;
        };
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_active >= cutoff);
        let removed = before - sessions.len();
        if removed > 0 {
            tracing::info!(removed, remaining = sessions.len(), "idle sessions pruned");
        }
        removed
    }
}
