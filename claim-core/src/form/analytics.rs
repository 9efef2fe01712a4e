//! Calculator interaction tracking.
//!
//! One [`CalculatorAnalytics`] per session. Each event is written as an
//! `info` event on the `claim::analytics` target and kept in memory, so a
//! subscriber can forward events while callers can still inspect them.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::models::EstimateRange;

static SESSION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// What happened in a calculator session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    Started,
    StepCompleted {
        step: usize,
    },
    /// The reported value is the midpoint of the range.
    Calculated {
        estimated_value: Decimal,
        time_spent_ms: i64,
    },
    Abandoned {
        step: usize,
        time_spent_ms: i64,
    },
}

impl AnalyticsEvent {
    pub fn action(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::StepCompleted { .. } => "step_completed",
            Self::Calculated { .. } => "calculated",
            Self::Abandoned { .. } => "abandoned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackedEvent {
    pub session_id: String,
    pub calculator: String,
    #[serde(flatten)]
    pub event: AnalyticsEvent,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug)]
pub struct CalculatorAnalytics {
    session_id: String,
    calculator: String,
    started_at: Option<DateTime<Utc>>,
    events: Vec<TrackedEvent>,
}

impl CalculatorAnalytics {
    pub fn new(calculator: &str) -> Self {
        Self {
            session_id: Self::generate_session_id(),
            calculator: calculator.to_string(),
            started_at: None,
            events: Vec::new(),
        }
    }

    /// `calc_<unix millis>_<process-wide counter>`.
    fn generate_session_id() -> String {
        let sequence = SESSION_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("calc_{}_{sequence}", Utc::now().timestamp_millis())
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn events(&self) -> &[TrackedEvent] {
        &self.events
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn track_start(&mut self) {
        self.started_at = Some(Utc::now());
        self.track(AnalyticsEvent::Started);
    }

    pub fn track_step_complete(
        &mut self,
        step: usize,
    ) {
        self.track(AnalyticsEvent::StepCompleted { step });
    }

    pub fn track_calculation(
        &mut self,
        range: &EstimateRange,
    ) {
        let time_spent_ms = self.time_spent_ms();
        self.track(AnalyticsEvent::Calculated {
            estimated_value: range.midpoint(),
            time_spent_ms,
        });
    }

    pub fn track_abandonment(
        &mut self,
        step: usize,
    ) {
        let time_spent_ms = self.time_spent_ms();
        self.track(AnalyticsEvent::Abandoned {
            step,
            time_spent_ms,
        });
    }

    fn time_spent_ms(&self) -> i64 {
        self.started_at
            .map(|started| (Utc::now() - started).num_milliseconds())
            .unwrap_or(0)
    }

    fn track(
        &mut self,
        event: AnalyticsEvent,
    ) {
        info!(
            target: "claim::analytics",
            session_id = %self.session_id,
            calculator = %self.calculator,
            action = event.action(),
            event = ?event,
            "calculator interaction"
        );
        self.events.push(TrackedEvent {
            session_id: self.session_id.clone(),
            calculator: self.calculator.clone(),
            event,
            timestamp: Utc::now(),
        });
    }
}
