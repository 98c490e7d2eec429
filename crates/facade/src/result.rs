//! Outcome wrapper returned by every facade call.
//!
//! A call never fails at the Rust level. Problems are reported as [`Event`]s
//! and the caller decides what to do from the aggregated [`Status`].

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// Aggregate status of one or more results. Ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Warn,
    Error,
}

impl From<Severity> for Status {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => Status::Ok,
            Severity::Warn => Status::Warn,
            Severity::Error => Status::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub severity: Severity,
    /// Machine readable key, e.g. `MOVIE_NOT_EXIST`.
    pub key: String,
    pub message: String,
}

impl Event {
    pub fn new(severity: Severity, key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn error(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, key, message)
    }
}

/// Status of a set of events: the worst severity among them.
pub fn status_of(events: &[Event]) -> Status {
    events
        .iter()
        .map(|event| Status::from(event.severity))
        .max()
        .unwrap_or(Status::Ok)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacadeResult<T> {
    data: Option<T>,
    events: Vec<Event>,
}

impl<T> FacadeResult<T> {
    /// A successful result carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            events: Vec::new(),
        }
    }

    /// A successful result without data, e.g. a lookup that found nothing.
    pub fn empty() -> Self {
        Self {
            data: None,
            events: Vec::new(),
        }
    }

    /// A failed result with a single error event.
    pub fn error(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::from_event(Event::error(key, message))
    }

    pub fn from_event(event: Event) -> Self {
        Self {
            data: None,
            events: vec![event],
        }
    }

    pub fn status(&self) -> Status {
        status_of(&self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
