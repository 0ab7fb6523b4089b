use std::collections::VecDeque;

use serde::Serialize;

use crate::{
    error::{Error, ErrorKind},
    evaluate,
};

/// The outcome recorded for one submitted expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// The expression evaluated to `result`.
    Success {
        /// The normalized result.
        result: f64,
    },
    /// The expression was rejected.
    Failure {
        /// The stage that rejected it.
        kind:    ErrorKind,
        /// The error message shown to the user.
        message: String,
    },
}

/// One line of the calculation history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Free-text description given with the expression. May be empty.
    pub description: String,
    /// The expression as submitted, trimmed.
    pub expression:  String,
    #[serde(flatten)]
    pub outcome:     Outcome,
}

impl Entry {
    /// The text a history list shows as the entry's title: the description,
    /// or the expression when no description was given.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.description.is_empty() { &self.expression } else { &self.description }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success { .. })
    }

    /// The result, for successful entries.
    #[must_use]
    pub const fn result(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Success { result } => Some(result),
            Outcome::Failure { .. } => None,
        }
    }
}

/// Receives the outcome of every expression submitted to a [`Session`].
///
/// Observers decouple evaluation from presentation: a terminal front end
/// prints, a collector forwards results elsewhere.
pub trait Observer {
    /// Called after `entry` evaluated to `result`.
    fn on_success(&mut self, entry: &Entry, result: f64);

    /// Called after `entry` was rejected with `error`.
    fn on_failure(&mut self, entry: &Entry, error: &Error);
}

/// A sequence of calculations with a newest-first history.
///
/// ## Usage
///
/// A `Session` is created once per user and fed expressions with
/// [`Session::submit`]. Every submission is recorded, failed ones included,
/// and every subscribed [`Observer`] is notified.
#[derive(Default)]
pub struct Session {
    history:   VecDeque<Entry>,
    limit:     Option<usize>,
    observers: Vec<Box<dyn Observer>>,
}

impl Session {
    /// Creates a session with an unbounded history and no observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that keeps at most `limit` history entries,
    /// dropping the oldest first.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit),
               ..Self::default() }
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Evaluates `expression` and records the outcome.
    ///
    /// Both strings are trimmed. The entry is prepended to the history and
    /// observers are notified before the result is returned. A failure is
    /// recorded as such; no numeric value is substituted.
    ///
    /// # Errors
    /// Returns the evaluation error unchanged.
    ///
    /// # Example
    /// ```
    /// use shunt::session::Session;
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.submit("area", " 3 * 4 ").unwrap(), 12.0);
    /// assert!(session.submit("", "3 +").is_err());
    ///
    /// let labels: Vec<&str> = session.history().map(|e| e.label()).collect();
    /// assert_eq!(labels, ["3 +", "area"]);
    /// ```
    pub fn submit(&mut self, description: &str, expression: &str) -> Result<f64, Error> {
        let description = description.trim().to_string();
        let expression = expression.trim().to_string();
        let evaluated = evaluate(&expression);

        let outcome = match &evaluated {
            Ok(result) => Outcome::Success { result: *result },
            Err(e) => Outcome::Failure { kind:    e.kind(),
                                         message: e.to_string(), },
        };
        let entry = Entry { description,
                            expression,
                            outcome };

        for observer in &mut self.observers {
            match &evaluated {
                Ok(result) => observer.on_success(&entry, *result),
                Err(e) => observer.on_failure(&entry, e),
            }
        }

        self.record(entry);
        evaluated
    }

    /// Iterates over the history, newest first.
    pub fn history(&self) -> impl Iterator<Item = &Entry> {
        self.history.iter()
    }

    /// The most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&Entry> {
        self.history.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    fn record(&mut self, entry: Entry) {
        self.history.push_front(entry);
        if let Some(limit) = self.limit {
            self.history.truncate(limit);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
         .field("history", &self.history)
         .field("limit", &self.limit)
         .field("observers", &self.observers.len())
         .finish()
    }
}
