/// Webhook delivery over HTTP.
///
/// Posts records as JSON to a remote collector and resolves the client's
/// public IP address.
pub mod webhook;

use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread::{self, JoinHandle},
};

use serde::Serialize;

use crate::{
    error::{Error, ReportError},
    session::{Entry, Observer},
};

/// A successful calculation as delivered to a remote collector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub description: String,
    pub expression:  String,
    pub result:      f64,
    /// Public IP of the client that ran the calculation.
    pub ip:          String,
}

impl Record {
    #[must_use]
    pub fn new(entry: &Entry, result: f64, ip: &str) -> Self {
        Self { description: entry.description.clone(),
               expression: entry.expression.clone(),
               result,
               ip: ip.to_string() }
    }
}

/// A destination for result records.
pub trait Collector {
    /// Delivers one record.
    ///
    /// # Errors
    /// Returns a `ReportError` when the record could not be delivered.
    fn send(&self, record: &Record) -> Result<(), ReportError>;
}

/// Forwards every successful calculation of a session to a [`Collector`].
///
/// Records are handed to a worker thread that owns the collector, so
/// [`Session::submit`](crate::session::Session::submit) never waits for a
/// delivery. The client IP is resolved by the caller and handed over once at
/// construction. Delivery failures are logged and otherwise ignored.
///
/// Dropping the reporter closes its queue and waits for the records already
/// queued to be delivered.
///
/// # Example
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use shunt::{
///     error::ReportError,
///     report::{Collector, Record, Reporter},
///     session::Session,
/// };
///
/// #[derive(Clone, Default)]
/// struct Memory(Arc<Mutex<Vec<Record>>>);
///
/// impl Collector for Memory {
///     fn send(&self, record: &Record) -> Result<(), ReportError> {
///         self.0.lock().unwrap().push(record.clone());
///         Ok(())
///     }
/// }
///
/// let memory = Memory::default();
/// let mut session = Session::new();
/// session.subscribe(Box::new(Reporter::new(memory.clone(), "203.0.113.7").unwrap()));
///
/// session.submit("tip", "42 * 0.15").unwrap();
/// session.submit("oops", "42 / 0").unwrap_err();
/// drop(session);
///
/// let records = memory.0.lock().unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].result, 6.3);
/// assert_eq!(records[0].ip, "203.0.113.7");
/// ```
#[derive(Debug)]
pub struct Reporter {
    queue:  Option<Sender<Record>>,
    worker: Option<JoinHandle<()>>,
    ip:     String,
}

impl Reporter {
    /// Starts the delivery worker for `collector`.
    ///
    /// # Errors
    /// Returns `Worker` when the thread cannot be spawned.
    pub fn new<C>(collector: C, ip: impl Into<String>) -> Result<Self, ReportError>
        where C: Collector + Send + 'static
    {
        let (queue, records) = mpsc::channel::<Record>();
        let worker = thread::Builder::new().name("shunt-report".to_string())
                                           .spawn(move || deliver(&collector, &records))?;
        Ok(Self { queue:  Some(queue),
                  worker: Some(worker),
                  ip:     ip.into(), })
    }
}

fn deliver(collector: &impl Collector, records: &Receiver<Record>) {
    for record in records {
        match collector.send(&record) {
            Ok(()) => log::info!("reported {:?} = {}", record.expression, record.result),
            Err(e) => log::warn!("could not report {:?}: {e}", record.expression),
        }
    }
}

impl Observer for Reporter {
    fn on_success(&mut self, entry: &Entry, result: f64) {
        let record = Record::new(entry, result, &self.ip);
        let queued = self.queue.as_ref().is_some_and(|queue| queue.send(record).is_ok());
        if !queued {
            log::warn!("report worker is gone, dropping {:?}", entry.expression);
        }
    }

    fn on_failure(&mut self, entry: &Entry, error: &Error) {
        log::debug!("not reporting {:?}: {error}", entry.expression);
    }
}

impl Drop for Reporter {
    fn drop(&mut self) {
        // Closing the queue ends the worker's loop once it is drained.
        drop(self.queue.take());
        if let Some(worker) = self.worker.take()
           && worker.join().is_err()
        {
            log::error!("report worker panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::session::Session;

    struct Unreachable {
        attempts: Arc<AtomicUsize>,
    }

    impl Collector for Unreachable {
        fn send(&self, _record: &Record) -> Result<(), ReportError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(ReportError::Status { status: 503 })
        }
    }

    /// Delivers one record per message received on `gate`.
    struct Gated {
        gate:      Receiver<()>,
        delivered: Arc<AtomicUsize>,
    }

    impl Collector for Gated {
        fn send(&self, _record: &Record) -> Result<(), ReportError> {
            self.gate.recv().unwrap();
            self.delivered.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn unreachable_session(attempts: &Arc<AtomicUsize>) -> Session {
        let mut session = Session::new();
        let collector = Unreachable { attempts: Arc::clone(attempts) };
        session.subscribe(Box::new(Reporter::new(collector, "0.0.0.0").unwrap()));
        session
    }

    #[test]
    fn collector_failure_does_not_change_the_result() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let mut session = unreachable_session(&attempts);

        assert_eq!(session.submit("", "2 + 2"), Ok(4.0));
        assert_eq!(session.latest().and_then(Entry::result), Some(4.0));

        drop(session);
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failures_are_not_sent() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let mut session = unreachable_session(&attempts);

        assert!(session.submit("", "log(0)").is_err());

        drop(session);
        assert_eq!(attempts.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn submit_does_not_wait_for_delivery() {
        let (release, gate) = mpsc::channel();
        let delivered = Arc::new(AtomicUsize::new(0));
        let collector = Gated { gate,
                                delivered: Arc::clone(&delivered) };
        let mut session = Session::new();
        session.subscribe(Box::new(Reporter::new(collector, "0.0.0.0").unwrap()));

        // The collector is blocked until released, yet both submissions return.
        assert_eq!(session.submit("", "6 * 7"), Ok(42.0));
        assert_eq!(session.submit("", "1 + 1"), Ok(2.0));
        assert_eq!(delivered.load(Ordering::SeqCst), 0);

        release.send(()).unwrap();
        release.send(()).unwrap();
        drop(session);
        assert_eq!(delivered.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn record_serializes_to_json() {
        let record = Record { description: "half".to_string(),
                              expression:  "1 / 2".to_string(),
                              result:      0.5,
                              ip:          "198.51.100.1".to_string(), };
        assert_eq!(serde_json::to_string(&record).unwrap(),
                   r#"{"description":"half","expression":"1 / 2","result":0.5,"ip":"198.51.100.1"}"#);
    }
}
