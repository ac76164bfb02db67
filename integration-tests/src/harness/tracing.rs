use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, Once, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Only diagnostics emitted by the library are recorded.
const CAPTURED_CRATE: &str = "jog_core";

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the event came from `module` (a path below `jog_core`).
    pub fn is_from(&self, module: &str) -> bool {
        self.target
            .strip_prefix(CAPTURED_CRATE)
            .and_then(|rest| rest.strip_prefix("::"))
            .is_some_and(|rest| rest.starts_with(module))
    }
}

/// Library diagnostics recorded during a test binary's run.
///
/// The subscriber is process-global, so events from tests running in
/// parallel end up in the same log; assertions should look for a specific
/// event rather than count them.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl EventLog {
    pub fn lock(&self) -> MutexGuard<'_, Vec<CapturedEvent>> {
        self.events.lock().expect("event log poisoned")
    }

    pub fn contains<P>(&self, predicate: P) -> bool
    where
        P: Fn(&CapturedEvent) -> bool,
    {
        self.lock().iter().any(predicate)
    }

    /// A copy of every recorded event carrying `message`.
    pub fn with_message(&self, message: &str) -> Vec<CapturedEvent> {
        self.lock()
            .iter()
            .filter(|e| e.message() == Some(message))
            .cloned()
            .collect()
    }

    fn record(&self, event: CapturedEvent) {
        self.lock().push(event);
    }
}

impl fmt::Debug for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.lock().iter()).finish()
    }
}

/// The shared event log, installing the capturing subscriber on first use.
pub fn captured_events() -> EventLog {
    static LOG: OnceLock<EventLog> = OnceLock::new();
    let log = LOG.get_or_init(EventLog::default).clone();
    init_test_tracing(log.clone());
    log
}

pub fn init_test_tracing(log: EventLog) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let subscriber = tracing_subscriber::registry().with(CaptureLayer { log });

        tracing::subscriber::set_global_default(subscriber)
            .expect("failed to set global tracing subscriber");
    });
}

struct CaptureLayer {
    log: EventLog,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if !meta.target().starts_with(CAPTURED_CRATE) {
            return;
        }

        let mut fields = Vec::new();
        event.record(&mut FieldVisitor {
            fields: &mut fields,
        });

        self.log.record(CapturedEvent {
            level: *meta.level(),
            target: meta.target().to_string(),
            fields,
        });
    }
}

struct FieldVisitor<'a> {
    fields: &'a mut Vec<(String, String)>,
}

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields
            .push((field.name().to_string(), format!("{value:?}")));
    }
}
