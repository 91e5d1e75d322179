//! Shared test utilities used across spanwise crates.

pub mod ci;
pub mod graphs;

pub mod tracing {
    //! A layer that records spans and events so tests can assert on
    //! instrumentation.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Recording layer for tests. Clones share one journal, so keep a clone
    /// and install the other on a registry.
    ///
    /// # Examples
    /// ```
    /// use spanwise_test_support::tracing::RecordingLayer;
    /// use tracing_subscriber::layer::SubscriberExt;
    ///
    /// let layer = RecordingLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(layer.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     let _span = tracing::info_span!("demo", size = 3).entered();
    /// });
    /// let span = layer.span("demo").expect("span recorded");
    /// assert_eq!(span.fields.get("size"), Some(&"3".to_owned()));
    /// ```
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        journal: Arc<Mutex<Journal>>,
    }

    #[derive(Default)]
    struct Journal {
        spans: Vec<SpanRecord>,
        events: Vec<EventRecord>,
    }

    impl RecordingLayer {
        fn journal(&self) -> MutexGuard<'_, Journal> {
            self.journal.lock().unwrap_or_else(PoisonError::into_inner)
        }

        /// Closed spans in completion order.
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.journal().spans.clone()
        }

        /// Events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.journal().events.clone()
        }

        /// The first closed span called `name`, if any.
        #[must_use]
        pub fn span(&self, name: &str) -> Option<SpanRecord> {
            self.journal()
                .spans
                .iter()
                .find(|span| span.name == name)
                .cloned()
        }

        /// Events whose `message` field equals `message`.
        #[must_use]
        pub fn events_with_message(&self, message: &str) -> Vec<EventRecord> {
            self.journal()
                .events
                .iter()
                .filter(|event| event.message() == Some(message))
                .cloned()
                .collect()
        }
    }

    /// A closed span with the fields recorded against it.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the tracing metadata.
        pub name: String,
        /// Field values rendered as strings.
        pub fields: HashMap<String, String>,
    }

    /// An emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        /// Event target, usually the emitting module path.
        pub target: String,
        /// Field values rendered as strings, including `message`.
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// The event's formatted message, if it carried one.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.fields.get("message").map(String::as_str)
        }
    }

    struct OpenSpan(SpanRecord);

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut record = SpanRecord {
                name: attrs.metadata().name().to_owned(),
                fields: HashMap::new(),
            };
            attrs.record(&mut FieldRecorder(&mut record.fields));
            span.extensions_mut().insert(OpenSpan(record));
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(OpenSpan(record)) = span.extensions_mut().get_mut::<OpenSpan>() {
                values.record(&mut FieldRecorder(&mut record.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            if let Some(OpenSpan(record)) = span.extensions_mut().remove::<OpenSpan>() {
                self.journal().spans.push(record);
            }
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldRecorder(&mut fields));
            let metadata = event.metadata();
            self.journal().events.push(EventRecord {
                level: *metadata.level(),
                target: metadata.target().to_owned(),
                fields,
            });
        }
    }

    struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

    impl FieldRecorder<'_> {
        fn put(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.put(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.put(field, value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.put(field, value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.put(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.put(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.put(field, value.to_string());
        }
    }
}
