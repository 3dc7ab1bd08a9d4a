//! Span capture for tracing assertions.
//!
//! `SpanCaptureLayer` records every span's name and fields, including fields
//! filled in later through `Span::record`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::span::{Attributes, Id, Record};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Clone)]
pub struct CapturedSpan {
    pub name: &'static str,
    pub level: tracing::Level,
    pub fields: HashMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct SpanStore(Arc<Mutex<Vec<(Id, CapturedSpan)>>>);

impl SpanStore {
    pub fn spans(&self) -> Vec<CapturedSpan> {
        self.0.lock().unwrap().iter().map(|(_, s)| s.clone()).collect()
    }

    pub fn find_spans(&self, name: &str) -> Vec<CapturedSpan> {
        self.spans().into_iter().filter(|s| s.name == name).collect()
    }

    pub fn find_span(&self, name: &str) -> Option<CapturedSpan> {
        self.find_spans(name).into_iter().next()
    }
}

pub struct SpanCaptureLayer {
    store: SpanStore,
}

struct FieldVisitor<'a>(&'a mut HashMap<String, String>);

impl tracing::field::Visit for FieldVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

impl<S> Layer<S> for SpanCaptureLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        attrs.record(&mut FieldVisitor(&mut fields));
        let meta = attrs.metadata();
        let captured = CapturedSpan {
            name: meta.name(),
            level: *meta.level(),
            fields,
        };
        self.store.0.lock().unwrap().push((id.clone(), captured));
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, _ctx: Context<'_, S>) {
        let mut store = self.store.0.lock().unwrap();
        // Span ids are reused after close; the latest span with this id is live.
        if let Some((_, span)) = store.iter_mut().rev().find(|(sid, _)| sid == id) {
            values.record(&mut FieldVisitor(&mut span.fields));
        }
    }
}

/// Install a span-capturing subscriber for the current thread.
///
/// Hold the returned guard for the duration of the test.
pub fn init_test_tracing() -> (SpanStore, tracing::subscriber::DefaultGuard) {
    use tracing_subscriber::layer::SubscriberExt;

    let store = SpanStore::default();
    let layer = SpanCaptureLayer {
        store: store.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    let guard = tracing::subscriber::set_default(subscriber);
    (store, guard)
}
