use std::sync::{Arc, Mutex};

use pokerhand_engine::hand::Hand;
use pokerhand_engine::showdown::resolve_winners;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<Vec<(String, String)>>>>);

struct Fields(Vec<(String, String)>);

impl Visit for Fields {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{:?}", value)));
    }
}

impl<S: tracing::Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields(Vec::new());
        event.record(&mut fields);
        self.0.lock().unwrap().push(fields.0);
    }
}

#[test]
fn showdown_emits_winner_summary() {
    let captured = Captured::default();
    let subscriber = Registry::default().with(captured.clone());

    let a: Hand = "AH AD 5S 5C 3D".parse().unwrap();
    let b: Hand = "AS AC 5H 5D 3C".parse().unwrap();
    tracing::subscriber::with_default(subscriber, || {
        resolve_winners([("a", &a), ("b", &b)]).unwrap();
    });

    let events = captured.0.lock().unwrap();
    let summary = events
        .iter()
        .find(|fields| fields.iter().any(|(k, v)| k == "message" && v.contains("showdown resolved")))
        .expect("showdown event");
    assert!(summary.iter().any(|(k, v)| k == "winners" && v == "2"));
    assert!(summary.iter().any(|(k, v)| k == "split" && v == "true"));
}
