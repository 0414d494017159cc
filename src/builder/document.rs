//! JSON definition documents.
//!
//! A document carries the static part of a definition: state names, initial
//! active flags and the event table. Callbacks are attached afterwards
//! through [`StateMachineBuilder`](super::StateMachineBuilder).
//!
//! ```json
//! {
//!   "states": { "idle": { "active": true }, "brewing": {}, "done": {} },
//!   "events": {
//!     "start":  { "from": "idle", "to": "brewing" },
//!     "finish": { "from": "brewing", "to": "done" },
//!     "reset":  { "from": "any", "to": "idle" }
//!   }
//! }
//! ```

use crate::core::EventSpec;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;

#[derive(Debug, Deserialize)]
pub(crate) struct DefinitionDocument {
    pub(crate) states: StatesDocument,
    #[serde(default)]
    pub(crate) events: OrderedMap<EventSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum StatesDocument {
    List(Vec<String>),
    Map(OrderedMap<StateDocument>),
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StateDocument {
    #[serde(default)]
    pub(crate) active: bool,
}

/// JSON object decoded with its key order intact.
#[derive(Debug)]
pub(crate) struct OrderedMap<V>(pub(crate) Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map keyed by name")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Source;

    #[test]
    fn list_document_parses() {
        let doc: DefinitionDocument =
            serde_json::from_str(r#"{"states": ["idle", "brewing"]}"#).unwrap();

        match doc.states {
            StatesDocument::List(names) => assert_eq!(names, vec!["idle", "brewing"]),
            StatesDocument::Map(_) => panic!("Expected list form"),
        }
        assert!(doc.events.0.is_empty());
    }

    #[test]
    fn map_document_preserves_key_order() {
        let doc: DefinitionDocument = serde_json::from_str(
            r#"{"states": {"zeta": {}, "alpha": {"active": true}, "mid": {}}}"#,
        )
        .unwrap();

        let StatesDocument::Map(states) = doc.states else {
            panic!("Expected map form");
        };
        let names: Vec<_> = states.0.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert!(states.0[1].1.active);
        assert!(!states.0[0].1.active);
    }

    #[test]
    fn events_parse_every_source_form() {
        let doc: DefinitionDocument = serde_json::from_str(
            r#"{
                "states": ["idle", "brewing", "done"],
                "events": {
                    "start": {"from": "idle", "to": "brewing"},
                    "refill": {"from": ["idle", "done"], "to": "brewing"},
                    "reset": {"from": "any", "to": "idle"}
                }
            }"#,
        )
        .unwrap();

        let events = doc.events.0;
        assert_eq!(events[0].0, "start");
        assert_eq!(events[0].1.from, Source::state("idle"));
        assert_eq!(events[1].1.from, Source::any_of(["idle", "done"]));
        assert_eq!(events[2].1.from, Source::Any);
    }

    #[test]
    fn malformed_document_is_rejected() {
        let result = serde_json::from_str::<DefinitionDocument>(r#"{"states": 42}"#);
        assert!(result.is_err());
    }
}
