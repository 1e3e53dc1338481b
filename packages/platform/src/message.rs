use sdk::cosmwasm_std::Event;

use crate::batch::{Batch, Emitter};

/// The messages to dispatch and the events to publish as an outcome of a contract call
#[must_use]
#[derive(Default)]
#[cfg_attr(
    any(debug_assertions, test, feature = "testing"),
    derive(Debug, PartialEq, Eq)
)]
pub struct Response {
    pub messages: Batch,
    pub events: Vec<Event>,
}

impl Response {
    pub fn messages_only(messages: Batch) -> Self {
        Self {
            messages,
            events: vec![],
        }
    }

    pub fn messages_with_events<E>(messages: Batch, events: E) -> Self
    where
        E: Into<Event>,
    {
        Self {
            messages,
            events: vec![events.into()],
        }
    }
}

impl From<Batch> for Response {
    fn from(messages: Batch) -> Self {
        Self::messages_only(messages)
    }
}

impl From<Emitter> for Response {
    fn from(emitter: Emitter) -> Self {
        Self::messages_with_events(Batch::default(), emitter)
    }
}
