// Copyright 2025 skein contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The [`EventDispatcher`] registry: a type-keyed table of delivery entries.

use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Weak};

use crate::event::Event;
use crate::handler::EventHandler;

/// Outcome of invoking one delivery entry against a published event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeliveryStatus {
    /// The handler ran.
    Delivered,
    /// A weakly-held subscriber was already dropped; entry skipped.
    StaleSubscriber,
    /// The entry's narrowing check failed. Unreachable through the public
    /// API, which ties the table key and the closure to the same type.
    TypeMismatch,
}

/// One registered (event variant, subscriber) binding.
struct DeliveryEntry {
    /// Handler type name, kept for diagnostics only.
    handler_name: &'static str,
    deliver: Box<dyn Fn(&dyn Event) -> DeliveryStatus + Send + Sync>,
}

/// A registry routing published events to the subscribers registered for
/// their concrete type.
///
/// The table maps an event variant's [`TypeId`] to an ordered list of
/// delivery entries; insertion order is registration order is invocation
/// order. Publishing a variant nobody registered for is a silent no-op.
///
/// Registration takes `&mut self` and publishing takes `&self`, so the
/// intended build-once/many-readers usage is enforced by the borrow checker:
/// wire everything up, then share the dispatcher read-only (it is
/// `Send + Sync` once built).
///
/// Subscribers are held by [`Arc`], so the dispatcher can outlive the scope
/// that assembled it without dangling. Use
/// [`subscribe_weak`](Self::subscribe_weak) when the subscriber's owner must
/// keep the only strong handle.
#[derive(Default)]
pub struct EventDispatcher {
    entries: HashMap<TypeId, Vec<DeliveryEntry>>,
}

impl EventDispatcher {
    /// Creates an empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers `handler` for events of variant `E`.
    ///
    /// Appends a delivery entry under `E`'s type key. There is no
    /// deduplication: registering the same subscriber twice for the same
    /// variant invokes it twice per matching publish. A subscriber with
    /// capabilities for several variants is registered once per variant.
    pub fn subscribe<E, H>(&mut self, handler: Arc<H>)
    where
        E: Event,
        H: EventHandler<E> + Send + Sync + 'static,
    {
        self.push_entry::<E>(DeliveryEntry {
            handler_name: type_name::<H>(),
            deliver: Box::new(move |event: &dyn Event| match event.as_any().downcast_ref::<E>() {
                Some(event) => {
                    handler.handle(event);
                    DeliveryStatus::Delivered
                }
                None => DeliveryStatus::TypeMismatch,
            }),
        });
    }

    /// Registers a weakly-held `handler` for events of variant `E`.
    ///
    /// The entry does not keep the subscriber alive. If the subscriber has
    /// been dropped by the time a matching event is published, the entry is
    /// skipped and a warning is logged; remaining entries still run.
    pub fn subscribe_weak<E, H>(&mut self, handler: Weak<H>)
    where
        E: Event,
        H: EventHandler<E> + Send + Sync + 'static,
    {
        self.push_entry::<E>(DeliveryEntry {
            handler_name: type_name::<H>(),
            deliver: Box::new(move |event: &dyn Event| {
                let Some(handler) = handler.upgrade() else {
                    return DeliveryStatus::StaleSubscriber;
                };
                match event.as_any().downcast_ref::<E>() {
                    Some(event) => {
                        handler.handle(event);
                        DeliveryStatus::Delivered
                    }
                    None => DeliveryStatus::TypeMismatch,
                }
            }),
        });
    }

    /// Routes `event` to every entry registered for its concrete type, in
    /// registration order, synchronously.
    ///
    /// The variant is derived once from the event's runtime type; a variant
    /// with no registered entries returns immediately with no side effects.
    /// Nothing is reported back to the publisher.
    pub fn publish(&self, event: &dyn Event) {
        let Some(entries) = self.entries.get(&event.as_any().type_id()) else {
            log::trace!("Published event has no subscribers; skipping.");
            return;
        };

        for entry in entries {
            match (entry.deliver)(event) {
                DeliveryStatus::Delivered => {}
                DeliveryStatus::StaleSubscriber => {
                    log::warn!(
                        "Skipped stale subscriber {}: dropped before publish.",
                        entry.handler_name
                    );
                }
                DeliveryStatus::TypeMismatch => {
                    debug_assert!(
                        false,
                        "delivery entry for {} keyed under the wrong event type",
                        entry.handler_name
                    );
                    log::error!(
                        "Delivery entry for {} failed its narrowing check; skipping.",
                        entry.handler_name
                    );
                }
            }
        }
    }

    /// Returns how many delivery entries are registered for variant `E`.
    #[must_use]
    pub fn subscriber_count<E: Event>(&self) -> usize {
        self.entries
            .get(&TypeId::of::<E>())
            .map_or(0, |entries| entries.len())
    }

    /// Returns the number of distinct event variants with at least one
    /// registered entry.
    #[must_use]
    pub fn event_type_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push_entry<E: Event>(&mut self, entry: DeliveryEntry) {
        log::debug!(
            "Registered {} for events of type {}.",
            entry.handler_name,
            type_name::<E>()
        );
        self.entries.entry(TypeId::of::<E>()).or_default().push(entry);
    }
}
