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

//! # Skein Events
//!
//! A typed, in-process event dispatch registry.
//!
//! Independently-defined event types are published to a dynamic set of
//! subscribers, each subscriber handling only the event types it declares a
//! capability for. Routing is resolved by runtime type identity ([`TypeId`])
//! rather than by name or hand-written dispatch code.
//!
//! The three pieces:
//! - [`Event`] — marker for publishable event types; each concrete event is
//!   a disjoint struct identified at runtime by its `TypeId`.
//! - [`EventHandler<E>`] — the capability declaration: "this subscriber can
//!   process events of variant `E`". A subscriber implements it once per
//!   variant it supports.
//! - [`EventDispatcher`] — the registry mapping each event type to an
//!   ordered list of delivery entries, invoked synchronously and in
//!   registration order on every matching publish.
//!
//! Dispatch is build-once, many-readers: registration takes `&mut self`,
//! publishing takes `&self`, so a fully wired dispatcher can be shared
//! read-only across threads.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use skein_events::{Event, EventDispatcher, EventHandler};
//!
//! struct PlayerMoved { uid: u64 }
//! impl Event for PlayerMoved {
//!     fn as_any(&self) -> &dyn std::any::Any { self }
//! }
//!
//! #[derive(Default)]
//! struct MoveCounter(AtomicU32);
//! impl EventHandler<PlayerMoved> for MoveCounter {
//!     fn handle(&self, _event: &PlayerMoved) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!     }
//! }
//!
//! let counter = Arc::new(MoveCounter::default());
//! let mut dispatcher = EventDispatcher::new();
//! dispatcher.subscribe::<PlayerMoved, _>(counter.clone());
//!
//! dispatcher.publish(&PlayerMoved { uid: 7 });
//! assert_eq!(counter.0.load(Ordering::Relaxed), 1);
//! ```
//!
//! [`TypeId`]: std::any::TypeId

#![warn(missing_docs)]

mod dispatcher;
mod event;
mod handler;

pub use dispatcher::EventDispatcher;
pub use event::Event;
pub use handler::EventHandler;
