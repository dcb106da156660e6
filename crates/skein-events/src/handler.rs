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

//! The [`EventHandler`] capability trait relating a subscriber to one event
//! variant it can process.

use crate::event::Event;

/// Declares that a subscriber can process events of variant `E`.
///
/// A subscriber supporting several variants implements this trait once per
/// variant; the implementations are independent and may be invoked in any
/// order by separate publish calls. `handle` takes `&self`: a subscriber
/// that needs mutable state provides its own interior mutability.
///
/// `handle` is infallible by contract. Whatever a subscriber does about its
/// own internal failures is its concern; nothing propagates back through the
/// dispatcher to the publisher.
///
/// This trait carries no registry awareness. Wiring a subscriber into an
/// [`EventDispatcher`](crate::EventDispatcher) is the assembler's job, one
/// [`subscribe`](crate::EventDispatcher::subscribe) call per declared
/// capability.
pub trait EventHandler<E: Event> {
    /// Processes one event of variant `E`.
    fn handle(&self, event: &E);
}
