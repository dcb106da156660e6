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

//! The [`Event`] marker trait shared by all publishable event types.

use std::any::Any;

/// Marker for a publishable event type.
///
/// Each concrete event is a disjoint value type; events share no structure
/// beyond this trait. The dispatcher identifies an event's variant at publish
/// time from its runtime [`TypeId`](std::any::TypeId), so publishers only
/// need an abstract `&dyn Event`.
///
/// Event values are borrowed for the duration of a single
/// [`publish`](crate::EventDispatcher::publish) call; the dispatcher never
/// retains them.
///
/// Implementations are one line:
/// ```rust
/// use skein_events::Event;
///
/// struct EnemySpawned { uid: u64 }
/// impl Event for EnemySpawned {
///     fn as_any(&self) -> &dyn std::any::Any { self }
/// }
/// ```
pub trait Event: Any + Send + Sync {
    /// Upcasts to [`Any`] so delivery entries can narrow back to the
    /// concrete event type.
    fn as_any(&self) -> &dyn Any;
}
