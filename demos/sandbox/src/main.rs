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

// Skein sandbox
// Wires a handful of game-event listeners into a dispatcher and publishes
// sample events. Set RUST_LOG=debug to watch the registrations go in.

use std::any::Any;
use std::sync::Arc;

use anyhow::Result;
use skein_events::{Event, EventDispatcher, EventHandler};

struct PlayerMoved {
    uid: u64,
    x: f32,
    y: f32,
}
impl Event for PlayerMoved {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct EnemySpawned {
    enemy_type: String,
    uid: u64,
    x: f32,
    y: f32,
}
impl Event for EnemySpawned {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Reacts to player movement only.
struct MovementListener;
impl EventHandler<PlayerMoved> for MovementListener {
    fn handle(&self, event: &PlayerMoved) {
        println!(
            "MovementListener: uid {} moved to ({}, {})",
            event.uid, event.x, event.y
        );
    }
}

/// Reacts to enemy spawns only.
struct SpawnListener;
impl EventHandler<EnemySpawned> for SpawnListener {
    fn handle(&self, event: &EnemySpawned) {
        println!(
            "SpawnListener: {} (uid {}) spawned at ({}, {})",
            event.enemy_type, event.uid, event.x, event.y
        );
    }
}

/// Holds capabilities for both variants.
struct PlayerListener;
impl EventHandler<PlayerMoved> for PlayerListener {
    fn handle(&self, event: &PlayerMoved) {
        println!(
            "PlayerListener: uid {} moved to ({}, {})",
            event.uid, event.x, event.y
        );
    }
}
impl EventHandler<EnemySpawned> for PlayerListener {
    fn handle(&self, event: &EnemySpawned) {
        println!(
            "PlayerListener: {} (uid {}) spawned at ({}, {})",
            event.enemy_type, event.uid, event.x, event.y
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let movement = Arc::new(MovementListener);
    let spawn = Arc::new(SpawnListener);
    let player = Arc::new(PlayerListener);

    // Assembly: one subscribe call per declared capability, then the table
    // is read-only for the rest of the process.
    let mut dispatcher = EventDispatcher::new();
    dispatcher.subscribe::<PlayerMoved, _>(movement);
    dispatcher.subscribe::<EnemySpawned, _>(spawn);
    dispatcher.subscribe::<PlayerMoved, _>(player.clone());
    dispatcher.subscribe::<EnemySpawned, _>(player);
    log::info!(
        "Dispatcher assembled: {} event types registered.",
        dispatcher.event_type_count()
    );

    dispatcher.publish(&PlayerMoved {
        uid: 10001,
        x: 10.0,
        y: 20.0,
    });
    dispatcher.publish(&EnemySpawned {
        enemy_type: "Goblin".to_string(),
        uid: 10001,
        x: 15.0,
        y: 25.0,
    });

    Ok(())
}
