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

//! Integration tests wiring a dispatcher the way an assembler would: build
//! the full table first, then treat it as read-only and publish.

use std::any::Any;
use std::sync::{Arc, Mutex};
use std::thread;

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
}
impl Event for EnemySpawned {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct EntityDespawned {
    uid: u64,
}
impl Event for EntityDespawned {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

type Journal = Arc<Mutex<Vec<String>>>;

struct MovementListener {
    journal: Journal,
}
impl EventHandler<PlayerMoved> for MovementListener {
    fn handle(&self, event: &PlayerMoved) {
        self.journal.lock().unwrap().push(format!(
            "movement: {} -> ({}, {})",
            event.uid, event.x, event.y
        ));
    }
}

struct PlayerListener {
    journal: Journal,
}
impl EventHandler<PlayerMoved> for PlayerListener {
    fn handle(&self, event: &PlayerMoved) {
        self.journal
            .lock()
            .unwrap()
            .push(format!("player: {} moved", event.uid));
    }
}
impl EventHandler<EnemySpawned> for PlayerListener {
    fn handle(&self, event: &EnemySpawned) {
        self.journal
            .lock()
            .unwrap()
            .push(format!("player: {} spawned", event.enemy_type));
    }
}

fn assemble(journal: &Journal) -> EventDispatcher {
    let movement = Arc::new(MovementListener {
        journal: journal.clone(),
    });
    let player = Arc::new(PlayerListener {
        journal: journal.clone(),
    });

    // One registration per (subscriber, capability) pair.
    let mut dispatcher = EventDispatcher::new();
    dispatcher.subscribe::<PlayerMoved, _>(movement);
    dispatcher.subscribe::<PlayerMoved, _>(player.clone());
    dispatcher.subscribe::<EnemySpawned, _>(player);
    dispatcher
}

#[test]
fn move_and_spawn_scenario() {
    let journal: Journal = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = assemble(&journal);

    dispatcher.publish(&PlayerMoved {
        uid: 10001,
        x: 10.0,
        y: 20.0,
    });
    assert_eq!(
        *journal.lock().unwrap(),
        vec![
            "movement: 10001 -> (10, 20)".to_string(),
            "player: 10001 moved".to_string(),
        ]
    );

    journal.lock().unwrap().clear();
    dispatcher.publish(&EnemySpawned {
        enemy_type: "Goblin".to_string(),
        uid: 10001,
    });
    assert_eq!(
        *journal.lock().unwrap(),
        vec!["player: Goblin spawned".to_string()]
    );
}

#[test]
fn unregistered_variant_is_silently_ignored() {
    let journal: Journal = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = assemble(&journal);

    dispatcher.publish(&EntityDespawned { uid: 10001 });
    assert!(journal.lock().unwrap().is_empty());
}

#[test]
fn built_dispatcher_is_shared_across_threads() {
    let journal: Journal = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = Arc::new(assemble(&journal));

    let handles: Vec<_> = (0..4)
        .map(|uid| {
            let dispatcher = dispatcher.clone();
            thread::spawn(move || {
                dispatcher.publish(&PlayerMoved {
                    uid,
                    x: 0.0,
                    y: 0.0,
                });
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("publisher thread panicked");
    }

    // Two entries per PlayerMoved publish, four publishes.
    assert_eq!(journal.lock().unwrap().len(), 8);
}
