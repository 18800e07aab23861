use crate::positions::models::Position;
use crate::storage::interface::{IPositionStorage, PositionRepo};
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct HashMapPositionsStorage {
    storage: Arc<RwLock<HashMap<Uuid, Position>>>,
}

impl IPositionStorage for HashMapPositionsStorage {}

impl PositionRepo for HashMapPositionsStorage {
    async fn create(&self, position: Position) {
        self.storage.write().await.insert(position.id, position);
    }

    async fn get(&self, id: Uuid) -> Option<Position> {
        self.storage.read().await.get(&id).cloned()
    }

    async fn random(&self) -> Option<Position> {
        let storage = self.storage.read().await;
        if storage.is_empty() {
            return None;
        }
        let index = rand::thread_rng().gen_range(0..storage.len());
        storage.values().nth(index).cloned()
    }

    async fn all(&self) -> Vec<Position> {
        self.storage.read().await.values().cloned().collect()
    }

    async fn update(&self, id: Uuid, position: Position) -> Option<Position> {
        let mut storage = self.storage.write().await;
        let entry = storage.get_mut(&id)?;
        entry.name = position.name;
        entry.coordinates = position.coordinates;
        entry.address = position.address;
        Some(entry.clone())
    }

    async fn delete(&self, id: Uuid) -> bool {
        self.storage.write().await.remove(&id).is_some()
    }
}
