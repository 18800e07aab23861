use crate::positions::models::Position;
use uuid::Uuid;

pub trait IPositionStorage: PositionRepo {}

/// Keyed store of named positions. Any keyed store works behind this trait;
/// the in-memory implementation lives in [`crate::storage::positions`].
pub trait PositionRepo {
    async fn create(&self, position: Position);

    async fn get(&self, id: Uuid) -> Option<Position>;

    /// A uniformly random stored position, or `None` if the store is empty.
    async fn random(&self) -> Option<Position>;

    async fn all(&self) -> Vec<Position>;

    /// Replaces the mutable fields of the position with the given id and
    /// returns the updated record, or `None` if no such position exists.
    async fn update(&self, id: Uuid, position: Position) -> Option<Position>;

    /// Returns whether a position with the given id existed and was removed.
    async fn delete(&self, id: Uuid) -> bool;
}
