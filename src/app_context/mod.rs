use crate::cli::Args;
use crate::positions::seed;
use crate::storage::interface::{IPositionStorage, PositionRepo};
use crate::storage::positions::HashMapPositionsStorage;

#[derive(Clone, Default)]
pub struct AppContext<PS: IPositionStorage> {
    pub positions: PS,
}

/// Builds the shared application state and fills the position store from the
/// seed file.
pub async fn init(args: &Args) -> AppContext<HashMapPositionsStorage> {
    let app_context = AppContext {
        positions: HashMapPositionsStorage::default(),
    };
    let seeded = seed::load(&args.seed_file).expect("Failed to load the positions seed file.");
    let seeded_count = seeded.len();
    for position in seeded {
        app_context.positions.create(position).await;
    }
    tracing::info!(seeded_count, "Seeded the position store.");
    app_context
}
