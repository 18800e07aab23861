use crate::geodesy::models::Wgs84Coordinates;
use crate::positions::models::Position;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

/// A position record as it appears in the seed file. Ids are optional there;
/// records without one are assigned a fresh v4 uuid on load.
#[derive(Debug, Deserialize)]
struct SeedPosition {
    id: Option<Uuid>,
    name: String,
    coordinates: Wgs84Coordinates,
    address: String,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read the seed file {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse the seed file {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },
}

/// Reads the positions the store starts out with. A missing or unparsable
/// seed file is a startup error; an empty array is fine.
pub fn load(path: &Path) -> Result<Vec<Position>, SeedError> {
    let contents = fs::read_to_string(path).map_err(|source| SeedError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;
    let seeded: Vec<SeedPosition> =
        serde_json::from_str(&contents).map_err(|source| SeedError::Malformed {
            path: path.display().to_string(),
            source,
        })?;
    Ok(seeded
        .into_iter()
        .map(|position| Position {
            id: position.id.unwrap_or_else(Uuid::new_v4),
            name: position.name,
            coordinates: position.coordinates,
            address: position.address,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{load, SeedError};
    use std::path::Path;

    #[test]
    fn loads_the_bundled_seed_file() {
        let positions = load(Path::new("positions.seed.json")).unwrap();

        assert!(!positions.is_empty());
        for position in &positions {
            assert!(!position.name.is_empty());
        }
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        let error = load(Path::new("no/such/file.json")).unwrap_err();

        assert!(matches!(error, SeedError::Unreadable { .. }));
    }
}
