use serde::{Deserialize, Serialize};

use crate::domain::geo::Coordinates;

/// Static reference record; colleges are keyed by a stable slug such as `snist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct College {
    pub id: String,
    pub name: String,
    pub location: String,
    pub coordinates: Coordinates,
}
