use serde::{Deserialize, Serialize};

use super::{Record, RecordId};

/// Land category lookup entry (dropdown reference data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandCategory {
    pub id: RecordId,
    #[serde(alias = "category_name")]
    pub name: String,
}

impl Record for LandCategory {
    fn id(&self) -> RecordId {
        self.id
    }
}
