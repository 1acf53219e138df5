//! `Item` entity: the root of the `Product` aggregate.

use serde::{Deserialize, Serialize};

use orderdesk_core::{Entity, EntityId};

/// A sellable thing, as named and described in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    pub description: String,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Entity for Item {
    type Id = EntityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
