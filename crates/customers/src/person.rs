//! `Person` entity: the root of the `Customer` aggregate.

use serde::{Deserialize, Serialize};

use orderdesk_core::{Entity, EntityId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: EntityId,
    pub name: String,
    pub age: u32,
}

impl Entity for Person {
    type Id = EntityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
