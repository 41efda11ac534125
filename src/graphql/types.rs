use async_graphql::{ID, SimpleObject};

use crate::model::Pet as ModelPet;

/// The externally visible pet shape. The store document's `_id` is
/// rendered as the `id` field; `name` and `breed` are copied verbatim.
#[derive(SimpleObject)]
pub struct Pet {
    pub id: ID,
    pub name: String,
    pub breed: String,
}

impl From<ModelPet> for Pet {
    fn from(p: ModelPet) -> Self {
        Self {
            id: ID(p.id),
            name: p.name,
            breed: p.breed,
        }
    }
}
