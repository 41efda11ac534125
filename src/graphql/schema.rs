use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Schema};

use crate::error::PetStoreError;
use crate::store::PetCollection;

use super::types::Pet;

pub type PetSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with an explicitly constructed connector injected as
/// context data. The connector's lifecycle belongs to the hosting process,
/// never to ambient global state.
pub fn build_schema(collection: PetCollection) -> PetSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(collection)
        .finish()
}

fn get_collection<'a>(ctx: &Context<'a>) -> &'a PetCollection {
    ctx.data_unchecked::<PetCollection>()
}

fn not_found(what: &str) -> async_graphql::Error {
    PetStoreError::NotFound(what.to_string()).extend()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All pets in the store
    async fn pets(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Pet>> {
        let pets = get_collection(ctx).list().await.map_err(|e| e.extend())?;
        Ok(pets.into_iter().map(Into::into).collect())
    }

    /// Get a single pet by ID
    async fn pet(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Pet> {
        match get_collection(ctx)
            .find_by_id(&id)
            .await
            .map_err(|e| e.extend())?
        {
            Some(pet) => Ok(pet.into()),
            None => Err(not_found(&format!("no pet with id {}", *id))),
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new pet. The `id` argument is accepted for wire
    /// compatibility and ignored; the store generates its own identifier.
    async fn add_pet(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "id")] _id: ID,
        name: String,
        breed: String,
    ) -> async_graphql::Result<Pet> {
        let collection = get_collection(ctx);

        // Uniqueness pre-check. This and the insert are separate store
        // calls: two concurrent addPet calls with the same name can both
        // pass the check.
        if collection
            .find_by_name(&name)
            .await
            .map_err(|e| e.extend())?
            .is_some()
        {
            return Err(
                PetStoreError::Conflict(format!("a pet named '{}' already exists", name)).extend(),
            );
        }

        let pet = collection
            .insert(&name, &breed)
            .await
            .map_err(|e| e.extend())?;
        Ok(pet.into())
    }

    /// Update a pet's name and breed
    async fn update_pet(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        breed: String,
    ) -> async_graphql::Result<Pet> {
        match get_collection(ctx)
            .update_by_id(&id, &name, &breed)
            .await
            .map_err(|e| e.extend())?
        {
            Some(pet) => Ok(pet.into()),
            None => Err(not_found(&format!("no pet with id {}", *id))),
        }
    }

    /// Delete a pet, returning its last state
    async fn delete_pet(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Pet> {
        match get_collection(ctx)
            .delete_by_id(&id)
            .await
            .map_err(|e| e.extend())?
        {
            Some(pet) => Ok(pet.into()),
            None => Err(not_found(&format!("no pet with id {}", *id))),
        }
    }

    /// The first pet whose breed matches. Singular by contract: with
    /// several pets of the same breed, which one is returned is
    /// unspecified.
    async fn filter_pet(&self, ctx: &Context<'_>, breed: String) -> async_graphql::Result<Pet> {
        match get_collection(ctx)
            .find_by_breed(&breed)
            .await
            .map_err(|e| e.extend())?
        {
            Some(pet) => Ok(pet.into()),
            None => Err(not_found(&format!("no pet with breed {}", breed))),
        }
    }
}
