//! GraphQL schema and resolvers for the pet store.
//!
//! Declares the `Pet`, `Query`, and `Mutation` types and implements each
//! operation as a thin resolver over the store connector.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! petstore serve --port 4000
//!
//! # Execute a query from CLI
//! petstore query '{ pets { id name breed } }'
//!
//! # Execute a mutation from CLI
//! petstore mutate 'addPet(id: "ignored", name: "Rex", breed: "Labrador") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `pets`, `pet(id)`
//! - **Mutations**: `addPet`, `updatePet`, `deletePet`, `filterPet`
//!
//! Domain errors carry a `code` extension: `NOT_FOUND` for absent pets,
//! `CONFLICT` for a duplicate name on `addPet`. Store-level failures
//! surface as plain GraphQL errors without a code.

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, PetSchema, QueryRoot, build_schema};
pub use server::run_server;
pub use types::Pet;

use async_graphql::ErrorExtensions;

use crate::error::PetStoreError;

impl ErrorExtensions for PetStoreError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| match self {
            PetStoreError::NotFound(_) => e.set("code", "NOT_FOUND"),
            PetStoreError::Conflict(_) => e.set("code", "CONFLICT"),
            PetStoreError::Validation(_) => e.set("code", "BAD_USER_INPUT"),
            _ => {}
        })
    }
}
