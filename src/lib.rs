//! # Petstore - a small GraphQL pet store
//!
//! Petstore persists pets as JSON documents in a flat-file collection and
//! exposes them through a GraphQL API. The whole service is a thin
//! resolver/mapping layer: the schema declares `Pet`, `Query`, and
//! `Mutation`, and each resolver translates one operation into document
//! reads and writes.
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a store in the current directory
//! petstore init
//!
//! # Create a pet
//! petstore mutate 'addPet(id: "ignored", name: "Rex", breed: "Labrador") { id }'
//!
//! # List all pets
//! petstore query '{ pets { id name breed } }'
//!
//! # Serve the API over HTTP
//! petstore serve --port 4000
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP server
//! - [`model`]: The persisted `Pet` document
//! - [`store`]: Document-collection connector
//! - [`validation`]: Input validation utilities

pub mod cli;

/// Configuration loading and management.
///
/// Handles `petstore.toml` discovery and store settings.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `PetStoreError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and HTTP server.
pub mod graphql;

pub mod logging;

/// Data model for persisted pet documents.
pub mod model;

/// Document-store connector.
///
/// Translates find/insert/update/delete operations into reads and writes
/// against the pet collection.
pub mod store;

/// Input validation utilities.
///
/// Validates names, breeds, and ids before they reach the store.
pub mod validation;
