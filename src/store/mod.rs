//! Document-store connector for the pet collection.
//!
//! Pets are stored as JSON documents, one file per pet, under
//! `<data>/pets/<id>.json`:
//!
//! ```json
//! {
//!   "_id": "65f2a8c91b3d4e0f7a6b5c4d",
//!   "name": "Rex",
//!   "breed": "Labrador"
//! }
//! ```
//!
//! [`PetCollection`] translates logical operations (find by id/name/breed,
//! insert, update, delete) into reads and writes against that collection.
//! "Not found" is a sentinel `Ok(None)`, never an error; the GraphQL layer
//! decides whether an absent document is a domain error.

mod collection;

pub use collection::PetCollection;
