//! Data model for the pet store.
//!
//! A single entity: [`Pet`], persisted as one JSON document per pet.

mod pet;

pub use pet::Pet;
