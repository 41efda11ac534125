use serde::{Deserialize, Serialize};

/// A pet document as persisted in the store.
///
/// The identifier is serialized as `_id` to match the document layout on
/// disk; the GraphQL layer renders it as the external `id` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    pub breed: String,
}

impl Pet {
    pub fn new(id: String, name: String, breed: String) -> Self {
        Self { id, name, breed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_id_as_underscore_id() {
        let pet = Pet::new("abc123".to_string(), "Rex".to_string(), "Labrador".to_string());
        let json = serde_json::to_value(&pet).unwrap();

        assert_eq!(json["_id"], "abc123");
        assert_eq!(json["name"], "Rex");
        assert_eq!(json["breed"], "Labrador");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_deserializes_document_fields() {
        let json = r#"{"_id": "d00d", "name": "Mia", "breed": "Siamese"}"#;
        let pet: Pet = serde_json::from_str(json).unwrap();

        assert_eq!(pet.id, "d00d");
        assert_eq!(pet.name, "Mia");
        assert_eq!(pet.breed, "Siamese");
    }
}
