//! Movie entity model and its persisted document form.

use mongodb::bson::oid::ObjectId;
use movies_core::movie::{MovieChanges, NewMovie};
use serde::{Deserialize, Serialize};

/// Name of the collection holding movie documents.
pub const COLLECTION: &str = "movies";

/// A stored movie, as returned to API clients.
///
/// The identifier is the hex form of the document's ObjectId and keeps the
/// `_id` key on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    pub movie: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A document in the `movies` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub movie: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl MovieDocument {
    /// Build a document for `input` under a freshly minted id.
    pub fn new(input: &NewMovie) -> Self {
        Self {
            id: ObjectId::new(),
            movie: input.movie.clone(),
            description: input.description.clone(),
            image: input.image.clone(),
        }
    }

    /// Overwrite the fields carried by `changes`. The id is never touched.
    pub fn apply(&mut self, changes: &MovieChanges) {
        if let Some(movie) = &changes.movie {
            self.movie.clone_from(movie);
        }
        if let Some(description) = &changes.description {
            self.description.clone_from(description);
        }
        if let Some(image) = &changes.image {
            self.image.clone_from(image);
        }
    }
}

impl From<MovieDocument> for Movie {
    fn from(doc: MovieDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            movie: doc.movie,
            description: doc.description,
            image: doc.image,
        }
    }
}

/// Parse a caller-supplied id.
///
/// A string that is not a 24-digit hex ObjectId cannot name any stored
/// document, so it yields `None` and the lookup reports not-found.
pub fn parse_id(id: &str) -> Option<ObjectId> {
    match ObjectId::parse_str(id) {
        Ok(oid) => Some(oid),
        Err(_) => {
            tracing::debug!(movie_id = %id, "Malformed movie id");
            None
        }
    }
}
