//! Location models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A monitoring site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id_local: i32,
    pub nome: String,
    /// State or province
    pub estado: Option<String>,
    pub pais: String,
}

/// Body of a location create or replace request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LocationInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub nome: String,
    #[serde(default)]
    pub estado: Option<String>,
    #[validate(length(min = 1, message = "Country is required"))]
    pub pais: String,
}

impl LocationInput {
    /// Attach a server-assigned identifier to the submitted fields
    pub fn into_location(self, id_local: i32) -> Location {
        Location {
            id_local,
            nome: self.nome,
            estado: self.estado,
            pais: self.pais,
        }
    }
}

impl From<Location> for LocationInput {
    fn from(location: Location) -> Self {
        Self {
            nome: location.nome,
            estado: location.estado,
            pais: location.pais,
        }
    }
}
