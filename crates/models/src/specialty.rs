use serde::{Deserialize, Serialize};

use crate::base::Id;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    #[serde(default)]
    pub id: Option<Id>,
    pub description: String,
}

impl Specialty {
    pub fn new(description: impl Into<String>) -> Self {
        Self { id: None, description: description.into() }
    }
}

crate::impl_entity!(Specialty);
