use models::{Id, Owner};
use serde::Serialize;

use super::crud::CrudService;

pub trait OwnerService: CrudService<Owner, Id> {
    /// Owner whose last name equals `last_name` exactly (case-sensitive).
    fn find_by_last_name(&self, last_name: &str) -> Option<Owner>;

    /// Owners whose last name contains `fragment`, ignoring case.
    /// An empty fragment matches everybody.
    fn find_all_by_last_name_like(&self, fragment: &str) -> Vec<Owner>;
}

/// Outcome of an owner lookup by (partial) last name.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "result", content = "owners", rename_all = "snake_case")]
pub enum OwnerSearch {
    NotFound,
    Single(Owner),
    Many(Vec<Owner>),
}

impl OwnerSearch {
    pub fn len(&self) -> usize {
        match self {
            OwnerSearch::NotFound => 0,
            OwnerSearch::Single(_) => 1,
            OwnerSearch::Many(owners) => owners.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Find owners by last-name fragment. A missing or blank fragment lists all owners.
pub fn search_owners<S: OwnerService + ?Sized>(owners: &S, last_name: Option<&str>) -> OwnerSearch {
    let fragment = last_name.map(str::trim).unwrap_or_default();
    let mut found = owners.find_all_by_last_name_like(fragment);
    match found.len() {
        0 => OwnerSearch::NotFound,
        1 => OwnerSearch::Single(found.remove(0)),
        _ => {
            found.sort_by_key(|o| o.id);
            OwnerSearch::Many(found)
        }
    }
}
