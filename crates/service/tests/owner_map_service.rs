use models::{Owner, Pet, PetType};
use service::map::{OwnerMapService, PetMapService, PetTypeMapService};
use service::services::{search_owners, CrudService, OwnerSearch, OwnerService};

const OWNER_ID_1: u64 = 1;
const OWNER_LAST_NAME_1: &str = "Smith";
const OWNER_ID_2: u64 = 2;
const OWNER_LAST_NAME_2: &str = "Smooth";

fn setup() -> OwnerMapService {
    let mut owners = OwnerMapService::new(PetTypeMapService::new(), PetMapService::new());
    owners.save(Owner::default().with_id(OWNER_ID_1).with_last_name(OWNER_LAST_NAME_1));
    owners
}

#[test]
fn find_all() {
    let owners = setup();
    assert_eq!(owners.find_all().len(), 1);
}

#[test]
fn find_by_id() {
    let owners = setup();
    let owner = owners.find_by_id(OWNER_ID_1).expect("owner 1");
    assert_eq!(owner.id, Some(OWNER_ID_1));
}

#[test]
fn find_by_unknown_id_is_none() {
    let owners = setup();
    assert_eq!(owners.find_by_id(999), None);
}

#[test]
fn save_existing_id() {
    let mut owners = setup();
    let saved = owners.save(Owner::default().with_id(OWNER_ID_2));
    assert_eq!(saved.id, Some(OWNER_ID_2));
    assert_eq!(owners.find_all().len(), 2);
}

#[test]
fn save_no_id() {
    let mut owners = setup();
    let saved = owners.save(Owner::default());
    let id = saved.id.expect("generated id");
    assert_ne!(id, OWNER_ID_1);
    assert_eq!(owners.find_by_id(id), Some(saved));
}

#[test]
fn save_replaces_under_same_id() {
    let mut owners = setup();
    owners.save(Owner::new("Will", "Smith").with_id(OWNER_ID_1).with_telephone("555"));
    let found = owners.find_by_id(OWNER_ID_1).unwrap();
    assert_eq!(found.first_name, "Will");
    assert_eq!(found.telephone, "555");
    assert_eq!(owners.find_all().len(), 1);
}

#[test]
fn delete() {
    let mut owners = setup();
    let owner = owners.find_by_id(OWNER_ID_1).unwrap();
    owners.delete(&owner);
    assert_eq!(owners.find_all().len(), 0);
}

#[test]
fn delete_by_id() {
    let mut owners = setup();
    owners.delete_by_id(OWNER_ID_1);
    assert_eq!(owners.find_all().len(), 0);
    assert_eq!(owners.find_by_id(OWNER_ID_1), None);
}

#[test]
fn delete_matches_by_value_not_identity() {
    let mut owners = setup();
    let copy = Owner::default().with_id(OWNER_ID_1).with_last_name(OWNER_LAST_NAME_1);
    owners.delete(&copy);
    assert!(owners.find_all().is_empty());
}

#[test]
fn find_by_last_name() {
    let owners = setup();
    let smith = owners.find_by_last_name(OWNER_LAST_NAME_1).expect("smith");
    assert_eq!(smith.id, Some(OWNER_ID_1));
}

#[test]
fn find_by_last_name_not_found() {
    let owners = setup();
    assert_eq!(owners.find_by_last_name("foo"), None);
}

#[test]
fn find_by_last_name_like_in_middle_of_name() {
    let owners = setup();
    let found = owners.find_all_by_last_name_like("th");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, Some(OWNER_ID_1));
    assert_eq!(found[0].last_name, OWNER_LAST_NAME_1);
}

#[test]
fn find_by_last_name_like_case_insensitive() {
    let owners = setup();
    for fragment in ["smi", "SMI"] {
        let found = owners.find_all_by_last_name_like(fragment);
        assert_eq!(found.len(), 1, "fragment {fragment}");
        assert_eq!(found[0].id, Some(OWNER_ID_1));
    }
}

#[test]
fn find_by_last_name_like_returns_one() {
    let mut owners = setup();
    owners.save(Owner::default().with_id(OWNER_ID_2).with_last_name("smooth"));
    let found = owners.find_all_by_last_name_like("Smi");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, Some(OWNER_ID_1));
}

#[test]
fn find_by_last_name_like_returns_many() {
    let mut owners = setup();
    owners.save(Owner::default().with_id(OWNER_ID_2).with_last_name(OWNER_LAST_NAME_2));
    assert_eq!(owners.find_all_by_last_name_like("Sm").len(), 2);
}

#[test]
fn find_by_last_name_like_on_empty_store() {
    let owners: OwnerMapService = OwnerMapService::default();
    assert!(owners.find_all_by_last_name_like("").is_empty());
}

#[test]
fn search_outcomes_follow_match_count() {
    let mut owners = setup();
    assert!(matches!(search_owners(&owners, Some("zzz")), OwnerSearch::NotFound));
    assert!(matches!(search_owners(&owners, Some("smi")), OwnerSearch::Single(o) if o.id == Some(OWNER_ID_1)));

    owners.save(Owner::default().with_id(OWNER_ID_2).with_last_name(OWNER_LAST_NAME_2));
    match search_owners(&owners, None) {
        OwnerSearch::Many(found) => {
            let ids: Vec<_> = found.iter().map(|o| o.id).collect();
            assert_eq!(ids, vec![Some(OWNER_ID_1), Some(OWNER_ID_2)]);
        }
        other => panic!("expected many owners, got {other:?}"),
    }
    assert_eq!(search_owners(&owners, Some("   ")).len(), 2);
}

#[test]
fn owner_pets_get_ids_from_pet_service() {
    let mut owners = setup();
    let mut owner = owners.find_by_id(OWNER_ID_1).unwrap();
    owner.add_pet(Pet::new("Rosco").with_pet_type(PetType::new("Dog")));
    let saved = owners.save(owner);

    let pet_id = saved.pets[0].id.expect("pet id");
    let stored = owners.pets().find_by_id(pet_id).expect("stored pet");
    assert_eq!(stored.owner_id, Some(OWNER_ID_1));
    assert_eq!(stored.name, "Rosco");
}
