use zapharvest_core::{ContactId, ContactStore, NewContact, NormalizedNumber};
use zapharvest_store::error::{StoreError, StoreErrorKind};
use zapharvest_store::Store;

const NOW: i64 = 1_700_000_000_000;

fn store() -> Store {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    store
}

fn number(raw: &str) -> NormalizedNumber {
    raw.parse().expect("number")
}

fn new_contact(raw: &str, email: Option<&str>) -> NewContact {
    NewContact::new("loja.com.br", number(raw), email.map(str::to_string), NOW)
}

#[test]
fn create_and_get_roundtrip() {
    let store = store();
    let created = store
        .contacts()
        .create(new_contact("5511912345678", Some("vendas@loja.com.br")))
        .expect("create");
    assert!(!created.sent);

    let fetched = store
        .contacts()
        .get(created.id)
        .expect("get")
        .expect("contact exists");
    assert_eq!(fetched, created);
    assert_eq!(fetched.email.as_deref(), Some("vendas@loja.com.br"));
    assert_eq!(fetched.timestamp, NOW);
}

#[test]
fn ids_increase_in_insertion_order() {
    let store = store();
    let first = store
        .contacts()
        .add(new_contact("551111111111", None))
        .expect("first");
    let second = store
        .contacts()
        .add(new_contact("552222222222", None))
        .expect("second");
    assert!(second > first);

    let all = store.contacts().get_all().expect("all");
    let numbers: Vec<&str> = all.iter().map(|c| c.whatsapp.as_str()).collect();
    assert_eq!(numbers, vec!["551111111111", "552222222222"]);
}

#[test]
fn exists_by_number_matches_exact_digits() {
    let store = store();
    store
        .contacts()
        .add(new_contact("551198887766", None))
        .expect("add");
    assert!(store
        .contacts()
        .exists_by_number(&number("551198887766"))
        .expect("exists"));
    assert!(!store
        .contacts()
        .exists_by_number(&number("5511998887766"))
        .expect("exists"));
}

#[test]
fn duplicate_insert_is_rejected_by_unique_index() {
    let store = store();
    store
        .contacts()
        .add(new_contact("551198887766", None))
        .expect("add");
    let err = store
        .contacts()
        .add(new_contact("551198887766", None))
        .unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::DuplicateNumber);
    assert_eq!(store.contacts().count().expect("count"), 1);
}

#[test]
fn create_validates_domain() {
    let store = store();
    let err = store
        .contacts()
        .create(NewContact::new(" ", number("551198887766"), None, NOW))
        .unwrap_err();
    assert!(matches!(err, StoreError::Core(_)));
}

#[test]
fn list_recent_returns_newest_first() {
    let store = store();
    for raw in ["551111111111", "552222222222", "553333333333"] {
        store.contacts().add(new_contact(raw, None)).expect("add");
    }
    let recent = store.contacts().list_recent(2).expect("recent");
    let numbers: Vec<&str> = recent.iter().map(|c| c.whatsapp.as_str()).collect();
    assert_eq!(numbers, vec!["553333333333", "552222222222"]);
}

#[test]
fn update_sent_flag_marks_contact_and_counts_unsent() {
    let store = store();
    let id = store
        .contacts()
        .add(new_contact("551198887766", None))
        .expect("add");
    store
        .contacts()
        .add(new_contact("5511912345678", None))
        .expect("add");
    assert_eq!(store.contacts().count_unsent().expect("unsent"), 2);

    store.contacts().update_sent_flag(id).expect("mark sent");
    let contact = store.contacts().get(id).expect("get").expect("exists");
    assert!(contact.sent);
    assert_eq!(store.contacts().count_unsent().expect("unsent"), 1);
}

#[test]
fn update_sent_flag_fails_for_unknown_id() {
    let store = store();
    let err = store
        .contacts()
        .update_sent_flag(ContactId(99))
        .unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::NotFound);
}

#[test]
fn clear_all_empties_store_but_keeps_ids_growing() {
    let store = store();
    let before = store
        .contacts()
        .add(new_contact("551198887766", None))
        .expect("add");
    store.contacts().clear_all().expect("clear");
    assert_eq!(store.contacts().count().expect("count"), 0);

    let after = store
        .contacts()
        .add(new_contact("551198887766", None))
        .expect("add again");
    assert!(after > before);
}
