use zapharvest_store::Store;

#[test]
fn migrations_apply_once() {
    let store = Store::open_in_memory().expect("open in memory");
    assert_eq!(store.schema_version().expect("version before"), 0);

    store.migrate().expect("migrate");
    store.migrate().expect("migrate again");

    let version: i64 = store
        .connection()
        .query_row("SELECT version FROM zapharvest_schema LIMIT 1;", [], |row| {
            row.get(0)
        })
        .expect("schema version");
    assert_eq!(version, 1);
    assert_eq!(store.schema_version().expect("version after"), 1);
}

#[test]
fn file_store_persists_between_opens() {
    let temp = tempfile::TempDir::new().expect("tempdir");
    let path = temp.path().join("contacts.sqlite3");
    {
        let store = Store::open(&path).expect("open");
        store.migrate().expect("migrate");
        store
            .connection()
            .execute(
                "INSERT INTO contacts (domain, whatsapp, email, timestamp) VALUES ('a.com', '551198887766', NULL, 1);",
                [],
            )
            .expect("insert");
    }
    let store = Store::open(&path).expect("reopen");
    store.migrate().expect("migrate");
    assert_eq!(store.contacts().count().expect("count"), 1);
}
