//! End-to-end CRUD tests against a live `SQLite` store.
#![allow(clippy::unwrap_used, clippy::panic)]

use basecamp::{Error, Filter, NewExpedition, NewPeak, RecordStore, Table, Value};

fn open_store() -> RecordStore {
    let store = RecordStore::in_memory().unwrap();
    store.init_schema().unwrap();
    store
}

#[test]
fn gerlach_expedition_scenario() {
    let store = open_store();

    let peak_id = store
        .insert_peak(&NewPeak::new("Gerlach", 2655, 2355))
        .unwrap();
    assert_eq!(peak_id, 1);

    let expedition_id = store
        .insert_expedition(&NewExpedition::new(
            peak_id,
            "2022-07-14",
            true,
            "Próba Tatarki",
        ))
        .unwrap();
    assert_eq!(expedition_id, 1);

    // Booleans are stored as integers, so the success flag reads back as 1.
    let successful = store
        .select_where(Table::Expeditions, &Filter::new().with("sukces", true))
        .unwrap();
    assert_eq!(
        successful,
        vec![vec![
            Value::Integer(1),
            Value::Integer(1),
            Value::Text("2022-07-14".to_string()),
            Value::Integer(1),
            Value::Text("Próba Tatarki".to_string()),
        ]]
    );
}

#[test]
fn flipping_success_empties_the_successful_set() {
    let store = open_store();

    let peak_id = store
        .insert_peak(&NewPeak::new("Gerlach", 2655, 2355))
        .unwrap();
    let expedition_id = store
        .insert_expedition(&NewExpedition::new(
            peak_id,
            "2022-07-14",
            true,
            "Próba Tatarki",
        ))
        .unwrap();

    let affected = store
        .update(
            Table::Expeditions,
            expedition_id,
            &Filter::new().with("sukces", false),
        )
        .unwrap();
    assert_eq!(affected, 1);

    let successful = store
        .select_where(Table::Expeditions, &Filter::new().with("sukces", true))
        .unwrap();
    assert!(successful.is_empty());

    // The other fields of the updated row are untouched.
    let rows = store
        .select_where(Table::Expeditions, &Filter::new().with("id", expedition_id))
        .unwrap();
    assert_eq!(
        rows,
        vec![vec![
            Value::Integer(1),
            Value::Integer(1),
            Value::Text("2022-07-14".to_string()),
            Value::Integer(0),
            Value::Text("Próba Tatarki".to_string()),
        ]]
    );
}

#[test]
fn delete_where_leaves_other_rows_untouched() {
    let store = open_store();
    let peak_id = store
        .insert_peak(&NewPeak::new("Gerlach", 2655, 2355))
        .unwrap();

    for (date, success) in [
        ("2021-06-01", false),
        ("2022-07-14", true),
        ("2023-08-20", false),
    ] {
        store
            .insert_expedition(&NewExpedition::new(peak_id, date, success, "Grań"))
            .unwrap();
    }

    let before = store.select_all(Table::Expeditions).unwrap().len();
    let deleted = store
        .delete_where(Table::Expeditions, &Filter::new().with("sukces", false))
        .unwrap();
    let after = store.select_all(Table::Expeditions).unwrap();

    assert_eq!(deleted, 2);
    assert_eq!(before - after.len(), deleted);
    assert_eq!(after.len(), 1);
    assert_eq!(after[0][2], Value::Text("2022-07-14".to_string()));
}

#[test]
fn multi_column_filter_matches_conjunctively() {
    let store = open_store();
    let peak_id = store
        .insert_peak(&NewPeak::new("Gerlach", 2655, 2355))
        .unwrap();
    store
        .insert_expedition(&NewExpedition::new(peak_id, "2022-07-14", true, "Grań"))
        .unwrap();
    store
        .insert_expedition(&NewExpedition::new(peak_id, "2022-07-14", false, "Grań"))
        .unwrap();

    let rows = store
        .select_where(
            Table::Expeditions,
            &Filter::new()
                .with("data_wyprawy", "2022-07-14")
                .with("sukces", true),
        )
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][3], Value::Integer(1));
}

#[test]
fn filtered_operations_reject_empty_filters() {
    let store = open_store();
    let empty = Filter::new();

    assert!(matches!(
        store.select_where(Table::Peaks, &empty),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        store.delete_where(Table::Peaks, &empty),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        store.update(Table::Peaks, 1, &empty),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn update_failure_is_surfaced_not_swallowed() {
    let store = open_store();
    let id = store
        .insert_peak(&NewPeak::new("Gerlach", 2655, 2355))
        .unwrap();

    let result = store.update(Table::Peaks, id, &Filter::new().with("elevation", 9000));
    assert!(
        matches!(result, Err(Error::InvalidInput(ref msg)) if msg.contains("elevation")),
        "an unknown update column must produce a typed error"
    );
}

#[test]
fn file_backed_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("expeditions.db");

    {
        let store = RecordStore::new(&db_path).unwrap();
        store.init_schema().unwrap();
        store
            .insert_peak(&NewPeak::new("Gerlach", 2655, 2355))
            .unwrap();
    }

    let reopened = RecordStore::new(&db_path).unwrap();
    assert_eq!(reopened.db_path(), Some(&db_path));

    let peaks = reopened.peaks().unwrap();
    assert_eq!(peaks.len(), 1);
    assert_eq!(peaks[0].name, "Gerlach");
    assert_eq!(peaks[0].prominence, Some(2355));
}

#[test]
fn insert_peak_with_null_measurements() {
    let store = open_store();

    let id = store
        .insert_peak(&NewPeak {
            name: "Mnich".to_string(),
            height: None,
            prominence: None,
        })
        .unwrap();

    let rows = store
        .select_where(Table::Peaks, &Filter::new().with("id", id))
        .unwrap();
    assert_eq!(
        rows[0],
        vec![
            Value::Integer(1),
            Value::Text("Mnich".to_string()),
            Value::Null,
            Value::Null,
        ]
    );
}
