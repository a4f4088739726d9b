use rusqlite::Connection;
use tankstore_core::db::migrations::latest_version;
use tankstore_core::{
    open_db_in_memory, Equipment, EquipmentRepository, EquipmentService, RepoError,
    SqliteEquipmentRepository, SqliteTankRepository, TankRepository,
};

#[test]
fn list_returns_all_equipment() {
    let conn = open_db_in_memory().unwrap();
    let service = EquipmentService::new(SqliteEquipmentRepository::try_new(&conn).unwrap());
    seed_equipment(&service);

    let items = service.list_equipment().unwrap();
    assert_eq!(
        items,
        vec![Equipment::new(1, "TKN 10000"), Equipment::new(2, "TKN 20000")]
    );
}

#[test]
fn list_on_empty_store_returns_empty_vec() {
    let conn = open_db_in_memory().unwrap();
    let service = EquipmentService::new(SqliteEquipmentRepository::try_new(&conn).unwrap());

    assert!(service.list_equipment().unwrap().is_empty());
}

#[test]
fn get_returns_existing_and_none_for_missing() {
    let conn = open_db_in_memory().unwrap();
    let service = EquipmentService::new(SqliteEquipmentRepository::try_new(&conn).unwrap());
    seed_equipment(&service);

    for id in [1, 2] {
        let equipment = service.get_equipment(id).unwrap().unwrap();
        assert_eq!(equipment.id, id);
    }
    for id in [11, 22] {
        assert!(service.get_equipment(id).unwrap().is_none());
    }
}

#[test]
fn create_assigns_positive_identity_and_roundtrips() {
    let conn = open_db_in_memory().unwrap();
    let service = EquipmentService::new(SqliteEquipmentRepository::try_new(&conn).unwrap());

    let created = service.create_equipment("Tank 200L").unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "Tank 200L");

    // Fresh repository over the same connection sees the committed row.
    let reader = SqliteEquipmentRepository::try_new(&conn).unwrap();
    assert_eq!(reader.count_equipment().unwrap(), 1);
    let loaded = reader.get_equipment(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn create_with_empty_name_is_constraint_violation_and_persists_nothing() {
    let conn = open_db_in_memory().unwrap();
    let service = EquipmentService::new(SqliteEquipmentRepository::try_new(&conn).unwrap());

    let err = service.create_equipment("").unwrap_err();
    assert!(matches!(err, RepoError::ConstraintViolation(_)));
    assert_eq!(service.count_equipment().unwrap(), 0);
}

#[test]
fn update_overwrites_name() {
    let conn = open_db_in_memory().unwrap();
    let service = EquipmentService::new(SqliteEquipmentRepository::try_new(&conn).unwrap());
    seed_equipment(&service);

    service.update_equipment(2, "TKN 20200").unwrap();

    let loaded = service.get_equipment(2).unwrap().unwrap();
    assert_eq!(loaded.name, "TKN 20200");
    assert_eq!(
        service.get_equipment(1).unwrap().unwrap().name,
        "TKN 10000"
    );
}

#[test]
fn update_missing_identity_returns_not_found_and_leaves_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let service = EquipmentService::new(SqliteEquipmentRepository::try_new(&conn).unwrap());
    seed_equipment(&service);
    let before = service.list_equipment().unwrap();

    for id in [11, 22] {
        let err = service.update_equipment(id, "ghost").unwrap_err();
        assert!(matches!(err, RepoError::NotFound(missing) if missing == id));
    }

    assert_eq!(service.list_equipment().unwrap(), before);
}

#[test]
fn update_to_empty_name_is_constraint_violation() {
    let conn = open_db_in_memory().unwrap();
    let service = EquipmentService::new(SqliteEquipmentRepository::try_new(&conn).unwrap());
    seed_equipment(&service);

    let err = service.update_equipment(1, "").unwrap_err();
    assert!(matches!(err, RepoError::ConstraintViolation(_)));
    assert_eq!(
        service.get_equipment(1).unwrap().unwrap().name,
        "TKN 10000"
    );
}

#[test]
fn delete_removes_row() {
    let conn = open_db_in_memory().unwrap();
    let service = EquipmentService::new(SqliteEquipmentRepository::try_new(&conn).unwrap());
    seed_equipment(&service);

    service.delete_equipment(1).unwrap();

    assert!(service.get_equipment(1).unwrap().is_none());
    assert_eq!(service.count_equipment().unwrap(), 1);
}

#[test]
fn delete_missing_identity_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = EquipmentService::new(SqliteEquipmentRepository::try_new(&conn).unwrap());

    for id in [11, 22] {
        let err = service.delete_equipment(id).unwrap_err();
        assert!(matches!(err, RepoError::NotFound(missing) if missing == id));
    }
}

#[test]
fn delete_equipment_backing_a_tank_removes_the_tank() {
    let conn = open_db_in_memory().unwrap();
    let tanks = SqliteTankRepository::try_new(&conn).unwrap();
    let tank = tanks.create_tank(300, "Tank 300L").unwrap();

    let service = EquipmentService::new(SqliteEquipmentRepository::try_new(&conn).unwrap());
    service.delete_equipment(tank.id).unwrap();

    assert!(tanks.get_tank(tank.id).unwrap().is_none());
    assert_eq!(tanks.count_tanks().unwrap(), 0);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteEquipmentRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_equipment_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteEquipmentRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("Equipment"))
    ));
}

#[test]
fn repository_rejects_equipment_table_missing_name_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE Equipment (Id INTEGER PRIMARY KEY);")
        .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteEquipmentRepository::try_new(&conn),
        Err(RepoError::MissingRequiredColumn {
            table: "Equipment",
            column: "Name"
        })
    ));
}

fn seed_equipment<R: EquipmentRepository>(service: &EquipmentService<R>) {
    assert_eq!(service.create_equipment("TKN 10000").unwrap().id, 1);
    assert_eq!(service.create_equipment("TKN 20000").unwrap().id, 2);
}
