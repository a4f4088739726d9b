use rusqlite::Connection;
use tankstore_core::{
    open_store, EquipmentRepository, EquipmentService, SqliteEquipmentRepository,
    SqliteTankRepository, StoreLocation, TankRepository, TankService,
};

#[test]
fn equipment_roundtrip_in_memory() {
    let conn = open_store(&StoreLocation::Memory).unwrap();
    let id = create_equipment(&conn, "Tank 300L");
    assert_persisted_equipment(&conn, id, "Tank 300L");
}

#[test]
fn equipment_roundtrip_on_disk_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let location = StoreLocation::file(dir.path().join("equipment.db"));

    let id = {
        let conn = open_store(&location).unwrap();
        create_equipment(&conn, "Tank 200L")
    };

    let conn = open_store(&location).unwrap();
    assert_persisted_equipment(&conn, id, "Tank 200L");
}

#[test]
fn tank_roundtrip_in_memory() {
    let conn = open_store(&StoreLocation::Memory).unwrap();
    let id = create_tank(&conn, "Tank 300L", 10000);
    assert_persisted_tank(&conn, id, "Tank 300L", 10000);
}

#[test]
fn tank_roundtrip_on_disk_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let location = StoreLocation::file(dir.path().join("tank.db"));

    let id = {
        let conn = open_store(&location).unwrap();
        create_tank(&conn, "TKN 1500", 10000)
    };

    let conn = open_store(&location).unwrap();
    assert_persisted_tank(&conn, id, "TKN 1500", 10000);
}

#[test]
fn in_memory_stores_are_isolated() {
    let first = open_store(&StoreLocation::Memory).unwrap();
    create_tank(&first, "TKN 1", 1);

    let second = open_store(&StoreLocation::Memory).unwrap();
    let tanks = SqliteTankRepository::try_new(&second).unwrap();
    assert_eq!(tanks.count_tanks().unwrap(), 0);
}

#[test]
fn disk_store_update_and_delete_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let location = StoreLocation::file(dir.path().join("lifecycle.db"));

    let (kept, removed) = {
        let conn = open_store(&location).unwrap();
        let service = TankService::new(SqliteTankRepository::try_new(&conn).unwrap());
        let kept = service.create_tank(100, "TKN 100").unwrap().id;
        let removed = service.create_tank(200, "TKN 200").unwrap().id;
        service.update_tank(kept, 150, "TKN 150").unwrap();
        service.delete_tank(removed).unwrap();
        (kept, removed)
    };

    let conn = open_store(&location).unwrap();
    let tanks = SqliteTankRepository::try_new(&conn).unwrap();
    let tank = tanks.get_tank(kept).unwrap().unwrap();
    assert_eq!(tank.volume, 150);
    assert_eq!(tank.name(), "TKN 150");
    assert!(tanks.get_tank(removed).unwrap().is_none());
    assert_eq!(tanks.count_tanks().unwrap(), 1);
}

fn create_equipment(conn: &Connection, name: &str) -> i64 {
    let service = EquipmentService::new(SqliteEquipmentRepository::try_new(conn).unwrap());
    service.create_equipment(name).unwrap().id
}

fn create_tank(conn: &Connection, name: &str, volume: i64) -> i64 {
    let service = TankService::new(SqliteTankRepository::try_new(conn).unwrap());
    service.create_tank(volume, name).unwrap().id
}

fn assert_persisted_equipment(conn: &Connection, id: i64, name: &str) {
    let repo = SqliteEquipmentRepository::try_new(conn).unwrap();
    assert_eq!(repo.count_equipment().unwrap(), 1);

    let all = repo.list_equipment().unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0].id > 0);
    assert_eq!(all[0].id, id);
    assert_eq!(all[0].name, name);
}

fn assert_persisted_tank(conn: &Connection, id: i64, name: &str, volume: i64) {
    let tanks = SqliteTankRepository::try_new(conn).unwrap();
    let equipment = SqliteEquipmentRepository::try_new(conn).unwrap();
    assert_eq!(tanks.count_tanks().unwrap(), 1);
    assert_eq!(equipment.count_equipment().unwrap(), 1);

    let all = tanks.list_tanks().unwrap();
    assert_eq!(all.len(), 1);
    let tank = &all[0];
    assert!(tank.id > 0);
    assert_eq!(tank.id, id);
    assert_eq!(tank.id, tank.equipment.id);
    assert_eq!(tank.volume, volume);
    assert_eq!(tank.name(), name);
}
