use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, rtb, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    rtb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_add_and_list_day_total() {
    let db_path = setup_test_db("add_list");
    init_db_with_data(&db_path);

    rtb()
        .args(["--db", &db_path, "list", "--period", "2026-03-02"])
        .assert()
        .success()
        .stdout(contains("2026-03-02"))
        .stdout(contains("08:00"));
}

#[test]
fn test_list_period_month() {
    let db_path = setup_test_db("list_month");
    init_db_with_data(&db_path);

    rtb()
        .args(["--db", &db_path, "list", "--period", "2026-03"])
        .assert()
        .success()
        .stdout(contains("2026-03-02"))
        .stdout(contains("2026-03-03"))
        .stdout(contains("Total worked: 16:00"));
}

#[test]
fn test_open_day_has_no_total() {
    let db_path = setup_test_db("open_day");

    rtb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rtb()
        .args(["--db", &db_path, "add", "2026-03-04", "09:00"])
        .assert()
        .success()
        .stdout(contains("day still open"));

    rtb()
        .args(["--db", &db_path, "list", "--period", "2026-03-04"])
        .assert()
        .success()
        .stdout(contains("--:--"));
}

#[test]
fn test_out_of_order_day_is_flagged() {
    let db_path = setup_test_db("unordered");

    rtb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rtb()
        .args(["--db", &db_path, "add", "2026-03-04", "17:00", "09:00"])
        .assert()
        .success();

    rtb()
        .args(["--db", &db_path, "list", "--period", "2026-03-04"])
        .assert()
        .success()
        .stdout(contains("entry error"));
}

#[test]
fn test_add_rejects_invalid_date() {
    let db_path = setup_test_db("bad_date");

    rtb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rtb()
        .args(["--db", &db_path, "add", "2026-13-01", "09:00", "17:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_waiver_takes_precedence_in_list() {
    let db_path = setup_test_db("waiver");
    init_db_with_data(&db_path);

    rtb()
        .args([
            "--db",
            &db_path,
            "waive",
            "2026-03-03",
            "--reason",
            "holiday",
            "--hours",
            "04:00",
        ])
        .assert()
        .success()
        .stdout(contains("precedence"));

    rtb()
        .args(["--db", &db_path, "list", "--period", "2026-03-03"])
        .assert()
        .success()
        .stdout(contains("04:00"))
        .stdout(contains("waived: holiday"));
}

#[test]
fn test_waive_remove() {
    let db_path = setup_test_db("waiver_remove");

    rtb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rtb()
        .args(["--db", &db_path, "waive", "2026-03-06", "--hours", "08:00"])
        .assert()
        .success();

    rtb()
        .args(["--db", &db_path, "waive", "2026-03-06", "--remove"])
        .assert()
        .success()
        .stdout(contains("Removed waiver"));
}

#[test]
fn test_del_removes_day() {
    let db_path = setup_test_db("del");
    init_db_with_data(&db_path);

    rtb()
        .args(["--db", &db_path, "del", "2026-03-02"])
        .assert()
        .success()
        .stdout(contains("Deleted all punches"));

    rtb()
        .args(["--db", &db_path, "del", "2026-03-02"])
        .assert()
        .failure()
        .stderr(contains("No entry found"));
}

#[test]
fn test_balance_for_past_month() {
    let db_path = setup_test_db("balance");

    rtb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rtb()
        .args([
            "--db",
            &db_path,
            "add",
            "2020-07-01",
            "08:00",
            "12:00",
            "13:00",
            "17:00",
        ])
        .assert()
        .success();

    // 23 working days in July 2020, one of them worked: -22 * 8h
    rtb()
        .args(["--db", &db_path, "balance", "--month", "2020-07"])
        .assert()
        .success()
        .stdout(contains("Month balance (2020-07)"))
        .stdout(contains("-176:00"))
        .stdout(contains("All-time balance"));
}

#[test]
fn test_punch_runs() {
    let db_path = setup_test_db("punch");

    rtb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // whether today is a working day depends on the calendar, so only
    // check the command completes
    rtb().args(["--db", &db_path, "punch"]).assert().success();
}

#[test]
fn test_export_import_round_trip() {
    let db_path = setup_test_db("export_rt");
    init_db_with_data(&db_path);

    rtb()
        .args([
            "--db",
            &db_path,
            "waive",
            "2026-03-06",
            "--reason",
            "PTO",
            "--hours",
            "08:00",
        ])
        .assert()
        .success();

    let out = temp_out("export_rt", "json");
    rtb()
        .args(["--db", &db_path, "export", &out])
        .assert()
        .success()
        .stdout(contains("Exported 3 entries"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("\"flexible\""));
    assert!(content.contains("\"waived\""));

    let db2 = setup_test_db("import_rt");
    rtb()
        .args(["--db", &db2, "--test", "init"])
        .assert()
        .success();

    rtb()
        .args(["--db", &db2, "import", &out])
        .assert()
        .success()
        .stdout(contains("Imported 3 entries"));

    rtb()
        .args(["--db", &db2, "list", "--period", "2026-03"])
        .assert()
        .success()
        .stdout(contains("2026-03-02"))
        .stdout(contains("PTO"));
}

#[test]
fn test_import_skips_invalid_entries() {
    let db_path = setup_test_db("import_invalid");

    rtb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let out = temp_out("import_invalid", "json");
    fs::write(
        &out,
        r#"[
            {"type": "flexible", "date": "2026-03-02", "values": ["09:00", "17:00"]},
            {"type": "flexible", "date": "2026-13-02", "values": ["09:00"]},
            {"type": "waived", "date": "2026-03-06", "data": "PTO", "hours": "25:00"}
        ]"#,
    )
    .unwrap();

    rtb()
        .args(["--db", &db_path, "import", &out])
        .assert()
        .success()
        .stdout(contains("Imported 1 entries"))
        .stdout(contains("Skipped 2 invalid entries"));
}

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv", "csv");
    rtb()
        .args(["--db", &db_path, "export", &out, "--format", "csv"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("type,date,reason,hours,values"));
    assert!(content.contains("flexible,2026-03-02"));
}

#[test]
fn test_backup_and_compress() {
    let db_path = setup_test_db("backup");
    init_db_with_data(&db_path);

    let dest = temp_out("backup_plain", "sqlite");
    rtb()
        .args(["--db", &db_path, "backup", &dest])
        .assert()
        .success();
    assert!(fs::metadata(&dest).is_ok());

    // without --force a second run must refuse
    rtb()
        .args(["--db", &db_path, "backup", &dest])
        .assert()
        .failure()
        .stderr(contains("--force"));

    let dest_zip = temp_out("backup_zip", "sqlite");
    rtb()
        .args(["--db", &db_path, "backup", &dest_zip, "--compress"])
        .assert()
        .success();
    let zip_path = std::path::Path::new(&dest_zip).with_extension("zip");
    assert!(zip_path.exists());
    fs::remove_file(&zip_path).ok();
}

#[test]
fn test_config_print() {
    let db_path = setup_test_db("config");

    rtb()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("hours_per_day"))
        .stdout(contains("working_days"));
}
