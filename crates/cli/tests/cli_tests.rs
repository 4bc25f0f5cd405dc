use assert_cmd::Command;
use predicates::prelude::*;

fn labdesk() -> Command {
    let mut cmd = Command::cargo_bin("labdesk").unwrap();
    cmd.env_remove("DATABASE_URL").env_remove("LABDESK_UPDATE_URL");
    cmd
}

#[test]
fn test_cli_help() {
    labdesk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("laboratory test objectives"));
}

#[test]
fn test_cli_serve_help() {
    labdesk().arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_objectives_from_demo_data() {
    labdesk()
        .args(["--memory", "objectives"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Botrytis cinerea"))
        .stdout(predicate::str::contains("500.00"));
}

#[test]
fn test_objectives_json_uses_column_names() {
    labdesk()
        .args(["objectives", "--json", "--memory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"precio_quimico\": 500.0"))
        .stdout(predicate::str::contains("\"objetivo_tipo_prueba\": \"Eficacia\""));
}

#[test]
fn test_work_orders_limit() {
    labdesk()
        .args(["--memory", "work-orders", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"prueba_id\": 2"))
        .stdout(predicate::str::contains("\"prueba_id\": 1").not());
}

#[test]
fn test_objectives_without_database_fails() {
    labdesk()
        .arg("objectives")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL"));
}

#[test]
fn test_check_update_not_configured() {
    labdesk().arg("check-update").assert().success().stdout(predicate::str::contains("not configured"));
}

#[test]
fn test_init_schema_requires_database_url() {
    labdesk().arg("init-schema").assert().failure().stderr(predicate::str::contains("DATABASE_URL"));
}
