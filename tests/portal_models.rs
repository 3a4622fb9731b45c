use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_portald");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn portald");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn result_of(value: serde_json::Value) -> serde_json::Value {
    assert_eq!(
        value.get("ok").and_then(|v| v.as_bool()),
        Some(true),
        "request failed: {}",
        value
    );
    value.get("result").cloned().expect("result payload")
}

#[test]
fn dashboard_cards_match_diary_and_schedule() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let dashboard = result_of(request(
        &mut stdin,
        &mut reader,
        "1",
        "dashboard.open",
        json!({}),
    ));
    assert_eq!(
        dashboard.get("averageGrade").and_then(|v| v.as_str()),
        Some("4.67")
    );
    assert_eq!(dashboard.get("gradeCount").and_then(|v| v.as_u64()), Some(6));
    assert_eq!(
        dashboard.get("lessonsToday").and_then(|v| v.as_u64()),
        Some(4)
    );

    let diary = result_of(request(&mut stdin, &mut reader, "2", "diary.open", json!({})));
    assert_eq!(
        diary.get("averageGrade").and_then(|v| v.as_str()),
        Some("4.67")
    );
    let entries = diary
        .get("entries")
        .and_then(|v| v.as_array())
        .expect("entries");
    assert_eq!(entries.len(), 6);
    let first = &entries[0];
    assert_eq!(
        first.get("subject").and_then(|v| v.as_str()),
        Some("Математический анализ")
    );
    assert_eq!(first.get("score").and_then(|v| v.as_u64()), Some(5));
    assert_eq!(first.get("date").and_then(|v| v.as_str()), Some("15.10.2025"));
    assert_eq!(first.get("type").and_then(|v| v.as_str()), Some("Экзамен"));

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn schedule_serves_groups_and_rejects_unknown_ones() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let schedule = result_of(request(
        &mut stdin,
        &mut reader,
        "1",
        "schedule.open",
        json!({}),
    ));
    assert_eq!(schedule.get("group").and_then(|v| v.as_str()), Some("ИВТ-21"));
    let groups = schedule
        .get("groups")
        .and_then(|v| v.as_array())
        .expect("groups");
    assert_eq!(groups.len(), 4);
    let lessons = schedule
        .get("lessons")
        .and_then(|v| v.as_array())
        .expect("lessons");
    assert_eq!(lessons.len(), 4);
    assert_eq!(
        lessons[0].get("time").and_then(|v| v.as_str()),
        Some("9:00 - 10:30")
    );
    assert_eq!(
        lessons[0].get("room").and_then(|v| v.as_str()),
        Some("201")
    );

    let picked = result_of(request(
        &mut stdin,
        &mut reader,
        "2",
        "schedule.open",
        json!({ "group": "ПИ-22" }),
    ));
    assert_eq!(picked.get("group").and_then(|v| v.as_str()), Some("ПИ-22"));

    let missing = request(
        &mut stdin,
        &mut reader,
        "3",
        "schedule.open",
        json!({ "group": "ФИЗ-99" }),
    );
    assert_eq!(missing.get("ok").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(
        missing
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str()),
        Some("not_found")
    );

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn contacts_model_is_complete() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let contacts = result_of(request(
        &mut stdin,
        &mut reader,
        "1",
        "contacts.open",
        json!({}),
    ));
    assert_eq!(
        contacts.get("email").and_then(|v| v.as_str()),
        Some("info@institute.edu")
    );
    assert_eq!(
        contacts.get("phone").and_then(|v| v.as_str()),
        Some("+7 (495) 123-45-67")
    );
    let hours = contacts
        .get("hours")
        .and_then(|v| v.as_array())
        .expect("hours");
    assert_eq!(hours.len(), 3);
    assert_eq!(
        hours[2].get("time").and_then(|v| v.as_str()),
        Some("Выходной")
    );
    assert!(contacts
        .get("deanOffice")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .contains("14:00"));

    drop(stdin);
    let _ = child.wait();
}
