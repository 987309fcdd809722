//! Tests for `JsonStore` against temporary files.

use std::{
  fs,
  path::{Path, PathBuf},
};

use chrono::Local;
use pledge_core::{
  promise::PromiseStatus,
  session::Role,
  store::PromiseStore,
};
use uuid::Uuid;

use crate::JsonStore;

/// A temporary store path, removed on drop.
struct TempStore(PathBuf);

impl TempStore {
  fn new() -> Self {
    Self(std::env::temp_dir().join(format!("pledge-store-{}.json", Uuid::new_v4())))
  }

  fn path(&self) -> &Path { &self.0 }

  fn open(&self) -> JsonStore { JsonStore::open(&self.0).expect("open store") }
}

impl Drop for TempStore {
  fn drop(&mut self) { let _ = fs::remove_file(&self.0); }
}

// ─── Initialisation ──────────────────────────────────────────────────────────

#[test]
fn open_seeds_missing_file() {
  let tmp = TempStore::new();
  assert!(!tmp.path().exists());

  let s = tmp.open();
  assert!(tmp.path().exists());
  assert_eq!(s.list_politicians().unwrap().len(), 5);
  assert_eq!(s.list_promises().unwrap().len(), 10);
  assert_eq!(s.get_promise_detail("P01").unwrap().unwrap().updates.len(), 1);
  assert_eq!(s.get_promise_detail("P03").unwrap().unwrap().updates.len(), 1);
}

#[test]
fn seed_file_uses_established_layout() {
  let tmp = TempStore::new();
  tmp.open();

  let text = fs::read_to_string(tmp.path()).unwrap();
  // Four-space indent, Thai text unescaped.
  assert!(text.starts_with("{\n    \"politicians\": ["));
  assert!(text.contains("\"status\": \"เงียบหาย\""));
  assert!(text.contains("\"campaigns\": []"));

  let value: serde_json::Value = serde_json::from_str(&text).unwrap();
  let p02 = &value["promises"][1];
  assert_eq!(p02["id"], "P02");
  assert_eq!(p02["pol_id"], 101);
  assert_eq!(p02["date"], "2023-05-02");
  assert_eq!(value["updates"][0]["u_id"], 1);
  assert_eq!(value["updates"][0]["p_id"], "P01");
  assert_eq!(value["users"]["admin"], "1234");
}

#[test]
fn open_in_missing_directory_creates_it() {
  let dir = std::env::temp_dir().join(format!("pledge-dir-{}", Uuid::new_v4()));
  let path = dir.join("db.json");

  JsonStore::open(&path).unwrap();
  assert!(path.exists());

  fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn malformed_json_is_a_storage_error() {
  let tmp = TempStore::new();
  fs::write(tmp.path(), "{ not json").unwrap();

  let err = JsonStore::open(tmp.path()).unwrap_err();
  assert!(err.is_storage());
}

#[test]
fn malformed_date_is_a_storage_error() {
  let tmp = TempStore::new();
  fs::write(
    tmp.path(),
    r#"{"politicians": [], "promises": [
         {"id": "X", "pol_id": 1, "desc": "", "date": "May 1st", "status": "เงียบหาย"}
       ], "updates": []}"#,
  )
  .unwrap();

  let err = JsonStore::open(tmp.path()).unwrap_err();
  assert!(err.is_storage());
}

#[test]
fn unpadded_date_is_a_storage_error() {
  let tmp = TempStore::new();
  fs::write(
    tmp.path(),
    r#"{"politicians": [], "promises": [
         {"id": "A", "pol_id": 1, "desc": "", "date": "2023-5-1",   "status": "ยังไม่เริ่ม"},
         {"id": "B", "pol_id": 1, "desc": "", "date": "2023-10-01", "status": "ยังไม่เริ่ม"}
       ], "updates": []}"#,
  )
  .unwrap();
  let file_before = fs::read(tmp.path()).unwrap();

  let err = JsonStore::open(tmp.path()).unwrap_err();
  assert!(err.is_storage());
  assert!(err.to_string().contains("2023-5-1"));
  assert_eq!(fs::read(tmp.path()).unwrap(), file_before);
}

#[test]
fn open_under_a_regular_file_is_a_storage_error() {
  let tmp = TempStore::new();
  fs::write(tmp.path(), "not a directory").unwrap();

  let err = JsonStore::open(tmp.path().join("db.json")).unwrap_err();
  assert!(err.is_storage());
}

#[test]
fn path_reports_backing_file() {
  let tmp = TempStore::new();
  assert_eq!(tmp.open().path(), tmp.path());
}

#[test]
fn missing_optional_collections_load_empty() {
  let tmp = TempStore::new();
  fs::write(tmp.path(), r#"{"politicians": [], "promises": [], "updates": []}"#).unwrap();

  let s = tmp.open();
  assert!(s.login("admin", "1234").unwrap().is_none());
  assert!(s.list_promises().unwrap().is_empty());
}

// ─── Login ───────────────────────────────────────────────────────────────────

#[test]
fn login_admin_gets_admin_role() {
  let tmp = TempStore::new();
  let s = tmp.open();
  let session = s.login("admin", "1234").unwrap().expect("logged in");
  assert_eq!(session.role, Role::Admin);
  assert_eq!(session.username, "admin");
}

#[test]
fn login_other_user_gets_viewer_role() {
  let tmp = TempStore::new();
  let s = tmp.open();
  let session = s.login("user", "1234").unwrap().expect("logged in");
  assert_eq!(session.role, Role::Viewer);
}

#[test]
fn login_rejects_wrong_password_and_unknown_user() {
  let tmp = TempStore::new();
  let s = tmp.open();
  assert!(s.login("admin", "wrong").unwrap().is_none());
  assert!(s.login("admin", "1234 ").unwrap().is_none());
  assert!(s.login("nobody", "1234").unwrap().is_none());
}

// ─── Queries ─────────────────────────────────────────────────────────────────

#[test]
fn list_promises_is_sorted_by_announced_date() {
  let tmp = TempStore::new();
  let s = tmp.open();
  let promises = s.list_promises().unwrap();

  assert!(
    promises
      .windows(2)
      .all(|w| w[0].announced_date <= w[1].announced_date)
  );
  assert_eq!(promises.first().unwrap().id, "P07");
  assert_eq!(promises.last().unwrap().id, "P02");
}

#[test]
fn list_promises_does_not_reorder_storage() {
  let tmp = TempStore::new();
  let s = tmp.open();
  s.list_promises().unwrap();

  let ids: Vec<_> = s
    .list_promises_by_politician(101)
    .unwrap()
    .into_iter()
    .chain(s.list_promises_by_politician(202).unwrap())
    .map(|p| p.id)
    .collect();
  assert_eq!(ids, ["P01", "P02", "P03", "P04"]);
}

#[test]
fn list_promises_keeps_stored_order_for_equal_dates() {
  let tmp = TempStore::new();
  fs::write(
    tmp.path(),
    r#"{"politicians": [], "promises": [
         {"id": "B", "pol_id": 1, "desc": "", "date": "2023-05-01", "status": "ยังไม่เริ่ม"},
         {"id": "A", "pol_id": 1, "desc": "", "date": "2023-01-01", "status": "ยังไม่เริ่ม"},
         {"id": "C", "pol_id": 1, "desc": "", "date": "2023-05-01", "status": "ยังไม่เริ่ม"}
       ], "updates": []}"#,
  )
  .unwrap();

  let ids: Vec<_> = tmp.open().list_promises().unwrap().into_iter().map(|p| p.id).collect();
  assert_eq!(ids, ["A", "B", "C"]);
}

#[test]
fn list_promises_by_politician_keeps_stored_order() {
  let tmp = TempStore::new();
  fs::write(
    tmp.path(),
    r#"{"politicians": [{"id": 101, "name": "n", "party": "p"}], "promises": [
         {"id": "late",  "pol_id": 101, "desc": "", "date": "2023-09-01", "status": "ยังไม่เริ่ม"},
         {"id": "other", "pol_id": 202, "desc": "", "date": "2023-01-01", "status": "ยังไม่เริ่ม"},
         {"id": "early", "pol_id": 101, "desc": "", "date": "2023-01-01", "status": "ยังไม่เริ่ม"}
       ], "updates": []}"#,
  )
  .unwrap();

  let s = tmp.open();
  let by_pol: Vec<_> = s
    .list_promises_by_politician(101)
    .unwrap()
    .into_iter()
    .map(|p| p.id)
    .collect();
  assert_eq!(by_pol, ["late", "early"]);

  let all: Vec<_> = s.list_promises().unwrap().into_iter().map(|p| p.id).collect();
  assert_eq!(all, ["other", "early", "late"]);
}

#[test]
fn list_promises_by_politician_on_seed_data() {
  let tmp = TempStore::new();
  let s = tmp.open();
  let promises = s.list_promises_by_politician(101).unwrap();
  assert!(promises.iter().all(|p| p.politician_id == 101));
  let ids: Vec<_> = promises.iter().map(|p| p.id.as_str()).collect();
  assert_eq!(ids, ["P01", "P02"]);

  assert!(s.list_promises_by_politician(999).unwrap().is_empty());
}

#[test]
fn get_politician_found_and_missing() {
  let tmp = TempStore::new();
  let s = tmp.open();
  let p = s.get_politician(303).unwrap().expect("politician 303");
  assert_eq!(p.name, "นายเอกพล คนรุ่นใหม่");
  assert!(s.get_politician(1).unwrap().is_none());
}

#[test]
fn get_promise_found_and_missing() {
  let tmp = TempStore::new();
  let s = tmp.open();
  let p = s.get_promise("P06").unwrap().expect("P06 exists");
  assert_eq!(p.politician_id, 303);
  assert_eq!(p.status, PromiseStatus::Abandoned);
  assert!(s.get_promise("p06").unwrap().is_none());
}

#[test]
fn promise_detail_for_abandoned_seed_promise() {
  let tmp = TempStore::new();
  let s = tmp.open();
  let detail = s.get_promise_detail("P02").unwrap().expect("P02 exists");

  assert_eq!(detail.promise.status, PromiseStatus::Abandoned);
  assert_eq!(detail.politician.map(|p| p.id), Some(101));
  assert!(detail.updates.is_empty());
}

#[test]
fn promise_detail_missing_promise_is_none() {
  let tmp = TempStore::new();
  let s = tmp.open();
  assert!(s.get_promise_detail("P99").unwrap().is_none());
}

#[test]
fn promise_detail_with_dangling_politician() {
  let tmp = TempStore::new();
  fs::write(
    tmp.path(),
    r#"{"politicians": [], "promises": [
         {"id": "P1", "pol_id": 7, "desc": "", "date": "2023-01-01", "status": "กำลังดำเนินการ"}
       ], "updates": []}"#,
  )
  .unwrap();

  let detail = tmp.open().get_promise_detail("P1").unwrap().expect("P1 exists");
  assert!(detail.politician.is_none());
}

// ─── add_update ──────────────────────────────────────────────────────────────

#[test]
fn add_update_appends_dated_today_with_next_id() {
  let tmp = TempStore::new();
  let mut s = tmp.open();

  let before = Local::now().date_naive();
  let update = s.add_update("P01", "budget approved").unwrap();
  let after = Local::now().date_naive();

  assert_eq!(update.id, 3);
  assert_eq!(update.promise_id, "P01");
  assert_eq!(update.detail, "budget approved");
  assert!(update.date == before || update.date == after);

  let updates = s.get_promise_detail("P01").unwrap().unwrap().updates;
  assert_eq!(updates.len(), 2);
  assert_eq!(updates.last(), Some(&update));
}

#[test]
fn add_update_persists_immediately() {
  let tmp = TempStore::new();
  let mut s = tmp.open();
  s.add_update("P04", "  kept verbatim \n").unwrap();

  let reopened = tmp.open();
  let updates = reopened.get_promise_detail("P04").unwrap().unwrap().updates;
  assert_eq!(updates.len(), 1);
  assert_eq!(updates[0].detail, "  kept verbatim \n");
  assert_eq!(updates[0].id, 3);
}

#[test]
fn add_update_ids_are_sequential() {
  let tmp = TempStore::new();
  let mut s = tmp.open();
  let ids: Vec<_> = ["a", "b", "c"]
    .into_iter()
    .map(|d| s.add_update("P05", d).unwrap().id)
    .collect();
  assert_eq!(ids, [3, 4, 5]);
}

#[test]
fn add_update_on_abandoned_promise_fails_without_writing() {
  let tmp = TempStore::new();
  let mut s = tmp.open();

  let err = s.add_update("P02", "should not land").unwrap_err();
  assert!(err.is_invalid_state());
  assert!(err.to_string().contains("ABANDONED"));

  assert!(s.get_promise_detail("P02").unwrap().unwrap().updates.is_empty());
  // The failed attempt did not consume an id.
  assert_eq!(s.add_update("P01", "next").unwrap().id, 3);
}

#[test]
fn add_update_on_abandoned_promise_leaves_file_untouched() {
  let tmp = TempStore::new();
  let mut s = tmp.open();
  let file_before = fs::read(tmp.path()).unwrap();

  for id in ["P02", "P06", "P08"] {
    assert!(s.add_update(id, "x").unwrap_err().is_invalid_state());
  }
  assert_eq!(fs::read(tmp.path()).unwrap(), file_before);
}

#[test]
fn add_update_on_missing_promise_is_not_found() {
  let tmp = TempStore::new();
  let mut s = tmp.open();
  let file_before = fs::read(tmp.path()).unwrap();

  let err = s.add_update("P99", "x").unwrap_err();
  assert!(err.is_not_found());
  assert_eq!(fs::read(tmp.path()).unwrap(), file_before);
}

#[test]
fn add_update_rolls_back_when_persist_fails() {
  let tmp = TempStore::new();
  let mut s = tmp.open();

  // A directory where the file was makes the rewrite fail.
  fs::remove_file(tmp.path()).unwrap();
  fs::create_dir(tmp.path()).unwrap();

  let err = s.add_update("P01", "lost").unwrap_err();
  fs::remove_dir(tmp.path()).unwrap();

  assert!(err.is_storage());
  let updates = s.get_promise_detail("P01").unwrap().unwrap().updates;
  assert_eq!(updates.len(), 1);
  assert!(updates.iter().all(|u| u.detail != "lost"));
  assert_eq!(s.add_update("P01", "kept").unwrap().id, 3);
}

#[test]
fn add_update_id_survives_out_of_band_deletion() {
  let tmp = TempStore::new();
  fs::write(
    tmp.path(),
    r#"{"politicians": [], "promises": [
         {"id": "P1", "pol_id": 1, "desc": "", "date": "2023-01-01", "status": "กำลังดำเนินการ"}
       ], "updates": [
         {"u_id": 1, "p_id": "P1", "date": "2023-02-01", "detail": "one"},
         {"u_id": 3, "p_id": "P1", "date": "2023-02-03", "detail": "three"}
       ]}"#,
  )
  .unwrap();

  let mut s = tmp.open();
  assert_eq!(s.add_update("P1", "four").unwrap().id, 4);
}

#[test]
fn add_update_allowed_for_unknown_status() {
  let tmp = TempStore::new();
  fs::write(
    tmp.path(),
    r#"{"politicians": [], "promises": [
         {"id": "P1", "pol_id": 1, "desc": "", "date": "2023-01-01", "status": "สำเร็จแล้ว"}
       ], "updates": []}"#,
  )
  .unwrap();

  let mut s = tmp.open();
  assert_eq!(s.add_update("P1", "done").unwrap().id, 1);
}

// ─── Round-trip ──────────────────────────────────────────────────────────────

#[test]
fn round_trip_preserves_all_collections() {
  let tmp = TempStore::new();
  fs::write(
    tmp.path(),
    r#"{
      "politicians": [
        {"id": 2, "name": "B", "party": "x", "photo": "b.png"},
        {"id": 1, "name": "A", "party": "y"}
      ],
      "campaigns": [{"name": "2027 election", "seats": [1, 2]}],
      "promises": [
        {"id": "Z", "pol_id": 2, "desc": "zed", "date": "2024-01-01", "status": "ยังไม่เริ่ม"},
        {"id": "Y", "pol_id": 1, "desc": "why", "date": "2023-01-01", "status": "custom",
         "tags": ["transport"]}
      ],
      "updates": [
        {"u_id": 1, "p_id": "Y", "date": "2023-06-01", "detail": "first", "source": "gazette"}
      ],
      "users": {"zoe": "pw", "admin": "secret"},
      "version": 2
    }"#,
  )
  .unwrap();
  let on_disk: serde_json::Value =
    serde_json::from_slice(&fs::read(tmp.path()).unwrap()).unwrap();

  let mut s = tmp.open();
  s.add_update("Z", "second").unwrap();

  let mut written: serde_json::Value =
    serde_json::from_slice(&fs::read(tmp.path()).unwrap()).unwrap();
  let added = written["updates"].as_array_mut().unwrap().pop().unwrap();
  assert_eq!(added["u_id"], 2);
  assert_eq!(added["p_id"], "Z");
  assert_eq!(added.as_object().unwrap().len(), 4);

  assert_eq!(written, on_disk);

  let reopened = tmp.open();
  assert_eq!(reopened.list_politicians().unwrap(), s.list_politicians().unwrap());
  assert_eq!(reopened.list_promises().unwrap(), s.list_promises().unwrap());
  assert_eq!(
    reopened.get_promise_detail("Z").unwrap().unwrap().updates,
    s.get_promise_detail("Z").unwrap().unwrap().updates,
  );
  assert!(reopened.login("zoe", "pw").unwrap().is_some());
}
