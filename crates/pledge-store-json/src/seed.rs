//! The demonstration dataset written when no backing file exists.

use chrono::NaiveDate;
use pledge_core::{
  politician::Politician,
  promise::{Promise, PromiseStatus},
  update::Update,
};

use crate::{document::Document, encode::Stored};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn politician(id: i64, name: &str, party: &str) -> Politician {
  Politician { id, name: name.into(), party: party.into() }
}

fn promise(
  id: &str,
  politician_id: i64,
  description: &str,
  announced: NaiveDate,
  status: PromiseStatus,
) -> Promise {
  Promise {
    id: id.into(),
    politician_id,
    description: description.into(),
    announced_date: announced,
    status,
  }
}

fn update(id: i64, promise_id: &str, on: NaiveDate, detail: &str) -> Update {
  Update { id, promise_id: promise_id.into(), date: on, detail: detail.into() }
}

/// 5 politicians, 10 promises, 2 updates, 2 users.
pub fn seed_document() -> Document {
  use PromiseStatus::{Abandoned, InProgress, NotStarted};

  let politicians = vec![
    politician(101, "นายสมชาย ใจดี", "พรรคก้าวหน้า"),
    politician(202, "นางสาวจริงใจ รักถิ่น", "พรรคพัฒนาชนบท"),
    politician(303, "นายเอกพล คนรุ่นใหม่", "พรรคอนาคตไกล"),
    politician(444, "พลเอก มั่นคง", "พรรคพลังเงียบ"),
    politician(555, "คุณหญิง สุดารัตน์", "พรรคไทยสร้างสรรค์"),
  ];

  let promises = vec![
    promise("P01", 101, "รถไฟฟ้า 20 บาทตลอดสาย", date(2023, 5, 1), InProgress),
    promise("P02", 101, "เพิ่มเบี้ยผู้สูงอายุ", date(2023, 5, 2), Abandoned),
    promise("P03", 202, "ประกันราคาข้าว", date(2023, 4, 10), InProgress),
    promise("P04", 202, "เรียนฟรีถึงปริญญาตรี", date(2023, 4, 12), NotStarted),
    promise("P05", 303, "สมรสเท่าเทียม", date(2023, 3, 15), InProgress),
    promise("P06", 303, "ยกเลิกเกณฑ์ทหาร", date(2023, 3, 20), Abandoned),
    promise("P07", 444, "บัตรคนจนพลัส", date(2023, 2, 1), NotStarted),
    promise("P08", 444, "คนละครึ่งเฟสใหม่", date(2023, 2, 5), Abandoned),
    promise("P09", 555, "SME กู้ดอกเบี้ยต่ำ", date(2023, 3, 1), InProgress),
    promise("P10", 555, "อินเทอร์เน็ตฟรีทุกหมู่บ้าน", date(2023, 3, 5), NotStarted),
  ];

  let updates = vec![
    update(1, "P01", date(2023, 9, 1), "ครม. อนุมัติหลักการแล้ว"),
    update(2, "P03", date(2023, 10, 1), "ตั้งคณะกรรมการศึกษาผลกระทบ"),
  ];

  let users = [("admin", "1234"), ("user", "1234")]
    .into_iter()
    .map(|(u, p)| (u.to_owned(), p.to_owned()))
    .collect();

  Document {
    politicians: politicians.into_iter().map(Stored::new).collect(),
    campaigns:   Vec::new(),
    promises:    promises.into_iter().map(Stored::new).collect(),
    updates:     updates.into_iter().map(Stored::new).collect(),
    users,
    extra:       Default::default(),
  }
}
