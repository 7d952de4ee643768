//! Shared fixtures for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use csv_mapper::{FieldTags, RecordShape};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Install a test log subscriber (filtered by `RUST_LOG`)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Path of a file under `tests/fixtures`
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const TOM_DESCRIPTION: &str =
    "Self-described as \"the top\" branding guru on the West Coast";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub working: bool,
    pub age: u8,
    pub salary32: f32,
    pub salary64: f64,
    pub vacation_days: i32,
    pub title: String,
    pub email: String,
    pub birthdate: Option<NaiveDate>,
    pub description: String,
}

/// Every field untagged, read in declaration order
pub fn contact_by_position() -> RecordShape<Contact> {
    RecordShape::builder()
        .field("first_name", |c: &mut Contact, v: String| c.first_name = v)
        .field("last_name", |c: &mut Contact, v: String| c.last_name = v)
        .field("working", |c: &mut Contact, v: bool| c.working = v)
        .field("age", |c: &mut Contact, v: u8| c.age = v)
        .field("salary32", |c: &mut Contact, v: f32| c.salary32 = v)
        .field("salary64", |c: &mut Contact, v: f64| c.salary64 = v)
        .field("vacation_days", |c: &mut Contact, v: i32| c.vacation_days = v)
        .field("title", |c: &mut Contact, v: String| c.title = v)
        .field("email", |c: &mut Contact, v: String| c.email = v)
        .date("birthdate", DATE_FORMAT, |c: &mut Contact, v: Option<NaiveDate>| {
            c.birthdate = v;
        })
        .field("description", |c: &mut Contact, v: String| c.description = v)
        .build()
}

/// Fields declared out of order, each pinned to its column
pub fn contact_by_index() -> RecordShape<Contact> {
    RecordShape::builder()
        .tagged("description", FieldTags::new().index("10"), |c: &mut Contact, v: String| {
            c.description = v;
        })
        .tagged("email", FieldTags::new().index("8"), |c: &mut Contact, v: String| {
            c.email = v;
        })
        .tagged("first_name", FieldTags::new().index("0"), |c: &mut Contact, v: String| {
            c.first_name = v;
        })
        .tagged("last_name", FieldTags::new().index("1"), |c: &mut Contact, v: String| {
            c.last_name = v;
        })
        .tagged("working", FieldTags::new().index("2"), |c: &mut Contact, v: bool| {
            c.working = v;
        })
        .tagged("age", FieldTags::new().index("3"), |c: &mut Contact, v: u8| {
            c.age = v;
        })
        .tagged("salary32", FieldTags::new().index("4"), |c: &mut Contact, v: f32| {
            c.salary32 = v;
        })
        .tagged("salary64", FieldTags::new().index("5"), |c: &mut Contact, v: f64| {
            c.salary64 = v;
        })
        .tagged("vacation_days", FieldTags::new().index("6"), |c: &mut Contact, v: i32| {
            c.vacation_days = v;
        })
        .tagged("title", FieldTags::new().index("7"), |c: &mut Contact, v: String| {
            c.title = v;
        })
        .tagged(
            "birthdate",
            FieldTags::new().index("9").date_format(DATE_FORMAT),
            |c: &mut Contact, v: Option<NaiveDate>| c.birthdate = v,
        )
        .build()
}

/// Fields declared out of order, located through the header row
pub fn contact_by_header() -> RecordShape<Contact> {
    RecordShape::builder()
        .tagged("email", FieldTags::new().header("email"), |c: &mut Contact, v: String| {
            c.email = v;
        })
        .tagged(
            "description",
            FieldTags::new().header("Description"),
            |c: &mut Contact, v: String| c.description = v,
        )
        .tagged(
            "birthdate",
            FieldTags::new().header("birthdate").date_format(DATE_FORMAT),
            |c: &mut Contact, v: Option<NaiveDate>| c.birthdate = v,
        )
        .tagged("title", FieldTags::new().header("TITLE"), |c: &mut Contact, v: String| {
            c.title = v;
        })
        .tagged(
            "vacation_days",
            FieldTags::new().header("vacation_days"),
            |c: &mut Contact, v: i32| c.vacation_days = v,
        )
        .tagged("salary64", FieldTags::new().header("salary64"), |c: &mut Contact, v: f64| {
            c.salary64 = v;
        })
        .tagged("salary32", FieldTags::new().header("salary32"), |c: &mut Contact, v: f32| {
            c.salary32 = v;
        })
        .tagged("age", FieldTags::new().header("age"), |c: &mut Contact, v: u8| {
            c.age = v;
        })
        .tagged("working", FieldTags::new().header("working"), |c: &mut Contact, v: bool| {
            c.working = v;
        })
        .tagged("last_name", FieldTags::new().header("last_name"), |c: &mut Contact, v: String| {
            c.last_name = v;
        })
        .tagged(
            "first_name",
            FieldTags::new().header("first_name"),
            |c: &mut Contact, v: String| c.first_name = v,
        )
        .build()
}

/// The first contact of every fixture
pub fn tom() -> Contact {
    Contact {
        first_name: "Tom".to_string(),
        last_name: "Jones".to_string(),
        working: true,
        age: 56,
        salary32: 42000.32,
        salary64: 42000.64,
        vacation_days: 10,
        title: "Senior Director".to_string(),
        email: "buyer@mymail.com".to_string(),
        birthdate: NaiveDate::from_ymd_opt(1999, 4, 12),
        description: TOM_DESCRIPTION.to_string(),
    }
}
