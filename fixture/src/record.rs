use fixture_derive::{Accessors, Describe};
use serde::{Deserialize, Serialize};

use crate::encoding::{decode, encode};
use crate::result::FixtureResult;

/// A student record used as a test fixture.
///
/// Fields carry no validation and no cross-field rules. Every field has a
/// getter and a `set_` setter, and [`std::fmt::Display`] renders
/// `Record [id=.., name=.., age=.., sex=.., rank=..]`.
#[derive(Accessors, Describe, Serialize, Deserialize, Debug, Clone)]
pub struct Record {
    id: i64,
    name: String,
    age: i32,
    /// Sex code, not checked against any enumeration.
    sex: i16,
    rank: i32,
}

impl Record {
    /// Create a new record holding exactly the given values.
    pub fn new(id: i64, name: impl Into<String>, age: i32, sex: i16, rank: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            sex,
            rank,
        }
    }

    /// Snapshot the record into bytes.
    pub fn to_bytes(&self) -> FixtureResult<Vec<u8>> {
        encode(self)
    }

    /// Rebuild a record from a snapshot made by [`Record::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> FixtureResult<Self> {
        decode(bytes)
    }
}
