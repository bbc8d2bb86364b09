//! A student record fixture.
//!
//! [`Record`] stores an id, name, age, sex code and rank with generated
//! accessors and a bracketed string form, plus a byte snapshot for tests that
//! push it through serialization code.
//!
//! ```
//! use fixture::Record;
//!
//! let mut record = Record::new(1, "Alice", 20, 0, 1);
//! record.set_rank(2);
//!
//! assert_eq!(record.to_string(), "Record [id=1, name=Alice, age=20, sex=0, rank=2]");
//! ```

pub mod encoding;

pub mod result;
pub use result::{FixtureError, FixtureResult};

pub mod record;
pub use record::Record;

pub use fixture_derive::{Accessors, Describe};
