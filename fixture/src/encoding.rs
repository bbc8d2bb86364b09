use bincode::Options;
use tracing::{debug, trace};

use crate::FixtureResult;

/// Fixed codec options. Snapshots of the same value are byte-identical.
fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_big_endian()
        .with_fixint_encoding()
        .allow_trailing_bytes()
}

/// Encode any serializable value into bytes.
pub fn encode<S: ?Sized + serde::Serialize>(item: &S) -> FixtureResult<Vec<u8>> {
    let bytes = options().serialize(item)?;
    trace!(len = bytes.len(), "encoded value");
    Ok(bytes)
}

/// Decode a value previously produced by [`encode`].
pub fn decode<'a, T: serde::Deserialize<'a>>(bytes: &'a [u8]) -> FixtureResult<T> {
    match options().deserialize(bytes) {
        Ok(value) => {
            trace!(len = bytes.len(), "decoded value");
            Ok(value)
        }
        Err(err) => {
            debug!(len = bytes.len(), error = %err, "failed to decode value");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::FixtureError;
    use test_log::test;

    #[test]
    fn fixint_big_endian_layout() {
        let bytes = encode(&258i32).unwrap();
        assert_eq!(bytes, vec![0, 0, 1, 2]);
    }

    #[test]
    fn string_is_length_prefixed() {
        let bytes = encode("ab").unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 0, 0, 0, 0, 2, b'a', b'b']);
        assert_eq!(decode::<String>(&bytes).unwrap(), "ab");
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut bytes = encode(&7i16).unwrap();
        bytes.extend_from_slice(&[0xff, 0xff]);
        assert_eq!(decode::<i16>(&bytes).unwrap(), 7);
    }

    #[test]
    fn short_input_fails() {
        assert!(matches!(
            decode::<i64>(&[0, 1, 2]),
            Err(FixtureError::Serializer(_))
        ));
    }
}
