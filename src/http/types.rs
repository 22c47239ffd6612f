use serde::{Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// `OffsetDateTime` serializes as a tuple of its components by default, which nobody wants
/// to parse. This wrapper writes it out as an RFC 3339 string instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamptz(pub OffsetDateTime);

impl Serialize for Timestamptz {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = self
            .0
            .format(&Rfc3339)
            .map_err(serde::ser::Error::custom)?;

        serializer.serialize_str(&formatted)
    }
}
