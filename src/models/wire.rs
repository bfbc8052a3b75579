//! Field-level serde helpers that keep one document type usable on both
//! boundaries: JSON on the wire (human readable) and BSON at rest.

/// `createAt` as a `dd-MM-yyyy` string in JSON, a native datetime in BSON.
pub mod date {
    use bson::DateTime as BsonDateTime;
    use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%d-%m-%Y";

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            None => serializer.serialize_none(),
            Some(dt) if serializer.is_human_readable() => {
                serializer.serialize_some(&dt.format(FORMAT).to_string())
            }
            Some(dt) => serializer.serialize_some(&BsonDateTime::from_chrono(*dt)),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let raw = Option::<String>::deserialize(deserializer)?;
            raw.map(|s| {
                NaiveDate::parse_from_str(&s, FORMAT)
                    .map(|d| d.and_time(NaiveTime::MIN).and_utc())
                    .map_err(de::Error::custom)
            })
            .transpose()
        } else {
            let raw = Option::<BsonDateTime>::deserialize(deserializer)?;
            Ok(raw.map(BsonDateTime::to_chrono))
        }
    }
}

/// `image` as base64 text in JSON, a raw binary blob in BSON.
pub mod image_bytes {
    use base64::{Engine, engine::general_purpose::STANDARD};
    use bson::{Binary, spec::BinarySubtype};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            None => serializer.serialize_none(),
            Some(bytes) if serializer.is_human_readable() => {
                serializer.serialize_some(&STANDARD.encode(bytes))
            }
            Some(bytes) => serializer.serialize_some(&Binary {
                subtype: BinarySubtype::Generic,
                bytes: bytes.clone(),
            }),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let raw = Option::<String>::deserialize(deserializer)?;
            raw.map(|s| STANDARD.decode(s).map_err(de::Error::custom))
                .transpose()
        } else {
            let raw = Option::<Binary>::deserialize(deserializer)?;
            Ok(raw.map(|b| b.bytes))
        }
    }
}
