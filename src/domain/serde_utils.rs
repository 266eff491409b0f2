//! Serde utilities for vendor payloads and configuration files.

use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;

/// Deserializes identifiers the vendor sends either as strings or as numbers.
pub mod string_or_number {
    use super::{Deserializer, Visitor, de, fmt};

    /// Deserializes a string from a string or number.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither a string nor a number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrNumberVisitor;

        impl Visitor<'_> for StringOrNumberVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer identifier")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value)
            }
        }

        deserializer.deserialize_any(StringOrNumberVisitor)
    }
}

/// Deserializes boolean-like switches: `true`, `1`, `"on"`, `"0"`, ...
pub mod bool_like {
    use super::{Deserializer, Visitor, de, fmt};

    /// Deserializes a bool from a bool, integer or string.
    ///
    /// # Errors
    ///
    /// Returns an error if a string value is not a recognized switch word.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BoolLikeVisitor;

        impl Visitor<'_> for BoolLikeVisitor {
            type Value = bool;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a boolean, an integer or a yes/no string")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value)
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value != 0)
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value != 0)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match value.trim().to_ascii_lowercase().as_str() {
                    "1" | "true" | "yes" | "on" => Ok(true),
                    "0" | "false" | "no" | "off" => Ok(false),
                    other => Err(de::Error::custom(format!("invalid switch value: {other}"))),
                }
            }
        }

        deserializer.deserialize_any(BoolLikeVisitor)
    }
}
