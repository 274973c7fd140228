// Copyright 2026 numarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;

use crate::scalar::float_repr;
use crate::{DType, NumArray, Scalar};

/// Serialization format version written in the `"v"` field.
const ARRAY_FORMAT_VERSION: u8 = 1u8;

/// Verifies that the version of the deserialized array matches the current
/// `ARRAY_FORMAT_VERSION`.
fn verify_version<E>(v: u8) -> Result<(), E>
where
    E: de::Error,
{
    if v != ARRAY_FORMAT_VERSION {
        let err_msg = format!("unknown array version: {}", v);
        Err(de::Error::custom(err_msg))
    } else {
        Ok(())
    }
}

/// **Requires crate feature `"serde"`**
impl Serialize for DType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for DType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

/// **Requires crate feature `"serde"`**
impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Int(i) => serializer.serialize_i64(*i),
            // most formats have no NaN or infinity literal
            Scalar::Float(x) if !x.is_finite() => serializer.serialize_str(&float_repr(*x)),
            Scalar::Float(x) => serializer.serialize_f64(*x),
            Scalar::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// The float written for NaN or an infinity, see `Serialize for Scalar`.
fn non_finite(v: &str) -> Option<f64> {
    match v {
        "nan" => Some(f64::NAN),
        "inf" => Some(f64::INFINITY),
        "-inf" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a number or a string")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Scalar, E> {
        Ok(Scalar::Int(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Scalar, E> {
        Ok(i64::try_from(v).map_or(Scalar::Float(v as f64), Scalar::Int))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Scalar, E> {
        Ok(Scalar::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Scalar, E> {
        Ok(non_finite(v).map_or_else(|| Scalar::from(v), Scalar::Float))
    }

    fn visit_string<E>(self, v: String) -> Result<Scalar, E> {
        Ok(match non_finite(&v) {
            Some(x) => Scalar::Float(x),
            None => Scalar::Text(v),
        })
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// **Requires crate feature `"serde"`**
impl Serialize for NumArray {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("NumArray", 3)?;
        state.serialize_field("v", &ARRAY_FORMAT_VERSION)?;
        state.serialize_field("dtype", &self.dtype())?;
        state.serialize_field("data", &self.to_vec())?;
        state.end()
    }
}

enum ArrayField {
    Version,
    DType,
    Data,
}

static ARRAY_FIELDS: &[&str] = &["v", "dtype", "data"];

impl<'de> Deserialize<'de> for ArrayField {
    fn deserialize<D>(deserializer: D) -> Result<ArrayField, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArrayFieldVisitor;

        impl<'de> Visitor<'de> for ArrayFieldVisitor {
            type Value = ArrayField;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(r#""v", "dtype", or "data""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<ArrayField, E>
            where
                E: de::Error,
            {
                match value {
                    "v" => Ok(ArrayField::Version),
                    "dtype" => Ok(ArrayField::DType),
                    "data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(other, ARRAY_FIELDS)),
                }
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<ArrayField, E>
            where
                E: de::Error,
            {
                match value {
                    b"v" => Ok(ArrayField::Version),
                    b"dtype" => Ok(ArrayField::DType),
                    b"data" => Ok(ArrayField::Data),
                    other => {
                        let name = String::from_utf8_lossy(other);
                        Err(de::Error::unknown_field(&name, ARRAY_FIELDS))
                    }
                }
            }
        }

        deserializer.deserialize_identifier(ArrayFieldVisitor)
    }
}

struct ArrayVisitor;

fn build<E>(dtype: DType, data: Vec<Scalar>) -> Result<NumArray, E>
where
    E: de::Error,
{
    NumArray::with_dtype(data, dtype).map_err(de::Error::custom)
}

impl<'de> Visitor<'de> for ArrayVisitor {
    type Value = NumArray;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("numarray representation")
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<NumArray, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let v: u8 = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(0, &self)),
        };

        verify_version(v)?;

        let dtype: DType = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(1, &self)),
        };

        let data: Vec<Scalar> = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(2, &self)),
        };

        build(dtype, data)
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<NumArray, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut v: Option<u8> = None;
        let mut dtype: Option<DType> = None;
        let mut data: Option<Vec<Scalar>> = None;

        while let Some(key) = visitor.next_key()? {
            match key {
                ArrayField::Version => {
                    let val = visitor.next_value()?;
                    verify_version(val)?;
                    v = Some(val);
                }
                ArrayField::DType => {
                    dtype = Some(visitor.next_value()?);
                }
                ArrayField::Data => {
                    data = Some(visitor.next_value()?);
                }
            }
        }

        if v.is_none() {
            return Err(de::Error::missing_field("v"));
        }

        let dtype = match dtype {
            Some(dtype) => dtype,
            None => return Err(de::Error::missing_field("dtype")),
        };

        let data = match data {
            Some(data) => data,
            None => return Err(de::Error::missing_field("data")),
        };

        build(dtype, data)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for NumArray {
    fn deserialize<D>(deserializer: D) -> Result<NumArray, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("NumArray", ARRAY_FIELDS, ArrayVisitor)
    }
}
