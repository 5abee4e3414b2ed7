use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Base dimensions `x`, `y` and height `h` of a rectangular box.
///
/// No sign or range checks: zero, negative and arbitrarily large values are
/// carried through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxDimensions {
    #[serde(serialize_with = "as_json_number")]
    pub x: BigInt,
    #[serde(serialize_with = "as_json_number")]
    pub y: BigInt,
    #[serde(serialize_with = "as_json_number")]
    pub h: BigInt,
}

impl BoxDimensions {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>, h: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            h: h.into(),
        }
    }
}

impl fmt::Display for BoxDimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.h)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceArea {
    #[serde(flatten)]
    pub dimensions: BoxDimensions,
    #[serde(serialize_with = "as_json_number")]
    pub area: BigInt,
}

// Integers of any width are written as bare JSON numbers, never strings.
fn as_json_number<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    let number = serde_json::Number::from_str(&value.to_string()).map_err(serde::ser::Error::custom)?;
    number.serialize(serializer)
}
