//! Serialization of [`Outcome`] as an externally tagged enum, such as
//! `{"Success": 42}` or `{"Failure": "bad"}` in JSON.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::outcome::Outcome;

impl<T, E> Serialize for Outcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Outcome::Success(value) => {
                serializer.serialize_newtype_variant("Outcome", 0, "Success", value)
            }
            Outcome::Failure(error) => {
                serializer.serialize_newtype_variant("Outcome", 1, "Failure", error)
            }
        }
    }
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(rename = "Outcome")]
        enum Repr<V, F> {
            Success(V),
            Failure(F),
        }

        Ok(match Repr::<T, E>::deserialize(deserializer)? {
            Repr::Success(value) => Outcome::Success(value),
            Repr::Failure(error) => Outcome::Failure(error),
        })
    }
}
