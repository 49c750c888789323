//! `serde::Serialize` for the containers and constants.
//!
//! Tuples and sets serialize as sequences, `Bool` as a boolean,
//! `IntegralConstant` as its value and `Type` as the type's name.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::integral::{Bool, IntegralConstant};
use crate::set::Set;
use crate::tuple::{Cons, HList, Nil};
use crate::types::Type;

/// Serializes each element of a tuple into an open sequence.
pub trait SerializeElements {
    fn serialize_elements<S: SerializeSeq>(&self, seq: &mut S) -> Result<(), S::Error>;
}

impl SerializeElements for Nil {
    fn serialize_elements<S: SerializeSeq>(&self, _: &mut S) -> Result<(), S::Error> {
        Ok(())
    }
}

impl<H: Serialize, T: SerializeElements> SerializeElements for Cons<H, T> {
    fn serialize_elements<S: SerializeSeq>(&self, seq: &mut S) -> Result<(), S::Error> {
        seq.serialize_element(&self.head)?;
        self.tail.serialize_elements(seq)
    }
}

impl Serialize for Nil {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_seq(Some(0))?.end()
    }
}

impl<H, T> Serialize for Cons<H, T>
where
    H: Serialize,
    T: SerializeElements + HList,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(Self::LEN))?;
        self.serialize_elements(&mut seq)?;
        seq.end()
    }
}

impl<L> Serialize for Set<L>
where
    L: Serialize + HList,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_tuple().serialize(serializer)
    }
}

impl<const B: bool> Serialize for Bool<B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(B)
    }
}

impl<T, const V: i128> Serialize for IntegralConstant<T, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match i64::try_from(V) {
            Ok(v) => serializer.serialize_i64(v),
            Err(_) => serializer.serialize_i128(V),
        }
    }
}

impl<T: ?Sized> Serialize for Type<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use crate::integral::{integral_c, TRUE};
    use crate::{set, tuple};

    #[test]
    fn test_tuple_serializes_as_sequence() {
        let yaml = serde_yaml::to_string(&tuple![1, "a", TRUE]).unwrap();
        assert_eq!(yaml, "- 1\n- a\n- true\n");
    }

    #[test]
    fn test_set_and_constants() {
        let yaml = serde_yaml::to_string(&set![integral_c::<i32, 4>()]).unwrap();
        assert_eq!(yaml, "- 4\n");
        assert_eq!(serde_yaml::to_string(&tuple![]).unwrap(), "[]\n");
    }
}
