//! Shape-strict view of a JSON value
//!
//! serde lets a derived struct decode from a JSON array as well as from an
//! object, matching fields by position. LSP never sends structs as arrays, so
//! [`StrictValue`] only hands objects to struct visitors, at every depth:
//! objects and arrays are walked through [`StrictMap`] and [`StrictSeq`],
//! which wrap each child in another [`StrictValue`].
//!
//! A struct flattened into its parent (`#[serde(flatten)]`) is decoded by
//! serde from an internal buffer instead of from this deserializer, so it
//! escapes the check. [`from_value`] closes that gap by re-encoding the
//! decoded value and rejecting any JSON array that came back as an object.

use serde::Serialize;
use serde::de::value::BorrowedStrDeserializer;
use serde::de::{
    self, DeserializeOwned, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Unexpected,
    Visitor,
};
use serde_json::{Map, Value};

/// A JSON value that decodes as a struct only when it is an object
pub struct StrictValue<'a>(pub &'a Value);

/// Decodes `value` as `T`, rejecting a JSON array anywhere `T` reads an object
pub(crate) fn from_value<T>(value: &Value) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Serialize,
{
    let decoded = T::deserialize(StrictValue(value))?;
    let encoded = serde_json::to_value(&decoded)?;
    match array_read_as_object(value, &encoded, &mut String::new()) {
        Some(pointer) => Err(de::Error::custom(format!(
            "invalid type: sequence at `{pointer}`, expected an object"
        ))),
        None => Ok(decoded),
    }
}

/// JSON pointer of the first input array whose decoded form is an object
fn array_read_as_object(input: &Value, output: &Value, pointer: &mut String) -> Option<String> {
    match (input, output) {
        (Value::Array(_), Value::Object(_)) => Some(pointer.clone()),
        (Value::Object(input), Value::Object(output)) => {
            for (key, value) in input {
                let Some(decoded) = output.get(key) else {
                    continue;
                };
                let len = pointer.len();
                pointer.push('/');
                pointer.push_str(&escape_token(key));
                let found = array_read_as_object(value, decoded, pointer);
                pointer.truncate(len);
                if found.is_some() {
                    return found;
                }
            }
            None
        }
        (Value::Array(input), Value::Array(output)) => {
            for (index, (value, decoded)) in input.iter().zip(output).enumerate() {
                let len = pointer.len();
                pointer.push('/');
                pointer.push_str(&index.to_string());
                let found = array_read_as_object(value, decoded, pointer);
                pointer.truncate(len);
                if found.is_some() {
                    return found;
                }
            }
            None
        }
        _ => None,
    }
}

/// Escapes one JSON pointer reference token (RFC 6901)
pub(crate) fn escape_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Unexpected::Signed(i)
            } else if let Some(u) = n.as_u64() {
                Unexpected::Unsigned(u)
            } else {
                Unexpected::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

fn visit_array<'de, V>(array: &'de [Value], visitor: V) -> Result<V::Value, serde_json::Error>
where
    V: Visitor<'de>,
{
    let len = array.len();
    let mut seq = StrictSeq {
        iter: array.iter(),
    };
    let visited = visitor.visit_seq(&mut seq)?;
    if seq.iter.len() == 0 {
        Ok(visited)
    } else {
        Err(de::Error::invalid_length(len, &"fewer elements in array"))
    }
}

fn visit_object<'de, V>(
    object: &'de Map<String, Value>,
    visitor: V,
) -> Result<V::Value, serde_json::Error>
where
    V: Visitor<'de>,
{
    let len = object.len();
    let mut map = StrictMap {
        iter: object.iter(),
        value: None,
    };
    let visited = visitor.visit_map(&mut map)?;
    if map.iter.len() == 0 {
        Ok(visited)
    } else {
        Err(de::Error::invalid_length(len, &"fewer elements in map"))
    }
}

/// Array elements, each seen through [`StrictValue`]
struct StrictSeq<'de> {
    iter: std::slice::Iter<'de, Value>,
}

impl<'de> SeqAccess<'de> for StrictSeq<'de> {
    type Error = serde_json::Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>, Self::Error>
    where
        T: DeserializeSeed<'de>,
    {
        self.iter
            .next()
            .map(|value| seed.deserialize(StrictValue(value)))
            .transpose()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

/// Object entries, each value seen through [`StrictValue`]
struct StrictMap<'de> {
    iter: serde_json::map::Iter<'de>,
    value: Option<&'de Value>,
}

impl<'de> MapAccess<'de> for StrictMap<'de> {
    type Error = serde_json::Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>, Self::Error>
    where
        K: DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(BorrowedStrDeserializer::new(key)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<T>(&mut self, seed: T) -> Result<T::Value, Self::Error>
    where
        T: DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(StrictValue(value)),
            None => Err(de::Error::custom("value is missing")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

macro_rules! forward_to_value {
    ($($method:ident)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value, Self::Error>
            where
                V: Visitor<'de>,
            {
                self.0.$method(visitor)
            }
        )*
    };
}

impl<'de> Deserializer<'de> for StrictValue<'de> {
    type Error = serde_json::Error;

    forward_to_value! {
        deserialize_bool
        deserialize_i8 deserialize_i16 deserialize_i32 deserialize_i64 deserialize_i128
        deserialize_u8 deserialize_u16 deserialize_u32 deserialize_u64 deserialize_u128
        deserialize_f32 deserialize_f64 deserialize_char deserialize_str deserialize_string
        deserialize_bytes deserialize_byte_buf deserialize_unit deserialize_identifier
    }

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Array(array) => visit_array(array, visitor),
            Value::Object(object) => visit_object(object, visitor),
            other => other.deserialize_any(visitor),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_unit_struct<V>(self, name: &'static str, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.0.deserialize_unit_struct(name, visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Array(array) => visit_array(array, visitor),
            other => Err(de::Error::invalid_type(unexpected(other), &visitor)),
        }
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Object(object) => visit_object(object, visitor),
            other => Err(de::Error::invalid_type(unexpected(other), &visitor)),
        }
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.0.deserialize_enum(name, variants, visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HoverParams, Location, Position, Range, TextEdit};
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn nested_struct_rejects_arrays() {
        let value = json!({ "uri": "file:///a.rs", "range": [[0, 0], [0, 5]] });

        let err = Location::deserialize(StrictValue(&value)).unwrap_err();
        assert_eq!(err.to_string(), "invalid type: sequence, expected struct Range");
    }

    #[test]
    fn struct_inside_nested_struct_rejects_arrays() {
        let value = json!({
            "range": { "start": { "line": 0, "character": 0 }, "end": [0, 5] },
            "newText": ""
        });

        let err = TextEdit::deserialize(StrictValue(&value)).unwrap_err();
        assert_eq!(err.to_string(), "invalid type: sequence, expected struct Position");
    }

    #[test]
    fn from_value_rejects_arrays_inside_flattened_structs() {
        let value = json!({ "textDocument": { "uri": "file:///a.rs" }, "position": [0, 5] });

        let err = from_value::<HoverParams>(&value).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid type: sequence at `/position`, expected an object"
        );
    }

    #[test]
    fn objects_decode_at_every_depth() {
        let value = json!({
            "uri": "file:///a.rs",
            "range": { "start": { "line": 1, "character": 2 }, "end": { "line": 1, "character": 4 } }
        });

        let location = from_value::<Location>(&value).unwrap();
        assert_eq!(
            location.range,
            Range::new(Position::new(1, 2), Position::new(1, 4))
        );
    }

    #[test]
    fn sequences_keep_strict_elements() {
        let value = json!([{ "line": 0, "character": 0 }, [1, 1]]);

        assert!(Vec::<Position>::deserialize(StrictValue(&value)).is_err());
        assert!(Vec::<Value>::deserialize(StrictValue(&value)).is_ok());
    }

    #[test]
    fn escape_token_follows_json_pointer_rules() {
        assert_eq!(escape_token("a/b~c"), "a~1b~0c");
    }
}
