//! Conversion from Rust values into [`JsonValue`] trees.
//!
//! This module provides [`ValueSerializer`], a `serde::Serializer` whose
//! output type is [`JsonValue`]. It lets any `T: Serialize` drive the schema
//! inferencer directly, without a round-trip through JSON text, and keeps
//! struct field order intact (fields land in a [`JsonMap`] in declaration
//! order).
//!
//! Most users should call [`crate::to_value`] or [`crate::table_of`] instead
//! of using the serializer directly.
//!
//! ## Examples
//!
//! ```rust
//! use serde::Serialize;
//! use typetable::to_value;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 1, y: 2 }).unwrap();
//! assert!(value.is_object());
//! ```

use crate::{Error, JsonMap, JsonValue, Number, Result};
use serde::{ser, Serialize};

/// Serializer that builds a [`JsonValue`] instead of emitting text.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<JsonValue>,
}

pub struct SerializeMap {
    map: JsonMap,
    current_key: Option<String>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = JsonValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<JsonValue> {
        Ok(JsonValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<JsonValue> {
        if v <= i64::MAX as u64 {
            Ok(JsonValue::Number(Number::Integer(v as i64)))
        } else {
            Ok(JsonValue::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<JsonValue> {
        Ok(JsonValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<JsonValue> {
        Ok(JsonValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<JsonValue> {
        let vec = v
            .iter()
            .map(|&b| JsonValue::Number(Number::Integer(b as i64)))
            .collect();
        Ok(JsonValue::Array(vec))
    }

    fn serialize_none(self) -> Result<JsonValue> {
        Ok(JsonValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<JsonValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<JsonValue> {
        Ok(JsonValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<JsonValue> {
        Ok(JsonValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<JsonValue> {
        Ok(JsonValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<JsonValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<JsonValue>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: JsonMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_json_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_json_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_json_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_json_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Array(self.vec))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_json_value(key)? {
            JsonValue::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::custom("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_json_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_json_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_json_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Object(self.map))
    }
}

fn to_json_value<T: Serialize + ?Sized>(value: &T) -> Result<JsonValue> {
    value.serialize(ValueSerializer)
}
