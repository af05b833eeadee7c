//! 宽松的列表/映射字段解码
//!
//! Twitter 有时用 `null`、空字符串甚至对象代替空数组，这些情况统一解码为空集合。
//! 配合 `#[serde(default, deserialize_with = "...")]` 使用，字段缺失时同样为空。
//! 顶层的 `null` 由 [`Lenient`] 处理，转换器解码列表或映射时同样得到空集合。

use std::collections::HashMap;
use std::hash::Hash;
use std::iter;

use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{DeserializeOwned, Error, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

pub fn map<'de, D, K, V>(deserializer: D) -> Result<HashMap<K, V>, D::Error>
where
    D: Deserializer<'de>,
    K: DeserializeOwned + Eq + Hash,
    V: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(json @ Value::Object(_)) => serde_json::from_value(json).map_err(D::Error::custom),
        _ => Ok(HashMap::new()),
    }
}

/// 把 `null` 当作空数组/空对象的 [`Value`] 解码器，其余情况与 `Value` 一致
pub(crate) struct Lenient(pub(crate) Value);

macro_rules! forward_to_value {
    ($($method:ident $(($($arg:ident: $ty:ty),*))?)*) => {
        $(
            fn $method<V: Visitor<'de>>(
                self,
                $($($arg: $ty,)*)?
                visitor: V,
            ) -> Result<V::Value, Self::Error> {
                self.0.$method($($($arg,)*)? visitor)
            }
        )*
    };
}

impl<'de> Deserializer<'de> for Lenient {
    type Error = serde_json::Error;

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Null => visitor.visit_seq(SeqDeserializer::<_, serde_json::Error>::new(
                iter::empty::<Value>(),
            )),
            other => other.deserialize_seq(visitor),
        }
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Null => visitor.visit_map(MapDeserializer::<_, serde_json::Error>::new(
                iter::empty::<(String, Value)>(),
            )),
            other => other.deserialize_map(visitor),
        }
    }

    forward_to_value! {
        deserialize_any
        deserialize_bool
        deserialize_i8
        deserialize_i16
        deserialize_i32
        deserialize_i64
        deserialize_u8
        deserialize_u16
        deserialize_u32
        deserialize_u64
        deserialize_f32
        deserialize_f64
        deserialize_char
        deserialize_str
        deserialize_string
        deserialize_bytes
        deserialize_byte_buf
        deserialize_option
        deserialize_unit
        deserialize_unit_struct(name: &'static str)
        deserialize_newtype_struct(name: &'static str)
        deserialize_tuple(len: usize)
        deserialize_tuple_struct(name: &'static str, len: usize)
        deserialize_struct(name: &'static str, fields: &'static [&'static str])
        deserialize_enum(name: &'static str, variants: &'static [&'static str])
        deserialize_identifier
        deserialize_ignored_any
    }
}
