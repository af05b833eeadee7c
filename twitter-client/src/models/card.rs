use std::collections::hash_map::Iter;
use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::converter::{deserialize_with_codec, serialize_with_codec};

/// 推文卡片
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub name: String,
    pub binding_values: BindingValues,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageValue {
    pub url: String,
    pub width: i32,
    pub height: i32,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserValue {
    pub id_str: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BindingValue {
    String(String),
    Image(ImageValue),
    User(UserValue),
    Boolean(bool),
}

/// 卡片绑定值，JSON形态由 [`BindingValuesCodec`](crate::converter::BindingValuesCodec) 决定
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindingValues(HashMap<String, BindingValue>);

impl BindingValues {
    pub fn get(&self, key: &str) -> Option<&BindingValue> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: BindingValue) {
        self.0.insert(key.into(), value);
    }

    pub fn iter(&self) -> Iter<'_, String, BindingValue> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for BindingValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_with_codec(self, serializer)
    }
}

impl<'de> Deserialize<'de> for BindingValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_with_codec(deserializer)
    }
}
