use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::converter::{deserialize_with_codec, serialize_with_codec};

use super::{Tweet, User};

/// 用于持久化的列表
///
/// 序列化形式是普通 JSON 数组，但只能通过注册了对应编解码器的
/// [`JsonConverter`](crate::converter::JsonConverter) 读写
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedList<T> {
    items: Vec<T>,
}

impl<T> PersistedList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for PersistedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for PersistedList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for PersistedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for PersistedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for PersistedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PersistedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: 'static> Serialize for PersistedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_with_codec(self, serializer)
    }
}

impl<'de, T: 'static> Deserialize<'de> for PersistedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_with_codec(deserializer)
    }
}

/// `followers/list.json` 的一页结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Followers {
    pub users: PersistedList<User>,
    pub next_cursor: i64,
    pub next_cursor_str: Option<String>,
    pub previous_cursor: i64,
    pub previous_cursor_str: Option<String>,
}

/// 某个用户的推文时间线，API直接返回数组
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserTweets {
    pub tweets: PersistedList<Tweet>,
}
