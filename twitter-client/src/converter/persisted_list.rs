use std::any::type_name;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use common::Result;

use crate::models::PersistedList;

use super::{Codec, JsonConverter};

/// 把 [`PersistedList<T>`] 当作普通数组处理
///
/// 非数组（包括 `null`）解码为空列表，元素按原顺序逐个解码
pub struct PersistedListCodec<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> PersistedListCodec<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for PersistedListCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Codec for PersistedListCodec<T>
where
    T: Serialize + DeserializeOwned + 'static,
{
    type Target = PersistedList<T>;

    fn encode(&self, value: &PersistedList<T>, cx: &JsonConverter) -> Result<Value> {
        let items = value
            .iter()
            .map(|item| cx.to_value(item))
            .collect::<Result<Vec<_>>>()?;
        Ok(Value::Array(items))
    }

    fn decode(&self, json: Value, cx: &JsonConverter) -> Result<PersistedList<T>> {
        match json {
            Value::Array(items) => items.into_iter().map(|item| cx.from_value(item)).collect(),
            Value::Null => Ok(PersistedList::new()),
            other => {
                debug!("{} 期望数组，实际为 {}，按空列表处理", type_name::<T>(), other);
                Ok(PersistedList::new())
            }
        }
    }
}
