//! JSON转换器
//!
//! 在 serde_json 之上增加按类型注册的编解码器。未注册编解码器的类型直接走 serde；
//! 不能被 serde 直接处理的类型（例如 [`PersistedList`](crate::models::PersistedList)）
//! 的 serde 实现委托给当前作用域内的转换器，见 [`serialize_with_codec`] 和
//! [`deserialize_with_codec`]。

mod binding_values;
mod persisted_list;
pub mod safe;

use std::any::{type_name, Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::de::{DeserializeOwned, Error as DeError};
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use common::{Error, Result};

use crate::models::{Tweet, User};

pub use binding_values::BindingValuesCodec;
pub use persisted_list::PersistedListCodec;

/// 单个类型的编解码规则
pub trait Codec: Send + Sync + 'static {
    /// 该编解码器处理的类型
    type Target: 'static;

    fn encode(&self, value: &Self::Target, cx: &JsonConverter) -> Result<Value>;

    fn decode(&self, json: Value, cx: &JsonConverter) -> Result<Self::Target>;
}

// 类型擦除后存入注册表
trait ErasedCodec: Send + Sync {
    fn target_name(&self) -> &'static str;

    fn encode_any(&self, value: &dyn Any, cx: &JsonConverter) -> Result<Value>;

    fn decode_any(&self, json: Value, cx: &JsonConverter) -> Result<Box<dyn Any>>;
}

impl<C: Codec> ErasedCodec for C {
    fn target_name(&self) -> &'static str {
        type_name::<C::Target>()
    }

    fn encode_any(&self, value: &dyn Any, cx: &JsonConverter) -> Result<Value> {
        let value = value.downcast_ref::<C::Target>().ok_or_else(|| {
            Error::Codec(format!("编解码器类型不匹配: {}", type_name::<C::Target>()))
        })?;
        self.encode(value, cx)
    }

    fn decode_any(&self, json: Value, cx: &JsonConverter) -> Result<Box<dyn Any>> {
        Ok(Box::new(self.decode(json, cx)?))
    }
}

thread_local! {
    // 当前线程上正在进行编解码的转换器栈
    static ACTIVE: RefCell<Vec<JsonConverter>> = RefCell::new(Vec::new());
}

// 离开作用域时出栈
struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        ACTIVE.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// 转换器构建器
#[derive(Default)]
pub struct JsonConverterBuilder {
    codecs: HashMap<TypeId, Arc<dyn ErasedCodec>>,
}

impl JsonConverterBuilder {
    /// 注册编解码器，同一类型后注册的覆盖先注册的
    pub fn register<C: Codec>(mut self, codec: C) -> Self {
        debug!("注册JSON编解码器: {}", type_name::<C::Target>());
        self.codecs.insert(TypeId::of::<C::Target>(), Arc::new(codec));
        self
    }

    pub fn build(self) -> JsonConverter {
        JsonConverter {
            codecs: Arc::new(self.codecs),
        }
    }
}

/// JSON转换器，克隆开销很小，所有克隆共享同一份注册表
#[derive(Clone, Default)]
pub struct JsonConverter {
    codecs: Arc<HashMap<TypeId, Arc<dyn ErasedCodec>>>,
}

impl fmt::Debug for JsonConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.codecs.values().map(|c| c.target_name()).collect();
        names.sort_unstable();
        f.debug_struct("JsonConverter").field("codecs", &names).finish()
    }
}

impl JsonConverter {
    pub fn builder() -> JsonConverterBuilder {
        JsonConverterBuilder::default()
    }

    /// Twitter客户端使用的固定配置
    pub fn twitter() -> Self {
        Self::builder()
            .register(PersistedListCodec::<User>::new())
            .register(PersistedListCodec::<Tweet>::new())
            .register(BindingValuesCodec)
            .build()
    }

    /// 是否为类型 `T` 注册了编解码器
    pub fn has_codec<T: 'static>(&self) -> bool {
        self.codecs.contains_key(&TypeId::of::<T>())
    }

    /// 当前线程正在使用的转换器
    pub fn current() -> Option<JsonConverter> {
        ACTIVE.with(|stack| stack.borrow().last().cloned())
    }

    fn enter(&self) -> ScopeGuard {
        ACTIVE.with(|stack| stack.borrow_mut().push(self.clone()));
        ScopeGuard
    }

    fn codec_for<T: 'static>(&self) -> Result<&Arc<dyn ErasedCodec>> {
        self.codecs
            .get(&TypeId::of::<T>())
            .ok_or_else(|| Error::Codec(format!("未注册类型 {} 的编解码器", type_name::<T>())))
    }

    /// 只使用已注册的编解码器编码
    pub fn encode_with_codec<T: 'static>(&self, value: &T) -> Result<Value> {
        let codec = self.codec_for::<T>()?;
        let _scope = self.enter();
        codec.encode_any(value, self)
    }

    /// 只使用已注册的编解码器解码
    pub fn decode_with_codec<T: 'static>(&self, json: Value) -> Result<T> {
        let codec = self.codec_for::<T>()?;
        let _scope = self.enter();
        let decoded = codec.decode_any(json, self)?;
        decoded
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| Error::Codec(format!("编解码器返回了错误的类型: {}", type_name::<T>())))
    }

    pub fn to_value<T: Serialize + 'static>(&self, value: &T) -> Result<Value> {
        if self.has_codec::<T>() {
            return self.encode_with_codec(value);
        }
        let _scope = self.enter();
        Ok(serde_json::to_value(value)?)
    }

    /// 解码；顶层 `null` 解码为空列表或空映射
    pub fn from_value<T: DeserializeOwned + 'static>(&self, json: Value) -> Result<T> {
        if self.has_codec::<T>() {
            return self.decode_with_codec(json);
        }
        let _scope = self.enter();
        Ok(T::deserialize(safe::Lenient(json))?)
    }

    /// 编码为JSON字节
    pub fn encode<T: Serialize + 'static>(&self, value: &T) -> Result<Vec<u8>> {
        let json = self.to_value(value)?;
        Ok(serde_json::to_vec(&json)?)
    }

    /// 从JSON字节解码
    pub fn decode<T: DeserializeOwned + 'static>(&self, bytes: &[u8]) -> Result<T> {
        let json: Value = serde_json::from_slice(bytes)?;
        self.from_value(json)
    }
}

/// 通过当前转换器的编解码器序列化，用于实现不被 serde 原生支持的类型
pub fn serialize_with_codec<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: 'static,
    S: Serializer,
{
    let converter = JsonConverter::current().ok_or_else(|| {
        S::Error::custom(format!("类型 {} 只能通过 JsonConverter 编码", type_name::<T>()))
    })?;
    let json = converter
        .encode_with_codec(value)
        .map_err(|e| S::Error::custom(codec_message(e)))?;
    json.serialize(serializer)
}

/// 通过当前转换器的编解码器反序列化
pub fn deserialize_with_codec<'de, T, D>(deserializer: D) -> std::result::Result<T, D::Error>
where
    T: 'static,
    D: Deserializer<'de>,
{
    let json = Value::deserialize(deserializer)?;
    let converter = JsonConverter::current().ok_or_else(|| {
        D::Error::custom(format!("类型 {} 只能通过 JsonConverter 解码", type_name::<T>()))
    })?;
    converter
        .decode_with_codec(json)
        .map_err(|e| D::Error::custom(codec_message(e)))
}

// 外层 serde 错误会再包一层 `Error::Json`，这里只保留内层消息
fn codec_message(err: Error) -> String {
    match err {
        Error::Json(e) => e.to_string(),
        Error::Codec(message) => message,
        other => other.to_string(),
    }
}
