use serde_json::{json, Map, Value};
use tracing::debug;

use common::Result;

use crate::models::{BindingValue, BindingValues, ImageValue, UserValue};

use super::{Codec, JsonConverter};

const TYPE_STRING: &str = "STRING";
const TYPE_IMAGE: &str = "IMAGE";
const TYPE_USER: &str = "USER";
const TYPE_BOOLEAN: &str = "BOOLEAN";

/// 卡片 `binding_values` 的编解码
///
/// 每个键对应 `{"type": "...", "<type>_value": ...}`，未知类型忽略
pub struct BindingValuesCodec;

impl Codec for BindingValuesCodec {
    type Target = BindingValues;

    fn encode(&self, value: &BindingValues, cx: &JsonConverter) -> Result<Value> {
        let mut object = Map::new();
        for (key, value) in value.iter() {
            let encoded = match value {
                BindingValue::String(s) => json!({"type": TYPE_STRING, "string_value": s}),
                BindingValue::Image(image) => {
                    json!({"type": TYPE_IMAGE, "image_value": cx.to_value(image)?})
                }
                BindingValue::User(user) => {
                    json!({"type": TYPE_USER, "user_value": cx.to_value(user)?})
                }
                BindingValue::Boolean(b) => json!({"type": TYPE_BOOLEAN, "boolean_value": b}),
            };
            object.insert(key.clone(), encoded);
        }
        Ok(Value::Object(object))
    }

    fn decode(&self, json: Value, cx: &JsonConverter) -> Result<BindingValues> {
        let Value::Object(object) = json else {
            return Ok(BindingValues::default());
        };

        let mut values = BindingValues::default();
        for (key, mut entry) in object {
            let kind = entry
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let value = match kind.as_str() {
                TYPE_STRING => entry
                    .get("string_value")
                    .and_then(Value::as_str)
                    .map(|s| BindingValue::String(s.to_string())),
                TYPE_IMAGE => match entry.get_mut("image_value").map(Value::take) {
                    Some(image) => Some(BindingValue::Image(cx.from_value::<ImageValue>(image)?)),
                    None => None,
                },
                TYPE_USER => match entry.get_mut("user_value").map(Value::take) {
                    Some(user) => Some(BindingValue::User(cx.from_value::<UserValue>(user)?)),
                    None => None,
                },
                TYPE_BOOLEAN => entry
                    .get("boolean_value")
                    .and_then(Value::as_bool)
                    .map(BindingValue::Boolean),
                _ => None,
            };

            match value {
                Some(value) => values.insert(key, value),
                None => debug!("忽略无法识别的binding value: {} ({})", key, kind),
            }
        }
        Ok(values)
    }
}
