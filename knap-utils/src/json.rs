use anyhow::{anyhow, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{to_string, to_value, Map, Value};
use std::fs;

pub fn dejsonify<'a, T>(json_str: &'a str) -> serde_json::Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str::<T>(json_str)
}

pub fn jsonify<T>(obj: &T) -> Result<String>
where
    T: Serialize,
{
    Ok(to_string(&jsonify_internal(&to_value(obj)?))?)
}

pub fn jsonify_internal(json_value: &Value) -> Value {
    match json_value {
        Value::Object(obj) => {
            let mut sorted_map = Map::new();
            let mut keys: Vec<&String> = obj.keys().collect();
            keys.sort();
            for key in keys {
                if let Some(value) = obj.get(key) {
                    sorted_map.insert(key.clone(), jsonify_internal(value));
                }
            }
            Value::Object(sorted_map)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(jsonify_internal).collect()),
        _ => json_value.clone(),
    }
}

/// Accepts either inline JSON or a path ending in `.json`.
pub fn load_json_arg<T>(arg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let content = if arg.ends_with(".json") {
        fs::read_to_string(arg).map_err(|e| anyhow!("Failed to read file {}: {}", arg, e))?
    } else {
        arg.to_string()
    };
    dejsonify::<T>(&content).map_err(|e| anyhow!("Failed to parse json: {}", e))
}
