//! # 解析器模块
//!
//! 将 JSON 数据模型解析为记录对象，以及将记录序列化为数据模型。
//!
//! ## 数据模型约定
//! 任何期望列表的字段既可以是单个值，也可以是数组（`aslist` 语义）。
//!
//! ## 依赖关系
//! - 被 `database/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: faq, lammps, potential

pub mod faq;
pub mod lammps;
pub mod potential;

use crate::error::{PotentialsError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// 读取 JSON 文件
pub(crate) fn read_json_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| PotentialsError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 从文件路径推断记录名
pub(crate) fn record_name(path: &Path) -> &str {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
}

/// 解析 JSON 文本并取出根元素
pub(crate) fn load_root(content: &str, root: &str, name: &str) -> Result<Value> {
    let mut model: Value = serde_json::from_str(content).map_err(|e| PotentialsError::ParseError {
        style: root.to_string(),
        path: name.to_string(),
        reason: e.to_string(),
    })?;

    match model.get_mut(root) {
        Some(value) if value.is_object() => Ok(value.take()),
        _ => Err(PotentialsError::ParseError {
            style: root.to_string(),
            path: name.to_string(),
            reason: format!("Missing '{}' root element", root),
        }),
    }
}

/// 以列表形式访问字段：缺失/null 为空，数组逐项，其他视为单元素
pub(crate) fn as_list<'a>(value: Option<&'a Value>) -> Vec<&'a Value> {
    match value {
        None | Some(Value::Null) => vec![],
        Some(Value::Array(items)) => items.iter().collect(),
        Some(other) => vec![other],
    }
}

/// 标量值转为字符串（字符串原样，数字与布尔按 JSON 文本）
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// 读取字符串字段
pub(crate) fn get_string(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(scalar_to_string)
}

/// 读取字符串列表字段
pub(crate) fn get_string_list(value: &Value, key: &str) -> Vec<String> {
    as_list(value.get(key))
        .into_iter()
        .filter_map(scalar_to_string)
        .collect()
}

/// 读取浮点字段（接受数字或数字字符串）。字段存在但不是数字时返回原因
pub(crate) fn get_f64(value: &Value, key: &str) -> std::result::Result<Option<f64>, String> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| format!("'{}' is not a number: \"{}\"", key, s)),
        Some(other) => Err(format!("'{}' is not a number: {}", key, other)),
    }
}

/// 布尔标志：JSON true 或不区分大小写的 "true"
pub(crate) fn is_true(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// 递归查找是否存在给定键
pub(crate) fn contains_key(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => map
            .iter()
            .any(|(k, v)| k == key || contains_key(v, key)),
        Value::Array(items) => items.iter().any(|v| contains_key(v, key)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_as_list_semantics() {
        let model = json!({"one": "Al", "many": ["Al", "Ni"], "none": null});
        assert_eq!(as_list(model.get("one")).len(), 1);
        assert_eq!(as_list(model.get("many")).len(), 2);
        assert!(as_list(model.get("none")).is_empty());
        assert!(as_list(model.get("missing")).is_empty());
    }

    #[test]
    fn test_scalar_to_string_numbers() {
        assert_eq!(scalar_to_string(&json!(3)).unwrap(), "3");
        assert_eq!(scalar_to_string(&json!(1.0)).unwrap(), "1.0");
        assert_eq!(scalar_to_string(&json!(2.5e-3)).unwrap(), "0.0025");
    }

    #[test]
    fn test_is_true() {
        assert!(is_true(&json!(true)));
        assert!(is_true(&json!("True")));
        assert!(!is_true(&json!("false")));
        assert!(!is_true(&json!(1)));
    }

    #[test]
    fn test_contains_key_nested() {
        let coeff = json!({"interaction": {"symbol": ["Al", "Al"]}, "term": [{"file": "x"}, {"symbols": "True"}]});
        assert!(contains_key(&coeff, "symbols"));
        assert!(!contains_key(&coeff, "symbolsList"));
    }

    #[test]
    fn test_get_f64() {
        let atom = json!({"mass": 26.98, "charge": "-1.5", "bad": "heavy", "list": [1]});
        assert_eq!(get_f64(&atom, "mass"), Ok(Some(26.98)));
        assert_eq!(get_f64(&atom, "charge"), Ok(Some(-1.5)));
        assert_eq!(get_f64(&atom, "missing"), Ok(None));
        assert!(get_f64(&atom, "bad").unwrap_err().contains("heavy"));
        assert!(get_f64(&atom, "list").is_err());
    }

    #[test]
    fn test_load_root_missing() {
        let result = load_root(r#"{"other": {}}"#, "faq", "test");
        assert!(matches!(result, Err(PotentialsError::ParseError { .. })));
    }
}
