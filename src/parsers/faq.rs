//! # FAQ 数据模型读写
//!
//! ## 格式说明
//! ```text
//! {"faq": {"question": "...", "answer": "..."}}
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 和 `database/` 使用
//! - 使用 `models/faq.rs`

use super::{get_string, load_root, read_json_file, record_name};
use crate::error::Result;
use crate::models::Faq;

use serde_json::{json, Value};
use std::path::Path;

const ROOT: &str = "faq";

/// 解析 FAQ 文件
pub fn parse_faq_file(path: &Path) -> Result<Faq> {
    let content = read_json_file(path)?;
    parse_faq_content(&content, record_name(path))
}

/// 从字符串内容解析 FAQ 数据模型
pub fn parse_faq_content(content: &str, name: &str) -> Result<Faq> {
    let faq = load_root(content, ROOT, name)?;

    Ok(Faq {
        name: name.to_string(),
        question: get_string(&faq, "question"),
        answer: get_string(&faq, "answer"),
    })
}

/// 构建 FAQ 数据模型
pub fn build_faq_model(faq: &Faq) -> Value {
    json!({
        ROOT: {
            "question": faq.question,
            "answer": faq.answer,
        }
    })
}

/// 将 FAQ 序列化为格式化 JSON 文本
pub fn to_faq_string(faq: &Faq) -> Result<String> {
    let mut content = serde_json::to_string_pretty(&build_faq_model(faq))?;
    content.push('\n');
    Ok(content)
}
