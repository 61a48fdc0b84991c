//! # FAQ 记录数据模型
//!
//! 势函数库的常见问题记录。
//!
//! ## 依赖关系
//! - 被 `parsers/faq.rs` 构造与序列化
//! - 被 `database/`、`commands/faq.rs` 使用

use serde::Serialize;

/// FAQ 记录
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Faq {
    /// 记录名（文件名去扩展名）
    pub name: String,
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl Faq {
    pub fn new(name: impl Into<String>) -> Self {
        Faq {
            name: name.into(),
            ..Default::default()
        }
    }

    /// 同时设置多个字段，None 表示保持不变
    pub fn set_values(
        &mut self,
        name: Option<&str>,
        question: Option<&str>,
        answer: Option<&str>,
    ) {
        if let Some(question) = question {
            self.question = Some(question.to_string());
        }
        if let Some(answer) = answer {
            self.answer = Some(answer.to_string());
        }
        if let Some(name) = name {
            self.name = name.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_values_keeps_unset_fields() {
        let mut faq = Faq::new("faq-1");
        faq.set_values(None, Some("What is a pair style?"), Some("A LAMMPS directive."));
        faq.set_values(Some("faq-2"), None, None);

        assert_eq!(faq.name, "faq-2");
        assert_eq!(faq.question.as_deref(), Some("What is a pair style?"));
        assert_eq!(faq.answer.as_deref(), Some("A LAMMPS directive."));
    }
}
