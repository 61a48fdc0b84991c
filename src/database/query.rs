//! # 记录查询条件
//!
//! 各记录类型的过滤条件。空条件不过滤。
//!
//! ## 匹配规则
//! - 字符串字段：精确匹配任一给定值
//! - 元素/符号列表：给定值须全部出现在记录中
//! - status：`active` 同时匹配未标注状态的记录
//! - 作者、FAQ 文本：忽略大小写的子串匹配
//!
//! ## 依赖关系
//! - 被 `database/mod.rs` 和 `commands/` 使用
//! - 使用 `models/`

use crate::models::{Faq, Potential, PotentialLammps};

/// 字符串字段精确匹配任一值
fn str_match(values: &[String], value: Option<&str>) -> bool {
    if values.is_empty() {
        return true;
    }
    match value {
        Some(value) => values.iter().any(|v| v == value),
        None => false,
    }
}

/// 给定值全部出现在列表中
fn in_list(required: &[String], have: &[String]) -> bool {
    required.iter().all(|r| have.contains(r))
}

/// 忽略大小写的子串匹配，全部片段都须出现
fn str_contains(terms: &[String], text: Option<&str>) -> bool {
    if terms.is_empty() {
        return true;
    }
    let text = match text {
        Some(text) => text.to_lowercase(),
        None => return false,
    };
    terms.iter().all(|t| text.contains(&t.to_lowercase()))
}

/// interatomic-potential 查询条件
#[derive(Debug, Clone, Default)]
pub struct PotentialQuery {
    pub names: Vec<String>,
    pub ids: Vec<String>,
    pub elements: Vec<String>,
    pub years: Vec<i32>,
    pub authors: Vec<String>,
}

impl PotentialQuery {
    pub fn matches(&self, pot: &Potential) -> bool {
        str_match(&self.names, Some(&pot.name))
            && str_match(&self.ids, Some(&pot.id))
            && in_list(&self.elements, &pot.all_elements())
            && (self.years.is_empty() || pot.year().is_some_and(|y| self.years.contains(&y)))
            && (self.authors.is_empty() || self.authors.iter().any(|a| pot.has_author(a)))
    }
}

/// potential-LAMMPS 查询条件
#[derive(Debug, Clone, Default)]
pub struct LammpsQuery {
    pub names: Vec<String>,
    pub keys: Vec<String>,
    pub ids: Vec<String>,
    pub potids: Vec<String>,
    pub potkeys: Vec<String>,
    pub units: Vec<String>,
    pub atom_styles: Vec<String>,
    pub pair_styles: Vec<String>,
    pub statuses: Vec<String>,
    pub elements: Vec<String>,
    pub symbols: Vec<String>,
}

impl LammpsQuery {
    pub fn matches(&self, pot: &PotentialLammps) -> bool {
        let elements: Vec<String> = pot.atoms.iter().map(|a| a.element.clone()).collect();

        str_match(&self.names, Some(&pot.name))
            && str_match(&self.keys, pot.key.as_deref())
            && str_match(&self.ids, Some(&pot.id))
            && str_match(&self.potids, pot.potid.as_deref())
            && str_match(&self.potkeys, pot.potkey.as_deref())
            && str_match(&self.units, Some(&pot.units))
            && str_match(&self.atom_styles, Some(&pot.atom_style))
            && str_match(&self.pair_styles, Some(&pot.pair_style))
            && str_match(&self.statuses, Some(pot.status_or_active()))
            && in_list(&self.elements, &elements)
            && in_list(&self.symbols, &pot.symbols())
    }
}

/// FAQ 查询条件
#[derive(Debug, Clone, Default)]
pub struct FaqQuery {
    pub names: Vec<String>,
    pub question: Vec<String>,
    pub answer: Vec<String>,
}

impl FaqQuery {
    pub fn matches(&self, faq: &Faq) -> bool {
        str_match(&self.names, Some(&faq.name))
            && str_contains(&self.question, faq.question.as_deref())
            && str_contains(&self.answer, faq.answer.as_deref())
    }
}
