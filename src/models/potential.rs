//! # 原子间势记录数据模型
//!
//! 对应 `interatomic-potential` 数据模型：引用文献、作者、元素与实现列表。
//!
//! ## 依赖关系
//! - 被 `parsers/potential.rs` 构造
//! - 被 `database/`、`commands/search.rs` 使用

use serde::Serialize;

/// 作者
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub given_name: Option<String>,
    pub surname: String,
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.given_name {
            Some(given) => write!(f, "{} {}", given, self.surname),
            None => write!(f, "{}", self.surname),
        }
    }
}

/// 引用文献
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Citation {
    pub title: Option<String>,
    pub doi: Option<String>,
    pub publication_name: Option<String>,
    pub year: Option<i32>,
    pub authors: Vec<Author>,
}

/// 势函数的一个实现（如 LAMMPS pair_style 版本）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Implementation {
    pub key: Option<String>,
    pub id: Option<String>,
    pub status: Option<String>,
    pub impl_type: Option<String>,
    pub date: Option<String>,
}

/// 原子间势记录
#[derive(Debug, Clone)]
pub struct Potential {
    /// 记录名（文件名去扩展名）
    pub name: String,
    pub key: Option<String>,
    pub id: String,
    pub elements: Vec<String>,
    pub fictional_elements: Vec<String>,
    pub other_elements: Vec<String>,
    pub citations: Vec<Citation>,
    pub notes: Option<String>,
    pub implementations: Vec<Implementation>,
}

/// 扁平化元数据（用于表格与 CSV 导出）
#[derive(Debug, Clone, Serialize)]
pub struct PotentialMetadata {
    pub name: String,
    pub key: String,
    pub id: String,
    pub year: String,
    pub authors: String,
    pub elements: String,
    pub dois: String,
    pub implementations: usize,
}

impl Potential {
    /// 最早引用年份
    pub fn year(&self) -> Option<i32> {
        self.citations.iter().filter_map(|c| c.year).min()
    }

    /// 第一篇引用的作者姓氏
    pub fn authors(&self) -> Vec<String> {
        self.citations
            .first()
            .map(|c| c.authors.iter().map(|a| a.surname.clone()).collect())
            .unwrap_or_default()
    }

    /// 全部引用的 DOI
    pub fn dois(&self) -> Vec<String> {
        self.citations.iter().filter_map(|c| c.doi.clone()).collect()
    }

    /// 真实、虚构与其他元素合并
    pub fn all_elements(&self) -> Vec<String> {
        self.elements
            .iter()
            .chain(&self.fictional_elements)
            .chain(&self.other_elements)
            .cloned()
            .collect()
    }

    /// 任一引用中是否有姓氏包含给定片段的作者（忽略大小写）
    pub fn has_author(&self, fragment: &str) -> bool {
        let fragment = fragment.to_lowercase();
        self.citations
            .iter()
            .flat_map(|c| &c.authors)
            .any(|a| a.surname.to_lowercase().contains(&fragment))
    }

    /// 生成扁平化元数据
    pub fn metadata(&self) -> PotentialMetadata {
        PotentialMetadata {
            name: self.name.clone(),
            key: self.key.clone().unwrap_or_default(),
            id: self.id.clone(),
            year: self.year().map(|y| y.to_string()).unwrap_or_default(),
            authors: self.authors().join(", "),
            elements: self.all_elements().join(" "),
            dois: self.dois().join(" "),
            implementations: self.implementations.len(),
        }
    }
}
