//! # search 子命令 CLI 定义
//!
//! 按元素、年份、作者筛选 interatomic-potential 记录
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/search.rs`

use crate::database::PotentialQuery;

use clap::Args;
use std::path::PathBuf;

/// search 子命令参数
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Element(s) the potential must include (repeat or comma-separate)
    #[arg(short, long = "element", value_delimiter = ',')]
    pub elements: Vec<String>,

    /// Publication year(s) to match
    #[arg(short, long = "year", value_delimiter = ',')]
    pub years: Vec<i32>,

    /// Author surname fragment(s) to match (case-insensitive)
    #[arg(short, long = "author")]
    pub authors: Vec<String>,

    /// Record name(s) to match exactly
    #[arg(long = "name")]
    pub names: Vec<String>,

    /// Potential id(s) to match exactly
    #[arg(long = "id")]
    pub ids: Vec<String>,

    /// Number of matches to print in the table
    #[arg(long, default_value_t = 25)]
    pub top_n: usize,

    /// Export the metadata of all matches to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl SearchArgs {
    /// 构建查询条件
    pub fn query(&self) -> PotentialQuery {
        PotentialQuery {
            names: self.names.clone(),
            ids: self.ids.clone(),
            elements: self.elements.clone(),
            years: self.years.clone(),
            authors: self.authors.clone(),
        }
    }
}
