//! # faq 子命令 CLI 定义
//!
//! FAQ 记录的列出、搜索与新增
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/faq.rs`

use crate::database::FaqQuery;

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// faq 主命令参数
#[derive(Args, Debug)]
pub struct FaqArgs {
    #[command(subcommand)]
    pub command: FaqCommands,
}

/// faq 子命令
#[derive(Subcommand, Debug)]
pub enum FaqCommands {
    /// List FAQ records, optionally filtered by question/answer text
    List(FaqListArgs),

    /// Add a FAQ record to the local library
    Add(FaqAddArgs),
}

/// faq list 参数
#[derive(Args, Debug)]
pub struct FaqListArgs {
    /// Term(s) that must appear in the question (case-insensitive)
    #[arg(short, long)]
    pub question: Vec<String>,

    /// Term(s) that must appear in the answer (case-insensitive)
    #[arg(short, long)]
    pub answer: Vec<String>,

    /// Export the matching records to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl FaqListArgs {
    /// 构建查询条件
    pub fn query(&self) -> FaqQuery {
        FaqQuery {
            names: vec![],
            question: self.question.clone(),
            answer: self.answer.clone(),
        }
    }
}

/// faq add 参数
#[derive(Args, Debug)]
pub struct FaqAddArgs {
    /// Record name (file name without .json)
    #[arg(short, long)]
    pub name: String,

    /// The frequently asked question
    #[arg(short, long)]
    pub question: String,

    /// The answer to the question
    #[arg(short, long)]
    pub answer: String,

    /// Replace an existing record with the same name
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
