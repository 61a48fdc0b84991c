//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `search`: 筛选 interatomic-potential 记录
//! - `lammps`: 筛选 potential-LAMMPS 记录并生成 LAMMPS 命令
//! - `faq`: FAQ 记录（嵌套子命令）
//!   - `list`: 列出/搜索 FAQ
//!   - `add`: 新增 FAQ
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: search, lammps, faq

pub mod faq;
pub mod lammps;
pub mod search;

use crate::database::DatabaseConfig;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// potentials - 原子间势记录工具
#[derive(Parser)]
#[command(name = "potentials")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Query interatomic potential records and generate LAMMPS potential commands", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub library: LibraryArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// 记录库全局参数
#[derive(Args, Debug)]
pub struct LibraryArgs {
    /// Local record library directory
    #[arg(long, global = true, env = "POTENTIALS_LOCAL_DIR", default_value = "library")]
    pub local_dir: PathBuf,

    /// Number of parallel jobs for loading records (0 = auto)
    #[arg(short, long, global = true, env = "POTENTIALS_JOBS", default_value_t = 0)]
    pub jobs: usize,

    /// Report loading details and skipped records
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

impl LibraryArgs {
    /// 转换为数据库配置
    pub fn to_config(&self) -> DatabaseConfig {
        let mut config = DatabaseConfig::new(&self.local_dir);
        config.jobs = self.jobs;
        config.verbose = self.verbose;
        config
    }
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Search interatomic potential records by element, year and author
    Search(search::SearchArgs),

    /// Select a LAMMPS potential and print its LAMMPS commands
    Lammps(lammps::LammpsArgs),

    /// List, search and add FAQ records
    Faq(faq::FaqArgs),
}
