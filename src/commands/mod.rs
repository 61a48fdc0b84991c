//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `database/`, `lammps/`, `utils/`
//! - 子模块: search, lammps, faq

pub mod faq;
pub mod lammps;
pub mod search;

use crate::cli::{Cli, Commands};
use crate::database::{metadata_to_csv, Database};
use crate::error::Result;
use crate::utils::output;

use serde::Serialize;
use std::path::Path;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let db = Database::open(cli.library.to_config())?;
    if cli.library.verbose {
        output::print_info(&format!("Record library: {}", db.local_dir().display()));
    }

    match cli.command {
        Commands::Search(args) => search::execute(&db, args),
        Commands::Lammps(args) => lammps::execute(&db, args),
        Commands::Faq(args) => faq::execute(&db, args),
    }
}

/// 导出 CSV 并报告结果
fn export_csv<T: Serialize>(rows: &[T], path: &Path) -> Result<()> {
    match metadata_to_csv(rows, path)? {
        0 => output::print_warning(&format!("Nothing to export; '{}' not written", path.display())),
        n => output::print_success(&format!("{} rows saved to '{}'", n, path.display())),
    }
    Ok(())
}
