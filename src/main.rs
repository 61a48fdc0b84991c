//! # potentials - 原子间势函数库工具
//!
//! 浏览本地 interatomic-potential / potential-LAMMPS / FAQ 记录库，
//! 并为选中的势函数生成 LAMMPS 输入命令。
//!
//! ## 子命令
//! - `search` - 按元素、年份、作者筛选势函数
//! - `lammps` - 筛选 LAMMPS 实现并生成 pair_style / pair_coeff / mass 命令
//! - `faq`    - FAQ 记录
//!   - `list` - 列出与搜索
//!   - `add`  - 新增记录
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── database/ (记录库: 收集、并行加载、筛选)
//!   │     ├── parsers/  (JSON 记录解析)
//!   │     ├── lammps/   (LAMMPS 命令生成)
//!   │     └── models/   (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod database;
mod error;
mod lammps;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
