//! # 终端输出工具
//!
//! 统一的状态前缀与标题样式。
//!
//! ## 依赖关系
//! - 被 `commands/`、`database/` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 成功
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 错误（stderr）
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 警告
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 标题栏
pub fn print_header(title: &str) {
    let rule = "─".repeat(60);
    println!("\n{}", rule.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", rule.dimmed());
}

/// 分隔线，包围生成的 LAMMPS 命令
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}
