//! # faq 命令实现
//!
//! 列出、搜索和新增 FAQ 记录。
//!
//! ## 依赖关系
//! - 使用 `cli/faq.rs` 定义的参数
//! - 使用 `database/`
//! - 使用 `utils/output.rs`

use super::export_csv;
use crate::cli::faq::{FaqAddArgs, FaqArgs, FaqCommands, FaqListArgs};
use crate::database::Database;
use crate::error::Result;
use crate::models::Faq;
use crate::utils::output;

use colored::Colorize;

/// 执行 faq 命令
pub fn execute(db: &Database, args: FaqArgs) -> Result<()> {
    match args.command {
        FaqCommands::List(list_args) => list(db, list_args),
        FaqCommands::Add(add_args) => add(db, add_args),
    }
}

fn list(db: &Database, args: FaqListArgs) -> Result<()> {
    output::print_header("Frequently Asked Questions");

    let faqs = db.get_faqs(&args.query())?;
    if faqs.is_empty() {
        output::print_warning("No FAQ records match the given terms.");
        return Ok(());
    }

    for faq in &faqs {
        println!(
            "{} {}",
            "Q:".bold().cyan(),
            faq.question.as_deref().unwrap_or("")
        );
        println!("{} {}", "A:".bold().green(), faq.answer.as_deref().unwrap_or(""));
        println!();
    }

    if let Some(ref path) = args.csv {
        export_csv(&faqs, path)?;
    }

    output::print_done(&format!("{} FAQ records", faqs.len()));
    Ok(())
}

fn add(db: &Database, args: FaqAddArgs) -> Result<()> {
    let mut faq = Faq::new(args.name);
    faq.set_values(None, Some(args.question.as_str()), Some(args.answer.as_str()));

    let path = db.save_faq(&faq, args.overwrite)?;
    output::print_success(&format!("FAQ '{}' saved to '{}'", faq.name, path.display()));
    Ok(())
}
