//! # search 命令实现
//!
//! 按条件筛选 interatomic-potential 记录并以表格显示。
//!
//! ## 功能
//! - 元素 / 年份 / 作者 / id 筛选
//! - 终端表格输出
//! - 唯一匹配时显示引用详情
//! - 可选导出 CSV 元数据
//!
//! ## 依赖关系
//! - 使用 `cli/search.rs` 定义的参数
//! - 使用 `database/`
//! - 使用 `utils/output.rs`

use super::export_csv;
use crate::cli::search::SearchArgs;
use crate::database::Database;
use crate::error::Result;
use crate::models::{elements, Potential};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 结果表格行
#[derive(Debug, Clone, Tabled)]
struct PotentialRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Potential ID")]
    id: String,
    #[tabled(rename = "Elements")]
    elements: String,
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Authors")]
    authors: String,
    #[tabled(rename = "Impl.")]
    implementations: usize,
}

/// 执行 search 命令
pub fn execute(db: &Database, args: SearchArgs) -> Result<()> {
    output::print_header("Searching Interatomic Potentials");

    for element in &args.elements {
        if !elements::is_known_element(element) {
            output::print_warning(&format!(
                "'{}' is not a standard element symbol; only fictional/other elements can match",
                element
            ));
        }
    }

    let potentials = db.get_potentials(&args.query())?;

    if potentials.is_empty() {
        output::print_warning("No potentials match the given filters.");
        return Ok(());
    }

    output::print_info(&format!("Found {} matching potentials", potentials.len()));

    let rows: Vec<PotentialRow> = potentials
        .iter()
        .take(args.top_n)
        .enumerate()
        .map(|(i, pot)| {
            let meta = pot.metadata();
            PotentialRow {
                index: i + 1,
                id: meta.id,
                elements: meta.elements,
                year: meta.year,
                authors: meta.authors,
                implementations: meta.implementations,
            }
        })
        .collect();

    println!("{}", Table::new(&rows));

    if potentials.len() > args.top_n {
        output::print_info(&format!(
            "... and {} more (use --top-n or --csv to see all)",
            potentials.len() - args.top_n
        ));
    }

    if let [pot] = potentials.as_slice() {
        print_details(pot);
    }

    if let Some(ref path) = args.csv {
        let metadata: Vec<_> = potentials.iter().map(|p| p.metadata()).collect();
        export_csv(&metadata, path)?;
    }

    Ok(())
}

/// 显示单个势函数的引用与实现
fn print_details(pot: &Potential) {
    output::print_header(&pot.id);

    for citation in &pot.citations {
        if let Some(ref title) = citation.title {
            println!("  {}", title);
        }
        let authors: Vec<String> = citation.authors.iter().map(|a| a.to_string()).collect();
        if !authors.is_empty() {
            println!("  {}", authors.join(", "));
        }
        let venue = citation.publication_name.as_deref().unwrap_or("");
        let year = citation.year.map(|y| y.to_string()).unwrap_or_default();
        if !venue.is_empty() || !year.is_empty() {
            println!("  {} {}", venue, year);
        }
        if let Some(ref doi) = citation.doi {
            println!("  https://doi.org/{}", doi);
        }
        println!();
    }

    if let Some(ref notes) = pot.notes {
        println!("  Notes: {}\n", notes);
    }

    for implementation in &pot.implementations {
        output::print_info(&format!(
            "{} [{}] {}",
            implementation.id.as_deref().unwrap_or("-"),
            implementation.impl_type.as_deref().unwrap_or("-"),
            implementation.status.as_deref().unwrap_or("active")
        ));
    }
}
