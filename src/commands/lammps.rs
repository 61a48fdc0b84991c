//! # lammps 命令实现
//!
//! 筛选 potential-LAMMPS 记录，唯一选中时生成 LAMMPS 输入命令。
//!
//! ## 功能
//! - 多个匹配: 表格列出，可导出 CSV
//! - `--select` 按 id 选定其中之一
//! - 唯一匹配: 生成 pair_style / pair_coeff / mass 等命令
//! - 可选 read_data 或 read_restart 前缀
//! - 输出到终端或文件
//!
//! ## 依赖关系
//! - 使用 `cli/lammps.rs` 定义的参数
//! - 使用 `database/`, `lammps/`
//! - 使用 `utils/output.rs`

use super::export_csv;
use crate::cli::lammps::{parse_masses, LammpsArgs};
use crate::database::{Database, PotDirStyle};
use crate::error::{PotentialsError, Result};
use crate::lammps::{
    format_float, pair_data_info, pair_info, pair_restart_info, DataFileOptions, PairInfoOptions,
};
use crate::models::PotentialLammps;
use crate::utils::output;

use std::fs;
use tabled::{Table, Tabled};

/// 匹配结果表格行
#[derive(Debug, Clone, Tabled)]
struct LammpsRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "LAMMPS ID")]
    id: String,
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Pair Style")]
    pair_style: String,
    #[tabled(rename = "Symbols")]
    symbols: String,
    #[tabled(rename = "Units")]
    units: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// 执行 lammps 命令
pub fn execute(db: &Database, args: LammpsArgs) -> Result<()> {
    output::print_header("LAMMPS Potentials");

    let query = args.query();

    match db.get_lammps_potential(&query, args.pot_dir_style) {
        Ok(pot) => {
            if let Some(ref path) = args.csv {
                export_csv(&[pot.metadata()], path)?;
            }
            generate(&pot, &args)
        }
        Err(PotentialsError::NoMatchingRecord { .. }) => {
            output::print_warning("No LAMMPS potentials match the given filters.");
            Ok(())
        }
        Err(PotentialsError::MultipleMatchingRecords { count, .. }) => {
            let potentials = db.get_lammps_potentials(&query, args.pot_dir_style)?;
            if let Some(ref path) = args.csv {
                let metadata: Vec<_> = potentials.iter().map(|p| p.metadata()).collect();
                export_csv(&metadata, path)?;
            }

            output::print_info(&format!("Found {} matching LAMMPS potentials", count));
            print_table(&potentials, args.top_n);
            output::print_info("Narrow the filters or use --select <ID> to generate commands");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// 打印匹配列表
fn print_table(potentials: &[PotentialLammps], top_n: usize) {
    let rows: Vec<LammpsRow> = potentials
        .iter()
        .take(top_n)
        .enumerate()
        .map(|(i, pot)| LammpsRow {
            index: i + 1,
            id: pot.id.clone(),
            year: pot.year().map(|y| y.to_string()).unwrap_or_default(),
            pair_style: pot.pair_style.clone(),
            symbols: pot.symbols().join(" "),
            units: pot.units.clone(),
            status: pot.status_or_active().to_string(),
        })
        .collect();

    println!("{}", Table::new(&rows));

    if potentials.len() > top_n {
        output::print_info(&format!("... and {} more", potentials.len() - top_n));
    }
}

/// 为唯一选中的势函数生成命令
fn generate(pot: &PotentialLammps, args: &LammpsArgs) -> Result<()> {
    output::print_info(&format!("Selected: {}", pot.id));
    output::print_info(&format!("Symbols:  {}", pot.symbols().join(" ")));

    if let Some(year) = pot.year() {
        output::print_info(&format!("Year:     {}", year));
    }

    let system_symbols = args.system_symbols();
    let elements = pot.elements(system_symbols.as_deref())?;
    output::print_info(&format!("Elements: {}", elements.join(" ")));

    // 没有标准原子量时由 --masses 提供，这里只显示可确定的默认值
    if let Ok(masses) = pot.masses(system_symbols.as_deref()) {
        let masses: Vec<String> = masses.into_iter().map(format_float).collect();
        output::print_info(&format!("Masses:   {}", masses.join(" ")));
    }

    let charges: Vec<String> = pot
        .charges(system_symbols.as_deref())?
        .into_iter()
        .map(format_float)
        .collect();
    output::print_info(&format!("Charges:  {}", charges.join(" ")));

    if pot.status_or_active() != "active" {
        output::print_warning(&format!("This implementation is {}", pot.status_or_active()));
    }

    let options = PairInfoOptions {
        symbols: system_symbols,
        masses: parse_masses(&args.masses).map_err(PotentialsError::InvalidArgument)?,
        comments: !args.no_comments,
    };

    let commands = if let Some(ref data_file) = args.data_file {
        let data = DataFileOptions {
            pbc: args.pbc_flags().map_err(PotentialsError::InvalidArgument)?,
            units: args.data_units.as_deref(),
            atom_style: args.data_atom_style.as_deref(),
        };
        pair_data_info(pot, data_file, &data, &options)?
    } else if let Some(ref restart_file) = args.restart_file {
        pair_restart_info(pot, restart_file, &options)?
    } else {
        pair_info(pot, &options)?
    };

    match args.output {
        Some(ref path) => {
            fs::write(path, &commands).map_err(|e| PotentialsError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
            output::print_success(&format!("LAMMPS commands written to '{}'", path.display()));
        }
        None => {
            output::print_separator();
            print!("{}", commands);
            output::print_separator();
        }
    }

    if !pot.fileurls().is_empty() && args.pot_dir_style != PotDirStyle::Local {
        output::print_info(&format!(
            "Parameter files expected in '{}':",
            if pot.pot_dir.as_os_str().is_empty() {
                ".".to_string()
            } else {
                pot.pot_dir.display().to_string()
            }
        ));
        for url in pot.fileurls() {
            println!("    {}", url);
        }
    }

    output::print_done("LAMMPS commands generated");
    Ok(())
}
