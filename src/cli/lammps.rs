//! # lammps 子命令 CLI 定义
//!
//! 筛选 potential-LAMMPS 记录，对选中的势函数生成 LAMMPS 命令
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/lammps.rs`

use crate::database::{LammpsQuery, PotDirStyle};

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 记录状态筛选
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum StatusFilter {
    /// Current versions (records without a status count as active)
    Active,
    /// Replaced by a newer version
    Superseded,
    /// Withdrawn
    Retracted,
    /// Any status
    All,
}

impl StatusFilter {
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            StatusFilter::Active => Some("active"),
            StatusFilter::Superseded => Some("superseded"),
            StatusFilter::Retracted => Some("retracted"),
            StatusFilter::All => None,
        }
    }
}

/// 转换为查询中的状态列表（空表示不过滤）
pub fn statuses(filters: &[StatusFilter]) -> Vec<String> {
    if filters.contains(&StatusFilter::All) {
        return vec![];
    }
    filters
        .iter()
        .filter_map(|f| f.as_str())
        .map(|s| s.to_string())
        .collect()
}

/// lammps 子命令参数
#[derive(Args, Debug)]
pub struct LammpsArgs {
    // ─────────────────────────────────────────────────────────────
    // 筛选参数
    // ─────────────────────────────────────────────────────────────
    /// Element(s) the potential must model (repeat or comma-separate)
    #[arg(short, long = "element", value_delimiter = ',')]
    pub elements: Vec<String>,

    /// Atom-model symbol(s) the potential must define
    #[arg(long = "has-symbol", value_delimiter = ',')]
    pub has_symbols: Vec<String>,

    /// LAMMPS pair style(s) to match (e.g. eam/alloy)
    #[arg(short, long = "pair-style")]
    pub pair_styles: Vec<String>,

    /// Record status(es) to match
    #[arg(long = "status", value_enum, value_delimiter = ',', default_value = "active")]
    pub statuses: Vec<StatusFilter>,

    /// Record name(s) to match exactly
    #[arg(long = "name")]
    pub names: Vec<String>,

    /// LAMMPS potential key(s) to match exactly
    #[arg(long = "key")]
    pub keys: Vec<String>,

    /// LAMMPS potential id(s) to match exactly
    #[arg(long = "id")]
    pub ids: Vec<String>,

    /// Parent potential key(s) to match exactly
    #[arg(long = "potkey")]
    pub potkeys: Vec<String>,

    /// Parent potential id(s) to match exactly
    #[arg(long = "potid")]
    pub potids: Vec<String>,

    /// LAMMPS units style(s) to match (e.g. metal)
    #[arg(long = "units")]
    pub units: Vec<String>,

    /// LAMMPS atom_style(s) to match (e.g. atomic, charge)
    #[arg(long = "atom-style")]
    pub atom_styles: Vec<String>,

    /// Where LAMMPS will find the parameter files
    #[arg(long, value_enum, default_value = "working")]
    pub pot_dir_style: PotDirStyle,

    /// Select one potential among the matches by id
    #[arg(long, conflicts_with = "ids")]
    pub select: Option<String>,

    // ─────────────────────────────────────────────────────────────
    // 命令生成参数
    // ─────────────────────────────────────────────────────────────
    /// Atom-model symbols for the system's atom types, in type order (default: all)
    #[arg(long, value_delimiter = ',')]
    pub symbols: Vec<String>,

    /// Masses per atom type, same length as --symbols ('auto' = default mass)
    #[arg(long, value_delimiter = ',')]
    pub masses: Vec<String>,

    /// Omit the print commands describing the potential
    #[arg(long, default_value_t = false)]
    pub no_comments: bool,

    /// Prefix the commands with units/atom_style/boundary/read_data for this data file
    #[arg(long, conflicts_with = "restart_file")]
    pub data_file: Option<PathBuf>,

    /// Periodic boundary flags for --data-file (x,y,z)
    #[arg(long, value_delimiter = ',', default_values_t = [true, true, true])]
    pub pbc: Vec<bool>,

    /// Override the potential's units for --data-file
    #[arg(long, requires = "data_file")]
    pub data_units: Option<String>,

    /// Override the potential's atom_style for --data-file
    #[arg(long, requires = "data_file")]
    pub data_atom_style: Option<String>,

    /// Prefix the commands with read_restart for this restart file
    #[arg(long)]
    pub restart_file: Option<PathBuf>,

    /// Write the generated commands to a file instead of the terminal
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    // ─────────────────────────────────────────────────────────────
    // 列表参数
    // ─────────────────────────────────────────────────────────────
    /// Number of matches to print in the table
    #[arg(long, default_value_t = 25)]
    pub top_n: usize,

    /// Export the metadata of all matches to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl LammpsArgs {
    /// 构建查询条件，--select 取代 id 条件
    pub fn query(&self) -> LammpsQuery {
        let ids = match self.select {
            Some(ref id) => vec![id.clone()],
            None => self.ids.clone(),
        };

        LammpsQuery {
            names: self.names.clone(),
            keys: self.keys.clone(),
            ids,
            potids: self.potids.clone(),
            potkeys: self.potkeys.clone(),
            units: self.units.clone(),
            atom_styles: self.atom_styles.clone(),
            pair_styles: self.pair_styles.clone(),
            statuses: statuses(&self.statuses),
            elements: self.elements.clone(),
            symbols: self.has_symbols.clone(),
        }
    }

    /// 体系符号，未指定时为 None
    pub fn system_symbols(&self) -> Option<Vec<String>> {
        if self.symbols.is_empty() {
            None
        } else {
            Some(self.symbols.clone())
        }
    }

    /// 周期性边界
    pub fn pbc_flags(&self) -> Result<[bool; 3], String> {
        match self.pbc.as_slice() {
            [x, y, z] => Ok([*x, *y, *z]),
            other => Err(format!("--pbc needs three values, got {}", other.len())),
        }
    }
}

/// 解析质量列表（'auto' 或 '-' 表示使用默认质量）
pub fn parse_masses(inputs: &[String]) -> Result<Option<Vec<Option<f64>>>, String> {
    if inputs.is_empty() {
        return Ok(None);
    }

    inputs
        .iter()
        .map(|input| {
            let input = input.trim();
            if input.eq_ignore_ascii_case("auto") || input == "-" {
                Ok(None)
            } else {
                input.parse::<f64>().map(Some).map_err(|_| {
                    format!("Invalid mass '{}'. Use a number or 'auto'", input)
                })
            }
        })
        .collect::<Result<Vec<_>, String>>()
        .map(Some)
}
