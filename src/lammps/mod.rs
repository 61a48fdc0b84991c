//! # LAMMPS 输入命令生成模块
//!
//! 根据 potential-LAMMPS 记录生成 LAMMPS 输入脚本中的势函数相关命令。
//!
//! ## 功能
//! - print 注释（势函数说明、DOI、参数文件下载地址）
//! - pair_style / pair_coeff / mass / 附加命令
//! - 带 read_data 或 read_restart 的脚本片段
//!
//! ## 依赖关系
//! - 被 `commands/lammps.rs` 调用
//! - 使用 `models/lammps.rs`
//! - 子模块: pair_info, scripts

pub mod pair_info;
pub mod scripts;

pub use pair_info::{format_float, pair_info, PairInfoOptions};
pub use scripts::{pair_data_info, pair_restart_info, DataFileOptions};
