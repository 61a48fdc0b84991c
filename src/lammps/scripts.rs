//! # 完整输入脚本片段
//!
//! 在 pair_info 前加上读取数据文件或重启文件所需的命令。
//!
//! ## 依赖关系
//! - 被 `commands/lammps.rs` 调用
//! - 使用 `lammps/pair_info.rs`

use super::pair_info::{pair_info, PairInfoOptions};
use crate::error::Result;
use crate::models::PotentialLammps;

use std::path::Path;

/// 数据文件脚本选项
#[derive(Debug, Clone)]
pub struct DataFileOptions<'a> {
    /// 三个方向的周期性边界
    pub pbc: [bool; 3],
    /// 覆盖势函数默认的 units
    pub units: Option<&'a str>,
    /// 覆盖势函数默认的 atom_style
    pub atom_style: Option<&'a str>,
}

impl Default for DataFileOptions<'_> {
    fn default() -> Self {
        DataFileOptions {
            pbc: [true, true, true],
            units: None,
            atom_style: None,
        }
    }
}

/// 势函数 + read_data 命令
pub fn pair_data_info(
    pot: &PotentialLammps,
    data_file: &Path,
    data: &DataFileOptions<'_>,
    options: &PairInfoOptions,
) -> Result<String> {
    let units = data.units.unwrap_or(&pot.units);
    let atom_style = data.atom_style.unwrap_or(&pot.atom_style);

    let flags: Vec<&str> = data
        .pbc
        .iter()
        .map(|&periodic| if periodic { "p" } else { "m" })
        .collect();

    let mut info = String::new();
    info.push_str(&format!("units {}\n", units));
    info.push_str(&format!("atom_style {}\n\n", atom_style));
    info.push_str(&format!("boundary {}\n", flags.join(" ")));
    info.push_str(&format!("read_data {}\n", data_file.display()));
    info.push('\n');
    info.push_str(&pair_info(pot, options)?);

    Ok(info)
}

/// 势函数 + read_restart 命令
pub fn pair_restart_info(
    pot: &PotentialLammps,
    restart_file: &Path,
    options: &PairInfoOptions,
) -> Result<String> {
    let mut info = String::new();
    info.push_str("# Script prepared using the potentials toolkit\n\n");
    info.push_str(&format!("read_restart {}\n", restart_file.display()));
    info.push('\n');
    info.push_str(&pair_info(pot, options)?);

    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::lammps::parse_lammps_content;

    const LJ: &str = r#"{"potential-LAMMPS": {
        "id": "lj--LAMMPS--ipr1",
        "units": "lj", "atom_style": "atomic",
        "atom": {"symbol": "A", "mass": 1.0},
        "pair_style": {"type": "lj/cut", "term": {"parameter": 2.5}},
        "pair_coeff": {"interaction": {"symbol": ["A", "A"]}, "term": [{"parameter": 1.0}, {"parameter": 1.0}]}
    }}"#;

    #[test]
    fn test_pair_data_info() {
        let pot = parse_lammps_content(LJ, "lj").unwrap();
        let data = DataFileOptions {
            pbc: [true, true, false],
            ..Default::default()
        };
        let info = pair_data_info(&pot, Path::new("system.dat"), &data, &PairInfoOptions::default())
            .unwrap();
        assert_eq!(
            info,
            "units lj\n\
             atom_style atomic\n\n\
             boundary p p m\n\
             read_data system.dat\n\n\
             pair_style lj/cut 2.5\n\
             pair_coeff 1 1 1.0 1.0\n\
             mass 1 1.0\n\n"
        );
    }

    #[test]
    fn test_pair_data_info_overrides() {
        let pot = parse_lammps_content(LJ, "lj").unwrap();
        let data = DataFileOptions {
            units: Some("real"),
            atom_style: Some("charge"),
            ..Default::default()
        };
        let info = pair_data_info(&pot, Path::new("x.dat"), &data, &PairInfoOptions::default())
            .unwrap();
        assert!(info.starts_with("units real\natom_style charge\n\nboundary p p p\n"));
    }

    #[test]
    fn test_pair_restart_info() {
        let pot = parse_lammps_content(LJ, "lj").unwrap();
        let info = pair_restart_info(&pot, Path::new("run.restart"), &PairInfoOptions::default())
            .unwrap();
        assert!(info.starts_with("# Script prepared using the potentials toolkit\n\nread_restart run.restart\n\npair_style lj/cut 2.5\n"));
    }
}
