//! # LAMMPS 势函数数据模型
//!
//! 对应 `potential-LAMMPS` 数据模型：pair_style / pair_coeff 定义、
//! 原子模型符号与质量、附加命令、参数文件附件。
//!
//! ## 符号规则
//! - 未给出 element 时，symbol 与 mass 必须给出，element 取 symbol
//! - 未给出 symbol 时，symbol 取 element
//!
//! ## 依赖关系
//! - 被 `parsers/lammps.rs` 构造
//! - 被 `lammps/`、`database/`、`commands/lammps.rs` 使用
//! - 使用 `models/elements.rs` 获取默认质量

use super::artifact::Artifact;
use super::elements;
use crate::error::{PotentialsError, Result};

use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::LazyLock;

/// 记录 id 开头的年份，如 `1999--Mishin-Y--Al--LAMMPS--ipr1`
static ID_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{4})--").unwrap());

/// 命令行组成项
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// 原样输出的选项
    Option(String),
    /// 原样输出的参数
    Parameter(String),
    /// 参数文件（输出时加 pot_dir 前缀）
    File(String),
    /// 输出同时属于系数与体系的符号
    SymbolsList(bool),
    /// 按体系符号顺序输出，不属于系数的符号输出 NULL
    Symbols(bool),
}

/// 一条 pair_coeff 定义
#[derive(Debug, Clone, PartialEq)]
pub struct PairCoeff {
    /// 作用的符号对，缺省为 `["*", "*"]`
    pub interaction: Vec<String>,
    pub terms: Vec<Term>,
    /// 是否包含 symbols 项（多体势）
    pub many_body: bool,
}

impl PairCoeff {
    /// 是否作用于体系中的全部原子
    pub fn is_all_atoms(&self) -> bool {
        self.interaction.len() == 2 && self.interaction.iter().all(|s| s == "*")
    }
}

/// 原子模型
#[derive(Debug, Clone, PartialEq)]
pub struct LammpsAtom {
    pub element: String,
    pub symbol: String,
    /// 显式给出的质量，None 时使用标准原子量
    pub mass: Option<f64>,
    pub charge: f64,
}

/// LAMMPS 势函数记录
#[derive(Debug, Clone)]
pub struct PotentialLammps {
    /// 记录名（文件名去扩展名）
    pub name: String,
    pub key: Option<String>,
    pub id: String,
    /// 对应 interatomic-potential 记录的 key
    pub potkey: Option<String>,
    /// 对应 interatomic-potential 记录的 id
    pub potid: Option<String>,
    pub dois: Vec<String>,
    pub units: String,
    pub atom_style: String,
    /// active / superseded / retracted，缺省视为 active
    pub status: Option<String>,
    pub pair_style: String,
    pub pair_style_terms: Vec<Term>,
    pub pair_coeffs: Vec<PairCoeff>,
    /// 附加命令，每条由若干项组成
    pub commands: Vec<Vec<Term>>,
    pub atoms: Vec<LammpsAtom>,
    pub artifacts: Vec<Artifact>,
    pub comments: String,
    /// 参数文件所在目录，空路径表示 LAMMPS 工作目录
    pub pot_dir: PathBuf,
}

/// 扁平化元数据（用于表格与 CSV 导出）
#[derive(Debug, Clone, Serialize)]
pub struct LammpsMetadata {
    pub name: String,
    pub key: String,
    pub id: String,
    pub potkey: String,
    pub potid: String,
    pub units: String,
    pub atom_style: String,
    pub pair_style: String,
    pub status: String,
    pub symbols: String,
    pub elements: String,
    pub dois: String,
    pub fileurls: String,
    pub comments: String,
}

impl PotentialLammps {
    /// 全部原子模型符号（按数据模型顺序）
    pub fn symbols(&self) -> Vec<String> {
        self.atoms.iter().map(|a| a.symbol.clone()).collect()
    }

    /// 记录状态，缺省为 active
    pub fn status_or_active(&self) -> &str {
        self.status.as_deref().unwrap_or("active")
    }

    /// 从 id 提取年份
    pub fn year(&self) -> Option<i32> {
        ID_YEAR
            .captures(&self.id)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// 参数文件下载地址
    pub fn fileurls(&self) -> Vec<String> {
        self.artifacts.iter().filter_map(|a| a.url.clone()).collect()
    }

    /// 检查符号均属于此势函数
    pub fn normalize_symbols(&self, symbols: &[String]) -> Result<Vec<String>> {
        for symbol in symbols {
            if !self.atoms.iter().any(|a| &a.symbol == symbol) {
                return Err(PotentialsError::UnknownSymbol {
                    symbol: symbol.clone(),
                    potential: self.id.clone(),
                });
            }
        }
        Ok(symbols.to_vec())
    }

    fn atom(&self, symbol: &str) -> Result<&LammpsAtom> {
        self.atoms
            .iter()
            .find(|a| a.symbol == symbol)
            .ok_or_else(|| PotentialsError::UnknownSymbol {
                symbol: symbol.to_string(),
                potential: self.id.clone(),
            })
    }

    fn resolve<'a>(&'a self, symbols: Option<&'a [String]>) -> Result<Vec<&'a LammpsAtom>> {
        match symbols {
            None => Ok(self.atoms.iter().collect()),
            Some(symbols) => symbols.iter().map(|s| self.atom(s)).collect(),
        }
    }

    /// 符号对应的元素
    pub fn elements(&self, symbols: Option<&[String]>) -> Result<Vec<String>> {
        Ok(self
            .resolve(symbols)?
            .into_iter()
            .map(|a| a.element.clone())
            .collect())
    }

    /// 符号对应的质量：显式质量优先，否则取元素标准原子量
    pub fn masses(&self, symbols: Option<&[String]>) -> Result<Vec<f64>> {
        self.resolve(symbols)?
            .into_iter()
            .map(|a| match a.mass {
                Some(mass) => Ok(mass),
                None => elements::atomic_mass(&a.element),
            })
            .collect()
    }

    /// 单个符号的质量
    pub fn mass(&self, symbol: &str) -> Result<f64> {
        let atom = self.atom(symbol)?;
        match atom.mass {
            Some(mass) => Ok(mass),
            None => elements::atomic_mass(&atom.element),
        }
    }

    /// 符号对应的电荷
    pub fn charges(&self, symbols: Option<&[String]>) -> Result<Vec<f64>> {
        Ok(self
            .resolve(symbols)?
            .into_iter()
            .map(|a| a.charge)
            .collect())
    }

    /// 生成扁平化元数据
    pub fn metadata(&self) -> LammpsMetadata {
        let elements: Vec<String> = self.atoms.iter().map(|a| a.element.clone()).collect();
        LammpsMetadata {
            name: self.name.clone(),
            key: self.key.clone().unwrap_or_default(),
            id: self.id.clone(),
            potkey: self.potkey.clone().unwrap_or_default(),
            potid: self.potid.clone().unwrap_or_default(),
            units: self.units.clone(),
            atom_style: self.atom_style.clone(),
            pair_style: self.pair_style.clone(),
            status: self.status_or_active().to_string(),
            symbols: self.symbols().join(" "),
            elements: elements.join(" "),
            dois: self.dois.join(" "),
            fileurls: self.fileurls().join(" "),
            comments: self.comments.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PotentialLammps {
        PotentialLammps {
            name: "test".to_string(),
            key: None,
            id: "2004--Mishin-Y--Ni-Al--LAMMPS--ipr1".to_string(),
            potkey: None,
            potid: Some("2004--Mishin-Y--Ni-Al".to_string()),
            dois: vec![],
            units: "metal".to_string(),
            atom_style: "atomic".to_string(),
            status: None,
            pair_style: "eam/alloy".to_string(),
            pair_style_terms: vec![],
            pair_coeffs: vec![],
            commands: vec![],
            atoms: vec![
                LammpsAtom {
                    element: "Ni".to_string(),
                    symbol: "Ni".to_string(),
                    mass: None,
                    charge: 0.0,
                },
                LammpsAtom {
                    element: "Al".to_string(),
                    symbol: "AlX".to_string(),
                    mass: Some(27.0),
                    charge: 1.5,
                },
            ],
            artifacts: vec![Artifact {
                url: Some("https://example.org/NiAl.eam.alloy".to_string()),
                ..Default::default()
            }],
            comments: String::new(),
            pot_dir: PathBuf::new(),
        }
    }

    #[test]
    fn test_symbols_and_elements() {
        let pot = sample();
        assert_eq!(pot.symbols(), vec!["Ni", "AlX"]);
        assert_eq!(
            pot.elements(Some(&["AlX".to_string()])).unwrap(),
            vec!["Al"]
        );
    }

    #[test]
    fn test_masses_default_and_explicit() {
        let pot = sample();
        let masses = pot.masses(None).unwrap();
        assert!((masses[0] - 58.6934).abs() < 1e-9);
        assert!((masses[1] - 27.0).abs() < 1e-9);
    }

    #[test]
    fn test_charges() {
        let pot = sample();
        assert_eq!(pot.charges(None).unwrap(), vec![0.0, 1.5]);
    }

    #[test]
    fn test_unknown_symbol() {
        let pot = sample();
        let result = pot.normalize_symbols(&["Cu".to_string()]);
        assert!(matches!(result, Err(PotentialsError::UnknownSymbol { .. })));
    }

    #[test]
    fn test_year_and_status() {
        let pot = sample();
        assert_eq!(pot.year(), Some(2004));
        assert_eq!(pot.status_or_active(), "active");
    }

    #[test]
    fn test_metadata_flattening() {
        let meta = sample().metadata();
        assert_eq!(meta.symbols, "Ni AlX");
        assert_eq!(meta.elements, "Ni Al");
        assert_eq!(meta.fileurls, "https://example.org/NiAl.eam.alloy");
        assert_eq!(meta.status, "active");
    }
}
