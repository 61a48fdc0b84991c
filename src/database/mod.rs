//! # 本地记录库模块
//!
//! 从本地目录加载势函数记录并按条件筛选。
//!
//! ## 目录结构
//! ```text
//! <local_dir>/
//!   ├── Potential/              interatomic-potential 记录 (*.json)
//!   ├── potential_LAMMPS/       potential-LAMMPS 记录 (*.json)
//!   │     └── <id>/             该势函数的参数文件
//!   └── FAQ/                    FAQ 记录 (*.json)
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `parsers/` 解析记录，`models/` 数据模型
//! - 子模块: collector, export, loader, query

pub mod collector;
pub mod export;
pub mod loader;
pub mod query;

pub use collector::RecordCollector;
pub use export::metadata_to_csv;
pub use loader::RecordLoader;
pub use query::{FaqQuery, LammpsQuery, PotentialQuery};

use crate::error::{PotentialsError, Result};
use crate::models::{Faq, Potential, PotentialLammps};
use crate::parsers;
use crate::utils::output;

use clap::ValueEnum;
use std::fs;
use std::path::{Path, PathBuf};

/// 记录文件匹配模式
const RECORD_PATTERN: &str = "*.json";

/// 记录类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStyle {
    Potential,
    PotentialLammps,
    Faq,
}

impl RecordStyle {
    /// 记录子目录名
    pub fn dir_name(&self) -> &'static str {
        match self {
            RecordStyle::Potential => "Potential",
            RecordStyle::PotentialLammps => "potential_LAMMPS",
            RecordStyle::Faq => "FAQ",
        }
    }
}

impl std::fmt::Display for RecordStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// LAMMPS 参数文件位置
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum PotDirStyle {
    /// Parameter files are in the LAMMPS working directory
    #[default]
    Working,
    /// Parameter files are in a directory named after the potential id
    Id,
    /// Parameter files are in the local library's potential_LAMMPS/<id> directory
    Local,
}

impl std::fmt::Display for PotDirStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PotDirStyle::Working => write!(f, "working"),
            PotDirStyle::Id => write!(f, "id"),
            PotDirStyle::Local => write!(f, "local"),
        }
    }
}

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 本地记录库目录
    pub local_dir: PathBuf,
    /// 是否访问远程库（不支持）
    pub remote: bool,
    /// 并行作业数（0 = 自动）
    pub jobs: usize,
    /// 输出加载细节
    pub verbose: bool,
}

impl DatabaseConfig {
    pub fn new(local_dir: impl Into<PathBuf>) -> Self {
        DatabaseConfig {
            local_dir: local_dir.into(),
            remote: false,
            jobs: 0,
            verbose: false,
        }
    }
}

/// 本地记录库
pub struct Database {
    config: DatabaseConfig,
}

impl Database {
    /// 打开本地记录库
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.remote {
            return Err(PotentialsError::RemoteUnsupported);
        }
        if !config.local_dir.is_dir() {
            return Err(PotentialsError::DirectoryNotFound {
                path: config.local_dir.display().to_string(),
            });
        }
        Ok(Database { config })
    }

    /// 本地记录库目录
    pub fn local_dir(&self) -> &Path {
        &self.config.local_dir
    }

    /// 某类记录所在目录
    pub fn style_dir(&self, style: RecordStyle) -> PathBuf {
        self.config.local_dir.join(style.dir_name())
    }

    /// 加载某类记录的全部文件
    fn load_style<T, F>(&self, style: RecordStyle, parser: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&Path) -> Result<T> + Sync + Send,
    {
        let dir = self.style_dir(style);
        let files = RecordCollector::new(&dir)
            .with_pattern(RECORD_PATTERN)?
            .collect();

        if files.is_empty() {
            if self.config.verbose {
                output::print_warning(&format!("No {} records found in '{}'", style, dir.display()));
            }
            return Ok(vec![]);
        }

        let loader = RecordLoader::new(self.config.jobs);
        let result = loader.load(&files, &format!("Loading {}", style), parser)?;

        if self.config.verbose {
            output::print_info(&format!(
                "Loaded {} of {} {} records from '{}'",
                result.records.len(),
                result.total(),
                style,
                dir.display()
            ));
            for (path, err) in result.failures.iter().take(10) {
                output::print_warning(&format!("Skipped {}: {}", path, err));
            }
            if result.failures.len() > 10 {
                output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
            }
        }

        Ok(result.records)
    }

    /// 获取 interatomic-potential 记录
    pub fn get_potentials(&self, query: &PotentialQuery) -> Result<Vec<Potential>> {
        let mut records = self.load_style(RecordStyle::Potential, parsers::potential::parse_potential_file)?;
        records.retain(|pot| query.matches(pot));
        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records)
    }

    /// 获取 potential-LAMMPS 记录，并按 pot_dir_style 设置参数文件目录
    pub fn get_lammps_potentials(
        &self,
        query: &LammpsQuery,
        pot_dir_style: PotDirStyle,
    ) -> Result<Vec<PotentialLammps>> {
        let mut records = self.load_style(RecordStyle::PotentialLammps, parsers::lammps::parse_lammps_file)?;
        records.retain(|pot| query.matches(pot));
        records.sort_by(|a, b| a.name.cmp(&b.name));

        for pot in &mut records {
            pot.pot_dir = self.pot_dir(&pot.id, pot_dir_style);
        }

        Ok(records)
    }

    /// 获取唯一匹配的 potential-LAMMPS 记录
    pub fn get_lammps_potential(
        &self,
        query: &LammpsQuery,
        pot_dir_style: PotDirStyle,
    ) -> Result<PotentialLammps> {
        let mut records = self.get_lammps_potentials(query, pot_dir_style)?;
        match records.len() {
            0 => Err(PotentialsError::NoMatchingRecord {
                style: RecordStyle::PotentialLammps.to_string(),
            }),
            1 => Ok(records.remove(0)),
            count => Err(PotentialsError::MultipleMatchingRecords {
                style: RecordStyle::PotentialLammps.to_string(),
                count,
            }),
        }
    }

    /// 参数文件目录
    pub fn pot_dir(&self, id: &str, style: PotDirStyle) -> PathBuf {
        match style {
            PotDirStyle::Working => PathBuf::new(),
            PotDirStyle::Id => PathBuf::from(id),
            PotDirStyle::Local => self.style_dir(RecordStyle::PotentialLammps).join(id),
        }
    }

    /// 获取 FAQ 记录
    pub fn get_faqs(&self, query: &FaqQuery) -> Result<Vec<Faq>> {
        let mut records = self.load_style(RecordStyle::Faq, parsers::faq::parse_faq_file)?;
        records.retain(|faq| query.matches(faq));
        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records)
    }

    /// 保存 FAQ 记录，返回写入路径
    pub fn save_faq(&self, faq: &Faq, overwrite: bool) -> Result<PathBuf> {
        if faq.name.trim().is_empty() {
            return Err(PotentialsError::InvalidArgument(
                "FAQ record name must not be empty".to_string(),
            ));
        }
        // 记录名须为单个文件名，不能跳出 FAQ 目录
        if Path::new(&faq.name).file_name().and_then(|n| n.to_str()) != Some(faq.name.as_str()) {
            return Err(PotentialsError::InvalidArgument(format!(
                "FAQ record name '{}' must be a plain file name",
                faq.name
            )));
        }

        let dir = self.style_dir(RecordStyle::Faq);
        fs::create_dir_all(&dir).map_err(|e| PotentialsError::FileWriteError {
            path: dir.display().to_string(),
            source: e,
        })?;

        let path = dir.join(format!("{}.json", faq.name));
        if path.exists() && !overwrite {
            return Err(PotentialsError::RecordExists {
                path: path.display().to_string(),
            });
        }

        let content = parsers::faq::to_faq_string(faq)?;
        fs::write(&path, content).map_err(|e| PotentialsError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(path)
    }
}
