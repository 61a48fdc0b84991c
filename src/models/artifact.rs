//! # 文件附件 (artifact) 数据模型
//!
//! 描述势函数参数文件的下载信息。
//!
//! ## 依赖关系
//! - 被 `parsers/lammps.rs` 构造
//! - 被 `models/lammps.rs`, `lammps/` 使用

use serde::{Deserialize, Serialize};

/// 参数文件附件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// 文件名 (web-link.link-text)
    pub filename: Option<String>,

    /// 标签
    pub label: Option<String>,

    /// 下载地址
    pub url: Option<String>,
}
