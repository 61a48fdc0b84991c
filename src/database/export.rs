//! # 元数据导出
//!
//! 将记录的扁平化元数据导出为 CSV 表格。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{PotentialsError, Result};

use serde::Serialize;
use std::path::Path;

/// 导出元数据行为 CSV（表头取自字段名），返回写入的行数
///
/// 没有行时不创建文件，返回 0。
pub fn metadata_to_csv<T: Serialize>(rows: &[T], output_path: &Path) -> Result<usize> {
    if rows.is_empty() {
        return Ok(0);
    }

    let mut wtr = csv::Writer::from_path(output_path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| PotentialsError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(rows.len())
}
