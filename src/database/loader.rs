//! # 并行记录加载器
//!
//! 并行解析记录文件。
//!
//! ## 功能
//! - 基于 rayon 的并行解析
//! - 进度条显示
//! - 解析失败收集与汇总
//!
//! ## 依赖关系
//! - 被 `database/mod.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行解析

use crate::error::{PotentialsError, Result};
use crate::utils::progress;

use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 批量加载结果
#[derive(Debug)]
pub struct LoadResult<T> {
    /// 成功解析的记录（与输入文件顺序一致）
    pub records: Vec<T>,
    /// 失败详情 (文件路径, 错误信息)
    pub failures: Vec<(String, String)>,
}

impl<T> LoadResult<T> {
    /// 总处理数量
    pub fn total(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// 并行加载器
pub struct RecordLoader {
    /// 并行作业数
    jobs: usize,
}

impl RecordLoader {
    /// 创建新的加载器，0 表示使用全部 CPU
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行解析文件列表
    pub fn load<T, F>(&self, files: &[PathBuf], label: &str, parser: F) -> Result<LoadResult<T>>
    where
        T: Send,
        F: Fn(&Path) -> Result<T> + Sync + Send,
    {
        let pb = progress::create_progress_bar(files.len() as u64, label);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| PotentialsError::Other(format!("Failed to build thread pool: {}", e)))?;

        let parsed: Vec<(String, Result<T>)> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    let result = parser(file);
                    pb.inc(1);
                    (file.display().to_string(), result)
                })
                .collect()
        });

        pb.finish_and_clear();

        let mut result = LoadResult {
            records: Vec::with_capacity(parsed.len()),
            failures: Vec::new(),
        };
        for (path, record) in parsed {
            match record {
                Ok(record) => result.records.push(record),
                Err(e) => result.failures.push((path, e.to_string())),
            }
        }

        Ok(result)
    }
}
