//! # 记录文件收集器
//!
//! 根据记录目录和模式收集待加载的数据模型文件列表。
//!
//! ## 功能
//! - glob 模式匹配（逗号分隔的多模式）
//! - 只搜索记录目录本身，不进入参数文件子目录
//! - 结果按路径排序，保证加载顺序稳定
//!
//! ## 依赖关系
//! - 被 `database/mod.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{PotentialsError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 记录文件收集器
pub struct RecordCollector {
    /// 记录目录
    root: PathBuf,
    /// 匹配模式列表，空表示匹配全部文件
    patterns: Vec<glob::Pattern>,
}

impl RecordCollector {
    /// 创建新的收集器
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            patterns: vec![],
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        let patterns = pattern
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                glob::Pattern::new(s).map_err(|e| {
                    PotentialsError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        self.patterns = patterns;
        Ok(self)
    }

    /// 收集所有匹配的文件；目录不存在时返回空列表
    pub fn collect(&self) -> Vec<PathBuf> {
        if !self.root.is_dir() {
            return vec![];
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches_patterns(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// 检查文件是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.is_empty() || self.patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_json_sorted_top_level() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.json"), "{}").unwrap();

        let files = RecordCollector::new(dir.path())
            .with_pattern("*.json")
            .unwrap()
            .collect();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);

        // 不带模式时匹配全部文件，但不进入子目录
        let files = RecordCollector::new(dir.path()).collect();
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_collect_multi_pattern() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("b.xml"), "").unwrap();

        let files = RecordCollector::new(dir.path())
            .with_pattern("*.json, *.xml")
            .unwrap()
            .collect();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_collect_missing_dir() {
        let files = RecordCollector::new("/nonexistent/records").collect();
        assert!(files.is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(RecordCollector::new(".").with_pattern("[").is_err());
    }
}
