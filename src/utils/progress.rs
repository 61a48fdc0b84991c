//! # 进度条
//!
//! 记录库加载时的 `indicatif` 进度条。
//!
//! ## 依赖关系
//! - 被 `database/loader.rs` 使用

use indicatif::{ProgressBar, ProgressStyle};

/// 记录加载进度条
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=> "),
    );
    pb.set_message(message.to_string());
    pb
}
