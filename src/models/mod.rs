//! # 数据模型模块
//!
//! 定义势函数库中各类记录的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`database/`、`lammps/` 和 `commands/` 使用
//! - 子模块: artifact, elements, faq, lammps, potential

pub mod artifact;
pub mod elements;
pub mod faq;
pub mod lammps;
pub mod potential;

pub use artifact::Artifact;
pub use faq::Faq;
pub use lammps::{LammpsAtom, PairCoeff, PotentialLammps, Term};
pub use potential::{Author, Citation, Implementation, Potential};
