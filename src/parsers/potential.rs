//! # interatomic-potential 数据模型解析器
//!
//! ## 格式说明
//! ```text
//! {"interatomic-potential": {
//!     "key": "...", "id": "2009--Mendelev-M-I--Al-Mg",
//!     "description": {
//!         "citation": [{"title": "...", "DOI": "...", "publication-name": "...",
//!                       "publication-date": {"year": 2009},
//!                       "author": [{"given-name": "M.I.", "surname": "Mendelev"}]}],
//!         "notes": {"text": "..."}
//!     },
//!     "element": ["Al", "Mg"],
//!     "fictional-element": [], "other-element": [],
//!     "implementation": [{"key": "...", "id": "...", "status": "active", "type": "eam/fs", "date": "..."}]
//! }}
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 和 `database/` 使用
//! - 使用 `models/potential.rs`

use super::{as_list, get_string, get_string_list, load_root, read_json_file, record_name};
use crate::error::{PotentialsError, Result};
use crate::models::{Author, Citation, Implementation, Potential};

use serde_json::Value;
use std::path::Path;

const ROOT: &str = "interatomic-potential";

/// 解析 interatomic-potential 文件
pub fn parse_potential_file(path: &Path) -> Result<Potential> {
    let content = read_json_file(path)?;
    parse_potential_content(&content, record_name(path))
}

/// 从字符串内容解析 interatomic-potential 数据模型
pub fn parse_potential_content(content: &str, name: &str) -> Result<Potential> {
    let pot = load_root(content, ROOT, name)?;

    let id = get_string(&pot, "id").ok_or_else(|| PotentialsError::ParseError {
        style: ROOT.to_string(),
        path: name.to_string(),
        reason: "Missing 'id'".to_string(),
    })?;

    let description = pot.get("description");

    let citations = description
        .map(|d| as_list(d.get("citation")).into_iter().map(parse_citation).collect())
        .unwrap_or_default();

    let notes = description
        .and_then(|d| d.get("notes"))
        .and_then(|n| get_string(n, "text"));

    let implementations = as_list(pot.get("implementation"))
        .into_iter()
        .map(|i| Implementation {
            key: get_string(i, "key"),
            id: get_string(i, "id"),
            status: get_string(i, "status"),
            impl_type: get_string(i, "type"),
            date: get_string(i, "date"),
        })
        .collect();

    Ok(Potential {
        name: name.to_string(),
        key: get_string(&pot, "key"),
        id,
        elements: get_string_list(&pot, "element"),
        fictional_elements: get_string_list(&pot, "fictional-element"),
        other_elements: get_string_list(&pot, "other-element"),
        citations,
        notes,
        implementations,
    })
}

/// 解析引用文献
fn parse_citation(citation: &Value) -> Citation {
    let year = citation
        .get("publication-date")
        .and_then(|d| get_string(d, "year"))
        .and_then(|y| y.trim().parse().ok());

    let authors = as_list(citation.get("author"))
        .into_iter()
        .filter_map(|a| {
            get_string(a, "surname").map(|surname| Author {
                given_name: get_string(a, "given-name"),
                surname,
            })
        })
        .collect();

    Citation {
        title: get_string(citation, "title"),
        doi: get_string(citation, "DOI"),
        publication_name: get_string(citation, "publication-name"),
        year,
        authors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_potential_basic() {
        let content = r#"{
    "interatomic-potential": {
        "key": "k1",
        "id": "2009--Mendelev-M-I--Al-Mg",
        "description": {
            "citation": {
                "title": "Development of interatomic potentials appropriate for simulation of solid-liquid interface properties in Al-Mg alloys",
                "DOI": "10.1080/14786430903260727",
                "publication-name": "Philosophical Magazine",
                "publication-date": {"year": 2009},
                "author": [
                    {"given-name": "M.I.", "surname": "Mendelev"},
                    {"given-name": "M.", "surname": "Asta"}
                ]
            },
            "notes": {"text": "Fitted to liquid data."}
        },
        "element": ["Al", "Mg"],
        "implementation": [
            {"key": "i1", "id": "2009--Mendelev-M-I--Al-Mg--LAMMPS--ipr1", "status": "active", "type": "eam/fs"}
        ]
    }
}"#;
        let pot = parse_potential_content(content, "potential.test").unwrap();
        assert_eq!(pot.id, "2009--Mendelev-M-I--Al-Mg");
        assert_eq!(pot.elements, vec!["Al", "Mg"]);
        assert_eq!(pot.year(), Some(2009));
        assert_eq!(pot.authors(), vec!["Mendelev", "Asta"]);
        assert_eq!(pot.notes.as_deref(), Some("Fitted to liquid data."));
        assert_eq!(pot.implementations[0].impl_type.as_deref(), Some("eam/fs"));
    }

    #[test]
    fn test_parse_potential_string_year_and_single_element() {
        let content = r#"{"interatomic-potential": {
            "id": "1987--Foo-B--Cu",
            "element": "Cu",
            "description": {"citation": {"publication-date": {"year": "1987"}}}
        }}"#;
        let pot = parse_potential_content(content, "test").unwrap();
        assert_eq!(pot.elements, vec!["Cu"]);
        assert_eq!(pot.year(), Some(1987));
        assert!(pot.authors().is_empty());
    }

    #[test]
    fn test_parse_potential_missing_id() {
        let content = r#"{"interatomic-potential": {"element": "Cu"}}"#;
        assert!(parse_potential_content(content, "test").is_err());
    }
}
