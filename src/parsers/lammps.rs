//! # potential-LAMMPS 数据模型解析器
//!
//! ## 格式说明
//! ```text
//! {"potential-LAMMPS": {
//!     "key": "...", "id": "1999--Mishin-Y--Al--LAMMPS--ipr1",
//!     "potential": {"key": "...", "id": "1999--Mishin-Y--Al", "doi": "..."},
//!     "units": "metal", "atom_style": "atomic", "status": "active",
//!     "atom": [{"element": "Al", "symbol": "Al", "mass": 26.98}],
//!     "pair_style": {"type": "eam/alloy", "term": [...]},
//!     "pair_coeff": [{"interaction": {"symbol": ["Al", "Al"]}, "term": [...]}],
//!     "command": [{"term": [...]}],
//!     "artifact": [{"web-link": {"URL": "...", "label": "...", "link-text": "..."}}],
//!     "comments": "..."
//! }}
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 和 `database/` 使用
//! - 使用 `models/lammps.rs`, `models/artifact.rs`

use super::{
    as_list, contains_key, get_f64, get_string, get_string_list, is_true, load_root,
    read_json_file, record_name, scalar_to_string,
};
use crate::error::{PotentialsError, Result};
use crate::models::{Artifact, LammpsAtom, PairCoeff, PotentialLammps, Term};

use serde_json::Value;
use std::path::{Path, PathBuf};

const ROOT: &str = "potential-LAMMPS";

/// 解析 potential-LAMMPS 文件
pub fn parse_lammps_file(path: &Path) -> Result<PotentialLammps> {
    let content = read_json_file(path)?;
    parse_lammps_content(&content, record_name(path))
}

/// 从字符串内容解析 potential-LAMMPS 数据模型
pub fn parse_lammps_content(content: &str, name: &str) -> Result<PotentialLammps> {
    let pot = load_root(content, ROOT, name)?;

    let missing = |field: &str| PotentialsError::ParseError {
        style: ROOT.to_string(),
        path: name.to_string(),
        reason: format!("Missing '{}'", field),
    };

    let id = get_string(&pot, "id").ok_or_else(|| missing("id"))?;

    let pair_style_model = pot.get("pair_style").ok_or_else(|| missing("pair_style"))?;
    let pair_style = get_string(pair_style_model, "type").ok_or_else(|| missing("pair_style.type"))?;
    let pair_style_terms = parse_terms(pair_style_model.get("term"));

    let potential = pot.get("potential");
    let (potkey, potid, dois) = match potential {
        Some(p) => (
            get_string(p, "key"),
            get_string(p, "id"),
            get_string_list(p, "doi"),
        ),
        None => (None, None, vec![]),
    };

    let mut atoms = Vec::new();
    for atom in as_list(pot.get("atom")) {
        atoms.push(parse_atom(atom, &id, name)?);
    }

    let pair_coeffs = as_list(pot.get("pair_coeff"))
        .into_iter()
        .map(parse_pair_coeff)
        .collect();

    let commands = as_list(pot.get("command"))
        .into_iter()
        .map(|c| parse_terms(c.get("term")))
        .collect();

    let artifacts = as_list(pot.get("artifact"))
        .into_iter()
        .map(parse_artifact)
        .collect();

    Ok(PotentialLammps {
        name: name.to_string(),
        key: get_string(&pot, "key"),
        id,
        potkey,
        potid,
        dois,
        units: get_string(&pot, "units").unwrap_or_else(|| "metal".to_string()),
        atom_style: get_string(&pot, "atom_style").unwrap_or_else(|| "atomic".to_string()),
        status: get_string(&pot, "status"),
        pair_style,
        pair_style_terms,
        pair_coeffs,
        commands,
        atoms,
        artifacts,
        comments: get_string(&pot, "comments").unwrap_or_default(),
        pot_dir: PathBuf::new(),
    })
}

/// 解析原子模型
fn parse_atom(atom: &Value, record: &str, name: &str) -> Result<LammpsAtom> {
    let invalid = |reason: String| PotentialsError::ParseError {
        style: ROOT.to_string(),
        path: name.to_string(),
        reason,
    };

    let element = get_string(atom, "element");
    let symbol = get_string(atom, "symbol");
    let mass = get_f64(atom, "mass").map_err(invalid)?;
    let charge = get_f64(atom, "charge").map_err(invalid)?.unwrap_or(0.0);

    let field_error = |field: &str| PotentialsError::MissingAtomField {
        record: record.to_string(),
        field: field.to_string(),
    };

    let (element, symbol) = match (element, symbol) {
        (Some(element), Some(symbol)) => (element, symbol),
        (Some(element), None) => (element.clone(), element),
        (None, symbol) => {
            if mass.is_none() {
                return Err(field_error("mass"));
            }
            let symbol = symbol.ok_or_else(|| field_error("symbol"))?;
            (symbol.clone(), symbol)
        }
    };

    Ok(LammpsAtom {
        element,
        symbol,
        mass,
        charge,
    })
}

/// 解析 pair_coeff 行
fn parse_pair_coeff(coeff: &Value) -> PairCoeff {
    let interaction = coeff
        .get("interaction")
        .map(|i| get_string_list(i, "symbol"))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| vec!["*".to_string(), "*".to_string()]);

    PairCoeff {
        interaction,
        terms: parse_terms(coeff.get("term")),
        many_body: contains_key(coeff, "symbols"),
    }
}

/// 解析 term 列表，每个 term 对象可包含一个或多个键
fn parse_terms(terms: Option<&Value>) -> Vec<Term> {
    let mut parsed = Vec::new();

    for term in as_list(terms) {
        let Some(map) = term.as_object() else {
            continue;
        };
        for (ttype, tval) in map {
            let term = match ttype.as_str() {
                "option" => scalar_to_string(tval).map(Term::Option),
                "parameter" => scalar_to_string(tval).map(Term::Parameter),
                "file" => scalar_to_string(tval).map(Term::File),
                "symbolsList" => Some(Term::SymbolsList(is_true(tval))),
                "symbols" => Some(Term::Symbols(is_true(tval))),
                _ => None,
            };
            if let Some(term) = term {
                parsed.push(term);
            }
        }
    }

    parsed
}

/// 解析附件
fn parse_artifact(artifact: &Value) -> Artifact {
    let link = artifact.get("web-link").unwrap_or(artifact);
    Artifact {
        filename: get_string(link, "link-text"),
        label: get_string(link, "label"),
        url: get_string(link, "URL"),
    }
}
