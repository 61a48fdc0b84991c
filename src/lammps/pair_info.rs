//! # pair_style / pair_coeff / mass 命令生成
//!
//! ## 输出顺序
//! 1. print 注释（可选）：comments、DOI、参数文件下载地址
//! 2. `pair_style`
//! 3. `pair_coeff`：`* *` 全原子行、多体势行（其后空一行）、`eam` 的 i==i 行、其余 i<=j 对势行
//! 4. `mass`，随后一个空行
//! 5. 附加命令
//!
//! ## 依赖关系
//! - 被 `lammps/scripts.rs` 和 `commands/lammps.rs` 调用
//! - 使用 `models/lammps.rs`

use crate::error::{PotentialsError, Result};
use crate::models::{PotentialLammps, Term};

use std::path::Path;

/// pair_info 选项
#[derive(Debug, Clone)]
pub struct PairInfoOptions {
    /// 体系中各原子类型对应的符号，None 表示全部符号
    pub symbols: Option<Vec<String>>,
    /// 覆盖默认质量，长度须与 symbols 相同；None 项使用默认值
    pub masses: Option<Vec<Option<f64>>>,
    /// 是否输出 print 注释
    pub comments: bool,
}

impl Default for PairInfoOptions {
    fn default() -> Self {
        PairInfoOptions {
            symbols: None,
            masses: None,
            comments: true,
        }
    }
}

/// 浮点数格式：最短表示，整数值保留一位小数
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// 生成势函数信息的 LAMMPS print 命令
pub fn print_comments(pot: &PotentialLammps) -> String {
    let mut out = String::new();

    for line in pot.comments.split('\n') {
        if !line.is_empty() {
            out.push_str(&format!("print \"{}\"\n", line));
        }
    }

    if !pot.dois.is_empty() {
        out.push_str("print \"Publication(s) related to the potential:\"\n");
        for doi in &pot.dois {
            out.push_str(&format!("print \"https://doi.org/{}\"\n", doi));
        }
    }

    let urls = pot.fileurls();
    if !urls.is_empty() {
        out.push_str("print \"Parameter file(s) can be downloaded at:\"\n");
        for url in &urls {
            out.push_str(&format!("print \"{}\"\n", url));
        }
    }

    out
}

/// 生成势函数对应的 LAMMPS 输入命令
pub fn pair_info(pot: &PotentialLammps, options: &PairInfoOptions) -> Result<String> {
    let symbols = match &options.symbols {
        Some(symbols) => pot.normalize_symbols(symbols)?,
        None => pot.symbols(),
    };

    if symbols.is_empty() {
        return Err(PotentialsError::InvalidArgument(format!(
            "No atom-model symbols given for potential '{}'",
            pot.id
        )));
    }

    let masses = resolve_masses(pot, &symbols, options.masses.as_deref())?;
    let all_symbols = pot.symbols();

    let mut info = String::new();

    if options.comments {
        info.push_str(&print_comments(pot));
    }

    let style_terms = pair_terms(&pot.pot_dir, &pot.pair_style_terms, &[], &[]);
    info.push_str(&format!("pair_style {}{}\n", pot.pair_style, style_terms));

    for coeff in &pot.pair_coeffs {
        // 全原子行始终输出
        if coeff.is_all_atoms() {
            let terms = pair_terms(&pot.pot_dir, &coeff.terms, &symbols, &all_symbols);
            info.push_str(&format!("pair_coeff * *{}\n", terms));
            continue;
        }

        let coeff_symbols = &coeff.interaction;

        // 多体势行后跟一个空行
        if coeff.many_body {
            let terms = pair_terms(&pot.pot_dir, &coeff.terms, &symbols, coeff_symbols);
            info.push_str(&format!("pair_coeff * *{}\n\n", terms));
            continue;
        }

        if coeff_symbols.len() != 2 {
            return Err(PotentialsError::PairCoeffMismatch {
                potential: pot.id.clone(),
                reason: "pair potential interactions need two listed symbols".to_string(),
            });
        }

        let terms = pair_terms(&pot.pot_dir, &coeff.terms, &symbols, coeff_symbols);

        if pot.pair_style == "eam" {
            if coeff_symbols[0] != coeff_symbols[1] {
                return Err(PotentialsError::PairCoeffMismatch {
                    potential: pot.id.clone(),
                    reason: "only i==j interactions allowed for eam style".to_string(),
                });
            }
            for (i, symbol) in symbols.iter().enumerate() {
                if *symbol == coeff_symbols[0] {
                    info.push_str(&format!("pair_coeff {} {}{}\n", i + 1, i + 1, terms));
                }
            }
        } else {
            for i in 0..symbols.len() {
                for j in i..symbols.len() {
                    let forward = symbols[i] == coeff_symbols[0] && symbols[j] == coeff_symbols[1];
                    let reverse = symbols[i] == coeff_symbols[1] && symbols[j] == coeff_symbols[0];
                    if forward || reverse {
                        info.push_str(&format!("pair_coeff {} {}{}\n", i + 1, j + 1, terms));
                    }
                }
            }
        }
    }

    for (i, mass) in masses.iter().enumerate() {
        info.push_str(&format!("mass {} {}\n", i + 1, format_float(*mass)));
    }
    info.push('\n');

    for command in &pot.commands {
        let line = pair_terms(&pot.pot_dir, command, &symbols, &all_symbols);
        info.push_str(line.trim());
        info.push('\n');
    }

    Ok(info)
}

/// 确定各原子类型的质量
fn resolve_masses(
    pot: &PotentialLammps,
    symbols: &[String],
    masses: Option<&[Option<f64>]>,
) -> Result<Vec<f64>> {
    match masses {
        Some(masses) if masses.len() != symbols.len() => Err(PotentialsError::MassCountMismatch {
            masses: masses.len(),
            symbols: symbols.len(),
        }),
        Some(masses) => symbols
            .iter()
            .zip(masses)
            .map(|(symbol, mass)| match mass {
                Some(mass) => Ok(*mass),
                None => pot.mass(symbol),
            })
            .collect(),
        None => symbols.iter().map(|s| pot.mass(s)).collect(),
    }
}

/// 由 term 列表拼接命令行片段（每项以空格开头）
fn pair_terms(
    pot_dir: &Path,
    terms: &[Term],
    system_symbols: &[String],
    coeff_symbols: &[String],
) -> String {
    let mut line = String::new();

    for term in terms {
        match term {
            Term::Option(value) | Term::Parameter(value) => {
                line.push(' ');
                line.push_str(value);
            }
            Term::File(file) => {
                line.push(' ');
                line.push_str(&pot_dir.join(file).display().to_string());
            }
            Term::SymbolsList(true) => {
                for symbol in coeff_symbols {
                    if system_symbols.contains(symbol) {
                        line.push(' ');
                        line.push_str(symbol);
                    }
                }
            }
            Term::Symbols(true) => {
                for symbol in system_symbols {
                    line.push(' ');
                    if coeff_symbols.contains(symbol) {
                        line.push_str(symbol);
                    } else {
                        line.push_str("NULL");
                    }
                }
            }
            Term::SymbolsList(false) | Term::Symbols(false) => {}
        }
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Artifact, LammpsAtom, PairCoeff};
    use std::path::PathBuf;

    fn atom(symbol: &str, mass: Option<f64>) -> LammpsAtom {
        LammpsAtom {
            element: symbol.to_string(),
            symbol: symbol.to_string(),
            mass,
            charge: 0.0,
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn base(pair_style: &str, atoms: Vec<LammpsAtom>, pair_coeffs: Vec<PairCoeff>) -> PotentialLammps {
        PotentialLammps {
            name: "test".to_string(),
            key: None,
            id: "test--LAMMPS--ipr1".to_string(),
            potkey: None,
            potid: None,
            dois: vec![],
            units: "metal".to_string(),
            atom_style: "atomic".to_string(),
            status: None,
            pair_style: pair_style.to_string(),
            pair_style_terms: vec![],
            pair_coeffs,
            commands: vec![],
            atoms,
            artifacts: vec![],
            comments: String::new(),
            pot_dir: PathBuf::new(),
        }
    }

    fn eam_alloy() -> PotentialLammps {
        let coeff = PairCoeff {
            interaction: strings(&["*", "*"]),
            terms: vec![Term::File("NiAl.eam.alloy".to_string()), Term::Symbols(true)],
            many_body: true,
        };
        let mut pot = base(
            "eam/alloy",
            vec![atom("Ni", None), atom("Al", Some(26.982))],
            vec![coeff],
        );
        pot.comments = "Mishin Ni-Al\n\nsecond line".to_string();
        pot.dois = strings(&["10.1016/j.actamat.2004.05.002"]);
        pot.artifacts = vec![Artifact {
            url: Some("https://example.org/NiAl.eam.alloy".to_string()),
            ..Default::default()
        }];
        pot
    }

    #[test]
    fn test_pair_info_eam_alloy_all_symbols() {
        let pot = eam_alloy();
        let options = PairInfoOptions {
            comments: false,
            ..Default::default()
        };
        let info = pair_info(&pot, &options).unwrap();
        assert_eq!(
            info,
            "pair_style eam/alloy\n\
             pair_coeff * * NiAl.eam.alloy Ni Al\n\
             mass 1 58.6934\n\
             mass 2 26.982\n\n"
        );
    }

    #[test]
    fn test_pair_info_subset_and_pot_dir() {
        let mut pot = eam_alloy();
        pot.pot_dir = PathBuf::from("potdir");
        let options = PairInfoOptions {
            symbols: Some(strings(&["Al", "Al"])),
            masses: None,
            comments: false,
        };
        let info = pair_info(&pot, &options).unwrap();
        assert!(info.contains("pair_coeff * * potdir/NiAl.eam.alloy Al Al\n"));
        assert!(info.contains("mass 1 26.982\nmass 2 26.982\n"));
    }

    #[test]
    fn test_pair_info_comments() {
        let pot = eam_alloy();
        let info = pair_info(&pot, &PairInfoOptions::default()).unwrap();
        let expected_head = "print \"Mishin Ni-Al\"\n\
                             print \"second line\"\n\
                             print \"Publication(s) related to the potential:\"\n\
                             print \"https://doi.org/10.1016/j.actamat.2004.05.002\"\n\
                             print \"Parameter file(s) can be downloaded at:\"\n\
                             print \"https://example.org/NiAl.eam.alloy\"\n\
                             pair_style eam/alloy\n";
        assert!(info.starts_with(expected_head), "{}", info);
    }

    #[test]
    fn test_pair_info_pair_potential_ordering() {
        let coeffs = vec![
            PairCoeff {
                interaction: strings(&["A", "A"]),
                terms: vec![Term::Parameter("1.0".to_string()), Term::Parameter("1.0".to_string())],
                many_body: false,
            },
            PairCoeff {
                interaction: strings(&["B", "A"]),
                terms: vec![Term::Parameter("0.5".to_string()), Term::Parameter("1.1".to_string())],
                many_body: false,
            },
        ];
        let mut pot = base(
            "lj/cut",
            vec![atom("A", Some(10.0)), atom("B", Some(20.0))],
            coeffs,
        );
        pot.pair_style_terms = vec![Term::Parameter("2.5".to_string())];

        let options = PairInfoOptions {
            symbols: Some(strings(&["A", "B", "A"])),
            masses: Some(vec![None, Some(21.5), None]),
            comments: false,
        };
        let info = pair_info(&pot, &options).unwrap();
        assert_eq!(
            info,
            "pair_style lj/cut 2.5\n\
             pair_coeff 1 1 1.0 1.0\n\
             pair_coeff 1 3 1.0 1.0\n\
             pair_coeff 3 3 1.0 1.0\n\
             pair_coeff 1 2 0.5 1.1\n\
             pair_coeff 2 3 0.5 1.1\n\
             mass 1 10.0\n\
             mass 2 21.5\n\
             mass 3 10.0\n\n"
        );
    }

    #[test]
    fn test_pair_info_classic_eam() {
        let coeffs = vec![PairCoeff {
            interaction: strings(&["Cu", "Cu"]),
            terms: vec![Term::File("Cu_u3.eam".to_string())],
            many_body: false,
        }];
        let pot = base("eam", vec![atom("Cu", None), atom("Ag", None)], coeffs);
        let options = PairInfoOptions {
            symbols: Some(strings(&["Ag", "Cu"])),
            masses: None,
            comments: false,
        };
        let info = pair_info(&pot, &options).unwrap();
        assert!(info.contains("pair_coeff 2 2 Cu_u3.eam\n"));
        assert!(!info.contains("pair_coeff 1 1"));
    }

    #[test]
    fn test_pair_info_classic_eam_rejects_cross_terms() {
        let coeffs = vec![PairCoeff {
            interaction: strings(&["Cu", "Ag"]),
            terms: vec![],
            many_body: false,
        }];
        let pot = base("eam", vec![atom("Cu", None), atom("Ag", None)], coeffs);
        let options = PairInfoOptions {
            comments: false,
            ..Default::default()
        };
        assert!(matches!(
            pair_info(&pot, &options),
            Err(PotentialsError::PairCoeffMismatch { .. })
        ));
    }

    #[test]
    fn test_pair_info_many_body_interaction() {
        let coeffs = vec![
            PairCoeff {
                interaction: strings(&["*", "*"]),
                terms: vec![Term::Option("hybrid-base".to_string())],
                many_body: false,
            },
            PairCoeff {
                interaction: strings(&["Si", "C"]),
                terms: vec![
                    Term::Option("tersoff".to_string()),
                    Term::File("SiC.tersoff".to_string()),
                    Term::Symbols(true),
                ],
                many_body: true,
            },
        ];
        let pot = base(
            "hybrid",
            vec![atom("Si", None), atom("C", None), atom("H", None)],
            coeffs,
        );
        let options = PairInfoOptions {
            symbols: Some(strings(&["Si", "H", "C"])),
            masses: None,
            comments: false,
        };
        let info = pair_info(&pot, &options).unwrap();
        assert!(info.contains("pair_coeff * * hybrid-base\n"));
        assert!(info.contains("pair_coeff * * tersoff SiC.tersoff Si NULL C\n\n"));
    }

    #[test]
    fn test_pair_info_many_body_blank_line() {
        let coeffs = vec![PairCoeff {
            interaction: strings(&["Si", "C"]),
            terms: vec![Term::File("SiC.tersoff".to_string()), Term::Symbols(true)],
            many_body: true,
        }];
        let pot = base("tersoff", vec![atom("Si", None), atom("C", None)], coeffs);
        let options = PairInfoOptions {
            comments: false,
            ..Default::default()
        };
        let info = pair_info(&pot, &options).unwrap();
        assert_eq!(
            info,
            "pair_style tersoff\n\
             pair_coeff * * SiC.tersoff Si C\n\n\
             mass 1 28.085\n\
             mass 2 12.011\n\n"
        );
    }

    #[test]
    fn test_pair_info_symbols_list_and_commands() {
        let coeffs = vec![PairCoeff {
            interaction: strings(&["Fe", "Cr"]),
            terms: vec![Term::File("FeCr.meam".to_string()), Term::SymbolsList(true)],
            many_body: false,
        }];
        let mut pot = base("lj/cut", vec![atom("Fe", None), atom("Cr", None)], coeffs);
        pot.commands = vec![vec![
            Term::Option("neighbor".to_string()),
            Term::Parameter("2.0".to_string()),
            Term::Option("bin".to_string()),
        ]];
        let options = PairInfoOptions {
            symbols: Some(strings(&["Fe"])),
            masses: None,
            comments: false,
        };
        let info = pair_info(&pot, &options).unwrap();
        // 体系中只有 Fe，不产生 pair_coeff 行
        assert!(!info.contains("pair_coeff"));
        assert!(info.ends_with("mass 1 55.845\n\nneighbor 2.0 bin\n"));
    }

    #[test]
    fn test_pair_info_mass_count_mismatch() {
        let pot = eam_alloy();
        let options = PairInfoOptions {
            symbols: None,
            masses: Some(vec![Some(1.0)]),
            comments: false,
        };
        assert!(matches!(
            pair_info(&pot, &options),
            Err(PotentialsError::MassCountMismatch { masses: 1, symbols: 2 })
        ));
    }

    #[test]
    fn test_pair_info_mass_unavailable() {
        let pot = base("lj/cut", vec![atom("Tc", None)], vec![]);
        let options = PairInfoOptions {
            comments: false,
            ..Default::default()
        };
        assert!(matches!(
            pair_info(&pot, &options),
            Err(PotentialsError::MassUnavailable { .. })
        ));
    }

    #[test]
    fn test_integer_record_mass_prints_as_float() {
        let pot = crate::parsers::lammps::parse_lammps_content(
            r#"{"potential-LAMMPS": {
                "id": "x", "pair_style": {"type": "lj/cut"},
                "atom": {"symbol": "A", "mass": 27}
            }}"#,
            "x",
        )
        .unwrap();
        let options = PairInfoOptions {
            comments: false,
            ..Default::default()
        };
        assert!(pair_info(&pot, &options).unwrap().contains("mass 1 27.0\n"));
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(27.0), "27.0");
        assert_eq!(format_float(26.9815385), "26.9815385");
        assert_eq!(format_float(0.5), "0.5");
    }
}
