//! Canonical spellings for concept and tool keywords.
//!
//! Contributors write `hoare logic`, `Hoare Logic` or `HOARE LOGIC` for the same
//! thing, so every keyword is title-cased and then a few well-known names get
//! their official capitalisation back.
use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

/// `(pattern, replacement)`, applied in order after title-casing.
///
/// Patterns are matched case-insensitively against whole words. `TLA+` comes
/// before `TLA` so the plus sign isn't matched twice.
const OVERRIDES: &[(&str, &str)] = &[
    (r"\bAtelierb\b", "AtelierB"),
    (r"\bBmotionweb\b", "BMotionWeb"),
    (r"\bCbmc\b", "CBMC"),
    (r"\bCpachecker\b", "CPAChecker"),
    (r"\bCzt\b", "CZT"),
    (r"\bFdr4\b", "FDR4"),
    (r"\bGnu\b", "GNU"),
    (r"\bFsp\b", "FSP"),
    (r"\bJqwik\b", "jqwik"),
    (r"\bKey\b", "KeY"),
    (r"\bKlee\b", "KLEE"),
    (r"\bMathsat\b", "MathSAT"),
    (r"\bMcmas\b", "MCMAS"),
    (r"\bMinisat\b", "MiniSat"),
    (r"\bNusmv\b", "NuSMV"),
    (r"\bOcaml\b", "OCaml"),
    (r"\bPat\b", "PAT"),
    (r"\bPrism\b", "PRISM"),
    (r"\bMcrl2\b", "mCRL2"),
    (r"\bOcl\b", "OCL"),
    (r"\bUml\b", "UML"),
    (r"\bStaruml\b", "StarUML"),
    (r"\bJml\b", "JML"),
    (r"\bLtl\b", "LTL"),
    (r"\bCtl\b", "CTL"),
    (r"\bTla\+", "TLA+"),
    (r"\bTla\b", "TLA"),
    (r"\bSmt\b", "SMT"),
    (r"\bSat\b", "SAT"),
    (r"\bPvs\b", "PVS"),
    (r"\bNuxmv\b", "nuXmv"),
    (r"\bWp Calculus\b", "WP Calculus"),
];

lazy_static! {
    static ref OVERRIDE_RES: Vec<(Regex, &'static str)> = OVERRIDES
        .iter()
        .map(|(pat, rep)| {
            let re = Regex::new(&format!("(?i){}", pat)).expect("keyword override pattern");
            (re, *rep)
        })
        .collect();
}

/// Normalise a single concept or tool name.
pub fn normalize_keyword(raw: &str) -> String {
    let mut word = title_case(raw.trim());
    for (re, rep) in OVERRIDE_RES.iter() {
        word = re.replace_all(&word, NoExpand(*rep)).into_owned();
    }

    word
}

/// Upper-case the first letter of each word and lower-case the rest.
///
/// A word is a run of cased letters, so anything else (digits, `+`, `'`, spaces)
/// starts a new one: `z3` becomes `Z3` and `4th` becomes `4Th`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && in_word {
            out.extend(c.to_lowercase());
        } else if cased {
            // `ß` upper-cases to `SS`; only its first letter starts the word
            let mut upper = c.to_uppercase();
            out.extend(upper.next());
            out.extend(upper.flat_map(char::to_lowercase));
        } else {
            out.push(c);
        }
        in_word = cased;
    }

    out
}
