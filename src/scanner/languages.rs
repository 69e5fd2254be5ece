use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

/// Display name and swatch color for a recognised language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    pub name: &'static str,
    pub color: &'static str,
}

pub const OTHER_LANGUAGE: &str = "Other";
pub const OTHER_COLOR: &str = "#cccccc";

/// Extension (no leading dot) -> language.
const EXTENSION_TABLE: &[(&str, Language)] = &[
    ("ts", Language { name: "TypeScript", color: "#007acc" }),
    ("js", Language { name: "JavaScript", color: "#f1e05a" }),
    ("rs", Language { name: "Rust", color: "#dea584" }),
    ("css", Language { name: "CSS", color: "#563d7c" }),
    ("ipynb", Language { name: "Jupyter Notebook", color: "#da5b0b" }),
    ("html", Language { name: "HTML", color: "#e34c26" }),
];

fn extension_map() -> &'static HashMap<&'static str, Language> {
    static MAP: OnceLock<HashMap<&'static str, Language>> = OnceLock::new();
    MAP.get_or_init(|| EXTENSION_TABLE.iter().copied().collect())
}

/// Look up the language for an extension. Matching is exact, so `TS` is not `ts`.
pub fn language_for_extension(ext: &str) -> Option<Language> {
    extension_map().get(ext).copied()
}

/// Text after the final `.` of a file name, or `""` when there is none.
pub fn extension_of(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[idx + 1..],
        None => "",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageStat {
    pub language: String,
    pub percentage: f64,
    pub color: String,
}

/// Convert raw per-language file counts into rounded percentages.
///
/// Each language is rounded on its own to one decimal place. When the rounded
/// values add up to less than 100 an `Other` entry takes the remainder.
/// Rounding several languages up can push the total slightly past 100, in
/// which case no `Other` entry is emitted.
///
/// Arithmetic is done in integer tenths of a percent to avoid float drift
/// turning an exact 100.0 into 99.99999.
pub fn build_language_stats(counts: &HashMap<Language, usize>, total_files: usize) -> Vec<LanguageStat> {
    if total_files == 0 {
        return Vec::new();
    }

    let mut entries: Vec<(&Language, usize)> = counts
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(lang, count)| (lang, *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name.cmp(b.0.name)));

    let mut stats = Vec::with_capacity(entries.len() + 1);
    let mut sum_tenths: u64 = 0;
    for (lang, count) in entries {
        let tenths = rounded_tenths(count, total_files);
        sum_tenths += tenths;
        stats.push(LanguageStat {
            language: lang.name.to_string(),
            percentage: tenths as f64 / 10.0,
            color: lang.color.to_string(),
        });
    }

    if sum_tenths < 1000 {
        stats.push(LanguageStat {
            language: OTHER_LANGUAGE.to_string(),
            percentage: (1000 - sum_tenths) as f64 / 10.0,
            color: OTHER_COLOR.to_string(),
        });
    }

    stats
}

/// `round(count / total * 100, 1)` expressed in tenths, halves rounding up.
fn rounded_tenths(count: usize, total: usize) -> u64 {
    let count = count as u64;
    let total = total as u64;
    (count * 2000 + total) / (2 * total)
}
