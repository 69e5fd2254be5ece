use crate::scanner::ScanResult;
use owo_colors::OwoColorize;

/// Inner width (content area between the two border chars).
const W: usize = 52;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Public API
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Print a boxed codebase report for `project_name`.
pub fn render_scan(result: &ScanResult, project_name: &str) {
    let mut lines = vec![String::new(), rule('\u{256D}', '\u{256E}'), blank()];

    // ── Title ──
    lines.push(centered("CODEBASE REPORT", bold));
    if !project_name.is_empty() {
        lines.push(centered(project_name, dimmed));
    }
    lines.push(blank());
    lines.push(rule('\u{251C}', '\u{2524}'));
    lines.push(blank());

    // ── Workspace ──
    lines.push(section("WORKSPACE"));
    lines.push(kv("Files", &fmt_num(result.file_count)));
    lines.push(kv("Folders", &fmt_num(result.folder_count)));
    lines.push(kv("File types", &result.file_types.len().to_string()));
    for line in wrap_list(&file_types_label(result), W - 9) {
        lines.push(text_row(&line));
    }

    // ── Languages ──
    if !result.language_stats.is_empty() {
        lines.push(blank());
        lines.push(section("LANGUAGES"));
        for stat in &result.language_stats {
            lines.push(lang_row(&stat.language, stat.percentage));
        }
    }

    lines.push(blank());
    lines.push(rule('\u{2570}', '\u{256F}'));
    lines.push(String::new());
    println!("{}", lines.join("\n"));
}

/// Comma-separated extensions, skipping the empty one; "None" if nothing is left.
pub fn file_types_label(result: &ScanResult) -> String {
    let types: Vec<&str> = result
        .file_types
        .iter()
        .map(String::as_str)
        .filter(|t| !t.is_empty())
        .collect();
    if types.is_empty() {
        "None".to_string()
    } else {
        types.join(", ")
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Display width calculation
//
//  Language names and extensions are almost always ASCII, but file
//  names can carry anything. Wide (CJK / full-width) chars = 2 cols.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn display_width(s: &str) -> usize {
    s.chars()
        .map(|ch| match ch {
            '\u{FE00}'..='\u{FE0F}' | '\u{200D}' => 0,
            '\u{2E80}'..='\u{9FFF}' | '\u{F900}'..='\u{FAFF}' | '\u{FF01}'..='\u{FF60}' => 2,
            _ => 1,
        })
        .sum()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Low-level line builders
//
//  Every line is exactly:
//     "  " + border_left + <W display-columns of content> + border_right
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn rule(left: char, right: char) -> String {
    format!("  {}", format!("{}{}{}", left, "\u{2500}".repeat(W), right).cyan())
}

/// Wrap already-styled `content` of visible `width` columns in the box sides.
fn row(content: &str, width: usize) -> String {
    format!(
        "  {}{}{}{}",
        "\u{2502}".cyan(),
        content,
        " ".repeat(W.saturating_sub(width)),
        "\u{2502}".cyan(),
    )
}

fn blank() -> String {
    row("", 0)
}

fn bold(text: &str) -> String {
    text.bold().white().to_string()
}

fn dimmed(text: &str) -> String {
    text.dimmed().to_string()
}

fn centered(text: &str, style: fn(&str) -> String) -> String {
    let dw = display_width(text);
    let lp = W.saturating_sub(dw) / 2;
    row(&format!("{}{}", " ".repeat(lp), style(text)), lp + dw)
}

fn section(label: &str) -> String {
    let text = format!("   \u{2500}\u{2500} {}", label);
    row(&text.cyan().bold().to_string(), display_width(&text))
}

fn kv(label: &str, value: &str) -> String {
    // Layout: "   {label}  {dots}  {value}  "
    let ml = 3_usize;
    let gap = 2_usize;
    let fixed = ml + display_width(label) + gap + gap + display_width(value);
    let ndots = W.saturating_sub(fixed + 2).max(1);

    let content = format!(
        "{}{}  {}  {}",
        " ".repeat(ml),
        label.dimmed(),
        ".".repeat(ndots).bright_black(),
        value.white().bold(),
    );
    row(&content, fixed + ndots)
}

fn text_row(text: &str) -> String {
    let ml = 5_usize;
    row(&format!("{}{}", " ".repeat(ml), text.dimmed()), ml + display_width(text))
}

fn lang_row(lang: &str, pct: f64) -> String {
    // Layout: "     {lang:<18} {bar:12} {pct:>6}  "
    let ml = 5_usize;
    let lang_col = 18_usize;
    let bar_w = 12_usize;
    let pct_str = format!("{:>5.1}%", pct);

    let filled = (((pct / 100.0) * bar_w as f64).round() as usize).min(bar_w);
    let lang_pad = lang_col.saturating_sub(display_width(lang));

    let content = format!(
        "{}{}{} {}{} {}",
        " ".repeat(ml),
        lang.white(),
        " ".repeat(lang_pad),
        "\u{2588}".repeat(filled).green(),
        "\u{2591}".repeat(bar_w - filled).bright_black(),
        pct_str.dimmed(),
    );
    row(&content, ml + display_width(lang) + lang_pad + 1 + bar_w + 1 + pct_str.len())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Utilities
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn fmt_num(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Greedy wrap of a ", "-joined list into lines no wider than `width`.
fn wrap_list(list: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for item in list.split(", ") {
        let candidate = if current.is_empty() {
            item.to_string()
        } else {
            format!("{}, {}", current, item)
        };
        if display_width(&candidate) > width && !current.is_empty() {
            lines.push(format!("{},", current));
            current = item.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
