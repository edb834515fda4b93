// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for docsift search results and tag listings.
//!
//! OneDark for dark terminals, One Light for light ones. Theme detection tries
//! `DOCSIFT_THEME` first, then `COLORFGBG`, then defaults to dark. Colors are
//! dropped entirely under `NO_COLOR` or when stdout isn't a TTY, so piping
//! output into a file gives plain text.
//!
//! Snippet highlighting here doesn't go through the markup highlighter: it
//! takes the merged spans from `highlight_spans` and colors them line by line
//! after wrapping, so escape codes never get split across lines.

use docsift::{highlight_spans, HighlightSpan, SearchResult, Tag};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

/// Snippet text indent inside a result box.
const SNIPPET_INDENT: usize = 4;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("DOCSIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7+ (except 8) is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn bg_rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
    pub const MARK_BG: (u8, u8, u8) = (62, 68, 81); // #3e4451
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
    pub const MARK_BG: (u8, u8, u8) = (254, 240, 138); // #fef08a
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

/// Background + bold foreground used for highlighted terms.
#[allow(non_snake_case)]
pub fn MARK() -> String {
    let (r, g, b) = match theme() {
        Theme::Dark => onedark::MARK_BG,
        Theme::Light => onelight::MARK_BG,
    };
    format!("{}{}{}", BOLD, bg_rgb(r, g, b), YELLOW())
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Truncate to `max` visible chars, ending in an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = border_color();
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border_color();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let border = border_color();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = border_color();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), reset());
}

fn border_color() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SNIPPET RENDERING
// ═══════════════════════════════════════════════════════════════════════════

/// Greedy word wrap over chars. Returns `[start, end)` ranges; the
/// whitespace a line breaks on belongs to neither line.
pub fn wrap_ranges(chars: &[char], width: usize) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = 0;
    let width = width.max(1);

    while start < chars.len() {
        let hard_end = (start + width).min(chars.len());
        if hard_end == chars.len() {
            ranges.push((start, hard_end));
            break;
        }

        match (start + 1..=hard_end)
            .rev()
            .find(|&i| chars[i].is_whitespace())
        {
            Some(space) => {
                ranges.push((start, space));
                start = space + 1;
            }
            None => {
                ranges.push((start, hard_end));
                start = hard_end;
            }
        }
    }
    ranges
}

/// Render `chars[start..end]`, coloring the parts covered by `spans`.
fn render_line(
    chars: &[char],
    start: usize,
    end: usize,
    spans: &[HighlightSpan],
    color: bool,
) -> String {
    if !color {
        return chars[start..end].iter().collect();
    }

    let mark = MARK();
    let mut line = String::new();
    let mut cursor = start;
    for span in spans {
        let s = span.start.max(start);
        let e = span.end.min(end);
        if s >= e {
            continue;
        }
        line.extend(&chars[cursor..s]);
        line.push_str(&mark);
        line.extend(&chars[s..e]);
        line.push_str(RESET);
        cursor = e;
    }
    line.extend(&chars[cursor..end]);
    line
}

/// Wrap a snippet to the box width and color the query terms in it.
pub fn snippet_lines(snippet: &str, query: &str) -> Vec<String> {
    let chars: Vec<char> = snippet.chars().collect();
    let spans = highlight_spans(snippet, query);
    let color = use_colors();

    wrap_ranges(&chars, BOX_WIDTH - SNIPPET_INDENT - 1)
        .into_iter()
        .map(|(start, end)| render_line(&chars, start, end, &spans, color))
        .collect()
}

/// Color-coded relevance score
pub fn score_value(score: f64) -> String {
    let text = format!("{:>5.1}", score);
    if !use_colors() {
        return text;
    }
    let color = if score >= 100.0 {
        BRIGHT_GREEN()
    } else if score >= 50.0 {
        GREEN()
    } else if score >= 25.0 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Print ranked results, one box section per document.
pub fn print_results(query: &str, results: &[SearchResult], total: usize, searched: usize) {
    let header = format!(
        "RESULTS for \"{}\" ({} of {} in {} documents)",
        truncate(query, 30),
        results.len(),
        total,
        searched
    );
    section_top(&header);

    if results.is_empty() {
        row(&format!(" {}", themed(GRAY, &[DIM], "no matches")));
        section_bot();
        return;
    }

    for (rank, result) in results.iter().enumerate() {
        if rank > 0 {
            section_mid(&format!("#{}", rank + 1));
        }
        let name = themed(BRIGHT_CYAN, &[BOLD], &truncate(&result.doc_name, 44));
        row(&format!(
            " {} {}  {} {}  {}",
            themed(GRAY, &[], "score"),
            score_value(result.relevance_score),
            themed(GRAY, &[], "matches"),
            themed(BLUE, &[], &format!("{:>3}", result.match_count)),
            name
        ));
        let doc_id = truncate(&result.doc_id, BOX_WIDTH - 2);
        row(&format!(" {}", themed(GRAY, &[DIM], &doc_id)));
        for snippet in &result.snippets {
            for line in snippet_lines(snippet, query) {
                row(&format!("{}{}", " ".repeat(SNIPPET_INDENT), line));
            }
        }
    }
    section_bot();
}

/// Print a tag table.
pub fn print_tags(label: &str, tags: &[Tag]) {
    section_top(label);
    if tags.is_empty() {
        row(&format!(" {}", themed(GRAY, &[DIM], "no tags")));
    }
    for tag in tags {
        row(&format!(
            " {}  {}  {}",
            themed(BRIGHT_CYAN, &[BOLD], &format!("{:<20}", truncate(&tag.name, 20))),
            themed(GRAY, &[], &format!("{:<9}", truncate(&tag.color, 9))),
            themed(GRAY, &[DIM], &tag.id)
        ));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
