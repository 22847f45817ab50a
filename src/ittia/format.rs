//! Text normalization passes.
//!
//! [`auto_format`] is the everyday cleanup applied to a single section;
//! [`finalize`] is the stricter pass applied once at export time. Both are
//! idempotent: running either twice yields the same string as running it
//! once.

/// Glyphs accepted as hand-typed bullets and normalized to `"- "`.
const BULLET_GLYPHS: [char; 9] = ['•', '·', '→', '▶', '▷', '‣', '⦿', '∘', '*'];

/// Normalize bullets, strip trailing spaces, collapse blank lines.
///
/// Empty or whitespace-only input returns the empty string.
pub fn auto_format(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let cleaned = raw.replace('\r', "");
    let mut lines: Vec<String> = Vec::new();
    let mut last_blank = false;
    for line in cleaned.split('\n') {
        let bulleted = rebullet(line.trim());
        let t = bulleted.trim_end();
        if t.is_empty() {
            if !last_blank {
                lines.push(String::new());
                last_blank = true;
            }
        } else {
            lines.push(t.to_string());
            last_blank = false;
        }
    }

    // Drop leading/trailing blank lines left over from the collapse.
    let start = match lines.iter().position(|l| !l.is_empty()) {
        Some(i) => i,
        None => return String::new(),
    };
    let end = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(start) + 1;
    lines[start..end].join("\n")
}

/// Export pass: [`auto_format`], then make sure `#`-headers have a space
/// after the marker run and that no run of three or more newlines survives.
pub fn finalize(raw: &str) -> String {
    let formatted = auto_format(raw);
    if formatted.is_empty() {
        return formatted;
    }

    let spaced: Vec<String> = formatted.split('\n').map(space_header).collect();
    collapse_newline_runs(&spaced.join("\n")).trim().to_string()
}

/// Turn a leading bullet glyph run, or a leading run of one or two hyphens,
/// into the canonical `"- "` prefix. The input line is already trimmed.
fn rebullet(line: &str) -> String {
    let glyph_end: usize = line
        .char_indices()
        .take_while(|&(_, c)| BULLET_GLYPHS.contains(&c))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    if glyph_end > 0 {
        return format!("- {}", line[glyph_end..].trim_start());
    }

    // At most two leading hyphens are consumed; `---` becomes `- -`.
    let hyphens = line.chars().take_while(|&c| c == '-').count().min(2);
    if hyphens > 0 {
        return format!("- {}", line[hyphens..].trim_start());
    }

    line.to_string()
}

/// `##Header` -> `## Header`; already-spaced headers pass through.
fn space_header(line: &str) -> String {
    let run = line.chars().take_while(|&c| c == '#').count();
    if run == 0 {
        return line.to_string();
    }
    let rest = &line[run..];
    if rest.is_empty() || rest.starts_with(' ') {
        line.to_string()
    } else {
        format!("{} {}", &line[..run], rest)
    }
}

/// Collapse any run of 3+ newlines to exactly one blank line.
fn collapse_newline_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut newlines = 0usize;
    for ch in s.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push('\n');
            }
        } else {
            newlines = 0;
            out.push(ch);
        }
    }
    out
}
