// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Docstring normalization.

fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| b == b' ' || b == b'\t')
}

fn indent_of(line: &str) -> &str {
    let body = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - body.len()]
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

/// The leading whitespace shared by every non-blank line.
pub fn common_margin(text: &str) -> &str {
    text.split('\n')
        .filter(|line| !is_blank(line))
        .map(indent_of)
        .reduce(common_prefix)
        .unwrap_or("")
}

/// Remove the common leading whitespace from every line of `text`.
///
/// Lines holding only spaces and tabs become empty and do not count towards
/// the margin. Tabs and spaces are compared literally, so `"\t"` and `"    "`
/// share no margin.
pub fn dedent(text: &str) -> String {
    let margin = common_margin(text);
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if is_blank(line) {
            continue;
        }
        out.push_str(line.strip_prefix(margin).unwrap_or(line));
    }
    out
}
