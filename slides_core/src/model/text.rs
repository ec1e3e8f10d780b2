//! Text search over slide content.
//!
//! Slides addresses text by UTF-16 code unit offsets, so matches are reported
//! in those units to be usable in follow-up text requests.

use serde::Serialize;

use super::lookup::walk_elements;
use super::presentation::{Page, PageElement, TextContent};

/// Characters of context kept on each side of a match.
const SNIPPET_CONTEXT: usize = 30;

/// One occurrence of the query on a slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextMatch {
    pub object_id: String,
    /// Zero-based cell position when the match is inside a table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<CellPosition>,
    /// UTF-16 offset of the first matched unit.
    pub start_index: usize,
    /// UTF-16 offset one past the match.
    pub end_index: usize,
    pub snippet: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellPosition {
    pub row: usize,
    pub column: usize,
}

/// Finds every non-overlapping occurrence of `query` in a page's shapes and
/// table cells, including elements nested inside groups.
pub fn search_page(page: &Page, query: &str, match_case: bool) -> Vec<TextMatch> {
    let mut matches = Vec::new();
    walk_elements(&page.page_elements, &mut |element: &PageElement| {
        if let Some(text) = element.shape.as_ref().and_then(|s| s.text.as_ref()) {
            collect(&mut matches, &element.object_id, None, text, query, match_case);
        }
        if let Some(table) = &element.table {
            for (row, table_row) in table.table_rows.iter().enumerate() {
                for (column, cell) in table_row.table_cells.iter().enumerate() {
                    if let Some(text) = &cell.text {
                        let position = Some(CellPosition { row, column });
                        collect(
                            &mut matches,
                            &element.object_id,
                            position,
                            text,
                            query,
                            match_case,
                        );
                    }
                }
            }
        }
    });
    matches
}

fn collect(
    out: &mut Vec<TextMatch>,
    object_id: &str,
    cell: Option<CellPosition>,
    text: &TextContent,
    query: &str,
    match_case: bool,
) {
    let haystack = text.plain_text();
    for (start, end) in find_utf16_ranges(&haystack, query, match_case) {
        out.push(TextMatch {
            object_id: object_id.to_string(),
            cell,
            start_index: start,
            end_index: end,
            snippet: snippet(&haystack, start, end),
        });
    }
}

/// Returns `(start, end)` UTF-16 ranges of non-overlapping matches.
///
/// Case-insensitive matching compares characters through simple lowercase
/// folding, one character at a time, so offsets always refer to the original
/// text.
pub fn find_utf16_ranges(haystack: &str, needle: &str, match_case: bool) -> Vec<(usize, usize)> {
    let fold = |c: char| -> char {
        if match_case {
            c
        } else {
            c.to_lowercase().next().unwrap_or(c)
        }
    };

    let hay: Vec<char> = haystack.chars().collect();
    let pattern: Vec<char> = needle.chars().map(fold).collect();
    if pattern.is_empty() || pattern.len() > hay.len() {
        return Vec::new();
    }

    // UTF-16 offset of each char boundary.
    let mut offsets = Vec::with_capacity(hay.len() + 1);
    let mut acc = 0;
    for c in &hay {
        offsets.push(acc);
        acc += c.len_utf16();
    }
    offsets.push(acc);

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + pattern.len() <= hay.len() {
        let hit = hay[i..i + pattern.len()]
            .iter()
            .zip(&pattern)
            .all(|(&h, &p)| fold(h) == p);
        if hit {
            ranges.push((offsets[i], offsets[i + pattern.len()]));
            i += pattern.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Context around a UTF-16 range, trimmed to whole characters.
fn snippet(text: &str, start: usize, end: usize) -> String {
    let mut out = String::new();
    let mut offset = 0;
    let from = start.saturating_sub(SNIPPET_CONTEXT);
    let to = end + SNIPPET_CONTEXT;
    for c in text.chars() {
        if offset >= from && offset < to {
            out.push(c);
        }
        offset += c.len_utf16();
    }
    let mut snippet = out.replace('\n', " ").trim().to_string();
    if from > 0 {
        snippet.insert_str(0, "...");
    }
    if to < offset {
        snippet.push_str("...");
    }
    snippet
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        serde_json::from_value(serde_json::json!({
            "objectId": "s1",
            "pageElements": [
                { "objectId": "title", "shape": { "text": { "textElements": [
                    { "textRun": { "content": "Quarterly Revenue\n" } }
                ] } } },
                { "objectId": "table", "table": { "rows": 1, "columns": 2, "tableRows": [
                    { "tableCells": [
                        { "text": { "textElements": [{ "textRun": { "content": "revenue up\n" } }] } },
                        { "text": { "textElements": [{ "textRun": { "content": "costs\n" } }] } }
                    ] }
                ] } },
                { "objectId": "g", "elementGroup": { "children": [
                    { "objectId": "inner", "shape": { "text": { "textElements": [
                        { "textRun": { "content": "Revenue revenue" } }
                    ] } } }
                ] } }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_search_page_case_insensitive() {
        let matches = search_page(&page(), "REVENUE", false);
        let ids: Vec<&str> = matches.iter().map(|m| m.object_id.as_str()).collect();
        assert_eq!(ids, vec!["title", "table", "inner", "inner"]);

        assert_eq!(matches[0].start_index, 10);
        assert_eq!(matches[0].end_index, 17);
        assert_eq!(matches[1].cell, Some(CellPosition { row: 0, column: 0 }));
        assert_eq!(matches[3].start_index, 8);
    }

    #[test]
    fn test_search_page_case_sensitive() {
        let matches = search_page(&page(), "Revenue", true);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.cell.is_none()));
    }

    #[test]
    fn test_utf16_offsets() {
        // The emoji takes two UTF-16 units.
        let ranges = find_utf16_ranges("😀 cat", "cat", true);
        assert_eq!(ranges, vec![(3, 6)]);
    }

    #[test]
    fn test_non_overlapping_matches() {
        assert_eq!(find_utf16_ranges("aaaa", "aa", true), vec![(0, 2), (2, 4)]);
        assert!(find_utf16_ranges("abc", "", true).is_empty());
        assert!(find_utf16_ranges("ab", "abc", true).is_empty());
    }

    #[test]
    fn test_snippet_is_trimmed_with_ellipsis() {
        let text = format!("{}needle{}", "x".repeat(50), "y".repeat(50));
        let s = snippet(&text, 50, 56);
        assert!(s.starts_with("..."));
        assert!(s.ends_with("..."));
        assert!(s.contains("needle"));
        assert_eq!(s.len(), 3 + 30 + 6 + 30 + 3);
    }
}
