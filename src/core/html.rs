// src/core/html.rs
// DOM helpers on top of `scraper`, tailored to the roster table's markup.
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};

use super::sanitize::normalize_ws;
use crate::config::consts::MAILTO_PREFIX;

static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("static selector"));
static LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector"));

const HIDDEN_CLASSES: [&str; 3] = ["hidden", "sr-only", "visually-hidden"];

/// All `<tr>` elements in document order.
pub fn rows(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.select(&TR)
}

/// Direct `<td>` children of a row. Cells of nested tables are not counted.
pub fn cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name().eq_ignore_ascii_case("td"))
        .collect()
}

/// Every descendant text node, whitespace-collapsed.
pub fn text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text with not-visible descendants (and their subtrees) left out.
pub fn visible_text(el: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_visible(el, &mut raw);
    normalize_ws(&raw)
}

fn push_visible(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    if !is_hidden(child_el) {
                        push_visible(child_el, out);
                    } else {
                        // keep neighbouring words apart
                        out.push(' ');
                    }
                }
            }
            _ => {}
        }
    }
}

/// `display:none` / `visibility:hidden` inline style, the `hidden` attribute,
/// or one of the usual screen-reader-only classes.
pub fn is_hidden(el: ElementRef<'_>) -> bool {
    let v = el.value();
    if v.attr("hidden").is_some() {
        return true;
    }
    if let Some(style) = v.attr("style") {
        let compact: String = style
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if compact.contains("display:none") || compact.contains("visibility:hidden") {
            return true;
        }
    }
    v.classes().any(|c| HIDDEN_CLASSES.iter().any(|h| c.eq_ignore_ascii_case(h)))
}

/// Attribute of the first `selector` match inside `el`, if present and non-blank.
/// An unparsable selector is treated as "no match".
pub fn attr_of_first(el: ElementRef<'_>, selector: &str, attr: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    el.select(&sel)
        .next()
        .and_then(|m| m.value().attr(attr))
        .map(normalize_ws)
        .filter(|s| !s.is_empty())
}

/// First `mailto:` link anywhere under `el`, prefix stripped.
pub fn mailto_address(el: ElementRef<'_>) -> Option<String> {
    el.select(&LINK).find_map(|a| {
        let href = a.value().attr("href")?.trim();
        let (scheme, rest) = href.split_at_checked(MAILTO_PREFIX.len())?;
        scheme.eq_ignore_ascii_case(MAILTO_PREFIX).then(|| rest.trim().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_table_row(cell_html: &str) -> String {
        // the parser drops stray <td>s outside a table
        format!("<table><tr>{cell_html}</tr></table>")
    }

    fn with_cell<T>(cell_html: &str, f: impl FnOnce(ElementRef<'_>) -> T) -> T {
        let doc = Html::parse_document(&in_table_row(cell_html));
        let row = rows(&doc).next().unwrap();
        let cell = cells(row).into_iter().next().unwrap();
        f(cell)
    }

    #[test]
    fn visible_text_skips_hidden_duplicate() {
        let got = with_cell(
            r#"<td><span style="display: none">Smith, Bob</span>Smith, Bob</td>"#,
            visible_text,
        );
        assert_eq!(got, "Smith, Bob");

        let got = with_cell(
            r#"<td><a href="/p/1">Lee, Ann<span class="sr-only">Lee, Ann</span></a></td>"#,
            visible_text,
        );
        assert_eq!(got, "Lee, Ann");
    }

    #[test]
    fn plain_text_keeps_everything() {
        let got = with_cell(r#"<td><span hidden>x</span> y </td>"#, text);
        assert_eq!(got, "x y");
    }

    #[test]
    fn hidden_markers() {
        let doc = Html::parse_document(
            r#"<table><tr><td>
                <span id="a" style="DISPLAY:NONE;">1</span>
                <span id="b" style="visibility : hidden">2</span>
                <span id="c" class="x Hidden">3</span>
                <span id="d" style="color: red">4</span>
            </td></tr></table>"#,
        );
        let span = Selector::parse("span").unwrap();
        let flags: Vec<bool> = doc.select(&span).map(is_hidden).collect();
        assert_eq!(flags, vec![true, true, true, false]);
    }

    #[test]
    fn mailto_is_case_insensitive_and_optional() {
        let got = with_cell(r#"<td><a href="/x">x</a><a href=" MAILTO:jdoe@example.edu">mail</a></td>"#, mailto_address);
        assert_eq!(got.as_deref(), Some("jdoe@example.edu"));
        let none = with_cell(r#"<td><a href="https://example.edu">site</a></td>"#, mailto_address);
        assert_eq!(none, None);
    }

    #[test]
    fn attr_of_first_ignores_blank_and_bad_selectors() {
        let got = with_cell(r#"<td><a title="Doe, Jane">Jane</a></td>"#, |c| attr_of_first(c, "a", "title"));
        assert_eq!(got.as_deref(), Some("Doe, Jane"));
        let blank = with_cell(r#"<td><a title="  ">Jane</a></td>"#, |c| attr_of_first(c, "a", "title"));
        assert_eq!(blank, None);
        let bad = with_cell(r#"<td><a title="x">Jane</a></td>"#, |c| attr_of_first(c, "a[", "title"));
        assert_eq!(bad, None);
    }

    #[test]
    fn nested_table_cells_are_not_counted() {
        let doc = Html::parse_document(
            "<table><tr><td>a</td><td><table><tr><td>x</td><td>y</td></tr></table></td></tr></table>",
        );
        let outer = rows(&doc).next().unwrap();
        assert_eq!(cells(outer).len(), 2);
    }
}
