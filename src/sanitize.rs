//! Sanitizing and normalizing markup produced by the CMS rich-text editor.

use std::collections::{HashMap, HashSet};

use ammonia::Builder;

const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "h1", "h2", "h3", "h4", "strong", "b", "em", "i", "u", "s", "blockquote", "code",
    "pre", "ul", "ol", "li", "a", "img", "hr", "span",
];

const URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

fn rich_text_builder() -> Builder<'static> {
    let tag_attributes = HashMap::from([
        ("a", HashSet::from(["href", "title"])),
        ("img", HashSet::from(["src", "alt", "title"])),
    ]);

    let mut builder = Builder::empty();
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect())
        .tag_attributes(tag_attributes)
        .url_schemes(URL_SCHEMES.iter().copied().collect())
        .link_rel(Some("noopener noreferrer"))
        .clean_content_tags(HashSet::from(["script", "style"]));
    builder
}

fn is_blank_paragraph(inner: &str) -> bool {
    inner.replace("<br>", "").replace("&nbsp;", "").trim().is_empty()
}

/// Removes `<p>` elements holding nothing but whitespace, `&nbsp;` or `<br>`.
fn drop_empty_paragraphs(html: &str) -> String {
    const OPEN: &str = "<p>";
    const CLOSE: &str = "</p>";

    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let body = &rest[start + OPEN.len()..];
        match body.find(CLOSE) {
            Some(end) if is_blank_paragraph(&body[..end]) => {
                rest = &body[end + CLOSE.len()..];
            }
            _ => {
                out.push_str(OPEN);
                rest = body;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Doubles a newline that directly follows a `<pre>` start tag.
///
/// The HTML parser drops one newline at the start of a `<pre>` block while the
/// serializer never writes it back, so each reparse would lose another one.
fn keep_pre_newlines(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut tag_start = None;
    let mut in_quotes = false;

    for (i, c) in html.char_indices() {
        out.push(c);
        match (tag_start, c) {
            (None, '<') => tag_start = Some(i),
            (Some(_), '"') => in_quotes = !in_quotes,
            (Some(start), '>') if !in_quotes => {
                tag_start = None;
                if &html[start..=i] == "<pre>" && html[i + 1..].starts_with('\n') {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }

    out
}

/// Cleans editor output down to the allowed tag set and strips empty blocks.
///
/// Returns an empty string when nothing displayable is left. Running the
/// result through this function again yields the same string.
pub fn clean_rich_text(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return String::new();
    }

    let cleaned = rich_text_builder().clean(normalized).to_string();
    let cleaned = drop_empty_paragraphs(&cleaned);
    keep_pre_newlines(cleaned.trim())
}
