/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation post-processing.
//!
//! Turns a plain-text reference-list citation into HTML. Underscores in the
//! input are first swapped for a private-use guard character, so text from
//! the bibliography can never spell a placeholder token. Then:
//!
//! 1. sensitive spans (shared-author markers, title, DOIs, the designated
//!    author's name) are replaced by placeholder tokens made only of letters,
//!    digits and underscores;
//! 2. the whole string is HTML-escaped exactly once;
//! 3. placeholders are restored as markup by exact string replacement, and
//!    guarded underscores are put back.
//!
//! The stages run in a fixed order. Placeholders survive escaping unchanged,
//! so neither the escaping nor the restored tags can corrupt each other.

use std::sync::LazyLock;

use pubweb_core::{DesignatedAuthor, Reference};
use regex::{Captures, Regex};

use crate::render::html::{escape_html, SUP_MARKER};
use crate::render::names::annotated_author_list;
use crate::render::CitationStyle;
use crate::ProcessorError;

/// Marker appended to each shared first author before escaping.
pub const ASTERISK_PLACEHOLDER: &str = "__ASTERISK_PLACEHOLDER__";
const TITLE_START: &str = "__TITLE_START__";
const TITLE_END: &str = "__TITLE_END__";
/// Stands in for `_` in untrusted text while placeholders are live.
const UNDERSCORE_GUARD: char = '\u{E000}';

/// "(2024)" or "(2024, March)", with any whitespace in front of it.
static YEAR_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(\d{4}(?:\s*,\s*[A-Za-z]+)?\)").expect("valid regex"));
static YEAR_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d{4})\s*,\s*[A-Za-z]+\s*\)").expect("valid regex"));
/// The text that precedes a title: "(2024). ".
static TITLE_LEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d{4}\)\.\s+").expect("valid regex"));
static DOI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"doi:([0-9]+\.[0-9]+/[^\s<>"'&]+)"#).expect("valid regex"));

/// Replace every underscore with [`UNDERSCORE_GUARD`].
pub fn guard_underscores(text: &str) -> String {
    text.replace('_', &UNDERSCORE_GUARD.to_string())
}

fn doi_placeholder(index: usize) -> String {
    format!("__DOI_PLACEHOLDER_{}__", index)
}

fn author_placeholder(index: usize) -> String {
    format!("__AUTHOR_PLACEHOLDER_{}__", index)
}

/// Rewrites rendered citations into HTML.
#[derive(Debug, Clone)]
pub struct PostProcessor {
    /// One pattern per designated-author form, longest form first.
    author_patterns: Vec<Regex>,
}

/// Spans lifted out of the citation text before escaping.
#[derive(Debug, Default)]
struct Placeholders {
    dois: Vec<String>,
    authors: Vec<String>,
}

impl PostProcessor {
    /// Build the author patterns. Whitespace inside a form matches any run of
    /// whitespace (including none), so "Schaub, D. P." also finds
    /// "Schaub, D.P.". A form starting with a word character must start at a
    /// word boundary.
    pub fn new(designated: &DesignatedAuthor) -> Result<Self, ProcessorError> {
        let author_patterns = designated
            .forms_longest_first()
            .into_iter()
            .map(|form| {
                let form = guard_underscores(form);
                let body = form
                    .split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s*");
                let boundary = if form.starts_with(|c: char| c.is_alphanumeric()) {
                    r"\b"
                } else {
                    ""
                };
                Regex::new(&format!("{}{}", boundary, body))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { author_patterns })
    }

    /// Post-process the rendered citation of `reference`.
    ///
    /// A DOI the style left out of the text is appended first so that it is
    /// still linked. When the entry has shared first authors, the author span
    /// is regenerated from the raw author list with markers attached.
    pub fn process(
        &self,
        citation: &str,
        reference: &Reference,
        style: &dyn CitationStyle,
    ) -> String {
        let mut text = citation.to_string();
        if let Some(doi) = reference.doi() {
            if !text.to_lowercase().contains("doi:") {
                text.push_str(" doi:");
                text.push_str(doi);
            }
        }

        let annotated = (reference.shared_first_author_count() > 0)
            .then(|| {
                annotated_author_list(style, reference, ASTERISK_PLACEHOLDER, guard_underscores)
            });
        self.process_text(&text, annotated.as_deref())
    }

    /// Run the pipeline on plain citation text.
    ///
    /// `annotated_authors`, when given, replaces everything in front of the
    /// year parenthetical and may contain [`ASTERISK_PLACEHOLDER`] markers.
    /// Names in it must already have passed through [`guard_underscores`].
    pub fn process_text(&self, citation: &str, annotated_authors: Option<&str>) -> String {
        let citation = guard_underscores(citation);
        let mut text = match annotated_authors {
            Some(authors) => splice_authors(&citation, authors),
            None => citation,
        };
        text = strip_month(&text);
        text = bracket_title(&text);

        let mut placeholders = Placeholders::default();
        text = extract_dois(&text, &mut placeholders);
        text = self.extract_authors(&text, &mut placeholders);

        let escaped = escape_html(&text);
        restore(escaped, &placeholders)
    }

    fn extract_authors(&self, text: &str, placeholders: &mut Placeholders) -> String {
        let mut text = text.to_string();
        for pattern in &self.author_patterns {
            let source = std::mem::take(&mut text);
            text = pattern
                .replace_all(&source, |caps: &Captures| {
                    let m = &caps[0];
                    let end = caps.get(0).map_or(0, |g| g.end());
                    // "Schaub, D.-P." is a different name than "Schaub, D."
                    if continues_name(&source[end..]) {
                        return m.to_string();
                    }
                    placeholders.authors.push(m.to_string());
                    author_placeholder(placeholders.authors.len() - 1)
                })
                .into_owned();
        }
        text
    }
}

fn continues_name(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '-')
}

/// Replace the author span (everything before the year parenthetical).
/// Without a year the citation is returned unchanged.
fn splice_authors(citation: &str, authors: &str) -> String {
    match YEAR_PAREN.find(citation) {
        Some(m) => format!("{}{}", authors, &citation[m.start()..]),
        None => citation.to_string(),
    }
}

/// "(2024, March)" becomes "(2024)".
fn strip_month(text: &str) -> String {
    YEAR_MONTH.replace_all(text, "(${1})").into_owned()
}

/// Length of the title at the start of `rest`: the shortest run ending in a
/// period that is followed by the end of the text or by anything other than
/// an uppercase ASCII letter, so "Node.JS" does not end the title while
/// "U.S. economy" does. Titles never span lines.
fn title_len(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices().peekable();
    let mut seen = false;
    while let Some((i, c)) = chars.next() {
        if c == '\n' {
            return None;
        }
        if c == '.' && seen {
            match chars.peek() {
                Some((_, next)) if next.is_ascii_uppercase() => {}
                _ => return Some(i + 1),
            }
        }
        seen = true;
    }
    None
}

/// A title the style left without a period because it ends in `?` or `!`.
fn marked_title_len(rest: &str) -> Option<usize> {
    let trimmed = rest.trim_end();
    (trimmed.ends_with(['?', '!']) && !trimmed.contains('\n')).then_some(trimmed.len())
}

/// Wrap the title following each "(YYYY). " in title placeholders. The
/// title never reaches into a DOI.
fn bracket_title(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + TITLE_START.len() + TITLE_END.len());
    let mut last = 0;
    let mut search_from = 0;
    while let Some(lead) = TITLE_LEAD.find_at(text, search_from) {
        let start = lead.end();
        search_from = start;
        let limit = DOI
            .find(&text[start..])
            .map_or(text.len(), |doi| start + doi.start());
        let window = &text[start..limit];
        if let Some(len) = title_len(window).or_else(|| marked_title_len(window)) {
            let end = start + len;
            out.push_str(&text[last..start]);
            out.push_str(TITLE_START);
            out.push_str(&text[start..end]);
            out.push_str(TITLE_END);
            last = end;
            search_from = end;
        }
    }
    out.push_str(&text[last..]);
    out
}

fn extract_dois(text: &str, placeholders: &mut Placeholders) -> String {
    DOI.replace_all(text, |caps: &Captures| {
        placeholders.dois.push(caps[1].to_string());
        doi_placeholder(placeholders.dois.len() - 1)
    })
    .into_owned()
}

/// Turn placeholders in escaped text into markup: shared-author markers,
/// then designated-author emphasis (absorbing a directly following marker),
/// then the title, then DOI links.
fn restore(escaped: String, placeholders: &Placeholders) -> String {
    let mut html = escaped.replace(ASTERISK_PLACEHOLDER, SUP_MARKER);

    for (i, name) in placeholders.authors.iter().enumerate() {
        let token = author_placeholder(i);
        let name = escape_html(name);
        html = html
            .replace(
                &format!("{}{}", token, SUP_MARKER),
                &format!("<strong>{}{}</strong>", name, SUP_MARKER),
            )
            .replace(&token, &format!("<strong>{}</strong>", name));
    }

    html = html
        .replace(TITLE_START, "<strong>")
        .replace(TITLE_END, "</strong>");

    for (i, doi) in placeholders.dois.iter().enumerate() {
        let url = format!("https://doi.org/{}", doi);
        let link = format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">doi:{}</a>"#,
            escape_html(&url),
            escape_html(doi)
        );
        html = html.replace(&doi_placeholder(i), &link);
    }
    html.replace(UNDERSCORE_GUARD, "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Apa;
    use pubweb_core::Person;

    fn processor() -> PostProcessor {
        PostProcessor::new(&DesignatedAuthor::default()).unwrap()
    }

    #[test]
    fn full_pipeline_on_journal_citation() {
        let html = processor().process_text(
            "Schaub, D. P. (2024, March). Some Title. Journal of Tests, 1(2), 3-4. doi:10.1234/abcd",
            None,
        );
        assert_eq!(
            html,
            "<strong>Schaub, D. P.</strong> (2024). <strong>Some Title.</strong> Journal of Tests, 1(2), 3-4. \
             <a href=\"https://doi.org/10.1234/abcd\" target=\"_blank\" rel=\"noopener noreferrer\">doi:10.1234/abcd</a>"
        );
    }

    #[test]
    fn month_is_stripped_for_any_spelling() {
        assert_eq!(strip_month("X (2026 , January). T."), "X (2026). T.");
        assert_eq!(strip_month("X (2026,jan ). T."), "X (2026). T.");
        assert_eq!(strip_month("X (2026). T."), "X (2026). T.");
    }

    #[test]
    fn title_ends_at_period_not_followed_by_capital() {
        assert_eq!(
            bracket_title("A (2020). On Node.JS tooling. Journal, 1."),
            "A (2020). __TITLE_START__On Node.JS tooling.__TITLE_END__ Journal, 1."
        );
        assert_eq!(
            bracket_title("A (2020). First sentence. Second sentence. Journal."),
            "A (2020). __TITLE_START__First sentence.__TITLE_END__ Second sentence. Journal."
        );
        assert_eq!(
            bracket_title("A (2020). Only a title."),
            "A (2020). __TITLE_START__Only a title.__TITLE_END__"
        );
        assert_eq!(bracket_title("A (n.d.). No year."), "A (n.d.). No year.");
        assert_eq!(bracket_title("A (2020). No period"), "A (2020). No period");
    }

    #[test]
    fn shorter_author_form_does_not_split_longer_form() {
        let html = processor().process_text("Schaub, D. P., Schaub, D., & Doe, J. (2020). T.", None);
        assert!(html.starts_with(
            "<strong>Schaub, D. P.</strong>, <strong>Schaub, D.</strong>, &amp; Doe, J."
        ));
    }

    #[test]
    fn flexible_spacing_keeps_matched_text() {
        let html = processor().process_text("Schaub, D.P. (2020). T.", None);
        assert!(html.starts_with("<strong>Schaub, D.P.</strong> (2020)."));
    }

    #[test]
    fn shared_authors_get_markers_inside_bold() {
        let authors = format!(
            "Doe, J.{m}, Schaub, D. P.{m}, & Roe, R.",
            m = ASTERISK_PLACEHOLDER
        );
        let html = processor().process_text(
            "Doe, J., Schaub, D. P., & Roe, R. (2021, May). Paired Work. Cell.",
            Some(&authors),
        );
        assert_eq!(
            html,
            "Doe, J.<sup>*</sup>, <strong>Schaub, D. P.<sup>*</sup></strong>, &amp; Roe, R. (2021). \
             <strong>Paired Work.</strong> Cell."
        );
    }

    #[test]
    fn splice_without_year_is_noop() {
        assert_eq!(splice_authors("No date here.", "X"), "No date here.");
        assert_eq!(splice_authors("A (2020). T.", "B"), "B (2020). T.");
    }

    #[test]
    fn multiple_dois_get_distinct_links() {
        let html = processor().process_text(
            "A (2020). T. doi:10.1/one doi:10.2/two",
            None,
        );
        assert!(html.contains(r#"href="https://doi.org/10.1/one""#));
        assert!(html.contains(r#"href="https://doi.org/10.2/two""#));
        assert!(!html.contains("PLACEHOLDER"));
    }

    #[test]
    fn doi_stops_at_html_special_characters() {
        let html = processor().process_text("A (2020). T. doi:10.1/ab<script>", None);
        assert!(html.contains(">doi:10.1/ab</a>&lt;script&gt;"));
    }

    #[test]
    fn titles_with_underscores_are_still_bold() {
        let html = processor().process_text("A (2020). Using snake_case names. J.", None);
        assert!(html.contains("<strong>Using snake_case names.</strong>"));
    }

    #[test]
    fn question_title_does_not_swallow_doi() {
        let html = processor().process_text("Doe, J. (2024). Does it work? doi:10.1234/abcd", None);
        assert_eq!(
            html,
            "Doe, J. (2024). <strong>Does it work?</strong> \
             <a href=\"https://doi.org/10.1234/abcd\" target=\"_blank\" rel=\"noopener noreferrer\">doi:10.1234/abcd</a>"
        );
    }

    #[test]
    fn title_ending_before_doi_keeps_its_period_rule() {
        assert_eq!(
            bracket_title("A (2020). No end doi:10.1/x.y"),
            "A (2020). No end doi:10.1/x.y"
        );
        assert_eq!(
            bracket_title("A (2020). Wow! Cell. doi:10.1/x"),
            "A (2020). __TITLE_START__Wow! Cell.__TITLE_END__ doi:10.1/x"
        );
    }

    #[test]
    fn placeholder_lookalikes_in_text_stay_literal() {
        let html = processor().process_text(
            "Doe, J. (2020). Why __TITLE_END__ and __ASTERISK_PLACEHOLDER__ and \
             __AUTHOR_PLACEHOLDER_0__ and __DOI_PLACEHOLDER_0__ x. J. doi:10.1/a",
            None,
        );
        assert_eq!(
            html,
            "Doe, J. (2020). <strong>Why __TITLE_END__ and __ASTERISK_PLACEHOLDER__ and \
             __AUTHOR_PLACEHOLDER_0__ and __DOI_PLACEHOLDER_0__ x.</strong> J. \
             <a href=\"https://doi.org/10.1/a\" target=\"_blank\" rel=\"noopener noreferrer\">doi:10.1/a</a>"
        );
        assert!(!html.contains(UNDERSCORE_GUARD));
    }

    #[test]
    fn author_names_cannot_forge_markers() {
        let reference = Reference::new("k", "article")
            .with_field("title", "T")
            .with_field("year", "2020")
            .with_field("usera", "1")
            .with_authors(vec![Person::new("Doe__ASTERISK_PLACEHOLDER__", "Jane")]);
        let style = Apa::default();
        let citation = style.format_entry(&reference).unwrap();
        let html = processor().process(&citation, &reference, &style);
        assert_eq!(
            html,
            "Doe__ASTERISK_PLACEHOLDER__, J.<sup>*</sup> (2020). <strong>T.</strong>"
        );
    }

    #[test]
    fn forms_do_not_match_inside_other_names() {
        let html = processor().process_text("McSchaub, D., & Schaub, D.-P. (2020). T.", None);
        assert!(html.starts_with("McSchaub, D., &amp; Schaub, D.-P. (2020)."));
        assert_eq!(html.matches("<strong>").count(), 1);
    }

    #[test]
    fn untrusted_text_is_escaped() {
        let html = processor().process_text(
            r#"O'Neil, <b>X</b> & "Y" (2020). <img src=x onerror=alert(1)>. J & K."#,
            None,
        );
        let without_tags = html
            .replace("<strong>", "")
            .replace("</strong>", "");
        assert!(!without_tags.contains('<'));
        assert!(!without_tags.contains('>'));
        assert!(!without_tags.contains('"'));
        assert!(!without_tags.contains('\''));
        assert!(without_tags
            .replace("&amp;", "")
            .replace("&lt;", "")
            .replace("&gt;", "")
            .replace("&quot;", "")
            .replace("&#x27;", "")
            .find('&')
            .is_none());
    }
}
