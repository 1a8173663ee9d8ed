/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use pubweb_processor::RenderMode;

#[test]
fn card_for_doi_article() {
    let html = processor(PUBLICATIONS_BIB)
        .render(RenderMode::Card, false)
        .unwrap();
    let expected = [
        r#"                <div class="publication-card">"#,
        r#"                    <div class="publication-journal">Journal of Tests (2024)</div>"#,
        r#"                    <div class="publication-title">Some Title</div>"#,
        r#"                    <div class="publication-authors"><strong>Schaub, D. P.</strong></div>"#,
    ]
    .join("\n");
    assert!(html.contains(&expected));
    assert!(html.contains(r#"<a href="https://doi.org/10.1234/abcd" target="_blank" rel="noopener noreferrer" class="publication-link">Read Paper<svg"#));
}

#[test]
fn card_falls_back_to_archive_and_url() {
    let html = processor(PUBLICATIONS_BIB)
        .render(RenderMode::Card, false)
        .unwrap();
    assert!(html.contains(r#"<div class="publication-journal">arXiv (2024)</div>"#));
    assert!(html.contains(r#"<div class="publication-authors">Roe, R. &amp; <strong>Schaub, D.</strong></div>"#));
    assert!(html.contains(r#"<a href="https://arxiv.org/abs/2407.00001""#));
}

#[test]
fn card_without_year_shows_journal_only() {
    let html = processor(PUBLICATIONS_BIB)
        .render(RenderMode::Card, false)
        .unwrap();
    assert!(html.contains(r#"<div class="publication-journal">Tiny Press</div>"#));
}

#[test]
fn cards_are_joined_and_noted() {
    let html = processor(PUBLICATIONS_BIB)
        .render(RenderMode::Card, false)
        .unwrap();
    assert_eq!(html.matches(r#"<div class="publication-card">"#).count(), 4);
    assert!(html.contains("                </div>\n                <div class=\"publication-card\">"));
    assert_eq!(html.matches("publication-note").count(), 1);
    assert!(html.contains("Paired Work on RNA"));
}

#[test]
fn card_text_is_escaped() {
    let src = r#"
@article{xss,
  title = {Tags <script> Things},
  author = {O'Brien, Pat},
  journal = {Quotes "R" Us},
  year = {2020}
}
"#;
    let html = processor(src).render(RenderMode::Card, false).unwrap();
    assert!(html.contains("Tags &lt;script&gt; Things"));
    assert!(html.contains("O&#x27;Brien, P."));
    assert!(html.contains("Quotes &quot;R&quot; Us (2020)"));
    assert!(!html.contains("<script>"));
}

#[test]
fn selected_cards_only() {
    let html = processor(PUBLICATIONS_BIB)
        .render(RenderMode::Card, true)
        .unwrap();
    assert_eq!(html.matches(r#"<div class="publication-card">"#).count(), 2);
}
