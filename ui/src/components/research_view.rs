use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Bundled editorial content; updated with releases, never fetched.
const RESEARCH_MD: &str = include_str!("../../../docs/research.md");

#[derive(Clone, PartialEq)]
struct Article {
    heading: String,
    body_html: String,
}

fn render_markdown(md: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    let mut out = String::new();
    html::push_html(&mut out, Parser::new_ext(md, opts));
    out
}

/// Split the document into an intro plus one article per `##` heading.
fn split_articles(source: &str) -> (String, Vec<Article>) {
    let mut chunks = source.split("\n## ");
    let intro = chunks.next().unwrap_or_default();
    let articles = chunks
        .map(|chunk| {
            let (heading, body) = chunk.split_once('\n').unwrap_or((chunk, ""));
            Article {
                heading: heading.trim().to_string(),
                body_html: render_markdown(body),
            }
        })
        .collect();
    (render_markdown(intro), articles)
}

/// The research page: intro text plus collapsible articles, one open at
/// a time.
#[component]
pub fn ResearchView() -> Element {
    let parsed = use_hook(|| split_articles(RESEARCH_MD));
    let mut open = use_signal(|| None::<usize>);

    let (intro_html, articles) = &parsed;

    rsx! {
        div { class: "research-view",
            div {
                class: "research-content",
                dangerous_inner_html: "{intro_html}"
            }
            for (i, article) in articles.iter().enumerate() {
                div { class: "research-article",
                    div {
                        class: "article-header",
                        onclick: move |_| {
                            if open() == Some(i) {
                                open.set(None);
                            } else {
                                open.set(Some(i));
                            }
                        },
                        span { class: "article-chevron",
                            if open() == Some(i) { "▾" } else { "▸" }
                        }
                        "{article.heading}"
                    }
                    if open() == Some(i) {
                        div {
                            class: "article-body research-content",
                            dangerous_inner_html: "{article.body_html}"
                        }
                    }
                }
            }
        }
    }
}
