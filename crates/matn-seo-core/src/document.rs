//! Structured-document capability.
//!
//! The engine never parses markup itself. It consumes structural views —
//! headings, paragraphs, images, links, emphasis runs — through the
//! [`StructuredDocument`] trait, and [`HtmlDocument`] provides the
//! default implementation on top of `scraper`. Callers with a different
//! markup pipeline can inject their own implementation.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").expect("valid selector"));

static PARAGRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid selector"));

static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("valid selector"));

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid selector"));

static STYLED_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[style]").expect("valid selector"));

/// Inline style values treated as the decorative keyword emphasis color.
const EMPHASIS_COLOR_VALUES: &[&str] = &["blue", "#00f", "#0000ff", "rgb(0, 0, 255)"];

/// A heading with its level (1–6) and text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level, 1 for the top-level title.
    pub level: u8,
    /// Text content of the heading.
    pub text: String,
}

/// An image with its alternative text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// The `alt` attribute, empty when absent.
    pub alt: String,
}

/// A hyperlink with its anchor text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Visible anchor text.
    pub text: String,
}

/// Structural views over a parsed markup document.
///
/// All text accessors return raw surface text; normalization is the
/// consumer's job.
pub trait StructuredDocument {
    /// All text content, headings included.
    fn plain_text(&self) -> String;

    /// Text content with heading text removed. Density denominators use
    /// this view so headings do not dilute body measurements.
    fn body_text(&self) -> String;

    /// Concatenated text of all headings.
    fn headings_text(&self) -> String;

    /// All headings in document order.
    fn headings(&self) -> Vec<Heading>;

    /// All non-empty paragraph texts in document order.
    fn paragraphs(&self) -> Vec<String>;

    /// The first non-empty paragraph, when one exists.
    fn first_paragraph(&self) -> Option<String> {
        self.paragraphs().into_iter().next()
    }

    /// All images in document order.
    fn images(&self) -> Vec<Image>;

    /// All hyperlinks in document order.
    fn links(&self) -> Vec<Link>;

    /// Text runs styled with the decorative emphasis color.
    fn emphasized_runs(&self) -> Vec<String>;
}

/// [`StructuredDocument`] backed by an HTML fragment parse.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a markup fragment. Malformed markup is recovered the way
    /// browsers recover it; this never fails.
    #[tracing::instrument(skip_all, fields(markup_len = markup.len()))]
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_fragment(markup),
        }
    }

    fn element_text(element: ElementRef<'_>) -> String {
        element.text().collect::<Vec<_>>().join(" ")
    }
}

impl StructuredDocument for HtmlDocument {
    fn plain_text(&self) -> String {
        Self::element_text(self.html.root_element())
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        collect_text_skipping_headings(self.html.root_element(), &mut out);
        out
    }

    fn headings_text(&self) -> String {
        self.html
            .select(&HEADING_SELECTOR)
            .map(Self::element_text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn headings(&self) -> Vec<Heading> {
        self.html
            .select(&HEADING_SELECTOR)
            .filter_map(|el| {
                let level = heading_level(el.value().name())?;
                Some(Heading {
                    level,
                    text: Self::element_text(el).trim().to_string(),
                })
            })
            .collect()
    }

    fn paragraphs(&self) -> Vec<String> {
        self.html
            .select(&PARAGRAPH_SELECTOR)
            .map(|el| Self::element_text(el).trim().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    }

    fn images(&self) -> Vec<Image> {
        self.html
            .select(&IMAGE_SELECTOR)
            .map(|el| Image {
                alt: el.value().attr("alt").unwrap_or_default().to_string(),
            })
            .collect()
    }

    fn links(&self) -> Vec<Link> {
        self.html
            .select(&LINK_SELECTOR)
            .map(|el| Link {
                text: Self::element_text(el).trim().to_string(),
            })
            .collect()
    }

    fn emphasized_runs(&self) -> Vec<String> {
        self.html
            .select(&STYLED_SELECTOR)
            .filter(|el| {
                el.value()
                    .attr("style")
                    .is_some_and(|style| is_emphasis_style(style))
            })
            .map(|el| Self::element_text(el).trim().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    }
}

fn heading_level(tag_name: &str) -> Option<u8> {
    match tag_name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn is_emphasis_style(style: &str) -> bool {
    let style = style.to_lowercase();
    style.contains("color") && EMPHASIS_COLOR_VALUES.iter().any(|value| style.contains(value))
}

/// Depth-first text collection that skips heading subtrees.
fn collect_text_skipping_headings(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            if heading_level(child_element.value().name()).is_none() {
                collect_text_skipping_headings(child_element, out);
                out.push(' ');
            }
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
}
