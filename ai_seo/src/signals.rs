use crate::configuration::Configuration;
use crate::page::Page;
use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use regex::Regex;
use std::time::Duration;

lazy_static! {
    /// JSON-LD script blocks.
    static ref SCHEMA_AC: AhoCorasick = case_insensitive(&["application/ld+json"])
        .expect("valid schema patterns");
    /// Meta description in either quote style.
    static ref META_DESCRIPTION_AC: AhoCorasick =
        case_insensitive(&["name=\"description\"", "name='description'"])
            .expect("valid meta description patterns");
    /// Open Graph properties.
    static ref OPEN_GRAPH_AC: AhoCorasick =
        case_insensitive(&["property=\"og:", "property='og:"]).expect("valid open graph patterns");
    /// Canonical link.
    static ref CANONICAL_AC: AhoCorasick =
        case_insensitive(&["rel=\"canonical\"", "rel='canonical'"]).expect("valid canonical patterns");
    /// Viewport meta.
    static ref VIEWPORT_AC: AhoCorasick =
        case_insensitive(&["name=\"viewport\"", "name='viewport'"]).expect("valid viewport patterns");
    /// Opening h1, h2 or h3 tag.
    static ref HEADING_RE: Regex = Regex::new(r"(?i)<h[123][^>]*>").expect("valid heading regex");
}

/// Build an ascii case insensitive matcher.
fn case_insensitive<P: AsRef<[u8]>>(patterns: &[P]) -> Result<AhoCorasick, aho_corasick::BuildError> {
    AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostFirst)
        .build(patterns)
}

/// Stable identifier of a signal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SignalId {
    /// JSON-LD structured data.
    SchemaMarkup,
    /// Identifiable author.
    Author,
    /// FAQ or Q&A content.
    Faq,
    /// h1-h3 headings.
    Headings,
    /// Meta description tag.
    MetaDescription,
    /// Open Graph tags.
    OpenGraph,
    /// Canonical link tag.
    Canonical,
    /// Served over https.
    Https,
    /// robots.txt found.
    RobotsTxt,
    /// sitemap.xml found.
    Sitemap,
    /// Page answered under the threshold.
    FastResponse,
    /// Viewport meta tag.
    Viewport,
}

/// The configurable heuristics of a run: compiled author and FAQ markers
/// and the fast response threshold.
#[derive(Debug, Clone)]
pub struct Heuristics {
    /// Author heuristics, `None` when no marker is configured.
    author: Option<AhoCorasick>,
    /// FAQ heuristics, `None` when no marker is configured.
    faq: Option<AhoCorasick>,
    /// Fast response threshold.
    fast_response: Duration,
}

impl Heuristics {
    /// Compile the heuristics of the configuration.
    pub fn from_configuration(configuration: &Configuration) -> Self {
        Self {
            author: compile_markers("author", &configuration.author_markers),
            faq: compile_markers("faq", &configuration.faq_markers),
            fast_response: configuration.fast_response,
        }
    }
}

impl Default for Heuristics {
    fn default() -> Self {
        Self::from_configuration(&Configuration::default())
    }
}

fn compile_markers(kind: &str, markers: &[String]) -> Option<AhoCorasick> {
    if markers.is_empty() {
        log::warn!("no {kind} markers configured, the signal always fails");
        return None;
    }
    match case_insensitive(markers) {
        Ok(ac) => Some(ac),
        Err(e) => {
            log::warn!("unable to compile {kind} markers: {e}");
            None
        }
    }
}

/// A weighted readiness signal.
#[derive(Debug, Clone, Copy)]
pub struct Signal {
    /// Stable identifier.
    pub id: SignalId,
    /// Display name.
    pub name: &'static str,
    /// Points earned when the signal passes.
    pub weight: u32,
    /// Why AI engines care about the signal.
    pub why: &'static str,
    /// Pass or fail against the fetched page.
    pub check: fn(&Page, &Heuristics) -> bool,
}

impl Signal {
    /// Run the check.
    pub fn passes(&self, page: &Page, heuristics: &Heuristics) -> bool {
        (self.check)(page, heuristics)
    }
}

/// Every signal in report order. The weights sum to 100.
pub static SIGNALS: [Signal; 12] = [
    Signal {
        id: SignalId::SchemaMarkup,
        name: "Schema Markup (JSON-LD)",
        weight: 15,
        why: "AI engines use structured data to understand entities and facts",
        check: has_schema_markup,
    },
    Signal {
        id: SignalId::Author,
        name: "Author / Expertise signal",
        weight: 10,
        why: "E-E-A-T: AI prefers content with identifiable authors",
        check: has_author,
    },
    Signal {
        id: SignalId::Faq,
        name: "FAQ or Q&A content",
        weight: 10,
        why: "AI engines love extracting Q&A pairs as direct answers",
        check: has_faq,
    },
    Signal {
        id: SignalId::Headings,
        name: "Heading structure (H1/H2/H3)",
        weight: 8,
        why: "Clear hierarchy helps AI parse and chunk your content",
        check: has_headings,
    },
    Signal {
        id: SignalId::MetaDescription,
        name: "Meta description",
        weight: 8,
        why: "Used as fallback summary when AI cites your page",
        check: has_meta_description,
    },
    Signal {
        id: SignalId::OpenGraph,
        name: "Open Graph tags",
        weight: 7,
        why: "Helps AI engines identify canonical title and description",
        check: has_open_graph,
    },
    Signal {
        id: SignalId::Canonical,
        name: "Canonical URL tag",
        weight: 7,
        why: "Prevents AI from citing duplicate/wrong version of your page",
        check: has_canonical,
    },
    Signal {
        id: SignalId::Https,
        name: "HTTPS / Secure connection",
        weight: 8,
        why: "AI engines deprioritize non-secure sources",
        check: is_https,
    },
    Signal {
        id: SignalId::RobotsTxt,
        name: "robots.txt present",
        weight: 5,
        why: "Signals a technically maintained, crawlable website",
        check: has_robots_txt,
    },
    Signal {
        id: SignalId::Sitemap,
        name: "sitemap.xml present",
        weight: 7,
        why: "Helps AI crawlers discover all your content efficiently",
        check: has_sitemap,
    },
    Signal {
        id: SignalId::FastResponse,
        name: "Fast response (<2s)",
        weight: 8,
        why: "Slow sites get deprioritized in AI-driven search ranking",
        check: is_fast,
    },
    Signal {
        id: SignalId::Viewport,
        name: "Viewport / Mobile-friendly",
        weight: 7,
        why: "Mobile-first indexing affects AI crawl priority",
        check: has_viewport,
    },
];

/// Sum of every signal weight.
pub fn total_weight() -> u32 {
    SIGNALS.iter().map(|s| s.weight).sum()
}

/// Pass or fail of a single signal for a run.
#[derive(Debug, Clone, Copy)]
pub struct CheckResult {
    /// The signal checked.
    pub signal: &'static Signal,
    /// The signal is present.
    pub passed: bool,
}

/// Run every signal against the page in table order.
pub fn evaluate(page: &Page, heuristics: &Heuristics) -> Vec<CheckResult> {
    SIGNALS
        .iter()
        .map(|signal| {
            let passed = signal.passes(page, heuristics);
            log::debug!("{} - {}", signal.id, if passed { "pass" } else { "fail" });
            CheckResult { signal, passed }
        })
        .collect()
}

fn has_schema_markup(page: &Page, _: &Heuristics) -> bool {
    SCHEMA_AC.is_match(page.get_html())
}

fn has_author(page: &Page, heuristics: &Heuristics) -> bool {
    heuristics
        .author
        .as_ref()
        .is_some_and(|ac| ac.is_match(page.get_html()))
}

fn has_faq(page: &Page, heuristics: &Heuristics) -> bool {
    heuristics
        .faq
        .as_ref()
        .is_some_and(|ac| ac.is_match(page.get_html()))
}

fn has_headings(page: &Page, _: &Heuristics) -> bool {
    HEADING_RE.is_match(page.get_html())
}

fn has_meta_description(page: &Page, _: &Heuristics) -> bool {
    META_DESCRIPTION_AC.is_match(page.get_html())
}

fn has_open_graph(page: &Page, _: &Heuristics) -> bool {
    OPEN_GRAPH_AC.is_match(page.get_html())
}

fn has_canonical(page: &Page, _: &Heuristics) -> bool {
    CANONICAL_AC.is_match(page.get_html())
}

fn is_https(page: &Page, _: &Heuristics) -> bool {
    page.is_secure()
}

fn has_robots_txt(page: &Page, _: &Heuristics) -> bool {
    page.has_robots_txt()
}

fn has_sitemap(page: &Page, _: &Heuristics) -> bool {
    page.has_sitemap_xml()
}

fn is_fast(page: &Page, heuristics: &Heuristics) -> bool {
    page.duration() < heuristics.fast_response
}

fn has_viewport(page: &Page, _: &Heuristics) -> bool {
    VIEWPORT_AC.is_match(page.get_html())
}
