use crate::signals::CheckResult;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Width of the report rules.
const RULE_WIDTH: usize = 62;

/// Letter grade for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Grade {
    /// 80 and above.
    A,
    /// 65 to 79.
    B,
    /// 45 to 64.
    C,
    /// Under 45.
    D,
}

impl Grade {
    /// Map a score to its grade. Each band includes its lower bound.
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            Grade::A
        } else if score >= 65 {
            Grade::B
        } else if score >= 45 {
            Grade::C
        } else {
            Grade::D
        }
    }

    /// One line verdict for the grade.
    pub fn verdict(&self) -> &'static str {
        match self {
            Grade::A => "Excellent AI SEO readiness",
            Grade::B => "Good — a few improvements will help",
            Grade::C => "Average — AI engines may overlook your content",
            Grade::D => "Poor — significant AI SEO gaps detected",
        }
    }

    /// Status marker shown next to the grade.
    fn marker(&self) -> &'static str {
        match self {
            Grade::A => "🟢",
            Grade::B => "🟡",
            Grade::C => "🟠",
            Grade::D => "🔴",
        }
    }
}

/// Sum of the weights of the passing signals.
pub fn score(results: &[CheckResult]) -> u32 {
    results
        .iter()
        .filter(|r| r.passed)
        .map(|r| r.signal.weight)
        .sum()
}

/// Closing message for a score.
pub fn summary(score: u32) -> [&'static str; 2] {
    if score >= 75 {
        [
            "Your site is well-positioned to be cited by ChatGPT,",
            "Perplexity, Copilot, and Gemini. Keep it maintained.",
        ]
    } else if score >= 50 {
        [
            "AI engines can find your site but may skip it in favor",
            "of better-structured competitors. Fix the ❌ signals above.",
        ]
    } else {
        [
            "AI search engines will likely ignore your content entirely.",
            "Your competitors with better structure will be cited instead.",
        ]
    }
}

/// The outcome of one analysis.
#[derive(Debug, Clone)]
pub struct Report {
    /// The page analyzed.
    pub url: Url,
    /// Response time of the page request.
    pub response_time: Duration,
    /// Points earned out of 100.
    pub score: u32,
    /// Grade of the score.
    pub grade: Grade,
    /// Every check in table order.
    pub results: Vec<CheckResult>,
}

impl Report {
    /// Score and grade the results.
    pub fn new(url: Url, response_time: Duration, results: Vec<CheckResult>) -> Self {
        let score = score(&results);

        Self {
            url,
            response_time,
            score,
            grade: Grade::from_score(score),
            results,
        }
    }

    /// Passing checks in table order.
    pub fn passed(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.passed)
    }

    /// Failing checks with the highest impact first.
    pub fn failed(&self) -> Vec<&CheckResult> {
        let mut failed: Vec<&CheckResult> = self.results.iter().filter(|r| !r.passed).collect();
        failed.sort_by(|a, b| b.signal.weight.cmp(&a.signal.weight));
        failed
    }

    /// Human readable report.
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    /// Host, port and path of the page without the scheme.
    fn site(&self) -> String {
        let host = match (self.url.host_str(), self.url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (host, _) => host.unwrap_or_default().to_string(),
        };
        match self.url.path() {
            "/" | "" => host,
            path => format!("{host}{}", path.trim_end_matches('/')),
        }
    }

    /// Structured report.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport::from(self))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "─".repeat(RULE_WIDTH);

        writeln!(f, "\n{heavy}")?;
        writeln!(f, "  🤖 AI SEO Readiness Report")?;
        writeln!(f, "  Site: {}", self.site())?;
        writeln!(f, "  Response time: {:.2}s", self.response_time.as_secs_f64())?;
        writeln!(f, "{heavy}")?;

        writeln!(
            f,
            "\n  AI READINESS SCORE: {}/100  |  Grade: {}  {}",
            self.score,
            self.grade,
            self.grade.marker()
        )?;
        writeln!(f, "  {}", self.grade.verdict())?;

        writeln!(f, "\n{light}")?;
        writeln!(
            f,
            "  SIGNALS DETECTED  ({}/{} passing)",
            self.passed().count(),
            self.results.len()
        )?;
        writeln!(f, "{light}")?;
        for result in self.passed() {
            writeln!(f, "  ✅ {}", result.signal.name)?;
        }

        let failed = self.failed();
        if !failed.is_empty() {
            writeln!(f, "\n{light}")?;
            writeln!(f, "  MISSING SIGNALS  — AI engines may skip your content")?;
            writeln!(f, "{light}")?;
            for result in failed {
                writeln!(
                    f,
                    "  ❌ {}  (impact: {}pts)",
                    result.signal.name, result.signal.weight
                )?;
                writeln!(f, "     → {}", result.signal.why)?;
            }
        }

        writeln!(f, "\n{light}")?;
        writeln!(f, "  WHAT THIS MEANS FOR AI SEARCH")?;
        writeln!(f, "{light}")?;
        for line in summary(self.score) {
            writeln!(f, "  {line}")?;
        }
        writeln!(f, "\n{heavy}")
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct JsonReport<'a> {
    url: &'a str,
    response_time_s: f64,
    score: u32,
    grade: Grade,
    verdict: &'static str,
    signals: Vec<JsonSignal>,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct JsonSignal {
    id: crate::signals::SignalId,
    name: &'static str,
    weight: u32,
    passed: bool,
    why: &'static str,
}

#[cfg(feature = "serde")]
impl<'a> From<&'a Report> for JsonReport<'a> {
    fn from(report: &'a Report) -> Self {
        JsonReport {
            url: report.url.as_str(),
            response_time_s: (report.response_time.as_secs_f64() * 100.0).round() / 100.0,
            score: report.score,
            grade: report.grade,
            verdict: report.grade.verdict(),
            signals: report
                .results
                .iter()
                .map(|r| JsonSignal {
                    id: r.signal.id,
                    name: r.signal.name,
                    weight: r.signal.weight,
                    passed: r.passed,
                    why: r.signal.why,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::{SignalId, SIGNALS};

    fn results(passing: &[SignalId]) -> Vec<CheckResult> {
        SIGNALS
            .iter()
            .map(|signal| CheckResult {
                signal,
                passed: passing.contains(&signal.id),
            })
            .collect()
    }

    fn report(passing: &[SignalId]) -> Report {
        Report::new(
            Url::parse("https://choosealicense.com/").unwrap(),
            Duration::from_millis(420),
            results(passing),
        )
    }

    #[test]
    fn grade_boundaries() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(80), Grade::A);
        assert_eq!(Grade::from_score(79), Grade::B);
        assert_eq!(Grade::from_score(65), Grade::B);
        assert_eq!(Grade::from_score(64), Grade::C);
        assert_eq!(Grade::from_score(45), Grade::C);
        assert_eq!(Grade::from_score(44), Grade::D);
        assert_eq!(Grade::from_score(0), Grade::D);
    }

    #[test]
    fn score_sums_passing_weights() {
        assert_eq!(score(&results(&[])), 0);
        assert_eq!(
            score(&results(&[SignalId::SchemaMarkup, SignalId::RobotsTxt])),
            20
        );
        let all: Vec<SignalId> = SIGNALS.iter().map(|s| s.id).collect();
        assert_eq!(score(&results(&all)), 100);
    }

    #[test]
    fn failed_sorted_by_impact() {
        let report = report(&[SignalId::SchemaMarkup]);
        let weights: Vec<u32> = report.failed().iter().map(|r| r.signal.weight).collect();

        assert_eq!(weights.first(), Some(&10));
        assert!(weights.windows(2).all(|w| w[0] >= w[1]));
        // equal weights keep table order
        assert_eq!(report.failed()[0].signal.id, SignalId::Author);
        assert_eq!(report.failed()[1].signal.id, SignalId::Faq);
    }

    #[test]
    fn text_lists_passing_and_missing() {
        let report = report(&[SignalId::Https, SignalId::Headings]);
        let text = report.render_text();

        assert!(text.contains("Site: choosealicense.com"));
        assert!(text.contains("Response time: 0.42s"));
        assert!(text.contains("AI READINESS SCORE: 16/100  |  Grade: D"));
        assert!(text.contains("SIGNALS DETECTED  (2/12 passing)"));
        assert!(text.contains("✅ HTTPS / Secure connection"));
        assert!(text.contains("❌ Schema Markup (JSON-LD)  (impact: 15pts)"));
        assert!(text.contains("→ AI engines use structured data"));
        assert!(text.contains(summary(16)[0]));
    }

    #[test]
    fn site_keeps_port_and_path() {
        let report = |url: &str| Report::new(Url::parse(url).unwrap(), Duration::ZERO, results(&[]));

        assert_eq!(report("http://127.0.0.1:8080/").site(), "127.0.0.1:8080");
        assert_eq!(report("https://choosealicense.com:443/").site(), "choosealicense.com");
        assert_eq!(report("http://localhost:3000/docs/").site(), "localhost:3000/docs");
        assert!(report("http://127.0.0.1:8080/")
            .render_text()
            .contains("Site: 127.0.0.1:8080\n"));
    }

    #[test]
    fn perfect_report_has_no_missing_section() {
        let all: Vec<SignalId> = SIGNALS.iter().map(|s| s.id).collect();
        let text = report(&all).render_text();

        assert!(text.contains("Grade: A"));
        assert!(text.contains(Grade::A.verdict()));
        assert!(!text.contains("MISSING SIGNALS"));
        assert!(text.contains("well-positioned"));
    }

    #[test]
    fn summary_thresholds() {
        assert_eq!(summary(75), summary(100));
        assert_ne!(summary(74), summary(75));
        assert_eq!(summary(50), summary(74));
        assert_ne!(summary(49), summary(50));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_report() {
        let json = report(&[SignalId::Faq]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["score"], 10);
        assert_eq!(value["grade"], "D");
        assert_eq!(value["response_time_s"], 0.42);
        assert_eq!(value["signals"][2]["id"], "faq");
        assert_eq!(value["signals"][2]["passed"], true);
        assert_eq!(value["signals"].as_array().unwrap().len(), 12);
    }
}
