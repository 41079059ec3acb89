#![warn(missing_docs)]

//! Readiness checker that fetches a single web page and scores how
//! well it is prepared to be cited by AI search engines.
//!
//! A run fetches the page once, probes `/robots.txt` and `/sitemap.xml`,
//! evaluates a fixed table of weighted signals and sums the weights of the
//! signals that are present into a score out of 100.
//!
//! # How to use
//!
//! - [`Website::analyze`] fetches the page and builds a [`Report`].
//! - [`evaluate`] runs the signal table against an already fetched [`Page`].
//!
//! [`Website::analyze`]: website/struct.Website.html#method.analyze
//! [`Report`]: report/struct.Report.html
//! [`evaluate`]: signals/fn.evaluate.html
//! [`Page`]: page/struct.Page.html
//!
//! # Basic usage
//!
//! ```no_run
//! use ai_seo::website::Website;
//!
//! # async fn run() -> Result<(), ai_seo::error::FetchError> {
//! let website = Website::new("example.com");
//! let report = website.analyze().await?;
//! println!("{}", report.render_text());
//! # Ok(())
//! # }
//! ```

extern crate log;
extern crate reqwest;
pub extern crate tokio;
pub extern crate url;
#[macro_use]
extern crate lazy_static;

/// Configuration structure for `Website`.
pub mod configuration;
/// Errors returned while fetching the page.
pub mod error;
/// The fetched page evidence.
pub mod page;
/// Scoring, grading and report rendering.
pub mod report;
/// The signal table and its checks.
pub mod signals;
/// Application utils.
pub mod utils;
/// A website to analyze.
pub mod website;

pub use reqwest::{Client, StatusCode};
