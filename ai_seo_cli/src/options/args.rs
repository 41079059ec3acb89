use crate::options::OutputFormat;
use clap::Parser;

/// program to score how ready a website is to be cited by AI search engines.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// The domain or website URL to analyze. Defaults to https when no scheme is given.
    pub url: String,
    /// Print the requests made on standard error.
    #[clap(short, long)]
    pub verbose: bool,
    /// User-Agent
    #[clap(short, long)]
    pub agent: Option<String>,
    /// Timeout in seconds for the page request.
    #[clap(long, default_value_t = 12, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,
    /// Timeout in seconds for the robots.txt and sitemap.xml requests.
    #[clap(long, default_value_t = 8, value_parser = clap::value_parser!(u64).range(1..))]
    pub probe_timeout: u64,
    /// Comma seperated markers that count as an author signal, replacing the defaults.
    #[clap(long, value_delimiter = ',')]
    pub author_markers: Option<Vec<String>>,
    /// Comma seperated markers that count as FAQ content, replacing the defaults.
    #[clap(long, value_delimiter = ',')]
    pub faq_markers: Option<Vec<String>>,
    /// Report output format.
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
