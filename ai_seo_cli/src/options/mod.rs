mod args;
mod format;

pub use args::Cli;
pub use format::OutputFormat;
