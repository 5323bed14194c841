// Output and delivery arguments
// Licensed under GPL-3.0

use clap::Args;
use std::path::PathBuf;

/// Where artifacts go and how the result is printed
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write artifacts under DIR/<bucket>/<key> instead of uploading to S3
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip the summary notification even if a topic is configured
    #[arg(long = "no-notify")]
    pub no_notify: bool,

    /// Pretty print the invocation result
    #[arg(long = "pretty")]
    pub pretty: bool,
}
