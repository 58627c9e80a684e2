use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Catalogue endpoint (defaults to OSIA_ENDPOINT, then the public catalogue)
    #[arg(long)]
    pub url: Option<String>,

    /// Show the apps of a category, matched by title
    #[arg(long)]
    pub category: Option<String>,

    /// List all the categories
    #[arg(long)]
    pub list_categories: bool,

    /// Print the whole tree as JSON
    #[arg(long)]
    pub json: bool,
}
