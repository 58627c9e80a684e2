mod args;

use clap::Parser;
use dotenvy::dotenv;
use std::sync::mpsc;
use tracing_subscriber::EnvFilter;

use args::Args;
use osia_catalog::matcher::{categories, find_category, CategoryMatch};
use osia_catalog::{create, AppCategory};

const DEFAULT_ENDPOINT: &str =
    "https://raw.githubusercontent.com/dkhamsing/open-source-ios-apps/master/contents.json";

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn print_categories(root: &AppCategory) {
    println!("Categories: ");
    for category in root.children.iter().flatten() {
        println!(
            "{} ({})",
            category.title.as_deref().unwrap_or_default(),
            category.app_count()
        );
        for child in category.children.iter().flatten() {
            println!(
                "  {} ({})",
                child.title.as_deref().unwrap_or_default(),
                child.app_count()
            );
        }
    }
}

fn print_apps(category: &AppCategory) {
    println!("Apps in {}: ", category.title.as_deref().unwrap_or_default());
    for app in category.apps.iter().flatten() {
        match (&app.title, app.stars) {
            (Some(title), Some(stars)) => println!("{} ({} stars)", title, stars),
            (Some(title), None) => println!("{}", title),
            (None, _) => println!("(untitled)"),
        }
    }
}

fn main() -> Result<()> {
    let args: Args = Args::parse();

    // load environment variables from .env file
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let endpoint: String = args
        .url
        .or_else(|| std::env::var("OSIA_ENDPOINT").ok())
        .unwrap_or(DEFAULT_ENDPOINT.to_string());

    let (tx, rx) = mpsc::channel();
    let handle = create(&endpoint, move |root| {
        let _ = tx.send(root);
    })
    .ok_or("invalid endpoint")?;

    handle.join().map_err(|_| "loader thread panicked")?;
    let root: AppCategory = rx.recv().map_err(|_| "catalogue could not be loaded")?;

    tracing::info!("Loaded {} categories", categories(&root).len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&root)?);
    }

    if args.list_categories {
        print_categories(&root);
    }

    if let Some(query) = args.category {
        match find_category(&root, &query) {
            CategoryMatch::Found(category) => print_apps(category),
            CategoryMatch::Suggestions(matches) => {
                println!(
                    "No exact match found for {}. Did you mean one of the following?",
                    query
                );
                for category in matches {
                    println!("{}", category.title.as_deref().unwrap_or_default());
                }
            }
            CategoryMatch::NotFound => println!("No category matches found for {}", query),
        }
    }

    Ok(())
}
