//! The catalogue data source: fetch, decode, index and assemble in one load.
//!
//! A load either hands one complete tree to its completion callback or logs
//! why it stopped. The callback is never called with partial results, and a
//! load that fails never calls it at all.

use reqwest::blocking::{Client, ClientBuilder};
use serde_json::{Map, Value};
use std::thread::{self, JoinHandle};
use url::Url;

use crate::data::AppCategory;
use crate::decode::decode;
use crate::download::{download, parse_endpoint};
use crate::error::{Error, Result};
use crate::index::generate_mapping;
use crate::tree::generate_root;

const CATEGORIES: &str = "categories";
const PROJECTS: &str = "projects";

/// Starts loading the catalogue at `url` on a background thread.
///
/// Returns `None` without calling `completion` when `url` is not a valid URL.
/// The handle only lets a caller wait for the load; there is no way to cancel it.
pub fn create<F>(url: &str, completion: F) -> Option<JoinHandle<()>>
where
    F: FnOnce(AppCategory) + Send + 'static,
{
    create_with(Client::builder(), url, completion)
}

/// Like [`create`], with the HTTP client built from `builder` on the load thread.
pub fn create_with<F>(builder: ClientBuilder, url: &str, completion: F) -> Option<JoinHandle<()>>
where
    F: FnOnce(AppCategory) + Send + 'static,
{
    let endpoint = match parse_endpoint(url) {
        Ok(endpoint) => endpoint,
        Err(err) => {
            tracing::error!("{}", err);
            return None;
        }
    };

    Some(thread::spawn(move || {
        let loaded = builder
            .build()
            .map_err(|source| Error::TransportFailure { source })
            .and_then(|client| load(&client, &endpoint));
        match loaded {
            Ok(root) => completion(root),
            Err(err) => tracing::error!(endpoint = %endpoint, "{}", err),
        }
    }))
}

/// Runs a whole load on the calling thread.
pub fn load(client: &Client, endpoint: &Url) -> Result<AppCategory> {
    let body = download(client, endpoint)?;
    let json = decode(&body)?;
    parse(&json)
}

/// Turns a decoded catalogue document into the category tree.
pub fn parse(json: &Map<String, Value>) -> Result<AppCategory> {
    let categories = collection(json, CATEGORIES)?;
    let apps = collection(json, PROJECTS)?;

    let mapping = generate_mapping(apps);
    tracing::debug!(
        projects = apps.len(),
        categories = categories.len(),
        indexed = mapping.len(),
        "indexed catalogue"
    );

    Ok(generate_root(&mapping, categories))
}

fn collection<'a>(json: &'a Map<String, Value>, key: &'static str) -> Result<&'a [Value]> {
    json.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or(Error::MissingCollection(key))
}
