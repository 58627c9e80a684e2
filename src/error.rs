/// Errors that end a catalogue load. None of them reach the completion callback.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error: creating endpoint {url}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Error: request failed: {source}")]
    TransportFailure {
        #[source]
        source: reqwest::Error,
    },
    #[error("Error: no data")]
    NoData,
    #[error("Error: conversion from JSON failed: {source}")]
    DecodeFailure {
        #[source]
        source: serde_json::Error,
    },
    #[error("Error: conversion from JSON failed: top level is not an object")]
    NotAnObject,
    #[error("Error: missing `{0}` array")]
    MissingCollection(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
