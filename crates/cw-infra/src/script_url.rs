//! Embed script URL parsing.

use anyhow::Context;
use reqwest::Url;

/// Query parameters of the embed script's `src` attribute, in document
/// order. This is how the storefront passes widget configuration.
pub fn embed_query_pairs(src: &str) -> anyhow::Result<Vec<(String, String)>> {
    let url = Url::parse(src).context("embed script src is not an absolute url")?;
    Ok(url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect())
}
