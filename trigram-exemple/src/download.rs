use std::time::Duration;

use log::{info, warn};
use reqwest::blocking::Client;

/// Root of the Project Gutenberg plain-text file tree.
pub const DEFAULT_BASE_URL: &str = "https://www.gutenberg.org/files";

const TIMEOUT: Duration = Duration::from_secs(10);

/// Candidate URLs for a book, in the order they are tried.
///
/// Example: `11` -> `.../11/11-0.txt`, then `.../11/11.txt`
pub fn book_urls(base_url: &str, book_id: u64) -> [String; 2] {
    let base = base_url.trim_end_matches('/');
    [
        format!("{base}/{book_id}/{book_id}-0.txt"),
        format!("{base}/{book_id}/{book_id}.txt"),
    ]
}

/// Downloads a Project Gutenberg book by id.
///
/// Tries the UTF-8 `{id}-0.txt` file first, then the legacy `{id}.txt`.
/// HTTP error statuses count as failures. Returns the last error if both fail.
pub fn download_book(base_url: &str, book_id: u64) -> reqwest::Result<String> {
    let client = Client::builder().timeout(TIMEOUT).build()?;
    let [primary, alternative] = book_urls(base_url, book_id);

    fetch(&client, &primary).or_else(|err| {
        warn!("{primary}: {err}, trying {alternative}");
        fetch(&client, &alternative)
    })
}

fn fetch(client: &Client, url: &str) -> reqwest::Result<String> {
    info!("downloading {url}");
    client.get(url).send()?.error_for_status()?.text()
}
