mod client;
mod github;

use crate::{App, Client};

use std::io::Cursor;

use st_config::GithubConfig;

/// App over scripted input and captured output; the client points at a
/// closed port, so any accidental network call fails fast.
pub(crate) fn test_app(script: &str) -> App<Cursor<String>, Vec<u8>> {
    let client = Client::new("http://127.0.0.1:9");
    App::new(
        client,
        GithubConfig::default(),
        Cursor::new(script.to_string()),
        Vec::new(),
    )
}
