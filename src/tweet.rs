//! Announcement text for a release.

use crate::event::{Release, RepoSlug};

/// Maximum tweet length, in characters
pub const MAX_TWEET_CHARS: usize = 280;

/// Appended to text cut down to [`MAX_TWEET_CHARS`]
pub const TRUNCATION_MARKER: char = '…';

/// Render the announcement for a release and fit it to the tweet limit.
///
/// The owner is part of the slug but does not appear in the text.
pub fn release_tweet(slug: &RepoSlug, release: &Release) -> String {
    format_tweet(&slug.repo, &release.tag_name, &release.html_url, release.body())
}

/// Fill the announcement template and fit the result to the tweet limit
pub fn format_tweet(repo: &str, tag_name: &str, html_url: &str, body: &str) -> String {
    let text = format!("New #{repo} release: v{tag_name}. {html_url}\n\n{body}");
    truncate_tweet(text)
}

/// Cut text longer than [`MAX_TWEET_CHARS`] to one character short of the
/// limit and append [`TRUNCATION_MARKER`]. Shorter text is returned as-is.
pub fn truncate_tweet(text: String) -> String {
    match text.char_indices().nth(MAX_TWEET_CHARS) {
        None => text,
        Some(_) => {
            let mut cut: String = text.chars().take(MAX_TWEET_CHARS - 1).collect();
            cut.push(TRUNCATION_MARKER);
            cut
        }
    }
}
