use serde::Deserialize;

/// Story identifier assigned by the API. Opaque and immutable.
pub type StoryId = u64;

/// Shown when a fetched item carries no title.
pub const NO_TITLE: &str = "<no title>";

/// Placeholder tuple for a story whose fetch failed.
pub const FAILED_TITLE: &str = "<RATE LIMITED>";
pub const FAILED_URL: &str = "\u{1f62d}";

/// Metadata of a fetched story. The API serves many more fields; only
/// the ones the table shows are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Story {
    pub title: Option<String>,
    pub url: Option<String>,
}

impl Story {
    /// Title for display, HTML entities decoded. Missing or empty titles
    /// fall back to [`NO_TITLE`].
    pub fn display_title(&self) -> String {
        match self.title.as_deref().filter(|t| !t.is_empty()) {
            Some(title) => html_escape::decode_html_entities(title).into_owned(),
            None => NO_TITLE.to_string(),
        }
    }

    /// Link for display. Stories without one (Ask HN, jobs) point at
    /// their comment page.
    pub fn display_url(&self, id: StoryId) -> String {
        match self.url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => url.to_string(),
            None => format!("https://news.ycombinator.com/item?id={id}"),
        }
    }
}

/// Outcome of a single story fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowContent {
    /// Item fetched and parsed.
    Story(Story),
    /// Fetch failed; the row renders the fixed placeholder tuple.
    Failed,
}

/// One rank slot of the result table.
///
/// The rank is assigned when the id window is resolved and never changes;
/// fetch completion order has no bearing on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRow {
    pub rank: usize,
    pub id: StoryId,
    pub content: RowContent,
}

impl StoryRow {
    pub fn title(&self) -> String {
        match &self.content {
            RowContent::Story(story) => story.display_title(),
            RowContent::Failed => FAILED_TITLE.to_string(),
        }
    }

    pub fn url(&self) -> String {
        match &self.content {
            RowContent::Story(story) => story.display_url(self.id),
            RowContent::Failed => FAILED_URL.to_string(),
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self.content, RowContent::Story(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_title_decodes_entities() {
        let story = Story {
            title: Some("Ask HN: Rust &amp; C interop?".into()),
            url: None,
        };
        assert_eq!(story.display_title(), "Ask HN: Rust & C interop?");
    }

    #[test]
    fn missing_title_falls_back() {
        let story = Story { title: None, url: None };
        assert_eq!(story.display_title(), NO_TITLE);
    }

    #[test]
    fn empty_title_falls_back() {
        let story = Story { title: Some(String::new()), url: None };
        assert_eq!(story.display_title(), NO_TITLE);
    }

    #[test]
    fn missing_url_falls_back_to_permalink() {
        let story = Story { title: Some("A story".into()), url: None };
        assert_eq!(
            story.display_url(8863),
            "https://news.ycombinator.com/item?id=8863"
        );
    }

    #[test]
    fn present_url_is_kept() {
        let story = Story {
            title: None,
            url: Some("https://example.com/post".into()),
        };
        assert_eq!(story.display_url(1), "https://example.com/post");
    }

    #[test]
    fn failed_row_renders_the_placeholder_tuple() {
        let row = StoryRow { rank: 7, id: 42, content: RowContent::Failed };
        assert_eq!(row.title(), FAILED_TITLE);
        assert_eq!(row.url(), FAILED_URL);
        assert!(!row.is_fetched());
    }

    #[test]
    fn story_deserializes_with_unknown_fields() {
        let story: Story = serde_json::from_str(
            r#"{"id": 1, "type": "story", "title": "Hello", "score": 3}"#,
        )
        .unwrap();
        assert_eq!(story.title.as_deref(), Some("Hello"));
        assert_eq!(story.url, None);
    }
}
