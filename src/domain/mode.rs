use std::fmt;

use clap::ValueEnum;

/// Story listing category, matching the ranked listings the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Top,
    New,
    Best,
    Ask,
    Show,
    Job,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Top => "top",
            Mode::New => "new",
            Mode::Best => "best",
            Mode::Ask => "ask",
            Mode::Show => "show",
            Mode::Job => "job",
        }
    }

    /// Path of this listing's ranked id array, relative to the API base.
    pub fn listing_path(self) -> String {
        format!("{}stories.json", self.as_str())
    }

    /// Maximum number of ids the API serves for this listing.
    pub fn max_listing(self) -> usize {
        match self {
            Mode::Top | Mode::New | Mode::Best => 500,
            Mode::Ask | Mode::Show | Mode::Job => 200,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_paths_follow_the_api_scheme() {
        assert_eq!(Mode::Top.listing_path(), "topstories.json");
        assert_eq!(Mode::Job.listing_path(), "jobstories.json");
    }

    #[test]
    fn front_page_listings_cap_at_500() {
        assert_eq!(Mode::Top.max_listing(), 500);
        assert_eq!(Mode::New.max_listing(), 500);
        assert_eq!(Mode::Best.max_listing(), 500);
    }

    #[test]
    fn section_listings_cap_at_200() {
        assert_eq!(Mode::Ask.max_listing(), 200);
        assert_eq!(Mode::Show.max_listing(), 200);
        assert_eq!(Mode::Job.max_listing(), 200);
    }

    #[test]
    fn displays_as_lowercase_name() {
        assert_eq!(Mode::Best.to_string(), "best");
    }
}
