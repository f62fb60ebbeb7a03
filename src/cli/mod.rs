pub mod commands;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::domain::Mode;
use crate::fetcher::parallel::DEFAULT_WORKERS;

#[derive(Parser, Debug)]
#[command(name = "hnd")]
#[command(version, about = "Display ranked Hacker News stories in the terminal", long_about = None)]
pub struct Cli {
    /// Story listing to display
    #[arg(short, long, value_enum, default_value_t = Mode::Top)]
    pub mode: Mode,

    /// Rank to start from (1-based)
    #[arg(short, long, default_value_t = 1, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub start: usize,

    /// Number of stories to display
    #[arg(short, long, default_value_t = 50, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub num: usize,

    /// Minimum number of parallel fetch workers
    #[arg(short, long, default_value_t = DEFAULT_WORKERS, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub workers: usize,
}

impl Cli {
    /// Rank of the furthest story the window reaches.
    pub fn window_end(&self) -> usize {
        self.start.saturating_add(self.num) - 1
    }

    /// The cross-flag check clap's per-value ranges cannot express.
    fn window_error(&self) -> Option<String> {
        let limit = self.mode.max_listing();
        (self.window_end() > limit).then(|| {
            format!(
                "the sum of start and num minus 1 (rank of the furthest story) \
                 must not exceed {limit}, the {} listing limit",
                self.mode
            )
        })
    }
}

/// Parse arguments and apply the window bound. Prints a usage error and
/// exits non-zero on failure, before any network activity.
pub fn parse_validated() -> Cli {
    let cli = Cli::parse();
    if let Some(message) = cli.window_error() {
        Cli::command()
            .error(ErrorKind::ValueValidation, message)
            .exit();
    }
    cli
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_top_fifty_from_rank_one() {
        let cli = Cli::try_parse_from(["hnd"]).unwrap();

        assert_eq!(cli.mode, Mode::Top);
        assert_eq!(cli.start, 1);
        assert_eq!(cli.num, 50);
        assert_eq!(cli.workers, DEFAULT_WORKERS);
    }

    #[test]
    fn short_flags_parse() {
        let cli = Cli::try_parse_from(["hnd", "-m", "ask", "-s", "11", "-n", "30"]).unwrap();

        assert_eq!(cli.mode, Mode::Ask);
        assert_eq!(cli.start, 11);
        assert_eq!(cli.num, 30);
    }

    #[test]
    fn zero_start_is_rejected() {
        assert!(Cli::try_parse_from(["hnd", "--start", "0"]).is_err());
    }

    #[test]
    fn zero_num_is_rejected() {
        assert!(Cli::try_parse_from(["hnd", "--num", "0"]).is_err());
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["hnd", "--mode", "hot"]).is_err());
    }

    #[test]
    fn window_at_the_cap_passes() {
        let cli = Cli::try_parse_from(["hnd", "-n", "500"]).unwrap();
        assert_eq!(cli.window_end(), 500);
        assert!(cli.window_error().is_none());
    }

    #[test]
    fn window_past_the_cap_is_reported() {
        let cli = Cli::try_parse_from(["hnd", "-n", "501"]).unwrap();
        assert!(cli.window_error().is_some());
    }

    #[test]
    fn window_bound_respects_the_mode() {
        // 200-cap listing: start 150 + num 100 reaches rank 249.
        let cli = Cli::try_parse_from(["hnd", "-m", "job", "-s", "150", "-n", "100"]).unwrap();
        assert!(cli.window_error().is_some());

        let cli = Cli::try_parse_from(["hnd", "-m", "job", "-s", "150", "-n", "51"]).unwrap();
        assert!(cli.window_error().is_none());
    }
}
