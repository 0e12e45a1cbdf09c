//! TV episode metadata parsed out of file names.
//!
//! The backend performs the actual lookup and rename; the client parses the
//! name up front so the confirmation dialog can show what was recognized and
//! reject non-episode names without a round trip.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// Matches "Show Name S03E06...", "Show Name 3x06..." and the dot-separated
// "some.show.name.s03e06.720p.mkv" form.
#[allow(clippy::expect_used)]
static EPISODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.+)( |\.)[sS]?([0-9]+)[xeXE]([0-9]+)").expect("episode pattern is valid")
});

/// Show, season, and episode recognized in a file name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EpisodeInfo {
    pub show: String,
    pub season: u32,
    pub episode: u32,
}

impl EpisodeInfo {
    /// Parses episode metadata from `name`.
    ///
    /// When the separator between show title and episode marker is a period,
    /// the title itself is likely dot-separated and the dots become spaces.
    /// Returns `None` when `name` does not look like a TV episode.
    pub fn parse(name: &str) -> Option<Self> {
        let captures = EPISODE_PATTERN.captures(name)?;

        let season: u32 = captures.get(3)?.as_str().parse().ok()?;
        let episode: u32 = captures.get(4)?.as_str().parse().ok()?;
        if season == 0 && episode == 0 {
            return None;
        }

        let raw_show = captures.get(1)?.as_str();
        let show = if captures.get(2)?.as_str() == "." {
            raw_show.replace('.', " ")
        } else {
            raw_show.to_string()
        };

        Some(Self {
            show,
            season,
            episode,
        })
    }
}

impl fmt::Display for EpisodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}x{:02}", self.show, self.season, self.episode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_separated_name() {
        // Arrange & Act
        let info = EpisodeInfo::parse("Some Show S03E06.mkv").expect("must parse");

        // Assert
        assert_eq!(info.show, "Some Show");
        assert_eq!(info.season, 3);
        assert_eq!(info.episode, 6);
    }

    #[test]
    fn test_parse_cross_notation() {
        // Arrange & Act
        let info = EpisodeInfo::parse("Some Show 3x07.avi").expect("must parse");

        // Assert
        assert_eq!(info.show, "Some Show");
        assert_eq!(info.season, 3);
        assert_eq!(info.episode, 7);
    }

    #[test]
    fn test_parse_dot_separated_name_flattens_dots() {
        // Arrange & Act
        let info = EpisodeInfo::parse("some.show.name.s03e06.720p.mkv").expect("must parse");

        // Assert
        assert_eq!(info.show, "some show name");
        assert_eq!(info.season, 3);
        assert_eq!(info.episode, 6);
    }

    #[test]
    fn test_parse_rejects_plain_file_name() {
        // Arrange & Act & Assert
        assert_eq!(EpisodeInfo::parse("holiday-photos.jpg"), None);
        assert_eq!(EpisodeInfo::parse("report.pdf"), None);
    }

    #[test]
    fn test_display_pads_episode_number() {
        // Arrange
        let info = EpisodeInfo {
            show: "Some Show".to_string(),
            season: 3,
            episode: 6,
        };

        // Act & Assert
        assert_eq!(info.to_string(), "Some Show 3x06");
    }
}
