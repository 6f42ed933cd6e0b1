//! Command-line argument definitions using clap.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Active-tab video downloader CLI.
///
/// Unrecognized tokens are ignored rather than rejected so automation
/// callers can pass their own extra arguments through.
#[derive(Parser, Debug)]
#[command(
    name = "tabgrab",
    version,
    about = "Download the video in the frontmost browser tab",
    long_about = "Grabs the URL of the frontmost browser tab (or takes one explicitly) \
                  and downloads it with yt-dlp.\n\n\
                  Playlists are downloaded item by item into their own folder.",
    ignore_errors = true
)]
pub struct Args {
    /// URL to download instead of reading the frontmost browser tab.
    #[arg(short, long, env = "TABGRAB_URL")]
    pub url: Option<String>,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub directory: Option<PathBuf>,

    /// Filename template, passed to the downloader verbatim.
    #[arg(short = 'f', long = "filename-template")]
    pub template: Option<String>,

    /// Download-archive file recording finished items.
    #[arg(short = 'a', long = "archive")]
    pub archive: Option<PathBuf>,

    /// Browser whose cookies the downloader should use.
    #[arg(short = 'c', long = "cookies-from-browser")]
    pub cookies_from_browser: Option<String>,

    /// Path to configuration file.
    #[arg(long, env = "TABGRAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Hide progress and info output.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Parse the process arguments, dropping tokens the parser does not
    /// recognize.
    pub fn parse_lenient() -> Self {
        Self::parse_from(recognized_tokens(std::env::args_os()))
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(dir) = self.directory {
            config.output.directory = Some(dir);
        }

        // One -f override applies to whichever template the unit's shape
        // selects.
        if let Some(template) = self.template {
            config.output.single_template = template.clone();
            config.output.playlist_template = template;
        }

        if let Some(archive) = self.archive {
            config.downloader.archive = Some(archive);
        }

        if let Some(browser) = self.cookies_from_browser {
            config.downloader.cookies_from_browser = Some(browser);
        }
    }
}

/// Flags that consume the following token as their value. Kept in step
/// with the `Args` fields above.
const VALUE_FLAGS: &[&str] = &[
    "-u",
    "--url",
    "-d",
    "--directory",
    "-f",
    "--filename-template",
    "-a",
    "--archive",
    "-c",
    "--cookies-from-browser",
    "--config",
];

/// Flags complete in themselves, including the generated help/version.
const SWITCH_FLAGS: &[&str] = &["-q", "--quiet", "--debug", "-h", "--help", "-V", "--version"];

/// Reduce an argument stream to the tokens the parser understands.
///
/// The automation host may interleave its own tokens with ours, and a
/// recognized flag must still bind wherever it appears in the stream.
/// A value flag with no usable next token is dropped.
pub fn recognized_tokens<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut iter = argv.into_iter().map(Into::into).peekable();
    let mut kept: Vec<OsString> = Vec::new();

    if let Some(program) = iter.next() {
        kept.push(program);
    }

    while let Some(token) = iter.next() {
        let text = token.to_string_lossy().into_owned();

        if VALUE_FLAGS.contains(&text.as_str()) {
            let has_value = iter
                .peek()
                .map(|next| !next.to_string_lossy().starts_with('-'))
                .unwrap_or(false);
            if has_value {
                kept.push(token);
                if let Some(value) = iter.next() {
                    kept.push(value);
                }
            }
        } else if SWITCH_FLAGS.contains(&text.as_str()) {
            kept.push(token);
        } else if let Some((name, _)) = text.split_once('=') {
            if VALUE_FLAGS.contains(&name) {
                kept.push(token);
            }
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::paths::{DEFAULT_PLAYLIST_TEMPLATE, DEFAULT_SINGLE_TEMPLATE};

    fn parse(tokens: &[&str]) -> Args {
        let mut argv = vec!["tabgrab"];
        argv.extend_from_slice(tokens);
        Args::try_parse_from(recognized_tokens(argv)).unwrap()
    }

    #[test]
    fn test_parse_recognized_pairs() {
        let args = parse(&[
            "-u",
            "https://example.com/v",
            "-d",
            "/media/videos",
            "-f",
            "%(title)s.%(ext)s",
            "-a",
            "/media/archive.txt",
            "-c",
            "safari",
        ]);

        assert_eq!(args.url.as_deref(), Some("https://example.com/v"));
        assert_eq!(args.directory, Some(PathBuf::from("/media/videos")));
        assert_eq!(args.template.as_deref(), Some("%(title)s.%(ext)s"));
        assert_eq!(args.archive, Some(PathBuf::from("/media/archive.txt")));
        assert_eq!(args.cookies_from_browser.as_deref(), Some("safari"));
    }

    #[test]
    fn test_no_flags_are_mandatory() {
        let args = parse(&[]);

        assert_eq!(args.url, None);
        assert_eq!(args.directory, None);
        assert_eq!(args.template, None);
        assert!(!args.quiet);
    }

    #[test]
    fn test_unrecognized_tokens_are_ignored() {
        let args = parse(&["--bogus", "-d", "/media/videos", "stray-token"]);

        assert_eq!(args.directory, Some(PathBuf::from("/media/videos")));
        assert_eq!(args.url, None);
    }

    #[test]
    fn test_pair_after_unknown_long_flag_binds() {
        let args = parse(&["--bogus", "-d", "/media/videos"]);

        assert_eq!(args.directory, Some(PathBuf::from("/media/videos")));
    }

    #[test]
    fn test_pair_after_stray_positional_binds() {
        let args = parse(&["stray-token", "-d", "/media/videos"]);

        assert_eq!(args.directory, Some(PathBuf::from("/media/videos")));
    }

    #[test]
    fn test_pair_after_unknown_short_flag_binds() {
        let args = parse(&["-z", "-d", "/media/videos"]);

        assert_eq!(args.directory, Some(PathBuf::from("/media/videos")));
    }

    #[test]
    fn test_recognized_tokens_keep_flags_and_values() {
        let tokens = recognized_tokens(["tabgrab", "--bogus", "-d", "/x", "stray", "--quiet"]);

        assert_eq!(tokens, vec!["tabgrab", "-d", "/x", "--quiet"]);
    }

    #[test]
    fn test_value_flag_without_value_is_dropped() {
        let args = parse(&["-d", "-q"]);

        assert_eq!(args.directory, None);
        assert!(args.quiet);
    }

    #[test]
    fn test_equals_form_binds() {
        let args = parse(&["--directory=/media/videos", "junk"]);

        assert_eq!(args.directory, Some(PathBuf::from("/media/videos")));
    }

    #[test]
    fn test_merge_overrides_config() {
        let mut config = Config::default();
        let args = parse(&["-d", "/media/videos", "-f", "%(id)s.%(ext)s", "-c", "brave"]);
        args.merge_into_config(&mut config);

        assert_eq!(
            config.output.directory,
            Some(PathBuf::from("/media/videos"))
        );
        assert_eq!(config.output.single_template, "%(id)s.%(ext)s");
        assert_eq!(config.output.playlist_template, "%(id)s.%(ext)s");
        assert_eq!(
            config.downloader.cookies_from_browser.as_deref(),
            Some("brave")
        );
    }

    #[test]
    fn test_merge_without_flags_keeps_defaults() {
        let mut config = Config::default();
        parse(&[]).merge_into_config(&mut config);

        assert_eq!(config.output.directory, None);
        assert_eq!(config.output.single_template, DEFAULT_SINGLE_TEMPLATE);
        assert_eq!(config.output.playlist_template, DEFAULT_PLAYLIST_TEMPLATE);
        assert_eq!(config.downloader.archive, None);
    }
}
