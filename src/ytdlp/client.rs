//! yt-dlp subprocess client.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;

use crate::error::Result;
use crate::media::{parse_dump, MetadataResult};

/// Codec and quality preference: AVC/AAC up to 1080p60, SDR over HDR.
pub const FORMAT_SORT: &str = "codec:avc:aac,res:1080,fps:60,hdr:sdr";

/// Best video plus best audio, falling back to the best single stream.
pub const FORMAT_SELECTOR: &str = "bv+ba/b";

/// Post-processor directive that strips container metadata on merge.
pub const MERGE_POSTPROCESSOR_ARGS: &str = "Merger+ffmpeg_o1:-map_metadata -1";

/// Handle on a resolved yt-dlp executable plus the per-run options that
/// shape every invocation.
pub struct YtDlp {
    exe: PathBuf,
    ffmpeg: Option<PathBuf>,
    cookies_from_browser: Option<String>,
    archive: Option<PathBuf>,
}

impl YtDlp {
    pub fn new(
        exe: PathBuf,
        ffmpeg: Option<PathBuf>,
        cookies_from_browser: Option<String>,
        archive: Option<PathBuf>,
    ) -> Self {
        Self {
            exe,
            ffmpeg,
            cookies_from_browser,
            archive,
        }
    }

    /// Resolve `url` into a unit of work via a flat metadata dump.
    ///
    /// Never fails the process: command and parse problems come back as
    /// [`MetadataResult`] variants for the caller to degrade on.
    pub async fn fetch_metadata(&self, url: &str) -> MetadataResult {
        let args = self.metadata_args(url);
        tracing::debug!("Running {} {}", self.exe.display(), args.join(" "));

        let output = match Command::new(&self.exe)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
        {
            Ok(output) => output,
            Err(e) => return MetadataResult::FetchFailed(e.to_string()),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = if stderr.trim().is_empty() {
                format!("metadata command failed ({})", output.status)
            } else {
                stderr.trim().to_string()
            };
            tracing::debug!("Metadata fetch failed: {}", detail);
            return MetadataResult::FetchFailed(detail);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() {
            return MetadataResult::FetchFailed("metadata command produced no output".to_string());
        }

        match serde_json::from_str::<serde_json::Value>(&stdout) {
            Ok(dump) => MetadataResult::Resolved(parse_dump(&dump, url)),
            Err(e) => MetadataResult::ParseFailed(e.to_string()),
        }
    }

    /// Download `url` with the fixed format policy, returning the combined
    /// log output and exit code for classification.
    pub async fn download(
        &self,
        url: &str,
        output_template: &str,
    ) -> Result<(String, Option<i32>)> {
        let args = self.download_args(url, output_template);
        tracing::debug!("Running {} {}", self.exe.display(), args.join(" "));

        let output = Command::new(&self.exe)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await?;

        let mut log = String::from_utf8_lossy(&output.stdout).into_owned();
        log.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok((log, output.status.code()))
    }

    /// Probe the tool's version string.
    pub async fn version(&self) -> Option<String> {
        let output = Command::new(&self.exe)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await
            .ok()?;
        if !output.status.success() {
            return None;
        }
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!version.is_empty()).then_some(version)
    }

    fn metadata_args(&self, url: &str) -> Vec<String> {
        let mut args = vec![
            "-J".to_string(),
            "--flat-playlist".to_string(),
            "--no-warnings".to_string(),
            "--no-check-certificate".to_string(),
        ];
        if let Some(browser) = &self.cookies_from_browser {
            args.push("--cookies-from-browser".to_string());
            args.push(browser.clone());
        }
        args.push(url.to_string());
        args
    }

    /// Build the download argument list. The flag order is fixed for
    /// stability and the URL always comes last.
    fn download_args(&self, url: &str, output_template: &str) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(ffmpeg) = &self.ffmpeg {
            args.push("--ffmpeg-location".to_string());
            args.push(ffmpeg.display().to_string());
        }
        args.push("-S".to_string());
        args.push(FORMAT_SORT.to_string());
        args.push("-f".to_string());
        args.push(FORMAT_SELECTOR.to_string());
        args.push("-o".to_string());
        args.push(output_template.to_string());
        args.push("--ppa".to_string());
        args.push(MERGE_POSTPROCESSOR_ARGS.to_string());
        if let Some(archive) = &self.archive {
            args.push("--download-archive".to_string());
            args.push(archive.display().to_string());
        }
        if let Some(browser) = &self.cookies_from_browser {
            args.push("--cookies-from-browser".to_string());
            args.push(browser.clone());
        }
        args.push(url.to_string());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_args_order() {
        let ytdlp = YtDlp::new(PathBuf::from("/usr/local/bin/yt-dlp"), None, None, None);
        assert_eq!(
            ytdlp.metadata_args("https://example.com/v"),
            vec![
                "-J",
                "--flat-playlist",
                "--no-warnings",
                "--no-check-certificate",
                "https://example.com/v",
            ]
        );
    }

    #[test]
    fn test_metadata_args_with_cookies() {
        let ytdlp = YtDlp::new(
            PathBuf::from("/usr/local/bin/yt-dlp"),
            None,
            Some("firefox".to_string()),
            None,
        );
        let args = ytdlp.metadata_args("https://example.com/v");

        assert_eq!(args.last().map(String::as_str), Some("https://example.com/v"));
        assert!(args.windows(2).any(|w| w[0] == "--cookies-from-browser" && w[1] == "firefox"));
    }

    #[test]
    fn test_download_args_full_order() {
        let ytdlp = YtDlp::new(
            PathBuf::from("/usr/local/bin/yt-dlp"),
            Some(PathBuf::from("/opt/homebrew/bin/ffmpeg")),
            Some("safari".to_string()),
            Some(PathBuf::from("/downloads/archive.txt")),
        );
        assert_eq!(
            ytdlp.download_args("https://example.com/v", "/downloads/%(title)s.%(ext)s"),
            vec![
                "--ffmpeg-location",
                "/opt/homebrew/bin/ffmpeg",
                "-S",
                FORMAT_SORT,
                "-f",
                FORMAT_SELECTOR,
                "-o",
                "/downloads/%(title)s.%(ext)s",
                "--ppa",
                MERGE_POSTPROCESSOR_ARGS,
                "--download-archive",
                "/downloads/archive.txt",
                "--cookies-from-browser",
                "safari",
                "https://example.com/v",
            ]
        );
    }

    #[test]
    fn test_download_args_without_optional_flags() {
        let ytdlp = YtDlp::new(PathBuf::from("yt-dlp"), None, None, None);
        let args = ytdlp.download_args("https://example.com/v", "%(title)s.%(ext)s");

        assert_eq!(args[0], "-S");
        assert!(!args.iter().any(|a| a == "--ffmpeg-location"));
        assert!(!args.iter().any(|a| a == "--download-archive"));
        assert!(!args.iter().any(|a| a == "--cookies-from-browser"));
        assert_eq!(args.last().map(String::as_str), Some("https://example.com/v"));
    }

    #[cfg(unix)]
    fn install_stub(dir: &std::path::Path, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("yt-dlp");
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_fetch_metadata_resolves_playlist_dump() {
        let dir = tempfile::tempdir().unwrap();
        let stub = install_stub(
            dir.path(),
            r#"#!/bin/sh
cat <<'EOF'
{"_type": "playlist", "title": "Stub Mix", "webpage_url": "https://www.youtube.com/playlist?list=PL1",
 "entries": [{"id": "a1", "title": "First"}, {"id": "a2", "title": "Second"}]}
EOF
"#,
        );

        let ytdlp = YtDlp::new(stub, None, None, None);
        let result = ytdlp
            .fetch_metadata("https://www.youtube.com/playlist?list=PL1")
            .await;

        match result {
            MetadataResult::Resolved(unit) => {
                assert!(unit.is_collection);
                assert_eq!(unit.title, "Stub Mix");
                assert_eq!(unit.items.len(), 2);
                assert_eq!(
                    unit.items[0].url.as_deref(),
                    Some("https://www.youtube.com/watch?v=a1")
                );
            }
            other => panic!("expected Resolved, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_fetch_metadata_nonzero_exit_is_fetch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let stub = install_stub(
            dir.path(),
            "#!/bin/sh\necho 'ERROR: This video is unavailable' >&2\nexit 1\n",
        );

        let ytdlp = YtDlp::new(stub, None, None, None);
        let result = ytdlp.fetch_metadata("https://example.com/v").await;

        match result {
            MetadataResult::FetchFailed(detail) => {
                assert!(detail.contains("This video is unavailable"));
            }
            other => panic!("expected FetchFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_fetch_metadata_garbage_output_is_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let stub = install_stub(dir.path(), "#!/bin/sh\necho 'not json at all'\n");

        let ytdlp = YtDlp::new(stub, None, None, None);
        let result = ytdlp.fetch_metadata("https://example.com/v").await;

        assert!(matches!(result, MetadataResult::ParseFailed(_)));
    }

    #[tokio::test]
    async fn test_fetch_metadata_missing_executable_is_fetch_failure() {
        let ytdlp = YtDlp::new(PathBuf::from("/nonexistent/yt-dlp"), None, None, None);
        let result = ytdlp.fetch_metadata("https://example.com/v").await;

        assert!(matches!(result, MetadataResult::FetchFailed(_)));
    }
}
