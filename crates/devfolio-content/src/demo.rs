//! Embedded demo frames.
//!
//! A frame that is refused by the demo host often fails silently, so the
//! loading indicator is dropped after a fixed delay whether or not a load
//! event arrived. Only an explicit error event switches the view to the
//! fallback panel. A link that opens the demo in a separate window is
//! available in every phase.

use std::fmt;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Demo URL shown in an embedded frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameTarget {
    url: String,
}

impl FrameTarget {
    /// Creates a target, upgrading the URL to https.
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            url: normalize_demo_url(url),
        }
    }

    /// The https URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for FrameTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Forces an https scheme onto a demo URL.
///
/// `https://` URLs are kept, `http://` is upgraded, and scheme-less input
/// gets `https://` prefixed.
///
/// # Examples
///
/// ```
/// use devfolio_content::normalize_demo_url;
///
/// assert_eq!(normalize_demo_url("chess.alqavi.dev"), "https://chess.alqavi.dev");
/// assert_eq!(normalize_demo_url("http://chess.alqavi.dev"), "https://chess.alqavi.dev");
/// assert_eq!(normalize_demo_url("https://chess.alqavi.dev"), "https://chess.alqavi.dev");
/// ```
#[must_use]
pub fn normalize_demo_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("https://") {
        url.to_string()
    } else if let Some(rest) = url.strip_prefix("http://") {
        format!("https://{rest}")
    } else {
        format!("https://{url}")
    }
}

/// Phase of a frame load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    /// Waiting for a load or error event
    Loading,
    /// The frame reported a load, or the delay expired
    Loaded,
    /// The frame reported an error
    Failed,
}

/// Load tracking for one frame.
///
/// An error event always wins, even after the delay expired. Load and
/// timeout events only end the loading phase. The deadline is fixed when
/// the load starts; [`FrameLoad::expire`] applies it.
///
/// # Examples
///
/// ```
/// use devfolio_content::{FrameLoad, FrameTarget};
/// use std::time::Duration;
///
/// let mut load = FrameLoad::new(FrameTarget::new("alqavi.dev"), Duration::from_secs(2));
/// assert!(load.is_loading());
///
/// load.on_timeout();
/// assert!(!load.is_loading());
/// assert_eq!(load.fallback_link(), None);
///
/// load.on_error();
/// assert_eq!(load.fallback_link(), Some("https://alqavi.dev"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLoad {
    target: FrameTarget,
    timeout: Duration,
    deadline: Instant,
    phase: FramePhase,
}

impl FrameLoad {
    /// Starts loading `target` now.
    #[must_use]
    pub fn new(target: FrameTarget, timeout: Duration) -> Self {
        Self::started_at(target, timeout, Instant::now())
    }

    /// Starts loading `target` at `started`.
    #[must_use]
    pub fn started_at(target: FrameTarget, timeout: Duration, started: Instant) -> Self {
        Self {
            target,
            timeout,
            deadline: started + timeout,
            phase: FramePhase::Loading,
        }
    }

    /// Frame being loaded.
    #[must_use]
    pub const fn target(&self) -> &FrameTarget {
        &self.target
    }

    /// Delay after which the loading indicator is dropped.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Instant at which the loading indicator is dropped.
    #[must_use]
    pub const fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Returns `true` while loading and the deadline has not passed at `now`.
    #[must_use]
    pub fn is_loading_at(&self, now: Instant) -> bool {
        self.is_loading() && now < self.deadline
    }

    /// Applies the timeout if the deadline has passed at `now`. Returns
    /// `true` if this ended the loading phase.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.is_loading() && now >= self.deadline {
            self.on_timeout();
            return true;
        }
        false
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> FramePhase {
        self.phase
    }

    /// Returns `true` while the loading indicator is shown.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, FramePhase::Loading)
    }

    /// Returns `true` once the load failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.phase, FramePhase::Failed)
    }

    /// The frame reported a load.
    pub fn on_load(&mut self) {
        self.finish_loading("load");
    }

    /// The heuristic delay expired.
    pub fn on_timeout(&mut self) {
        self.finish_loading("timeout");
    }

    /// The frame reported an error.
    pub fn on_error(&mut self) {
        debug!(url = %self.target, "frame failed");
        self.phase = FramePhase::Failed;
    }

    /// Link to open the demo in a separate window.
    #[must_use]
    pub fn external_link(&self) -> &str {
        self.target.url()
    }

    /// Fallback panel link, shown in place of the frame after a failure.
    #[must_use]
    pub fn fallback_link(&self) -> Option<&str> {
        self.is_failed().then(|| self.target.url())
    }

    fn finish_loading(&mut self, cause: &str) {
        if self.is_loading() {
            debug!(url = %self.target, cause, "frame loading finished");
            self.phase = FramePhase::Loaded;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load() -> FrameLoad {
        FrameLoad::new(FrameTarget::new("demo.dev"), Duration::from_millis(2000))
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_demo_url("  demo.dev "), "https://demo.dev");
    }

    #[test]
    fn test_load_event() {
        let mut load = load();
        load.on_load();
        assert_eq!(load.phase(), FramePhase::Loaded);
        assert_eq!(load.fallback_link(), None);

        load.on_timeout();
        assert_eq!(load.phase(), FramePhase::Loaded);
    }

    #[test]
    fn test_error_event_offers_fallback() {
        let mut load = load();
        load.on_error();
        assert!(load.is_failed());
        assert_eq!(load.fallback_link(), Some("https://demo.dev"));

        load.on_load();
        assert!(load.is_failed());
    }

    #[test]
    fn test_timeout_hides_indicator_only() {
        let mut load = load();
        load.on_timeout();
        assert_eq!(load.phase(), FramePhase::Loaded);
        assert_eq!(load.fallback_link(), None);

        load.on_error();
        assert!(load.is_failed());
    }

    #[test]
    fn test_deadline_expires_loading() {
        let started = Instant::now();
        let mut load = FrameLoad::started_at(
            FrameTarget::new("demo.dev"),
            Duration::from_millis(2000),
            started,
        );
        assert_eq!(load.deadline(), started + Duration::from_millis(2000));

        let early = started + Duration::from_millis(1999);
        assert!(load.is_loading_at(early));
        assert!(!load.expire(early));
        assert!(load.is_loading());

        let late = started + Duration::from_millis(2000);
        assert!(!load.is_loading_at(late));
        assert!(load.expire(late));
        assert_eq!(load.phase(), FramePhase::Loaded);
        assert!(!load.expire(late));
    }

    #[test]
    fn test_expire_keeps_failure() {
        let started = Instant::now();
        let mut load =
            FrameLoad::started_at(FrameTarget::new("demo.dev"), Duration::from_secs(1), started);
        load.on_error();
        assert!(!load.expire(started + Duration::from_secs(5)));
        assert!(load.is_failed());
    }

    #[test]
    fn test_external_link_always_available() {
        let load = load();
        assert_eq!(load.fallback_link(), None);
        assert_eq!(load.external_link(), "https://demo.dev");
        assert_eq!(load.timeout(), Duration::from_secs(2));
    }
}
