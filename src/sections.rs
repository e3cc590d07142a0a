//! Landing page sections and the scroll bookkeeping around them.

use std::time::Duration;

const ACTIVE_PROBE_RATIO: f64 = 0.35;
const HASH_SCROLL_RETRY_MAX: u32 = 12;
pub const HASH_SCROLL_RETRY_INTERVAL: Duration = Duration::from_millis(60);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Project,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Self::Home, Self::About, Self::Project, Self::Contact];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Project => "project",
            Self::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Project => "Project",
            Self::Contact => "Contact",
        }
    }

    /// Link to the section, relative to the landing page when `on_landing`.
    pub fn href(&self, on_landing: bool) -> String {
        if on_landing {
            format!("#{}", self.id())
        } else {
            format!("/#{}", self.id())
        }
    }
}

/// Picks the last section whose top edge has scrolled past `probe`.
///
/// `offsets` holds the document offset of every section present on the page,
/// in page order. Falls back to [`Section::Home`].
pub fn active_section(offsets: &[(Section, f64)], probe: f64) -> Section {
    offsets
        .iter()
        .rev()
        .find(|(_, top)| *top <= probe)
        .map(|(section, _)| *section)
        .unwrap_or_default()
}

/// Scroll position used as the reference line for [`active_section`].
pub fn scroll_probe(scroll_y: f64, viewport_height: f64) -> f64 {
    scroll_y + viewport_height * ACTIVE_PROBE_RATIO
}

/// Element id to scroll to for a location hash, if any.
pub fn hash_target(hash: &str) -> Option<&str> {
    let target = hash.strip_prefix('#').unwrap_or(hash);
    if target.is_empty() || target == Section::Home.id() {
        None
    } else {
        Some(target)
    }
}

/// Bounded retry counter for scrolling to a hash target that may not have
/// rendered yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashRetry {
    attempts: u32,
    finished: bool,
}

impl HashRetry {
    /// Runs one scroll `attempt` unless retrying has finished. Returns `true`
    /// while another attempt should be scheduled.
    pub fn poll(&mut self, attempt: impl FnOnce() -> bool) -> bool {
        if self.finished {
            return false;
        }
        if attempt() || !self.record_miss() {
            self.finished = true;
        }
        !self.finished
    }

    /// Stops retrying, e.g. when the page that owns the retry unmounts.
    pub fn cancel(&mut self) {
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Records a failed attempt; returns `false` once retries are exhausted.
    pub fn record_miss(&mut self) -> bool {
        self.attempts += 1;
        self.attempts < HASH_SCROLL_RETRY_MAX
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Share of an element's height that lies inside the viewport, in `[0, 1]`.
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets() -> Vec<(Section, f64)> {
        vec![
            (Section::Home, 0.0),
            (Section::About, 900.0),
            (Section::Project, 1800.0),
            (Section::Contact, 2700.0),
        ]
    }

    #[test]
    fn test_active_section() {
        let offsets = offsets();
        assert_eq!(active_section(&offsets, scroll_probe(0.0, 900.0)), Section::Home);
        assert_eq!(active_section(&offsets, scroll_probe(600.0, 900.0)), Section::About);
        assert_eq!(active_section(&offsets, scroll_probe(1500.0, 900.0)), Section::Project);
        assert_eq!(active_section(&offsets, 10_000.0), Section::Contact);
    }

    #[test]
    fn test_active_section_missing_elements() {
        assert_eq!(active_section(&[], 500.0), Section::Home);
        let partial = [(Section::Contact, 400.0)];
        assert_eq!(active_section(&partial, 100.0), Section::Home);
        assert_eq!(active_section(&partial, 400.0), Section::Contact);
    }

    #[test]
    fn test_hash_target() {
        assert_eq!(hash_target(""), None);
        assert_eq!(hash_target("#"), None);
        assert_eq!(hash_target("#home"), None);
        assert_eq!(hash_target("#contact"), Some("contact"));
        assert_eq!(hash_target("about"), Some("about"));
    }

    #[test]
    fn test_hash_retry_budget() {
        let mut retry = HashRetry::default();
        let mut misses = 1;
        while retry.record_miss() {
            misses += 1;
        }
        assert_eq!(misses, HASH_SCROLL_RETRY_MAX);
        assert_eq!(retry.attempts(), HASH_SCROLL_RETRY_MAX);
    }

    #[test]
    fn test_hash_retry_poll_stops_when_found_or_exhausted() {
        let mut retry = HashRetry::default();
        assert!(retry.poll(|| false));
        assert!(!retry.poll(|| true));
        assert!(retry.is_finished());
        assert!(!retry.poll(|| panic!("no attempt after the target was found")));

        let mut retry = HashRetry::default();
        let mut polls = 0;
        while retry.poll(|| false) {
            polls += 1;
        }
        assert_eq!(polls + 1, HASH_SCROLL_RETRY_MAX);
        assert!(retry.is_finished());
    }

    #[test]
    fn test_cancelled_hash_retry_makes_no_more_attempts() {
        let mut retry = HashRetry::default();
        assert!(retry.poll(|| false));
        retry.cancel();
        let mut attempted = false;
        assert!(!retry.poll(|| {
            attempted = true;
            true
        }));
        assert!(!attempted);
        assert_eq!(retry.attempts(), 1);
    }

    #[test]
    fn test_visible_fraction() {
        assert_eq!(visible_fraction(0.0, 800.0, 800.0), 1.0);
        assert_eq!(visible_fraction(400.0, 800.0, 800.0), 0.5);
        assert_eq!(visible_fraction(-600.0, 800.0, 800.0), 0.25);
        assert_eq!(visible_fraction(900.0, 800.0, 800.0), 0.0);
        assert_eq!(visible_fraction(-900.0, 800.0, 800.0), 0.0);
        assert_eq!(visible_fraction(0.0, 0.0, 800.0), 0.0);
    }

    #[test]
    fn test_section_links() {
        assert_eq!(Section::About.href(true), "#about");
        assert_eq!(Section::About.href(false), "/#about");
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "about", "project", "contact"]);
    }
}
