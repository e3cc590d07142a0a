//! Splash intro: greeting timeline, phase machine and the show-once gate.

use std::time::Duration;

pub const BRAND_TEXT: &str = "FaisPortofolio-v1";
pub const BRAND_STAGGER_MS: u32 = 28;

pub const SKIP_SPLASH_ONCE_FLAG: &str = "__faisSkipSplashOnce";
pub const LANDING_SPLASH_SHOWN_FLAG: &str = "__faisLandingSplashShown";

const GREETING_SLOT_MS: u64 = 390;
const GREETING_GAP_MS: u64 = 80;
const BRAND_REVEAL_MS: u64 = 1020;
const EXIT_WIPE_MS: u64 = 760;
const REDUCED_EXIT_MS: u64 = 200;
const REDUCED_GREETING_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    pub text: &'static str,
    pub dir: TextDirection,
}

const GREETINGS: [Greeting; 6] = [
    Greeting { text: "Halo", dir: TextDirection::Ltr },
    Greeting { text: "Hello", dir: TextDirection::Ltr },
    Greeting { text: "こんにちは", dir: TextDirection::Ltr },
    Greeting { text: "안녕하세요", dir: TextDirection::Ltr },
    Greeting { text: "مرحبا", dir: TextDirection::Rtl },
    Greeting { text: "Bonjour", dir: TextDirection::Ltr },
];

pub fn greetings(reduced_motion: bool) -> &'static [Greeting] {
    if reduced_motion {
        &GREETINGS[..REDUCED_GREETING_COUNT]
    } else {
        &GREETINGS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    Greetings,
    Brand,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Auto,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashCue {
    Greeting(usize),
    Brand,
    AutoExit,
}

/// Every scheduled cue of the intro with its offset from mount.
pub fn timeline(reduced_motion: bool) -> Vec<(Duration, SplashCue)> {
    let step = GREETING_SLOT_MS + GREETING_GAP_MS;
    let count = greetings(reduced_motion).len() as u64;
    let mut cues = (0..count)
        .map(|i| (Duration::from_millis(i * step), SplashCue::Greeting(i as usize)))
        .collect::<Vec<_>>();
    cues.push((Duration::from_millis(count * step), SplashCue::Brand));
    cues.push((
        Duration::from_millis(count * step + BRAND_REVEAL_MS),
        SplashCue::AutoExit,
    ));
    cues
}

pub fn exit_duration(reduced_motion: bool) -> Duration {
    if reduced_motion {
        Duration::from_millis(REDUCED_EXIT_MS)
    } else {
        Duration::from_millis(EXIT_WIPE_MS)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplashMachine {
    phase: SplashPhase,
    greeting: usize,
    skipping: bool,
    reduced_motion: bool,
}

impl SplashMachine {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            phase: SplashPhase::Greetings,
            greeting: 0,
            skipping: false,
            reduced_motion,
        }
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn is_skipping(&self) -> bool {
        self.skipping
    }

    pub fn current_greeting(&self) -> Greeting {
        let list = greetings(self.reduced_motion);
        list.get(self.greeting).copied().unwrap_or(list[0])
    }

    /// Applies a timeline cue. Returns the finish delay when the cue starts
    /// the exit.
    pub fn apply(&mut self, cue: SplashCue) -> Option<Duration> {
        match (self.phase, cue) {
            (SplashPhase::Greetings, SplashCue::Greeting(i)) => {
                self.greeting = i;
                None
            }
            (SplashPhase::Greetings, SplashCue::Brand) => {
                self.phase = SplashPhase::Brand;
                None
            }
            (SplashPhase::Exiting, _) => None,
            (_, SplashCue::AutoExit) => self.exit(ExitReason::Auto),
            _ => None,
        }
    }

    /// Moves to the exit phase. Only the first call has an effect; it returns
    /// how long the exit wipe runs before the splash should unmount.
    pub fn exit(&mut self, reason: ExitReason) -> Option<Duration> {
        if self.phase == SplashPhase::Exiting {
            return None;
        }
        self.phase = SplashPhase::Exiting;
        self.skipping = reason == ExitReason::Skip;
        Some(exit_duration(self.reduced_motion))
    }
}

/// What the landing page does with the splash, decided once per load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashGate {
    pub show: bool,
    pub mark_shown: bool,
    pub clear_skip_once: bool,
}

impl SplashGate {
    pub fn decide(skip_once: bool, landing_shown: bool, is_reload: bool) -> Self {
        if skip_once {
            Self {
                show: false,
                mark_shown: false,
                clear_skip_once: true,
            }
        } else if is_reload || !landing_shown {
            Self {
                show: true,
                mark_shown: true,
                clear_skip_once: false,
            }
        } else {
            Self {
                show: false,
                mark_shown: false,
                clear_skip_once: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_full() {
        let cues = timeline(false);
        assert_eq!(cues.len(), 8);
        assert_eq!(cues[0], (Duration::ZERO, SplashCue::Greeting(0)));
        assert_eq!(cues[5], (Duration::from_millis(5 * 470), SplashCue::Greeting(5)));
        assert_eq!(cues[6], (Duration::from_millis(6 * 470), SplashCue::Brand));
        assert_eq!(cues[7], (Duration::from_millis(6 * 470 + 1020), SplashCue::AutoExit));
    }

    #[test]
    fn test_timeline_reduced() {
        let cues = timeline(true);
        assert_eq!(cues.len(), 5);
        assert_eq!(cues[3], (Duration::from_millis(3 * 470), SplashCue::Brand));
        assert_eq!(greetings(true).last().map(|g| g.text), Some("こんにちは"));
    }

    #[test]
    fn test_machine_runs_timeline() {
        let mut machine = SplashMachine::new(false);
        let mut finish = None;
        for (_, cue) in timeline(false) {
            if let Some(delay) = machine.apply(cue) {
                finish = Some(delay);
            }
            if cue == SplashCue::Greeting(4) {
                assert_eq!(machine.current_greeting().dir, TextDirection::Rtl);
            }
        }
        assert_eq!(machine.phase(), SplashPhase::Exiting);
        assert!(!machine.is_skipping());
        assert_eq!(finish, Some(Duration::from_millis(760)));
    }

    #[test]
    fn test_skip_exits_once() {
        let mut machine = SplashMachine::new(true);
        machine.apply(SplashCue::Greeting(1));
        assert_eq!(machine.exit(ExitReason::Skip), Some(Duration::from_millis(200)));
        assert!(machine.is_skipping());
        assert_eq!(machine.exit(ExitReason::Skip), None);
        assert_eq!(machine.apply(SplashCue::AutoExit), None);
        assert_eq!(machine.apply(SplashCue::Brand), None);
        assert_eq!(machine.phase(), SplashPhase::Exiting);
    }

    #[test]
    fn test_stale_greeting_after_brand_ignored() {
        let mut machine = SplashMachine::new(false);
        machine.apply(SplashCue::Brand);
        machine.apply(SplashCue::Greeting(3));
        assert_eq!(machine.phase(), SplashPhase::Brand);
        assert_eq!(machine.current_greeting().text, "Halo");
    }

    #[test]
    fn test_gate() {
        let skip = SplashGate::decide(true, true, true);
        assert!(!skip.show && skip.clear_skip_once && !skip.mark_shown);

        let reload = SplashGate::decide(false, true, true);
        assert!(reload.show && reload.mark_shown);

        let first = SplashGate::decide(false, false, false);
        assert!(first.show && first.mark_shown);

        let again = SplashGate::decide(false, true, false);
        assert_eq!(
            again,
            SplashGate {
                show: false,
                mark_shown: false,
                clear_skip_once: false
            }
        );
    }
}
