//! Typewriter animation model
//!
//! The text-reveal effect is split in two halves:
//! - [`Typewriter`]: a pure state machine producing the text to show and the
//!   delay before the next step
//! - [`ScopedAnimation`]: a guard that pairs every `create` on an
//!   [`AnimationDriver`] with exactly one `destroy`
//!
//! The browser driver lives in `ui::typed_text`; everything here is plain Rust
//! and runs on both the server and the client.

use std::time::Duration;

use super::error::TypingError;

/// Configuration of a cycling typewriter animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingConfig {
    strings: Vec<String>,
    type_speed: Duration,
    back_speed: Duration,
    back_delay: Duration,
    start_delay: Duration,
    loop_forever: bool,
    smart_backspace: bool,
}

impl TypingConfig {
    /// Create a config with default timings.
    ///
    /// Fails when there are no strings or one of them is empty.
    pub fn new<I, S>(strings: I) -> Result<Self, TypingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let strings: Vec<String> = strings.into_iter().map(Into::into).collect();

        if strings.is_empty() {
            return Err(TypingError::EmptySequence);
        }
        if let Some(index) = strings.iter().position(|s| s.is_empty()) {
            return Err(TypingError::EmptyString { index });
        }

        Ok(Self {
            strings,
            type_speed: Duration::ZERO,
            back_speed: Duration::ZERO,
            back_delay: Duration::from_millis(700),
            start_delay: Duration::ZERO,
            loop_forever: false,
            smart_backspace: true,
        })
    }

    /// Delay between typed characters
    pub fn with_type_speed(mut self, speed: Duration) -> Self {
        self.type_speed = speed;
        self
    }

    /// Delay between deleted characters
    pub fn with_back_speed(mut self, speed: Duration) -> Self {
        self.back_speed = speed;
        self
    }

    /// Pause after a string is fully typed, before deleting starts
    pub fn with_back_delay(mut self, delay: Duration) -> Self {
        self.back_delay = delay;
        self
    }

    /// Delay before the first character
    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Restart from the first string after the last one
    pub fn with_loop(mut self, loop_forever: bool) -> Self {
        self.loop_forever = loop_forever;
        self
    }

    /// Only delete back to the prefix shared with the next string
    pub fn with_smart_backspace(mut self, enabled: bool) -> Self {
        self.smart_backspace = enabled;
        self
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    pub fn type_speed(&self) -> Duration {
        self.type_speed
    }

    pub fn back_speed(&self) -> Duration {
        self.back_speed
    }

    pub fn back_delay(&self) -> Duration {
        self.back_delay
    }

    pub fn start_delay(&self) -> Duration {
        self.start_delay
    }

    pub fn loops(&self) -> bool {
        self.loop_forever
    }

    pub fn smart_backspace(&self) -> bool {
        self.smart_backspace
    }
}

/// One frame of the animation: show `text`, then wait `delay`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
    Done,
}

/// Pure typewriter state machine.
///
/// Call [`Typewriter::tick`] after [`TypingConfig::start_delay`] and then after
/// each returned [`TypingStep::delay`] until it returns `None`.
#[derive(Debug, Clone)]
pub struct Typewriter {
    config: TypingConfig,
    index: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(config: TypingConfig) -> Self {
        Self {
            config,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn config(&self) -> &TypingConfig {
        &self.config
    }

    /// Index of the string currently being typed or deleted
    pub fn index(&self) -> usize {
        self.index
    }

    /// Text currently on screen
    pub fn text(&self) -> String {
        prefix(&self.config.strings[self.index], self.shown)
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advance by one character.
    pub fn tick(&mut self) -> Option<TypingStep> {
        match self.phase {
            Phase::Done => None,
            Phase::Typing => Some(self.type_next()),
            Phase::Deleting => Some(self.delete_next()),
        }
    }

    fn type_next(&mut self) -> TypingStep {
        let current = &self.config.strings[self.index];
        let len = current.chars().count();
        self.shown = (self.shown + 1).min(len);
        let text = prefix(current, self.shown);

        if self.shown < len {
            return TypingStep {
                text,
                delay: self.config.type_speed,
            };
        }

        let is_last = self.index + 1 == self.config.strings.len();
        if is_last && !self.config.loop_forever {
            self.phase = Phase::Done;
            return TypingStep {
                text,
                delay: Duration::ZERO,
            };
        }

        // Nothing to delete when the next string extends this one
        if self.shown <= self.retained_prefix() {
            self.advance();
        } else {
            self.phase = Phase::Deleting;
        }

        TypingStep {
            text,
            delay: self.config.back_delay,
        }
    }

    fn delete_next(&mut self) -> TypingStep {
        let stop = self.retained_prefix();
        self.shown = self.shown.saturating_sub(1).max(stop);
        let text = prefix(&self.config.strings[self.index], self.shown);

        if self.shown > stop {
            return TypingStep {
                text,
                delay: self.config.back_speed,
            };
        }

        self.advance();
        TypingStep {
            text,
            delay: self.config.type_speed,
        }
    }

    fn advance(&mut self) {
        self.index = (self.index + 1) % self.config.strings.len();
        self.phase = Phase::Typing;
    }

    /// Characters kept on screen when moving to the next string
    fn retained_prefix(&self) -> usize {
        if !self.config.smart_backspace {
            return 0;
        }
        match self.config.strings.get(self.index + 1) {
            Some(next) => common_prefix_len(&self.config.strings[self.index], next),
            None => 0,
        }
    }
}

/// A [`Typewriter`] that can be stopped from outside.
///
/// Timer-driven callers ask [`TypingRun::advance`] on every wake-up; once
/// [`TypingRun::stop`] has been called it yields nothing, so a callback that
/// was already queued cannot touch the target again.
#[derive(Debug, Clone)]
pub struct TypingRun {
    writer: Typewriter,
    stopped: bool,
}

impl TypingRun {
    pub fn new(config: TypingConfig) -> Self {
        Self {
            writer: Typewriter::new(config),
            stopped: false,
        }
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Text to show now and the wait before the next call, if there is one
    pub fn advance(&mut self) -> Option<(String, Option<Duration>)> {
        if self.stopped {
            return None;
        }
        let frame = self.writer.tick()?;
        let next = (!self.writer.is_finished()).then_some(frame.delay);
        Some((frame.text, next))
    }
}

fn prefix(s: &str, chars: usize) -> String {
    s.chars().take(chars).collect()
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

/// Something that can start and stop a typing animation on a target.
pub trait AnimationDriver {
    type Target;
    type Handle;

    fn create(&mut self, target: &Self::Target, config: &TypingConfig) -> Self::Handle;

    fn destroy(&mut self, handle: Self::Handle);
}

/// Owns one running animation and destroys it exactly once.
///
/// Destruction happens on [`ScopedAnimation::release`] or, failing that, on drop
/// (including drops during unwinding).
pub struct ScopedAnimation<D: AnimationDriver> {
    driver: D,
    handle: Option<D::Handle>,
}

impl<D: AnimationDriver> ScopedAnimation<D> {
    pub fn acquire(mut driver: D, target: &D::Target, config: &TypingConfig) -> Self {
        let handle = driver.create(target, config);
        Self {
            driver,
            handle: Some(handle),
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn release(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.driver.destroy(handle);
        }
    }
}

impl<D: AnimationDriver> Drop for ScopedAnimation<D> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn config(strings: &[&str]) -> TypingConfig {
        TypingConfig::new(strings.iter().copied())
            .unwrap()
            .with_type_speed(ms(50))
            .with_back_speed(ms(30))
            .with_back_delay(ms(1500))
    }

    fn run(writer: &mut Typewriter, steps: usize) -> Vec<TypingStep> {
        (0..steps).filter_map(|_| writer.tick()).collect()
    }

    #[test]
    fn test_config_rejects_empty_sequence() {
        let result = TypingConfig::new(Vec::<String>::new());
        assert_eq!(result, Err(TypingError::EmptySequence));
    }

    #[test]
    fn test_config_rejects_empty_string() {
        let result = TypingConfig::new(["Go", "", "Stay"]);
        assert_eq!(result, Err(TypingError::EmptyString { index: 1 }));
    }

    #[test]
    fn test_config_builder() {
        let config = config(&["a"]).with_start_delay(ms(10)).with_loop(true);

        assert_eq!(config.strings(), ["a".to_string()]);
        assert_eq!(config.type_speed(), ms(50));
        assert_eq!(config.back_speed(), ms(30));
        assert_eq!(config.back_delay(), ms(1500));
        assert_eq!(config.start_delay(), ms(10));
        assert!(config.loops());
        assert!(config.smart_backspace());
    }

    #[test]
    fn test_types_one_character_per_tick() {
        let mut writer = Typewriter::new(config(&["Trip", "Go"]));

        let steps = run(&mut writer, 3);
        let texts: Vec<&str> = steps.iter().map(|s| s.text.as_str()).collect();

        assert_eq!(texts, ["T", "Tr", "Tri"]);
        assert!(steps.iter().all(|s| s.delay == ms(50)));
    }

    #[test]
    fn test_pauses_after_full_string() {
        let mut writer = Typewriter::new(config(&["Hi", "Yo"]));

        let steps = run(&mut writer, 2);

        assert_eq!(steps[1].text, "Hi");
        assert_eq!(steps[1].delay, ms(1500));
    }

    #[test]
    fn test_deletes_then_types_next() {
        let mut writer = Typewriter::new(config(&["Hi", "Yo"]));

        let texts: Vec<String> = run(&mut writer, 6).into_iter().map(|s| s.text).collect();

        assert_eq!(texts, ["H", "Hi", "H", "", "Y", "Yo"]);
        assert_eq!(writer.index(), 1);
    }

    #[test]
    fn test_delete_uses_back_speed() {
        let mut writer = Typewriter::new(config(&["abc", "x"]));
        let steps = run(&mut writer, 6);

        // a, ab, abc (pause), ab, a, "" (switch)
        assert_eq!(steps[3].delay, ms(30));
        assert_eq!(steps[4].delay, ms(30));
        assert_eq!(steps[5].text, "");
        assert_eq!(steps[5].delay, ms(50));
    }

    #[test]
    fn test_smart_backspace_keeps_shared_prefix() {
        let mut writer = Typewriter::new(config(&["Plan a trip", "Plan a party"]));

        let texts: Vec<String> = run(&mut writer, 20).into_iter().map(|s| s.text).collect();

        let full = texts.iter().position(|t| t == "Plan a trip").unwrap();
        assert_eq!(texts[full + 1], "Plan a tri");
        assert_eq!(texts[full + 4], "Plan a ");
        assert_eq!(texts[full + 5], "Plan a p");
        assert!(!texts[full..].iter().any(|t| t == "Plan a"));
    }

    #[test]
    fn test_smart_backspace_disabled_deletes_everything() {
        let config = config(&["ab", "ac"]).with_smart_backspace(false);
        let mut writer = Typewriter::new(config);

        let texts: Vec<String> = run(&mut writer, 5).into_iter().map(|s| s.text).collect();

        assert_eq!(texts, ["a", "ab", "a", "", "a"]);
    }

    #[test]
    fn test_extension_skips_deletion() {
        let mut writer = Typewriter::new(config(&["go", "gone"]));

        let texts: Vec<String> = run(&mut writer, 4).into_iter().map(|s| s.text).collect();

        assert_eq!(texts, ["g", "go", "gon", "gone"]);
    }

    #[test]
    fn test_loop_wraps_to_first_string() {
        let mut writer = Typewriter::new(config(&["a", "b"]).with_loop(true));

        // a (pause), "" , b (pause), "", a
        let texts: Vec<String> = run(&mut writer, 5).into_iter().map(|s| s.text).collect();

        assert_eq!(texts, ["a", "", "b", "", "a"]);
        assert_eq!(writer.index(), 0);
        assert!(!writer.is_finished());
    }

    #[test]
    fn test_last_string_deleted_fully_when_looping() {
        let mut writer = Typewriter::new(config(&["same"]).with_loop(true));

        let texts: Vec<String> = run(&mut writer, 9).into_iter().map(|s| s.text).collect();

        assert_eq!(texts[3], "same");
        assert_eq!(texts[7], "");
        assert_eq!(texts[8], "s");
    }

    #[test]
    fn test_without_loop_stops_on_last_string() {
        let mut writer = Typewriter::new(config(&["a", "bc"]));

        let steps = run(&mut writer, 10);

        assert_eq!(steps.last().unwrap().text, "bc");
        assert!(writer.is_finished());
        assert_eq!(writer.tick(), None);
        assert_eq!(writer.text(), "bc");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut writer = Typewriter::new(config(&["Zürich ✈"]));

        let texts: Vec<String> = run(&mut writer, 8).into_iter().map(|s| s.text).collect();

        assert_eq!(texts[1], "Zü");
        assert_eq!(texts[7], "Zürich ✈");
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Create(&'static str),
        Destroy(u32),
    }

    struct RecordingDriver {
        events: Rc<RefCell<Vec<Event>>>,
        next_id: u32,
    }

    impl AnimationDriver for RecordingDriver {
        type Target = &'static str;
        type Handle = u32;

        fn create(&mut self, target: &Self::Target, _config: &TypingConfig) -> u32 {
            self.events.borrow_mut().push(Event::Create(*target));
            self.next_id += 1;
            self.next_id
        }

        fn destroy(&mut self, handle: u32) {
            self.events.borrow_mut().push(Event::Destroy(handle));
        }
    }

    fn driver() -> (RecordingDriver, Rc<RefCell<Vec<Event>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let driver = RecordingDriver {
            events: events.clone(),
            next_id: 0,
        };
        (driver, events)
    }

    #[test]
    fn test_release_destroys_once() {
        let (driver, events) = driver();
        let anim = ScopedAnimation::acquire(driver, &"headline", &config(&["a"]));
        assert!(anim.is_active());

        anim.release();

        assert_eq!(
            *events.borrow(),
            [Event::Create("headline"), Event::Destroy(1)]
        );
    }

    #[test]
    fn test_drop_destroys_once() {
        let (driver, events) = driver();
        {
            let _anim = ScopedAnimation::acquire(driver, &"headline", &config(&["a"]));
            assert_eq!(*events.borrow(), [Event::Create("headline")]);
        }

        assert_eq!(
            *events.borrow(),
            [Event::Create("headline"), Event::Destroy(1)]
        );
    }

    #[test]
    fn test_stopped_run_yields_nothing() {
        let mut run = TypingRun::new(config(&["Hi"]));
        assert_eq!(run.advance(), Some(("H".to_string(), Some(ms(50)))));

        run.stop();
        assert!(run.is_stopped());
        assert_eq!(run.advance(), None);
        assert_eq!(run.advance(), None);
    }

    #[test]
    fn test_run_without_loop_ends_with_no_next_delay() {
        let mut run = TypingRun::new(config(&["Hi"]).with_loop(false));

        assert_eq!(run.advance(), Some(("H".to_string(), Some(ms(50)))));
        assert_eq!(run.advance(), Some(("Hi".to_string(), None)));
        assert_eq!(run.advance(), None);
        assert!(!run.is_stopped());
    }

    #[test]
    fn test_destroy_runs_during_unwind() {
        let (driver, events) = driver();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _anim = ScopedAnimation::acquire(driver, &"headline", &config(&["a"]));
            panic!("render failed");
        }));

        assert!(result.is_err());
        assert_eq!(
            *events.borrow(),
            [Event::Create("headline"), Event::Destroy(1)]
        );
    }
}
