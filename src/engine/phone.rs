use std::time::Duration;

use crate::config::game::{PhoneAnswer, PhoneConfig};

const KEYS: &[char] = &['1', '2', '3', '4', '5', '6', '7', '8', '9', '*', '0', '#'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialerScreen {
    Keypad,
    /// Wrong number; back to the keypad when the hold runs out.
    Invalid { remaining: Duration },
    Connecting { remaining: Duration },
    Question,
    /// Ambulance promised; success is reported when the hold runs out.
    Dispatched { remaining: Duration },
    /// Dispatcher declined; only retry is left.
    Denied,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialOutcome {
    Success,
    Failure,
    Dismissed,
}

/// Dial pad and dispatcher dialogue. Time only moves through `tick`.
#[derive(Debug, Clone)]
pub struct Dialer {
    config: PhoneConfig,
    number: String,
    screen: DialerScreen,
    answered: Option<usize>,
}

impl Dialer {
    pub fn new(config: PhoneConfig) -> Self {
        Self {
            config,
            number: String::new(),
            screen: DialerScreen::Keypad,
            answered: None,
        }
    }

    pub fn keys() -> &'static [char] {
        KEYS
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn screen(&self) -> &DialerScreen {
        &self.screen
    }

    pub fn answers(&self) -> &[PhoneAnswer] {
        &self.config.answers
    }

    pub fn retry_label(&self) -> &str {
        &self.config.retry_label
    }

    pub fn display_text(&self) -> &str {
        match &self.screen {
            DialerScreen::Keypad | DialerScreen::Finished => &self.config.keypad_prompt,
            DialerScreen::Invalid { .. } => &self.config.invalid_message,
            DialerScreen::Connecting { .. } => &self.config.connected_message,
            DialerScreen::Question => &self.config.question,
            DialerScreen::Dispatched { .. } | DialerScreen::Denied => self
                .answered
                .and_then(|i| self.config.answers.get(i))
                .map(|a| a.response.as_str())
                .unwrap_or_default(),
        }
    }

    pub fn press_digit(&mut self, key: char) -> bool {
        if self.screen != DialerScreen::Keypad
            || !KEYS.contains(&key)
            || self.number.chars().count() >= self.config.max_digits
        {
            return false;
        }
        self.number.push(key);
        true
    }

    pub fn clear(&mut self) {
        if self.screen == DialerScreen::Keypad {
            self.number.clear();
        }
    }

    pub fn call(&mut self) {
        if self.screen != DialerScreen::Keypad {
            return;
        }
        self.screen = if self.number == self.config.emergency_number {
            log::debug!("Dialed {}", self.number);
            DialerScreen::Connecting {
                remaining: Duration::from_millis(self.config.connect_delay),
            }
        } else {
            DialerScreen::Invalid {
                remaining: Duration::from_millis(self.config.invalid_hold),
            }
        };
    }

    pub fn answer(&mut self, index: usize) -> bool {
        if self.screen != DialerScreen::Question {
            return false;
        }
        let Some(answer) = self.config.answers.get(index) else {
            return false;
        };

        self.answered = Some(index);
        self.screen = if answer.correct {
            DialerScreen::Dispatched {
                remaining: Duration::from_millis(self.config.dispatch_hold),
            }
        } else {
            DialerScreen::Denied
        };
        true
    }

    pub fn retry(&mut self) -> Option<DialOutcome> {
        if self.screen != DialerScreen::Denied {
            return None;
        }
        self.screen = DialerScreen::Finished;
        Some(DialOutcome::Failure)
    }

    pub fn close(&mut self) -> Option<DialOutcome> {
        if self.screen == DialerScreen::Finished {
            return None;
        }
        self.screen = DialerScreen::Finished;
        Some(DialOutcome::Dismissed)
    }

    pub fn tick(&mut self, dt: Duration) -> Option<DialOutcome> {
        match &mut self.screen {
            DialerScreen::Invalid { remaining } => {
                if countdown(remaining, dt) {
                    self.number.clear();
                    self.screen = DialerScreen::Keypad;
                }
                None
            }
            DialerScreen::Connecting { remaining } => {
                if countdown(remaining, dt) {
                    self.screen = DialerScreen::Question;
                }
                None
            }
            DialerScreen::Dispatched { remaining } => {
                if countdown(remaining, dt) {
                    self.screen = DialerScreen::Finished;
                    return Some(DialOutcome::Success);
                }
                None
            }
            _ => None,
        }
    }
}

/// True once `remaining` has run out.
fn countdown(remaining: &mut Duration, dt: Duration) -> bool {
    *remaining = remaining.saturating_sub(dt);
    remaining.is_zero()
}
