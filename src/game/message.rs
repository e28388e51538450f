//! Transient on-screen messages.
//!
//! Only the newest message is kept. Each one records its deadline when it is
//! issued; the render tick drops it once the deadline passes. Nothing here
//! ever sleeps.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// What a message says.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    /// A fresh game was dealt.
    Start,
    /// The selected cards were a set.
    SetFound,
    /// The selected cards were not a set.
    NotASet,
    /// The table held no set and was redealt.
    Shuffled,
    /// No sets remain and the deck is empty.
    GameOver,
    /// The game can be restarted. Never expires.
    RestartPrompt,
}

impl MessageKind {
    /// Default English text.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            MessageKind::Start => "Let's GO!",
            MessageKind::SetFound => "It's a SET!",
            MessageKind::NotASet => "Not a SET..",
            MessageKind::Shuffled => "No SETs. Will shuffle and deal again.",
            MessageKind::GameOver => "No more SETs. GAME OVER.",
            MessageKind::RestartPrompt => "Press SPACE to restart",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// A message with its timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Message {
    kind: MessageKind,
    issued_at: Instant,
    expires_at: Option<Instant>,
}

impl Message {
    #[must_use]
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    #[must_use]
    pub fn issued_at(&self) -> Instant {
        self.issued_at
    }

    /// Deadline, or `None` for a message that stays until replaced.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    /// Whether the message should still be shown at `now`.
    #[must_use]
    pub fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |deadline| now <= deadline)
    }
}

/// Holder of the single pending message.
#[derive(Clone, Debug)]
pub struct MessageBoard {
    current: Option<Message>,
    duration: Duration,
}

impl MessageBoard {
    /// Board whose transient messages last `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Replace the pending message with a transient one.
    pub fn issue(&mut self, kind: MessageKind, now: Instant) {
        self.current = Some(Message {
            kind,
            issued_at: now,
            expires_at: Some(now + self.duration),
        });
    }

    /// Replace the pending message with one that never expires.
    pub fn pin(&mut self, kind: MessageKind, now: Instant) {
        self.current = Some(Message {
            kind,
            issued_at: now,
            expires_at: None,
        });
    }

    /// Pending message if still live at `now`.
    #[must_use]
    pub fn current(&self, now: Instant) -> Option<&Message> {
        self.current.as_ref().filter(|m| m.is_live(now))
    }

    /// Drop the pending message if it has expired. Returns whether one was dropped.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.current.is_some_and(|m| !m.is_live(now)) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_message_wins() {
        let now = Instant::now();
        let mut board = MessageBoard::new(Duration::from_secs(2));
        board.issue(MessageKind::SetFound, now);
        board.issue(MessageKind::Shuffled, now);

        assert_eq!(board.current(now).map(Message::kind), Some(MessageKind::Shuffled));
    }

    #[test]
    fn test_transient_message_expires() {
        let now = Instant::now();
        let mut board = MessageBoard::new(Duration::from_secs(2));
        board.issue(MessageKind::NotASet, now);

        let message = *board.current(now).unwrap();
        assert_eq!(message.expires_at(), Some(now + Duration::from_secs(2)));
        assert!(board.current(now + Duration::from_secs(2)).is_some());

        let later = now + Duration::from_millis(2001);
        assert!(board.current(later).is_none());
        assert!(!board.expire(now));
        assert!(board.expire(later));
        assert!(!board.expire(later));
    }

    #[test]
    fn test_pinned_message_stays() {
        let now = Instant::now();
        let mut board = MessageBoard::new(Duration::from_secs(2));
        board.pin(MessageKind::RestartPrompt, now);

        let much_later = now + Duration::from_secs(3600);
        assert!(!board.expire(much_later));
        assert_eq!(
            board.current(much_later).map(Message::kind),
            Some(MessageKind::RestartPrompt)
        );
    }

    #[test]
    fn test_texts() {
        assert_eq!(MessageKind::SetFound.to_string(), "It's a SET!");
        assert_eq!(MessageKind::GameOver.text(), "No more SETs. GAME OVER.");
    }
}
