//! Operator command parsing for the polling loop.

use crate::services::PollingController;
use std::sync::Arc;
use tracing::debug;

/// A recognized operator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
}

/// Result of interpreting one line of operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Polling armed (or confirmed armed).
    Started,
    /// Polling disarmed.
    Stopped,
    /// Input matched no command; nothing changed. The command field is
    /// only cleared by the surface on the other two outcomes.
    Unrecognized,
}

impl CommandOutcome {
    pub fn recognized(&self) -> bool {
        !matches!(self, CommandOutcome::Unrecognized)
    }
}

/// Interprets single-line operator commands and drives the poller.
pub struct CommandInterpreter {
    poller: Arc<PollingController>,
}

impl CommandInterpreter {
    pub fn new(poller: Arc<PollingController>) -> Arc<Self> {
        Arc::new(Self { poller })
    }

    /// Parse one line of input. Surrounding whitespace is trimmed and the
    /// match is case-insensitive; exactly `/start` and `/stop` are
    /// recognized, anything else (including extra tokens) is not.
    pub fn parse(input: &str) -> Option<Command> {
        match input.trim().to_ascii_lowercase().as_str() {
            "/start" => Some(Command::Start),
            "/stop" => Some(Command::Stop),
            _ => None,
        }
    }

    /// Interpret input and arm/disarm the poller accordingly.
    /// Unrecognized input is silently ignored.
    pub fn handle(&self, input: &str) -> CommandOutcome {
        match Self::parse(input) {
            Some(Command::Start) => {
                // arm() performs the immediate refresh itself.
                self.poller.arm();
                CommandOutcome::Started
            }
            Some(Command::Stop) => {
                self.poller.disarm();
                CommandOutcome::Stopped
            }
            None => {
                debug!(input, "unrecognized command ignored");
                CommandOutcome::Unrecognized
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::services::SignalStore;
    use crate::sources::SignalFeed;
    use crate::types::Signal;
    use async_trait::async_trait;

    struct SilentFeed;

    #[async_trait]
    impl SignalFeed for SilentFeed {
        async fn fetch_signals(&self) -> Result<Vec<Signal>> {
            Ok(Vec::new())
        }
    }

    fn interpreter() -> Arc<CommandInterpreter> {
        let store = SignalStore::new();
        let poller = PollingController::new(store, Arc::new(SilentFeed), 5);
        CommandInterpreter::new(poller)
    }

    #[test]
    fn test_parse_accepts_case_and_whitespace_variants() {
        assert_eq!(CommandInterpreter::parse("/start"), Some(Command::Start));
        assert_eq!(CommandInterpreter::parse("/START"), Some(Command::Start));
        assert_eq!(CommandInterpreter::parse("/Stop"), Some(Command::Stop));
        assert_eq!(CommandInterpreter::parse("  /start  "), Some(Command::Start));
        assert_eq!(CommandInterpreter::parse("/stop\n"), Some(Command::Stop));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for input in ["start", "/starting", "/start now", "/ start", "", "  ", "/restart"] {
            assert_eq!(CommandInterpreter::parse(input), None, "input: {input:?}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_arms_and_stop_disarms() {
        let interpreter = interpreter();

        assert_eq!(interpreter.handle("/start"), CommandOutcome::Started);
        assert!(interpreter.poller.is_armed());

        assert_eq!(interpreter.handle("/STOP"), CommandOutcome::Stopped);
        assert!(!interpreter.poller.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unrecognized_input_changes_nothing() {
        let interpreter = interpreter();

        assert_eq!(interpreter.handle("hello"), CommandOutcome::Unrecognized);
        assert!(!interpreter.poller.is_armed());

        interpreter.handle("/start");
        assert_eq!(interpreter.handle("/quit"), CommandOutcome::Unrecognized);
        assert!(interpreter.poller.is_armed());
    }

    #[test]
    fn test_outcome_recognition() {
        assert!(CommandOutcome::Started.recognized());
        assert!(CommandOutcome::Stopped.recognized());
        assert!(!CommandOutcome::Unrecognized.recognized());
    }
}
