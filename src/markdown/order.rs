use super::{error::FormatError, thread::Thread};
use chrono::{DateTime, Utc};

impl Thread {
    /// Sort messages oldest first, returning each message's instant in the
    /// same order. The messages are untouched if any identifier is malformed.
    ///
    /// Slack's history is usually, but not always, in order; some of the time
    /// it arrives reversed.
    pub fn sort_chronologically(&mut self) -> Result<Vec<DateTime<Utc>>, FormatError> {
        let instants = self
            .messages
            .iter()
            .map(|m| m.ts.instant())
            .collect::<Result<Vec<_>, _>>()?;

        let mut timed: Vec<_> = instants.into_iter().zip(self.messages.drain(..)).collect();
        // Stable, so duplicate identifiers keep their input order.
        timed.sort_by_key(|(t, _)| *t);

        let (instants, messages): (Vec<_>, Vec<_>) = timed.into_iter().unzip();
        self.messages = messages;

        Ok(instants)
    }
}
