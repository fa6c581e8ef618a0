use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// An extracurricular offering and the emails signed up for it.
///
/// Participants keep signup order so listings read the way students joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Reported to clients, never enforced on signup.
    pub max_participants: u32,
    pub participants: IndexSet<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: IndexSet::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants
            .extend(participants.into_iter().map(Into::into));
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.contains(email)
    }

    /// Open places left. Zero once the activity is at or over capacity.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}
