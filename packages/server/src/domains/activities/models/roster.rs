use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domains::activities::errors::RosterError;
use crate::domains::activities::models::activity::Activity;

/// Success payload returned by roster mutations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

/// Mapping of activity name to activity, in seed order.
///
/// The set of names is fixed once built. Only participant sets change, and
/// only through [`Roster::signup`] and [`Roster::unregister`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    activities: IndexMap<String, Activity>,
}

impl Roster {
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self { activities }
    }

    pub fn activities(&self) -> &IndexMap<String, Activity> {
        &self.activities
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Add `email` to the activity's participants.
    ///
    /// Capacity is not checked. Signing up twice is rejected with
    /// [`RosterError::AlreadySignedUp`].
    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<Confirmation, RosterError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        let email = email.trim();
        if email.is_empty() {
            return Err(RosterError::InvalidEmail);
        }

        if !activity.participants.insert(email.to_string()) {
            return Err(RosterError::AlreadySignedUp);
        }

        Ok(Confirmation {
            message: format!("Signed up {} for {}", email, activity_name),
        })
    }

    /// Remove `email` from the activity's participants, keeping the order of
    /// everyone else.
    pub fn unregister(
        &mut self,
        activity_name: &str,
        email: &str,
    ) -> Result<Confirmation, RosterError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        let email = email.trim();
        if !activity.participants.shift_remove(email) {
            return Err(RosterError::ParticipantNotFound);
        }

        Ok(Confirmation {
            message: format!("Removed {} from {}", email, activity_name),
        })
    }
}

impl FromIterator<(String, Activity)> for Roster {
    fn from_iter<T: IntoIterator<Item = (String, Activity)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
