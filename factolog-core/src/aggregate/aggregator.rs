use crate::aggregate::messages;
use crate::aggregate::{ProcessError, Roster, SanctionEntry};
use crate::grammar::{EventKind, ParsedEvent, Sanction, parse_sanction};
use crate::notify::Notifier;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Folds events into the roster and fires notifications.
pub struct Aggregator {
    roster: Arc<RwLock<Roster>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            roster: Arc::new(RwLock::new(Roster::new())),
            notifier: None,
        }
    }

    pub fn with_notifier(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier: Some(notifier),
            ..Self::new()
        }
    }

    /// A read handle that can be moved to another task.
    pub fn reader(&self) -> RosterReader {
        RosterReader {
            roster: self.roster.clone(),
        }
    }

    pub fn snapshot(&self) -> Roster {
        self.reader().snapshot()
    }

    /// Apply one event.
    ///
    /// KICK and BAN details are decoded before anything is touched, so a
    /// malformed detail drops the whole event and leaves the roster as it was.
    pub fn process(&mut self, event: &ParsedEvent) -> Result<(), ProcessError> {
        let sanction = match event.kind {
            EventKind::Kick | EventKind::Ban => Some(
                parse_sanction(event.kind, &event.detail).map_err(|source| {
                    ProcessError::Sanction {
                        actor: event.actor.clone(),
                        kind: event.kind,
                        source,
                    }
                })?,
            ),
            _ => None,
        };

        let online = event.kind.leaves_online();
        {
            let mut roster = self.write();
            let record = roster.entry(event.actor.clone()).or_default();

            record.mark_seen(online, event.timestamp);

            match (&event.kind, &sanction) {
                (EventKind::Kick, Some(s)) => {
                    record.push_kick(SanctionEntry::new(event.timestamp, s.clone()))
                }
                (EventKind::Ban, Some(s)) => {
                    record.push_ban(SanctionEntry::new(event.timestamp, s.clone()))
                }
                (EventKind::Command, _) => record.last_command = Some(event.detail.clone()),
                (EventKind::Chat, _) => record.last_chat = Some(event.detail.clone()),
                _ => {}
            }
        }

        tracing::debug!(
            actor = %event.actor,
            kind = %event.kind,
            online,
            "event applied"
        );

        self.dispatch(event, online, sanction.as_ref());
        Ok(())
    }

    fn dispatch(&self, event: &ParsedEvent, online: bool, sanction: Option<&Sanction>) {
        let Some(notifier) = &self.notifier else {
            return;
        };
        let actor = event.actor.as_str();

        notifier.notify(messages::presence(actor, online));

        let specific = match (event.kind, sanction) {
            (EventKind::Kick, Some(s)) => Some(messages::kicked(actor, s)),
            (EventKind::Ban, Some(s)) => Some(messages::banned(actor, s)),
            (EventKind::Command, _) => Some(messages::commanded(actor, &event.detail)),
            (EventKind::Chat, _) => Some(messages::said(actor, &event.detail)),
            _ => None,
        };

        if let Some(content) = specific {
            notifier.notify(content);
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Roster> {
        // Mutations are single stores or pushes; a poisoned roster is still whole.
        self.roster.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only, cloneable view of an `Aggregator`'s roster.
#[derive(Clone)]
pub struct RosterReader {
    roster: Arc<RwLock<Roster>>,
}

impl RosterReader {
    /// Deep copy of the current roster. The lock is held only for the copy.
    pub fn snapshot(&self) -> Roster {
        self.read().clone()
    }

    pub fn actor_count(&self) -> usize {
        self.read().len()
    }

    fn read(&self) -> RwLockReadGuard<'_, Roster> {
        self.roster.read().unwrap_or_else(PoisonError::into_inner)
    }
}
