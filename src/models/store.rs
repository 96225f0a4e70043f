use std::collections::{HashMap, VecDeque};

use serenity::all::MessageId;

use super::giveaway::{EndedGiveaway, Giveaway};

/// Running giveaways keyed by display message id. A giveaway that has been
/// drawn is removed, never flagged.
#[derive(Debug, Default)]
pub struct GiveawayStore {
    giveaways: HashMap<MessageId, Giveaway>,
}

impl GiveawayStore {
    pub fn set(&mut self, id: MessageId, giveaway: Giveaway) {
        self.giveaways.insert(id, giveaway);
    }

    pub fn get(&self, id: MessageId) -> Option<&Giveaway> {
        self.giveaways.get(&id)
    }

    pub fn has(&self, id: MessageId) -> bool {
        self.giveaways.contains_key(&id)
    }

    /// Removes the giveaway and hands it back. Only one caller can ever get
    /// `Some` for a given id.
    pub fn delete(&mut self, id: MessageId) -> Option<Giveaway> {
        self.giveaways.remove(&id)
    }

    pub fn ids(&self) -> Vec<MessageId> {
        self.giveaways.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MessageId, &Giveaway)> {
        self.giveaways.iter()
    }

    pub fn len(&self) -> usize {
        self.giveaways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.giveaways.is_empty()
    }
}

/// Bounded memory of drawn giveaways so they can be rerolled. The oldest
/// entry is forgotten first once `capacity` is reached.
#[derive(Debug)]
pub struct EndedGiveaways {
    capacity: usize,
    order: VecDeque<MessageId>,
    giveaways: HashMap<MessageId, EndedGiveaway>,
}

impl EndedGiveaways {
    pub fn new(capacity: usize) -> Self {
        EndedGiveaways {
            capacity,
            order: VecDeque::new(),
            giveaways: HashMap::new(),
        }
    }

    pub fn remember(&mut self, id: MessageId, giveaway: EndedGiveaway) {
        if self.capacity == 0 {
            return;
        }

        if self.giveaways.insert(id, giveaway).is_none() {
            self.order.push_back(id);
        }

        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.giveaways.remove(&oldest);
            }
        }
    }

    pub fn get(&self, id: MessageId) -> Option<&EndedGiveaway> {
        self.giveaways.get(&id)
    }

    pub fn count(&self) -> usize {
        self.order.len()
    }
}

#[cfg(test)]
mod tests {
    use std::{num::NonZeroUsize, time::Duration};

    use serenity::all::ChannelId;
    use time::macros::datetime;

    use super::*;

    fn giveaway(prize: &str) -> Giveaway {
        Giveaway {
            channel_id: ChannelId::new(10),
            duration: Duration::from_secs(600),
            winners: NonZeroUsize::MIN,
            prize: prize.to_string(),
            end_time: datetime!(2024-01-01 12:10 UTC),
        }
    }

    fn ended(prize: &str) -> EndedGiveaway {
        EndedGiveaway::from(&giveaway(prize))
    }

    #[test]
    fn set_get_has_delete() {
        let mut store = GiveawayStore::default();
        let id = MessageId::new(1);

        assert!(store.is_empty());
        store.set(id, giveaway("Gift Card"));
        assert!(store.has(id));
        assert_eq!(store.get(id).map(|g| g.prize.as_str()), Some("Gift Card"));
        assert_eq!(store.len(), 1);

        assert!(store.delete(id).is_some());
        assert!(!store.has(id));
        assert!(store.delete(id).is_none());
    }

    #[test]
    fn ended_history_evicts_oldest() {
        let mut history = EndedGiveaways::new(2);
        history.remember(MessageId::new(1), ended("one"));
        history.remember(MessageId::new(2), ended("two"));
        history.remember(MessageId::new(3), ended("three"));

        assert_eq!(history.count(), 2);
        assert!(history.get(MessageId::new(1)).is_none());
        assert_eq!(
            history.get(MessageId::new(3)).map(|g| g.prize.as_str()),
            Some("three")
        );
    }

    #[test]
    fn remembering_twice_keeps_one_slot() {
        let mut history = EndedGiveaways::new(2);
        history.remember(MessageId::new(1), ended("one"));
        history.remember(MessageId::new(1), ended("uno"));
        history.remember(MessageId::new(2), ended("two"));

        assert_eq!(history.count(), 2);
        assert_eq!(
            history.get(MessageId::new(1)).map(|g| g.prize.as_str()),
            Some("uno")
        );
    }

    #[test]
    fn zero_capacity_remembers_nothing() {
        let mut history = EndedGiveaways::new(0);
        history.remember(MessageId::new(1), ended("one"));

        assert_eq!(history.count(), 0);
        assert!(history.get(MessageId::new(1)).is_none());
    }
}
