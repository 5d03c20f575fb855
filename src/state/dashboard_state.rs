// ============================================================================
// DASHBOARD VIEW STATE - Contadores de paridad por bucket y por ticket
// ============================================================================
// Par => cerrado, impar => abierto. Cada bucket tiene su propio contador; el
// ticket lleva uno solo que vuelve a 0 cuando se elige un ticket distinto.
// ============================================================================

use std::collections::BTreeSet;
use crate::models::BillStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusBucket {
    Pending,
    Accepted,
    Refused,
}

impl StatusBucket {
    pub const ALL: [StatusBucket; 3] = [StatusBucket::Pending, StatusBucket::Accepted, StatusBucket::Refused];

    /// Índice 1..=3 usado en los ids del markup (`arrow-icon1`, ...)
    pub fn index(&self) -> u8 {
        match self {
            StatusBucket::Pending => 1,
            StatusBucket::Accepted => 2,
            StatusBucket::Refused => 3,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(StatusBucket::Pending),
            2 => Some(StatusBucket::Accepted),
            3 => Some(StatusBucket::Refused),
            _ => None,
        }
    }

    pub fn status(&self) -> BillStatus {
        match self {
            StatusBucket::Pending => BillStatus::Pending,
            StatusBucket::Accepted => BillStatus::Accepted,
            StatusBucket::Refused => BillStatus::Refused,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusBucket::Pending => "En attente",
            StatusBucket::Accepted => "Validé",
            StatusBucket::Refused => "Refusé",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketTransition {
    Expanded,
    Collapsed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketTransition {
    Opened,
    Closed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct BucketCounters {
    pending: u32,
    accepted: u32,
    refused: u32,
}

impl BucketCounters {
    fn get(&self, bucket: StatusBucket) -> u32 {
        match bucket {
            StatusBucket::Pending => self.pending,
            StatusBucket::Accepted => self.accepted,
            StatusBucket::Refused => self.refused,
        }
    }

    fn get_mut(&mut self, bucket: StatusBucket) -> &mut u32 {
        match bucket {
            StatusBucket::Pending => &mut self.pending,
            StatusBucket::Accepted => &mut self.accepted,
            StatusBucket::Refused => &mut self.refused,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TicketFocus {
    bill_id: String,
    counter: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardViewState {
    buckets: BucketCounters,
    ticket: Option<TicketFocus>,
}

impl DashboardViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_bucket(&mut self, bucket: StatusBucket) -> BucketTransition {
        let counter = self.buckets.get_mut(bucket);
        let transition = if *counter % 2 == 0 {
            BucketTransition::Expanded
        } else {
            BucketTransition::Collapsed
        };
        *counter += 1;
        transition
    }

    pub fn is_expanded(&self, bucket: StatusBucket) -> bool {
        self.buckets.get(bucket) % 2 == 1
    }

    pub fn expanded(&self) -> BTreeSet<StatusBucket> {
        StatusBucket::ALL.into_iter().filter(|b| self.is_expanded(*b)).collect()
    }

    /// Elegir otro ticket reinicia el contador; repetir el mismo alterna abrir/cerrar
    pub fn select_ticket(&mut self, bill_id: &str) -> TicketTransition {
        if self.ticket.as_ref().map_or(true, |focus| focus.bill_id != bill_id) {
            self.ticket = None;
        }
        let focus = self.ticket.get_or_insert_with(|| TicketFocus {
            bill_id: bill_id.to_string(),
            counter: 0,
        });
        let transition = if focus.counter % 2 == 0 {
            TicketTransition::Opened
        } else {
            TicketTransition::Closed
        };
        focus.counter += 1;
        transition
    }

    pub fn open_ticket_id(&self) -> Option<&str> {
        self.ticket
            .as_ref()
            .filter(|focus| focus.counter % 2 == 1)
            .map(|focus| focus.bill_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_alternates_starting_collapsed() {
        let mut state = DashboardViewState::new();
        assert!(!state.is_expanded(StatusBucket::Pending));

        let transitions: Vec<_> = (0..5).map(|_| state.toggle_bucket(StatusBucket::Pending)).collect();
        assert_eq!(
            transitions,
            vec![
                BucketTransition::Expanded,
                BucketTransition::Collapsed,
                BucketTransition::Expanded,
                BucketTransition::Collapsed,
                BucketTransition::Expanded,
            ]
        );
        assert!(state.is_expanded(StatusBucket::Pending));
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut state = DashboardViewState::new();
        state.toggle_bucket(StatusBucket::Refused);
        let before = state.expanded();
        state.toggle_bucket(StatusBucket::Refused);
        state.toggle_bucket(StatusBucket::Refused);
        assert_eq!(state.expanded(), before);
    }

    #[test]
    fn buckets_do_not_share_counters() {
        let mut state = DashboardViewState::new();
        state.toggle_bucket(StatusBucket::Pending);
        for _ in 0..3 {
            assert_eq!(state.toggle_bucket(StatusBucket::Accepted), BucketTransition::Expanded);
            assert_eq!(state.toggle_bucket(StatusBucket::Accepted), BucketTransition::Collapsed);
            assert!(state.is_expanded(StatusBucket::Pending));
        }
        assert_eq!(state.toggle_bucket(StatusBucket::Refused), BucketTransition::Expanded);
        assert_eq!(
            state.expanded(),
            [StatusBucket::Pending, StatusBucket::Refused].into_iter().collect()
        );
    }

    #[test]
    fn same_ticket_twice_closes_it() {
        let mut state = DashboardViewState::new();
        assert_eq!(state.select_ticket("a"), TicketTransition::Opened);
        assert_eq!(state.open_ticket_id(), Some("a"));
        assert_eq!(state.select_ticket("a"), TicketTransition::Closed);
        assert_eq!(state.open_ticket_id(), None);
    }

    #[test]
    fn other_ticket_resets_parity() {
        let mut state = DashboardViewState::new();
        state.select_ticket("a");
        assert_eq!(state.select_ticket("b"), TicketTransition::Opened);
        assert_eq!(state.open_ticket_id(), Some("b"));
        // "a" vuelve a empezar desde cero aunque estuviera abierto antes
        assert_eq!(state.select_ticket("a"), TicketTransition::Opened);
    }

    #[test]
    fn index_mapping_is_one_based() {
        for bucket in StatusBucket::ALL {
            assert_eq!(StatusBucket::from_index(bucket.index()), Some(bucket));
        }
        assert_eq!(StatusBucket::from_index(0), None);
        assert_eq!(StatusBucket::from_index(4), None);
    }
}
