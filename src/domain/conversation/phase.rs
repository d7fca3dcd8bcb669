//! Phases of the booking dialogue.

use serde::{Deserialize, Serialize};

/// The current step of the booking dialogue for one conversation.
///
/// `Init` and `Ready` are resting states; the rest walk the visitor
/// through date → quantity → ticket type → payment. There is no terminal
/// phase: a finished or abandoned flow returns to `Ready` or `Init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingPhase {
    /// Fresh session, nothing said yet (or after a farewell).
    #[default]
    Init,
    /// Greeted and idle.
    Ready,
    /// Waiting for the visit date.
    BookingDate,
    /// Waiting for the number of tickets.
    BookingTickets,
    /// Waiting for regular or special admission.
    BookingType,
    /// Waiting for a card number.
    Payment,
}

impl BookingPhase {
    /// Returns true for the resting phases a new booking can start from.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Init | Self::Ready)
    }

    /// Returns a label suitable for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Init => "Not started",
            Self::Ready => "Ready",
            Self::BookingDate => "Choosing a date",
            Self::BookingTickets => "Choosing quantity",
            Self::BookingType => "Choosing ticket type",
            Self::Payment => "Awaiting payment",
        }
    }

    /// Returns every phase reachable from this one in a single message,
    /// including staying put.
    pub fn valid_next_phases(&self) -> Vec<Self> {
        match self {
            Self::Init => vec![Self::Ready],
            Self::Ready => vec![Self::Ready, Self::Init, Self::BookingDate],
            Self::BookingDate => {
                vec![Self::BookingDate, Self::BookingTickets, Self::Ready, Self::Init]
            }
            Self::BookingTickets => {
                vec![Self::BookingTickets, Self::BookingType, Self::Ready, Self::Init]
            }
            Self::BookingType => vec![Self::BookingType, Self::Payment, Self::Ready, Self::Init],
            Self::Payment => vec![Self::Payment, Self::Ready, Self::Init],
        }
    }

    /// Returns true if transition to target phase is valid.
    pub fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_next_phases().contains(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [BookingPhase; 6] = [
        BookingPhase::Init,
        BookingPhase::Ready,
        BookingPhase::BookingDate,
        BookingPhase::BookingTickets,
        BookingPhase::BookingType,
        BookingPhase::Payment,
    ];

    #[test]
    fn default_phase_is_init() {
        assert_eq!(BookingPhase::default(), BookingPhase::Init);
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&BookingPhase::BookingTickets).unwrap();
        assert_eq!(json, "\"booking_tickets\"");
    }

    #[test]
    fn only_init_and_ready_are_idle() {
        let idle: Vec<_> = ALL.iter().filter(|p| p.is_idle()).collect();
        assert_eq!(idle, vec![&BookingPhase::Init, &BookingPhase::Ready]);
    }

    #[test]
    fn init_always_moves_to_ready() {
        assert_eq!(BookingPhase::Init.valid_next_phases(), vec![BookingPhase::Ready]);
    }

    #[test]
    fn flow_phases_cannot_skip_ahead() {
        assert!(!BookingPhase::BookingDate.can_transition_to(&BookingPhase::BookingType));
        assert!(!BookingPhase::BookingTickets.can_transition_to(&BookingPhase::Payment));
        assert!(!BookingPhase::Ready.can_transition_to(&BookingPhase::Payment));
    }

    #[test]
    fn capacity_failure_cannot_return_to_date_step() {
        assert!(!BookingPhase::BookingType.can_transition_to(&BookingPhase::BookingDate));
    }

    #[test]
    fn every_non_init_phase_can_reset() {
        for phase in ALL.iter().filter(|p| **p != BookingPhase::Init) {
            assert!(phase.can_transition_to(&BookingPhase::Init));
            assert!(phase.can_transition_to(&BookingPhase::Ready));
        }
    }

    #[test]
    fn all_phases_have_labels() {
        for phase in ALL {
            assert!(!phase.label().is_empty());
        }
    }
}
