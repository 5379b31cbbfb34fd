//! The "last analysis" result slot.
//!
//! A single mutable slot per operation; no history is kept. Overlapping
//! requests are legal (there is no cancellation), so each request carries a
//! generation ticket: a completion whose ticket has been superseded is
//! discarded, making last-write-wins explicit instead of a wall-clock race.

/// Lifecycle of the most recent request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisState {
    Idle,
    InProgress,
    Ready(String),
    Failed(String),
}

/// Identifies one request issued against a slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AnalysisTicket(u64);

/// Single mutable result slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSlot {
    state: AnalysisState,
    generation: u64,
}

impl AnalysisSlot {
    pub fn new() -> Self {
        Self {
            state: AnalysisState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// Start a new request.
    ///
    /// The slot moves to in-progress regardless of its prior state; any
    /// previous result is overwritten and any still-running request is
    /// superseded.
    pub fn begin(&mut self) -> AnalysisTicket {
        self.generation += 1;
        self.state = AnalysisState::InProgress;
        AnalysisTicket(self.generation)
    }

    /// Record the outcome of a request.
    ///
    /// Returns `false` (leaving the slot untouched) when the ticket has been
    /// superseded by a newer `begin`.
    pub fn complete(&mut self, ticket: AnalysisTicket, outcome: Result<String, String>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }

        self.state = match outcome {
            Ok(text) => AnalysisState::Ready(text),
            Err(message) => AnalysisState::Failed(message),
        };
        true
    }
}

impl Default for AnalysisSlot {
    fn default() -> Self {
        Self::new()
    }
}
