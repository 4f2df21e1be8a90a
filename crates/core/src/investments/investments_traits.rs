use std::sync::{Arc, Mutex};

use super::Investment;

/// Receiver of form results; owns the investment list.
///
/// This is the only persistence path for entries: the form keeps nothing
/// once a record is handed over.
pub trait InvestmentSink: Send + Sync {
    /// Called exactly once per successful submit, for creates and edits alike.
    fn on_add_investment(&self, investment: Investment);

    /// Called exactly once per cancel action in edit mode.
    fn on_cancel_edit(&self);
}

/// Mock sink for testing - collects submitted investments and cancel calls.
#[derive(Clone, Default)]
pub struct MockInvestmentSink {
    added: Arc<Mutex<Vec<Investment>>>,
    cancels: Arc<Mutex<usize>>,
}

impl MockInvestmentSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all submitted investments, oldest first.
    pub fn added(&self) -> Vec<Investment> {
        self.added.lock().unwrap().clone()
    }

    pub fn cancel_count(&self) -> usize {
        *self.cancels.lock().unwrap()
    }
}

impl InvestmentSink for MockInvestmentSink {
    fn on_add_investment(&self, investment: Investment) {
        self.added.lock().unwrap().push(investment);
    }

    fn on_cancel_edit(&self) {
        *self.cancels.lock().unwrap() += 1;
    }
}
