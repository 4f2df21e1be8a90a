//! In-memory owner of the investment list.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, info};

use super::{Investment, InvestmentSink, InvestmentSummary};

#[derive(Default)]
struct LedgerState {
    investments: Vec<Investment>,
    editing_id: Option<String>,
}

/// Holds every recorded investment and which one, if any, is being edited.
///
/// Receives the entry form's results through [`InvestmentSink`].
#[derive(Default)]
pub struct InvestmentLedger {
    inner: Mutex<LedgerState>,
}

impl InvestmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_investments(investments: Vec<Investment>) -> Self {
        Self {
            inner: Mutex::new(LedgerState {
                investments,
                editing_id: None,
            }),
        }
    }

    fn inner(&self) -> MutexGuard<'_, LedgerState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All investments, newest date first. Entries on the same day keep
    /// insertion order.
    pub fn investments(&self) -> Vec<Investment> {
        let mut investments = self.inner().investments.clone();
        investments.sort_by(|a, b| b.date.cmp(&a.date));
        investments
    }

    pub fn get(&self, id: &str) -> Option<Investment> {
        self.inner().investments.iter().find(|i| i.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner().investments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner().investments.is_empty()
    }

    /// Selects a record for editing and returns it, or `None` if unknown.
    pub fn start_edit(&self, id: &str) -> Option<Investment> {
        let mut inner = self.inner();
        let found = inner.investments.iter().find(|i| i.id == id).cloned();
        if found.is_some() {
            inner.editing_id = Some(id.to_string());
        }
        found
    }

    /// The record currently selected for editing.
    pub fn editing(&self) -> Option<Investment> {
        let inner = self.inner();
        let id = inner.editing_id.as_deref()?;
        inner.investments.iter().find(|i| i.id == id).cloned()
    }

    pub fn remove(&self, id: &str) -> Option<Investment> {
        let mut inner = self.inner();
        let index = inner.investments.iter().position(|i| i.id == id)?;
        if inner.editing_id.as_deref() == Some(id) {
            inner.editing_id = None;
        }
        debug!("Removed investment {}", id);
        Some(inner.investments.remove(index))
    }

    pub fn summary(&self) -> InvestmentSummary {
        InvestmentSummary::from_investments(self.inner().investments.iter())
    }
}

impl InvestmentSink for InvestmentLedger {
    fn on_add_investment(&self, investment: Investment) {
        let mut inner = self.inner();
        match inner.investments.iter().position(|i| i.id == investment.id) {
            Some(index) => {
                info!("Replacing investment {}", investment.id);
                inner.investments[index] = investment;
            }
            None => {
                info!("Recording investment {}", investment.id);
                inner.investments.push(investment);
            }
        }
        inner.editing_id = None;
    }

    fn on_cancel_edit(&self) {
        self.inner().editing_id = None;
    }
}
