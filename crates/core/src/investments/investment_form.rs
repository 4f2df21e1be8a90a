//! Entry form for creating or editing a single investment.
//!
//! The form keeps the raw text the user typed and only turns it into an
//! [`Investment`] on submit. Price lookups run on the Tokio runtime in the
//! background; each lookup is numbered, and only the response to the most
//! recent one is allowed to touch the price field.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};
use rust_decimal::Decimal;
use tokio::task::JoinHandle;

use super::investments_constants::{INVESTMENT_ADDED_MESSAGE, INVESTMENT_UPDATED_MESSAGE};
use super::{
    generate_investment_id, parse_decimal_input, Investment, InvestmentError, InvestmentSink,
    InvestmentType,
};
use crate::notifications::Notifier;
use crate::prices::PriceServiceTrait;
use crate::utils::time_utils::{format_day, parse_day, today_local};

/// Point-in-time copy of the form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub date: String,
    pub amount: String,
    pub eth_price: String,
    pub investment_type: InvestmentType,
    pub is_loading: bool,
    pub is_editing: bool,
}

struct FormState {
    date: String,
    amount: String,
    eth_price: String,
    investment_type: InvestmentType,
    editing: Option<Investment>,
    /// Sequence number of the newest price request; older responses are dropped.
    latest_request: u64,
    in_flight: usize,
    price_tasks: Vec<JoinHandle<()>>,
}

impl FormState {
    fn blank() -> Self {
        Self {
            date: String::new(),
            amount: String::new(),
            eth_price: String::new(),
            investment_type: InvestmentType::Deposit,
            editing: None,
            latest_request: 0,
            in_flight: 0,
            price_tasks: Vec::new(),
        }
    }
}

fn lock_state(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Marks one price request as outstanding until dropped.
///
/// Dropping runs on every exit path, including a panicking notifier, so
/// `is_loading` can't get stuck.
struct LoadingGuard {
    state: Arc<Mutex<FormState>>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let mut state = lock_state(&self.state);
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}

/// Form that produces one [`Investment`] per successful submit.
///
/// Cloning is cheap and clones share the same fields.
#[derive(Clone)]
pub struct InvestmentEntryForm {
    state: Arc<Mutex<FormState>>,
    price_service: Arc<dyn PriceServiceTrait>,
    notifier: Arc<dyn Notifier>,
    sink: Arc<dyn InvestmentSink>,
}

impl InvestmentEntryForm {
    /// Opens the form for `editing`, or for a new entry when `None`.
    ///
    /// A new entry starts on today's date and immediately looks up the ETH
    /// price; editing never does.
    pub fn open(
        price_service: Arc<dyn PriceServiceTrait>,
        notifier: Arc<dyn Notifier>,
        sink: Arc<dyn InvestmentSink>,
        editing: Option<Investment>,
    ) -> Self {
        let form = Self {
            state: Arc::new(Mutex::new(FormState::blank())),
            price_service,
            notifier,
            sink,
        };
        form.reset(editing);
        form
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        lock_state(&self.state)
    }

    /// Switches the record being edited. Re-initializes the form only when
    /// the identity changes; returns whether it did.
    pub fn set_editing_investment(&self, editing: Option<Investment>) -> bool {
        let changed = {
            let state = self.state();
            state.editing.as_ref().map(|i| i.id.as_str())
                != editing.as_ref().map(|i| i.id.as_str())
        };
        if changed {
            self.reset(editing);
        }
        changed
    }

    fn reset(&self, editing: Option<Investment>) {
        let is_new = {
            let mut state = self.state();
            // Responses to requests issued before the reset no longer apply
            state.latest_request += 1;

            match &editing {
                Some(investment) => {
                    debug!("Editing investment {}", investment.id);
                    state.date = format_day(investment.date);
                    state.amount = investment.magnitude().normalize().to_string();
                    state.eth_price = investment.eth_price.normalize().to_string();
                    state.investment_type = investment.investment_type;
                }
                None => {
                    state.date = format_day(today_local());
                    state.amount.clear();
                    state.eth_price.clear();
                    state.investment_type = InvestmentType::Deposit;
                }
            }

            state.editing = editing;
            state.editing.is_none()
        };

        if is_new {
            self.fetch_price();
        }
    }

    pub fn set_date(&self, date: impl Into<String>) {
        self.state().date = date.into();
    }

    pub fn set_amount(&self, amount: impl Into<String>) {
        self.state().amount = amount.into();
    }

    pub fn set_eth_price(&self, eth_price: impl Into<String>) {
        self.state().eth_price = eth_price.into();
    }

    pub fn set_investment_type(&self, investment_type: InvestmentType) {
        self.state().investment_type = investment_type;
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.state();
        FormSnapshot {
            date: state.date.clone(),
            amount: state.amount.clone(),
            eth_price: state.eth_price.clone(),
            investment_type: state.investment_type,
            is_loading: state.in_flight > 0,
            is_editing: state.editing.is_some(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state().in_flight > 0
    }

    fn begin_fetch(&self) -> (u64, LoadingGuard) {
        let mut state = self.state();
        state.latest_request += 1;
        state.in_flight += 1;
        let guard = LoadingGuard {
            state: Arc::clone(&self.state),
        };
        (state.latest_request, guard)
    }

    /// Starts a background price lookup and returns immediately.
    ///
    /// Outside a Tokio runtime the lookup is skipped and the field keeps its
    /// value.
    pub fn fetch_price(&self) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime available, skipping ETH price lookup");
            return;
        };

        let (request, loading) = self.begin_fetch();
        let form = self.clone();
        let task = runtime.spawn(async move {
            let _ = form.run_fetch(request, loading).await;
        });

        let mut state = self.state();
        state.price_tasks.retain(|pending| !pending.is_finished());
        state.price_tasks.push(task);
    }

    /// Looks up the price and waits for the result.
    ///
    /// Returns `Ok(Some(price))` when the field was updated and `Ok(None)`
    /// when a newer request superseded this one.
    pub async fn refresh_price(&self) -> Result<Option<Decimal>, InvestmentError> {
        let (request, loading) = self.begin_fetch();
        self.run_fetch(request, loading).await
    }

    async fn run_fetch(
        &self,
        request: u64,
        _loading: LoadingGuard,
    ) -> Result<Option<Decimal>, InvestmentError> {
        let result = self.price_service.get_eth_price().await;

        let mut state = self.state();
        if state.latest_request != request {
            debug!(
                "Discarding price response #{} (latest is #{})",
                request, state.latest_request
            );
            return Ok(None);
        }

        match result {
            Ok(price) => {
                state.eth_price = price.normalize().to_string();
                debug!("ETH price updated to {}", state.eth_price);
                Ok(Some(price))
            }
            Err(e) => {
                drop(state);
                warn!("ETH price lookup failed: {}", e);
                let error = InvestmentError::PriceFetch(e.to_string());
                self.notifier.error(&error.to_string());
                Err(error)
            }
        }
    }

    /// Waits for every background price lookup started so far.
    pub async fn wait_for_price(&self) {
        loop {
            let tasks = std::mem::take(&mut self.state().price_tasks);
            if tasks.is_empty() {
                break;
            }
            for task in tasks {
                if let Err(e) = task.await {
                    warn!("Price lookup task ended abnormally: {}", e);
                }
            }
        }
    }

    /// Validates the fields and hands the resulting record to the sink.
    ///
    /// Failures are shown through the notifier and leave every field as it
    /// was. After a create, the amount is cleared and a fresh price lookup
    /// starts.
    pub fn submit(&self) -> Result<Investment, InvestmentError> {
        let built = {
            let state = self.state();
            build_investment(&state).map(|investment| (investment, state.editing.is_some()))
        };

        let (investment, is_edit) = match built {
            Ok(built) => built,
            Err(e) => {
                debug!("Rejected investment entry: {}", e);
                self.notifier.error(&e.to_string());
                return Err(e);
            }
        };

        self.sink.on_add_investment(investment.clone());

        if is_edit {
            info!("Updated investment {}", investment.id);
            self.notifier.success(INVESTMENT_UPDATED_MESSAGE);
        } else {
            info!(
                "Added {} {} ({} ETH)",
                investment.investment_type, investment.amount, investment.eth_amount
            );
            self.state().amount.clear();
            self.fetch_price();
            self.notifier.success(INVESTMENT_ADDED_MESSAGE);
        }

        Ok(investment)
    }

    /// Asks the owner to leave edit mode. The form itself is untouched until
    /// the owner calls [`set_editing_investment`](Self::set_editing_investment).
    pub fn cancel_edit(&self) {
        self.sink.on_cancel_edit();
    }
}

fn build_investment(state: &FormState) -> Result<Investment, InvestmentError> {
    let date = state.date.trim();
    let amount = state.amount.trim();
    let eth_price = state.eth_price.trim();

    if date.is_empty() || amount.is_empty() || eth_price.is_empty() {
        return Err(InvestmentError::IncompleteFields);
    }

    let amount = parse_decimal_input(amount).ok_or(InvestmentError::InvalidNumber)?;
    let eth_price = parse_decimal_input(eth_price).ok_or(InvestmentError::InvalidNumber)?;

    if amount <= Decimal::ZERO || eth_price <= Decimal::ZERO {
        return Err(InvestmentError::NonPositive);
    }

    let date = parse_day(date).ok_or(InvestmentError::InvalidDate)?;

    let id = state
        .editing
        .as_ref()
        .map(|investment| investment.id.clone())
        .unwrap_or_else(generate_investment_id);

    Investment::from_entry(id, date, amount, eth_price, state.investment_type)
}
