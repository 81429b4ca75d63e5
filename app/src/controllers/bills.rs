//! Bills list controller.
//!
//! Loads the connected employee's bills from the store, projects them into
//! display rows (formatted date, status label) ordered most recent first, and
//! handles the two list interactions: opening the new-bill form and
//! previewing a receipt in the modal.

use std::sync::Arc;

use shared::BillRecord;

use crate::navigation::{Navigator, Route};
use crate::services::date_utils::{compare_dates_descending, format_date_for_display};
use crate::session::Session;
use crate::store::BillStore;

/// Display projection of a [`BillRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub record: BillRecord,
    /// Human-readable date; the raw `YYYY-MM-DD` string when formatting
    /// fails.
    pub formatted_date: String,
    pub status_label: &'static str,
}

impl BillRow {
    fn from_record(record: BillRecord) -> Self {
        let formatted_date = match format_date_for_display(&record.date) {
            Some(formatted) => formatted,
            None => {
                // Malformed dates stay visible as-is; one bad record never
                // drops from the list.
                log::warn!("bill {} has unparsable date {:?}", record.id, record.date);
                record.date.clone()
            }
        };
        let status_label = record.status.label();
        Self {
            record,
            formatted_date,
            status_label,
        }
    }
}

/// The receipt "eye" icon as rendered in a list row. `bill_url` carries the
/// icon's data attribute; absent when the row has no receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct EyeIcon {
    pub bill_url: Option<String>,
}

pub struct BillsController {
    store: Arc<dyn BillStore>,
    navigator: Arc<dyn Navigator>,
    session: Arc<dyn Session>,
    preview: Option<String>,
}

impl BillsController {
    pub fn new(
        store: Arc<dyn BillStore>,
        navigator: Arc<dyn Navigator>,
        session: Arc<dyn Session>,
    ) -> Self {
        Self {
            store,
            navigator,
            session,
            preview: None,
        }
    }

    /// Fetch and order the bill list for display.
    ///
    /// Rows come back sorted by raw date string descending (stable, so tied
    /// dates keep fetch order). A store rejection is converted to its display
    /// message rather than propagated.
    pub async fn load_bills(&self) -> Result<Vec<BillRow>, String> {
        if let Some(user) = self.session.current_user() {
            log::info!("loading bills for {}", user.email);
        }
        let payload = self
            .store
            .get_bills()
            .await
            .map_err(|err| err.to_string())?;

        let mut rows: Vec<BillRow> = payload.data.into_iter().map(BillRow::from_record).collect();
        rows.sort_by(|a, b| compare_dates_descending(&a.record.date, &b.record.date));
        Ok(rows)
    }

    /// Open the new-bill form.
    pub fn handle_click_new_bill(&self) {
        self.navigator.go_to(Route::NewBill);
    }

    /// Show the receipt behind an eye icon in the preview modal.
    /// No-op when the icon carries no receipt URL.
    pub fn handle_click_icon_eye(&mut self, icon: &EyeIcon) {
        if let Some(url) = &icon.bill_url {
            self.preview = Some(url.clone());
        }
    }

    /// Receipt URL currently shown in the modal, if any.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }
}
