//! New-bill submission controller.
//!
//! The workflow has two steps. Selecting a receipt validates the file name's
//! extension and, when accepted, uploads the file right away, caching the
//! returned URL/name. Submitting the form assembles the bill from the form
//! fields, the cached receipt and the session email, posts it with status
//! `pending`, and navigates back to the list.

use std::sync::Arc;

use shared::{BillRecord, BillStatus, NewBill};

use crate::navigation::{Navigator, Route};
use crate::services::file_utils::{accepted_formats, extension_allowed};
use crate::session::{AlertSink, Session};
use crate::store::{BillStore, ReceiptFile, UploadMeta};

/// The file input element: at most one selected file.
#[derive(Debug, Default)]
pub struct FileInput {
    selected: Option<ReceiptFile>,
}

impl FileInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, file: ReceiptFile) {
        self.selected = Some(file);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&ReceiptFile> {
        self.selected.as_ref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.selected.as_ref().map(|file| file.name.as_str())
    }
}

/// Raw form field values as entered; numeric fields are parsed on submit.
#[derive(Debug, Clone, Default)]
pub struct NewBillForm {
    pub bill_type: String,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

pub struct NewBillController {
    store: Arc<dyn BillStore>,
    navigator: Arc<dyn Navigator>,
    session: Arc<dyn Session>,
    alerts: Arc<dyn AlertSink>,
    receipt: Option<CachedReceipt>,
}

/// Upload result held between file selection and form submission.
#[derive(Debug, Clone, PartialEq)]
struct CachedReceipt {
    file_url: String,
    file_name: String,
}

impl NewBillController {
    pub fn new(
        store: Arc<dyn BillStore>,
        navigator: Arc<dyn Navigator>,
        session: Arc<dyn Session>,
        alerts: Arc<dyn AlertSink>,
    ) -> Self {
        Self {
            store,
            navigator,
            session,
            alerts,
            receipt: None,
        }
    }

    /// React to a change of the file input.
    ///
    /// A disallowed extension clears the selection and raises one alert
    /// naming the accepted formats; nothing is uploaded. An allowed file is
    /// uploaded immediately and the resulting URL/name cached for submit.
    /// Upload failures are logged and swallowed, never raised to the caller.
    pub async fn handle_change_file(&mut self, input: &mut FileInput) {
        let Some(file) = input.selected().cloned() else {
            return;
        };

        if !extension_allowed(&file.name) {
            input.clear();
            self.alerts.alert(&accepted_formats());
            return;
        }

        let email = self.session_email();
        match self
            .store
            .upload_receipt(file, UploadMeta { email })
            .await
        {
            Ok(uploaded) => {
                self.receipt = Some(CachedReceipt {
                    file_url: uploaded.file_url,
                    file_name: uploaded.file_name,
                });
            }
            Err(err) => log::error!("receipt upload failed: {err}"),
        }
    }

    /// Submit the form: post the assembled bill, then navigate to the list.
    ///
    /// On store rejection the display message is returned for the shared
    /// bills-page error rendering; nothing is thrown past the controller.
    pub async fn handle_submit(&mut self, form: &NewBillForm) -> Result<(), String> {
        let (file_url, file_name) = match &self.receipt {
            Some(receipt) => (
                Some(receipt.file_url.clone()),
                Some(receipt.file_name.clone()),
            ),
            None => (None, None),
        };

        let bill = NewBill {
            email: self.session_email(),
            bill_type: form.bill_type.clone(),
            name: form.name.clone(),
            amount: parse_amount(&form.amount),
            date: form.date.clone(),
            vat: non_empty(&form.vat),
            pct: parse_pct(&form.pct),
            commentary: non_empty(&form.commentary),
            file_url,
            file_name,
            status: BillStatus::Pending,
        };

        match self.store.create_bill(bill).await {
            Ok(_) => {
                self.navigator.go_to(Route::Bills);
                Ok(())
            }
            Err(err) => Err(err.to_string()),
        }
    }

    /// File name of the cached receipt upload, if one succeeded.
    pub fn receipt_file_name(&self) -> Option<&str> {
        self.receipt.as_ref().map(|r| r.file_name.as_str())
    }

    fn session_email(&self) -> String {
        self.session
            .current_user()
            .map(|user| user.email)
            .unwrap_or_default()
    }
}

/// Lenient amount parsing: unparsable input becomes 0.0 rather than
/// rejecting the submission.
fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Lenient percentage parsing: unparsable input falls back to the default.
fn parse_pct(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(BillRecord::DEFAULT_PCT)
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
