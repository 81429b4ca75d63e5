use serde::{Deserialize, Serialize};
use std::fmt;

/// Review status of a submitted bill. Assigned `Pending` on creation and only
/// ever changed by the back office, never by the employee client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// Human-readable display label for list rendering.
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refusé",
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A persisted expense bill as returned by the store.
///
/// Field names on the wire keep the store's JSON contract (`type`, `fileUrl`,
/// `fileName`). `date` is a `YYYY-MM-DD` string; that form is both what the
/// store persists and what list ordering compares on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillRecord {
    /// Opaque unique identifier, assigned by the store on creation.
    pub id: String,
    /// Owner identifier.
    pub email: String,
    /// Category label, from the fixed display list.
    #[serde(rename = "type")]
    pub bill_type: String,
    /// Short description.
    pub name: String,
    pub amount: f64,
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    /// Value-added-tax amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<String>,
    /// Percentage; treated as 20 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pct: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    /// URL of the uploaded receipt image. Set together with `file_name` or
    /// not at all.
    #[serde(rename = "fileUrl", default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    /// Original file name of the receipt.
    #[serde(rename = "fileName", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub status: BillStatus,
}

impl BillRecord {
    pub const DEFAULT_PCT: u32 = 20;

    pub fn pct_or_default(&self) -> u32 {
        self.pct.unwrap_or(Self::DEFAULT_PCT)
    }

    /// Receipt URL and file name, only when both are present.
    pub fn receipt(&self) -> Option<(&str, &str)> {
        match (self.file_url.as_deref(), self.file_name.as_deref()) {
            (Some(url), Some(name)) => Some((url, name)),
            _ => None,
        }
    }
}

/// A bill assembled on the client for submission; the store assigns the `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBill {
    pub email: String,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<String>,
    pub pct: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    #[serde(rename = "fileUrl", default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(rename = "fileName", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub status: BillStatus,
}

/// Response envelope for store reads and writes: the full, updated bill list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillsPayload {
    pub data: Vec<BillRecord>,
}

/// Result of a receipt upload: where the file landed and under which key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedReceipt {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub key: String,
}

/// The connected user as found in session storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub status: String,
}
