//! Storage abstraction for the remote bill store.
//!
//! The trait mirrors the transport contract the client depends on: fetch the
//! current user's bills, persist a new one, upload a receipt image. Concrete
//! backends (HTTP, in-memory) implement it without the controllers changing.

use async_trait::async_trait;
use shared::{BillsPayload, NewBill, UploadedReceipt};
use thiserror::Error;

pub mod memory;

/// Transport failure from the store. The display form is the exact message
/// shown to the user (e.g. "Erreur 404").
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Transport(String),
}

impl StoreError {
    /// Transport error carrying the conventional message for an HTTP status.
    pub fn status(code: u16) -> Self {
        StoreError::Transport(format!("Erreur {code}"))
    }
}

/// A receipt file as selected in the file input.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ReceiptFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Ownership metadata sent along with a receipt upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadMeta {
    pub email: String,
}

/// Remote persistence collaborator.
///
/// Every call resolves or rejects exactly once; the core issues one request
/// per user action and does not retry, queue or cancel.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Fetch the connected user's bills.
    async fn get_bills(&self) -> Result<BillsPayload, StoreError>;

    /// Persist a new bill and return the updated list.
    async fn create_bill(&self, bill: NewBill) -> Result<BillsPayload, StoreError>;

    /// Upload a receipt image ahead of form submission.
    async fn upload_receipt(
        &self,
        file: ReceiptFile,
        meta: UploadMeta,
    ) -> Result<UploadedReceipt, StoreError>;
}
