//! Recording doubles shared by the integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use expense_claims_app::navigation::{Navigator, Route};
use expense_claims_app::session::AlertSink;
use expense_claims_app::store::memory::MemoryStore;
use expense_claims_app::store::{BillStore, ReceiptFile, StoreError, UploadMeta};
use shared::{BillsPayload, NewBill, UploadedReceipt};

/// Navigator that records every route it was asked to display.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Alert sink that records every message.
#[derive(Default)]
pub struct RecordingAlerts {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl AlertSink for RecordingAlerts {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Store wrapper counting calls and capturing the last posted bill.
pub struct SpyStore {
    inner: MemoryStore,
    posts: AtomicUsize,
    uploads: AtomicUsize,
    last_post: Mutex<Option<NewBill>>,
}

impl SpyStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            posts: AtomicUsize::new(0),
            uploads: AtomicUsize::new(0),
            last_post: Mutex::new(None),
        }
    }

    pub fn post_count(&self) -> usize {
        self.posts.load(Ordering::SeqCst)
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }

    pub fn last_post(&self) -> Option<NewBill> {
        self.last_post.lock().unwrap().clone()
    }
}

#[async_trait]
impl BillStore for SpyStore {
    async fn get_bills(&self) -> Result<BillsPayload, StoreError> {
        self.inner.get_bills().await
    }

    async fn create_bill(&self, bill: NewBill) -> Result<BillsPayload, StoreError> {
        self.posts.fetch_add(1, Ordering::SeqCst);
        *self.last_post.lock().unwrap() = Some(bill.clone());
        self.inner.create_bill(bill).await
    }

    async fn upload_receipt(
        &self,
        file: ReceiptFile,
        meta: UploadMeta,
    ) -> Result<UploadedReceipt, StoreError> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        self.inner.upload_receipt(file, meta).await
    }
}

/// Store whose every call rejects with the configured message.
pub struct FailingStore {
    message: String,
}

impl FailingStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn error(&self) -> StoreError {
        StoreError::Transport(self.message.clone())
    }
}

#[async_trait]
impl BillStore for FailingStore {
    async fn get_bills(&self) -> Result<BillsPayload, StoreError> {
        Err(self.error())
    }

    async fn create_bill(&self, _bill: NewBill) -> Result<BillsPayload, StoreError> {
        Err(self.error())
    }

    async fn upload_receipt(
        &self,
        _file: ReceiptFile,
        _meta: UploadMeta,
    ) -> Result<UploadedReceipt, StoreError> {
        Err(self.error())
    }
}
