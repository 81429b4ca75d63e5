//! In-memory reference implementation of [`BillStore`].
//!
//! Backs the integration tests and doubles as executable documentation of the
//! store contract: `create_bill` assigns the id and returns the grown list,
//! `upload_receipt` returns a stable URL/key pair for the file.

use std::sync::Mutex;

use async_trait::async_trait;
use shared::{BillRecord, BillsPayload, NewBill, UploadedReceipt};
use uuid::Uuid;

use crate::fixtures;
use crate::store::{BillStore, ReceiptFile, StoreError, UploadMeta};

pub struct MemoryStore {
    bills: Mutex<Vec<BillRecord>>,
}

impl MemoryStore {
    /// Store seeded with the fixture bills.
    pub fn new() -> Self {
        Self::with_bills(fixtures::bills())
    }

    pub fn with_bills(bills: Vec<BillRecord>) -> Self {
        Self {
            bills: Mutex::new(bills),
        }
    }

    fn snapshot(&self) -> Vec<BillRecord> {
        self.bills.lock().expect("bill store poisoned").clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BillStore for MemoryStore {
    async fn get_bills(&self) -> Result<BillsPayload, StoreError> {
        Ok(BillsPayload {
            data: self.snapshot(),
        })
    }

    async fn create_bill(&self, bill: NewBill) -> Result<BillsPayload, StoreError> {
        let record = BillRecord {
            id: Uuid::new_v4().to_string(),
            email: bill.email,
            bill_type: bill.bill_type,
            name: bill.name,
            amount: bill.amount,
            date: bill.date,
            vat: bill.vat,
            pct: Some(bill.pct),
            commentary: bill.commentary,
            file_url: bill.file_url,
            file_name: bill.file_name,
            status: bill.status,
        };
        let mut bills = self.bills.lock().expect("bill store poisoned");
        bills.push(record);
        Ok(BillsPayload {
            data: bills.clone(),
        })
    }

    async fn upload_receipt(
        &self,
        file: ReceiptFile,
        meta: UploadMeta,
    ) -> Result<UploadedReceipt, StoreError> {
        let key = Uuid::new_v4().to_string();
        Ok(UploadedReceipt {
            file_url: format!(
                "https://storage.example/{}/{}/{}",
                meta.email, key, file.name
            ),
            file_name: file.name,
            key,
        })
    }
}
