//! Seed data for the in-memory store and the integration tests.

use shared::{BillRecord, BillStatus};

/// Four bills covering every status, in non-chronological fetch order.
pub fn bills() -> Vec<BillRecord> {
    vec![
        BillRecord {
            id: "47qAXb6fIm2zOKkLzMro".into(),
            email: "a@a".into(),
            bill_type: "Hôtel et logement".into(),
            name: "séminaire billed".into(),
            amount: 400.0,
            date: "2004-04-04".into(),
            vat: Some("80".into()),
            pct: Some(20),
            commentary: Some("séminaire billed".into()),
            file_url: Some("https://storage.example/receipts/facture-2004.jpg".into()),
            file_name: Some("facture-2004.jpg".into()),
            status: BillStatus::Pending,
        },
        BillRecord {
            id: "BeKy5Mo4jkmdfPGYpTxZ".into(),
            email: "a@a".into(),
            bill_type: "Transports".into(),
            name: "billet de train".into(),
            amount: 100.0,
            date: "2001-01-01".into(),
            vat: None,
            pct: Some(20),
            commentary: None,
            file_url: Some("https://storage.example/receipts/billet-2001.jpg".into()),
            file_name: Some("billet-2001.jpg".into()),
            status: BillStatus::Refused,
        },
        BillRecord {
            id: "UIUZtnPQvnbFnB0ozvJh".into(),
            email: "a@a".into(),
            bill_type: "Services en ligne".into(),
            name: "abonnement logiciel".into(),
            amount: 300.0,
            date: "2003-03-03".into(),
            vat: Some("60".into()),
            pct: Some(20),
            commentary: None,
            file_url: Some("https://storage.example/receipts/abonnement-2003.png".into()),
            file_name: Some("abonnement-2003.png".into()),
            status: BillStatus::Accepted,
        },
        BillRecord {
            id: "qcCK3SzECmaZAGRrHjaC".into(),
            email: "a@a".into(),
            bill_type: "Restaurants et bars".into(),
            name: "déjeuner client".into(),
            amount: 200.0,
            date: "2002-02-02".into(),
            vat: Some("40".into()),
            pct: Some(20),
            commentary: None,
            file_url: Some("https://storage.example/receipts/dejeuner-2002.jpeg".into()),
            file_name: Some("dejeuner-2002.jpeg".into()),
            status: BillStatus::Refused,
        },
    ]
}
