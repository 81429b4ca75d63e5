//! Integration tests for the bills list: loading, ordering, malformed-data
//! tolerance, navigation, receipt preview and the error rendering contract.

mod common;

use std::sync::Arc;

use common::{FailingStore, RecordingNavigator};
use expense_claims_app::controllers::bills::{BillsController, EyeIcon};
use expense_claims_app::navigation::Route;
use expense_claims_app::session::FixedSession;
use expense_claims_app::store::memory::MemoryStore;
use expense_claims_app::store::BillStore;
use expense_claims_app::views::bills_page;
use shared::{BillRecord, BillStatus};

fn controller_with(store: Arc<dyn BillStore>) -> (BillsController, Arc<RecordingNavigator>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let navigator = Arc::new(RecordingNavigator::new());
    let session = Arc::new(FixedSession::employee("a@a"));
    let controller = BillsController::new(store, navigator.clone(), session);
    (controller, navigator)
}

fn bill(id: &str, date: &str) -> BillRecord {
    BillRecord {
        id: id.into(),
        email: "a@a".into(),
        bill_type: "Transports".into(),
        name: format!("bill {id}"),
        amount: 50.0,
        date: date.into(),
        vat: None,
        pct: Some(20),
        commentary: None,
        file_url: None,
        file_name: None,
        status: BillStatus::Pending,
    }
}

#[tokio::test]
async fn loads_four_bills_ordered_most_recent_first() {
    let (controller, _) = controller_with(Arc::new(MemoryStore::new()));

    let rows = controller.load_bills().await.unwrap();
    assert_eq!(rows.len(), 4);

    let dates: Vec<&str> = rows.iter().map(|row| row.record.date.as_str()).collect();
    assert_eq!(
        dates,
        vec!["2004-04-04", "2003-03-03", "2002-02-02", "2001-01-01"]
    );
    for pair in dates.windows(2) {
        assert!(pair[0] >= pair[1], "dates not descending: {pair:?}");
    }
}

#[tokio::test]
async fn rendered_list_shows_each_formatted_date() {
    let (controller, _) = controller_with(Arc::new(MemoryStore::new()));

    let rows = controller.load_bills().await.unwrap();
    let markup = bills_page(Ok(&rows), None).into_string();

    assert_eq!(markup.matches("data-testid=\"bill-date\"").count(), 4);
    for expected in ["April 4, 2004", "March 3, 2003", "February 2, 2002", "January 1, 2001"] {
        assert!(markup.contains(expected), "missing {expected}");
    }
    assert!(markup.contains("En attente"));
    assert!(markup.contains("Accepté"));
    assert!(markup.contains("Refusé"));
}

#[tokio::test]
async fn tied_dates_keep_fetch_order() {
    let store = MemoryStore::with_bills(vec![
        bill("first", "2003-03-03"),
        bill("second", "2003-03-03"),
        bill("older", "2001-01-01"),
    ]);
    let (controller, _) = controller_with(Arc::new(store));

    let rows = controller.load_bills().await.unwrap();
    let ids: Vec<&str> = rows.iter().map(|row| row.record.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "older"]);
}

#[tokio::test]
async fn malformed_date_keeps_record_with_raw_date() {
    let store = MemoryStore::with_bills(vec![bill("ok", "2004-04-04"), bill("bad", "not-a-date")]);
    let (controller, _) = controller_with(Arc::new(store));

    let rows = controller.load_bills().await.unwrap();
    assert_eq!(rows.len(), 2, "corrupted record must not drop from the list");

    let bad = rows.iter().find(|row| row.record.id == "bad").unwrap();
    assert_eq!(bad.formatted_date, "not-a-date");

    let ok = rows.iter().find(|row| row.record.id == "ok").unwrap();
    assert_eq!(ok.formatted_date, "April 4, 2004");
}

#[tokio::test]
async fn new_bill_button_navigates_to_form() {
    let (controller, navigator) = controller_with(Arc::new(MemoryStore::new()));

    controller.handle_click_new_bill();

    assert_eq!(navigator.routes(), vec![Route::NewBill]);
    assert_eq!(Route::NewBill.path(), "#employee/bill/new");
}

#[tokio::test]
async fn eye_icon_shows_receipt_in_modal() {
    let (mut controller, _) = controller_with(Arc::new(MemoryStore::new()));
    let rows = controller.load_bills().await.unwrap();

    controller.handle_click_icon_eye(&EyeIcon {
        bill_url: Some("https://storage.example/receipts/facture-2004.jpg".into()),
    });

    let markup = bills_page(Ok(&rows), controller.preview()).into_string();
    assert!(markup.contains("data-testid=\"modaleFile\""));
    assert!(markup.contains("https://storage.example/receipts/facture-2004.jpg"));
}

#[tokio::test]
async fn eye_icon_without_url_is_a_no_op() {
    let (mut controller, _) = controller_with(Arc::new(MemoryStore::new()));

    controller.handle_click_icon_eye(&EyeIcon { bill_url: None });

    assert_eq!(controller.preview(), None);
    let markup = bills_page(Ok(&[]), controller.preview()).into_string();
    assert!(!markup.contains("modaleFile"));
}

#[tokio::test]
async fn store_rejection_surfaces_its_message() {
    let (controller, _) = controller_with(Arc::new(FailingStore::new("Erreur 404")));

    let error = controller.load_bills().await.unwrap_err();
    assert_eq!(error, "Erreur 404");

    let markup = bills_page(Err(&error), None).into_string();
    assert!(markup.contains("Erreur 404"));
}

#[tokio::test]
async fn server_error_surfaces_its_message() {
    let (controller, _) = controller_with(Arc::new(FailingStore::new("Erreur 500")));

    let error = controller.load_bills().await.unwrap_err();
    let markup = bills_page(Err(&error), None).into_string();
    assert!(markup.contains("Erreur 500"));
}
