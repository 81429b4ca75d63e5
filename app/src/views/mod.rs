//! Markup rendering for the two employee views.
//!
//! Pure functions: state in, markup out. The bills page takes the typed load
//! result; when it carries an error the literal message lands in the markup
//! so on-screen text search finds it.

use maud::{html, Markup};

use crate::controllers::bills::BillRow;

/// Category labels offered by the new-bill form.
pub const BILL_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// The bills list page.
///
/// `result` is the controller's load outcome; `preview` the receipt URL shown
/// in the modal, when an eye icon was clicked.
pub fn bills_page(result: Result<&[BillRow], &str>, preview: Option<&str>) -> Markup {
    html! {
        div .content {
            div .content-header {
                div .content-title { "Mes notes de frais" }
                button type="button" data-testid="btn-new-bill" { "Nouvelle note de frais" }
            }
            @match result {
                Ok(rows) => {
                    table #bills-table {
                        thead {
                            tr {
                                th { "Type" }
                                th { "Nom" }
                                th { "Date" }
                                th { "Montant" }
                                th { "Statut" }
                                th { "Actions" }
                            }
                        }
                        tbody data-testid="tbody" {
                            @for row in rows {
                                tr {
                                    td { (row.record.bill_type) }
                                    td { (row.record.name) }
                                    td data-testid="bill-date" { (row.formatted_date) }
                                    td { (row.record.amount) " €" }
                                    td data-testid="bill-status" { (row.status_label) }
                                    td {
                                        div .icon-eye
                                            data-testid="icon-eye"
                                            data-bill-url=[row.record.file_url.as_deref()] {}
                                    }
                                }
                            }
                        }
                    }
                },
                Err(message) => {
                    div .error-message data-testid="error-message" { (message) }
                },
            }
            @if let Some(url) = preview {
                div #modaleFile data-testid="modaleFile" {
                    div .modal-body {
                        img src=(url) alt="Bill";
                    }
                }
            }
        }
    }
}

/// The new-bill form page.
pub fn new_bill_page() -> Markup {
    html! {
        div .content {
            div .content-title { "Envoyer une note de frais" }
            form data-testid="form-new-bill" {
                label for="expense-type" { "Type de dépense" }
                select #expense-type data-testid="expense-type" {
                    @for bill_type in BILL_TYPES {
                        option value=(bill_type) { (bill_type) }
                    }
                }
                label for="expense-name" { "Nom de la dépense" }
                input #expense-name type="text" data-testid="expense-name";
                label for="datepicker" { "Date" }
                input #datepicker type="date" data-testid="datepicker";
                label for="amount" { "Montant TTC" }
                input #amount type="text" data-testid="amount";
                label for="vat" { "TVA" }
                input #vat type="text" data-testid="vat";
                input #pct type="text" data-testid="pct" placeholder="20";
                label for="commentary" { "Commentaire" }
                textarea #commentary data-testid="commentary" {}
                label for="file" { "Justificatif" }
                input #file type="file" data-testid="file";
                button type="submit" #btn-send-bill { "Envoyer" }
            }
        }
    }
}
