use anyhow::Result;
use log::{debug, error, info, warn};
use std::rc::Rc;

use crate::traits::{Dialog, Navigator, Store};
use shared::{format_date, format_status, BillRecord, DisplayBill, Route};

/// Controller of the employee bills page
#[derive(Clone)]
pub struct BillsService {
    store: Rc<dyn Store>,
    navigator: Rc<dyn Navigator>,
    dialog: Rc<dyn Dialog>,
}

impl BillsService {
    pub fn new(store: Rc<dyn Store>, navigator: Rc<dyn Navigator>, dialog: Rc<dyn Dialog>) -> Self {
        Self {
            store,
            navigator,
            dialog,
        }
    }

    /// Fetch the bills of the connected employee, formatted for display.
    ///
    /// Rows keep the order the store returned them in. A record whose date
    /// cannot be formatted keeps its raw date instead of failing the page.
    pub async fn get_bills(&self) -> Result<Vec<DisplayBill>> {
        info!("Fetching bills");

        let records = self.store.list().await.map_err(|e| {
            error!("Failed to list bills: {}", e);
            e
        })?;

        let bills: Vec<DisplayBill> = records.into_iter().map(format_bill).collect();

        info!("Fetched {} bills", bills.len());
        Ok(bills)
    }

    /// Show the receipt behind a row's eye icon
    pub fn handle_click_icon_eye(&self, bill_url: &str) {
        if bill_url.trim().is_empty() {
            warn!("Eye icon clicked without a receipt url");
            return;
        }

        debug!("Opening receipt {}", bill_url);
        self.dialog.open(bill_url);
    }

    pub fn handle_click_new_bill(&self) {
        self.navigator.navigate(Route::NewBill);
    }
}

fn format_bill(record: BillRecord) -> DisplayBill {
    let status = format_status(&record.status);
    let date = match format_date(&record.date) {
        Ok(date) => date,
        Err(e) => {
            warn!("{}, keeping raw date for bill {:?}", e, record);
            record.date.clone()
        }
    };

    DisplayBill::from_record(record, date, status)
}
