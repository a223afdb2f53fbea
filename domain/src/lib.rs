//! # Billed domain
//!
//! Controllers behind the two employee pages:
//!
//! - [`BillsService`]: lists the employee's bills, formatted for display, and
//!   opens receipts in a dialog.
//! - [`NewBillService`]: validates and uploads a receipt, then submits the
//!   new bill and returns to the bills page.
//!
//! Both only talk to the outside world through the capabilities in
//! [`traits`].

pub mod bills_service;
pub mod new_bill_service;
pub mod traits;

#[cfg(test)]
mod test_utils;

pub use bills_service::BillsService;
pub use new_bill_service::{NewBillError, NewBillForm, NewBillService, NewBillState, SubmitPolicy, UploadStaging};
pub use traits::{
    Alert, CreateBillInput, Dialog, FileInput, FormPart, IdentityProvider, MultipartForm, Navigator,
    RequestHeaders, SelectedFile, Store, TaskSpawner, UpdateBillInput,
};
