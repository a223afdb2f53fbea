pub mod bills_page;
pub mod bills_table;
pub mod error_page;
pub mod forms;
pub mod header;
pub mod new_bill_page;
pub mod receipt_modal;

pub use bills_page::BillsPage;
pub use header::Header;
pub use new_bill_page::NewBillPage;
