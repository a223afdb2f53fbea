pub mod new_bill_form;

pub use new_bill_form::NewBillForm;
