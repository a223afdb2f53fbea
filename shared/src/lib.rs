use serde::{Deserialize, Serialize};
use std::fmt;

mod format;
mod lenient;
mod receipt;

pub use format::{format_date, format_status, DateFormatError};
pub use receipt::{validate_receipt_file_name, FileValidationError, ALLOWED_RECEIPT_EXTENSIONS, INVALID_RECEIPT_MESSAGE};

/// An employee expense-reimbursement record with an attached receipt image.
///
/// Decoding never fails on a single odd field: `null` and mistyped values
/// fall back to empty values so the record can still be listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRecord {
    /// Identifier assigned by the backend when the receipt is uploaded
    #[serde(default, deserialize_with = "lenient::optional_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::code")]
    pub expense_type: ExpenseType,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    /// Amount in currency units
    #[serde(default, deserialize_with = "lenient::number")]
    pub amount: f64,
    /// Calendar date (YYYY-MM-DD)
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String,
    /// VAT as typed by the employee
    #[serde(default, deserialize_with = "lenient::string")]
    pub vat: String,
    /// Percentage
    #[serde(default, deserialize_with = "lenient::number")]
    pub pct: f64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub commentary: String,
    /// Absolute URL of the stored receipt image
    #[serde(default, deserialize_with = "lenient::string")]
    pub file_url: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub file_name: String,
    #[serde(default, deserialize_with = "lenient::code")]
    pub status: BillStatus,
    /// Reviewer comment, written by the admin flow
    #[serde(default, deserialize_with = "lenient::optional_string", skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

/// Review status of a bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
    /// Any status code the backend sends that this client does not know
    Other(String),
}

impl BillStatus {
    pub fn code(&self) -> &str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
            BillStatus::Other(code) => code,
        }
    }
}

impl Default for BillStatus {
    fn default() -> Self {
        BillStatus::Other(String::new())
    }
}

impl From<String> for BillStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "pending" => BillStatus::Pending,
            "accepted" => BillStatus::Accepted,
            "refused" => BillStatus::Refused,
            _ => BillStatus::Other(code),
        }
    }
}

impl From<BillStatus> for String {
    fn from(status: BillStatus) -> Self {
        status.code().to_string()
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Expense category offered by the new bill form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExpenseType {
    Transports,
    RestaurantsAndBars,
    HotelAndLodging,
    OnlineServices,
    ItAndElectronics,
    EquipmentAndMaterial,
    OfficeSupplies,
    Other(String),
}

impl ExpenseType {
    /// Categories in the order the form lists them
    pub const ALL: [ExpenseType; 7] = [
        ExpenseType::Transports,
        ExpenseType::RestaurantsAndBars,
        ExpenseType::HotelAndLodging,
        ExpenseType::OnlineServices,
        ExpenseType::ItAndElectronics,
        ExpenseType::EquipmentAndMaterial,
        ExpenseType::OfficeSupplies,
    ];

    pub fn label(&self) -> &str {
        match self {
            ExpenseType::Transports => "Transports",
            ExpenseType::RestaurantsAndBars => "Restaurants et bars",
            ExpenseType::HotelAndLodging => "Hôtel et logement",
            ExpenseType::OnlineServices => "Services en ligne",
            ExpenseType::ItAndElectronics => "IT et électronique",
            ExpenseType::EquipmentAndMaterial => "Equipement et matériel",
            ExpenseType::OfficeSupplies => "Fournitures de bureau",
            ExpenseType::Other(label) => label,
        }
    }
}

impl Default for ExpenseType {
    fn default() -> Self {
        ExpenseType::Other(String::new())
    }
}

impl From<String> for ExpenseType {
    fn from(label: String) -> Self {
        Self::ALL
            .iter()
            .find(|known| known.label() == label)
            .cloned()
            .unwrap_or(ExpenseType::Other(label))
    }
}

impl From<ExpenseType> for String {
    fn from(expense_type: ExpenseType) -> Self {
        expense_type.label().to_string()
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A bill as shown in the bills table, with date and status already formatted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayBill {
    pub id: Option<String>,
    pub expense_type: ExpenseType,
    pub name: String,
    pub amount: f64,
    /// Formatted date, or the raw value when it could not be parsed
    pub date: String,
    /// Display label of the status
    pub status: String,
    pub file_url: String,
    pub file_name: String,
}

impl DisplayBill {
    /// Project a record using already formatted date and status strings
    pub fn from_record(record: BillRecord, date: String, status: String) -> Self {
        Self {
            id: record.id,
            expense_type: record.expense_type,
            name: record.name,
            amount: record.amount,
            date,
            status,
            file_url: record.file_url,
            file_name: record.file_name,
        }
    }
}

/// Response of the receipt upload: the hosted file and the draft bill key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub file_url: String,
    pub key: String,
}

/// The connected user, as persisted by the login page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserType {
    Employee,
    Admin,
    Other(String),
}

impl From<String> for UserType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Employee" => UserType::Employee,
            "Admin" => UserType::Admin,
            _ => UserType::Other(value),
        }
    }
}

impl From<UserType> for String {
    fn from(user_type: UserType) -> Self {
        match user_type {
            UserType::Employee => "Employee".to_string(),
            UserType::Admin => "Admin".to_string(),
            UserType::Other(value) => value,
        }
    }
}

/// Views of the page shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl Route {
    /// Location hash the shell writes for this view
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
            Route::Dashboard => "#admin/dashboard",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        [Route::Login, Route::Bills, Route::NewBill, Route::Dashboard]
            .into_iter()
            .find(|route| route.path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bill_record_uses_backend_field_names() {
        let raw = json!({
            "id": "47qAXb6fIm2zOKkLzMro",
            "vat": "80",
            "fileUrl": "https://test.storage.tld/v0/b/billable.appspot.com/o/facture.jpg",
            "status": "pending",
            "type": "Hôtel et logement",
            "commentary": "séminaire billed",
            "name": "encore",
            "fileName": "preview-facture-free-201801-pdf-1.jpg",
            "date": "2004-04-04",
            "amount": 400,
            "commentAdmin": "ok",
            "email": "a@a",
            "pct": 20
        });

        let record: BillRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.id.as_deref(), Some("47qAXb6fIm2zOKkLzMro"));
        assert_eq!(record.expense_type, ExpenseType::HotelAndLodging);
        assert_eq!(record.status, BillStatus::Pending);
        assert_eq!(record.amount, 400.0);
        assert_eq!(record.pct, 20.0);
        assert_eq!(record.file_name, "preview-facture-free-201801-pdf-1.jpg");
        assert_eq!(record.comment_admin.as_deref(), Some("ok"));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["type"], "Hôtel et logement");
        assert_eq!(back["fileUrl"], record.file_url.as_str());
        assert_eq!(back["status"], "pending");
    }

    #[test]
    fn test_unknown_codes_are_kept() {
        let raw = json!({
            "email": "a@a",
            "type": "Voyage",
            "status": "archived"
        });

        let record: BillRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.expense_type, ExpenseType::Other("Voyage".to_string()));
        assert_eq!(record.status, BillStatus::Other("archived".to_string()));
        assert_eq!(record.amount, 0.0);
        assert!(record.file_url.is_empty());

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["status"], "archived");
        assert_eq!(back["type"], "Voyage");
        assert!(back.get("id").is_none());
    }

    #[test]
    fn test_missing_codes_default_to_empty() {
        let record: BillRecord = serde_json::from_value(json!({ "date": "2004-04-04" })).unwrap();
        assert_eq!(record.status, BillStatus::Other(String::new()));
        assert_eq!(record.expense_type, ExpenseType::Other(String::new()));
        assert_eq!(record.email, "");
    }

    #[test]
    fn test_odd_fields_do_not_fail_the_list() {
        let raw = json!([
            { "id": "a", "date": "2004-04-04", "vat": "80", "amount": 400, "status": "pending" },
            { "id": "b", "date": null, "name": null, "vat": 80, "amount": "12.5", "pct": null, "status": null },
            { "id": 7, "date": 20040404, "type": ["Transports"], "commentary": { "text": "x" } }
        ]);

        let records: Vec<BillRecord> = serde_json::from_value(raw).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].date, "");
        assert_eq!(records[1].name, "");
        assert_eq!(records[1].vat, "80");
        assert_eq!(records[1].amount, 12.5);
        assert_eq!(records[1].pct, 0.0);
        assert_eq!(records[1].status, BillStatus::Other(String::new()));
        assert_eq!(records[2].id.as_deref(), Some("7"));
        assert_eq!(records[2].date, "20040404");
        assert_eq!(records[2].expense_type, ExpenseType::Other(String::new()));
        assert_eq!(records[2].commentary, "");
    }

    #[test]
    fn test_identity_from_local_storage_blob() {
        let identity: Identity =
            serde_json::from_str(r#"{"type":"Employee","email":"a@a"}"#).unwrap();
        assert_eq!(identity.user_type, UserType::Employee);
        assert_eq!(identity.email, "a@a");

        let without_email: Identity = serde_json::from_str(r#"{"type":"Employee"}"#).unwrap();
        assert_eq!(without_email.email, "");
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Bills.path(), "#employee/bills");
        assert_eq!(Route::from_path("#employee/bill/new"), Some(Route::NewBill));
        assert_eq!(Route::from_path("#nowhere"), None);
    }
}
