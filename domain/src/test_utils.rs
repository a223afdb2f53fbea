//! In-memory capabilities for controller tests.
//!
//! Every mock records what it was asked to do so tests can assert on the
//! calls made by a controller.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use std::cell::{Cell, RefCell};

use crate::traits::{
    Alert, CreateBillInput, Dialog, FileInput, IdentityProvider, Navigator, SelectedFile, Store, TaskSpawner,
    UpdateBillInput,
};
use shared::{BillRecord, BillStatus, ExpenseType, Identity, Route, UploadResult, UserType};

/// Store backed by a fixed list of bills
pub struct MockStore {
    bills: Vec<BillRecord>,
    upload: std::result::Result<UploadResult, String>,
    update_error: Option<String>,
    list_calls: Cell<usize>,
    create_calls: RefCell<Vec<CreateBillInput>>,
    update_calls: RefCell<Vec<UpdateBillInput>>,
}

impl Default for MockStore {
    fn default() -> Self {
        Self {
            bills: Vec::new(),
            upload: Ok(UploadResult {
                file_url: "https://localhost:3456/images/test.jpg".to_string(),
                key: "1234".to_string(),
            }),
            update_error: None,
            list_calls: Cell::new(0),
            create_calls: RefCell::new(Vec::new()),
            update_calls: RefCell::new(Vec::new()),
        }
    }
}

impl MockStore {
    pub fn with_bills(bills: Vec<BillRecord>) -> Self {
        Self {
            bills,
            ..Self::default()
        }
    }

    pub fn with_upload(upload: UploadResult) -> Self {
        Self {
            upload: Ok(upload),
            ..Self::default()
        }
    }

    pub fn failing_uploads(mut self, message: &str) -> Self {
        self.upload = Err(message.to_string());
        self
    }

    pub fn failing_updates(mut self, message: &str) -> Self {
        self.update_error = Some(message.to_string());
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    pub fn create_calls(&self) -> Vec<CreateBillInput> {
        self.create_calls.borrow().clone()
    }

    pub fn update_calls(&self) -> Vec<UpdateBillInput> {
        self.update_calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Store for MockStore {
    async fn list(&self) -> Result<Vec<BillRecord>> {
        self.list_calls.set(self.list_calls.get() + 1);
        Ok(self.bills.clone())
    }

    async fn create(&self, input: CreateBillInput) -> Result<UploadResult> {
        self.create_calls.borrow_mut().push(input);
        self.upload.clone().map_err(|message| anyhow!(message))
    }

    async fn update(&self, input: UpdateBillInput) -> Result<BillRecord> {
        let record: BillRecord = serde_json::from_str(&input.data)?;
        self.update_calls.borrow_mut().push(input);
        match &self.update_error {
            Some(message) => Err(anyhow!(message.clone())),
            None => Ok(record),
        }
    }
}

/// Store whose every call fails with the same message
pub struct FailingStore {
    message: String,
}

impl FailingStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl Store for FailingStore {
    async fn list(&self) -> Result<Vec<BillRecord>> {
        Err(anyhow!(self.message.clone()))
    }

    async fn create(&self, _input: CreateBillInput) -> Result<UploadResult> {
        Err(anyhow!(self.message.clone()))
    }

    async fn update(&self, _input: UpdateBillInput) -> Result<BillRecord> {
        Err(anyhow!(self.message.clone()))
    }
}

#[derive(Default)]
pub struct MockNavigator {
    routes: RefCell<Vec<Route>>,
}

impl MockNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigator for MockNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

#[derive(Default)]
pub struct MockDialog {
    opened: RefCell<Vec<String>>,
}

impl MockDialog {
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl Dialog for MockDialog {
    fn open(&self, image_url: &str) {
        self.opened.borrow_mut().push(image_url.to_string());
    }
}

#[derive(Default)]
pub struct MockAlert {
    messages: RefCell<Vec<String>>,
}

impl MockAlert {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Alert for MockAlert {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

pub struct MockIdentity(Option<Identity>);

impl MockIdentity {
    pub fn employee(email: &str) -> Self {
        Self(Some(Identity {
            user_type: UserType::Employee,
            email: email.to_string(),
        }))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl IdentityProvider for MockIdentity {
    fn current_user(&self) -> Option<Identity> {
        self.0.clone()
    }
}

/// File input whose value is the picked file name until cleared
pub struct MockFileInput {
    file: Option<SelectedFile>,
    value: RefCell<String>,
}

impl MockFileInput {
    pub fn with_file(file: SelectedFile) -> Self {
        let value = RefCell::new(file.name.clone());
        Self { file: Some(file), value }
    }

    pub fn empty() -> Self {
        Self {
            file: None,
            value: RefCell::new(String::new()),
        }
    }

    pub fn value(&self) -> String {
        self.value.borrow().clone()
    }
}

impl FileInput for MockFileInput {
    fn selected_file(&self) -> Option<SelectedFile> {
        self.file.clone()
    }

    fn clear(&self) {
        self.value.borrow_mut().clear();
    }
}

/// Holds spawned tasks until the test decides to run them
#[derive(Default)]
pub struct MockSpawner {
    tasks: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
}

impl MockSpawner {
    pub async fn run_all(&self) {
        let tasks: Vec<_> = self.tasks.borrow_mut().drain(..).collect();
        for task in tasks {
            task.await;
        }
    }
}

impl TaskSpawner for MockSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.tasks.borrow_mut().push(task);
    }
}

pub fn image_file(name: &str) -> SelectedFile {
    SelectedFile {
        name: name.to_string(),
        mime_type: "image/jpeg".to_string(),
        bytes: b"file content".to_vec(),
    }
}

pub fn record(date: &str, status: BillStatus) -> BillRecord {
    BillRecord {
        id: Some(format!("bill-{}", date)),
        email: "a@a".to_string(),
        expense_type: ExpenseType::Transports,
        name: "test".to_string(),
        amount: 100.0,
        date: date.to_string(),
        vat: "20".to_string(),
        pct: 20.0,
        commentary: String::new(),
        file_url: "https://test.storage.tld/receipt.jpg".to_string(),
        file_name: "receipt.jpg".to_string(),
        status,
        comment_admin: None,
    }
}

/// Bills as the backend returns them, newest first
pub fn bills_fixture() -> Vec<BillRecord> {
    vec![
        BillRecord {
            id: Some("47qAXb6fIm2zOKkLzMro".to_string()),
            email: "a@a".to_string(),
            expense_type: ExpenseType::HotelAndLodging,
            name: "encore".to_string(),
            amount: 400.0,
            date: "2004-04-04".to_string(),
            vat: "80".to_string(),
            pct: 20.0,
            commentary: "séminaire billed".to_string(),
            file_url: "https://test.storage.tld/v0/b/billable.appspot.com/o/facturefreemobile.jpg".to_string(),
            file_name: "preview-facture-free-201801-pdf-1.jpg".to_string(),
            status: BillStatus::Pending,
            comment_admin: Some("ok".to_string()),
        },
        BillRecord {
            id: Some("BeKy5Mo4jkmdfPGYpTxZ".to_string()),
            email: "a@a".to_string(),
            expense_type: ExpenseType::OnlineServices,
            name: "test1".to_string(),
            amount: 100.0,
            date: "2003-03-03".to_string(),
            vat: String::new(),
            pct: 20.0,
            commentary: "plop".to_string(),
            file_url: "https://test.storage.tld/v0/b/billable.appspot.com/o/justificatifs%2F1.jpg".to_string(),
            file_name: "1592770761.jpeg".to_string(),
            status: BillStatus::Refused,
            comment_admin: Some("en fait non".to_string()),
        },
        BillRecord {
            id: Some("UIUZtnPQvnbFnB0ozvJh".to_string()),
            email: "a@a".to_string(),
            expense_type: ExpenseType::OnlineServices,
            name: "test3".to_string(),
            amount: 300.0,
            date: "2002-02-02".to_string(),
            vat: "60".to_string(),
            pct: 20.0,
            commentary: String::new(),
            file_url: "https://test.storage.tld/v0/b/billable.appspot.com/o/justificatifs%2F3.jpg".to_string(),
            file_name: "facture-client-php-exportee-dans-document-pdf-enregistre-sur-disque-dur.png".to_string(),
            status: BillStatus::Accepted,
            comment_admin: Some("bon bah d'accord".to_string()),
        },
        BillRecord {
            id: Some("qcCK3SzECmaZAGRrHjaC".to_string()),
            email: "a@a".to_string(),
            expense_type: ExpenseType::RestaurantsAndBars,
            name: "test2".to_string(),
            amount: 200.0,
            date: "2001-01-01".to_string(),
            vat: "40".to_string(),
            pct: 20.0,
            commentary: "test2".to_string(),
            file_url: "https://test.storage.tld/v0/b/billable.appspot.com/o/justificatifs%2F2.jpg".to_string(),
            file_name: "preview-facture-free-201801-pdf-1.jpg".to_string(),
            status: BillStatus::Refused,
            comment_admin: Some("pas la bonne facture".to_string()),
        },
    ]
}
