use log::{error, info, warn};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use thiserror::Error;

use crate::traits::{
    Alert, CreateBillInput, FileInput, IdentityProvider, MultipartForm, Navigator, RequestHeaders, Store,
    TaskSpawner, UpdateBillInput,
};
use shared::{
    validate_receipt_file_name, BillRecord, BillStatus, ExpenseType, FileValidationError, Route,
    INVALID_RECEIPT_MESSAGE,
};

/// Percentage applied when the form leaves it empty
pub const DEFAULT_PCT: f64 = 20.0;

#[derive(Debug, Error)]
pub enum NewBillError {
    #[error("no file selected")]
    NoFileSelected,
    #[error(transparent)]
    InvalidExtension(#[from] FileValidationError),
    #[error("no receipt has been uploaded for this bill")]
    NoUploadStaged,
    #[error("failed to serialize bill: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Store(anyhow::Error),
}

/// Identifiers returned by the receipt upload, kept until the form is submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadStaging {
    pub bill_id: String,
    pub file_url: String,
    pub file_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewBillState {
    Idle,
    FileStaged,
    Submitted,
}

/// What a submit does when no receipt upload succeeded beforehand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPolicy {
    /// Refuse the submit: nothing is persisted, no navigation
    #[default]
    RequireUpload,
    /// Persist the bill with empty file fields
    AllowEmptyFile,
}

/// Raw values of the new bill form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

/// Controller of the new bill page. One instance per visit of the page.
pub struct NewBillService {
    store: Rc<dyn Store>,
    navigator: Rc<dyn Navigator>,
    alert: Rc<dyn Alert>,
    spawner: Rc<dyn TaskSpawner>,
    email: String,
    policy: SubmitPolicy,
    staging: RefCell<Option<UploadStaging>>,
    state: Cell<NewBillState>,
}

impl NewBillService {
    pub fn new(
        store: Rc<dyn Store>,
        navigator: Rc<dyn Navigator>,
        alert: Rc<dyn Alert>,
        spawner: Rc<dyn TaskSpawner>,
        identity: &dyn IdentityProvider,
    ) -> Self {
        let email = match identity.current_user() {
            Some(user) => user.email,
            None => {
                warn!("No connected user found, bills will be sent without email");
                String::new()
            }
        };

        Self {
            store,
            navigator,
            alert,
            spawner,
            email,
            policy: SubmitPolicy::default(),
            staging: RefCell::new(None),
            state: Cell::new(NewBillState::Idle),
        }
    }

    pub fn with_policy(mut self, policy: SubmitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> NewBillState {
        self.state.get()
    }

    pub fn staging(&self) -> Option<UploadStaging> {
        self.staging.borrow().clone()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Refuse a receipt by its name alone, before its content is read.
    ///
    /// A refused extension alerts the employee and clears the input.
    pub fn check_receipt_name(&self, file_name: &str, input: &dyn FileInput) -> Result<(), NewBillError> {
        validate_receipt_file_name(file_name).map_err(|e| {
            warn!("Receipt refused: {}", e);
            self.alert.alert(INVALID_RECEIPT_MESSAGE);
            input.clear();
            NewBillError::from(e)
        })
    }

    /// Validate the picked receipt and upload it right away.
    ///
    /// A refused extension alerts the employee and clears the input without
    /// any network call. Upload failures are only logged; the staging of a
    /// previous successful upload is left untouched.
    pub async fn handle_change_file(&self, input: &dyn FileInput) -> Result<UploadStaging, NewBillError> {
        let file = input.selected_file().ok_or_else(|| {
            warn!("Receipt input changed without a readable file");
            NewBillError::NoFileSelected
        })?;

        self.check_receipt_name(&file.name, input)?;

        let file_name = file.name.clone();
        let data = MultipartForm::new().file("file", file).text("email", &self.email);

        info!("Uploading receipt {}", file_name);
        let result = self
            .store
            .create(CreateBillInput {
                data,
                headers: RequestHeaders { no_content_type: true },
            })
            .await
            .map_err(|e| {
                error!("Failed to upload receipt {}: {}", file_name, e);
                NewBillError::Store(e)
            })?;

        let staging = UploadStaging {
            bill_id: result.key,
            file_url: result.file_url,
            file_name,
        };
        info!("Receipt staged for bill {}", staging.bill_id);

        *self.staging.borrow_mut() = Some(staging.clone());
        self.state.set(NewBillState::FileStaged);
        Ok(staging)
    }

    /// Build the bill from the form, send it, and go back to the bills page.
    ///
    /// The update runs in the background: navigation does not wait for it.
    pub fn handle_submit(&self, form: NewBillForm) -> Result<BillRecord, NewBillError> {
        let staging = match (self.staging(), self.policy) {
            (Some(staging), _) => staging,
            (None, SubmitPolicy::AllowEmptyFile) => {
                warn!("Submitting bill without receipt");
                UploadStaging::default()
            }
            (None, SubmitPolicy::RequireUpload) => {
                warn!("Submit refused, no receipt uploaded");
                return Err(NewBillError::NoUploadStaged);
            }
        };

        let record = BillRecord {
            id: None,
            email: self.email.clone(),
            expense_type: ExpenseType::from(form.expense_type),
            name: form.name,
            amount: parse_number(&form.amount).unwrap_or(0.0),
            date: form.date,
            vat: form.vat,
            pct: parse_number(&form.pct).unwrap_or(DEFAULT_PCT),
            commentary: form.commentary,
            file_url: staging.file_url,
            file_name: staging.file_name,
            status: BillStatus::Pending,
            comment_admin: None,
        };

        let store = self.store.clone();
        let task_record = record.clone();
        let bill_id = staging.bill_id;
        self.spawner.spawn(Box::pin(async move {
            let _ = update_bill(store.as_ref(), &task_record, &bill_id).await;
        }));

        self.state.set(NewBillState::Submitted);
        self.navigator.navigate(Route::Bills);
        Ok(record)
    }

    /// Send a bill to the store under the staged bill id
    pub async fn update_bill(&self, record: &BillRecord) -> Result<BillRecord, NewBillError> {
        let bill_id = self.staging().map(|staging| staging.bill_id).unwrap_or_default();
        update_bill(self.store.as_ref(), record, &bill_id).await
    }
}

async fn update_bill(store: &dyn Store, record: &BillRecord, bill_id: &str) -> Result<BillRecord, NewBillError> {
    let data = serde_json::to_string(record).map_err(|e| {
        error!("Failed to serialize bill {}: {}", bill_id, e);
        e
    })?;

    match store
        .update(UpdateBillInput {
            data,
            selector: bill_id.to_string(),
        })
        .await
    {
        Ok(updated) => {
            info!("Bill {} updated", bill_id);
            Ok(updated)
        }
        Err(e) => {
            error!("Failed to update bill {}: {}", bill_id, e);
            Err(NewBillError::Store(e))
        }
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
