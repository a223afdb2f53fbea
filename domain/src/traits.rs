//! # Capability Traits
//!
//! The controllers never touch browser globals. Everything they need from the
//! page (persistence, navigation, dialogs, the current user) is handed to them
//! through the traits below, so the same code runs in the browser and in
//! native unit tests.

use anyhow::Result;
use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use shared::{BillRecord, Identity, Route, UploadResult};

/// A file picked in a file input
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// One field of a multipart body
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file: SelectedFile },
}

/// A multipart/form-data body, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(FormPart::Text {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn file(mut self, name: &str, file: SelectedFile) -> Self {
        self.parts.push(FormPart::File {
            name: name.to_string(),
            file,
        });
        self
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Value of the first text field with the given name
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            FormPart::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// First file field with the given name
    pub fn file_value(&self, name: &str) -> Option<&SelectedFile> {
        self.parts.iter().find_map(|part| match part {
            FormPart::File { name: n, file } if n == name => Some(file),
            _ => None,
        })
    }
}

/// Transport flags attached to a store request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    /// Leave the Content-Type header to the transport (multipart boundary)
    pub no_content_type: bool,
}

/// Body of the receipt upload that creates a draft bill
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBillInput {
    pub data: MultipartForm,
    pub headers: RequestHeaders,
}

/// Update of a bill by id, with the record serialized as JSON
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBillInput {
    pub data: String,
    pub selector: String,
}

/// Persistence of the "bills" collection
#[async_trait(?Send)]
pub trait Store {
    /// List every bill of the current user, newest first
    async fn list(&self) -> Result<Vec<BillRecord>>;

    /// Upload a receipt, creating a draft bill
    async fn create(&self, input: CreateBillInput) -> Result<UploadResult>;

    /// Replace the bill identified by `input.selector`
    async fn update(&self, input: UpdateBillInput) -> Result<BillRecord>;
}

/// Switches the page shell to another view
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Modal showing a receipt image
pub trait Dialog {
    fn open(&self, image_url: &str);
}

/// Blocking message box
pub trait Alert {
    fn alert(&self, message: &str);
}

/// Source of the connected user
pub trait IdentityProvider {
    fn current_user(&self) -> Option<Identity>;
}

/// The receipt file input of the new bill form
pub trait FileInput {
    fn selected_file(&self) -> Option<SelectedFile>;

    /// Reset the input value to the empty string
    fn clear(&self);
}

/// Runs a task on the event loop without waiting for it
pub trait TaskSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}
