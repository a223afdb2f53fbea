use std::rc::Rc;

use domain::{FileInput, NewBillError, NewBillForm, NewBillService, SelectedFile};
use gloo::file::futures::read_as_bytes;
use log::{debug, error};
use shared::Route;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::browser::{CallbackNavigator, LocalSpawner, LocalStorageIdentity, ReceiptInput, WindowAlert};

#[derive(Clone, PartialEq)]
pub struct NewBillState {
    pub uploading: bool,
    /// Name of the receipt uploaded for this bill
    pub staged_file_name: Option<String>,
    pub form_error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseNewBillActions {
    pub on_file_change: Callback<Event>,
    pub on_submit: Callback<SubmitEvent>,
}

pub struct UseNewBillResult {
    pub state: NewBillState,
    pub actions: UseNewBillActions,
}

#[hook]
pub fn use_new_bill(api_client: &ApiClient, on_navigate: &Callback<Route>) -> UseNewBillResult {
    let uploading = use_state(|| false);
    let staged_file_name = use_state(|| None::<String>);
    let form_error = use_state(|| None::<String>);

    let service = {
        let api_client = api_client.clone();
        let on_navigate = on_navigate.clone();

        use_memo((), move |_| {
            NewBillService::new(
                Rc::new(api_client),
                Rc::new(CallbackNavigator(on_navigate)),
                Rc::new(WindowAlert),
                Rc::new(LocalSpawner),
                &LocalStorageIdentity,
            )
        })
    };

    let on_file_change = {
        let service = service.clone();
        let uploading = uploading.clone();
        let staged_file_name = staged_file_name.clone();
        let form_error = form_error.clone();

        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(picked) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            let service = service.clone();
            let uploading = uploading.clone();
            let staged_file_name = staged_file_name.clone();
            let form_error = form_error.clone();

            let file = gloo::file::File::from(picked);
            let unread = ReceiptInput::new(input.clone(), None);
            if service.check_receipt_name(&file.name(), &unread).is_err() {
                return;
            }

            spawn_local(async move {
                uploading.set(true);
                form_error.set(None);

                let selected = match read_as_bytes(&file).await {
                    Ok(bytes) => SelectedFile {
                        name: file.name(),
                        mime_type: file.raw_mime_type(),
                        bytes,
                    },
                    Err(e) => {
                        error!("Failed to read receipt {}: {}", file.name(), e);
                        unread.clear();
                        form_error.set(Some(format!("Impossible de lire le fichier {}", file.name())));
                        uploading.set(false);
                        return;
                    }
                };

                let receipt = ReceiptInput::new(input, Some(selected));
                match service.handle_change_file(&receipt).await {
                    Ok(staging) => staged_file_name.set(Some(staging.file_name)),
                    Err(e) => debug!("Receipt not staged: {}", e),
                }

                uploading.set(false);
            });
        })
    };

    let on_submit = {
        let service = service.clone();
        let form_error = form_error.clone();

        use_callback((), move |e: SubmitEvent, _| {
            e.prevent_default();

            let form: HtmlFormElement = e.target_unchecked_into();
            let form = match FormData::new_with_form(&form) {
                Ok(data) => read_form(&data),
                Err(e) => {
                    error!("Failed to read new bill form: {:?}", e);
                    return;
                }
            };

            match service.handle_submit(form) {
                Ok(_) => form_error.set(None),
                Err(e @ NewBillError::NoUploadStaged) => form_error.set(Some(e.to_string())),
                Err(e) => error!("Failed to submit bill: {}", e),
            }
        })
    };

    UseNewBillResult {
        state: NewBillState {
            uploading: *uploading,
            staged_file_name: (*staged_file_name).clone(),
            form_error: (*form_error).clone(),
        },
        actions: UseNewBillActions {
            on_file_change,
            on_submit,
        },
    }
}

fn read_form(data: &FormData) -> NewBillForm {
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();

    NewBillForm {
        expense_type: field("expense-type"),
        name: field("expense-name"),
        amount: field("amount"),
        date: field("datepicker"),
        vat: field("vat"),
        pct: field("pct"),
        commentary: field("commentary"),
    }
}
