use std::rc::Rc;

use domain::BillsService;
use shared::{DisplayBill, Route};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::browser::{CallbackDialog, CallbackNavigator};

#[derive(Clone, PartialEq)]
pub struct BillsState {
    pub bills: Vec<DisplayBill>,
    pub loading: bool,
    /// Message of a failed list request, shown instead of the table
    pub error: Option<String>,
    /// Receipt shown in the modal
    pub receipt_url: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseBillsActions {
    pub on_icon_eye: Callback<MouseEvent>,
    pub on_close_receipt: Callback<()>,
    pub on_new_bill: Callback<MouseEvent>,
}

pub struct UseBillsResult {
    pub state: BillsState,
    pub actions: UseBillsActions,
}

#[hook]
pub fn use_bills(api_client: &ApiClient, on_navigate: &Callback<Route>) -> UseBillsResult {
    let bills = use_state(Vec::<DisplayBill>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let receipt_url = use_state(|| None::<String>);

    let service = {
        let api_client = api_client.clone();
        let on_navigate = on_navigate.clone();
        let receipt_url = receipt_url.clone();

        use_memo((), move |_| {
            let open_receipt = Callback::from(move |url: String| receipt_url.set(Some(url)));
            BillsService::new(
                Rc::new(api_client),
                Rc::new(CallbackNavigator(on_navigate)),
                Rc::new(CallbackDialog(open_receipt)),
            )
        })
    };

    {
        let service = service.clone();
        let bills = bills.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match service.get_bills().await {
                    Ok(data) => bills.set(data),
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_icon_eye = {
        let service = service.clone();
        use_callback((), move |e: MouseEvent, _| {
            let bill_url = e
                .target_dyn_into::<Element>()
                .and_then(|target| target.closest("[data-bill-url]").ok().flatten())
                .and_then(|icon| icon.get_attribute("data-bill-url"))
                .unwrap_or_default();
            service.handle_click_icon_eye(&bill_url);
        })
    };

    let on_close_receipt = {
        let receipt_url = receipt_url.clone();
        use_callback((), move |_: (), _| receipt_url.set(None))
    };

    let on_new_bill = {
        let service = service.clone();
        use_callback((), move |_: MouseEvent, _| service.handle_click_new_bill())
    };

    UseBillsResult {
        state: BillsState {
            bills: (*bills).clone(),
            loading: *loading,
            error: (*error).clone(),
            receipt_url: (*receipt_url).clone(),
        },
        actions: UseBillsActions {
            on_icon_eye,
            on_close_receipt,
            on_new_bill,
        },
    }
}
