use yew::prelude::*;
use shared::Route;

use super::bills_table::BillsTable;
use super::error_page::ErrorPage;
use super::receipt_modal::ReceiptModal;
use crate::hooks::use_bills::use_bills;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct BillsPageProps {
    pub api_client: ApiClient,
    pub on_navigate: Callback<Route>,
}

#[function_component(BillsPage)]
pub fn bills_page(props: &BillsPageProps) -> Html {
    let bills = use_bills(&props.api_client, &props.on_navigate);

    if let Some(message) = bills.state.error.clone() {
        return html! { <ErrorPage {message} /> };
    }

    html! {
        <div class="content">
            <div class="content-header">
                <div class="content-title">{"Mes notes de frais"}</div>
                <button type="button" data-testid="btn-new-bill" class="btn btn-primary"
                    onclick={bills.actions.on_new_bill.clone()}>
                    {"Nouvelle note de frais"}
                </button>
            </div>
            <BillsTable
                bills={bills.state.bills.clone()}
                loading={bills.state.loading}
                on_icon_eye={bills.actions.on_icon_eye.clone()}
            />
            <ReceiptModal
                image_url={bills.state.receipt_url.clone()}
                on_close={bills.actions.on_close_receipt.clone()}
            />
        </div>
    }
}
