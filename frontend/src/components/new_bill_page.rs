use yew::prelude::*;
use shared::Route;

use super::forms::NewBillForm;
use crate::hooks::use_new_bill::use_new_bill;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct NewBillPageProps {
    pub api_client: ApiClient,
    pub on_navigate: Callback<Route>,
}

#[function_component(NewBillPage)]
pub fn new_bill_page(props: &NewBillPageProps) -> Html {
    let new_bill = use_new_bill(&props.api_client, &props.on_navigate);

    html! {
        <div class="content">
            <NewBillForm
                uploading={new_bill.state.uploading}
                staged_file_name={new_bill.state.staged_file_name.clone()}
                form_error={new_bill.state.form_error.clone()}
                on_file_change={new_bill.actions.on_file_change.clone()}
                on_submit={new_bill.actions.on_submit.clone()}
            />
        </div>
    }
}
