use yew::prelude::*;
use shared::DisplayBill;

#[derive(Properties, PartialEq)]
pub struct BillsTableProps {
    pub bills: Vec<DisplayBill>,
    pub loading: bool,
    pub on_icon_eye: Callback<MouseEvent>,
}

#[function_component(BillsTable)]
pub fn bills_table(props: &BillsTableProps) -> Html {
    if props.loading {
        return html! { <div class="loading" data-testid="loading">{"Loading..."}</div> };
    }

    html! {
        <div class="table-container">
            <table id="example" class="table table-striped" style="width:100%">
                <thead>
                    <tr>
                        <th>{"Type"}</th>
                        <th>{"Nom"}</th>
                        <th>{"Date"}</th>
                        <th>{"Montant"}</th>
                        <th>{"Statut"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody data-testid="tbody">
                    {for props.bills.iter().map(|bill| {
                        html! {
                            <tr>
                                <td>{bill.expense_type.label()}</td>
                                <td>{&bill.name}</td>
                                <td>{&bill.date}</td>
                                <td>{format!("{} €", bill.amount)}</td>
                                <td>{&bill.status}</td>
                                <td>
                                    <div class="icon-actions">
                                        <div
                                            id="eye"
                                            data-testid="icon-eye"
                                            data-bill-url={bill.file_url.clone()}
                                            onclick={props.on_icon_eye.clone()}
                                        >
                                            {"👁"}
                                        </div>
                                    </div>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
