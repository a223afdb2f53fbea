use yew::prelude::*;
use shared::ExpenseType;

#[derive(Properties, PartialEq)]
pub struct NewBillFormProps {
    // Form state
    pub uploading: bool,
    pub staged_file_name: Option<String>,
    pub form_error: Option<String>,

    // Event handlers
    pub on_file_change: Callback<Event>,
    pub on_submit: Callback<SubmitEvent>,
}

#[function_component(NewBillForm)]
pub fn new_bill_form(props: &NewBillFormProps) -> Html {
    html! {
        <section class="new-bill-section">
            <h2 class="content-title">{"Envoyer une note de frais"}</h2>

            {if let Some(error) = props.form_error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            <form data-testid="form-new-bill" onsubmit={props.on_submit.clone()}>
                <div class="row">
                    <div class="col-md-6">
                        <div class="form-group">
                            <label for="expense-type">{"Type de dépense"}</label>
                            <select required=true id="expense-type" name="expense-type" data-testid="expense-type">
                                {for ExpenseType::ALL.iter().map(|expense_type| {
                                    html! { <option value={expense_type.label().to_string()}>{expense_type.label()}</option> }
                                })}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="expense-name">{"Nom de la dépense"}</label>
                            <input type="text" id="expense-name" name="expense-name" data-testid="expense-name"
                                placeholder="Vol Paris Londres" />
                        </div>
                        <div class="form-group">
                            <label for="datepicker">{"Date"}</label>
                            <input required=true type="date" id="datepicker" name="datepicker" data-testid="datepicker" />
                        </div>
                        <div class="form-group">
                            <label for="amount">{"Montant TTC"}</label>
                            <input required=true type="number" id="amount" name="amount" data-testid="amount"
                                placeholder="348" />
                        </div>
                        <div class="form-group">
                            <label for="vat">{"TVA"}</label>
                            <div class="input-group">
                                <input type="number" id="vat" name="vat" data-testid="vat" placeholder="70" />
                                <input required=true type="number" id="pct" name="pct" data-testid="pct" placeholder="20" />
                                <span class="input-group-text">{"%"}</span>
                            </div>
                        </div>
                    </div>
                    <div class="col-md-6">
                        <div class="form-group">
                            <label for="commentary">{"Commentaire"}</label>
                            <textarea id="commentary" name="commentary" data-testid="commentary" rows="3" />
                        </div>
                        <div class="form-group">
                            <label for="file">{"Justificatif"}</label>
                            <input
                                required=true
                                type="file"
                                id="file"
                                data-testid="file"
                                accept=".jpg,.jpeg,.png"
                                onchange={props.on_file_change.clone()}
                                disabled={props.uploading}
                            />
                            {if props.uploading {
                                html! { <small class="form-text">{"Envoi du justificatif..."}</small> }
                            } else if let Some(name) = props.staged_file_name.as_ref() {
                                html! { <small class="form-text">{format!("Justificatif envoyé : {}", name)}</small> }
                            } else { html! {} }}
                        </div>
                    </div>
                </div>
                <div class="row">
                    <button type="submit" id="btn-send-bill" class="btn btn-primary" disabled={props.uploading}>
                        {"Envoyer"}
                    </button>
                </div>
            </form>
        </section>
    }
}
