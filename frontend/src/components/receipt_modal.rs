use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct ReceiptModalProps {
    /// Receipt to show; the modal is hidden when `None`
    pub image_url: Option<String>,
    pub on_close: Callback<()>,
}

#[function_component(ReceiptModal)]
pub fn receipt_modal(props: &ReceiptModalProps) -> Html {
    let Some(image_url) = props.image_url.clone() else {
        return html! {};
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal show" id="modaleFile" role="dialog" onclick={on_modal_click}>
                <div class="modal-dialog modal-dialog-centered modal-lg">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{"Justificatif"}</h5>
                            <button type="button" class="close" aria-label="Close" onclick={on_close_click}>
                                {"×"}
                            </button>
                        </div>
                        <div class="modal-body">
                            <div class="bill-proof-container">
                                <img width="100%" src={image_url} alt="Bill" />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
