use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorPageProps {
    pub message: String,
}

#[function_component(ErrorPage)]
pub fn error_page(props: &ErrorPageProps) -> Html {
    html! {
        <div class="error-page" data-testid="error-message">
            <h2>{"Erreur"}</h2>
            <p>{&props.message}</p>
        </div>
    }
}
