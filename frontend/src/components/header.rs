use yew::prelude::*;
use shared::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_route: Route,
    pub on_navigate: Callback<Route>,
}

/// Vertical navigation of the employee pages
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let icon_class = |route: Route| {
        if props.active_route == route {
            "layout-icon active-icon"
        } else {
            "layout-icon"
        }
    };

    let go_to = |route: Route| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(route))
    };

    html! {
        <header class="vertical-navbar">
            <div class="layout-title">{"Billed"}</div>
            <div id="layout-icon1" data-testid="icon-window" class={icon_class(Route::Bills)} onclick={go_to(Route::Bills)}>
                {"🗂"}
            </div>
            <div id="layout-icon2" data-testid="icon-mail" class={icon_class(Route::NewBill)} onclick={go_to(Route::NewBill)}>
                {"✉"}
            </div>
            <div id="layout-disconnect" class="layout-icon" onclick={go_to(Route::Login)}>
                {"⏻"}
            </div>
        </header>
    }
}
