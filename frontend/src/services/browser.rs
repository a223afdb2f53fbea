//! Browser implementations of the controller capabilities.

use futures::future::LocalBoxFuture;
use gloo::storage::{LocalStorage, Storage};
use log::warn;
use web_sys::HtmlInputElement;
use yew::Callback;

use domain::{Alert, Dialog, FileInput, IdentityProvider, Navigator, SelectedFile, TaskSpawner};
use shared::{Identity, Route};

const USER_KEY: &str = "user";

/// Connected user as stored by the login page
pub struct LocalStorageIdentity;

impl IdentityProvider for LocalStorageIdentity {
    fn current_user(&self) -> Option<Identity> {
        match LocalStorage::get::<Identity>(USER_KEY) {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!("No usable user in local storage: {}", e);
                None
            }
        }
    }
}

/// Navigation handled by the page shell
pub struct CallbackNavigator(pub Callback<Route>);

impl Navigator for CallbackNavigator {
    fn navigate(&self, route: Route) {
        self.0.emit(route);
    }
}

/// Receipt dialog rendered by the bills page
pub struct CallbackDialog(pub Callback<String>);

impl Dialog for CallbackDialog {
    fn open(&self, image_url: &str) {
        self.0.emit(image_url.to_string());
    }
}

pub struct WindowAlert;

impl Alert for WindowAlert {
    fn alert(&self, message: &str) {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            warn!("Could not show alert: {}", message);
        }
    }
}

pub struct LocalSpawner;

impl TaskSpawner for LocalSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

/// The receipt input, with the content of the picked file already read
pub struct ReceiptInput {
    element: HtmlInputElement,
    file: Option<SelectedFile>,
}

impl ReceiptInput {
    pub fn new(element: HtmlInputElement, file: Option<SelectedFile>) -> Self {
        Self { element, file }
    }
}

impl FileInput for ReceiptInput {
    fn selected_file(&self) -> Option<SelectedFile> {
        self.file.clone()
    }

    fn clear(&self) {
        self.element.set_value("");
    }
}
