use dioxus::prelude::*;
use tracing::error;

#[derive(Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

pub struct Toast {
    pub title: String,
    pub body: String,
    pub flavor: ToastFlavor,
}

#[derive(Clone, Copy, PartialEq)]
pub enum ToastFlavor {
    Success,
    Error,
}

impl ToastFlavor {
    pub fn class(self) -> &'static str {
        match self {
            ToastFlavor::Success => "is-success",
            ToastFlavor::Error => "is-danger",
        }
    }
}

impl ToastManager {
    pub fn with_errors(error_messages: Vec<String>) -> Self {
        let mut manager = ToastManager::default();
        for error_message in error_messages {
            manager.new_error(error_message);
        }
        manager
    }

    pub fn new_error(&mut self, error_message: String) {
        error!("Error occurred: {}", error_message);
        self.toasts.push(Toast {
            title: "Oh no!".to_owned(),
            body: "We're sorry, something unexpected went wrong.".to_owned(),
            flavor: ToastFlavor::Error,
        })
    }

    pub fn new_success(&mut self, body: String) {
        self.toasts.push(Toast {
            title: "Done".to_owned(),
            body,
            flavor: ToastFlavor::Success,
        })
    }

    pub fn toasts(&self) -> std::slice::Iter<'_, Toast> {
        self.toasts.iter()
    }

    pub fn remove_toast(&mut self, idx: usize) {
        self.toasts.remove(idx);
    }
}

pub fn use_toasts_provider(toaster: Signal<ToastManager>) {
    use_context_provider(|| toaster);
}

pub fn use_toasts() -> Signal<ToastManager> {
    use_context::<Signal<ToastManager>>()
}
