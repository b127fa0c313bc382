use std::rc::Rc;

use dioxus::prelude::*;

use crate::api::ApiClient;

#[derive(Clone)]
struct ApiContext(Rc<ApiClient>);

pub fn use_api_provider() {
    use_context_provider(|| ApiContext(Rc::new(ApiClient::from_env())));
}

pub fn use_api_client() -> Rc<ApiClient> {
    use_context::<ApiContext>().0
}
