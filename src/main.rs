use atrium_web::view::app::App;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}
