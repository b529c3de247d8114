use frontend::App;
use yew::Renderer;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::debug!("Starting auth client");

    Renderer::<App>::new().render();
}
