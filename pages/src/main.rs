use components::seq_board::SeqBoard;
use yew::prelude::*;

/// shown until `/seq` answers
const INITIAL_SEQ: &str = "【--】";

#[function_component(App)]
fn app() -> Html {
    html! {
        <SeqBoard initial={INITIAL_SEQ} />
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::debug!("seq board start");
    yew::Renderer::<App>::new().render();
}
