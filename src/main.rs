fn main() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        gloo_console::log!(format!("logger already installed: {e}"));
    }
    yew::Renderer::<portfolio::App>::new().render();
}
