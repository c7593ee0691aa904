use button_rain::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
