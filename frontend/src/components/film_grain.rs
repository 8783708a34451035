use yew::prelude::*;

const NOISE: &str = "url(\"data:image/svg+xml,%3Csvg viewBox='0 0 400 400' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noiseFilter'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='3.5' numOctaves='4' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noiseFilter)'/%3E%3C/svg%3E\")";

#[derive(Properties, PartialEq)]
pub struct FilmGrainProps {
    #[prop_or(0.2)]
    pub opacity: f64,
}

#[function_component(FilmGrain)]
pub fn film_grain(props: &FilmGrainProps) -> Html {
    let style = format!("opacity: {}; background-image: {};", props.opacity, NOISE);
    html! { <div class="film-grain" {style}></div> }
}
