use yew::prelude::*;

use crate::config;
use crate::reveal::hooks::{use_count_up, use_in_view};

#[derive(Properties, PartialEq)]
pub struct CountUpNumberProps {
    pub end: u32,
    #[prop_or(config::COUNT_UP_DURATION_MS)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// A number that counts up from zero once half of it has scrolled into view.
#[function_component(CountUpNumber)]
pub fn count_up_number(props: &CountUpNumberProps) -> Html {
    let in_view = use_in_view(config::METRIC_THRESHOLD);
    let count = use_count_up(props.end, props.duration_ms, in_view.visible);

    html! {
        <span ref={in_view.node.clone()} class="count-up">
            { count }{ props.suffix.clone() }
        </span>
    }
}
