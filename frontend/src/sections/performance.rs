use yew::prelude::*;

use crate::components::count_up_number::CountUpNumber;
use crate::components::film_grain::FilmGrain;
use crate::components::reveal::{stagger, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::content::MetricsContent;
use crate::reveal::hooks::use_in_view;
use crate::scroll::SectionId;

#[derive(Properties, PartialEq)]
pub struct PerformanceProps {
    pub content: MetricsContent,
}

/// Studio metrics. The cards reveal with the section; each number runs its
/// own count-up once it is half visible.
#[function_component(Performance)]
pub fn performance(props: &PerformanceProps) -> Html {
    let in_view = use_in_view(config::SECTION_THRESHOLD);
    let visible = in_view.visible;
    let MetricsContent { heading, items } = &props.content;

    html! {
        <section id={SectionId::Performance.as_str()} ref={in_view.node.clone()} class="section section--zinc">
            <div class="section-inner section-inner--narrow">
                <SectionHeading heading={heading.clone()} {visible} />

                <div class="metric-grid">
                    { for items.iter().enumerate().map(|(i, metric)| html! {
                        <Reveal
                            key={metric.label.clone()}
                            {visible}
                            delay_ms={stagger(0, i, config::METRIC_STAGGER_MS)}
                        >
                            <div class="metric">
                                <div class="metric-value">
                                    <CountUpNumber end={metric.value} suffix={metric.suffix.clone()} />
                                </div>
                                <div class="metric-label">{ metric.label.clone() }</div>
                                <p class="metric-description">{ metric.description.clone() }</p>
                                <div class="corner-accent corner-accent--bottom"></div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <FilmGrain />

            <style>
                {r#"
                .metric-grid {
                    display: grid;
                    gap: 3rem;
                }
                .metric {
                    position: relative;
                    padding: 3rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.2);
                    backdrop-filter: blur(4px);
                    transition: border-color 0.3s;
                }
                .metric:hover { border-color: rgba(255, 255, 255, 0.3); }
                .metric:hover .corner-accent { opacity: 1; }
                .metric-value {
                    font-size: 4.5rem;
                    font-weight: 300;
                    letter-spacing: -0.025em;
                    margin-bottom: 1.5rem;
                    font-variant-numeric: tabular-nums;
                }
                .metric-label {
                    font-size: 1.25rem;
                    font-weight: 300;
                    letter-spacing: 0.025em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.8);
                    margin-bottom: 1rem;
                }
                .metric-description {
                    color: rgba(255, 255, 255, 0.5);
                    font-weight: 300;
                    line-height: 1.6;
                }
                @media (min-width: 768px) {
                    .metric-grid { grid-template-columns: repeat(3, 1fr); }
                    .metric-value { font-size: 6rem; }
                }
                "#}
            </style>
        </section>
    }
}
