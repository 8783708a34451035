use yew::prelude::*;

use crate::components::film_grain::FilmGrain;
use crate::components::icon::Icon;
use crate::components::reveal::{stagger, Entrance, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::content::ProcessContent;
use crate::reveal::hooks::use_in_view;
use crate::scroll::SectionId;

/// Accordion rule: clicking the open step closes it, any other opens that one.
pub fn toggle_step(expanded: Option<usize>, clicked: usize) -> Option<usize> {
    if expanded == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct ProcessProps {
    pub content: ProcessContent,
}

#[function_component(Process)]
pub fn process(props: &ProcessProps) -> Html {
    let in_view = use_in_view(config::SECTION_THRESHOLD);
    let visible = in_view.visible;
    let expanded = use_state_eq(|| None::<usize>);
    let ProcessContent { heading, expand_label, steps } = &props.content;

    let steps = steps.iter().enumerate().map(|(i, step)| {
        let is_open = *expanded == Some(i);
        let onclick = {
            let expanded = expanded.clone();
            Callback::from(move |_: MouseEvent| expanded.set(toggle_step(*expanded, i)))
        };

        html! {
            <Reveal
                key={step.numeral.clone()}
                {visible}
                entrance={Entrance::RiseShort}
                duration_ms={600}
                delay_ms={stagger(0, i, config::LIST_STAGGER_MS)}
            >
                <div class={classes!("step", is_open.then_some("step--open"))} {onclick}>
                    <div class="step-row">
                        <div class="step-numeral">{ step.numeral.clone() }</div>
                        <Icon kind={step.icon} size={32} class="step-icon" />
                        <div class="step-body">
                            <h3>{ step.title.clone() }</h3>
                            <p class="step-summary">{ step.summary.clone() }</p>
                            if is_open {
                                <div class="step-details">
                                    <p>{ step.details.clone() }</p>
                                </div>
                            }
                        </div>
                    </div>
                    <div class="step-expand">{ expand_label.clone() }</div>
                </div>
            </Reveal>
        }
    });

    html! {
        <section id={SectionId::HowItWorks.as_str()} ref={in_view.node.clone()} class="section section--zinc">
            <div class="section-inner section-inner--slim">
                <SectionHeading heading={heading.clone()} {visible} />
                <div class="steps">{ for steps }</div>
            </div>

            <FilmGrain />

            <style>
                {r#"
                .steps {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .step {
                    position: relative;
                    padding: 2.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.2);
                    cursor: pointer;
                    transition: background 0.3s, border-color 0.3s;
                }
                .step:hover {
                    border-color: rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.03);
                }
                .step--open, .step--open:hover {
                    background: rgba(255, 255, 255, 0.05);
                    border-color: rgba(255, 255, 255, 0.3);
                }
                .step-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 2rem;
                }
                .step-numeral {
                    flex-shrink: 0;
                    width: 4rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.875rem;
                    font-weight: 300;
                    color: rgba(255, 255, 255, 0.4);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    transition: color 0.2s, border-color 0.2s;
                }
                .step:hover .step-numeral { color: rgba(255, 255, 255, 0.6); }
                .step--open .step-numeral, .step--open:hover .step-numeral {
                    color: #fff;
                    border-color: #fff;
                }
                .step-icon {
                    flex-shrink: 0;
                    color: rgba(255, 255, 255, 0.6);
                }
                .step-body { flex: 1; }
                .step-body h3 {
                    font-size: 1.875rem;
                    font-weight: 300;
                    letter-spacing: 0.025em;
                    margin-bottom: 0.75rem;
                }
                .step-summary {
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.6;
                }
                .step-details {
                    margin-top: 1.5rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    animation: fade-in 0.3s ease both;
                }
                .step-details p {
                    color: rgba(255, 255, 255, 0.6);
                    font-weight: 300;
                    line-height: 1.6;
                }
                .step-expand {
                    position: absolute;
                    top: 2.5rem;
                    right: 2.5rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: rgba(255, 255, 255, 0.3);
                    transition: opacity 0.2s;
                }
                .step--open .step-expand { opacity: 0; }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_a_closed_step_opens_it() {
        assert_eq!(toggle_step(None, 2), Some(2));
        assert_eq!(toggle_step(Some(0), 3), Some(3));
    }

    #[test]
    fn clicking_the_open_step_closes_it() {
        assert_eq!(toggle_step(Some(1), 1), None);
    }
}
