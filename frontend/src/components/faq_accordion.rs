use yew::prelude::*;

use crate::content::FaqEntry;
use crate::drivers::toggle::SingleOpen;

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub heading: String,
    pub intro: String,
    pub items: Vec<FaqEntry>,
}

/// Questions expand one at a time; opening one folds the others.
#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let open = use_state_eq(SingleOpen::<u32>::default);

    let items = props
        .items
        .iter()
        .map(|item| {
            let is_open = open.is_open(&item.id);
            let toggle = {
                let open = open.clone();
                let id = item.id;
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    let mut next = (*open).clone();
                    next.activate(id);
                    open.set(next);
                })
            };
            html! {
                <div key={item.id.to_string()} class={classes!("faq-item", is_open.then_some("open"))}>
                    <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                        <span class="question-text">{ &item.question }</span>
                        <span class="toggle-icon">{ if is_open { "\u{2212}" } else { "+" } }</span>
                    </button>
                    <div class="faq-answer">
                        <div class="faq-answer-bubble">{ &item.answer }</div>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id="faq" class="section section-light">
            <div class="section-inner faq-list">
                <div class="section-header">
                    <h2>{ &props.heading }</h2>
                    <p>{ &props.intro }</p>
                </div>
                { items }
            </div>
        </section>
    }
}
