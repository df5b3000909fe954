use yew::prelude::*;

use crate::components::animated_background::AnimatedBackground;
use crate::content::Hero as HeroContent;
use crate::utils::dom;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: HeroContent,
    /// Section the call to action scrolls to.
    pub cta_target: String,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero = &props.hero;
    let on_cta = {
        let target = props.cta_target.clone();
        Callback::from(move |_: MouseEvent| {
            dom::scroll_to_section(&target);
        })
    };

    html! {
        <section id="home" class="hero">
            <AnimatedBackground />
            <div class="hero-content">
                <h1 class="hero-title">
                    <span class="hero-title-lead">{ &hero.headline_lead }</span>
                    <br />
                    <span class="hero-title-emphasis">{ &hero.headline_emphasis }</span>
                </h1>
                <p class="hero-subtitle">{ &hero.subtitle }</p>
                <button class="hero-cta" onclick={on_cta}>
                    { &hero.cta }
                    <i class="fas fa-arrow-right"></i>
                </button>
            </div>
            <div class="scroll-indicator">
                <i class="fas fa-chevron-down"></i>
            </div>
        </section>
    }
}
