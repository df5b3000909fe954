//! Static sections with no interactive state.

use yew::prelude::*;

use crate::components::icons::icon;
use crate::components::product_card::ProductCard;
use crate::content::{AboutSection, Icon, ProductsSection, ServicesSection};

#[derive(Properties, PartialEq)]
pub struct ProductsProps {
    pub products: ProductsSection,
}

#[function_component(Products)]
pub fn products(props: &ProductsProps) -> Html {
    let products = &props.products;
    html! {
        <section id="products" class="section section-light">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{ &products.heading }</h2>
                    <p>{ &products.intro }</p>
                </div>
                <div class="product-grid">
                    { for products.cards.iter().enumerate().map(|(index, card)| html! {
                        <ProductCard key={card.title.clone()} card={card.clone()} {index} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: ServicesSection,
    pub on_callout: Callback<MouseEvent>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let services = &props.services;
    let callout = &services.callout;
    html! {
        <section id="services" class="section section-dark">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{ &services.heading }</h2>
                    <p>{ &services.intro }</p>
                </div>
                <div class="two-column">
                    <div class="service-list">
                        { for services.items.iter().map(|item| html! {
                            <div class="service-item" key={item.title.clone()}>
                                <div class="service-check"><i class="fas fa-check"></i></div>
                                <div>
                                    <h3>{ &item.title }</h3>
                                    <p>{ &item.description }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="callout callout-dark">
                        <h3>{ &callout.title }</h3>
                        <p>{ &callout.body }</p>
                        if let Some(cta) = &callout.cta {
                            <button class="callout-cta" onclick={props.on_callout.clone()}>{ cta }</button>
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub about: AboutSection,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let about = &props.about;
    html! {
        <section id="about" class="section section-light">
            <div class="section-inner two-column">
                <div>
                    <h2 class="about-heading">{ &about.heading }</h2>
                    <p class="about-body">{ &about.body }</p>
                    <div class="stats-grid">
                        { for about.stats.iter().map(|stat| html! {
                            <div class="stat" key={stat.label.clone()}>
                                <div class="stat-value">{ &stat.value }</div>
                                <div class="stat-label">{ &stat.label }</div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="callout callout-gradient">
                    <h3>{ &about.mission.title }</h3>
                    <p>{ &about.mission.body }</p>
                    <div class="team-badge">
                        { icon(Icon::Users, "team-icon") }
                        <div>
                            <div class="team-title">{ &about.team.title }</div>
                            <div class="team-detail">{ &about.team.detail }</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
