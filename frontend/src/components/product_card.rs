use yew::prelude::*;

use crate::components::icons::icon;
use crate::content::ProductCard as ProductCardContent;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub card: ProductCardContent,
    /// Position in the grid; staggers the entrance animation.
    pub index: usize,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let card = &props.card;
    let delay = props.index as f64 * 0.2;

    html! {
        <div class="product-card" style={format!("animation-delay: {delay:.1}s;")}>
            <div class="product-icon">{ icon(card.icon, "product-icon-glyph") }</div>
            <h3>{ &card.title }</h3>
            <p class="product-description">{ &card.description }</p>
            <ul class="product-features">
                { for card.features.iter().enumerate().map(|(i, feature)| html! {
                    <li style={format!("animation-delay: {:.1}s;", delay + i as f64 * 0.1)}>
                        <span class="feature-dot"></span>
                        { feature }
                    </li>
                }) }
            </ul>
            <button class="product-cta">
                <span>{ &card.cta }</span>
            </button>
        </div>
    }
}
