use yew::prelude::*;

use crate::components::logo::Logo;
use crate::content::Footer as FooterContent;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: String,
    pub footer: FooterContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let footer = &props.footer;
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">
                        <Logo size={26} color="white" />
                        <span class="brand-name">{ &props.brand }</span>
                    </div>
                    <p class="footer-blurb">{ &footer.blurb }</p>
                </div>
                { for footer.columns.iter().map(|column| html! {
                    <div key={column.title.clone()}>
                        <h4>{ &column.title }</h4>
                        <ul>
                            { for column.links.iter().map(|link| html! {
                                <li><a href="#">{ link }</a></li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
            <div class="footer-bottom">
                <p>{ &footer.copyright }</p>
            </div>
        </footer>
    }
}
