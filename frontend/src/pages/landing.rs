use yew::prelude::*;

use crate::components::chat_demo::ChatDemo;
use crate::components::contact::Contact;
use crate::components::faq_accordion::FaqAccordion;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::sections::{About, Products, Services};
use crate::components::testimonial_carousel::TestimonialCarousel;
use crate::config::{SiteVariant, Timings};
use crate::content::SiteContent;
use crate::utils::dom;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub variant: SiteVariant,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = use_memo(
        |variant| {
            SiteContent::load(*variant)
                .map_err(|e| log::error!("{e}"))
                .ok()
        },
        props.variant,
    );
    let timings = Timings::default();

    {
        let title = content.as_ref().as_ref().map(|c| c.brand.name.clone());
        use_effect_with_deps(
            move |_| {
                dom::scroll_to_top();
                if let (Some(title), Some(document)) =
                    (title, web_sys::window().and_then(|w| w.document()))
                {
                    document.set_title(&title);
                }
                || ()
            },
            props.variant,
        );
    }

    let Some(content) = content.as_ref().as_ref() else {
        return html! {
            <div class="load-error">
                <p>{"This page could not be loaded. Please try again later."}</p>
            </div>
        };
    };

    let on_callout = Callback::from(|_: MouseEvent| {
        dom::scroll_to_section("contact");
    });

    html! {
        <div class="landing">
            <ScrollProgress />
            <Navbar
                brand={content.brand.name.clone()}
                get_started={content.brand.get_started.clone()}
                get_started_target={content.brand.get_started_target.clone()}
                sections={content.nav.clone()}
                offset_px={timings.nav_offset_px}
            />
            <Hero hero={content.hero.clone()} cta_target="products" />
            <Products products={content.products.clone()} />
            <Services services={content.services.clone()} {on_callout} />
            <About about={content.about.clone()} />
            <TestimonialCarousel
                heading={content.testimonials.heading.clone()}
                intro={content.testimonials.intro.clone()}
                items={content.testimonials.items.clone()}
                interval_ms={timings.carousel_interval_ms}
            />
            <FaqAccordion
                heading={content.faq.heading.clone()}
                intro={content.faq.intro.clone()}
                items={content.faq.items.clone()}
            />
            <Contact contact={content.contact.clone()} />
            <Footer brand={content.brand.name.clone()} footer={content.footer.clone()} />
            <ChatDemo
                title={content.chat.title.clone()}
                cta={content.chat.cta.clone()}
                script={content.chat.script.clone()}
                timings={timings.playback}
            />
        </div>
    }
}
