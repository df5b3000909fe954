use yew::prelude::*;

use crate::components::icons::{contact_icon, social_icon, social_label};
use crate::content::{ContactDetail, ContactKind, ContactSection};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub contact: ContactSection,
}

fn detail_label(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => "Email",
        ContactKind::Phone => "Phone",
        ContactKind::Address => "Address",
    }
}

fn detail(detail: &ContactDetail) -> Html {
    html! {
        <div class="contact-detail">
            { contact_icon(detail.kind) }
            <div>
                <div class="contact-detail-label">{ detail_label(detail.kind) }</div>
                <div class="contact-detail-value">{ &detail.value }</div>
            </div>
        </div>
    }
}

/// Contact details plus a form that is not connected to anything yet.
#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let contact = &props.contact;

    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        log::info!("contact form submitted, but no endpoint is configured");
    });

    html! {
        <section id="contact" class="section section-dark">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{ &contact.heading }</h2>
                    <p>{ &contact.intro }</p>
                </div>
                <div class="two-column">
                    <div>
                        <h3 class="contact-pitch">{ &contact.pitch }</h3>
                        <div class="contact-details">
                            { for contact.details.iter().map(detail) }
                        </div>
                        <div class="social-links">
                            { for contact.socials.iter().map(|link| html! {
                                <a href={link.url.clone()} class="social-link" aria-label={social_label(link.network)}>
                                    { social_icon(link.network) }
                                </a>
                            }) }
                        </div>
                    </div>
                    <form class="contact-form" {onsubmit}>
                        <div class="form-row">
                            <label>
                                {"First Name"}
                                <input type="text" placeholder="John" />
                            </label>
                            <label>
                                {"Last Name"}
                                <input type="text" placeholder="Doe" />
                            </label>
                        </div>
                        <label>
                            {"Email"}
                            <input type="email" placeholder="john@company.com" />
                        </label>
                        <label>
                            {"Company"}
                            <input type="text" placeholder="Your Company" />
                        </label>
                        <label>
                            {"Message"}
                            <textarea rows="4" placeholder={contact.form.message_placeholder.clone()}></textarea>
                        </label>
                        <button type="submit" class="form-submit">{ &contact.form.submit }</button>
                    </form>
                </div>
            </div>
        </section>
    }
}
