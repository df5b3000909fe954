use yew::prelude::*;

use crate::content::{ContactKind, Icon, Social};

fn icon_class(icon: Icon) -> &'static str {
    match icon {
        Icon::Globe => "fa-globe",
        Icon::Shield => "fa-shield-halved",
        Icon::Zap => "fa-bolt",
        Icon::Users => "fa-users",
        Icon::Scale => "fa-scale-balanced",
        Icon::Search => "fa-magnifying-glass",
        Icon::Brain => "fa-brain",
        Icon::Gavel => "fa-gavel",
        Icon::FileText => "fa-file-lines",
    }
}

pub fn icon(icon: Icon, extra: &'static str) -> Html {
    html! { <i class={classes!("fas", icon_class(icon), extra)}></i> }
}

pub fn contact_icon(kind: ContactKind) -> Html {
    let class = match kind {
        ContactKind::Email => "fa-envelope",
        ContactKind::Phone => "fa-phone",
        ContactKind::Address => "fa-location-dot",
    };
    html! { <i class={classes!("fas", class, "contact-icon")}></i> }
}

pub fn social_icon(network: Social) -> Html {
    let class = match network {
        Social::Linkedin => "fa-linkedin",
        Social::Twitter => "fa-x-twitter",
        Social::Github => "fa-github",
    };
    html! { <i class={classes!("fab", class)}></i> }
}

pub fn social_label(network: Social) -> &'static str {
    match network {
        Social::Linkedin => "LinkedIn",
        Social::Twitter => "Twitter",
        Social::Github => "GitHub",
    }
}
