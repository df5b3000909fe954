use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or(24)]
    pub size: u32,
    #[prop_or(String::from("black"))]
    pub color: String,
}

/// Four-pointed star mark used in the nav bar and footer.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            width={size.clone()}
            height={size}
            viewBox="0 0 512 512"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path
                d="M256 48C256 48 176 256 48 256C176 256 256 464 256 464C256 464 336 256 464 256C336 256 256 48 256 48Z"
                fill={props.color.clone()}
            />
        </svg>
    }
}
