use std::rc::Rc;
use yew::prelude::*;

use crate::components::icons::icon;
use crate::content::Icon;
use crate::drivers::playback::{EntryStatus, Playback, PlaybackFrame, PlaybackTimings, Role, ScriptEntry};
use crate::drivers::schedule::BrowserScheduler;

#[derive(Properties, PartialEq)]
pub struct ChatDemoProps {
    pub title: String,
    pub cta: String,
    pub script: Vec<ScriptEntry>,
    pub timings: PlaybackTimings,
}

/// Floating chat window replaying a canned conversation on a loop.
#[function_component(ChatDemo)]
pub fn chat_demo(props: &ChatDemoProps) -> Html {
    let frame = use_state_eq(PlaybackFrame::default);

    {
        let frame = frame.clone();
        use_effect_with_deps(
            move |(len, timings)| {
                frame.set(PlaybackFrame::default());
                let playback = Playback::start(Rc::new(BrowserScheduler), *len, *timings, move |f| {
                    frame.set(f)
                });
                move || drop(playback)
            },
            (props.script.len(), props.timings),
        );
    }

    if props.script.is_empty() {
        return html! {};
    }

    let messages = props.script[frame.visible(props.script.len())]
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let side = match entry.role {
                Role::User => "from-user",
                Role::Assistant => "from-assistant",
            };
            let body = if entry.status == Some(EntryStatus::Pending) {
                html! {
                    <div class="pending">
                        <span class="spin">{ icon(Icon::Search, "") }</span>
                        <span>{ &entry.text }</span>
                    </div>
                }
            } else {
                html! { <span class="fade-in">{ &entry.text }</span> }
            };
            html! {
                <div key={index.to_string()} class={classes!("chat-row", side)}>
                    <div class="chat-bubble">{ body }</div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <aside class="chat-demo">
            <div class="chat-window">
                <div class="chat-header">
                    <div class="chat-avatar">{ icon(Icon::Brain, "") }</div>
                    <span>{ &props.title }</span>
                </div>
                <div class="chat-messages">
                    { messages }
                    if frame.advancing {
                        <div class="chat-row from-assistant">
                            <div class="chat-bubble typing">
                                <span class="dot"></span>
                                <span class="dot"></span>
                                <span class="dot"></span>
                            </div>
                        </div>
                    }
                </div>
                <button class="chat-cta">{ &props.cta }</button>
            </div>
        </aside>
    }
}
