use crate::app::use_portal;
use gloo_timers::callback::Timeout;
use shared::content::AssistantChat;
use shared::content::assistant::Speaker;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_bool_toggle;
use yew_icons::{Icon, IconId};

enum ChatAction {
    Submit(String),
    Reply,
}

#[derive(Default, PartialEq)]
struct ChatState(AssistantChat);

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut chat = self.0.clone();
        match action {
            ChatAction::Submit(text) => {
                chat.submit(&text);
            }
            ChatAction::Reply => chat.push_reply(),
        }
        Rc::new(Self(chat))
    }
}

/// Floating assistant chat. Every accepted message schedules one simulated
/// reply; a reply that lands after the widget is gone is dropped.
#[function_component(AssistantFab)]
pub fn assistant_fab() -> Html {
    let open = use_bool_toggle(false);
    let chat = use_reducer(ChatState::default);
    let draft = use_state(String::new);
    let delay_ms = use_portal().map_or(1000, |portal| portal.config().assistant_reply_delay_ms);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            open.toggle();
        })
    };

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                draft.set(input.value());
            }
        })
    };

    let on_submit = {
        let chat = chat.clone();
        let draft = draft.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let text = (*draft).clone();
            if !chat.0.clone().submit(&text) {
                return;
            }
            chat.dispatch(ChatAction::Submit(text));
            draft.set(String::new());

            let dispatcher = chat.dispatcher();
            Timeout::new(delay_ms, move || dispatcher.dispatch(ChatAction::Reply)).forget();
        })
    };

    html! {
        <>
            <div class="fixed bottom-6 right-20 z-[5000]">
                <button class="btn btn-accent btn-circle shadow-lg" title="AI Assistant" onclick={on_toggle}>
                    if *open {
                        <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-6 h-6" />
                    } else {
                        <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-6 h-6" />
                    }
                </button>
            </div>

            if *open {
                <div class="card bg-base-100 shadow-2xl fixed bottom-20 right-6 w-80 h-[450px] z-[5000]">
                    <div class="card-body p-4 flex flex-col">
                        <div class="flex justify-between items-center border-b border-base-300 pb-3">
                            <h4 class="font-semibold">{ "AI Assistant" }</h4>
                            <span class="badge badge-sm badge-secondary">{ "Beta" }</span>
                        </div>
                        <div class="flex-1 overflow-y-auto py-4 flex flex-col gap-3">
                            { for chat.0.lines().iter().map(|line| {
                                let bubble = match line.speaker {
                                    Speaker::User => "chat chat-end",
                                    Speaker::Bot => "chat chat-start",
                                };
                                html! {
                                    <div class={bubble}>
                                        <div class="chat-bubble text-sm">
                                            { &line.text }
                                            if line.speaker == Speaker::Bot {
                                                <div class="text-[10px] mt-1 opacity-70">{ "Generated by AI" }</div>
                                            }
                                        </div>
                                    </div>
                                }
                            }) }
                        </div>
                        <form class="flex gap-2 border-t border-base-300 pt-3" onsubmit={on_submit}>
                            <input
                                type="text"
                                class="input input-bordered input-sm flex-1"
                                placeholder="Type a message..."
                                value={(*draft).clone()}
                                oninput={on_input}
                            />
                            <button type="submit" class="btn btn-primary btn-sm">
                                <Icon icon_id={IconId::HeroiconsOutlinePaperAirplane} class="w-4 h-4" />
                            </button>
                        </form>
                    </div>
                </div>
            }
        </>
    }
}
