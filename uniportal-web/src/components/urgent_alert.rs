use shared::content::inbox::Message;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct UrgentAlertProps {
    pub message: Message,
    pub on_close: Callback<()>,
}

/// Blocking overlay for an unread emergency notice.
#[function_component(UrgentAlert)]
pub fn urgent_alert(props: &UrgentAlertProps) -> Html {
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_close.emit(());
        })
    };
    let message = &props.message;

    html! {
        <div class="fixed inset-0 z-[3000] flex items-center justify-center bg-black/80">
            <div class="card bg-base-100 max-w-lg w-full border-l-8 border-error">
                <div class="card-body flex-row gap-4 items-start">
                    <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-6 h-6 text-error shrink-0" />
                    <div>
                        <h2 class="text-xl font-bold text-error mb-2">{ message.title }</h2>
                        <p class="mb-4">{ message.body }</p>
                        <div class="text-xs text-base-content/60 mb-6">{ message.date }</div>
                        <button class="btn btn-primary w-full" {onclick}>{ "I Acknowledge" }</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
