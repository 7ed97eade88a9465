use yew::{Callback, Html, MouseEvent, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct SuccessCardProps {
    pub title: String,
    pub message: String,
    pub on_dismiss: Callback<()>,
}

/// Confirmation shown in place of a service page after a request.
#[function_component(SuccessCard)]
pub fn success_card(props: &SuccessCardProps) -> Html {
    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_dismiss.emit(());
        })
    };

    html! {
        <div class="max-w-3xl mx-auto">
            <div class="card bg-success/10 border border-success shadow-xl">
                <div class="card-body items-center text-center">
                    <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-10 h-10 text-success" />
                    <h3 class="card-title text-success">{ &props.title }</h3>
                    <p>{ &props.message }</p>
                    <div class="card-actions">
                        <button class="btn btn-outline btn-success" {onclick}>{ "Close" }</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
