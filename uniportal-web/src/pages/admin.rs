use crate::components::{Card, SuccessCard};
use shared::content::finance::{
    InvoiceStatus, PAYMENT_CONFIRMATION, invoices, official_documents,
};
use shared::models::Page;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Student admin & finance page component
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let confirmation = use_state(|| None::<String>);

    if let Some(message) = (*confirmation).clone() {
        let on_dismiss = {
            let confirmation = confirmation.clone();
            Callback::from(move |()| confirmation.set(None))
        };
        return html! {
            <SuccessCard title="Request Submitted" {message} {on_dismiss} />
        };
    }

    let confirm = |message: String| {
        let confirmation = confirmation.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            confirmation.set(Some(message.clone()));
        })
    };

    html! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold">{ Page::Admin.title() }</h1>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <section>
                    <h2 class="text-xl font-semibold mb-4">{ "Invoices & Fees" }</h2>
                    <Card>
                        { for invoices().into_iter().map(|invoice| html! {
                            <div key={invoice.id} class="flex justify-between items-center pb-4 mb-4 border-b border-base-300">
                                <div>
                                    <div class="font-semibold">{ invoice.description }</div>
                                    <div class={classes!(
                                        "text-xs",
                                        if invoice.status == InvoiceStatus::Overdue { "text-error" } else { "text-base-content/60" }
                                    )}>
                                        { format!("Due: {} • {}", invoice.due, invoice.status) }
                                    </div>
                                </div>
                                <div class="text-right">
                                    <div class="font-bold mb-1">{ invoice.amount }</div>
                                    if invoice.status.is_payable() {
                                        <button class="btn btn-primary btn-xs" onclick={confirm(PAYMENT_CONFIRMATION.to_string())}>
                                            { "Pay Now" }
                                        </button>
                                    }
                                </div>
                            </div>
                        }) }
                    </Card>
                </section>

                <section>
                    <h2 class="text-xl font-semibold mb-4">{ "Official Documents" }</h2>
                    <Card>
                        { for official_documents().into_iter().map(|doc| html! {
                            <div key={doc.id} class="flex justify-between items-center mb-3">
                                <div class="flex items-center gap-2">
                                    <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="w-5 h-5" />
                                    <span>{ doc.name }</span>
                                </div>
                                <div class="flex gap-2 items-center">
                                    <span class="text-xs text-base-content/60">{ doc.price }</span>
                                    <button class="btn btn-outline btn-sm" onclick={confirm(doc.request_confirmation())}>
                                        <Icon icon_id={IconId::HeroiconsOutlineArrowDownTray} class="w-4 h-4" />
                                    </button>
                                </div>
                            </div>
                        }) }
                    </Card>
                </section>
            </div>
        </div>
    }
}
