use crate::components::Card;
use shared::content::finance::stored_documents;
use shared::models::Page;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[function_component(DocumentsPage)]
pub fn documents_page() -> Html {
    html! {
        <div class="space-y-8">
            <div class="flex justify-between items-center">
                <h1 class="text-3xl font-bold">{ Page::Documents.title() }</h1>
                <button class="btn btn-primary">
                    <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-5 h-5" />
                    { "Upload New" }
                </button>
            </div>

            <Card>
                <div class="overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{ "Name" }</th>
                                <th>{ "Date Added" }</th>
                                <th>{ "Status" }</th>
                                <th class="text-right">{ "Actions" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for stored_documents().into_iter().map(|doc| html! {
                                <tr key={doc.id}>
                                    <td class="flex items-center gap-2">
                                        <Icon icon_id={IconId::HeroiconsOutlineDocument} class="w-5 h-5" />
                                        { doc.name }
                                    </td>
                                    <td class="text-base-content/60">{ doc.added }</td>
                                    <td>
                                        if doc.in_use {
                                            <span class="badge badge-info badge-sm">{ "In Use" }</span>
                                        }
                                    </td>
                                    <td class="text-right">
                                        <button class="btn btn-outline btn-xs">{ "View" }</button>
                                    </td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </Card>
        </div>
    }
}
