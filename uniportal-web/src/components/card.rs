use yew::{AttrValue, Children, Classes, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub children: Children,

    /// Heading rendered in the card title row.
    #[prop_or_default]
    pub title: Option<AttrValue>,

    /// Freshness note shown in the card footer.
    #[prop_or_default]
    pub last_updated: Option<&'static str>,

    /// Extra element aligned to the right of the title.
    #[prop_or_default]
    pub action: Option<Html>,

    #[prop_or_default]
    pub class: Classes,
}

/// Dashboard style card with an optional title row and "last updated" footer.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", "bg-base-200", "shadow-xl", "h-full", props.class.clone())}>
            <div class="card-body">
                if props.title.is_some() || props.action.is_some() {
                    <div class="flex justify-between items-start">
                        if let Some(title) = &props.title {
                            <h2 class="card-title">{ title }</h2>
                        }
                        { props.action.clone().unwrap_or_default() }
                    </div>
                }
                <div class="flex-1">
                    { props.children.clone() }
                </div>
                if let Some(last_updated) = props.last_updated {
                    <div class="mt-4 pt-3 border-t border-base-300 text-xs text-base-content/60">
                        { format!("Last updated: {last_updated}") }
                    </div>
                }
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use yew::ServerRenderer;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_card_renders_title_and_footer() {
        let rendered = ServerRenderer::<Card>::with_props(|| CardProps {
            children: Children::default(),
            title: Some(AttrValue::from("Notices")),
            last_updated: Some("Live"),
            action: None,
            class: Classes::new(),
        })
        .render()
        .await;
        assert!(rendered.contains("Notices"));
        assert!(rendered.contains("Last updated: Live"));
    }

    #[wasm_bindgen_test]
    async fn test_card_without_title_has_no_title_row() {
        let rendered = ServerRenderer::<Card>::with_props(|| CardProps {
            children: Children::default(),
            title: None,
            last_updated: None,
            action: None,
            class: Classes::new(),
        })
        .render()
        .await;
        assert!(!rendered.contains("card-title"));
        assert!(!rendered.contains("Last updated"));
    }
}
