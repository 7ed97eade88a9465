use yew::{Children, Classes, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PageContentProps {
    #[prop_or_default]
    pub children: Children,

    // Additional classes for the page container
    #[prop_or_default]
    pub class: Classes,
}

/// Centers page content and caps its width.
#[function_component(PageContent)]
pub fn page_content(props: &PageContentProps) -> Html {
    html! {
        <div class={classes!("mx-auto", "w-full", "max-w-6xl", props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}
