use yew::prelude::*;

use crate::content::ABOUT_PARAGRAPHS;

#[derive(Properties, PartialEq)]
pub struct AboutPageProps {
    pub organization: AttrValue,
}

#[function_component(AboutPage)]
pub fn about_page(props: &AboutPageProps) -> Html {
    html! {
      <article class="prose">
        <h1 class="h1">{ format!("About {}", props.organization) }</h1>
        { for ABOUT_PARAGRAPHS.iter().map(|p| html! { <p>{ *p }</p> }) }
      </article>
    }
}
