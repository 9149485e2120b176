/// Application entry point.
/// Loads the page-embedded reaction config, shares it with every
/// reaction bar and renders the reviews it lists.
use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use crate::components::reviews_list::ReviewsList;
use crate::config::ReactionConfig;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let mut config = ReactionConfig::from_document();
    let reviews = std::mem::take(&mut config.reviews);
    provide_context(Rc::new(config));

    view! {
        <Title text="Reviews" />
        <ReviewsList reviews=reviews />
    }
}
