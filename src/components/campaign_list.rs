//! Campaign List Component
//!
//! Campaign cards with a category filter.

use leptos::prelude::*;
use zuzzbee_core::config::FUNDRAISER_CATEGORIES;
use zuzzbee_core::Campaign;

use crate::components::CampaignCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CampaignList() -> impl IntoView {
    let store = use_app_store();
    let (category, set_category) = signal::<Option<&'static str>>(None);

    let visible = move || {
        let selected = category.get();
        store.campaigns().with(|campaigns| {
            campaigns
                .iter()
                .filter(|c| selected.map_or(true, |cat| c.category == cat))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let chip_class = move |value: Option<&'static str>| {
        move || if category.get() == value { "chip active" } else { "chip" }
    };

    view! {
        <section class="campaigns">
            <h1>"Campaigns"</h1>
            <div class="chip-row">
                <button type="button" class=chip_class(None) on:click=move |_| set_category.set(None)>
                    "All"
                </button>
                {FUNDRAISER_CATEGORIES.iter().map(|cat| view! {
                    <button type="button" class=chip_class(Some(*cat)) on:click=move |_| set_category.set(Some(*cat))>
                        {*cat}
                    </button>
                }).collect_view()}
            </div>

            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="muted">"No campaigns in this category yet."</p> }
            >
                <div class="campaign-grid">
                    <For
                        each=visible
                        key=|c: &Campaign| c.id.clone()
                        children=move |campaign| view! { <CampaignCard campaign=campaign /> }
                    />
                </div>
            </Show>
        </section>
    }
}
