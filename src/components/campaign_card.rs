//! Campaign Card Component
//!
//! Fundraiser summary with progress, plus a details dialog. Donating only
//! shows a mock notice.

use leptos::prelude::*;
use zuzzbee_core::config::DEFAULT_PROFILE_IMAGE;
use zuzzbee_core::{Campaign, Notice};

use crate::context::use_app_context;
use crate::format::format_amount;

const EXCERPT_CHARS: usize = 100;

fn donate_notice(title: &str) -> Notice {
    Notice::info("Donation Feature (Mock)").with_description(format!(
        "You're about to donate to \"{}\". Payment processing is not implemented.",
        title
    ))
}

#[component]
pub fn CampaignCard(campaign: Campaign) -> impl IntoView {
    let ctx = use_app_context();
    let (details_open, set_details_open) = signal(false);

    let percent = campaign.progress_percent();
    let funded = format!("{}% funded", percent.round() as u32);
    let bar_width = format!("{}%", percent.min(100.0));
    let raised = format_amount(&campaign.currency_symbol, campaign.raised_amount);
    let goal = format_amount(&campaign.currency_symbol, campaign.goal_amount);
    let avatar = campaign.creator_avatar.clone().unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string());
    let created = campaign.created_at.format("%b %-d").to_string();
    let image = campaign.image().to_string();
    let title = campaign.title.clone();
    let image_alt = title.clone();

    let on_donate = {
        let title = title.clone();
        move |_| ctx.notify(donate_notice(&title))
    };

    let details = {
        let campaign = campaign.clone();
        let (raised, goal, funded, bar_width, image) =
            (raised.clone(), goal.clone(), funded.clone(), bar_width.clone(), image.clone());
        move || {
            let on_donate = on_donate.clone();
            view! {
                <div class="dialog-backdrop" on:click=move |_| set_details_open.set(false)>
                    <div class="dialog campaign-dialog" role="dialog" on:click=|ev| ev.stop_propagation()>
                        <h2>{campaign.title.clone()}</h2>
                        <p class="muted">
                            "Category: "{campaign.category.clone()}" | By: "{campaign.creator_name.clone()}
                        </p>
                        <img class="campaign-image large" src=image.clone() alt=campaign.title.clone() />
                        <h3>"Story"</h3>
                        <p class="campaign-story">{campaign.story.clone()}</p>
                        <h3>"Fundraising Progress"</h3>
                        <div class="progress-labels">
                            <span>{raised.clone()}" raised"</span>
                            <span class="muted">{goal.clone()}" goal"</span>
                        </div>
                        <div class="progress"><div class="progress-fill" style:width=bar_width.clone()></div></div>
                        <p class="muted right">{funded.clone()}</p>
                        <div class="dialog-actions">
                            <button type="button" class="secondary" on:click=move |_| set_details_open.set(false)>
                                "Close"
                            </button>
                            <button type="button" on:click=on_donate>"Donate Now"</button>
                        </div>
                    </div>
                </div>
            }
        }
    };

    view! {
        <article class="campaign-card">
            <img class="campaign-image" src=image alt=image_alt />
            <h3 class="campaign-title">{title}</h3>
            {(!campaign.category.is_empty()).then(|| view! {
                <span class="badge">{campaign.category.clone()}</span>
            })}
            <p class="campaign-excerpt">{campaign.excerpt(EXCERPT_CHARS)}</p>

            <div class="progress-labels">
                <span>"Raised: "{raised}</span>
                <span class="muted">"Goal: "{goal}</span>
            </div>
            <div class="progress"><div class="progress-fill" style:width=bar_width></div></div>
            <p class="muted right">{funded}</p>

            <div class="campaign-creator">
                <span class="avatar tiny"><img src=avatar alt=campaign.creator_name.clone() /></span>
                <span>"By "{campaign.creator_name.clone()}</span>
                <span>" · "{created}</span>
            </div>

            <button type="button" on:click=move |_| set_details_open.set(true)>"View Campaign"</button>
            {move || details_open.get().then(details.clone())}
        </article>
    }
}
