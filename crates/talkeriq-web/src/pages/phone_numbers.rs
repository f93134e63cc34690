//! Phone numbers page

use crate::components::dialog::open_href;
use crate::components::empty_state::empty_message;
use crate::components::{
    Badge, Dialog, EmptyState, FilterBar, SelectField, SelectOption, StatCard, StatusTone, Tone,
};
use leptos::prelude::*;
use talkeriq_core::filter::ListQuery;
use talkeriq_core::metrics::PhoneNumberStats;
use talkeriq_core::store::Listing;
use talkeriq_core::types::PhoneNumber;
use talkeriq_core::utils::{format_date, format_usd};

/// Route of this page
pub const PATH: &str = "/phone-numbers";

const TYPE_OPTIONS: [SelectOption; 3] = [
    SelectOption::new("local", "Local"),
    SelectOption::new("toll-free", "Toll-Free"),
    SelectOption::new("international", "International"),
];

/// Phone numbers list with summary cards
#[component]
pub fn PhoneNumbersPage(
    listing: Listing<PhoneNumber>,
    stats: PhoneNumberStats,
    query: ListQuery,
    dialog_open: bool,
) -> impl IntoView {
    let heading = format!("Your Phone Numbers ({})", listing.matched);
    let empty = listing.records.is_empty().then(|| {
        view! {
            <EmptyState
                title="No phone numbers found"
                message=empty_message(
                    query.is_narrowed(),
                    "Get started by purchasing your first phone number.",
                )
                icon="\u{260E}"
            />
        }
    });
    let rows = listing
        .records
        .into_iter()
        .map(|number| view! { <PhoneNumberRow number=number/> })
        .collect::<Vec<_>>();
    let dialog = dialog_open.then(|| view! { <AddPhoneNumberDialog/> });
    let add_href = open_href(PATH);

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Phone Numbers"</h1>
                    <p class="page-subtitle">"Manage your phone numbers and configure call routing"</p>
                </div>
                <a href=add_href class="btn btn-primary">"+ Add Phone Number"</a>
            </div>

            <div class="stat-grid stat-grid-3">
                <StatCard
                    title="Active Numbers"
                    value=stats.active_numbers.to_string()
                    note="+2 from last month"
                    icon="\u{260E}"
                />
                <StatCard
                    title="Monthly Cost"
                    value=format_usd(stats.monthly_cost)
                    note="Per month"
                    icon="$"
                />
                <StatCard
                    title="Coverage"
                    value=stats.countries_covered.to_string()
                    note="Countries covered"
                    icon="\u{1F30E}"
                />
            </div>

            <FilterBar
                action=PATH
                placeholder="Search phone numbers..."
                search=query.search().to_string()
                param="type"
                selected=query.category().to_string()
                all_label="All Types"
                options=TYPE_OPTIONS.to_vec()
            />

            <div class="card">
                <h2 class="card-title">{heading}</h2>
                <div class="record-list">{rows}</div>
                {empty}
            </div>

            {dialog}
        </div>
    }
}

/// One phone number with its badges and actions
#[component]
fn PhoneNumberRow(number: PhoneNumber) -> impl IntoView {
    let price = format!("\u{1F4B0} {}/month", format_usd(number.monthly_price));
    let since = format!("\u{1F4C5} Since {}", format_date(number.purchase_date));
    let location = format!("\u{1F4CD} {}", number.location);
    let connected = number
        .connected_agent
        .map(|agent| view! { <span>{format!("\u{1F916} Connected to {agent}")}</span> });

    view! {
        <div class="record-row">
            <div class="record-icon">"\u{260E}"</div>
            <div class="record-body">
                <div class="record-heading">
                    <p class="record-title">{number.number}</p>
                    <Badge label=number.status.label() tone=number.status.tone()/>
                    <Badge label=number.number_type.label() tone=Tone::Outline/>
                </div>
                <div class="record-meta">
                    <span>{location}</span>
                    <span>{price}</span>
                    <span>{since}</span>
                    {connected}
                </div>
            </div>
            <details class="row-menu">
                <summary class="btn btn-outline btn-sm">"\u{22EE}"</summary>
                <ul class="menu">
                    <li>"Configure"</li>
                    <li>"Connect Agent"</li>
                    <li class="menu-danger">"Release Number"</li>
                </ul>
            </details>
        </div>
    }
}

/// Purchase dialog
#[component]
fn AddPhoneNumberDialog() -> impl IntoView {
    view! {
        <Dialog title="Add New Phone Number" action=PATH submit_label="Purchase Number">
            <SelectField
                name="number_type"
                label="Number Type"
                placeholder="Select number type"
                options=vec![
                    SelectOption::new("local", "Local Number"),
                    SelectOption::new("toll-free", "Toll-Free Number"),
                    SelectOption::new("international", "International Number"),
                ]
            />
            <SelectField
                name="location"
                label="Location"
                placeholder="Select location"
                options=vec![
                    SelectOption::new("ny", "New York, NY"),
                    SelectOption::new("ca", "Los Angeles, CA"),
                    SelectOption::new("tx", "Austin, TX"),
                    SelectOption::new("fl", "Miami, FL"),
                ]
            />
        </Dialog>
    }
}
