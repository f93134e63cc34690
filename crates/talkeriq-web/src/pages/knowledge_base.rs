//! Knowledge base page

use crate::components::dialog::open_href;
use crate::components::empty_state::empty_message;
use crate::components::{
    Badge, Dialog, EmptyState, FilterBar, SelectField, SelectOption, StatCard, StatusTone,
    TextAreaField, TextField, Tone,
};
use leptos::prelude::*;
use talkeriq_core::filter::ListQuery;
use talkeriq_core::metrics::KnowledgeStats;
use talkeriq_core::store::Listing;
use talkeriq_core::types::{KnowledgeItem, KnowledgeType};
use talkeriq_core::utils::{format_count, format_date};

/// Route of this page
pub const PATH: &str = "/knowledge-base";

const TYPE_OPTIONS: [SelectOption; 4] = [
    SelectOption::new("document", "Documents"),
    SelectOption::new("faq", "FAQs"),
    SelectOption::new("script", "Scripts"),
    SelectOption::new("api", "APIs"),
];

const fn type_glyph(kind: KnowledgeType) -> &'static str {
    match kind {
        KnowledgeType::Document => "\u{1F4C4}",
        KnowledgeType::Faq | KnowledgeType::Api => "\u{1F5C4}",
        KnowledgeType::Script => "\u{270E}",
    }
}

/// Knowledge entries with summary figures
#[component]
pub fn KnowledgeBasePage(
    listing: Listing<KnowledgeItem>,
    stats: KnowledgeStats,
    query: ListQuery,
    dialog_open: bool,
) -> impl IntoView {
    let empty = listing.records.is_empty().then(|| {
        view! {
            <div class="card">
                <EmptyState
                    title="No knowledge items found"
                    message=empty_message(
                        query.is_narrowed(),
                        "Get started by adding your first knowledge item.",
                    )
                    icon="\u{1F5C4}"
                />
            </div>
        }
    });
    let rows = listing
        .records
        .into_iter()
        .map(|item| view! { <KnowledgeRow item=item/> })
        .collect::<Vec<_>>();
    let dialog = dialog_open.then(|| view! { <AddKnowledgeDialog/> });
    let add_href = open_href(PATH);

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Knowledge Base"</h1>
                    <p class="page-subtitle">"Manage your AI agent's knowledge and training data"</p>
                </div>
                <div class="page-actions">
                    <button type="button" class="btn btn-outline">"Import Data"</button>
                    <a href=add_href class="btn btn-dark">"+ Add Knowledge"</a>
                </div>
            </div>

            <div class="stat-grid stat-grid-4">
                <StatCard
                    title="Total Items"
                    value=stats.total_items.to_string()
                    note="Knowledge items"
                    icon="\u{1F4C4}"
                />
                <StatCard
                    title="Active Items"
                    value=stats.active_items.to_string()
                    note="Ready for use"
                    icon="\u{1F5C4}"
                />
                <StatCard
                    title="Categories"
                    value=stats.categories.to_string()
                    note="Organized topics"
                    icon="\u{1F3F7}"
                />
                <StatCard
                    title="Total Usage"
                    value=format_count(stats.total_usage)
                    note="Times accessed"
                    icon="\u{1F4C8}"
                />
            </div>

            <FilterBar
                action=PATH
                placeholder="Search knowledge base..."
                search=query.search().to_string()
                param="type"
                selected=query.category().to_string()
                all_label="All Types"
                options=TYPE_OPTIONS.to_vec()
            />

            <div class="record-stack">{rows}</div>
            {empty}
            {dialog}
        </div>
    }
}

/// One knowledge entry
#[component]
fn KnowledgeRow(item: KnowledgeItem) -> impl IntoView {
    let KnowledgeItem {
        title,
        item_type,
        category,
        description,
        status,
        last_updated,
        usage_count,
        file_size,
        ..
    } = item;
    let updated = format!("\u{1F4C5} Updated {}", format_date(last_updated));
    let used = format!("\u{1F4C8} Used {usage_count} times");
    let size = file_size.map(|size| view! { <span>{format!("\u{1F4C1} {size}")}</span> });

    view! {
        <div class="card record-card">
            <div class="record-icon">{type_glyph(item_type)}</div>
            <div class="record-body">
                <div class="record-heading">
                    <h3 class="record-title">{title}</h3>
                    <Badge label=status.label() tone=status.tone()/>
                    <Badge label=item_type.label() tone=Tone::Outline/>
                    <Badge label=category.label() tone=Tone::Secondary/>
                </div>
                <p class="record-description">{description}</p>
                <div class="record-meta">
                    <span>{updated}</span>
                    <span>{used}</span>
                    {size}
                </div>
            </div>
            <details class="row-menu">
                <summary class="btn btn-outline btn-sm">"\u{270E}"</summary>
                <ul class="menu">
                    <li>"Edit"</li>
                    <li>"Download"</li>
                    <li class="menu-danger">"Delete"</li>
                </ul>
            </details>
        </div>
    }
}

/// Creation dialog
#[component]
fn AddKnowledgeDialog() -> impl IntoView {
    view! {
        <Dialog title="Add Knowledge Item" action=PATH submit_label="Add Knowledge">
            <TextField name="title" label="Title" placeholder="Enter knowledge title"/>
            <SelectField
                name="item_type"
                label="Type"
                placeholder="Select type"
                options=vec![
                    SelectOption::new("document", "Document"),
                    SelectOption::new("faq", "FAQ"),
                    SelectOption::new("script", "Script"),
                    SelectOption::new("api", "API"),
                ]
            />
            <SelectField
                name="category"
                label="Category"
                placeholder="Select category"
                options=vec![
                    SelectOption::new("sales", "Sales"),
                    SelectOption::new("support", "Support"),
                    SelectOption::new("technical", "Technical"),
                    SelectOption::new("general", "General"),
                ]
            />
            <TextAreaField
                name="description"
                label="Description"
                placeholder="Describe the knowledge content..."
            />
        </Dialog>
    }
}
