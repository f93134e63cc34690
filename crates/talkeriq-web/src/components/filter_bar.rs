//! Search box and category selector above a list

use leptos::prelude::*;
use talkeriq_core::filter::WILDCARD;

/// One entry in a dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value
    pub value: &'static str,
    /// Visible text
    pub label: &'static str,
}

impl SelectOption {
    /// Create an option
    #[must_use]
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// GET form that re-renders the page with `search` and the category param
///
/// `selected` is the lowercased token currently applied; an option is marked
/// selected when its value equals it. A token no option carries is appended as
/// its own selected option so the selector always shows the active filter.
#[component]
pub fn FilterBar(
    /// Page the form submits to
    action: &'static str,
    /// Placeholder of the search box
    placeholder: &'static str,
    /// Current search text
    search: String,
    /// Name of the category query parameter
    param: &'static str,
    /// Current category token
    selected: String,
    /// Text of the wildcard option
    all_label: &'static str,
    /// Category options after the wildcard
    options: Vec<SelectOption>,
) -> impl IntoView {
    let all_selected = selected == WILDCARD;
    let unknown = (!all_selected && !options.iter().any(|option| option.value == selected))
        .then(|| {
            let value = selected.clone();
            let label = selected.clone();
            view! { <option value=value selected=true>{label}</option> }
        });
    let rows = options
        .into_iter()
        .map(|option| {
            let is_selected = option.value == selected;
            view! { <option value=option.value selected=is_selected>{option.label}</option> }
        })
        .collect::<Vec<_>>();

    view! {
        <form class="filter-bar" method="get" action=action>
            <div class="search-box">
                <span class="search-icon">"\u{1F50D}"</span>
                <input
                    type="search"
                    name="search"
                    class="search-input"
                    placeholder=placeholder
                    value=search
                />
            </div>
            <select name=param class="filter-select">
                <option value=WILDCARD selected=all_selected>{all_label}</option>
                {rows}
                {unknown}
            </select>
            <button type="submit" class="btn btn-outline">"Apply"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const OPTIONS: [SelectOption; 2] = [
        SelectOption::new("local", "Local"),
        SelectOption::new("toll-free", "Toll-Free"),
    ];

    fn render(selected: &str) -> String {
        let selected = selected.to_string();
        view! {
            <FilterBar
                action="/phone-numbers"
                placeholder="Search phone numbers..."
                search=String::new()
                param="type"
                selected=selected
                all_label="All Types"
                options=OPTIONS.to_vec()
            />
        }
        .to_html()
    }

    fn selected_options(html: &str) -> usize {
        html.matches("selected").count()
    }

    #[test]
    fn test_known_token_selects_its_option() {
        let html = render("toll-free");

        assert_eq!(selected_options(&html), 1);
        assert_eq!(html.matches(r#"value="toll-free""#).count(), 1);
    }

    #[test]
    fn test_wildcard_selects_all() {
        let html = render(WILDCARD);

        assert_eq!(selected_options(&html), 1);
        assert!(html.contains("All Types"));
    }

    #[test]
    fn test_unknown_token_gets_its_own_selected_option() {
        let html = render("satellite");

        assert_eq!(selected_options(&html), 1);
        assert!(html.contains(r#"value="satellite""#));
    }
}
