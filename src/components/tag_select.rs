//! Tag Select Component
//!
//! Dropdown over a fixed tag set, used by the inline edit form.

use leptos::prelude::*;

use crate::models::extra_option;

/// Dropdown bound to `value`
///
/// A starting value outside `options` is kept as an extra option and an
/// empty value selects the blank entry, so opening the form never rewrites it.
#[component]
pub fn TagSelect(
    options: &'static [&'static str],
    value: RwSignal<String>,
) -> impl IntoView {
    let extra = extra_option(options, &value.get_untracked());

    view! {
        <select class="tag-select" on:change=move |ev| value.set(event_target_value(&ev))>
            <option value="" selected=move || value.get().is_empty()>"未選択"</option>
            {extra.map(|current| {
                let label = current.clone();
                view! { <option value=current selected=true>{label}</option> }
            })}
            {options.iter().map(|opt| {
                let opt: &'static str = opt;
                view! {
                    <option value=opt selected=move || value.get() == opt>{opt}</option>
                }
            }).collect_view()}
        </select>
    }
}
