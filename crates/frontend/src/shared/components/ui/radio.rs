use leptos::prelude::*;

/// Radio button component
#[component]
pub fn Radio(
    /// Label text
    #[prop(into)]
    label: String,
    /// Radio value
    #[prop(into)]
    value: String,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// Required attribute
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let radio_id = format!("field-{}-{}", name, value);

    view! {
        <div class="form-check form-check--inline">
            <input
                id=radio_id.clone()
                type="radio"
                class="form-check__input"
                name=name
                value=value
                required=required
            />
            <label class="form-check__label" for=radio_id>
                {label}
            </label>
        </div>
    }
}

/// Radio group component; the checked option's value is stored under `name`.
#[component]
pub fn RadioGroup(
    /// Label for the group
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// Options: (value, label) pairs
    options: &'static [(&'static str, &'static str)],
    /// Required attribute
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="form-group">
            {move || label.get().map(|l| view! {
                <label class="form-label">{l}</label>
            })}
            <div class="form-check-group">
                {options
                    .iter()
                    .map(|(value, text)| view! {
                        <Radio label=*text value=*value name=name.clone() required=required />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
