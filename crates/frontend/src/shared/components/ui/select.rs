use leptos::prelude::*;

/// Drop-down checklist field.
#[component]
pub fn Select(
    /// Storage name of the field
    #[prop(into)]
    name: String,
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Options: (value, label) pairs
    options: &'static [(&'static str, &'static str)],
    /// Required attribute
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let select_id = format!("field-{}", name);

    view! {
        <div class="form-group">
            {
                let for_id = select_id.clone();
                move || label.get().map(|l| view! {
                    <label class="form-label" for=for_id.clone()>{l}</label>
                })
            }
            <select id=select_id class="form-control" name=name required=required>
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
