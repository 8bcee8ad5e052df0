use leptos::prelude::*;

/// Single-line checklist field.
///
/// The element is uncontrolled: its value lives in the DOM and is captured by
/// the page-level input handler through `name`.
#[component]
pub fn Input(
    /// Storage name of the field
    #[prop(into)]
    name: String,
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input type: "text" (default), "date", "time", "number", "tel"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let input_id = format!("field-{}", name);
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form-group">
            {
                let for_id = input_id.clone();
                move || label.get().map(|l| view! {
                    <label class="form-label" for=for_id.clone()>
                        {l}
                        {required.then_some(view! { <span class="form-label__required">" *"</span> })}
                    </label>
                })
            }
            <input
                id=input_id
                class="form-control"
                type=input_t
                name=name
                required=required
            />
        </div>
    }
}
