use leptos::prelude::*;

/// Multi-line checklist field, uncontrolled like [`super::Input`].
#[component]
pub fn Textarea(
    /// Storage name of the field
    #[prop(into)]
    name: String,
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let textarea_id = format!("field-{}", name);
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <div class="form-group">
            {
                let for_id = textarea_id.clone();
                move || label.get().map(|l| view! {
                    <label class="form-label" for=for_id.clone()>{l}</label>
                })
            }
            <textarea
                id=textarea_id
                class="form-control"
                name=name
                required=required
                rows=textarea_rows
            ></textarea>
        </div>
    }
}
