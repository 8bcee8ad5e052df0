use leptos::prelude::*;

use super::entries::EntryList;
use super::schema::{Block, FieldKind, FieldSpec, FormSpec, SectionSpec};
use super::tabs::TabGroup;
use crate::shared::components::ui::{Checkbox, Input, RadioGroup, Select, Textarea};

#[component]
pub fn SectionView(spec: &'static SectionSpec) -> impl IntoView {
    view! {
        <section id=spec.id.as_str() class="content-section">
            <h2 class="content-section__title">{spec.id.display_name()}</h2>
            <p class="content-section__intro">{spec.intro}</p>
            {spec.blocks.iter().map(block_view).collect_view()}
        </section>
    }
}

fn block_view(block: &'static Block) -> AnyView {
    match block {
        Block::Form(form) => view! { <FormView form=form /> }.into_any(),
        Block::Tabs { group, tabs } => view! { <TabGroup group=*group tabs=*tabs /> }.into_any(),
        Block::Entries { container, title } => {
            view! { <EntryList container=*container title=*title /> }.into_any()
        }
    }
}

#[component]
pub fn FormView(form: &'static FormSpec) -> impl IntoView {
    view! {
        <div class=form.class>
            <h3 class="form-title">{form.title}</h3>
            {form.fields.iter().map(field_view).collect_view()}
        </div>
    }
}

fn field_view(field: &'static FieldSpec) -> AnyView {
    let FieldSpec { name, label, kind, required } = *field;
    match kind {
        FieldKind::Text => view! { <Input name=name label=label required=required /> }.into_any(),
        FieldKind::Date => {
            view! { <Input name=name label=label input_type="date" required=required /> }.into_any()
        }
        FieldKind::Time => {
            view! { <Input name=name label=label input_type="time" required=required /> }.into_any()
        }
        FieldKind::Number => {
            view! { <Input name=name label=label input_type="number" required=required /> }
                .into_any()
        }
        FieldKind::TextArea { rows } => {
            view! { <Textarea name=name label=label rows=rows required=required /> }.into_any()
        }
        FieldKind::Checkbox => {
            view! { <Checkbox name=name label=label required=required /> }.into_any()
        }
        FieldKind::Radio(options) => {
            view! { <RadioGroup name=name label=label options=options required=required /> }
                .into_any()
        }
        FieldKind::Select(options) => {
            view! { <Select name=name label=label options=options required=required /> }.into_any()
        }
    }
}
