use crate::types::ProductForm;
use web_sys::{HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddProductFormProps {
    pub busy: bool,
    /// The form clears its fields whenever this changes.
    pub reset_generation: u32,
    pub on_submit: Callback<ProductForm>,
}

#[function_component(AddProductForm)]
pub fn add_product_form(props: &AddProductFormProps) -> Html {
    let form_ref = use_node_ref();
    let url_ref = use_node_ref();
    let price_ref = use_node_ref();
    let email_ref = use_node_ref();

    {
        let form_ref = form_ref.clone();
        use_effect_with(props.reset_generation, move |generation| {
            if *generation > 0 {
                if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                    form.reset();
                }
            }
            || ()
        });
    }

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        let url_ref = url_ref.clone();
        let price_ref = price_ref.clone();
        let email_ref = email_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            on_submit.emit(ProductForm {
                url: value(&url_ref),
                target_price: value(&price_ref),
                user_email: value(&email_ref),
            });
        })
    };

    html! {
        <form class="material-card add-product" ref={form_ref} {onsubmit}>
            <h2>{"Track a new product"}</h2>
            <label>
                {"Product URL"}
                <input ref={url_ref} type="url" name="url" placeholder="https://www.amazon.in/dp/..." required=true />
            </label>
            <label>
                {"Target Price (₹)"}
                <input ref={price_ref} type="number" name="targetPrice" min="0" step="0.01" required=true />
            </label>
            <label>
                {"Email"}
                <input ref={email_ref} type="email" name="userEmail" placeholder="you@example.com" required=true />
            </label>
            <button type="submit" class="material-button" disabled={props.busy}>
                if props.busy {
                    <span class="spinner"></span>
                } else {
                    <span>{"Start Tracking"}</span>
                }
            </button>
        </form>
    }
}
