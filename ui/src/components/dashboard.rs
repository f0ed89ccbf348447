use crate::api::HttpProductApi;
use crate::components::product_card::ProductCard;
use crate::components::product_form::AddProductForm;
use crate::components::toast::Toast;
use crate::config;
use crate::tracker::{Tracker, CONFIRM_DELETE_PROMPT};
use crate::types::{ProductForm, ProductId};
use crate::view::{ListView, EMPTY_PLACEHOLDER, FAILED_PLACEHOLDER};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn confirm_removal() -> bool {
    gloo_utils::window()
        .confirm_with_message(CONFIRM_DELETE_PROMPT)
        .unwrap_or(false)
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let config = use_memo((), |_| config::load());
    let force_update = use_force_update();
    let tracker = use_memo((), {
        let config = config.clone();
        move |_| {
            Tracker::new(HttpProductApi::new(&config), move || {
                force_update.force_update()
            })
        }
    });

    {
        let tracker = (*tracker).clone();
        use_effect_with((), move |_| {
            spawn_local(async move { tracker.load_products().await });
            || ()
        });
    }

    let on_submit = {
        let tracker = tracker.clone();
        Callback::from(move |form: ProductForm| {
            let tracker = (*tracker).clone();
            spawn_local(async move {
                tracker.add_product(form).await;
            });
        })
    };

    let on_delete = {
        let tracker = tracker.clone();
        Callback::from(move |id: ProductId| {
            let tracker = (*tracker).clone();
            spawn_local(async move {
                tracker.delete_product(id, confirm_removal).await;
            });
        })
    };

    let on_check_price = {
        let tracker = tracker.clone();
        Callback::from(move |id: ProductId| {
            let tracker = (*tracker).clone();
            spawn_local(async move {
                tracker.check_price(id).await;
            });
        })
    };

    let on_dismiss = {
        let tracker = tracker.clone();
        Callback::from(move |notice: u32| tracker.dismiss(notice))
    };

    let state = tracker.state();
    let list = ListView::from_state(&state);
    let busy = state.submitting;
    let form_generation = state.form_generation;
    let notices: Vec<_> = state.notices.iter().cloned().collect();
    drop(state);

    html! {
        <div class="dashboard">
            <div class="toasts">
                {for notices.into_iter().map(|notice| {
                    let key = notice.id;
                    html! {
                        <Toast
                            key={key}
                            notice={notice}
                            timeout_ms={config.toast_timeout_ms}
                            on_dismiss={on_dismiss.clone()}
                        />
                    }
                })}
            </div>

            <AddProductForm busy={busy} reset_generation={form_generation} on_submit={on_submit} />

            <div class="products-grid">
                {match list {
                    ListView::Loading => html! {
                        <div class="loader"><div class="spinner"></div></div>
                    },
                    ListView::Failed => html! {
                        <p class="placeholder error">{FAILED_PLACEHOLDER}</p>
                    },
                    ListView::Empty => html! {
                        <p class="placeholder">{EMPTY_PLACEHOLDER}</p>
                    },
                    ListView::Cards(cards) => cards.into_iter().map(|card| {
                        let key = card.dom_id.clone();
                        html! {
                            <ProductCard
                                key={key}
                                card={card}
                                on_delete={on_delete.clone()}
                                on_check_price={on_check_price.clone()}
                            />
                        }
                    }).collect::<Html>(),
                }}
            </div>
        </div>
    }
}
