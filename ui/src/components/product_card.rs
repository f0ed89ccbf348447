use crate::types::ProductId;
use crate::view::CardView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub card: CardView,
    pub on_delete: Callback<ProductId>,
    pub on_check_price: Callback<ProductId>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let card = &props.card;

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = card.id.clone();
        Callback::from(move |_| on_delete.emit(id.clone()))
    };

    let on_check_price = {
        let on_check_price = props.on_check_price.clone();
        let id = card.id.clone();
        Callback::from(move |_| on_check_price.emit(id.clone()))
    };

    html! {
        <div class="material-card product-card" id={card.dom_id.clone()}>
            <div class="product-body">
                if let Some(ref site) = card.site {
                    <span class="site">{site}</span>
                }
                <a href={card.href.clone()} target="_blank" rel="noopener noreferrer" class="product-link">
                    {&card.title}
                </a>
                <p class="target-price">{&card.price_label}</p>
                if let Some(ref checked) = card.checked_label {
                    <p class="current-price">{checked}</p>
                }
                if let Some(ref sid) = card.sid {
                    <p class="sid">{format!("ID: {}", sid)}</p>
                }
            </div>
            <div class="product-actions">
                if card.can_check_price {
                    <button class="material-button" onclick={on_check_price} disabled={card.deleting}>
                        {"Check Price"}
                    </button>
                }
                <button class="material-button delete-button" onclick={on_delete} disabled={card.deleting}>
                    {if card.deleting { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </div>
    }
}
