pub mod dashboard;
pub mod product_card;
pub mod product_form;
pub mod toast;
