use crate::notice::{Notice, NoticeKind};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Notice,
    pub timeout_ms: u32,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with((props.notice.id, props.timeout_ms), move |&(id, timeout_ms)| {
            let timeout = Timeout::new(timeout_ms, move || on_dismiss.emit(id));
            // Dropping the handle cancels the timer if the toast goes away first.
            move || drop(timeout)
        });
    }

    let class = match props.notice.kind {
        NoticeKind::Success => "toast success",
        NoticeKind::Error => "toast error",
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.notice.id;
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={class} role="status" {onclick}>
            {&props.notice.message}
        </div>
    }
}
