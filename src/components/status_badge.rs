use yew::prelude::*;

use crate::models::progress::SubmissionStatus;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: SubmissionStatus,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let status = props.status;
    html! {
        <span class="status-badge"
            style={format!("color: {0}; border: 1px solid {0};", status.color())}>
            {format!("{} {}", status.icon(), status.label())}
        </span>
    }
}
