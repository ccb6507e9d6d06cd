use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"This scroll has burned away"}</h1>
            <p>{"The page you were looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">{"Back to the start"}</Link<Route>>
        </div>
    }
}
