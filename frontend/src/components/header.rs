//! Fixed brand bar. Purely presentational, no state.

use leptos::*;

#[component]
pub fn HeaderBar() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <div class="logo-mark"></div>
                <span class="logo">"WTOP"</span>
            </div>
        </header>
    }
}
