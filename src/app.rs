use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::notes_page::NotesPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="p-8 text-gray-500">"404 - Page Not Found"</div> }>
                <Route path=path!("/") view=NotesPage />
            </Routes>
        </Router>
    }
}
