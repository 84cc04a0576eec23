mod entry;
mod health;
mod not_found;
mod unlock;

pub(crate) use entry::OtpEntryPage;
pub(crate) use health::HealthPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use unlock::UnlockPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths shared by pages and navigation.
pub(crate) mod paths {
    pub const ENTRY: &str = "/";
    pub const UNLOCK: &str = "/unlock";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=OtpEntryPage />
            <Route path=path!("/unlock") view=UnlockPage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
