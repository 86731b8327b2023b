//! メインアプリケーションコンポーネント

use gloo::events::EventListener;
use leptos::prelude::*;

use crate::api::new_client;
use crate::components::{
    main_layout::MainLayout,
    toast::{provide_toasts, ToastHost},
};
use crate::pages::{
    address_analysis::AddressAnalysis, address_records::AddressRecords, dashboard::Dashboard,
};
use crate::routes::{current_route, Route};

#[component]
pub fn App() -> impl IntoView {
    provide_context(new_client());
    provide_toasts();

    let (route, set_route) = signal(current_route());

    // アプリと同じ寿命なので解除しない
    EventListener::new(&gloo::utils::window(), "hashchange", move |_| {
        let next = current_route();
        log::debug!("route changed: {:?}", next);
        set_route.set(next);
    })
    .forget();

    view! {
        <ToastHost />
        <MainLayout route=route>
            {move || match route.get() {
                Route::Dashboard => view! { <Dashboard /> }.into_any(),
                Route::AddressAnalysis => view! { <AddressAnalysis /> }.into_any(),
                Route::AddressRecords => view! { <AddressRecords /> }.into_any(),
            }}
        </MainLayout>
    }
}
