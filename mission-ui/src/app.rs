use crate::session::Session;
use crate::theme::Theme;
use crate::views::{
    DashboardView, EvidenceView, LoginView, MissionsView, MyMissionsView, WorkspaceView,
};
use leptos::*;

/// The routed screens. Workspace and evidence carry the mission they show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Missions,
    MyMissions,
    Workspace(i32),
    Evidence(i32),
}

/// Native confirm dialog, used before destructive actions.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn App() -> impl IntoView {
    let session = Session::load();
    let theme = Theme::load();
    let route = create_rw_signal(if session.is_signed_in() {
        Route::Dashboard
    } else {
        Route::Login
    });
    let notice = create_rw_signal(None::<String>);

    provide_context(session);
    provide_context(route);
    provide_context(notice);

    let logout = move |_| {
        session.logout();
        route.set(Route::Login);
    };

    view! {
      <div class="shell">
        <header class="navbar">
          <span class="brand" on:click=move |_| route.set(Route::Dashboard)>"Squadline"</span>

          <Show when=move || session.is_signed_in() fallback=|| ()>
            <nav class="nav-links">
              <button
                class=move || nav_class(route.get() == Route::Dashboard)
                on:click=move |_| route.set(Route::Dashboard)
              >"Dashboard"</button>
              <button
                class=move || nav_class(route.get() == Route::Missions)
                on:click=move |_| route.set(Route::Missions)
              >"Missions"</button>
              <button
                class=move || nav_class(route.get() == Route::MyMissions)
                on:click=move |_| route.set(Route::MyMissions)
              >"My Missions"</button>
            </nav>
          </Show>

          <div class="nav-side">
            <button class="ghost" on:click=move |_| theme.toggle()>
              {move || if theme.is_dark() { "Light mode" } else { "Dark mode" }}
            </button>
            <Show
              when=move || session.is_signed_in()
              fallback=move || view! {
                <button class="ghost" on:click=move |_| route.set(Route::Login)>"Sign in"</button>
              }
            >
              <span class="meta">{move || session.display_name().unwrap_or_default()}</span>
              <button class="ghost" on:click=logout>"Logout"</button>
            </Show>
          </div>
        </header>

        <Show when=move || notice.get().is_some() fallback=|| ()>
          <div class="notice" on:click=move |_| notice.set(None)>
            {move || notice.get().unwrap_or_default()}
            <span class="meta">" (dismiss)"</span>
          </div>
        </Show>

        <main class="content">
          {move || match route.get() {
              Route::Login => view! { <LoginView/> }.into_view(),
              Route::Dashboard => view! { <DashboardView/> }.into_view(),
              Route::Missions => view! { <MissionsView/> }.into_view(),
              Route::MyMissions => view! { <MyMissionsView/> }.into_view(),
              Route::Workspace(mission_id) => view! { <WorkspaceView mission_id=mission_id/> }.into_view(),
              Route::Evidence(mission_id) => view! { <EvidenceView mission_id=mission_id/> }.into_view(),
          }}
        </main>
      </div>
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}
