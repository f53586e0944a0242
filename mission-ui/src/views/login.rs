use crate::app::Route;
use crate::bridge;
use crate::session::Session;
use leptos::*;
use wasm_bindgen_futures::spawn_local;
use mission_core::passport::{Login, Register};
use mission_core::validate::{validate_login, validate_register};

#[component]
pub fn LoginView() -> impl IntoView {
    let session = expect_context::<Session>();
    let route = expect_context::<RwSignal<Route>>();

    let registering = create_rw_signal(false);
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let display_name = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let busy = create_rw_signal(false);

    let finish = move |outcome: Result<mission_core::passport::Passport, String>| {
        match outcome {
            Ok(passport) => {
                session.signin(passport);
                let _ = error.try_set(None);
                let _ = route.try_set(Route::Dashboard);
            }
            Err(e) => {
                let _ = error.try_set(Some(e));
            }
        }
        let _ = busy.try_set(false);
    };

    let submit = move || {
        if busy.get_untracked() {
            return;
        }
        error.set(None);

        if registering.get_untracked() {
            let payload = Register {
                username: username.get_untracked(),
                password: password.get_untracked(),
                display_name: display_name.get_untracked(),
            };
            if let Err(message) = validate_register(&payload) {
                error.set(Some(message));
                return;
            }
            busy.set(true);
            spawn_local(async move {
                finish(bridge::register(&payload).await);
            });
        } else {
            let payload = Login {
                username: username.get_untracked(),
                password: password.get_untracked(),
            };
            if let Err(message) = validate_login(&payload) {
                error.set(Some(message));
                return;
            }
            busy.set(true);
            spawn_local(async move {
                finish(bridge::login(&payload).await);
            });
        }
    };

    view! {
      <section class="panel login-panel">
        <h2>{move || if registering.get() { "Create account" } else { "Sign in" }}</h2>

        <div class="stack">
          <input
            prop:value=move || username.get()
            on:input=move |ev| username.set(event_target_value(&ev))
            placeholder="Username"
          />
          <input
            type="password"
            prop:value=move || password.get()
            on:input=move |ev| password.set(event_target_value(&ev))
            placeholder="Password"
          />
          <Show when=move || registering.get() fallback=|| ()>
            <input
              prop:value=move || display_name.get()
              on:input=move |ev| display_name.set(event_target_value(&ev))
              placeholder="Display name"
            />
          </Show>

          <div class="row">
            <button disabled=move || busy.get() on:click=move |_| submit()>
              {move || if registering.get() { "Register" } else { "Sign in" }}
            </button>
            <button class="ghost" on:click=move |_| registering.set(!registering.get_untracked())>
              {move || if registering.get() { "I have an account" } else { "I need an account" }}
            </button>
          </div>
        </div>

        <Show when=move || error.get().is_some() fallback=|| ()>
          <pre class="error">{move || error.get().unwrap_or_default()}</pre>
        </Show>
      </section>
    }
}
