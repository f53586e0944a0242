use crate::app::{confirm, Route};
use crate::bridge;
use crate::session::Session;
use leptos::*;
use wasm_bindgen_futures::spawn_local;
use mission_core::mission::{clean_new_mission, AddMission, Mission};

#[component]
pub fn MyMissionsView() -> impl IntoView {
    let session = expect_context::<Session>();
    let route = expect_context::<RwSignal<Route>>();
    let notice = expect_context::<RwSignal<Option<String>>>();

    let created = create_rw_signal(Vec::<Mission>::new());
    let joined = create_rw_signal(Vec::<Mission>::new());
    let error = create_rw_signal(None::<String>);

    let new_name = create_rw_signal(String::new());
    let new_description = create_rw_signal(String::new());
    let adding = create_rw_signal(false);

    let load = move || {
        let token = session.token();
        spawn_local(async move {
            match bridge::fetch_my_missions(token.as_deref()).await {
                Ok(list) => {
                    let _ = created.try_set(list);
                }
                Err(e) => {
                    let _ = error.try_set(Some(format!("created missions: {e}")));
                }
            }
            match bridge::fetch_joined_missions(token.as_deref()).await {
                Ok(list) => {
                    let _ = joined.try_set(list);
                }
                Err(e) => {
                    let _ = error.try_set(Some(format!("joined missions: {e}")));
                }
            }
        });
    };
    load();

    let create = move || {
        let mission = clean_new_mission(AddMission {
            name: new_name.get_untracked(),
            description: Some(new_description.get_untracked()),
        });
        let token = session.token();
        spawn_local(async move {
            match bridge::create_mission(&mission, token.as_deref()).await {
                Ok(_) => {
                    let _ = new_name.try_set(String::new());
                    let _ = new_description.try_set(String::new());
                    let _ = adding.try_set(false);
                    let _ = notice.try_set(Some("Mission created".into()));
                    load();
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
        });
    };

    let delete = move |mission_id: i32| {
        if !confirm("Delete this mission?") {
            return;
        }
        let token = session.token();
        spawn_local(async move {
            match bridge::delete_mission(mission_id, token.as_deref()).await {
                Ok(()) => {
                    let _ = created.try_update(|list| list.retain(|m| m.id != mission_id));
                    let _ = notice.try_set(Some("Mission deleted".into()));
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
        });
    };

    let leave = move |mission_id: i32| {
        if !confirm("Are you sure you want to leave this mission?") {
            return;
        }
        let token = session.token();
        spawn_local(async move {
            match bridge::leave_mission(mission_id, token.as_deref()).await {
                Ok(()) => {
                    let _ = joined.try_update(|list| list.retain(|m| m.id != mission_id));
                    let _ = notice.try_set(Some("You have left the mission".into()));
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
        });
    };

    view! {
      <section class="panel">
        <div class="page-head">
          <h2>"My Missions"</h2>
          <button on:click=move |_| adding.set(!adding.get_untracked())>
            {move || if adding.get() { "Cancel" } else { "New mission" }}
          </button>
        </div>

        <Show when=move || adding.get() fallback=|| ()>
          <div class="stack new-mission-form">
            <input
              prop:value=move || new_name.get()
              on:input=move |ev| new_name.set(event_target_value(&ev))
              placeholder="Mission name"
            />
            <input
              prop:value=move || new_description.get()
              on:input=move |ev| new_description.set(event_target_value(&ev))
              placeholder="Description (optional)"
            />
            <div class="row">
              <button on:click=move |_| create()>"Create"</button>
            </div>
          </div>
        </Show>

        <h3>"Missions I lead"</h3>
        <ul class="card-list">
          <For
            each=move || created.get()
            key=|m| m.id
            children=move |mission| {
              let mission_id = mission.id;
              view! {
                <li class="card">
                  <div class="card-head">
                    <b>{mission.name.clone()}</b>
                    <span class="badge">{mission.status.clone()}</span>
                  </div>
                  <div class="meta">
                    {format!("{}/{} members", mission.member_count, mission.max_members)}
                  </div>
                  <div class="row">
                    <button on:click=move |_| route.set(Route::Workspace(mission_id))>"Workspace"</button>
                    <button class="danger" on:click=move |_| delete(mission_id)>"Delete"</button>
                  </div>
                </li>
              }
            }
          />
        </ul>

        <h3>"Missions I joined"</h3>
        <Show
          when=move || !joined.with(|m| m.is_empty())
          fallback=|| view! { <p class="meta">"You have not joined any missions yet."</p> }
        >
          <ul class="card-list">
            <For
              each=move || joined.get()
              key=|m| m.id
              children=move |mission| {
                let mission_id = mission.id;
                view! {
                  <li class="card">
                    <div class="card-head">
                      <b>{mission.name.clone()}</b>
                      <span class="badge">{mission.status.clone()}</span>
                    </div>
                    <div class="meta">{format!("Chief {}", mission.chief_display_name)}</div>
                    <div class="row">
                      <button on:click=move |_| route.set(Route::Workspace(mission_id))>"Workspace"</button>
                      <button class="danger" on:click=move |_| leave(mission_id)>"Leave"</button>
                    </div>
                  </li>
                }
              }
            />
          </ul>
        </Show>

        <Show when=move || error.get().is_some() fallback=|| ()>
          <pre class="error">{move || error.get().unwrap_or_default()}</pre>
        </Show>
      </section>
    }
}
