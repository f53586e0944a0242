use crate::app::Route;
use crate::bridge;
use crate::session::Session;
use leptos::*;
use wasm_bindgen_futures::spawn_local;
use mission_core::mission::{browseable, Mission, MissionFilter, MISSION_STATUSES};

#[component]
pub fn MissionsView() -> impl IntoView {
    let session = expect_context::<Session>();
    let route = expect_context::<RwSignal<Route>>();
    let notice = expect_context::<RwSignal<Option<String>>>();

    let name = create_rw_signal(String::new());
    let status = create_rw_signal(String::new());
    let missions = create_rw_signal(Vec::<Mission>::new());
    let error = create_rw_signal(None::<String>);

    let load = move || {
        let filter = MissionFilter {
            name: Some(name.get_untracked()).filter(|n| !n.is_empty()),
            status: Some(status.get_untracked()).filter(|s| !s.is_empty()),
        };
        let user_id = session.user_id();
        let token = session.token();
        spawn_local(async move {
            match bridge::fetch_filtered_missions(&filter, token.as_deref()).await {
                Ok(list) => {
                    let _ = missions.try_set(browseable(list, user_id));
                    let _ = error.try_set(None);
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
        });
    };
    load();

    let join = move |mission_id: i32| {
        let token = session.token();
        spawn_local(async move {
            match bridge::join_mission(mission_id, token.as_deref()).await {
                Ok(()) => {
                    let _ = missions.try_update(|list| list.retain(|m| m.id != mission_id));
                    let _ = notice.try_set(Some("You have joined the mission".into()));
                    let _ = route.try_set(Route::Workspace(mission_id));
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
          <h2>"Missions"</h2>
          <div class="row">
            <input
              prop:value=move || name.get()
              on:input=move |ev| name.set(event_target_value(&ev))
              placeholder="Search by name"
            />
            <select on:change=move |ev| status.set(event_target_value(&ev))>
              <option value="">"Any status"</option>
              {MISSION_STATUSES
                  .into_iter()
                  .map(|s| view! { <option value=s>{s}</option> })
                  .collect_view()}
            </select>
            <button on:click=move |_| load()>"Filter"</button>
          </div>
        </div>

        <Show
          when=move || !missions.with(|m| m.is_empty())
          fallback=|| view! { <p class="meta">"No open missions match your filter."</p> }
        >
          <ul class="card-list">
            <For
              each=move || missions.get()
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
                      {format!(
                          "Chief {} · {}/{} members",
                          mission.chief_display_name, mission.member_count, mission.max_members,
                      )}
                    </div>
                    {mission.description.clone().map(|d| view! { <p>{d}</p> })}
                    <div class="row">
                      <Show when=move || session.is_signed_in() fallback=|| ()>
                        <button on:click=move |_| join(mission_id)>"Join"</button>
                      </Show>
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
