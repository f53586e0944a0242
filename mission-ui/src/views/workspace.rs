use crate::app::{confirm, Route};
use crate::bridge;
use crate::session::Session;
use leptos::*;
use wasm_bindgen_futures::spawn_local;
use mission_core::crew::{member_name, CreateTask, CrewList, Task, AVAILABLE_ROLES};
use mission_core::mission::{EditMission, Mission};
use mission_core::validate::{validate_max_members, validate_new_task};

#[component]
pub fn WorkspaceView(mission_id: i32) -> impl IntoView {
    let session = expect_context::<Session>();
    let route = expect_context::<RwSignal<Route>>();
    let notice = expect_context::<RwSignal<Option<String>>>();

    let mission = create_rw_signal(None::<Mission>);
    let crew = create_rw_signal(CrewList::default());
    let tasks = create_rw_signal(Vec::<Task>::new());
    let error = create_rw_signal(None::<String>);

    let task_title = create_rw_signal(String::new());
    let task_description = create_rw_signal(String::new());
    let task_assignee = create_rw_signal(String::new());
    let task_priority = create_rw_signal("Medium".to_string());
    let max_members_draft = create_rw_signal(String::new());
    let name_draft = create_rw_signal(String::new());

    let is_chief = create_memo(move |_| {
        mission.with(|m| m.as_ref().map(|m| m.chief_id)) == session.user_id()
    });

    let load_tasks = move || {
        let token = session.token();
        spawn_local(async move {
            match bridge::fetch_tasks(mission_id, token.as_deref()).await {
                Ok(list) => {
                    let _ = tasks.try_set(list);
                }
                Err(e) => {
                    let _ = error.try_set(Some(format!("tasks: {e}")));
                }
            }
        });
    };

    let load = move || {
        let token = session.token();
        spawn_local(async move {
            match bridge::fetch_members(mission_id, token.as_deref()).await {
                Ok(list) => {
                    let _ = crew.try_set(list);
                }
                Err(e) => {
                    let _ = error.try_set(Some(format!("members: {e}")));
                }
            }
            match bridge::fetch_mission(mission_id, token.as_deref()).await {
                Ok(m) => {
                    let _ = max_members_draft.try_set(m.max_members.to_string());
                    let _ = name_draft.try_set(m.name.clone());
                    let _ = mission.try_set(Some(m));
                }
                Err(e) => {
                    let _ = error.try_set(Some(format!("mission: {e}")));
                }
            }
        });
        load_tasks();
    };
    load();

    let update_role = move |member_id: i32, role: String| {
        let token = session.token();
        spawn_local(async move {
            match bridge::update_member_role(mission_id, member_id, &role, token.as_deref()).await {
                Ok(()) => {
                    let _ = notice.try_set(Some("Member role updated".into()));
                    load();
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
        });
    };

    let kick = move |member_id: i32| {
        if !confirm("Are you sure you want to remove this member?") {
            return;
        }
        let token = session.token();
        spawn_local(async move {
            match bridge::kick_member(mission_id, member_id, token.as_deref()).await {
                Ok(()) => {
                    let _ = notice.try_set(Some("Member removed".into()));
                    load();
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
        });
    };

    let rename = move || {
        let name = name_draft.get_untracked().trim().to_string();
        if name.is_empty() {
            error.set(Some("mission name is required".into()));
            return;
        }
        let edit = EditMission {
            name: Some(name),
            ..Default::default()
        };
        let token = session.token();
        spawn_local(async move {
            match bridge::update_mission(mission_id, &edit, token.as_deref()).await {
                Ok(()) => {
                    let _ = notice.try_set(Some("Mission updated".into()));
                    load();
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
        });
    };

    let save_settings = move || {
        let Ok(value) = max_members_draft.get_untracked().trim().parse::<i32>() else {
            error.set(Some("team size must be a number".into()));
            return;
        };
        if let Err(message) = validate_max_members(value) {
            error.set(Some(message));
            return;
        }
        let token = session.token();
        spawn_local(async move {
            match bridge::update_settings(mission_id, value, token.as_deref()).await {
                Ok(()) => {
                    let _ = notice.try_set(Some("Max members updated".into()));
                    load();
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
        });
    };

    let create_task = move || {
        let task = CreateTask {
            title: task_title.get_untracked(),
            description: Some(task_description.get_untracked()).filter(|d| !d.trim().is_empty()),
            member_id: task_assignee.get_untracked().parse::<i32>().ok(),
            priority: Some(task_priority.get_untracked()),
            start_date: None,
            end_date: None,
        };
        if let Err(message) = validate_new_task(&task) {
            error.set(Some(message));
            return;
        }
        let token = session.token();
        spawn_local(async move {
            match bridge::create_task(mission_id, &task, token.as_deref()).await {
                Ok(()) => {
                    let _ = task_title.try_set(String::new());
                    let _ = task_description.try_set(String::new());
                    let _ = notice.try_set(Some("Task created".into()));
                    load_tasks();
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
        });
    };

    let delete_task = move |task_id: i32| {
        if !confirm("Delete this task?") {
            return;
        }
        let token = session.token();
        spawn_local(async move {
            match bridge::delete_task(mission_id, task_id, token.as_deref()).await {
                Ok(()) => {
                    let _ = notice.try_set(Some("Task deleted".into()));
                    load_tasks();
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
          <h2>{move || mission.with(|m| m.as_ref().map(|m| m.name.clone()).unwrap_or_else(|| "Workspace".into()))}</h2>
          <div class="row">
            <button class="ghost" on:click=move |_| route.set(Route::Evidence(mission_id))>"Evidence"</button>
            <button class="ghost" on:click=move |_| route.set(Route::MyMissions)>"Back"</button>
          </div>
        </div>

        <h3>
          "Crew "
          <span class="meta">
            {move || crew.with(|c| format!("{}/{}", c.count, c.max_count))}
          </span>
        </h3>
        <ul class="member-list">
          <For
            each=move || crew.with(|c| c.members.clone())
            key=|m| m.id
            children=move |member| {
              let member_id = member.id;
              let current_role = member.role.clone();
              let chief_row = move || {
                  mission.with(|m| m.as_ref().map(|m| m.chief_id)) == Some(member_id)
              };
              view! {
                <li class="member-row">
                  <img class="avatar" src=member.avatar_url.clone() alt="Avatar"/>
                  <div class="member-info">
                    <b>{member.display_name.clone()}</b>
                    <span class="meta">
                      {format!(
                          "{} wins / {} joined",
                          member.mission_success_count, member.mission_join_count,
                      )}
                    </span>
                  </div>
                  <Show
                    when=move || is_chief.get() && !chief_row()
                    fallback=move || view! {
                      <span class="badge">
                        {if chief_row() { "Chief".to_string() } else { current_role.clone() }}
                      </span>
                    }
                  >
                    <select on:change=move |ev| update_role(member_id, event_target_value(&ev))>
                      {AVAILABLE_ROLES
                          .into_iter()
                          .map(|role| {
                              let selected = role == member.role;
                              view! { <option value=role selected=selected>{role}</option> }
                          })
                          .collect_view()}
                    </select>
                    <button class="danger" on:click=move |_| kick(member_id)>"Kick"</button>
                  </Show>
                </li>
              }
            }
          />
        </ul>

        <Show when=move || is_chief.get() fallback=|| ()>
          <div class="row settings-row">
            <label class="meta">"Mission name"</label>
            <input
              prop:value=move || name_draft.get()
              on:input=move |ev| name_draft.set(event_target_value(&ev))
            />
            <button on:click=move |_| rename()>"Rename"</button>
            <label class="meta">"Max operatives"</label>
            <input
              type="number"
              prop:value=move || max_members_draft.get()
              on:input=move |ev| max_members_draft.set(event_target_value(&ev))
            />
            <button on:click=move |_| save_settings()>"Save"</button>
          </div>
        </Show>

        <h3>"Tasks"</h3>
        <Show
          when=move || !tasks.with(|t| t.is_empty())
          fallback=|| view! { <p class="meta">"No tasks yet."</p> }
        >
          <ul class="task-list">
            <For
              each=move || tasks.get()
              key=|t| t.id
              children=move |task| {
                let task_id = task.id;
                let has_submission = task.has_submission;
                let assignee = task
                    .member_id
                    .map(|id| crew.with_untracked(|c| member_name(&c.members, id)));
                view! {
                  <li class="task-row">
                    <div class="member-info">
                      <b>{task.title.clone()}</b>
                      <span class="meta">
                        {match assignee {
                            Some(name) => format!("{} · {} · {}", task.priority, task.status, name),
                            None => format!("{} · {} · unassigned", task.priority, task.status),
                        }}
                      </span>
                    </div>
                    <Show when=move || has_submission fallback=|| ()>
                      <span class="badge ok">"evidence"</span>
                    </Show>
                    <Show when=move || is_chief.get() fallback=|| ()>
                      <button class="danger" on:click=move |_| delete_task(task_id)>"Delete"</button>
                    </Show>
                  </li>
                }
              }
            />
          </ul>
        </Show>

        <div class="stack new-task-form">
          <h3>"New task"</h3>
          <input
            prop:value=move || task_title.get()
            on:input=move |ev| task_title.set(event_target_value(&ev))
            placeholder="Title"
          />
          <input
            prop:value=move || task_description.get()
            on:input=move |ev| task_description.set(event_target_value(&ev))
            placeholder="Description (optional)"
          />
          <div class="row">
            <select on:change=move |ev| task_assignee.set(event_target_value(&ev))>
              <option value="">"Unassigned"</option>
              <For
                each=move || crew.with(|c| c.members.clone())
                key=|m| m.id
                children=|member| view! {
                  <option value=member.id.to_string()>{member.display_name.clone()}</option>
                }
              />
            </select>
            <select on:change=move |ev| task_priority.set(event_target_value(&ev))>
              <option value="Low">"Low"</option>
              <option value="Medium" selected=true>"Medium"</option>
              <option value="High">"High"</option>
            </select>
            <button on:click=move |_| create_task()>"Create"</button>
          </div>
        </div>

        <Show when=move || error.get().is_some() fallback=|| ()>
          <pre class="error">{move || error.get().unwrap_or_default()}</pre>
        </Show>
      </section>
    }
}
