use crate::app::{confirm, Route};
use crate::bridge;
use crate::session::Session;
use leptos::*;
use wasm_bindgen_futures::spawn_local;
use mission_core::crew::{member_name, Member, Task};
use mission_core::evidence::{
    patch_description, remove_submission, EvidenceFilter, EvidenceSubmission,
};
use mission_core::files::{classify, file_ext};

#[component]
pub fn EvidenceView(mission_id: i32) -> impl IntoView {
    let session = expect_context::<Session>();
    let route = expect_context::<RwSignal<Route>>();
    let notice = expect_context::<RwSignal<Option<String>>>();

    let submissions = create_rw_signal(Vec::<EvidenceSubmission>::new());
    let members = create_rw_signal(Vec::<Member>::new());
    let tasks = create_rw_signal(Vec::<Task>::new());
    let is_chief = create_rw_signal(false);
    let filter = create_rw_signal(EvidenceFilter::default());
    let error = create_rw_signal(None::<String>);

    let selected = create_rw_signal(None::<EvidenceSubmission>);
    let draft_description = create_rw_signal(String::new());
    let saving = create_rw_signal(false);

    // The visible subset, recomputed whenever the base collection or any
    // predicate changes.
    let filtered = create_memo(move |_| {
        filter.with(|f| submissions.with(|base| f.visible(base)))
    });

    let load = move || {
        let token = session.token();
        let user_id = session.user_id();
        spawn_local(async move {
            let mission = match bridge::fetch_mission(mission_id, token.as_deref()).await {
                Ok(mission) => mission,
                Err(e) => {
                    let _ = error.try_set(Some(e));
                    return;
                }
            };
            let chief = Some(mission.chief_id) == user_id;
            let _ = is_chief.try_set(chief);

            let crew = match bridge::fetch_members(mission_id, token.as_deref()).await {
                Ok(crew) => crew,
                Err(e) => {
                    let _ = error.try_set(Some(e));
                    return;
                }
            };
            let is_member = crew.members.iter().any(|m| Some(m.id) == user_id);
            if !chief && !is_member {
                let _ = notice.try_set(Some("Access denied: you are not part of this mission".into()));
                let _ = route.try_set(Route::Missions);
                return;
            }
            let _ = members.try_set(crew.members);

            match bridge::fetch_submissions(mission_id, token.as_deref()).await {
                Ok(list) => {
                    let _ = submissions.try_set(list);
                }
                Err(e) => {
                    let _ = error.try_set(Some(format!("submissions: {e}")));
                }
            }
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
    load();

    let delete = move |submission_id: i32| {
        if !confirm("Are you sure you want to delete this evidence?") {
            return;
        }
        let token = session.token();
        spawn_local(async move {
            match bridge::delete_submission(mission_id, submission_id, token.as_deref()).await {
                Ok(()) => {
                    let _ = submissions.try_update(|base| remove_submission(base, submission_id));
                    let _ = notice.try_set(Some("Evidence deleted".into()));
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
        });
    };

    let save_details = move || {
        let Some(submission) = selected.get_untracked() else {
            return;
        };
        let description = draft_description.get_untracked();
        let token = session.token();
        saving.set(true);
        spawn_local(async move {
            match bridge::update_submission_details(
                mission_id,
                submission.id,
                &description,
                token.as_deref(),
            )
            .await
            {
                Ok(()) => {
                    let _ = submissions
                        .try_update(|base| patch_description(base, submission.id, &description));
                    let _ = notice.try_set(Some("Details updated".into()));
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
            let _ = saving.try_set(false);
        });
    };

    view! {
      <section class="panel">
        <div class="page-head">
          <h2>"Evidence Repository"</h2>
          <button class="ghost" on:click=move |_| route.set(Route::Workspace(mission_id))>"Back to workspace"</button>
        </div>

        <div class="row filter-bar">
          <select on:change=move |ev| {
              let value = event_target_value(&ev);
              filter.update(|f| f.member_id = value.parse::<i32>().ok());
          }>
            <option value="">"All Members"</option>
            <For
              each=move || members.get()
              key=|m| m.id
              children=|member| view! {
                <option value=member.id.to_string()>{member.display_name.clone()}</option>
              }
            />
          </select>

          <select on:change=move |ev| {
              let value = event_target_value(&ev);
              filter.update(|f| f.task_id = value.parse::<i32>().ok());
          }>
            <option value="">"All Tasks"</option>
            <For
              each=move || tasks.get()
              key=|t| t.id
              children=|task| view! {
                <option value=task.id.to_string()>{task.title.clone()}</option>
              }
            />
          </select>

          <input
            prop:value=move || filter.with(|f| f.search_text.clone())
            on:input=move |ev| filter.update(|f| f.search_text = event_target_value(&ev))
            placeholder="Filename..."
          />
        </div>

        <Show when=move || filter.with(|f| f.is_active()) fallback=|| ()>
          <div class="row active-filters">
            {move || filter.with(|f| f.member_id).map(|id| view! {
              <span class="chip">
                "Member: " {move || members.with(|m| member_name(m, id))}
                <button class="chip-close" on:click=move |_| filter.update(|f| f.member_id = None)>"×"</button>
              </span>
            })}
            {move || filter.with(|f| f.task_id).map(|id| view! {
              <span class="chip">
                {format!("Task: #{id}")}
                <button class="chip-close" on:click=move |_| filter.update(|f| f.task_id = None)>"×"</button>
              </span>
            })}
            {move || filter.with(|f| {
                (!f.search_text.is_empty()).then(|| f.search_text.clone())
            }).map(|text| view! {
              <span class="chip">
                {format!("Search: \"{text}\"")}
                <button class="chip-close" on:click=move |_| filter.update(|f| f.search_text.clear())>"×"</button>
              </span>
            })}
            <button class="ghost danger" on:click=move |_| filter.update(|f| f.clear())>
              "Clear all filters"
            </button>
          </div>
        </Show>

        <Show
          when=move || !filtered.with(|f| f.is_empty())
          fallback=|| view! {
            <div class="empty-state">
              <h3>"No matching evidence found"</h3>
              <p class="meta">
                "We couldn't find any files matching your current filters. \
                 Try searching for something else or clearing the filters."
              </p>
            </div>
          }
        >
          <ul class="evidence-grid">
            <For
              each=move || filtered.get()
              key=|s| s.id
              children=move |submission| {
                let submission_id = submission.id;
                let owner_id = submission.brawler_id;
                let kind = classify(&submission.file_type);
                let ext = file_ext(&submission.file_name);
                let avatar = submission
                    .brawler_avatar_url
                    .clone()
                    .unwrap_or_else(|| "assets/default-avatar.png".into());
                let submitted = submission.submitted_at.format("%b %e, %Y %H:%M").to_string();
                let for_details = submission.clone();
                let open_details = move |_| {
                    draft_description.set(
                        for_details.description.clone().unwrap_or_default(),
                    );
                    selected.set(Some(for_details.clone()));
                };
                view! {
                  <li class="evidence-card">
                    <div class="card-preview">
                      {if kind.is_image() {
                          view! { <img src=submission.file_url.clone() alt="Preview"/> }.into_view()
                      } else {
                          view! {
                            <div class=format!("file-icon {}", kind.css_class())>
                              <span class="icon-name">{kind.icon()}</span>
                              <span class="file-ext">{ext}</span>
                            </div>
                          }.into_view()
                      }}
                    </div>
                    <div class="card-body">
                      <b class="filename">{submission.file_name.clone()}</b>
                      <span class="meta">{submitted}</span>
                      <div class="submitter-bar">
                        <img class="avatar" src=avatar alt="Avatar"/>
                        <div class="member-info">
                          <span>{submission.brawler_name.clone()}</span>
                          <span class="meta">
                            {match submission.task_id {
                                Some(task_id) => format!("Task #{task_id}"),
                                None => "General Evidence".to_string(),
                            }}
                          </span>
                        </div>
                      </div>
                    </div>
                    <div class="row card-actions">
                      <Show
                        when=move || is_chief.get() || Some(owner_id) == session.user_id()
                        fallback=|| ()
                      >
                        <button class="danger" on:click=move |_| delete(submission_id)>"Delete"</button>
                      </Show>
                      <button on:click=open_details>"Details"</button>
                      <a class="ghost" href=submission.file_url.clone() target="_blank">"Raw"</a>
                    </div>
                  </li>
                }
              }
            />
          </ul>
        </Show>

        {move || selected.get().map(|submission| {
            let can_edit = Some(submission.brawler_id) == session.user_id();
            let task_title = submission
                .task_id
                .and_then(|id| tasks.with(|t| t.iter().find(|t| t.id == id).map(|t| t.title.clone())))
                .unwrap_or_else(|| "General Work".to_string());
            view! {
              <div class="detail-panel">
                <div class="page-head">
                  <h3>{submission.file_name.clone()}</h3>
                  <button class="ghost" on:click=move |_| selected.set(None)>"Close"</button>
                </div>
                <p class="meta">
                  {format!("Submitted by {} for {}", submission.brawler_name, task_title)}
                </p>
                <textarea
                  prop:value=move || draft_description.get()
                  on:input=move |ev| draft_description.set(event_target_value(&ev))
                  disabled=!can_edit
                  placeholder="Describe this evidence..."
                ></textarea>
                <Show when=move || can_edit fallback=|| ()>
                  <button disabled=move || saving.get() on:click=move |_| save_details()>
                    {move || if saving.get() { "Saving..." } else { "Save details" }}
                  </button>
                </Show>
              </div>
            }
        })}

        <Show when=move || error.get().is_some() fallback=|| ()>
          <pre class="error">{move || error.get().unwrap_or_default()}</pre>
        </Show>
      </section>
    }
}
