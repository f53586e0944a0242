use mission_core::crew::{CreateTask, CrewList, Task};
use mission_core::evidence::EvidenceSubmission;
use mission_core::mission::{AddMission, EditMission, Mission, MissionFilter};
use mission_core::passport::{Login, Passport, Register};
use mission_core::summary::DashboardSummary;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn api_base() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8000".to_string())
}

async fn send(
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<String>,
) -> Result<JsValue, String> {
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;

    let headers = web_sys::Headers::new().map_err(|e| format!("headers unavailable: {e:?}"))?;
    headers
        .append("Accept", "application/json")
        .map_err(|e| format!("invalid header: {e:?}"))?;
    if body.is_some() {
        headers
            .append("Content-Type", "application/json")
            .map_err(|e| format!("invalid header: {e:?}"))?;
    }
    if let Some(token) = token {
        headers
            .append("Authorization", &format!("Bearer {token}"))
            .map_err(|e| format!("invalid header: {e:?}"))?;
    }

    let init = web_sys::RequestInit::new();
    init.set_method(method);
    init.set_headers(headers.as_ref());
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{}{}", api_base(), path);
    let response = JsFuture::from(window.fetch_with_str_and_init(&url, &init))
        .await
        .map_err(|e| format!("request failed: {e:?}"))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;

    if !response.ok() {
        let text = match response.text() {
            Ok(promise) => JsFuture::from(promise).await.ok().and_then(|v| v.as_string()),
            Err(_) => None,
        };
        return Err(text
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("request failed with status {}", response.status())));
    }

    let json = response.json().map_err(|e| format!("invalid body: {e:?}"))?;
    JsFuture::from(json)
        .await
        .map_err(|e| format!("invalid body: {e:?}"))
}

async fn get_json<R: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<R, String> {
    let value = send("GET", path, token, None).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

async fn send_json<B: Serialize, R: DeserializeOwned>(
    method: &str,
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<R, String> {
    let body = serde_json::to_string(body).map_err(|e| e.to_string())?;
    let value = send(method, path, token, Some(body)).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

// Commands whose response body is just a confirmation message.
async fn send_command<B: Serialize>(
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<&B>,
) -> Result<(), String> {
    let body = body
        .map(|b| serde_json::to_string(b).map_err(|e| e.to_string()))
        .transpose()?;
    send(method, path, token, body).await.map(|_| ())
}

pub async fn login(login: &Login) -> Result<Passport, String> {
    send_json("POST", "/api/authentication/login", None, login).await
}

pub async fn register(register: &Register) -> Result<Passport, String> {
    send_json("POST", "/api/authentication/register", None, register).await
}

pub async fn fetch_summary(token: Option<&str>) -> Result<DashboardSummary, String> {
    get_json("/api/dashboard/summary", token).await
}

pub async fn fetch_filtered_missions(
    filter: &MissionFilter,
    token: Option<&str>,
) -> Result<Vec<Mission>, String> {
    get_json(&format!("/api/view/filter?{}", filter.query_string()), token).await
}

pub async fn fetch_mission(mission_id: i32, token: Option<&str>) -> Result<Mission, String> {
    get_json(&format!("/api/view/{mission_id}"), token).await
}

pub async fn fetch_my_missions(token: Option<&str>) -> Result<Vec<Mission>, String> {
    get_json("/api/brawler/missions", token).await
}

pub async fn fetch_joined_missions(token: Option<&str>) -> Result<Vec<Mission>, String> {
    get_json("/api/missions/joined", token).await
}

pub async fn create_mission(mission: &AddMission, token: Option<&str>) -> Result<i32, String> {
    #[derive(serde::Deserialize)]
    struct MissionCreated {
        mission_id: i32,
    }
    let created: MissionCreated =
        send_json("POST", "/api/mission-management", token, mission).await?;
    Ok(created.mission_id)
}

pub async fn update_mission(
    mission_id: i32,
    mission: &EditMission,
    token: Option<&str>,
) -> Result<(), String> {
    send_command(
        "PATCH",
        &format!("/api/mission-management/{mission_id}"),
        token,
        Some(mission),
    )
    .await
}

pub async fn delete_mission(mission_id: i32, token: Option<&str>) -> Result<(), String> {
    send_command::<()>(
        "DELETE",
        &format!("/api/mission-management/{mission_id}"),
        token,
        None,
    )
    .await
}

pub async fn join_mission(mission_id: i32, token: Option<&str>) -> Result<(), String> {
    send_command::<()>("POST", &format!("/api/missions/{mission_id}/join"), token, None).await
}

pub async fn leave_mission(mission_id: i32, token: Option<&str>) -> Result<(), String> {
    send_command::<()>(
        "DELETE",
        &format!("/api/missions/{mission_id}/leave"),
        token,
        None,
    )
    .await
}

pub async fn fetch_members(mission_id: i32, token: Option<&str>) -> Result<CrewList, String> {
    get_json(&format!("/api/missions/{mission_id}/members"), token).await
}

pub async fn update_member_role(
    mission_id: i32,
    brawler_id: i32,
    role: &str,
    token: Option<&str>,
) -> Result<(), String> {
    send_command(
        "POST",
        &format!("/api/missions/{mission_id}/members/{brawler_id}/role"),
        token,
        Some(&serde_json::json!({ "role": role })),
    )
    .await
}

pub async fn kick_member(
    mission_id: i32,
    brawler_id: i32,
    token: Option<&str>,
) -> Result<(), String> {
    send_command::<()>(
        "DELETE",
        &format!("/api/missions/{mission_id}/members/{brawler_id}/kick"),
        token,
        None,
    )
    .await
}

pub async fn update_settings(
    mission_id: i32,
    max_members: i32,
    token: Option<&str>,
) -> Result<(), String> {
    send_command(
        "POST",
        &format!("/api/missions/{mission_id}/settings"),
        token,
        Some(&serde_json::json!({ "max_members": max_members })),
    )
    .await
}

pub async fn fetch_tasks(mission_id: i32, token: Option<&str>) -> Result<Vec<Task>, String> {
    get_json(&format!("/api/missions/{mission_id}/tasks"), token).await
}

pub async fn create_task(
    mission_id: i32,
    task: &CreateTask,
    token: Option<&str>,
) -> Result<(), String> {
    send_command(
        "POST",
        &format!("/api/missions/{mission_id}/tasks"),
        token,
        Some(task),
    )
    .await
}

pub async fn delete_task(mission_id: i32, task_id: i32, token: Option<&str>) -> Result<(), String> {
    send_command::<()>(
        "DELETE",
        &format!("/api/missions/{mission_id}/tasks/{task_id}"),
        token,
        None,
    )
    .await
}

pub async fn fetch_submissions(
    mission_id: i32,
    token: Option<&str>,
) -> Result<Vec<EvidenceSubmission>, String> {
    get_json(&format!("/api/missions/{mission_id}/submissions"), token).await
}

pub async fn delete_submission(
    mission_id: i32,
    submission_id: i32,
    token: Option<&str>,
) -> Result<(), String> {
    send_command::<()>(
        "DELETE",
        &format!("/api/missions/{mission_id}/submissions/{submission_id}"),
        token,
        None,
    )
    .await
}

pub async fn update_submission_details(
    mission_id: i32,
    submission_id: i32,
    description: &str,
    token: Option<&str>,
) -> Result<(), String> {
    send_command(
        "PATCH",
        &format!("/api/missions/{mission_id}/submissions/{submission_id}/details"),
        token,
        Some(&serde_json::json!({ "description": description })),
    )
    .await
}
