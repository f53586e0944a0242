use crate::app::Route;
use crate::bridge;
use crate::session::Session;
use leptos::*;
use wasm_bindgen_futures::spawn_local;
use mission_core::chart::{y_axis_labels, ChartGeometry, ChartSeries};
use mission_core::summary::{ActivityPoint, DashboardSummary};

#[component]
pub fn DashboardView() -> impl IntoView {
    let session = expect_context::<Session>();
    let route = expect_context::<RwSignal<Route>>();

    let summary = create_rw_signal(None::<DashboardSummary>);
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    let token = session.token();
    spawn_local(async move {
        match bridge::fetch_summary(token.as_deref()).await {
            Ok(data) => {
                let _ = summary.try_set(Some(data));
                let _ = error.try_set(None);
            }
            Err(e) => {
                let _ = error.try_set(Some(e));
            }
        }
        let _ = loading.try_set(false);
    });

    view! {
      <section class="panel">
        <div class="page-head">
          <h2>"Dashboard"</h2>
          <div class="row">
            <button class="ghost" on:click=move |_| route.set(Route::Missions)>"Browse missions"</button>
            <button class="ghost" on:click=move |_| route.set(Route::MyMissions)>"My missions"</button>
          </div>
        </div>

        <Show when=move || loading.get() fallback=|| ()>
          <p class="meta">"Loading summary…"</p>
        </Show>

        {move || summary.get().map(|data| view! {
          <div class="stat-grid">
            <div class="stat-card">
              <span class="stat-value">{data.created_missions_count}</span>
              <span class="stat-label">"Created"</span>
            </div>
            <div class="stat-card">
              <span class="stat-value">{data.joined_missions_count}</span>
              <span class="stat-label">"Joined"</span>
            </div>
            <div class="stat-card">
              <span class="stat-value">{data.active_missions_count}</span>
              <span class="stat-label">"Active"</span>
            </div>
            <div class="stat-card">
              <span class="stat-value">{data.completed_missions_count}</span>
              <span class="stat-label">"Completed"</span>
            </div>
          </div>

          <h3>"Activity trend"</h3>
          <TrendChart points=data.chart_data.clone()/>
        })}

        <Show when=move || error.get().is_some() fallback=|| ()>
          <pre class="error">{move || error.get().unwrap_or_default()}</pre>
        </Show>
      </section>
    }
}

fn series_class(series: ChartSeries) -> &'static str {
    match series {
        ChartSeries::Created => "series-created",
        ChartSeries::Joined => "series-joined",
        ChartSeries::Completed => "series-completed",
        ChartSeries::Active => "series-active",
    }
}

/// Multi-series line chart over the daily activity buckets. All geometry
/// comes from the core projector; this component only emits SVG.
#[component]
fn TrendChart(points: Vec<ActivityPoint>) -> impl IntoView {
    let geo = ChartGeometry::default();

    let gridlines = y_axis_labels(&points)
        .into_iter()
        .map(|label| {
            let y = geo.project(0, label, &points, None).y;
            view! {
              <line
                class="gridline"
                x1={geo.padding}
                x2={geo.width - geo.padding}
                y1=y
                y2=y
              />
              <text class="axis-label" x={geo.padding - 8.0} y={y + 4.0}>{label}</text>
            }
        })
        .collect_view();

    let date_labels = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let x = geo.project(index, 0, &points, None).x;
            view! {
              <text class="axis-label date-label" x=x y={geo.height - geo.padding + 18.0}>
                {point.date.clone()}
              </text>
            }
        })
        .collect_view();

    let series = ChartSeries::ALL
        .into_iter()
        .map(|series| {
            let path = geo.smooth_path(&points, series);
            let markers = geo
                .series_points(&points, series)
                .into_iter()
                .map(|point| {
                    view! {
                      <circle class=series_class(series) cx=point.x cy=point.y r=3.0/>
                    }
                })
                .collect_view();
            view! {
              <path class=format!("series-line {}", series_class(series)) d=path fill="none"/>
              {markers}
            }
        })
        .collect_view();

    let legend = ChartSeries::ALL
        .into_iter()
        .map(|series| {
            view! {
              <span class="legend-entry">
                <span class=format!("legend-dot {}", series_class(series))></span>
                {series.label()}
              </span>
            }
        })
        .collect_view();

    view! {
      <div class="trend-chart">
        <svg viewBox=format!("0 0 {} {}", geo.width, geo.height)>
          {gridlines}
          {date_labels}
          {series}
        </svg>
        <div class="legend">{legend}</div>
      </div>
    }
}
