use mission_core::chart::{max_value, y_axis_labels, ChartGeometry, ChartSeries};
use mission_core::evidence::{EvidenceFilter, EvidenceSubmission};
use mission_core::summary::DashboardSummary;

fn summary_payload() -> DashboardSummary {
    serde_json::from_value(serde_json::json!({
        "created_missions_count": 4,
        "joined_missions_count": 9,
        "active_missions_count": 3,
        "completed_missions_count": 2,
        "chart_data": [
            { "date": "2026-07-01", "created": 1, "joined": 2, "completed": 0, "active": 1 },
            { "date": "2026-07-02", "created": 0, "joined": 4, "completed": 1, "active": 2 },
            { "date": "2026-07-03", "created": 3, "joined": 0, "completed": 0, "active": 3 },
            { "date": "2026-07-04", "created": 0, "joined": 7, "completed": 1, "active": 2 }
        ]
    }))
    .expect("summary payload")
}

fn submissions_payload() -> Vec<EvidenceSubmission> {
    serde_json::from_value(serde_json::json!([
        {
            "id": 1,
            "mission_id": 10,
            "brawler_id": 7,
            "brawler_name": "Ana",
            "file_url": "https://files.example/report.pdf",
            "file_name": "report.pdf",
            "file_type": "application/pdf",
            "submitted_at": "2026-07-01T10:00:00Z",
            "task_id": 3,
            "brawler_avatar_url": null,
            "description": "weekly report"
        },
        {
            "id": 2,
            "mission_id": 10,
            "brawler_id": 9,
            "brawler_name": "Rui",
            "file_url": "https://files.example/Photo.JPG",
            "file_name": "Photo.JPG",
            "file_type": "image/jpeg",
            "submitted_at": "2026-07-02T11:30:00Z",
            "task_id": null,
            "brawler_avatar_url": "https://files.example/rui.png",
            "description": null
        }
    ]))
    .expect("submissions payload")
}

#[test]
fn chart_pipeline_over_a_fetched_summary() {
    let summary = summary_payload();
    let geo = ChartGeometry::default();

    // Observed max is 7 (joined on the last bucket).
    assert_eq!(max_value(&summary.chart_data), 15);

    let labels = y_axis_labels(&summary.chart_data);
    assert_eq!(labels, vec![15, 10, 5, 0]);

    for series in ChartSeries::ALL {
        let path = geo.smooth_path(&summary.chart_data, series);
        assert!(path.starts_with("M "));
        assert_eq!(path.matches(" C ").count(), summary.chart_data.len() - 1);

        let markers = geo.series_points(&summary.chart_data, series);
        assert_eq!(markers.len(), summary.chart_data.len());
        for marker in &markers {
            assert!(marker.x >= geo.padding);
            assert!(marker.x <= geo.width - geo.padding);
        }
    }
}

#[test]
fn filter_pipeline_over_fetched_submissions() {
    let base = submissions_payload();

    let by_member = EvidenceFilter {
        member_id: Some(7),
        ..Default::default()
    };
    let visible = by_member.visible(&base);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].file_name, "report.pdf");

    let by_search = EvidenceFilter {
        search_text: "photo".into(),
        ..Default::default()
    };
    let visible = by_search.visible(&base);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 2);

    let impossible = EvidenceFilter {
        member_id: Some(9),
        task_id: Some(3),
        ..Default::default()
    };
    assert!(impossible.visible(&base).is_empty());

    // Clearing every constraint restores the base collection as-is.
    let ids: Vec<i32> = EvidenceFilter::default()
        .visible(&base)
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn single_bucket_summary_still_projects() {
    let summary: DashboardSummary = serde_json::from_value(serde_json::json!({
        "created_missions_count": 0,
        "joined_missions_count": 0,
        "active_missions_count": 0,
        "completed_missions_count": 0,
        "chart_data": [
            { "date": "2026-07-01", "created": 0, "joined": 0, "completed": 0, "active": 0 }
        ]
    }))
    .expect("summary payload");

    let geo = ChartGeometry::default();
    assert_eq!(max_value(&summary.chart_data), 10);
    assert_eq!(geo.smooth_path(&summary.chart_data, ChartSeries::Active), "");

    let point = geo.project(0, 0, &summary.chart_data, Some(ChartSeries::Active));
    assert!(point.x.is_finite());
    assert!(point.y.is_finite());
}
