use anyhow::Result;
use httpmock::prelude::*;
use salary_survey::config::{HeadHunterConfig, SuperJobConfig};
use salary_survey::{render_report, run_survey, SurveyConfig, SurveyError};
use serde_json::json;

fn survey_config(hh: &MockServer, sj: &MockServer, languages: &[&str]) -> SurveyConfig {
    SurveyConfig {
        head_hunter: HeadHunterConfig {
            endpoint: hh.url("/vacancies/"),
            query_prefix: "Developer".to_string(),
            ..Default::default()
        },
        super_job: SuperJobConfig {
            endpoint: sj.url("/2.0/vacancies/"),
            query_prefix: "Developer".to_string(),
            api_key: Some("v3.r.integration".to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
    .with_languages(languages.iter().map(|lang| lang.to_string()).collect())
}

#[tokio::test]
async fn test_end_to_end_survey_with_mock_sources() -> Result<()> {
    let hh = MockServer::start();
    let sj = MockServer::start();

    let hh_python = hh.mock(|when, then| {
        when.method(GET)
            .path("/vacancies/")
            .query_param("text", "Developer Python");
        then.status(200).json_body(json!({
            "found": 1500,
            "pages": 1,
            "items": [
                {"id": "1", "name": "a", "salary": {"from": 100000, "to": null, "currency": "RUR"}},
                {"id": "2", "name": "b", "salary": {"from": null, "to": 100000, "currency": "RUR"}},
                {"id": "3", "name": "c", "salary": {"from": 90000, "to": 110000, "currency": "RUR"}},
                {"id": "4", "name": "d", "salary": null}
            ]
        }));
    });
    // 低於 100 筆門檻，不應產生列
    let hh_scala = hh.mock(|when, then| {
        when.method(GET)
            .path("/vacancies/")
            .query_param("text", "Developer Scala");
        then.status(200).json_body(json!({
            "found": 40,
            "pages": 1,
            "items": [{"id": "5", "name": "e", "salary": {"from": 400000, "to": null}}]
        }));
    });

    let sj_python = sj.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies/")
            .header("X-Api-App-Id", "v3.r.integration")
            .query_param("keyword", "Developer Python");
        then.status(200).json_body(json!({
            "total": 25,
            "more": false,
            "objects": [
                {"id": 1, "payment_from": 150000, "payment_to": 250000, "currency": "rub"},
                {"id": 2, "payment_from": 0, "payment_to": 0, "currency": "rub"}
            ]
        }));
    });
    let sj_scala = sj.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies/")
            .query_param("keyword", "Developer Scala");
        then.status(200).json_body(json!({
            "total": 11,
            "more": false,
            "objects": [{"id": 3, "payment_from": 200000, "payment_to": 0, "currency": "rub"}]
        }));
    });

    let config = survey_config(&hh, &sj, &["Python", "Scala"]);
    let tables = run_survey(&config).await?;

    hh_python.assert_hits(1);
    hh_scala.assert_hits(1);
    sj_python.assert_hits(1);
    sj_scala.assert_hits(1);

    assert_eq!(tables.len(), 2);

    let hh_table = &tables[0];
    assert_eq!(hh_table.title, "HeadHunter Moscow");
    assert_eq!(hh_table.rows.len(), 1);
    assert_eq!(hh_table.rows[0].language, "Python");
    assert_eq!(hh_table.rows[0].vacancies_found, 1500);
    assert_eq!(hh_table.rows[0].vacancies_processed, 3);
    assert_eq!(hh_table.rows[0].average_salary, 100000);

    let sj_table = &tables[1];
    assert_eq!(sj_table.title, "SuperJob Moscow");
    let languages: Vec<&str> = sj_table.rows.iter().map(|r| r.language.as_str()).collect();
    assert_eq!(languages, vec!["Python", "Scala"]);
    assert_eq!(sj_table.rows[0].vacancies_processed, 1);
    assert_eq!(sj_table.rows[0].average_salary, 200000);
    assert_eq!(sj_table.rows[1].average_salary, 240000);

    let rendered = hh_table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("+ HeadHunter Moscow "));
    assert_eq!(
        lines[1],
        "| Programming language | Vacancies found | Vacancies processed | Average salary |"
    );
    assert_eq!(
        lines[3],
        "| Python               | 1500            | 3                   | 100000         |"
    );

    Ok(())
}

#[tokio::test]
async fn test_missing_token_sends_no_requests() {
    let hh = MockServer::start();
    let sj = MockServer::start();
    let hh_mock = hh.mock(|when, then| {
        when.method(GET).path("/vacancies/");
        then.status(200)
            .json_body(json!({"found": 0, "pages": 0, "items": []}));
    });

    let mut config = survey_config(&hh, &sj, &["Go"]);
    config.super_job.api_key = None;

    let result = run_survey(&config).await;

    assert!(matches!(
        result,
        Err(SurveyError::MissingConfigError { .. })
    ));
    hh_mock.assert_hits(0);
}

#[tokio::test]
async fn test_http_failure_halts_remaining_languages() {
    let hh = MockServer::start();
    let sj = MockServer::start();

    let failing = hh.mock(|when, then| {
        when.method(GET)
            .path("/vacancies/")
            .query_param("text", "Developer Java");
        then.status(503);
    });
    let never_reached = hh.mock(|when, then| {
        when.method(GET)
            .path("/vacancies/")
            .query_param("text", "Developer Ruby");
        then.status(200)
            .json_body(json!({"found": 500, "pages": 1, "items": []}));
    });
    let sj_mock = sj.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/");
        then.status(200)
            .json_body(json!({"total": 0, "more": false, "objects": []}));
    });

    let config = survey_config(&hh, &sj, &["Java", "Ruby"]);
    let result = run_survey(&config).await;

    match result {
        Err(e @ SurveyError::HttpStatusError { .. }) => {
            assert!(e.user_friendly_message().contains("HeadHunter"));
            assert!(e.user_friendly_message().contains("503"));
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("survey should fail"),
    }
    failing.assert_hits(1);
    never_reached.assert_hits(0);
    sj_mock.assert_hits(0);
}

#[tokio::test]
async fn test_all_languages_skipped_renders_header_only() -> Result<()> {
    let hh = MockServer::start();
    let sj = MockServer::start();

    hh.mock(|when, then| {
        when.method(GET).path("/vacancies/");
        then.status(200)
            .json_body(json!({"found": 3, "pages": 1, "items": []}));
    });
    sj.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/");
        then.status(200)
            .json_body(json!({"total": 2, "more": false, "objects": []}));
    });

    let config = survey_config(&hh, &sj, &["Swift", "TypeScript"]);
    let tables = run_survey(&config).await?;

    for table in &tables {
        assert!(table.is_empty());
        assert_eq!(table.render().lines().count(), 3);
    }
    assert_eq!(render_report(&tables), "");

    Ok(())
}
