//! End-to-end flows through the command surface

use export::{AppSettings, ExportOutcome, SettingsManager};
use resume_builder::{execute, Command, Response, Session};
use tempfile::TempDir;

fn command(json: &str) -> Command {
    serde_json::from_str(json).unwrap()
}

fn session_in(dir: &TempDir) -> Session {
    let mut settings = AppSettings::default();
    settings.display.template = "minimal".to_string();
    settings.export.download_dir = Some(dir.path().to_path_buf());
    settings.export.scale = 0.25;
    Session::new(&settings)
}

#[test]
fn test_minimal_chart_follows_template_and_skills() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    assert!(session.preview().chart_surface().is_some());

    execute(&mut session, command(r#"{"command":"setTemplate","template":"classic"}"#)).unwrap();
    assert!(session.preview().chart_surface().is_none());

    execute(&mut session, command(r#"{"command":"setTemplate","template":"minimal"}"#)).unwrap();
    assert!(session.preview().chart_surface().is_some());

    for id in 1..=6 {
        let json = format!(r#"{{"command":"removeEntry","section":"skills","id":{}}}"#, id);
        execute(&mut session, command(&json)).unwrap();
    }
    assert!(session.store().snapshot().skills.is_empty());
    assert!(session.preview().chart_surface().is_none());
    let (_, chart) = session.preview().document().chart_slot().unwrap();
    assert!(chart.is_none());
}

#[test]
fn test_ongoing_job_shows_present() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    for json in [
        r#"{"command":"addEntry","section":"experience"}"#,
        r#"{"command":"input","section":"experience","id":3,"field":"company","value":"Acme"}"#,
        r#"{"command":"input","section":"experience","id":3,"field":"startDate","value":"2021-06"}"#,
    ] {
        assert_eq!(execute(&mut session, command(json)), Ok(Response::Ok));
    }
    assert!(session
        .preview()
        .document()
        .contains_text("июнь 2021 г. - По настоящее время"));

    execute(&mut session, command(r#"{"command":"setLocale","locale":"en"}"#)).unwrap();
    assert!(session.preview().document().contains_text("Jun 2021 - Present"));
}

#[tokio::test]
async fn test_export_uses_settings_from_disk() {
    let data = TempDir::new().unwrap();
    let downloads = TempDir::new().unwrap();
    let mut settings = AppSettings::default();
    settings.export.download_dir = Some(downloads.path().to_path_buf());
    settings.export.fallback_file_name = "cv".to_string();
    settings.export.scale = 0.25;
    std::fs::write(
        data.path().join("settings.json"),
        serde_json::to_string_pretty(&settings).unwrap(),
    )
    .unwrap();

    let mut manager = SettingsManager::new(data.path());
    let settings = manager.load().await.unwrap().clone();
    let mut session = Session::new(&settings);
    execute(
        &mut session,
        command(r#"{"command":"input","section":"basic","field":"fullName","value":""}"#),
    )
    .unwrap();

    let outcome = session.export().await;
    assert_eq!(
        outcome,
        ExportOutcome::Saved {
            path: downloads.path().join("cv.pdf")
        }
    );
}
