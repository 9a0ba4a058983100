//! Export of a live preview page, driven through the store

use export::raster::{RasterImage, SoftwareRasterizer};
use export::{ExportOutcome, ExportPipeline, ExportSettings, FileDownloadSink, StagedPage};
use form_store::FormStore;
use preview::{ColorScheme, DisplayLocale, PreviewView, Template};
use resume_model::ProfileField;
use tempfile::TempDir;

fn pipeline(dir: &TempDir) -> ExportPipeline<SoftwareRasterizer, FileDownloadSink> {
    let settings = ExportSettings {
        scale: 0.5,
        ..ExportSettings::default()
    };
    ExportPipeline::new(SoftwareRasterizer::new(), FileDownloadSink::new(dir.path()), settings)
}

#[tokio::test]
async fn test_minimal_page_with_chart_exports_single_page() {
    let dir = TempDir::new().unwrap();
    let store = FormStore::with_sample();
    let view = PreviewView::mount(
        store.snapshot(),
        Template::Minimal,
        ColorScheme::Green,
        DisplayLocale::En,
    );
    assert!(view.document().chart_slot().unwrap().1.is_some());

    let name = store.snapshot().profile.full_name.clone();
    let outcome = pipeline(&dir).export(view.document(), &name).await;

    let path = dir.path().join(format!("{}.pdf", name));
    assert_eq!(outcome, ExportOutcome::Saved { path: path.clone() });
    let bytes = std::fs::read(path).unwrap();
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.starts_with("%PDF-1.4"));
    assert!(text.contains("/Count 1"));
    assert!(text.contains("/Width 298"));
    assert!(text.contains("/Height 421"));
}

#[tokio::test]
async fn test_blank_name_saves_as_resume() {
    let dir = TempDir::new().unwrap();
    let mut store = FormStore::with_sample();
    store.set_profile_field(ProfileField::FullName, "   ");
    let view = PreviewView::mount(
        store.snapshot(),
        Template::Classic,
        ColorScheme::Blue,
        DisplayLocale::Ru,
    );

    let full_name = store.snapshot().profile.full_name.clone();
    let outcome = pipeline(&dir).export(view.document(), &full_name).await;
    assert_eq!(
        outcome,
        ExportOutcome::Saved {
            path: dir.path().join("resume.pdf")
        }
    );
}

#[tokio::test]
async fn test_export_leaves_store_and_preview_untouched() {
    let dir = TempDir::new().unwrap();
    let store = FormStore::with_sample();
    let version = store.version();
    let data = store.snapshot();
    let view = PreviewView::mount(data.clone(), Template::Modern, ColorScheme::Red, DisplayLocale::En);
    let document = view.document().clone();

    pipeline(&dir).export(view.document(), "Copy").await;

    assert_eq!(store.version(), version);
    assert_eq!(store.snapshot(), data);
    assert_eq!(view.document(), &document);
    assert_eq!(view.document().margin, preview::PREVIEW_MARGIN);
}

fn painted_classic_ru(rasterizer: &SoftwareRasterizer, full_name: &str) -> RasterImage {
    let mut store = FormStore::with_sample();
    store.set_profile_field(ProfileField::FullName, full_name);
    let view = PreviewView::mount(
        store.snapshot(),
        Template::Classic,
        ColorScheme::Blue,
        DisplayLocale::Ru,
    );
    let settings = ExportSettings {
        scale: 1.0,
        ..ExportSettings::default()
    };
    let page = StagedPage::from_document(view.document(), &settings);
    rasterizer.paint(&page, &settings.capture_options()).unwrap()
}

#[test]
fn test_cyrillic_names_survive_rasterization() {
    let rasterizer = SoftwareRasterizer::new();
    let ivan = painted_classic_ru(&rasterizer, "Иван Попов");
    let oleg = painted_classic_ru(&rasterizer, "Олег Жуков");
    let john = painted_classic_ru(&rasterizer, "John Smith");
    assert_ne!(ivan, oleg);
    assert_ne!(ivan, john);
}
