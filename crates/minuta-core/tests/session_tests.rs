//! Integration tests for the template session flow

use image::{Rgba, RgbaImage};
use minuta_core::config::{Config, EditorConfig};
use minuta_core::editor::RichTextEditor;
use minuta_core::record::RecordStore;
use minuta_core::render::{Bitmap, HtmlSource, PrerenderedBitmap, Rasterizer, RenderError, RenderSurface};
use minuta_core::session::{EditorUser, TemplateSession, View};
use minuta_core::synthetic::SyntheticGenerator;
use minuta_core::{MinutaError, Result as CoreResult};
use minuta_testkit::fixtures::{
    write_page_png, BIRTH_CERTIFICATE_HTML, BROKEN_TEMPLATE_HTML, MARRIAGE_CERTIFICATE_HTML,
    RECORDS_JSON,
};
use minuta_testkit::temp_dir_in_workspace;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Rasterizer that records what it was given and counts released surfaces
struct FakeRasterizer {
    height: u32,
    fail_capture: bool,
    mounted: RefCell<Vec<(String, f64)>>,
    released: Rc<Cell<usize>>,
}

impl FakeRasterizer {
    fn new(height: u32) -> Self {
        Self {
            height,
            fail_capture: false,
            mounted: RefCell::new(Vec::new()),
            released: Rc::new(Cell::new(0)),
        }
    }

    fn failing() -> Self {
        Self {
            fail_capture: true,
            ..Self::new(100)
        }
    }
}

struct FakeSurface {
    height: u32,
    fail: bool,
    released: Rc<Cell<usize>>,
}

impl Rasterizer for FakeRasterizer {
    type Surface = FakeSurface;

    fn mount(&self, html: &str, width_mm: f64) -> Result<FakeSurface, RenderError> {
        self.mounted.borrow_mut().push((html.to_string(), width_mm));
        Ok(FakeSurface {
            height: self.height,
            fail: self.fail_capture,
            released: Rc::clone(&self.released),
        })
    }
}

impl RenderSurface for FakeSurface {
    fn rasterize(&mut self, _scale: f32) -> Result<Bitmap, RenderError> {
        if self.fail {
            return Err(RenderError::Capture("canvas is tainted".to_string()));
        }
        Bitmap::new(RgbaImage::from_pixel(794, self.height, Rgba([255, 255, 255, 255])))
    }
}

impl Drop for FakeSurface {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

/// Emits a fixed list of edits and remembers what it was opened with
#[derive(Default)]
struct ScriptedEditor {
    edits: Vec<String>,
    fail: bool,
    opened: Vec<(String, EditorConfig)>,
}

impl RichTextEditor for ScriptedEditor {
    fn open(
        &mut self,
        html: &str,
        config: &EditorConfig,
        on_change: &mut dyn FnMut(String),
    ) -> CoreResult<()> {
        self.opened.push((html.to_string(), config.clone()));
        for edit in &self.edits {
            on_change(edit.clone());
        }
        if self.fail {
            return Err(MinutaError::Editor("closed unexpectedly".to_string()));
        }
        Ok(())
    }
}

fn session_with(html: &str, file_name: &str) -> TemplateSession {
    let mut session = TemplateSession::new(Config::default());
    session
        .load_template(&HtmlSource, file_name, html.as_bytes())
        .unwrap();
    session
}

fn store() -> RecordStore {
    RecordStore::from_json_str(RECORDS_JSON).unwrap()
}

#[test]
fn test_load_template_opens_form_with_empty_values() {
    let session = session_with("<p>{{nome}} {{data}} {{nome}}</p>", "certidao_de_nascimento.docx");

    assert_eq!(session.view(), View::Form);
    let template = session.template().unwrap();
    assert_eq!(template.title(), "certidao de nascimento");
    assert_eq!(template.act_type(), "Documento");
    assert_eq!(template.variables(), &["nome", "data"]);

    let values: Vec<_> = session.values().iter().collect();
    assert_eq!(values, vec![("nome", ""), ("data", "")]);
}

#[test]
fn test_invalid_upload_stays_on_upload_view() {
    let mut session = TemplateSession::default();
    let err = session
        .load_template(&HtmlSource, "modelo.docx", b"PK\x03\x04....")
        .unwrap_err();

    assert!(matches!(err, MinutaError::TemplateLoad(_)));
    assert_eq!(session.view(), View::Upload);
    assert!(session.template().is_none());
}

#[test]
fn test_name_and_date_end_to_end() {
    let mut session = session_with("Nome: {{nome}}, Data: {{data}}", "t.html");
    session.set_value("nome", "Ana").unwrap();

    let document = session.generate().unwrap();
    assert_eq!(
        document.html,
        "Nome: <span style=\"font-weight: bold;\">Ana</span>, \
         Data: <span style=\"font-weight: bold;\">__________</span>"
    );
    assert_eq!(session.view(), View::Editor);
}

#[test]
fn test_birth_record_fills_template() {
    let mut session = session_with(BIRTH_CERTIFICATE_HTML, "nascimento.html");
    let merged = session.load_record(&store(), "12345").unwrap();
    assert!(merged >= 14);

    assert_eq!(session.values().get("data_nascimento"), Some("15/03/2002"));
    assert_eq!(
        session.values().get("data_nascimento_extenso"),
        Some("15 de março de 2002")
    );

    let html = session.generate().unwrap().html.clone();
    assert!(html.contains(">Ana Carolina de Souza</span>"));
    assert!(html.contains(">22 de julho de 2025</span>"));
    assert!(!html.contains("__________"));
    assert!(!html.contains("{{"));
}

#[test]
fn test_marriage_record_derives_time() {
    let mut session = session_with(MARRIAGE_CERTIFICATE_HTML, "casamento.html");
    session.load_record(&store(), " 123456 ").unwrap();

    assert_eq!(session.values().get("hora_casamento"), Some("16:30"));
    assert_eq!(session.values().get("data_casamento"), Some("18/10/2024"));
}

#[test]
fn test_unknown_record_leaves_values_unchanged() {
    let mut session = session_with(BIRTH_CERTIFICATE_HTML, "nascimento.html");
    session.set_value("nome_pai", "Marcos").unwrap();
    let before = session.values().clone();

    let err = session.load_record(&store(), "99999").unwrap_err();
    assert!(matches!(err, MinutaError::RecordNotFound(_)));
    assert_eq!(session.values(), &before);
}

#[test]
fn test_blank_record_id_is_rejected() {
    let mut session = session_with(BIRTH_CERTIFICATE_HTML, "nascimento.html");
    let err = session.load_record(&store(), "   ").unwrap_err();
    assert!(matches!(err, MinutaError::EmptyRecordId));
}

#[test]
fn test_record_fields_override_manual_values() {
    let mut session = session_with(BIRTH_CERTIFICATE_HTML, "nascimento.html");
    session.set_value("livro", "manual").unwrap();
    session.set_value("observacao", "kept").unwrap();
    session.load_record(&store(), "12345").unwrap();

    assert_eq!(session.values().get("livro"), Some("A-123"));
    assert_eq!(session.values().get("observacao"), Some("kept"));
}

#[test]
fn test_autofill_fills_every_variable() {
    let mut session = session_with(MARRIAGE_CERTIFICATE_HTML, "casamento.html");
    let mut rng = StdRng::seed_from_u64(3);
    session
        .autofill(&SyntheticGenerator::default(), &mut rng)
        .unwrap();

    let variables = session.template().unwrap().variables().to_vec();
    assert_eq!(session.values().len(), variables.len());
    for name in &variables {
        assert!(!session.values().get(name).unwrap().is_empty(), "{}", name);
    }
}

#[test]
fn test_broken_template_blocks_generate() {
    let mut session = session_with(BROKEN_TEMPLATE_HTML, "quebrado.html");
    assert!(session.template().unwrap().is_blocked());

    let err = session.generate().unwrap_err();
    match err {
        MinutaError::TemplateBlocked { count, first } => {
            assert_eq!(count, 1);
            assert!(first.to_string().contains("line 2"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(session.view(), View::Form);
    assert!(session.document().is_none());

    // Only a corrected upload unblocks it
    session.start_over();
    session
        .load_template(&HtmlSource, "ok.html", b"<p>{{nome}}</p>")
        .unwrap();
    assert!(session.generate().is_ok());
}

#[test]
fn test_edit_replaces_document_and_tracks_user() {
    let mut session = session_with("<p>{{nome}}</p>", "t.html");
    session.generate().unwrap();
    assert_eq!(session.document().unwrap().last_edited_by, None);

    let user = EditorUser::new(2, "Juliana Ferreira");
    session.apply_edit("<p>editado</p>", &user).unwrap();

    let document = session.document().unwrap();
    assert_eq!(document.html, "<p>editado</p>");
    assert_eq!(document.last_edited_by.as_ref(), Some(&user));
}

#[test]
fn test_editor_receives_document_and_config() {
    let config = Config::from_toml_str("[editor]\nwidth_px = 900\nspellcheck = false\n").unwrap();
    let mut session = TemplateSession::new(config);
    session
        .load_template(&HtmlSource, "t.html", b"<p>{{nome}}</p>")
        .unwrap();
    session.set_value("nome", "Ana").unwrap();
    session.generate().unwrap();

    let mut editor = ScriptedEditor {
        edits: vec!["<p>Ana S.</p>".to_string(), "<p>Ana Souza</p>".to_string()],
        ..ScriptedEditor::default()
    };
    let user = EditorUser::new(2, "Juliana Ferreira");
    assert!(session.edit_with(&mut editor, &user).unwrap());

    let (html, config) = &editor.opened[0];
    assert!(html.contains(">Ana</span>"));
    assert_eq!(config.width_px, 900);
    assert!(!config.spellcheck);

    let document = session.document().unwrap();
    assert_eq!(document.html, "<p>Ana Souza</p>");
    assert_eq!(document.last_edited_by.as_ref(), Some(&user));
}

#[test]
fn test_editor_without_changes_keeps_document() {
    let mut session = session_with("<p>{{nome}}</p>", "t.html");
    let generated = session.generate().unwrap().html.clone();

    let mut editor = ScriptedEditor::default();
    let changed = session
        .edit_with(&mut editor, &EditorUser::new(1, "Carlos Nogueira"))
        .unwrap();

    assert!(!changed);
    assert_eq!(session.document().unwrap().html, generated);
    assert_eq!(session.document().unwrap().last_edited_by, None);
}

#[test]
fn test_failed_editor_discards_its_changes() {
    let mut session = session_with("<p>{{nome}}</p>", "t.html");
    let generated = session.generate().unwrap().html.clone();

    let mut editor = ScriptedEditor {
        edits: vec!["<p>parcial</p>".to_string()],
        fail: true,
        ..ScriptedEditor::default()
    };
    let err = session
        .edit_with(&mut editor, &EditorUser::new(1, "Carlos Nogueira"))
        .unwrap_err();

    assert!(matches!(err, MinutaError::Editor(_)));
    assert_eq!(session.document().unwrap().html, generated);
    assert_eq!(session.view(), View::Editor);
}

#[test]
fn test_editor_is_not_opened_before_generate() {
    let mut session = session_with("<p>{{nome}}</p>", "t.html");
    let mut editor = ScriptedEditor::default();
    assert!(session
        .edit_with(&mut editor, &EditorUser::new(1, "Carlos Nogueira"))
        .is_err());
    assert!(editor.opened.is_empty());
}

#[test]
fn test_back_to_form_then_regenerate_discards_edits() {
    let mut session = session_with("<p>{{nome}}</p>", "t.html");
    session.generate().unwrap();
    session
        .apply_edit("<p>manual</p>", &EditorUser::new(1, "Carlos Nogueira"))
        .unwrap();

    session.back_to_form().unwrap();
    assert_eq!(session.view(), View::Form);
    session.set_value("nome", "Ana").unwrap();

    let document = session.generate().unwrap();
    assert!(document.html.contains(">Ana</span>"));
    assert_eq!(document.last_edited_by, None);
}

#[test]
fn test_actions_outside_their_view_are_rejected() {
    let mut session = TemplateSession::default();
    assert!(matches!(
        session.set_value("a", "b"),
        Err(MinutaError::InvalidTransition { .. })
    ));
    assert!(matches!(
        session.generate(),
        Err(MinutaError::InvalidTransition { .. })
    ));

    let mut session = session_with("<p>{{nome}}</p>", "t.html");
    assert!(session
        .apply_edit("x", &EditorUser::new(1, "Carlos Nogueira"))
        .is_err());
    assert!(session.export_pdf(&FakeRasterizer::new(100)).is_err());
    assert!(session
        .load_template(&HtmlSource, "again.html", b"{{x}}")
        .is_err());
    assert_eq!(session.template().unwrap().variables(), &["nome"]);
}

#[test]
fn test_start_over_clears_everything() {
    let mut session = session_with("<p>{{nome}}</p>", "t.html");
    session.set_value("nome", "Ana").unwrap();
    session.generate().unwrap();

    session.start_over();
    assert_eq!(session.view(), View::Upload);
    assert!(session.template().is_none());
    assert!(session.values().is_empty());
    assert!(session.document().is_none());
}

#[test]
fn test_export_mounts_at_page_width_and_releases_surface() {
    let mut session = session_with("<p>{{nome}}</p>", "certidao de nascimento.html");
    session.generate().unwrap();

    let rasterizer = FakeRasterizer::new(3000);
    let pdf = session.export_pdf(&rasterizer).unwrap();

    let mounted = rasterizer.mounted.borrow();
    assert_eq!(mounted.len(), 1);
    assert_eq!(mounted[0].0, session.document().unwrap().html);
    assert_eq!(mounted[0].1, 210.0);
    assert_eq!(rasterizer.released.get(), 1);

    // 794 px wide at A4: 3000 px is about 793 mm, so 3 pages
    assert_eq!(pdf.page_count, 3);
    assert_eq!(pdf.file_name, "Certidao-certidao_de_nascimento.html.pdf");
    assert!(pdf.bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_failed_capture_releases_surface_and_writes_nothing() {
    let mut session = session_with("<p>{{nome}}</p>", "t.html");
    session.generate().unwrap();

    let rasterizer = FakeRasterizer::failing();
    let err = session.export_pdf(&rasterizer).unwrap_err();

    assert!(matches!(err, MinutaError::Render(RenderError::Capture(_))));
    assert_eq!(rasterizer.released.get(), 1);
    assert_eq!(session.view(), View::Editor);
}

#[test]
fn test_export_from_prerendered_bitmap_to_disk() {
    let temp = temp_dir_in_workspace();
    let png = write_page_png(&temp.path().join("page.png"), 794, 1200);

    let mut session = session_with(BIRTH_CERTIFICATE_HTML, "certidao_de_nascimento.docx");
    session.load_record(&store(), "12345").unwrap();
    session.generate().unwrap();

    let pdf = session.export_pdf(&PrerenderedBitmap::new(&png)).unwrap();
    assert_eq!(pdf.page_count, 2);

    let path = pdf.save_in(temp.path().join("out")).unwrap();
    assert_eq!(
        path.file_name().unwrap(),
        "Certidao-certidao_de_nascimento.pdf"
    );
    let doc = lopdf::Document::load(&path).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn test_custom_page_size_from_config() {
    let config = Config::from_toml_str(
        "[page]\nformat = \"custom\"\nwidth_mm = 100.0\nheight_mm = 100.0\n\n[output]\nfile_prefix = \"Minuta\"\n",
    )
    .unwrap();
    let mut session = TemplateSession::new(config);
    session
        .load_template(&HtmlSource, "x.html", b"<p>{{a}}</p>")
        .unwrap();
    session.generate().unwrap();

    let rasterizer = FakeRasterizer::new(794 * 3);
    let pdf = session.export_pdf(&rasterizer).unwrap();
    assert_eq!(rasterizer.mounted.borrow()[0].1, 100.0);
    assert_eq!(pdf.page_count, 3);
    assert_eq!(pdf.file_name, "Minuta-x.html.pdf");
}
