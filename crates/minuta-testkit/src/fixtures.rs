//! Template, record and bitmap fixtures
//!
//! The templates mirror the pt-BR civil-registry certificates the tool is
//! built for; the records use the same field names.

use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Birth certificate with every field of record `12345`
pub const BIRTH_CERTIFICATE_HTML: &str = r#"<h1>CERTIDÃO DE NASCIMENTO</h1>
<p>Nome: {{nome_completo_registrado}}</p>
<p>Matrícula: {{matricula}}</p>
<p>Nascido(a) em {{data_nascimento}} ({{data_nascimento_extenso}}), na cidade de {{cidade_nascimento}}.</p>
<p>Filiação: {{nome_pai}} e {{nome_mae}}</p>
<p>Avós paternos: {{avos_paternos}}</p>
<p>Avós maternos: {{avos_maternos}}</p>
<p>Livro {{livro}}, folha {{folha}}. Cartório de {{uf_cartorio}}.</p>
<p>Emitida em {{data_emissao_extenso}}.</p>
<p>{{nome_oficial}}<br>{{cargo_oficial}}</p>
"#;

/// Marriage certificate with the fields of record `123456`
pub const MARRIAGE_CERTIFICATE_HTML: &str = r#"<h1>CERTIDÃO DE CASAMENTO</h1>
<p>Termo {{termo}}, livro {{livro}}, folha {{folha}}.</p>
<p>{{nome_contraente_1}}, {{nacionalidade_contraente_1}}, {{profissao_contraente_1}}, CPF {{cpf_contraente_1}}, residente em {{residencia_contraente_1}}.</p>
<p>{{nome_contraente_2}}, {{nacionalidade_contraente_2}}, {{profissao_contraente_2}}, CPF {{cpf_contraente_2}}, residente em {{residencia_contraente_2}}.</p>
<p>Celebrado em {{data_casamento_extenso}}, às {{hora_casamento}}, em {{cidade_casamento}}/{{uf_casamento}}.</p>
<p>Regime de bens: {{regime_bens}}</p>
<p>Nomes adotados: {{nome_apos_casamento_1}} e {{nome_apos_casamento_2}}</p>
<p>{{cidade_emissao}}, {{data_emissao}}. {{nome_oficial}}, {{cargo_oficial}}</p>
"#;

/// Template that scans with one empty placeholder on line 2
pub const BROKEN_TEMPLATE_HTML: &str = "<p>Nome: {{nome}}</p>\n<p>Data: {{}}</p>\n";

/// Record store with the birth record `12345` and the marriage record `123456`
pub const RECORDS_JSON: &str = r#"{
  "12345": {
    "nome_completo_registrado": "Ana Carolina de Souza",
    "data_nascimento": "2002-03-15T00:00:00.000Z",
    "cidade_nascimento": "Goiânia",
    "uf_cartorio": "GO",
    "nome_pai": "Marcos de Souza",
    "nome_mae": "Helena Pereira de Souza",
    "avos_paternos": "João de Souza e Maria de Souza",
    "avos_maternos": "Carlos Pereira e Lúcia Pereira",
    "matricula": "0987654321098765",
    "livro": "A-123",
    "folha": "456",
    "data_emissao": "2025-07-22T00:00:00.000Z",
    "nome_oficial": "Carlos Eduardo Nogueira",
    "cargo_oficial": "Oficial de Registro Civil"
  },
  "123456": {
    "nome_contraente_1": "Ricardo Almeida Gomes",
    "nome_contraente_2": "Juliana Martins Ferreira",
    "termo": "98765",
    "livro": "B-045",
    "folha": "112",
    "nacionalidade_contraente_1": "Brasileiro",
    "nascimento_contraente_1": "1990-05-22T00:00:00.000Z",
    "profissao_contraente_1": "Engenheiro Civil",
    "cpf_contraente_1": "111.222.333-44",
    "residencia_contraente_1": "Rua das Acácias, 789, Setor Bueno, Goiânia-GO",
    "nacionalidade_contraente_2": "Brasileira",
    "nascimento_contraente_2": "1992-09-10T00:00:00.000Z",
    "profissao_contraente_2": "Arquiteta",
    "cpf_contraente_2": "555.666.777-88",
    "residencia_contraente_2": "Rua das Acácias, 789, Setor Bueno, Goiânia-GO",
    "data_casamento": "2024-10-18T16:30:00.000Z",
    "cidade_casamento": "Goiânia",
    "uf_casamento": "GO",
    "regime_bens": "Comunhão Parcial de Bens",
    "nome_apos_casamento_1": "Ricardo Almeida Gomes",
    "nome_apos_casamento_2": "Juliana Martins Ferreira Gomes",
    "cidade_emissao": "Goiânia",
    "data_emissao": "2025-07-22T00:00:00.000Z",
    "nome_oficial": "Carlos Eduardo Nogueira",
    "cargo_oficial": "Oficial de Registro Civil"
  }
}
"#;

/// Write `content` to `dir/name` and return the path
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// A `width` × `height` page capture with alternating grey text bands
pub fn page_capture(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |_, y| {
        if (y / 16) % 2 == 0 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([60, 60, 60, 255])
        }
    })
}

/// Save [`page_capture`] as a PNG at `path`
///
/// # Panics
///
/// Panics if the image cannot be encoded or written.
pub fn write_page_png(path: &Path, width: u32, height: u32) -> PathBuf {
    page_capture(width, height)
        .save(path)
        .expect("Failed to write fixture PNG");
    path.to_path_buf()
}
