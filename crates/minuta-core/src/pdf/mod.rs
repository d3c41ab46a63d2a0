//! Paginated PDF output
//!
//! The captured bitmap is embedded once, as a JPEG image when it fits the
//! JPEG size limit and as Flate-compressed RGB otherwise. Every page draws
//! the full page-width image shifted up by its slice offset; the page's media
//! box clips it to that slice.

use crate::config::consts;
use crate::pagination::PagePlan;
use crate::render::{Bitmap, RenderError};
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

const IMAGE_NAME: &str = "Im0";

/// Largest width or height a baseline JPEG can describe
const JPEG_MAX_DIMENSION: u32 = 65_535;

#[derive(Debug, Clone)]
pub struct PdfOptions {
    pub title: String,
    pub producer: String,
    pub jpeg_quality: u8,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            title: consts::output::DEFAULT_TITLE.to_string(),
            producer: concat!("minuta ", env!("CARGO_PKG_VERSION")).to_string(),
            jpeg_quality: consts::page::DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Assemble a PDF with one page per slice of `plan`
///
/// # Errors
///
/// Returns [`RenderError::InvalidDimensions`] if `plan` was made for a
/// bitmap of a different size, [`RenderError::Encode`] if JPEG encoding
/// fails and [`RenderError::Pdf`] if the document cannot be serialized.
pub fn write_pdf(
    bitmap: &Bitmap,
    plan: &PagePlan,
    options: &PdfOptions,
) -> Result<Vec<u8>, RenderError> {
    if bitmap.width() != plan.source_width || bitmap.height() != plan.source_height {
        return Err(RenderError::InvalidDimensions {
            width: f64::from(bitmap.width()),
            height: f64::from(bitmap.height()),
            page_width: plan.page.width,
            page_height: plan.page.height,
        });
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(image_stream(bitmap, options.jpeg_quality)?);
    let resources_id = doc.add_object(dictionary! {
        "XObject" => dictionary! { IMAGE_NAME => image_id },
    });

    let (page_w, page_h) = plan.page.to_points();
    let image_h = plan.scaled_height * consts::page::PT_PER_MM;

    let mut kids = Vec::with_capacity(plan.page_count());
    for slice in &plan.slices {
        let offset = slice.source_y_offset * consts::page::PT_PER_MM;
        // PDF space grows upwards: the image bottom sits below the page top
        // by the image height minus the slice offset
        let image_y = page_h + offset - image_h;
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        real(page_w),
                        real(0.0),
                        real(0.0),
                        real(image_h),
                        real(0.0),
                        real(image_y),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(IMAGE_NAME.as_bytes().to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![real(0.0), real(0.0), real(page_w), real(page_h)],
            "Resources" => resources_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id: ObjectId = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => text_string(&options.title),
        "Producer" => text_string(&options.producer),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;

    tracing::debug!(pages = count, bytes = bytes.len(), "assembled pdf");
    Ok(bytes)
}

/// `Certidao-certidao_de_nascimento.pdf`
///
/// Every whitespace character and path separator in the title becomes `_`.
/// A blank title falls back to `documento`.
pub fn output_file_name(prefix: &str, title: &str) -> String {
    let title = title.trim();
    let title = if title.is_empty() {
        consts::output::DEFAULT_TITLE
    } else {
        title
    };
    let stem: String = title
        .chars()
        .map(|c| {
            if c.is_whitespace() || c == '/' || c == '\\' {
                '_'
            } else {
                c
            }
        })
        .collect();
    format!("{}-{}.pdf", prefix, stem)
}

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

/// PDF text string: literal for ASCII, UTF-16BE with BOM otherwise
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }
    let mut bytes = vec![0xfe, 0xff];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Image XObject for the whole capture
///
/// Raw RGB streams are left uncompressed here; `Document::compress` applies
/// `FlateDecode` to them before saving.
fn image_stream(bitmap: &Bitmap, quality: u8) -> Result<Stream, RenderError> {
    let rgb = flatten(bitmap);
    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => i64::from(rgb.width()),
        "Height" => i64::from(rgb.height()),
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
    };

    if rgb.width() <= JPEG_MAX_DIMENSION && rgb.height() <= JPEG_MAX_DIMENSION {
        dict.set("Filter", "DCTDecode");
        let jpeg = encode_jpeg(&rgb, quality)?;
        return Ok(Stream::new(dict, jpeg).with_compression(false));
    }

    tracing::debug!(
        width = rgb.width(),
        height = rgb.height(),
        "bitmap exceeds jpeg limits, embedding flate rgb"
    );
    Ok(Stream::new(dict, rgb.into_raw()))
}

/// Composite RGBA onto a white background
fn flatten(bitmap: &Bitmap) -> RgbImage {
    RgbImage::from_fn(bitmap.width(), bitmap.height(), |x, y| {
        let [r, g, b, a] = bitmap.pixels.get_pixel(x, y).0;
        let blend = |c: u8| -> u8 {
            let alpha = u16::from(a);
            ((u16::from(c) * alpha + 255 * (255 - alpha)) / 255) as u8
        };
        Rgb([blend(r), blend(g), blend(b)])
    })
}

fn encode_jpeg(rgb: &RgbImage, quality: u8) -> Result<Vec<u8>, RenderError> {
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, quality.clamp(1, 100)).encode_image(rgb)?;
    Ok(jpeg)
}
