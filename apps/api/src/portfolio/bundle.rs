//! Static download bundle: one HTML document zipped as `index.html`.

use std::io::{Cursor, Write};

use zip::result::ZipResult;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const BUNDLE_FILE_NAME: &str = "portfolio.zip";
pub const BUNDLE_ENTRY_NAME: &str = "index.html";

pub fn build_bundle(html: &str) -> ZipResult<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file(BUNDLE_ENTRY_NAME, options)?;
    writer.write_all(html.as_bytes())?;

    Ok(writer.finish()?.into_inner())
}
