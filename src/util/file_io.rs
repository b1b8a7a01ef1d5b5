
use log::info;
use std::io::{BufWriter, Write};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Extension for raw gene records
pub const XML_EXTENSION: &str = "xml";
/// Extension for the FASTA line output
pub const TEXT_EXTENSION: &str = "txt";

/// Builds `<dir>/<name>.<extension>` without touching any dots already in `name`, so "NC_1.1" becomes "NC_1.1.txt".
pub fn output_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
    dir.join(format!("{name}.{extension}"))
}

/// Writes a raw document to disk, overwriting any existing file.
/// # Arguments
/// * `document` - the full text to save
/// * `dir` - output directory
/// * `name` - file name without extension
/// * `extension` - appended after a '.'
/// # Errors
/// * if the file cannot be created or written
pub fn write_document(document: &str, dir: &Path, name: &str, extension: &str) -> Result<PathBuf, std::io::Error> {
    let filename = output_path(dir, name, extension);
    let mut writer = BufWriter::new(File::create(&filename)?);
    writer.write_all(document.as_bytes())?;
    writer.flush()?;
    Ok(filename)
}

/// Writes each line verbatim followed by a newline to `<dir>/<name>.txt`, overwriting any existing file.
/// # Arguments
/// * `lines` - the lines to write, in order
/// * `dir` - output directory
/// * `name` - file name without extension
/// # Errors
/// * if the file cannot be created or written
pub fn write_lines<S: AsRef<str>>(lines: &[S], dir: &Path, name: &str) -> Result<PathBuf, std::io::Error> {
    let filename = output_path(dir, name, TEXT_EXTENSION);
    info!("Writing {} to disk...", filename.display());
    let mut writer = BufWriter::new(File::create(&filename)?);
    for line in lines.iter() {
        writeln!(writer, "{}", line.as_ref())?;
    }
    writer.flush()?;
    Ok(filename)
}

/// This will save a generic serializable struct to JSON.
/// # Arguments
/// * `data` - the data in memory
/// * `out_filename` - user provided path to write to, gzipped if it ends in .gz
/// # Errors
/// * if opening or writing to the file throw errors
/// * if JSON serialization throws errors
pub fn save_json<T: serde::Serialize>(data: &T, out_filename: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file: Box<dyn std::io::Write> = if out_filename.extension().unwrap_or_default() == "gz" {
        Box::new(
            flate2::write::GzEncoder::new(
                File::create(out_filename)?,
                flate2::Compression::best()
            )
        )
    } else {
        Box::new(File::create(out_filename)?)
    };
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.flush()?;
    Ok(())
}
