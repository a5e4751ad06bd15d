use std::{
    fs::File,
    io::{self, BufWriter, Write as _},
    path::Path,
};

use anyhow::Context;

/// Writes `value` as pretty JSON to `output_path`, or to stdout when no path is given.
pub fn save_json<T>(value: &T, output_path: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    match output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_json(BufWriter::new(file), value)
                .with_context(|| format!("Failed to write JSON to {}", path.display()))
        }
        None => write_json(io::stdout().lock(), value).context("Failed to write JSON to stdout"),
    }
}

fn write_json<W, T>(mut writer: W, value: &T) -> anyhow::Result<()>
where
    W: io::Write,
    T: serde::Serialize,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Asks for one line on stderr/stdin and returns it trimmed.
pub fn prompt(label: &str) -> anyhow::Result<String> {
    eprint!("{label}");
    io::stderr().flush().context("Failed to flush prompt")?;
    read_answer(&mut io::stdin().lock())
}

fn read_answer<R>(reader: &mut R) -> anyhow::Result<String>
where
    R: io::BufRead,
{
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read answer from stdin")?;
    Ok(line.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, fs};

    use super::*;

    #[test]
    fn test_write_json_ends_with_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &BTreeMap::from([("outs", 2)])).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{\n  \"outs\": 2\n}\n");
    }

    #[test]
    fn test_saved_json_reads_back() {
        let path = std::env::temp_dir().join(format!("umpire-save-{}.json", std::process::id()));
        let value = BTreeMap::from([("home_score".to_owned(), 3), ("outs".to_owned(), 1)]);
        save_json(&value, Some(&path)).unwrap();
        let read: BTreeMap<String, i32> = read_json_file("test", &path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(read, value);
    }

    #[test]
    fn test_read_json_file_names_missing_file() {
        let err = read_json_file::<BTreeMap<String, i32>, _>("game", "no-such-game.json")
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to open game file"), "{err}");
    }

    #[test]
    fn test_read_answer_trims_line() {
        let mut input = io::Cursor::new("  745123 \nrest\n");
        assert_eq!(read_answer(&mut input).unwrap(), "745123");
        assert_eq!(read_answer(&mut input).unwrap(), "rest");
        assert_eq!(read_answer(&mut input).unwrap(), "");
    }
}
