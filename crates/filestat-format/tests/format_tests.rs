use std::path::PathBuf;

use filestat_core::{
    ChecksumSet, FileKind, FileRecord, FileTime, OutputFormat, Owner, COLUMNS, FIELD_COUNT,
};
use filestat_format::formatter_for;

fn sample_record(name: &str, kind: FileKind) -> FileRecord {
    let checksums = if kind.is_regular() {
        ChecksumSet::Computed {
            cksum: "4294967295".to_string(),
            md5: "d41d8cd98f00b204e9800998ecf8427e".to_string(),
            sha256: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
                .to_string(),
        }
    } else {
        ChecksumSet::NotApplicable
    };
    let (permissions, sticky) = filestat_core::permission_string(kind, 0o100644);
    FileRecord {
        name: name.to_string(),
        full_path: PathBuf::from("/tmp").join(name),
        size: 0,
        owner: Owner::new("root", 0),
        group: Owner::new("root", 0),
        kind,
        permissions,
        mode: 0o100644,
        sticky,
        atime: FileTime::new(1_500_000_000, 0),
        mtime: FileTime::new(1_500_000_000, 0),
        ctime: FileTime::new(1_500_000_000, 0),
        device: 2049,
        inode: 42,
        links: 1,
        block_size: 4096,
        blocks: 0,
        checksums,
    }
}

fn render(format: OutputFormat, records: &[FileRecord]) -> String {
    let fmt = formatter_for(format);
    let mut out = Vec::new();
    fmt.header(&mut out).unwrap();
    for record in records {
        fmt.record(&mut out, record).unwrap();
    }
    fmt.footer(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_csv_record_splits_into_22_fields() {
    let output = render(
        OutputFormat::Csv,
        &[sample_record("empty.txt", FileKind::Regular)],
    );
    let mut lines = output.split("\r\n");

    let header = lines.next().unwrap();
    assert_eq!(header.split(',').count(), FIELD_COUNT);
    assert!(header.starts_with("File Name,Full Path,"));

    let record = lines.next().unwrap();
    let fields: Vec<_> = record.split(',').collect();
    assert_eq!(fields.len(), FIELD_COUNT);
    assert_eq!(fields[0], "\"empty.txt\"");
    assert_eq!(fields[1], "\"/tmp/empty.txt\"");
    assert_eq!(fields[19], "4294967295");
}

#[test]
fn test_tab_uses_tab_delimiter_and_crlf() {
    let output = render(
        OutputFormat::Tab,
        &[sample_record("a.txt", FileKind::Regular)],
    );
    for line in output.split_terminator("\r\n") {
        assert_eq!(line.split('\t').count(), FIELD_COUNT);
    }
    assert!(output.ends_with("\r\n"));
}

#[test]
fn test_txt_block_layout() {
    let record = sample_record("empty.txt", FileKind::Regular);
    let output = render(OutputFormat::Txt, &[record]);

    assert!(output.starts_with("F i l e   S t a t i s t i c s\n"));
    assert!(output.contains("File Name  : empty.txt\n"));
    assert!(output.contains("File Size  : 0 bytes\n"));
    assert!(output.contains("File Type  : regular file\n"));
    assert!(output.contains("MD5 Digest : d41d8cd98f00b204e9800998ecf8427e\n"));
    // Blank line terminates the block.
    assert!(output.ends_with("\n\n"));
}

#[test]
fn test_raw_renders_like_txt() {
    let record = sample_record("a.txt", FileKind::Regular);
    let txt = render(OutputFormat::Txt, &[record.clone()]);
    let raw = render(OutputFormat::Raw, &[record]);
    assert_eq!(txt, raw);
}

#[test]
fn test_html_has_22_header_and_data_cells() {
    let output = render(
        OutputFormat::Htm,
        &[sample_record("a.txt", FileKind::Regular)],
    );
    assert_eq!(output.matches("<th>").count(), FIELD_COUNT);
    assert_eq!(output.matches("<td>").count(), FIELD_COUNT);
    assert!(output.starts_with("<!doctype html"));
    assert!(output.ends_with("</html>\n"));
    for name in COLUMNS {
        assert!(output.contains(&format!("<th>{name}</th>")));
    }
}

#[test]
fn test_xml_one_file_element_per_record() {
    let records = vec![
        sample_record("a.txt", FileKind::Regular),
        sample_record("d", FileKind::Directory),
    ];
    let output = render(OutputFormat::Xml, &records);

    assert!(output.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<fileset>\n"));
    assert!(output.ends_with("</fileset>\n"));
    assert_eq!(output.matches("<file>").count(), 2);
    assert_eq!(output.matches("</file>").count(), 2);
    assert!(output.contains("<filename>a.txt</filename>"));
    assert!(output.contains("<type>directory</type>"));
    assert!(output.contains("<cksum>N/A</cksum>"));
}

#[test]
fn test_markup_escaping_keeps_xml_well_formed() {
    let record = sample_record("a<b>&c.txt", FileKind::Regular);
    let output = render(OutputFormat::Xml, &[record]);
    assert!(output.contains("<filename>a&lt;b&gt;&amp;c.txt</filename>"));
    assert!(!output.contains("<filename>a<b>"));
}

#[test]
fn test_non_regular_record_renders_na_in_all_formats() {
    let record = sample_record("d", FileKind::Directory);
    for format in [
        OutputFormat::Txt,
        OutputFormat::Tab,
        OutputFormat::Csv,
        OutputFormat::Htm,
        OutputFormat::Xml,
    ] {
        let output = render(format, &[record.clone()]);
        assert!(output.contains("N/A"), "missing sentinel in {format}");
    }
}
