//! Tests for stdf-output.

#[cfg(test)]
mod fixtures {
    use stdf_core::{FieldValue, Record, RecordType};

    pub fn far() -> Record {
        Record::new(RecordType::Far, vec![FieldValue::from(2u8), FieldValue::from(4u8)])
    }

    pub fn pir(head: u8, site: u8) -> Record {
        Record::empty(RecordType::Pir)
            .with("HEAD_NUM", head)
            .unwrap()
            .with("SITE_NUM", site)
            .unwrap()
    }

    pub fn ptr(test_num: u32, head: u8, site: u8, flag: u8, result: f32, text: &str) -> Record {
        Record::empty(RecordType::Ptr)
            .with("TEST_NUM", test_num)
            .unwrap()
            .with("HEAD_NUM", head)
            .unwrap()
            .with("SITE_NUM", site)
            .unwrap()
            .with("TEST_FLG", flag)
            .unwrap()
            .with("RESULT", result)
            .unwrap()
            .with("TEST_TXT", text)
            .unwrap()
    }

    pub fn bps(name: &str) -> Record {
        Record::empty(RecordType::Bps).with("SEQ_NAME", name).unwrap()
    }

    pub fn mir(user_txt: &str, start: u32) -> Record {
        Record::empty(RecordType::Mir)
            .with("USER_TXT", user_txt)
            .unwrap()
            .with("START_T", start)
            .unwrap()
    }

    pub fn mrr(finish: u32) -> Record {
        Record::empty(RecordType::Mrr).with("FINISH_T", finish).unwrap()
    }

    pub fn gdr() -> Record {
        Record::new(
            RecordType::Gdr,
            vec![FieldValue::from(1u8), FieldValue::from("abc"), FieldValue::from(2.5f32)],
        )
    }

    pub fn utf8(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).expect("utf-8 output")
    }

    pub fn csv_rows(bytes: &[u8]) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_reader(bytes);
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }
}

// ── Field formatter ───────────────────────────────────────────────────────────

#[cfg(test)]
mod format_tests {
    use chrono::{Local, TimeZone};
    use stdf_core::{FieldValue, Record, RecordType, StdfError};

    use super::fixtures::*;
    use crate::{FieldFormatter, OutputError};

    fn local(secs: u32, pattern: &str) -> String {
        Local.timestamp_opt(i64::from(secs), 0).unwrap().format(pattern).to_string()
    }

    #[test]
    fn scalars_render_as_plain_text() {
        let fmt = FieldFormatter::markup();
        let r = ptr(100, 1, 2, 255, 1.5, "VDD");
        assert_eq!(fmt.format(&r, 0).unwrap(), "100");
        assert_eq!(fmt.format(&r, 3).unwrap(), "255"); // B1 scalar stays decimal
        assert_eq!(fmt.format(&r, 5).unwrap(), "1.5");
        assert_eq!(fmt.format(&r, 6).unwrap(), "VDD");
    }

    #[test]
    fn null_renders_empty() {
        let fmt = FieldFormatter::markup();
        let r = Record::empty(RecordType::Ptr);
        assert_eq!(fmt.format(&r, 5).unwrap(), "");
        assert_eq!(fmt.format_named(&r, "TEST_TXT").unwrap(), "");
    }

    #[test]
    fn one_byte_arrays_render_as_hex() {
        let fmt = FieldFormatter::markup();
        let stat = FieldValue::Array(vec![
            FieldValue::Unsigned(0),
            FieldValue::Unsigned(255),
            FieldValue::Unsigned(10),
        ]);
        let r = Record::empty(RecordType::Mpr).with("RTN_STAT", stat).unwrap();
        assert_eq!(fmt.format_named(&r, "RTN_STAT").unwrap(), "00,FF,0A");
    }

    #[test]
    fn other_arrays_render_as_decimal() {
        let fmt = FieldFormatter::markup();
        let rslt = FieldValue::Array(vec![FieldValue::Real(1.5), FieldValue::Real(2.0)]);
        let indx = FieldValue::Array(vec![FieldValue::Unsigned(10), FieldValue::Unsigned(255)]);
        let r = Record::empty(RecordType::Mpr)
            .with("RTN_RSLT", rslt)
            .unwrap()
            .with("RTN_INDX", indx)
            .unwrap();
        assert_eq!(fmt.format_named(&r, "RTN_RSLT").unwrap(), "1.5,2");
        assert_eq!(fmt.format_named(&r, "RTN_INDX").unwrap(), "10,255");
    }

    #[test]
    fn multi_digit_count_index_still_finds_element_type() {
        let fmt = FieldFormatter::markup();
        let stat = FieldValue::Array(vec![FieldValue::Unsigned(1), FieldValue::Unsigned(14)]);
        let r = Record::empty(RecordType::Ftr).with("RTN_STAT", stat).unwrap(); // k12N1
        assert_eq!(fmt.format_named(&r, "RTN_STAT").unwrap(), "01,0E");
    }

    #[test]
    fn file_dates_use_encoding_pattern() {
        let secs = 1_700_000_000;
        let r = mir("LOT", secs);
        assert_eq!(
            FieldFormatter::text("|").format_named(&r, "START_T").unwrap(),
            local(secs, "%H:%M:%S %d-%b-%Y")
        );
        assert_eq!(
            FieldFormatter::markup().format_named(&r, "START_T").unwrap(),
            local(secs, "%H:%M:%ST%d-%b-%Y")
        );
        assert_eq!(
            FieldFormatter::markup().format(&mrr(secs), 0).unwrap(),
            local(secs, "%H:%M:%ST%d-%b-%Y")
        );
    }

    #[test]
    fn dates_outside_mir_mrr_stay_raw() {
        let r = Record::empty(RecordType::Wir).with("START_T", 1_700_000_000u32).unwrap();
        assert_eq!(FieldFormatter::markup().format_named(&r, "START_T").unwrap(), "1700000000");
    }

    #[test]
    fn variadic_joins_every_value() {
        let r = gdr();
        assert_eq!(FieldFormatter::markup().format(&r, 0).unwrap(), "1;abc;2.5");
        assert_eq!(FieldFormatter::text("|").format(&r, 0).unwrap(), "1|abc|2.5");
    }

    #[test]
    fn variadic_ignores_field_index() {
        let fmt = FieldFormatter::markup();
        let r = gdr();
        assert_eq!(fmt.format(&r, 0).unwrap(), fmt.format(&r, 3).unwrap());
    }

    #[test]
    fn index_past_schema_is_an_error() {
        let err = FieldFormatter::markup().format(&pir(1, 1), 5).unwrap_err();
        assert!(matches!(err, OutputError::Record(StdfError::FieldIndex { index: 5, .. })));
    }
}

// ── Escaping ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod escape_tests {
    use crate::escape::{escape_attr, quote_attr};

    #[test]
    fn markup_characters() {
        assert_eq!(escape_attr("a<b>&c"), "a&lt;b&gt;&amp;c");
        assert_eq!(escape_attr("x\ny\tz\r"), "x&#10;y&#9;z&#13;");
    }

    #[test]
    fn nul_is_dropped() {
        assert_eq!(escape_attr("\0"), "");
        assert_eq!(escape_attr("a\0b"), "ab");
    }

    #[test]
    fn quote_selection() {
        assert_eq!(quote_attr("plain"), "\"plain\"");
        assert_eq!(quote_attr("say \"hi\""), "'say \"hi\"'");
        assert_eq!(quote_attr("it's \"x\""), "\"it's &quot;x&quot;\"");
    }
}

// ── Sinks and the driver ──────────────────────────────────────────────────────

#[cfg(test)]
mod sink_tests {
    use stdf_core::{HeadSite, RenderConfig};

    use super::fixtures::*;
    use crate::{
        render_stream, DetailedCsvWriter, NoopSink, OutputError, SinkFanout, TextWriter, XmlWriter,
    };

    #[test]
    fn noop_counts_records() {
        let records = vec![far(), pir(1, 1), gdr()];
        assert_eq!(render_stream(&records, &mut NoopSink).unwrap(), 3);
    }

    #[test]
    fn fanout_feeds_every_sink() {
        let config = RenderConfig::default();
        let mut text = TextWriter::new(Vec::new(), &config);
        let mut xml = XmlWriter::new(Vec::new(), &config);
        {
            let mut fanout = SinkFanout::new();
            fanout.push(&mut text).push(&mut xml);
            assert_eq!(fanout.len(), 2);
            render_stream([far()], &mut fanout).unwrap();
        }
        assert_eq!(utf8(text.into_inner().unwrap()), "FAR|2|4\n");
        assert_eq!(
            utf8(xml.into_inner().unwrap()),
            "<Stdf>\n<Far CPU_TYPE=\"2\" STDF_VER=\"4\"/>\n</Stdf>\n"
        );
    }

    #[test]
    fn driver_stops_at_first_error() {
        let records = vec![pir(1, 2), ptr(1, 1, 3, 0, 0.0, "t"), pir(1, 3)];
        let mut w = DetailedCsvWriter::new(Vec::new(), Vec::new());
        let err = render_stream(&records, &mut w).unwrap_err();
        assert!(matches!(err, OutputError::UnresolvedPart(k) if k == HeadSite::new(1, 3)));
        // The third record never arrived.
        assert_eq!(w.state().parts.len(), 1);
    }
}

// ── Stateless renderers ───────────────────────────────────────────────────────

#[cfg(test)]
mod text_tests {
    use stdf_core::{FieldValue, Record, RecordType, RenderConfig};

    use super::fixtures::*;
    use crate::{render_stream, TextWriter};

    fn render_text(records: &[Record], config: &RenderConfig) -> String {
        let mut w = TextWriter::new(Vec::new(), config);
        render_stream(records, &mut w).unwrap();
        utf8(w.into_inner().unwrap())
    }

    #[test]
    fn one_line_per_record() {
        let out = render_text(&[far(), pir(1, 2)], &RenderConfig::default());
        assert_eq!(out, "FAR|2|4\nPIR|1|2\n");
    }

    #[test]
    fn custom_delimiter() {
        let out = render_text(&[far()], &RenderConfig::with_delimiter(","));
        assert_eq!(out, "FAR,2,4\n");
    }

    #[test]
    fn absent_values_are_empty_columns() {
        let r = Record::new(RecordType::Pir, vec![FieldValue::from(1u8), FieldValue::Null]);
        assert_eq!(render_text(&[r], &RenderConfig::default()), "PIR|1|\n");
    }

    #[test]
    fn record_without_fields() {
        let out = render_text(&[Record::empty(RecordType::Eps)], &RenderConfig::default());
        assert_eq!(out, "EPS|\n");
    }

    #[test]
    fn variadic_uses_the_delimiter() {
        assert_eq!(render_text(&[gdr()], &RenderConfig::default()), "GDR|1|abc|2.5\n");
    }

    #[test]
    fn full_ptr_line_has_every_column() {
        let out = render_text(&[ptr(7, 1, 2, 0, 0.5, "t")], &RenderConfig::default());
        assert_eq!(out.trim_end().split('|').count(), 1 + RecordType::Ptr.fields().len());
        assert!(out.starts_with("PTR|7|1|2|0||0.5|t|"));
    }
}

#[cfg(test)]
mod xml_tests {
    use stdf_core::{Record, RecordType, RenderConfig};

    use super::fixtures::*;
    use crate::{render_stream, XmlWriter};

    fn render_xml(records: &[Record], config: &RenderConfig) -> String {
        let mut w = XmlWriter::new(Vec::new(), config);
        render_stream(records, &mut w).unwrap();
        utf8(w.into_inner().unwrap())
    }

    fn dtr(text: &str) -> Record {
        Record::empty(RecordType::Dtr).with("TEXT_DAT", text).unwrap()
    }

    #[test]
    fn document_wraps_elements() {
        let out = render_xml(&[far(), pir(1, 2)], &RenderConfig::default());
        assert_eq!(
            out,
            "<Stdf>\n<Far CPU_TYPE=\"2\" STDF_VER=\"4\"/>\n<Pir HEAD_NUM=\"1\" SITE_NUM=\"2\"/>\n</Stdf>\n"
        );
    }

    #[test]
    fn empty_stream_is_still_a_document() {
        assert_eq!(render_xml(&[], &RenderConfig::default()), "<Stdf>\n</Stdf>\n");
    }

    #[test]
    fn nul_becomes_empty_attribute() {
        let out = render_xml(&[dtr("\0")], &RenderConfig::default());
        assert!(out.contains("<Dtr TEXT_DAT=\"\"/>"), "got {out}");
        assert!(!out.contains("&#0;"));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let out = render_xml(&[dtr("a < b & \"c\"")], &RenderConfig::default());
        assert!(out.contains("<Dtr TEXT_DAT='a &lt; b &amp; \"c\"'/>"), "got {out}");
    }

    #[test]
    fn variadic_is_one_attribute() {
        let out = render_xml(&[gdr()], &RenderConfig::default());
        assert!(out.contains("<Gdr GEN_DATA=\"1;abc;2.5\"/>"), "got {out}");
    }

    #[test]
    fn configurable_root() {
        let config = RenderConfig { root_element: "Lot".to_owned(), ..RenderConfig::default() };
        assert_eq!(render_xml(&[], &config), "<Lot>\n</Lot>\n");
    }
}

// ── CSV renderers ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod simple_csv_tests {
    use stdf_core::Record;

    use super::fixtures::*;
    use crate::simple::RESULT_HEADER;
    use crate::{render_stream, CsvWriter};

    fn render_csv(records: &[Record]) -> Vec<u8> {
        let mut w = CsvWriter::new(Vec::new());
        render_stream(records, &mut w).unwrap();
        w.into_inner().unwrap()
    }

    #[test]
    fn header_only_for_empty_stream() {
        assert_eq!(
            utf8(render_csv(&[])),
            "sequence_no,test_number,head_num,site_number,test_text,result,pass_or_fail\n"
        );
    }

    #[test]
    fn result_row_layout() {
        let out = render_csv(&[bps("FLOW_A"), ptr(100, 1, 2, 0, 1.5, "VDD leakage")]);
        assert_eq!(
            utf8(out),
            "sequence_no,test_number,head_num,site_number,test_text,result,pass_or_fail\n\
             \"FLOW_A\",100,1,2,\"VDD leakage\",1.5,1\n"
        );
    }

    #[test]
    fn pass_fail_polarity() {
        let out = render_csv(&[bps("S"), ptr(1, 1, 1, 0, 0.0, "a"), ptr(2, 1, 1, 1, 0.0, "b")]);
        let (headers, rows) = csv_rows(&out);
        assert_eq!(headers, RESULT_HEADER);
        assert_eq!(&rows[0][6], "1");
        assert_eq!(&rows[1][6], "0");
    }

    #[test]
    fn absent_flag_counts_as_zero() {
        let mut r = ptr(1, 1, 1, 0, 0.0, "a");
        r.set("TEST_FLG", stdf_core::FieldValue::Null).unwrap();
        let (_, rows) = csv_rows(&render_csv(&[r]));
        assert_eq!(&rows[0][6], "1");
    }

    #[test]
    fn label_follows_latest_sequence() {
        let out = render_csv(&[
            ptr(1, 1, 1, 0, 0.0, "before"),
            bps("FIRST"),
            ptr(2, 1, 1, 0, 0.0, "a"),
            bps("SECOND"),
            ptr(3, 1, 1, 0, 0.0, "b"),
        ]);
        let (_, rows) = csv_rows(&out);
        let labels: Vec<_> = rows.iter().map(|r| r[0].to_owned()).collect();
        assert_eq!(labels, ["", "FIRST", "SECOND"]);
    }

    #[test]
    fn label_is_attribute_escaped() {
        let (_, rows) = csv_rows(&render_csv(&[bps("A<B\0"), ptr(1, 1, 1, 0, 0.0, "t")]));
        assert_eq!(&rows[0][0], "A&lt;B");
    }

    #[test]
    fn other_records_are_ignored() {
        let (_, rows) = csv_rows(&render_csv(&[far(), pir(1, 1), mir("X", 0), gdr(), mrr(1)]));
        assert!(rows.is_empty());
    }

    #[test]
    fn quotes_in_test_text_are_doubled() {
        let out = utf8(render_csv(&[bps("S"), ptr(1, 1, 1, 0, 0.0, "say \"hi\"")]));
        assert!(out.contains("\"say \"\"hi\"\"\""), "got {out}");
    }
}

#[cfg(test)]
mod summary_csv_tests {
    use stdf_core::Record;

    use super::fixtures::*;
    use crate::state::temperature_token;
    use crate::summary::SUMMARY_HEADER;
    use crate::{render_stream, FileSummaryCsvWriter};

    fn render_summary(records: &[Record]) -> Vec<u8> {
        let mut w = FileSummaryCsvWriter::new(Vec::new());
        render_stream(records, &mut w).unwrap();
        w.into_inner().unwrap()
    }

    #[test]
    fn temperature_is_third_segment() {
        assert_eq!(temperature_token("LOT7_FT_25C_WK12"), Some("25C"));
        assert_eq!(temperature_token("A_B_"), Some(""));
        assert_eq!(temperature_token("LOT_25C"), None);
        assert_eq!(temperature_token("LOT"), None);
    }

    #[test]
    fn one_row_at_trailer() {
        let out = render_summary(&[mir("LOT7_FT_25C_WK12", 1_700_000_000), far(), mrr(1_700_003_600)]);
        assert_eq!(
            utf8(out),
            "file_name,start_timestamp,end_timestamp,temperature_ran\n\
             \"LOT7_FT_25C_WK12\",1700000000,1700003600,\"25C\"\n"
        );
    }

    #[test]
    fn missing_temperature_is_not_fatal() {
        let out = render_summary(&[mir("LOT", 10), mrr(20)]);
        let (headers, rows) = csv_rows(&out);
        assert_eq!(headers, SUMMARY_HEADER);
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "LOT");
        assert_eq!(&rows[0][3], "");
    }

    #[test]
    fn no_trailer_no_row() {
        let (_, rows) = csv_rows(&render_summary(&[mir("A_B_C", 10)]));
        assert!(rows.is_empty());
    }
}

#[cfg(test)]
mod detailed_csv_tests {
    use stdf_core::{HeadSite, Record};
    use tempfile::TempDir;

    use super::fixtures::*;
    use crate::detailed::DETAILED_HEADER;
    use crate::summary::SUMMARY_HEADER;
    use crate::{render_stream, DetailedCsvWriter, OutputError, PartTracker};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn render_detailed(records: &[Record]) -> (Vec<u8>, Vec<u8>) {
        let mut w = DetailedCsvWriter::new(Vec::new(), Vec::new());
        render_stream(records, &mut w).unwrap();
        w.into_inner().unwrap()
    }

    fn session() -> Vec<Record> {
        vec![
            far(),
            mir("LOT7_FT_25C_WK12", 1_700_000_000),
            bps("FLOW_A"),
            pir(1, 2),
            pir(1, 3),
            ptr(100, 1, 3, 0, 1.5, "VDD"),
            ptr(101, 1, 2, 1, 2.5, "IDD"),
            mrr(1_700_003_600),
        ]
    }

    #[test]
    fn part_numbers_follow_pir_order() {
        let (results, _) = render_detailed(&session());
        let (headers, rows) = csv_rows(&results);
        assert_eq!(headers, DETAILED_HEADER);
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "2"); // head 1 site 3 was the second part
        assert_eq!(&rows[1][2], "1");
    }

    #[test]
    fn result_rows_carry_file_and_sequence() {
        let (results, _) = render_detailed(&session());
        let (_, rows) = csv_rows(&results);
        let first: Vec<_> = rows[0].iter().collect();
        assert_eq!(first, ["LOT7_FT_25C_WK12", "FLOW_A", "2", "100", "1", "3", "VDD", "1.5", "1"]);
        assert_eq!(&rows[1][8], "0");
    }

    #[test]
    fn summary_goes_to_second_destination() {
        let (_, summary) = render_detailed(&session());
        let (headers, rows) = csv_rows(&summary);
        assert_eq!(headers, SUMMARY_HEADER);
        let row: Vec<_> = rows[0].iter().collect();
        assert_eq!(row, ["LOT7_FT_25C_WK12", "1700000000", "1700003600", "25C"]);
    }

    #[test]
    fn new_part_on_same_site_gets_next_number() {
        let (results, _) = render_detailed(&[
            pir(1, 1),
            ptr(1, 1, 1, 0, 0.0, "a"),
            pir(1, 1),
            ptr(1, 1, 1, 0, 0.0, "a"),
        ]);
        let (_, rows) = csv_rows(&results);
        assert_eq!(&rows[0][2], "1");
        assert_eq!(&rows[1][2], "2");
    }

    #[test]
    fn result_without_part_is_an_error() {
        let mut w = DetailedCsvWriter::new(Vec::new(), Vec::new());
        let err = render_stream(&[pir(1, 2), ptr(1, 1, 3, 0, 0.0, "t")], &mut w).unwrap_err();
        assert!(matches!(err, OutputError::UnresolvedPart(k) if k == HeadSite::new(1, 3)));
        assert_eq!(err.to_string(), "no part started on head/site 1-3");

        let (results, _) = w.into_inner().unwrap();
        let (_, rows) = csv_rows(&results);
        assert!(rows.is_empty(), "no row may be emitted for an unresolved part");
    }

    #[test]
    fn unreadable_head_number_is_a_record_error() {
        let bad = Record::empty(stdf_core::RecordType::Pir)
            .with("HEAD_NUM", "one")
            .unwrap()
            .with("SITE_NUM", 1u8)
            .unwrap();
        let mut w = DetailedCsvWriter::new(Vec::new(), Vec::new());
        let err = render_stream([bad], &mut w).unwrap_err();
        assert!(matches!(
            err,
            OutputError::Record(stdf_core::StdfError::NotAnInteger { field: "HEAD_NUM", .. })
        ));
    }

    #[test]
    fn part_tracker_numbers_from_one() {
        let mut parts = PartTracker::default();
        assert!(parts.is_empty());
        assert_eq!(parts.assign(HeadSite::new(1, 2)), 1);
        assert_eq!(parts.assign(HeadSite::new(1, 3)), 2);
        assert_eq!(parts.lookup(HeadSite::new(1, 3)).unwrap(), 2);
        assert!(parts.lookup(HeadSite::new(2, 0)).is_err());
    }

    #[test]
    fn fresh_sessions_are_byte_identical() {
        let records = session();
        assert_eq!(render_detailed(&records), render_detailed(&records));
    }

    #[test]
    fn file_destinations() {
        let dir = tmp();
        let results = std::fs::File::create(dir.path().join("results.csv")).unwrap();
        let summary = std::fs::File::create(dir.path().join("summary.csv")).unwrap();
        let mut w = DetailedCsvWriter::new(results, summary);
        render_stream(&session(), &mut w).unwrap();
        drop(w);

        let mut rdr = csv::Reader::from_path(dir.path().join("results.csv")).unwrap();
        assert_eq!(rdr.records().count(), 2);
        let mut rdr2 = csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        assert_eq!(rdr2.records().count(), 1);
    }
}
