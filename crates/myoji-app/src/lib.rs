use myoji_matrix::render::group_thousands;
use myoji_types::SurnameRecord;

/// Install the fmt subscriber, filtered by `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Human-readable record block, labelled the way the source page labels its
/// fields.
pub fn format_text(record: &SurnameRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("【名字】{}\n", record.kanji));
    out.push_str(&format!("【読み】{}\n", record.readings.join(",")));
    out.push_str(&format!("【全国順位】{}位\n", record.rank_in_country));
    out.push_str(&format!(
        "【全国人数】およそ{}人\n",
        group_thousands(record.count_in_country)
    ));
    if let Some(origin) = &record.origin {
        out.push('\n');
        out.push_str(origin);
        out.push('\n');
    }
    if let Some(uri) = &record.origin_detail_uri {
        out.push_str(&format!("由来詳細: {uri}\n"));
    }
    out
}
