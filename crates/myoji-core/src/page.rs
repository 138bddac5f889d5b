//! Page template contract for the surname detail page.
//!
//! The source layout is uncontrolled, so every fixed selector, label prefix
//! and glyph pattern lives here as a named constant and any deviation fails
//! closed with a [`PageError`] instead of producing a partial record.

use std::cell::RefCell;
use std::sync::OnceLock;

use lol_html::html_content::ContentType;
use lol_html::{RewriteStrSettings, element, rewrite_str, text};
use regex::Regex;

use myoji_types::SurnameRecord;

use crate::error::PageError;

/// Content blocks inside the page container, in document order:
/// title/meta, rank-and-count, origin.
const SEL_POSTS: &str = "div#content > div.post";
const SEL_TITLE: &str = "div#content > div.post h1.title";
const SEL_META: &str = "div#content > div.post p.meta";
const SEL_ORIGIN: &str = "div.box > div.myojiComments";
const SEL_ORIGIN_LINK: &str = "div.box > div.myojiComments a";
const SEL_ORIGIN_BREAK: &str = "div.box > div.myojiComments br";

/// Label prefix on the title line, e.g. `【名字】山田`.
const TITLE_LABEL: &str = "【名字】";
/// Label prefix on the readings line, e.g. `【読み】やまだ,やまた`.
const META_LABEL: &str = "【読み】";
/// Phrase the page shows in place of a narrative that nobody has written yet.
pub const ORIGIN_NOT_REGISTERED: &str = "の解説はまだ登録されていません。";

const READING_SEPARATOR: char = ',';
const POSTS_REQUIRED: usize = 3;
/// Index of the block carrying `【全国順位】`/`【全国人数】`.
const RANK_POST: usize = 1;

/// Digits immediately followed by the rank suffix glyph, e.g. `12位`.
fn rank_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)位").expect("valid regex"))
}

/// Digits with thousands separators followed by the count suffix glyph,
/// e.g. `814,000人`.
fn count_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([\d,]+)人").expect("valid regex"))
}

/// Parse one surname detail page into a record.
///
/// Pure function of the input text: identical input yields an identical
/// record or an identical failure.
pub fn extract(html: &str) -> Result<SurnameRecord, PageError> {
    let scan = scan_posts(html)?;
    if scan.posts.len() < POSTS_REQUIRED {
        return Err(PageError::NotEnoughPosts(scan.posts.len()));
    }

    let kanji = clean_text(&scan.title)
        .strip_prefix(TITLE_LABEL)
        .ok_or(PageError::TitleLabel)?
        .trim()
        .to_string();
    if kanji.is_empty() {
        return Err(PageError::EmptyKanji);
    }

    let readings: Vec<String> = clean_text(&scan.meta)
        .strip_prefix(META_LABEL)
        .ok_or(PageError::ReadingsLabel)?
        .split(READING_SEPARATOR)
        .map(str::trim)
        .filter(|yomi| !yomi.is_empty())
        .map(str::to_string)
        .collect();
    if readings.is_empty() {
        return Err(PageError::NoReadings);
    }

    let rank_and_count = clean_text(&scan.posts[RANK_POST]);
    let rank_in_country: u32 = rank_regex()
        .captures(&rank_and_count)
        .ok_or(PageError::RankNotFound)?[1]
        .parse()?;
    let count_in_country: u64 = count_regex()
        .captures(&rank_and_count)
        .ok_or(PageError::CountNotFound)?[1]
        .replace(',', "")
        .parse()?;

    let origin = extract_origin(html)?;

    Ok(SurnameRecord {
        kanji,
        readings,
        rank_in_country,
        count_in_country,
        origin: origin.narrative,
        origin_detail_uri: origin.detail_uri,
    })
}

struct PostScan {
    posts: Vec<String>,
    title: String,
    meta: String,
}

fn scan_posts(html: &str) -> Result<PostScan, PageError> {
    let posts: RefCell<Vec<String>> = RefCell::new(Vec::new());
    let title = RefCell::new(String::new());
    let meta = RefCell::new(String::new());

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!(SEL_POSTS, |_el| {
                    posts.borrow_mut().push(String::new());
                    Ok(())
                }),
                text!(SEL_POSTS, |t| {
                    if let Some(post) = posts.borrow_mut().last_mut() {
                        post.push_str(t.as_str());
                    }
                    Ok(())
                }),
                text!(SEL_TITLE, |t| {
                    title.borrow_mut().push_str(t.as_str());
                    Ok(())
                }),
                text!(SEL_META, |t| {
                    meta.borrow_mut().push_str(t.as_str());
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::new()
        },
    )?;

    Ok(PostScan {
        posts: posts.into_inner(),
        title: title.into_inner(),
        meta: meta.into_inner(),
    })
}

struct OriginScan {
    narrative: Option<String>,
    detail_uri: Option<String>,
}

fn extract_origin(html: &str) -> Result<OriginScan, PageError> {
    let detail_uri: RefCell<Option<String>> = RefCell::new(None);

    // First pass: take the detail link's target and drop the link element so
    // its text does not leak into the narrative, and turn <br> into literal
    // newlines so the narrative keeps its line structure.
    let rewritten = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!(SEL_ORIGIN_LINK, |el| {
                    let mut uri = detail_uri.borrow_mut();
                    if uri.is_none() {
                        *uri = el.get_attribute("href");
                    }
                    el.remove();
                    Ok(())
                }),
                element!(SEL_ORIGIN_BREAK, |el| {
                    el.replace("\n", ContentType::Text);
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::new()
        },
    )?;

    // Second pass: collect what is left of the narrative.
    let seen = RefCell::new(false);
    let raw = RefCell::new(String::new());
    rewrite_str(
        &rewritten,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!(SEL_ORIGIN, |_el| {
                    *seen.borrow_mut() = true;
                    Ok(())
                }),
                text!(SEL_ORIGIN, |t| {
                    raw.borrow_mut().push_str(t.as_str());
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::new()
        },
    )?;

    if !seen.into_inner() {
        return Err(PageError::OriginMissing);
    }

    let narrative = clean_text(&raw.into_inner());
    let narrative = if narrative.contains(ORIGIN_NOT_REGISTERED) {
        None
    } else {
        Some(narrative)
    };

    Ok(OriginScan {
        narrative,
        detail_uri: detail_uri.into_inner(),
    })
}

fn clean_text(raw: &str) -> String {
    htmlize::unescape(raw).trim().to_string()
}

#[cfg(test)]
pub(crate) const SAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head><meta charset="utf-8"><title>山田さんの名字の由来、語源、分布</title></head>
<body>
<div id="header"><p>名字由来検索</p></div>
<div id="content">
<div class="post">
<h1 class="title">【名字】山田</h1>
<p class="meta">【読み】やまだ,やまた,ようだ,やだ</p>
</div>
<div class="post">
<p>【全国順位】 12位<br>【全国人数】 およそ814,000人</p>
</div>
<div class="post">
<div class="box">
<div class="myojiComments">
現愛知県である尾張国山田郡が起源（ルーツ）である。<br>地形由来の名字であり、全国各地に地名が存在する。<a href="/detail.htm?myojiKanji=山田">続きを見る</a>
</div>
</div>
</div>
</div>
<div id="footer"><p>&copy; example</p></div>
</body>
</html>
"#;
