use scraper::{ElementRef, Html, Selector};

use crate::search::ReviewMetadata;

/// Extract review metadata for `title` from a Rotten Tomatoes search page.
///
/// Prefers the first movie row whose title matches case-insensitively and
/// falls back to the first movie row. Returns `None` whenever the page does
/// not have the expected shape.
pub fn parse_search_page(html: &str, title: &str, base_url: &str) -> Option<ReviewMetadata> {
    let section_sel = Selector::parse(r#"search-page-result[type="movie"]"#).ok()?;
    let row_sel = Selector::parse("search-page-media-row").ok()?;
    let name_sel = Selector::parse(r#"a[data-qa="info-name"], a[slot="title"]"#).ok()?;

    let document = Html::parse_document(html);
    let section = document.select(&section_sel).next()?;
    let rows: Vec<ElementRef> = section.select(&row_sel).collect();

    let wanted = normalize_title(title);
    let row = rows
        .iter()
        .find(|row| {
            row.select(&name_sel)
                .next()
                .map(|a| normalize_title(&a.text().collect::<String>()) == wanted)
                .unwrap_or(false)
        })
        .or_else(|| rows.first())?;

    extract_row(row, &name_sel, base_url)
}

fn extract_row(row: &ElementRef, name_sel: &Selector, base_url: &str) -> Option<ReviewMetadata> {
    let thumb_sel = Selector::parse(r#"a[data-qa="thumbnail-link"]"#).ok()?;
    let img_sel = Selector::parse("img").ok()?;
    let year_sel = Selector::parse(r#"[data-qa="info-year"]"#).ok()?;

    let href = row
        .select(name_sel)
        .chain(row.select(&thumb_sel))
        .find_map(|a| a.value().attr("href"))
        .map(str::trim)
        .filter(|h| !h.is_empty())?;

    let poster = row
        .select(&img_sel)
        .find_map(|img| img.value().attr("src"))
        .map(str::trim)
        .filter(|s| !s.is_empty())?;

    let score = format_score(row.value().attr("tomatometerscore").unwrap_or(""));

    let release_year = non_empty(row.value().attr("releaseyear")).or_else(|| {
        row.select(&year_sel).next().and_then(|label| {
            let text = label.text().collect::<String>();
            let year = text.trim().trim_matches(|c: char| c == '(' || c == ')').trim();
            non_empty(Some(year))
        })
    });

    let cast = non_empty(row.value().attr("cast"));

    Some(ReviewMetadata {
        rt_link: absolute_url(base_url, href),
        poster_url: absolute_url(base_url, poster),
        tomato_score: score,
        release_year,
        cast,
    })
}

fn normalize_title(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// "88" becomes "88%"; an unrated movie has an empty attribute.
fn format_score(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        "N/A".to_string()
    } else if raw.chars().all(|c| c.is_ascii_digit()) {
        format!("{}%", raw)
    } else {
        raw.to_string()
    }
}

fn absolute_url(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if let Some(rest) = href.strip_prefix("//") {
        format!("https://{}", rest)
    } else {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            href.trim_start_matches('/')
        )
    }
}
