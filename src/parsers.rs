use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::warn;

use crate::error::ScrapeError;
use crate::types::{LotteryKind, Reward};

// Mega 6/45 and Power 6/55 share one archive layout.
static PAIR_BODY: LazyLock<Selector> = LazyLock::new(|| selector("#divResultContent table tbody"));
// Max 3D, Max 4D and Keno share the other.
static ND_BODY: LazyLock<Selector> = LazyLock::new(|| selector(".doso_output_nd table tbody"));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static NUMBER_SPAN: LazyLock<Selector> = LazyLock::new(|| selector("span"));
static CODE_ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static DATE_DIV: LazyLock<Selector> = LazyLock::new(|| selector("div"));
static MARKED_NUMBER: LazyLock<Selector> = LazyLock::new(|| selector(".day_so_ket_qua_v2"));

const DATE_PREFIX: &str = "Ngày: ";

fn selector(css: &str) -> Selector {
    // All inputs are literals above; compilation is covered by tests.
    Selector::parse(css).expect("invalid selector literal")
}

/// Dispatch to the layout parser matching the kind.
pub fn extract_rewards(kind: LotteryKind, doc: &Html) -> Result<Vec<Reward>, ScrapeError> {
    match kind {
        LotteryKind::Mega645 | LotteryKind::Power655 => parse_pair_table(kind, doc),
        LotteryKind::Max3D | LotteryKind::Max4D => parse_nd_grid(kind, doc),
        LotteryKind::Keno => parse_keno_grid(kind, doc),
    }
}

/// Tabular layout: one draw per row, three fixed columns. Column 0 is the
/// date, column 1 the draw code, column 2 holds the winning numbers as
/// individual spans with a literal `|` glyph between the pair halves.
fn parse_pair_table(kind: LotteryKind, doc: &Html) -> Result<Vec<Reward>, ScrapeError> {
    let Some(body) = doc.select(&PAIR_BODY).next() else {
        return Err(ScrapeError::LayoutMismatch(kind.as_str()));
    };

    let mut rewards = Vec::new();
    for row in body.select(&ROW) {
        let mut reward = Reward::new(kind);
        for (index, cell) in row.select(&CELL).enumerate() {
            match index {
                0 => reward.date_open = element_text(cell),
                1 => reward.code = element_text(cell),
                2 => {
                    let numbers: Vec<String> = cell
                        .select(&NUMBER_SPAN)
                        .map(element_text)
                        .filter(|text| text != "|")
                        .collect();
                    reward.results.push(numbers.join(","));
                }
                _ => {}
            }
        }
        rewards.push(reward);
    }
    Ok(rewards)
}

/// Grid layout used by the n-digit games: draw code in the row's anchor,
/// date in the first sub-division behind a literal label prefix, one results
/// group per marked cell. Rows that do not carry the label are skipped.
fn parse_nd_grid(kind: LotteryKind, doc: &Html) -> Result<Vec<Reward>, ScrapeError> {
    let Some(body) = doc.select(&ND_BODY).next() else {
        return Err(ScrapeError::LayoutMismatch(kind.as_str()));
    };

    let mut rewards = Vec::new();
    for row in body.select(&ROW) {
        let mut reward = Reward::new(kind);

        if let Some(anchor) = row.select(&CODE_ANCHOR).last() {
            reward.code = element_text(anchor);
        }

        let date_text = row.select(&DATE_DIV).next().map(element_text);
        match date_text.as_deref().and_then(|t| t.split_once(DATE_PREFIX)) {
            Some((_, date)) => reward.date_open = date.to_string(),
            None => {
                warn!(kind = kind.as_str(), "row without a dated division, skipping");
                continue;
            }
        }

        for cell in row.select(&MARKED_NUMBER) {
            reward.results.push(element_text(cell));
        }
        rewards.push(reward);
    }
    Ok(rewards)
}

/// Keno grid: row 0 is a header and never yields a record. The first cell of
/// every other row packs date and draw code around a `#` glyph; numbers sit
/// in marked cells of the trailing columns.
fn parse_keno_grid(kind: LotteryKind, doc: &Html) -> Result<Vec<Reward>, ScrapeError> {
    let Some(body) = doc.select(&ND_BODY).next() else {
        return Err(ScrapeError::LayoutMismatch(kind.as_str()));
    };

    let mut rewards = Vec::new();
    for (index, row) in body.select(&ROW).enumerate() {
        if index == 0 {
            continue;
        }

        let mut reward = Reward::new(kind);
        let mut cells = row.select(&CELL);

        let first_cell = cells.next().map(element_text);
        match first_cell.as_deref().and_then(|t| t.split_once('#')) {
            Some((date, code)) => {
                reward.date_open = date.to_string();
                reward.code = code.to_string();
            }
            None => {
                warn!(kind = kind.as_str(), "row without a date#code cell, skipping");
                continue;
            }
        }

        for cell in cells {
            for marked in cell.select(&MARKED_NUMBER) {
                reward.results.push(element_text(marked));
            }
        }
        rewards.push(reward);
    }
    Ok(rewards)
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
