//! Extracting the rows of a standings table from HTML.

use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};

/// Cell text with whitespace runs collapsed to single spaces.
fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().split_whitespace().join(" ")
}

/// All data rows in `html`, each as the text of its `<td>` cells.
///
/// Every `<tr>` in the document counts, in document order. The first one is
/// the header and is skipped.
pub fn extract_rows(html: &str) -> Vec<Vec<String>> {
    let document = Html::parse_document(html);
    let tr = Selector::parse("tr").expect("selector should parse");
    let td = Selector::parse("td").expect("selector should parse");
    document
        .select(&tr)
        .skip(1)
        .map(|row| row.select(&td).map(cell_text).collect_vec())
        .collect_vec()
}
