//! Pure rendering of search results: the same model feeds the egui grid and
//! the HTML export.

use shared::protocol::Recommendation;

pub const RESULT_COLUMNS: [&str; 5] = [
    "Recommendation ID",
    "Product A SKU",
    "Product B SKU",
    "Recommendation type",
    "Likes",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsTable {
    records: Vec<Recommendation>,
}

impl ResultsTable {
    pub fn new(records: Vec<Recommendation>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Recommendation] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = [String; 5]> + '_ {
        self.records().iter().map(row_cells)
    }

    pub fn to_html(&self) -> String {
        render_results_table(&self.records)
    }
}

fn row_cells(record: &Recommendation) -> [String; 5] {
    [
        record.id.to_string(),
        record.product_a_sku.clone(),
        record.product_b_sku.clone(),
        record.recommendation_type.clone(),
        record.likes.to_string(),
    ]
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_results_table(records: &[Recommendation]) -> String {
    let mut table = String::from(r#"<table class="table table-striped" cellpadding="10">"#);
    table.push_str("<thead><tr>");
    for column in RESULT_COLUMNS {
        table.push_str(&format!(r#"<th class="col-md-2">{column}</th>"#));
    }
    table.push_str("</tr></thead><tbody>");
    for (i, record) in records.iter().enumerate() {
        table.push_str(&format!(r#"<tr id="row_{i}">"#));
        for cell in row_cells(record) {
            table.push_str("<td>");
            table.push_str(&escape_html(&cell));
            table.push_str("</td>");
        }
        table.push_str("</tr>");
    }
    table.push_str("</tbody></table>");
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::RecommendationId;

    fn record(id: i64, product_b_sku: &str) -> Recommendation {
        Recommendation {
            id: RecommendationId(id),
            product_a_sku: "A1".into(),
            product_b_sku: product_b_sku.into(),
            recommendation_type: "ACCESSORY".into(),
            likes: 2,
        }
    }

    #[test]
    fn empty_results_render_header_and_no_body_rows() {
        let html = render_results_table(&[]);
        assert!(html.contains("<th class=\"col-md-2\">Likes</th>"));
        assert!(html.ends_with("<tbody></tbody></table>"));
        assert!(!html.contains("<tr id="));
    }

    #[test]
    fn rows_follow_server_order_with_indexed_ids() {
        let html = render_results_table(&[record(5, "B5"), record(3, "B3")]);
        let first = html.find(r#"<tr id="row_0"><td>5</td>"#).expect("row 0");
        let second = html.find(r#"<tr id="row_1"><td>3</td>"#).expect("row 1");
        assert!(first < second);
        assert!(html.contains("<td>A1</td><td>B5</td><td>ACCESSORY</td><td>2</td>"));
    }

    #[test]
    fn cell_text_is_escaped() {
        let html = render_results_table(&[record(1, "<b>&x")]);
        assert!(html.contains("<td>&lt;b&gt;&amp;x</td>"));
    }

    #[test]
    fn table_rows_match_records() {
        let table = ResultsTable::new(vec![record(8, "B8")]);
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(
            rows,
            vec![[
                "8".to_string(),
                "A1".to_string(),
                "B8".to_string(),
                "ACCESSORY".to_string(),
                "2".to_string()
            ]]
        );
        assert_eq!(table.len(), 1);
    }
}
