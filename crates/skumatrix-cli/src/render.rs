use skumatrix_core::CollectionRow;

const VARIANT_HEADER: &str = "Variant";
const PRICE_HEADER: &str = "Price";
const INCLUDE_HEADER: &str = "Include";

/// Renders rows as a plain-text table with a header line.
pub(crate) fn render_table(rows: &[CollectionRow]) -> String {
    if rows.is_empty() {
        return "no variants\n".to_string();
    }

    let prices: Vec<String> = rows.iter().map(|row| format!("{:.2}", row.price)).collect();
    let label_width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .chain(std::iter::once(VARIANT_HEADER.len()))
        .max()
        .unwrap_or(0);
    let price_width = prices
        .iter()
        .map(String::len)
        .chain(std::iter::once(PRICE_HEADER.len()))
        .max()
        .unwrap_or(0);

    let header =
        format!("{VARIANT_HEADER:<label_width$}  {PRICE_HEADER:>price_width$}  {INCLUDE_HEADER}");
    let lines = rows.iter().zip(&prices).map(|(row, price)| {
        let included = if row.included { "yes" } else { "no" };
        format!("{:<label_width$}  {price:>price_width$}  {included}", row.label)
    });

    let mut out = std::iter::once(header)
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}

/// Renders rows as a JSON array.
pub(crate) fn render_json(rows: &[CollectionRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}
