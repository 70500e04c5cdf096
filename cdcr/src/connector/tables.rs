/// Qualifies every bare table name with `qualifier` and joins the result with
/// `,`. Names that already contain a `.` are kept as given.
pub fn format_table_list<T>(qualifier: &str, tables: &[T]) -> String
where
    T: AsRef<str>,
{
    tables
        .iter()
        .map(|table| {
            let table = table.as_ref();
            if table.contains('.') {
                table.to_string()
            } else {
                format!("{}.{}", qualifier, table)
            }
        })
        .collect::<Vec<String>>()
        .join(",")
}
