/// State of the "select all" box after an item changes.
///
/// Checked exactly when every item is checked, which includes an empty table.
pub fn master_checked(checked_items: usize, total_items: usize) -> bool {
    checked_items == total_items
}

/// Input type the password addon switches to.
pub fn toggled_password_type(current: &str) -> &'static str {
    if current == "password" { "text" } else { "password" }
}
