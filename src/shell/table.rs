//! Fixed-width table rendering for the contact list.

use crate::models::Contact;

/// Width of the row-number column.
const ROW_COL: usize = 4;

/// Gap between columns.
const GAP: usize = 2;

/// Render contacts as a fixed-width table with a header row.
///
/// Rows are numbered from 1; those numbers are what `select` takes.
/// Column proportions follow the original form layout: name and email get
/// a quarter of the remaining width each, phone about a sixth, and the
/// address whatever is left.
pub fn render_table(contacts: &[&Contact], width: usize) -> String {
    let widths = ColumnWidths::for_total(width);
    let mut out = String::new();

    out.push_str(&render_row(&widths, "#", "Name", "Phone", "Email", "Address"));
    out.push('\n');
    out.push_str(&"-".repeat(widths.total()));
    out.push('\n');

    if contacts.is_empty() {
        out.push_str("(no contacts)\n");
        return out;
    }

    for (index, contact) in contacts.iter().enumerate() {
        let row = (index + 1).to_string();
        out.push_str(&render_row(
            &widths,
            &row,
            &contact.name,
            contact.phone.as_str(),
            contact.email_display(),
            &contact.address,
        ));
        out.push('\n');
    }

    out
}

#[derive(Debug, Clone, Copy)]
struct ColumnWidths {
    name: usize,
    phone: usize,
    email: usize,
    address: usize,
}

impl ColumnWidths {
    fn for_total(width: usize) -> Self {
        // Keep room for the row column and four gaps
        let usable = width.saturating_sub(ROW_COL + 4 * GAP).max(30);
        let name = usable / 4;
        let phone = (usable / 6).max(10);
        let email = usable / 4;
        let address = usable.saturating_sub(name + phone + email);
        Self {
            name,
            phone,
            email,
            address,
        }
    }

    fn total(&self) -> usize {
        ROW_COL + self.name + self.phone + self.email + self.address + 4 * GAP
    }
}

fn render_row(
    widths: &ColumnWidths,
    row: &str,
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
) -> String {
    let gap = " ".repeat(GAP);
    format!(
        "{}{gap}{}{gap}{}{gap}{}{gap}{}",
        fit(row, ROW_COL),
        fit(name, widths.name),
        fit(phone, widths.phone),
        fit(email, widths.email),
        fit(address, widths.address),
    )
}

/// Pad or truncate `text` to exactly `width` characters, marking
/// truncation with an ellipsis when there is room for one.
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        let mut s = text.to_string();
        s.extend(std::iter::repeat(' ').take(width - len));
        return s;
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut s: String = text.chars().take(width - 3).collect();
    s.push_str("...");
    s
}
