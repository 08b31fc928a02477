//! Label display formatting

use super::render_table;
use crate::models::Label;

pub fn format_label_list(labels: &[Label]) -> String {
    if labels.is_empty() {
        return "No labels found.".to_string();
    }

    render_table(
        &["ID", "NAME", "COUNT"],
        labels
            .iter()
            .map(|l| vec![l.id.to_string(), l.name.clone(), l.count.to_string()]),
    )
}

pub fn format_label_details(label: &Label) -> String {
    format!(
        "ID:    {}\nName:  {}\nCount: {}\n",
        label.id, label.name, label.count
    )
}
