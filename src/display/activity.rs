//! Activity log display formatting

use super::render_table;
use crate::models::Activity;

pub fn format_activity_list(activities: &[Activity]) -> String {
    if activities.is_empty() {
        return "No activities found.".to_string();
    }

    render_table(
        &["ID", "ACTION", "MESSAGE", "DATE"],
        activities.iter().map(|a| {
            vec![
                a.id.to_string(),
                a.action.clone(),
                a.message.clone(),
                a.created_at.clone(),
            ]
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_activity_list() {
        let activities = vec![Activity {
            id: 31,
            action: "create".to_string(),
            message: "Spicer added a new ledger entry".to_string(),
            created_at: "2026-02-01T10:00:00Z".to_string(),
            ..Default::default()
        }];

        let output = format_activity_list(&activities);
        assert!(output.contains("ACTION"));
        assert!(output.contains("31"));
        assert!(output.contains("Spicer added a new ledger entry"));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_activity_list(&[]).contains("No activities found"));
    }
}
