use chrono::{DateTime, Datelike, NaiveDate, Utc};
use shared_types::{Post, Visit};

/// Duration of a visit as shown in the history table. A visit without a
/// check-out is still running.
pub fn visit_duration(visit: &Visit) -> String {
    let Some(check_out) = visit.check_out_at else {
        return "Active".to_string();
    };
    let minutes = (check_out - visit.check_in_at).num_minutes().max(0);
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, rest)
    } else {
        format!("{}m", rest)
    }
}

/// Distribution-scope badge for a post. Global wins regardless of any other
/// target fields; otherwise a single target shows its name and multiple
/// targets collapse to a count.
pub fn post_scope_label(post: &Post) -> String {
    if post.is_global {
        return "Global".to_string();
    }
    match post.target_clubs_details.as_slice() {
        [] => {}
        [only] => return only.name.clone(),
        many => return format!("{} Clubs", many.len()),
    }
    match post.target_municipalities_details.as_slice() {
        [] => {}
        [only] => return only.name.clone(),
        many => return format!("{} Municipalities", many.len()),
    }
    "No audience".to_string()
}

/// Whole years between a date of birth and `today`.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

pub fn short_date(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

pub fn short_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

pub fn time_of_day(ts: DateTime<Utc>) -> String {
    ts.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared_types::{NamedRef, PostStatus, PostType};

    fn visit(check_in: &str, check_out: Option<&str>) -> Visit {
        Visit {
            id: 1,
            user: 1,
            user_details: None,
            club: 1,
            club_details: None,
            check_in_at: check_in.parse().unwrap(),
            check_out_at: check_out.map(|s| s.parse().unwrap()),
        }
    }

    #[test]
    fn visit_durations_render_hours_and_minutes() {
        let done = visit("2024-01-01T10:00:00Z", Some("2024-01-01T11:30:00Z"));
        assert_eq!(visit_duration(&done), "1h 30m");

        let short = visit("2024-01-01T10:00:00Z", Some("2024-01-01T10:45:00Z"));
        assert_eq!(visit_duration(&short), "45m");

        let open = visit("2024-01-01T10:00:00Z", None);
        assert_eq!(visit_duration(&open), "Active");
    }

    fn post(is_global: bool, clubs: Vec<&str>) -> Post {
        Post {
            id: 1,
            title: "t".into(),
            content: String::new(),
            post_type: PostType::Text,
            status: PostStatus::Published,
            is_global,
            target_municipalities: vec![],
            target_municipalities_details: vec![],
            target_clubs: (0..clubs.len() as i64).collect(),
            target_clubs_details: clubs
                .into_iter()
                .enumerate()
                .map(|(id, name)| NamedRef {
                    id: id as i64,
                    name: name.to_string(),
                })
                .collect(),
            target_groups: vec![],
            age_from: None,
            age_to: None,
            grades: vec![],
            genders: vec![],
            interests: vec![],
            custom_fields: Default::default(),
            images: vec![],
            published_at: None,
            created_at: None,
        }
    }

    #[test]
    fn scope_badge_prefers_global_then_names_then_counts() {
        assert_eq!(post_scope_label(&post(true, vec!["Riverside"])), "Global");
        assert_eq!(post_scope_label(&post(false, vec!["Riverside"])), "Riverside");
        assert_eq!(
            post_scope_label(&post(false, vec!["Riverside", "Northside"])),
            "2 Clubs"
        );
        assert_eq!(post_scope_label(&post(false, vec![])), "No audience");
    }

    #[test]
    fn age_counts_whole_years() {
        let dob = NaiveDate::from_ymd_opt(2010, 6, 15).unwrap();
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()), 13);
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()), 14);
    }

    #[test]
    fn date_formats_are_iso_like() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 9, 5, 0).unwrap();
        assert_eq!(short_date(ts), "2024-01-01");
        assert_eq!(short_datetime(ts), "2024-01-01 09:05");
        assert_eq!(time_of_day(ts), "09:05");
    }
}
