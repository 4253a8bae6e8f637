use chrono::{Duration, NaiveDate};
use shared_types::{User, VerificationStatus};
use std::collections::BTreeMap;

/// Membership breakdowns shown above the user table. Derived entirely in
/// memory from a drained user set because the backend has no analytics
/// endpoints; recomputed on every reload and after every mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserStats {
    pub total: usize,
    pub new_last_7_days: usize,
    pub new_last_30_days: usize,
    pub by_gender: BTreeMap<String, usize>,
    pub verified: usize,
    pub pending: usize,
    pub unverified: usize,
}

impl UserStats {
    pub fn compute(users: &[User], today: NaiveDate) -> Self {
        let week_ago = today - Duration::days(7);
        let month_ago = today - Duration::days(30);

        let mut stats = UserStats {
            total: users.len(),
            ..Default::default()
        };

        for user in users {
            if let Some(created) = user.created_at {
                let created = created.date_naive();
                if created >= week_ago {
                    stats.new_last_7_days += 1;
                }
                if created >= month_ago {
                    stats.new_last_30_days += 1;
                }
            }

            let gender = user
                .legal_gender
                .clone()
                .unwrap_or_else(|| "Unknown".to_string());
            *stats.by_gender.entry(gender).or_insert(0) += 1;

            match user.verification_status {
                Some(VerificationStatus::Verified) => stats.verified += 1,
                Some(VerificationStatus::Pending) => stats.pending += 1,
                Some(VerificationStatus::Unverified) | None => stats.unverified += 1,
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use shared_types::Role;

    fn user(days_ago: i64, gender: &str, status: Option<VerificationStatus>) -> User {
        let created = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap() - Duration::days(days_ago);
        User {
            id: days_ago,
            first_name: "A".into(),
            last_name: "B".into(),
            email: None,
            role: Role::YouthMember,
            assigned_club: None,
            assigned_club_details: None,
            assigned_municipality: None,
            assigned_municipality_details: None,
            verification_status: status,
            legal_gender: Some(gender.to_string()),
            date_of_birth: None,
            grade: None,
            interests: vec![],
            interests_details: vec![],
            avatar: None,
            created_at: Some(created),
        }
    }

    #[test]
    fn breakdowns_cover_recency_gender_and_verification() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let users = vec![
            user(1, "MALE", Some(VerificationStatus::Verified)),
            user(10, "FEMALE", Some(VerificationStatus::Pending)),
            user(40, "FEMALE", None),
        ];

        let stats = UserStats::compute(&users, today);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.new_last_7_days, 1);
        assert_eq!(stats.new_last_30_days, 2);
        assert_eq!(stats.by_gender.get("FEMALE"), Some(&2));
        assert_eq!(stats.by_gender.get("MALE"), Some(&1));
        assert_eq!(stats.verified, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.unverified, 1);
    }

    #[test]
    fn empty_set_is_all_zeroes() {
        let stats = UserStats::compute(&[], NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(stats, UserStats::default());
    }
}
