use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};

/// FOIA request status matching the `foia_status` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "foia_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum FoiaStatus {
    Pending,
    Applied,
}

impl std::fmt::Display for FoiaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoiaStatus::Pending => write!(f, "PENDING"),
            FoiaStatus::Applied => write!(f, "APPLIED"),
        }
    }
}

impl std::str::FromStr for FoiaStatus {
    type Err = String;

    /// Used for query strings, where the status is matched case-insensitively
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(FoiaStatus::Pending),
            "APPLIED" => Ok(FoiaStatus::Applied),
            other => Err(format!(
                "unknown FOIA status '{}', expected PENDING or APPLIED",
                other
            )),
        }
    }
}

impl FoiaStatus {
    /// Resolve a requested status change into the `applied_date` to store.
    ///
    /// - `* -> APPLIED` stamps the requested date, or `now` when none is given;
    ///   repeating it overwrites the previous stamp.
    /// - `PENDING -> PENDING` keeps the date empty.
    /// - `APPLIED -> PENDING` is refused: a filed request cannot be withdrawn.
    /// - A date is never accepted together with `PENDING`.
    pub fn resolve_transition(
        current: FoiaStatus,
        requested: FoiaStatus,
        applied_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>> {
        match (current, requested) {
            (_, FoiaStatus::Applied) => Ok(Some(applied_date.unwrap_or(now))),
            (FoiaStatus::Applied, FoiaStatus::Pending) => Err(AppError::Conflict(
                "FOIA request has already been applied and cannot be reverted to PENDING"
                    .to_string(),
            )),
            (FoiaStatus::Pending, FoiaStatus::Pending) => match applied_date {
                Some(_) => Err(AppError::Validation(
                    "appliedDate can only be set when foiaStatus is APPLIED".to_string(),
                )),
                None => Ok(None),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_apply_stamps_now_when_date_missing() {
        let now = Utc::now();
        let stamped =
            FoiaStatus::resolve_transition(FoiaStatus::Pending, FoiaStatus::Applied, None, now)
                .unwrap();
        assert_eq!(stamped, Some(now));
    }

    #[test]
    fn test_apply_keeps_supplied_date() {
        let now = Utc::now();
        let earlier = now - Duration::days(3);
        let stamped = FoiaStatus::resolve_transition(
            FoiaStatus::Pending,
            FoiaStatus::Applied,
            Some(earlier),
            now,
        )
        .unwrap();
        assert_eq!(stamped, Some(earlier));
    }

    #[test]
    fn test_reapply_overwrites() {
        let now = Utc::now();
        let stamped =
            FoiaStatus::resolve_transition(FoiaStatus::Applied, FoiaStatus::Applied, None, now)
                .unwrap();
        assert_eq!(stamped, Some(now));
    }

    #[test]
    fn test_revert_is_conflict() {
        let result =
            FoiaStatus::resolve_transition(FoiaStatus::Applied, FoiaStatus::Pending, None, Utc::now());
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[test]
    fn test_pending_with_date_is_rejected() {
        let now = Utc::now();
        let result = FoiaStatus::resolve_transition(
            FoiaStatus::Pending,
            FoiaStatus::Pending,
            Some(now),
            now,
        );
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result =
            FoiaStatus::resolve_transition(FoiaStatus::Pending, FoiaStatus::Pending, None, now);
        assert_eq!(result.unwrap(), None);
    }

    #[test]
    fn test_serde_uppercase() {
        assert_eq!(
            serde_json::to_string(&FoiaStatus::Applied).unwrap(),
            r#""APPLIED""#
        );
        let parsed: FoiaStatus = serde_json::from_str(r#""PENDING""#).unwrap();
        assert_eq!(parsed, FoiaStatus::Pending);
        assert!(serde_json::from_str::<FoiaStatus>(r#""pending""#).is_err());
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("applied".parse::<FoiaStatus>(), Ok(FoiaStatus::Applied));
        assert_eq!(" PENDING ".parse::<FoiaStatus>(), Ok(FoiaStatus::Pending));
        assert!("FILED".parse::<FoiaStatus>().is_err());
    }
}
