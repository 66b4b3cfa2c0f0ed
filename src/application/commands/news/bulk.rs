use super::NewsCommandService;
use crate::{
    application::{
        dto::BulkOutcomeDto,
        error::{ApplicationError, ApplicationResult},
        input,
    },
    domain::news::{NewsId, NewsStatus},
};
use serde_json::Value;

const MAX_BULK_IDS: usize = 100;

/// Raw bulk request body; `ids` is kept untyped so malformed arrays produce a
/// validation message instead of a deserialisation failure.
pub struct BulkNewsCommand {
    pub action: String,
    pub ids: Value,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    UpdateStatus(NewsStatus),
    Delete,
}

impl BulkAction {
    fn parse(action: &str, status: Option<&str>) -> ApplicationResult<Self> {
        match action.trim() {
            "updateStatus" | "update_status" => {
                let status = status
                    .filter(|s| !s.trim().is_empty())
                    .ok_or_else(|| ApplicationError::validation("status is required for updateStatus"))?;
                Ok(Self::UpdateStatus(input::parse_status(status)?))
            }
            "delete" => Ok(Self::Delete),
            _ => Err(ApplicationError::validation(
                "action must be one of: updateStatus, delete",
            )),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::UpdateStatus(_) => "updateStatus",
            Self::Delete => "delete",
        }
    }
}

fn parse_ids(ids: &Value) -> ApplicationResult<Vec<NewsId>> {
    let invalid = || ApplicationError::validation("ids must be a non-empty array of integers");
    let items = ids.as_array().filter(|items| !items.is_empty()).ok_or_else(invalid)?;
    if items.len() > MAX_BULK_IDS {
        return Err(ApplicationError::validation(format!(
            "at most {MAX_BULK_IDS} ids may be processed at once"
        )));
    }

    let mut parsed: Vec<NewsId> = Vec::with_capacity(items.len());
    for item in items {
        let raw = item.as_i64().ok_or_else(invalid)?;
        let id = NewsId::new(raw)?;
        if !parsed.contains(&id) {
            parsed.push(id);
        }
    }
    Ok(parsed)
}

impl NewsCommandService {
    pub async fn bulk_news(&self, command: BulkNewsCommand) -> ApplicationResult<BulkOutcomeDto> {
        let action = BulkAction::parse(&command.action, command.status.as_deref())?;
        let ids = parse_ids(&command.ids)?;

        let affected = match action {
            BulkAction::UpdateStatus(status) => {
                let now = self.clock.now();
                self.write_repo.update_status_many(&ids, status, now).await?
            }
            BulkAction::Delete => {
                let existing = self.read_repo.find_by_ids(&ids).await?;
                let removed = self.write_repo.delete_many(&ids).await?;
                for news in &existing {
                    if let Some(path) = news.featured_image.as_deref() {
                        self.discard_image(path).await;
                    }
                }
                removed
            }
        };

        tracing::info!(action = action.name(), requested = ids.len(), affected, "bulk news operation");
        Ok(BulkOutcomeDto {
            action: action.name().to_string(),
            requested: ids.len(),
            affected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_must_be_integers() {
        assert!(parse_ids(&json!([1, 2, 3])).is_ok());
        assert!(parse_ids(&json!([1, "2"])).is_err());
        assert!(parse_ids(&json!([1.5])).is_err());
        assert!(parse_ids(&json!([])).is_err());
        assert!(parse_ids(&json!("1,2")).is_err());
        assert!(parse_ids(&json!([0])).is_err());
    }

    #[test]
    fn duplicate_ids_are_collapsed() {
        assert_eq!(parse_ids(&json!([4, 4, 5])).unwrap().len(), 2);
    }

    #[test]
    fn too_many_ids_are_rejected() {
        let ids: Vec<i64> = (1..=(MAX_BULK_IDS as i64 + 1)).collect();
        assert!(parse_ids(&json!(ids)).is_err());
    }

    #[test]
    fn update_status_requires_valid_status() {
        assert_eq!(
            BulkAction::parse("updateStatus", Some("archived")).unwrap(),
            BulkAction::UpdateStatus(NewsStatus::Archived)
        );
        assert!(BulkAction::parse("updateStatus", None).is_err());
        assert!(BulkAction::parse("updateStatus", Some("hidden")).is_err());
        assert_eq!(BulkAction::parse("delete", None).unwrap(), BulkAction::Delete);
        assert!(BulkAction::parse("purge", None).is_err());
    }
}
