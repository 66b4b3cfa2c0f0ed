use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    if message.contains("news.slug") {
                        DomainError::Conflict("slug already exists".into())
                    } else if message.contains("categories.slug") {
                        DomainError::Conflict("category already exists".into())
                    } else {
                        DomainError::Conflict("unique constraint violated".into())
                    }
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::Validation("referenced category does not exist".into())
                }
                ErrorKind::CheckViolation => {
                    DomainError::Validation("check constraint violated".into())
                }
                ErrorKind::NotNullViolation => {
                    DomainError::Validation("required column missing".into())
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
