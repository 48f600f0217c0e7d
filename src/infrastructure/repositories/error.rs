use crate::domain::errors::DomainError;

const CNT_ACCOUNT_EMAIL: &str = "accounts_email_key";
const CNT_CART_ACCOUNT: &str = "cart_items_account_id_fkey";
const CNT_CART_QUANTITY_CHECK: &str = "cart_items_quantity_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ACCOUNT_EMAIL => DomainError::DuplicateEmail("email already in use".into()),
                    CNT_CART_ACCOUNT => DomainError::NotFound("account not found".into()),
                    CNT_CART_QUANTITY_CHECK => {
                        DomainError::Validation("quantity must be at least 1".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Persistence("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
