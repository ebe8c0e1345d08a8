use diesel::{Identifiable, Queryable};
use serde::Serialize;

use crate::utility::last4;

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub phone: String,
}

impl User {
    /// Choice-list label shown during target selection. The `:<id>` suffix is
    /// what the workflow parses back out of the submitted token.
    pub fn choice_label(&self) -> String {
        format!("{} ({}):{}", self.name, last4(&self.phone), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_label_masks_phone_and_ends_with_id() {
        let user = User {
            id: 42,
            name: "홍길동".to_string(),
            phone: "01012345678".to_string(),
        };
        assert_eq!(user.choice_label(), "홍길동 (5678):42");
    }
}
