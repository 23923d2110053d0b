use crate::operations::domain::{AccessRecord, Client, Employee, Order};

/// Display name used when a referenced person cannot be resolved
pub const UNKNOWN_NAME: &str = "Unknown";

/// Resolves the name of the user who created an order.
///
/// The order's creator id is matched against user `_id`s. A matching user
/// without a first name is shown as `"User"`.
pub fn creator_name(order: &Order, users: &[Employee]) -> String {
    let Some(creator_id) = order.creator_id.as_deref() else {
        return UNKNOWN_NAME.to_string();
    };

    users
        .iter()
        .find(|user| user.id.as_deref() == Some(creator_id))
        .map(|user| user.first_name.clone().unwrap_or_else(|| "User".to_string()))
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

/// Name shown for an access event: the name carried by the event, else
/// the matching client's name.
pub fn member_name(access: &AccessRecord, clients: &[Client]) -> String {
    if let Some(name) = &access.member_name {
        return name.clone();
    }

    access
        .member_id
        .as_deref()
        .and_then(|id| clients.iter().find(|c| c.id.as_deref() == Some(id)))
        .and_then(|client| client.name.clone())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}
